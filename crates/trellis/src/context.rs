//! The process-wide active engine.

use std::sync::{Arc, OnceLock};

use parking_lot::RwLock;

use crate::engine::{BrewEngine, Engine};
use crate::logging::targets;

static ACTIVE_ENGINE: OnceLock<RwLock<Arc<dyn Engine>>> = OnceLock::new();

fn active() -> &'static RwLock<Arc<dyn Engine>> {
    ACTIVE_ENGINE.get_or_init(|| {
        tracing::debug!(target: targets::ENGINE, "initializing default BREW engine");
        RwLock::new(Arc::new(BrewEngine::from_environment()))
    })
}

/// Access to process-wide toolkit state.
///
/// Widgets capture the active engine when they are created; changing it
/// affects widgets created afterwards. Use
/// [`Scale::set_engine`](crate::widget::widgets::Scale::set_engine) to
/// change an existing widget.
pub struct Context;

impl Context {
    /// The active engine, a [`BrewEngine`] configured from the environment
    /// unless replaced.
    pub fn engine() -> Arc<dyn Engine> {
        active().read().clone()
    }

    /// Replace the active engine, returning the previous one.
    pub fn set_engine(engine: Arc<dyn Engine>) -> Arc<dyn Engine> {
        tracing::debug!(target: targets::ENGINE, "active engine replaced");
        std::mem::replace(&mut *active().write(), engine)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_engine_swaps_and_returns_previous() {
        let replacement: Arc<dyn Engine> = Arc::new(BrewEngine::new());
        let previous = Context::set_engine(replacement.clone());
        assert!(Arc::ptr_eq(&Context::engine(), &replacement));

        let restored = Context::set_engine(previous);
        assert!(Arc::ptr_eq(&restored, &replacement));
    }
}
