//! Style resolution engine.

mod cache;
mod engine;

pub use cache::{PropertyCache, PropertyCacheKey};
pub use engine::StyleEngine;
