//! CSS selector types and matching.

mod matcher;
mod specificity;
mod types;

pub use matcher::{SelectorMatcher, WidgetMatchContext, WidgetState};
pub use specificity::Specificity;
pub use types::*;
