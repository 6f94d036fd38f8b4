//! Style rules and stylesheets.

mod rule;
mod stylesheet;

pub use rule::{Declaration, StyleRule};
pub use stylesheet::{StylePriority, StyleSheet};
