//! Core systems for Trellis.
//!
//! This crate provides the foundational pieces every Trellis widget builds on:
//!
//! - **Object Model**: Unique object ids, naming and type names via a global registry
//! - **Signal/Slot System**: Type-safe change notification
//! - **Adjustment**: A shared, clamped numeric value with minor and major steps
//! - **Logging**: `tracing` targets for filtering each subsystem
//!
//! # Signal/Slot Example
//!
//! ```
//! use trellis_core::Signal;
//!
//! let value_changed = Signal::<f32>::new();
//!
//! let conn_id = value_changed.connect(|value| {
//!     println!("Value changed to: {}", value);
//! });
//!
//! value_changed.emit(4.0);
//! value_changed.disconnect(conn_id);
//! ```
//!
//! # Adjustment Example
//!
//! ```
//! use trellis_core::Adjustment;
//!
//! let adjustment = Adjustment::new();
//! adjustment.set_range(0.0, 10.0).unwrap();
//! adjustment.set_increments(2.0, 5.0).unwrap();
//!
//! adjustment.increment();
//! assert_eq!(adjustment.value(), 2.0);
//!
//! adjustment.set_value(42.0);
//! assert_eq!(adjustment.value(), 10.0);
//! ```

pub mod adjustment;
mod error;
pub mod logging;
pub mod object;
pub mod signal;

pub use adjustment::{Adjustment, AdjustmentError, AdjustmentState};
pub use error::{Result, TrellisError};
pub use logging::PerfSpan;
pub use object::{
    global_registry, Object, ObjectBase, ObjectError, ObjectId, ObjectRegistry, ObjectResult,
};
pub use signal::{ConnectionGuard, ConnectionId, Signal};
