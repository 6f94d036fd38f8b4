//! Bounded numeric values shared between widgets.
//!
//! An [`Adjustment`] holds a value together with its allowed range and the
//! step sizes used by keyboard, wheel and drag interaction. Widgets such as
//! the scale hold an `Arc<Adjustment>` so the owning composite can observe and
//! drive the same value.

use std::fmt;

use parking_lot::Mutex;

use crate::logging::targets;
use crate::signal::Signal;

/// Errors raised when an adjustment is configured with unusable bounds or steps.
#[derive(Debug, Clone, PartialEq)]
pub enum AdjustmentError {
    /// The range is empty, inverted or not finite.
    EmptyRange {
        /// The rejected lower bound.
        lower: f32,
        /// The rejected upper bound.
        upper: f32,
    },
    /// A step size is not positive or not finite.
    InvalidStep {
        /// The rejected minor step.
        minor: f32,
        /// The rejected major step.
        major: f32,
    },
}

impl fmt::Display for AdjustmentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyRange { lower, upper } => {
                write!(f, "range [{lower}, {upper}] is empty")
            }
            Self::InvalidStep { minor, major } => {
                write!(f, "invalid increments (minor {minor}, major {major})")
            }
        }
    }
}

impl std::error::Error for AdjustmentError {}

/// A snapshot of every adjustment field, read under a single lock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdjustmentState {
    /// Current value, always within `[lower, upper]`.
    pub value: f32,
    /// Lower bound.
    pub lower: f32,
    /// Upper bound.
    pub upper: f32,
    /// Step used by arrows, the wheel and dragging.
    pub minor_step: f32,
    /// Step used by page keys.
    pub major_step: f32,
}

impl AdjustmentState {
    /// Width of the range, `upper - lower`.
    pub fn range(&self) -> f32 {
        self.upper - self.lower
    }

    /// Position of the value within the range, in `[0, 1]`.
    ///
    /// Returns 0 when the range is empty or not finite.
    pub fn ratio(&self) -> f32 {
        let range = self.range();
        if !(range > 0.0 && range.is_finite()) {
            return 0.0;
        }
        ((self.value - self.lower) / range).clamp(0.0, 1.0)
    }

    fn clamp(&self, value: f32) -> f32 {
        value.clamp(self.lower, self.upper)
    }
}

impl Default for AdjustmentState {
    fn default() -> Self {
        Self {
            value: 0.0,
            lower: 0.0,
            upper: 100.0,
            minor_step: 1.0,
            major_step: 10.0,
        }
    }
}

/// A clamped value with a range and minor/major steps.
///
/// All mutation goes through `&self`, so an adjustment can be shared through
/// an `Arc` between the widget that displays it and the code that owns it.
///
/// # Example
///
/// ```
/// use trellis_core::Adjustment;
///
/// let adjustment = Adjustment::with_range(-5.0, 5.0).unwrap();
/// adjustment.set_value(-9.0);
/// assert_eq!(adjustment.value(), -5.0);
///
/// // At the lower bound, decrementing changes nothing.
/// assert!(!adjustment.decrement());
/// assert!(adjustment.increment());
/// assert_eq!(adjustment.value(), -4.0);
/// ```
pub struct Adjustment {
    state: Mutex<AdjustmentState>,

    /// Emitted with the new value whenever the value changes.
    pub value_changed: Signal<f32>,
    /// Emitted with `(lower, upper)` after the range changes.
    pub range_changed: Signal<(f32, f32)>,
    /// Emitted with `(minor_step, major_step)` after the steps change.
    pub increments_changed: Signal<(f32, f32)>,
}

impl Adjustment {
    /// Create an adjustment over `[0, 100]` with steps 1 and 10, valued 0.
    pub fn new() -> Self {
        Self {
            state: Mutex::new(AdjustmentState::default()),
            value_changed: Signal::new(),
            range_changed: Signal::new(),
            increments_changed: Signal::new(),
        }
    }

    /// Create an adjustment with the given range and default steps.
    pub fn with_range(lower: f32, upper: f32) -> Result<Self, AdjustmentError> {
        let adjustment = Self::new();
        adjustment.set_range(lower, upper)?;
        Ok(adjustment)
    }

    /// Current value.
    pub fn value(&self) -> f32 {
        self.state.lock().value
    }

    /// Lower bound.
    pub fn lower(&self) -> f32 {
        self.state.lock().lower
    }

    /// Upper bound.
    pub fn upper(&self) -> f32 {
        self.state.lock().upper
    }

    /// Minor step.
    pub fn minor_step(&self) -> f32 {
        self.state.lock().minor_step
    }

    /// Major step.
    pub fn major_step(&self) -> f32 {
        self.state.lock().major_step
    }

    /// Read every field at once.
    pub fn snapshot(&self) -> AdjustmentState {
        *self.state.lock()
    }

    /// Set the value, clamped to the range.
    ///
    /// Returns `true` if the stored value changed. `value_changed` is only
    /// emitted in that case. NaN is ignored.
    pub fn set_value(&self, value: f32) -> bool {
        if value.is_nan() {
            return false;
        }

        let new_value = {
            let mut state = self.state.lock();
            let clamped = state.clamp(value);
            if clamped == state.value {
                return false;
            }
            state.value = clamped;
            clamped
        };

        tracing::trace!(target: targets::ADJUSTMENT, value = new_value, "value changed");
        self.value_changed.emit(new_value);
        true
    }

    /// Add one minor step. Returns `false` at the upper bound.
    pub fn increment(&self) -> bool {
        self.step_by(|s| s.minor_step)
    }

    /// Subtract one minor step. Returns `false` at the lower bound.
    pub fn decrement(&self) -> bool {
        self.step_by(|s| -s.minor_step)
    }

    /// Add one major step. Returns `false` at the upper bound.
    pub fn increment_page(&self) -> bool {
        self.step_by(|s| s.major_step)
    }

    /// Subtract one major step. Returns `false` at the lower bound.
    pub fn decrement_page(&self) -> bool {
        self.step_by(|s| -s.major_step)
    }

    fn step_by(&self, step: impl FnOnce(&AdjustmentState) -> f32) -> bool {
        let target = {
            let state = self.state.lock();
            state.value + step(&state)
        };
        self.set_value(target)
    }

    /// Set the range. The current value is clamped into the new range.
    ///
    /// Fails if either bound is not finite or `upper <= lower`.
    pub fn set_range(&self, lower: f32, upper: f32) -> Result<(), AdjustmentError> {
        if !(lower.is_finite() && upper.is_finite()) || upper <= lower {
            tracing::warn!(target: targets::ADJUSTMENT, lower, upper, "rejected empty range");
            return Err(AdjustmentError::EmptyRange { lower, upper });
        }

        let clamped_value = {
            let mut state = self.state.lock();
            state.lower = lower;
            state.upper = upper;
            let clamped = state.clamp(state.value);
            let changed = clamped != state.value;
            state.value = clamped;
            changed.then_some(clamped)
        };

        tracing::debug!(target: targets::ADJUSTMENT, lower, upper, "range changed");
        self.range_changed.emit((lower, upper));
        if let Some(value) = clamped_value {
            self.value_changed.emit(value);
        }
        Ok(())
    }

    /// Set the minor and major steps.
    ///
    /// The minor step must be positive and the major step non-negative, both
    /// finite.
    pub fn set_increments(&self, minor: f32, major: f32) -> Result<(), AdjustmentError> {
        let valid = minor.is_finite() && major.is_finite() && minor > 0.0 && major >= 0.0;
        if !valid {
            tracing::warn!(target: targets::ADJUSTMENT, minor, major, "rejected increments");
            return Err(AdjustmentError::InvalidStep { minor, major });
        }

        {
            let mut state = self.state.lock();
            state.minor_step = minor;
            state.major_step = major;
        }

        self.increments_changed.emit((minor, major));
        Ok(())
    }
}

impl Default for Adjustment {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Adjustment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Adjustment")
            .field("state", &self.snapshot())
            .finish_non_exhaustive()
    }
}

static_assertions::assert_impl_all!(Adjustment: Send, Sync);
