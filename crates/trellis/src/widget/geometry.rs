//! Size hints and size policies.
//!
//! There is no layout engine in Trellis: whoever owns a widget reads its
//! [`SizeHint`] and [`SizePolicyPair`] and assigns the allocation itself.

use trellis_render::Size;

/// How a widget tolerates being given something other than its hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SizePolicy {
    /// Exactly the hint.
    Fixed,
    /// The hint, or more.
    Minimum,
    /// The hint, or less.
    Maximum,
    /// Anything; the hint is a suggestion.
    #[default]
    Preferred,
    /// Anything, and as much as possible.
    Expanding,
}

impl SizePolicy {
    #[inline]
    pub fn can_grow(self) -> bool {
        !matches!(self, Self::Fixed | Self::Maximum)
    }

    #[inline]
    pub fn can_shrink(self) -> bool {
        !matches!(self, Self::Fixed | Self::Minimum)
    }
}

/// Policies for both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SizePolicyPair {
    pub horizontal: SizePolicy,
    pub vertical: SizePolicy,
}

impl SizePolicyPair {
    pub fn new(horizontal: SizePolicy, vertical: SizePolicy) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    /// The pair for the other orientation.
    pub fn transposed(self) -> Self {
        Self::new(self.vertical, self.horizontal)
    }
}

/// What a widget would like to be allocated.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SizeHint {
    pub preferred: Size,
    /// Smallest usable size, if the widget has one.
    pub minimum: Option<Size>,
}

impl SizeHint {
    pub fn new(preferred: Size) -> Self {
        Self {
            preferred,
            minimum: None,
        }
    }

    pub fn from_dimensions(width: f32, height: f32) -> Self {
        Self::new(Size::new(width, height))
    }

    pub fn with_minimum(mut self, minimum: Size) -> Self {
        self.minimum = Some(minimum);
        self
    }

    /// The preferred size raised to the minimum where it falls short.
    pub fn effective(&self) -> Size {
        match self.minimum {
            Some(min) => Size::new(
                self.preferred.width.max(min.width),
                self.preferred.height.max(min.height),
            ),
            None => self.preferred,
        }
    }

    /// The hint for the other orientation.
    pub fn transposed(self) -> Self {
        Self {
            preferred: self.preferred.transposed(),
            minimum: self.minimum.map(Size::transposed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_neither_grows_nor_shrinks() {
        assert!(!SizePolicy::Fixed.can_grow());
        assert!(!SizePolicy::Fixed.can_shrink());
        assert!(SizePolicy::Minimum.can_grow() && !SizePolicy::Minimum.can_shrink());
        assert!(!SizePolicy::Maximum.can_grow() && SizePolicy::Maximum.can_shrink());
        assert!(SizePolicy::Expanding.can_grow() && SizePolicy::Expanding.can_shrink());
    }

    #[test]
    fn policies_swap_axes() {
        let horizontal_slider = SizePolicyPair::new(SizePolicy::Expanding, SizePolicy::Fixed);
        assert_eq!(
            horizontal_slider.transposed(),
            SizePolicyPair::new(SizePolicy::Fixed, SizePolicy::Expanding)
        );
    }

    #[test]
    fn effective_size_respects_minimum() {
        let hint = SizeHint::from_dimensions(0.0, 12.0).with_minimum(Size::new(20.0, 10.0));
        assert_eq!(hint.effective(), Size::new(20.0, 12.0));

        let vertical = hint.transposed();
        assert_eq!(vertical.preferred, Size::new(12.0, 0.0));
        assert_eq!(vertical.effective(), Size::new(12.0, 20.0));
    }
}
