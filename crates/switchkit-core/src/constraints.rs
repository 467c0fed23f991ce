//! Size constraints passed down during measurement.

use crate::geometry::Size;
use serde::{Deserialize, Serialize};

/// Smallest and largest size a widget may take.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Constraints {
    /// Lower bound
    pub min: Size,
    /// Upper bound, possibly infinite
    pub max: Size,
}

impl Constraints {
    /// Constraints between `min` and `max`.
    #[must_use]
    pub const fn new(min: Size, max: Size) -> Self {
        Self { min, max }
    }

    /// Only `size` is allowed.
    #[must_use]
    pub const fn tight(size: Size) -> Self {
        Self::new(size, size)
    }

    /// No upper bound.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self::new(Size::ZERO, Size::new(f32::INFINITY, f32::INFINITY))
    }

    /// Whether only one size satisfies these constraints.
    #[must_use]
    pub fn is_tight(&self) -> bool {
        self.min == self.max
    }

    /// Clamp `size` into range; the lower bound wins if the range is inverted.
    #[must_use]
    pub fn constrain(&self, size: Size) -> Size {
        Size::new(
            size.width.min(self.max.width).max(self.min.width),
            size.height.min(self.max.height).max(self.min.height),
        )
    }
}

impl Default for Constraints {
    fn default() -> Self {
        Self::unbounded()
    }
}
