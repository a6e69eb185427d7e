//! Four-sided content insets.

use crate::{Dp, Px};

/// Padding values in density-independent pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Padding {
    /// Left padding.
    pub left: Dp,
    /// Top padding.
    pub top: Dp,
    /// Right padding.
    pub right: Dp,
    /// Bottom padding.
    pub bottom: Dp,
}

impl Padding {
    /// Creates padding with explicit edges.
    pub const fn new(left: Dp, top: Dp, right: Dp, bottom: Dp) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Creates symmetric padding on all edges.
    pub const fn all(value: Dp) -> Self {
        Self::new(value, value, value, value)
    }

    /// Creates symmetric padding for horizontal and vertical edges.
    pub const fn symmetric(horizontal: Dp, vertical: Dp) -> Self {
        Self::new(horizontal, vertical, horizontal, vertical)
    }

    /// Converts every edge to physical pixels. Negative or non-finite edges
    /// become zero.
    pub fn to_px(&self) -> PxPadding {
        PxPadding {
            left: self.left.to_px().non_negative(),
            top: self.top.to_px().non_negative(),
            right: self.right.to_px().non_negative(),
            bottom: self.bottom.to_px().non_negative(),
        }
    }
}

/// Padding resolved to physical pixels, every edge non-negative.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PxPadding {
    /// Left padding.
    pub left: Px,
    /// Top padding.
    pub top: Px,
    /// Right padding.
    pub right: Px,
    /// Bottom padding.
    pub bottom: Px,
}

impl PxPadding {
    /// Sum of the left and right edges.
    pub fn horizontal(&self) -> Px {
        self.left + self.right
    }

    /// Sum of the top and bottom edges.
    pub fn vertical(&self) -> Px {
        self.top + self.bottom
    }
}
