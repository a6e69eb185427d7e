//! Physical pixel lengths, positions, sizes and rectangles.
//!
//! Placement arithmetic accumulates fractional heights (a column width divided
//! by an aspect ratio is rarely integral), so [`Px`] wraps an `f32` rather than
//! an integer. Rounding to device pixels is left to the host.
//!
//! # Coordinate System
//!
//! - Origin (0, 0) at the top-left corner of the panel
//! - X-axis increases to the right
//! - Y-axis increases downward
//!
//! # Example
//!
//! ```
//! use waterfall::{Px, PxPosition, PxRect, PxSize};
//!
//! let origin = PxPosition::new(Px(16.0), Px(24.0));
//! let rect = PxRect::from_position_size(origin, PxSize::new(Px(100.0), Px(50.0)));
//! assert_eq!(rect.bottom(), Px(74.0));
//! ```

use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use crate::dp::Dp;

/// A physical pixel length.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Px(pub f32);

impl Px {
    /// Zero pixels.
    pub const ZERO: Self = Self(0.0);

    /// Creates a new `Px`.
    pub const fn new(value: f32) -> Self {
        Px(value)
    }

    /// The larger of two lengths. NaN loses against any number.
    pub fn max(self, other: Self) -> Self {
        Px(self.0.max(other.0))
    }

    /// Clamps to a finite, non-negative length; NaN and infinities become zero.
    ///
    /// ```
    /// use waterfall::Px;
    ///
    /// assert_eq!(Px(-4.0).non_negative(), Px::ZERO);
    /// assert_eq!(Px(f32::NAN).non_negative(), Px::ZERO);
    /// assert_eq!(Px(3.5).non_negative(), Px(3.5));
    /// ```
    pub fn non_negative(self) -> Self {
        if self.0.is_finite() && self.0 > 0.0 {
            self
        } else {
            Px::ZERO
        }
    }
}

impl Add for Px {
    type Output = Px;

    fn add(self, rhs: Self) -> Self::Output {
        Px(self.0 + rhs.0)
    }
}

impl Sub for Px {
    type Output = Px;

    fn sub(self, rhs: Self) -> Self::Output {
        Px(self.0 - rhs.0)
    }
}

impl AddAssign for Px {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl SubAssign for Px {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl Mul<f32> for Px {
    type Output = Px;

    fn mul(self, rhs: f32) -> Self::Output {
        Px(self.0 * rhs)
    }
}

impl Div<f32> for Px {
    type Output = Px;

    fn div(self, rhs: f32) -> Self::Output {
        Px(self.0 / rhs)
    }
}

impl Neg for Px {
    type Output = Px;

    fn neg(self) -> Self::Output {
        Px(-self.0)
    }
}

impl From<Dp> for Px {
    fn from(dp: Dp) -> Self {
        dp.to_px()
    }
}

impl From<f32> for Px {
    fn from(value: f32) -> Self {
        Px(value)
    }
}

/// A 2D position in physical pixel space.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PxPosition {
    /// Horizontal coordinate.
    pub x: Px,
    /// Vertical coordinate.
    pub y: Px,
}

impl PxPosition {
    /// Creates a position.
    pub const fn new(x: Px, y: Px) -> Self {
        Self { x, y }
    }

    /// Returns this position moved by the given deltas.
    pub fn offset(self, dx: Px, dy: Px) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl Add for PxPosition {
    type Output = PxPosition;

    fn add(self, rhs: Self) -> Self::Output {
        PxPosition::new(self.x + rhs.x, self.y + rhs.y)
    }
}

/// A 2D size in physical pixel space.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PxSize {
    /// Width.
    pub width: Px,
    /// Height.
    pub height: Px,
}

impl PxSize {
    /// Creates a size.
    pub const fn new(width: Px, height: Px) -> Self {
        Self { width, height }
    }
}

/// An axis-aligned rectangle in physical pixel space.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PxRect {
    /// Left edge.
    pub x: Px,
    /// Top edge.
    pub y: Px,
    /// Width.
    pub width: Px,
    /// Height.
    pub height: Px,
}

impl PxRect {
    /// Creates a rectangle from its edges and extent.
    pub const fn new(x: Px, y: Px, width: Px, height: Px) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates a rectangle from a top-left position and a size.
    pub const fn from_position_size(position: PxPosition, size: PxSize) -> Self {
        Self {
            x: position.x,
            y: position.y,
            width: size.width,
            height: size.height,
        }
    }

    /// Top-left corner.
    pub fn position(&self) -> PxPosition {
        PxPosition::new(self.x, self.y)
    }

    /// Width and height.
    pub fn size(&self) -> PxSize {
        PxSize::new(self.width, self.height)
    }

    /// Right edge.
    pub fn right(&self) -> Px {
        self.x + self.width
    }

    /// Bottom edge.
    pub fn bottom(&self) -> Px {
        self.y + self.height
    }

    /// Returns `true` when the vertical span `[top, bottom]` touches this
    /// rectangle's vertical span. Edges count as touching.
    pub fn intersects_vertical(&self, top: Px, bottom: Px) -> bool {
        self.bottom() >= top && self.y <= bottom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_px_arithmetic() {
        let a = Px(10.0);
        let b = Px(4.0);

        assert_eq!(a + b, Px(14.0));
        assert_eq!(a - b, Px(6.0));
        assert_eq!(a * 2.0, Px(20.0));
        assert_eq!(a / 4.0, Px(2.5));
        assert_eq!(-a, Px(-10.0));

        let mut c = a;
        c += b;
        c -= Px(1.0);
        assert_eq!(c, Px(13.0));
    }

    #[test]
    fn test_px_max() {
        assert_eq!(Px(3.0).max(Px(7.0)), Px(7.0));
        assert_eq!(Px(f32::NAN).max(Px(1.0)), Px(1.0));
    }

    #[test]
    fn test_rect_edges() {
        let rect = PxRect::new(Px(10.0), Px(20.0), Px(30.0), Px(40.0));
        assert_eq!(rect.right(), Px(40.0));
        assert_eq!(rect.bottom(), Px(60.0));
        assert_eq!(rect.position(), PxPosition::new(Px(10.0), Px(20.0)));
        assert_eq!(rect.size(), PxSize::new(Px(30.0), Px(40.0)));
    }

    #[test]
    fn test_rect_vertical_intersection() {
        let rect = PxRect::new(Px::ZERO, Px(100.0), Px(50.0), Px(50.0));
        assert!(rect.intersects_vertical(Px(0.0), Px(100.0)));
        assert!(rect.intersects_vertical(Px(120.0), Px(130.0)));
        assert!(rect.intersects_vertical(Px(150.0), Px(400.0)));
        assert!(!rect.intersects_vertical(Px(0.0), Px(99.0)));
        assert!(!rect.intersects_vertical(Px(151.0), Px(400.0)));
    }

    #[test]
    fn test_position_offset() {
        let pos = PxPosition::new(Px(10.0), Px(-5.0));
        assert_eq!(pos.offset(Px(2.0), Px(3.0)), PxPosition::new(Px(12.0), Px(-2.0)));
        assert_eq!(
            pos + PxPosition::new(Px(1.0), Px(1.0)),
            PxPosition::new(Px(11.0), Px(-4.0))
        );
    }
}
