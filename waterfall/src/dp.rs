//! # Density-Independent Pixels (Dp)
//!
//! Configuration lengths (gaps, padding, minimum column widths, panel widths
//! reported by the host) are expressed in [`Dp`]. The placement scan itself
//! runs in physical pixels ([`Px`]), so every `Dp` is converted once, when a
//! configuration is resolved against a panel width.
//!
//! ## Scale Factor
//!
//! The conversion is controlled by the process-wide [`SCALE_FACTOR`]. Hosts set
//! it once from the display density with [`set_scale_factor`]; until then it
//! reads as `1.0`.
//!
//! ```
//! use waterfall::{Dp, Px};
//!
//! let gap = Dp(8.0);
//! let px: Px = gap.to_px();
//! assert_eq!(Dp::from(px), gap);
//! ```

use std::{
    ops::{Add, Mul, Sub},
    sync::OnceLock,
};

use parking_lot::RwLock;

use crate::Px;

/// Global scale factor for converting between density-independent pixels and
/// physical pixels.
///
/// The value is the number of physical pixels per dp. Read through
/// [`scale_factor`], written through [`set_scale_factor`].
pub static SCALE_FACTOR: OnceLock<RwLock<f64>> = OnceLock::new();

/// Returns the current scale factor, `1.0` when none was set.
pub fn scale_factor() -> f64 {
    SCALE_FACTOR.get().map(|lock| *lock.read()).unwrap_or(1.0)
}

/// Updates the global scale factor.
///
/// Non-finite or non-positive factors are ignored and logged, the previous
/// factor stays in effect.
pub fn set_scale_factor(factor: f64) {
    if !factor.is_finite() || factor <= 0.0 {
        tracing::warn!(factor, "ignoring invalid scale factor");
        return;
    }
    let lock = SCALE_FACTOR.get_or_init(|| RwLock::new(1.0));
    *lock.write() = factor;
}

/// Density-independent pixels.
///
/// Wraps an `f64` so values survive arithmetic on configuration callbacks
/// without rounding; conversion to [`Px`] applies the global scale factor.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Dp(pub f64);

impl Dp {
    /// Zero dp.
    pub const ZERO: Self = Self(0.0);

    /// Creates a new `Dp`. Usable in const contexts.
    ///
    /// ```
    /// use waterfall::Dp;
    ///
    /// const MIN_COLUMN: Dp = Dp::new(200.0);
    /// assert_eq!(MIN_COLUMN.0, 200.0);
    /// ```
    pub const fn new(value: f64) -> Self {
        Dp(value)
    }

    /// Converts to physical pixels using the current scale factor.
    pub fn to_pixels_f64(&self) -> f64 {
        self.0 * scale_factor()
    }

    /// Converts to physical pixels as `f32`.
    pub fn to_pixels_f32(&self) -> f32 {
        self.to_pixels_f64() as f32
    }

    /// Creates a `Dp` from physical pixels using the current scale factor.
    pub fn from_pixels_f64(value: f64) -> Self {
        Dp(value / scale_factor())
    }

    /// Converts to a [`Px`] length.
    pub fn to_px(&self) -> Px {
        Px::new(self.to_pixels_f32())
    }

    /// Returns `self` when it is a finite, non-negative length, zero otherwise.
    pub fn sanitized(self) -> Self {
        if self.0.is_finite() && self.0 > 0.0 {
            self
        } else {
            Dp::ZERO
        }
    }
}

impl From<f64> for Dp {
    fn from(value: f64) -> Self {
        Dp::new(value)
    }
}

impl From<Px> for Dp {
    fn from(px: Px) -> Self {
        Dp::from_pixels_f64(px.0 as f64)
    }
}

impl Add for Dp {
    type Output = Dp;

    fn add(self, rhs: Self) -> Self::Output {
        Dp(self.0 + rhs.0)
    }
}

impl Sub for Dp {
    type Output = Dp;

    fn sub(self, rhs: Self) -> Self::Output {
        Dp(self.0 - rhs.0)
    }
}

impl Mul<f64> for Dp {
    type Output = Dp;

    fn mul(self, rhs: f64) -> Self::Output {
        Dp(self.0 * rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dp_arithmetic() {
        assert_eq!(Dp(10.0) + Dp(5.0), Dp(15.0));
        assert_eq!(Dp(10.0) - Dp(5.0), Dp(5.0));
        assert_eq!(Dp(10.0) * 1.5, Dp(15.0));
    }

    #[test]
    fn test_dp_sanitized() {
        assert_eq!(Dp(12.0).sanitized(), Dp(12.0));
        assert_eq!(Dp(-3.0).sanitized(), Dp::ZERO);
        assert_eq!(Dp(f64::NAN).sanitized(), Dp::ZERO);
        assert_eq!(Dp(f64::INFINITY).sanitized(), Dp::ZERO);
    }
}
