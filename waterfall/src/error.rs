//! Errors reported to the host.

use thiserror::Error;

/// Failures the engine reports instead of silently corrupting a layout.
///
/// Configuration problems are not errors: they are clamped to safe values and
/// logged, so a host render pass never halts on a bad gap or column count.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WaterfallError {
    /// A measured size cannot be turned into an aspect ratio.
    #[error("invalid measurement {width}x{height}: both sides must be finite and positive")]
    InvalidMeasurement {
        /// Reported width in physical pixels.
        width: f32,
        /// Reported height in physical pixels.
        height: f32,
    },
    /// An aspect ratio is zero, negative, NaN or infinite.
    #[error("invalid aspect ratio {0}: must be finite and positive")]
    InvalidAspectRatio(f32),
    /// The item list contains the same key twice.
    #[error("duplicate item key at index {index}")]
    DuplicateKey {
        /// Index of the second occurrence.
        index: usize,
    },
}
