//! Waterfall configuration and its resolution against a panel width.
//!
//! Resolution happens in two stages: the panel width decides the column
//! count, then gaps and padding are evaluated with both the panel width and
//! the column count, and only then is the column width known.

use std::{fmt, sync::Arc};

use derive_setters::Setters;

use crate::{ColumnCount, ColumnMetrics, Dp, Padding, Px, PxPadding};

/// A value that is either fixed or computed from `(panel_width, column_count)`.
#[derive(Clone)]
pub enum Responsive<T> {
    /// The same value for every panel.
    Fixed(T),
    /// Evaluated after the column count has been resolved.
    Computed(Arc<dyn Fn(Dp, usize) -> T + Send + Sync>),
}

impl<T: Clone> Responsive<T> {
    /// Wraps a function of the panel width and column count.
    pub fn computed<F>(f: F) -> Self
    where
        F: Fn(Dp, usize) -> T + Send + Sync + 'static,
    {
        Self::Computed(Arc::new(f))
    }

    /// Evaluates the value for a panel.
    pub fn resolve(&self, panel_width: Dp, column_count: usize) -> T {
        match self {
            Self::Fixed(value) => value.clone(),
            Self::Computed(f) => f(panel_width, column_count),
        }
    }
}

impl<T> From<T> for Responsive<T> {
    fn from(value: T) -> Self {
        Self::Fixed(value)
    }
}

impl<T: Default> Default for Responsive<T> {
    fn default() -> Self {
        Self::Fixed(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for Responsive<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(value) => f.debug_tuple("Fixed").field(value).finish(),
            Self::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

/// Arguments for a waterfall layout.
///
/// ```
/// use waterfall::{ColumnCount, Dp, Padding, Responsive, WaterfallArgs};
///
/// let args = WaterfallArgs::default()
///     .columns(ColumnCount::adaptive(Dp(180.0)))
///     .vertical_gap(Dp(12.0))
///     .horizontal_gap(Responsive::computed(|_, columns| {
///         if columns > 2 { Dp(16.0) } else { Dp(8.0) }
///     }))
///     .content_padding(Padding::all(Dp(16.0)));
///
/// let resolved = args.resolve(Dp(600.0));
/// assert_eq!(resolved.metrics.count, 3);
/// ```
#[derive(Clone, Debug, Default, Setters)]
#[setters(into)]
pub struct WaterfallArgs {
    /// How many columns the panel is split into.
    pub columns: ColumnCount,
    /// Gap between vertically adjacent items in a column.
    pub vertical_gap: Responsive<Dp>,
    /// Gap between adjacent columns.
    pub horizontal_gap: Responsive<Dp>,
    /// Insets between the panel edges and the content.
    pub content_padding: Responsive<Padding>,
}

impl WaterfallArgs {
    /// Resolves every length for a panel of the given width.
    pub fn resolve(&self, panel_width: Dp) -> ResolvedArgs {
        let column_count = self.columns.resolve(panel_width);
        let vertical_gap = self.vertical_gap.resolve(panel_width, column_count);
        let horizontal_gap = self.horizontal_gap.resolve(panel_width, column_count);
        let padding = self.content_padding.resolve(panel_width, column_count);

        if vertical_gap.0 < 0.0 || horizontal_gap.0 < 0.0 {
            tracing::warn!(
                vertical = vertical_gap.0,
                horizontal = horizontal_gap.0,
                "negative gaps clamped to zero"
            );
        }

        let padding = padding.to_px();
        let metrics = ColumnMetrics::resolve(
            panel_width.to_px(),
            column_count,
            horizontal_gap.sanitized().to_px(),
            padding,
        );

        ResolvedArgs {
            panel_width: panel_width.to_px().non_negative(),
            metrics,
            vertical_gap: vertical_gap.sanitized().to_px(),
            padding,
        }
    }
}

/// Configuration resolved to physical pixels for one panel width.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedArgs {
    /// Panel width.
    pub panel_width: Px,
    /// Column geometry.
    pub metrics: ColumnMetrics,
    /// Gap between vertically adjacent items.
    pub vertical_gap: Px,
    /// Content insets.
    pub padding: PxPadding,
}
