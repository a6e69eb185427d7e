//! Column count derivation and column geometry.

use std::{fmt, sync::Arc};

use crate::{Dp, Px, padding::PxPadding};

/// Upper bound on the number of columns any configuration resolves to.
pub const MAX_COLUMNS: usize = 1024;

/// Minimum column width as a function of the panel width.
pub type MinWidthFn = Arc<dyn Fn(Dp) -> Dp + Send + Sync>;

/// Defines how many columns a panel is split into.
#[derive(Clone)]
pub enum ColumnCount {
    /// A fixed number of columns. Zero is treated as one.
    Fixed(usize),
    /// As many columns as fit while each stays at least this wide.
    Adaptive(Dp),
    /// Like [`ColumnCount::Adaptive`], with the minimum width derived from the
    /// panel width.
    AdaptiveWith(MinWidthFn),
}

impl ColumnCount {
    /// Creates a fixed column count.
    pub fn fixed(count: usize) -> Self {
        Self::Fixed(count)
    }

    /// Creates an adaptive column count with a constant minimum width.
    pub fn adaptive(min_width: Dp) -> Self {
        Self::Adaptive(min_width)
    }

    /// Creates an adaptive column count whose minimum width depends on the
    /// panel width.
    pub fn adaptive_with<F>(min_width: F) -> Self
    where
        F: Fn(Dp) -> Dp + Send + Sync + 'static,
    {
        Self::AdaptiveWith(Arc::new(min_width))
    }

    /// Resolves the number of columns for a panel, always in
    /// `1..=MAX_COLUMNS`.
    ///
    /// ```
    /// use waterfall::{ColumnCount, Dp};
    ///
    /// assert_eq!(ColumnCount::adaptive(Dp(200.0)).resolve(Dp(650.0)), 3);
    /// assert_eq!(ColumnCount::adaptive(Dp(200.0)).resolve(Dp(10.0)), 1);
    /// assert_eq!(ColumnCount::fixed(0).resolve(Dp(650.0)), 1);
    /// ```
    pub fn resolve(&self, panel_width: Dp) -> usize {
        let count = match self {
            Self::Fixed(count) => {
                if *count == 0 {
                    tracing::warn!("column count of zero clamped to one");
                }
                (*count).max(1)
            }
            Self::Adaptive(min_width) => adaptive_count(panel_width, *min_width),
            Self::AdaptiveWith(min_width) => adaptive_count(panel_width, min_width(panel_width)),
        };
        if count > MAX_COLUMNS {
            tracing::warn!(count, max = MAX_COLUMNS, "column count clamped");
            return MAX_COLUMNS;
        }
        count
    }
}

impl Default for ColumnCount {
    fn default() -> Self {
        Self::Adaptive(Dp(200.0))
    }
}

impl fmt::Debug for ColumnCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(count) => f.debug_tuple("Fixed").field(count).finish(),
            Self::Adaptive(min_width) => f.debug_tuple("Adaptive").field(min_width).finish(),
            Self::AdaptiveWith(_) => f.write_str("AdaptiveWith(..)"),
        }
    }
}

fn adaptive_count(panel_width: Dp, min_width: Dp) -> usize {
    if !min_width.0.is_finite() || min_width.0 <= 0.0 {
        tracing::warn!(min_width = min_width.0, "invalid minimum column width, using one column");
        return 1;
    }
    let count = (panel_width.0 / min_width.0).floor();
    if !count.is_finite() || count < 1.0 {
        return 1;
    }
    // Saturating cast; the caller clamps to MAX_COLUMNS.
    count as usize
}

/// Resolved horizontal geometry of the columns.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnMetrics {
    /// Number of columns, at least one.
    pub count: usize,
    /// Width of each column.
    pub width: Px,
    /// Gap between adjacent columns.
    pub gap: Px,
    /// Left edge of the first column.
    pub origin: Px,
}

impl ColumnMetrics {
    /// Splits the panel into `count` equal columns.
    ///
    /// Horizontal padding and the `count - 1` gaps are removed from the panel
    /// width first; the remainder is shared equally and never negative.
    ///
    /// ```
    /// use waterfall::{ColumnMetrics, Px, PxPadding};
    ///
    /// let padding = PxPadding { left: Px(10.0), right: Px(10.0), ..Default::default() };
    /// let metrics = ColumnMetrics::resolve(Px(420.0), 2, Px(20.0), padding);
    /// assert_eq!(metrics.width, Px(190.0));
    /// assert_eq!(metrics.column_x(1), Px(220.0));
    /// ```
    pub fn resolve(panel_width: Px, count: usize, gap: Px, padding: PxPadding) -> Self {
        let count = count.clamp(1, MAX_COLUMNS);
        let gap = gap.non_negative();
        let gaps = gap * (count - 1) as f32;
        let available = (panel_width.non_negative() - padding.horizontal() - gaps).non_negative();
        Self {
            count,
            width: available / count as f32,
            gap,
            origin: padding.left,
        }
    }

    /// Left edge of `column`.
    pub fn column_x(&self, column: usize) -> Px {
        self.origin + (self.width + self.gap) * column as f32
    }

    /// Total width spanned by all columns and gaps.
    pub fn span(&self) -> Px {
        self.width * self.count as f32 + self.gap * (self.count - 1) as f32
    }
}
