//! The column placement scan.
//!
//! An item's column and vertical offset are a pure function of the items
//! before it, their aspect ratios, the column width, the vertical gap and the
//! column count. Nothing is persisted between calls, so any ratio update is
//! reflected by simply scanning again.
//!
//! [`place`] replays the predecessors of one target. [`place_all`] produces
//! the same answer for every item in a single pass and is what the controller
//! runs on each re-layout.

use crate::{ColumnOccupation, Px, RatioSource};

/// Column and vertical offset assigned to one item.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Placement {
    /// Column index in `[0, column_count)`.
    pub column: usize,
    /// Distance from the top of the content area to the item's top edge.
    pub offset: Px,
}

/// Places `target` by replaying every item before it.
///
/// Each predecessor is laid out at `column_width / ratio` tall and dropped
/// into the shortest column (lowest index on ties), followed by
/// `vertical_gap`. The target takes the shortest column left after the
/// replay; its own height is not added. When `target` does not occur in
/// `keys` the whole list is replayed, which is where an appended item would
/// land.
///
/// `column_count` is clamped to `1..=MAX_COLUMNS`; negative widths and gaps
/// count as zero.
///
/// ```
/// use std::collections::HashMap;
/// use waterfall::{Placement, Px, place};
///
/// let keys = ["a", "b", "c"];
/// let ratios = HashMap::from([("a", 1.0f32), ("b", 2.0)]);
///
/// let placement = place(&"c", &keys, &ratios, Px(100.0), Px::ZERO, 2);
/// assert_eq!(placement, Placement { column: 1, offset: Px(50.0) });
/// ```
pub fn place<K, R>(
    target: &K,
    keys: &[K],
    ratios: &R,
    column_width: Px,
    vertical_gap: Px,
    column_count: usize,
) -> Placement
where
    K: PartialEq,
    R: RatioSource<K> + ?Sized,
{
    let column_width = column_width.non_negative();
    let vertical_gap = vertical_gap.non_negative();
    let mut occupation = ColumnOccupation::new(column_count);

    for key in keys.iter().take_while(|key| *key != target) {
        let height = ratios.ratio(key).height_for(column_width);
        occupation.push(height + vertical_gap);
    }

    let (column, offset) = occupation.shortest();
    Placement { column, offset }
}

/// Places every item in one pass.
///
/// Entry `i` equals `place(&keys[i], keys, ...)` whenever keys are unique:
/// the scan for item `i` is exactly the first `i` steps of this one.
pub fn place_all<K, R>(
    keys: &[K],
    ratios: &R,
    column_width: Px,
    vertical_gap: Px,
    column_count: usize,
) -> Vec<Placement>
where
    R: RatioSource<K> + ?Sized,
{
    let column_width = column_width.non_negative();
    let vertical_gap = vertical_gap.non_negative();
    let mut occupation = ColumnOccupation::new(column_count);

    keys.iter()
        .map(|key| {
            let height = ratios.ratio(key).height_for(column_width);
            let (column, offset) = occupation.push(height + vertical_gap);
            Placement { column, offset }
        })
        .collect()
}
