//! Full layout passes and their output.

use std::ops::Range;

use crate::{Placement, Px, PxRect, RatioSource, ResolvedArgs, place_all};

/// One item after a layout pass.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PlacedItem {
    /// Position in the item list.
    pub index: usize,
    /// Column and offset within the content area.
    pub placement: Placement,
    /// Height derived from the column width and the item's aspect ratio.
    pub height: Px,
    /// Rectangle in panel coordinates, padding and gaps applied.
    pub rect: PxRect,
}

/// Result of laying out every item for one panel width.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct WaterfallLayout {
    items: Vec<PlacedItem>,
    column_count: usize,
    column_width: Px,
    content_height: Px,
    scroll_extent: Px,
}

impl WaterfallLayout {
    /// Lays out `keys` in order against resolved arguments.
    pub fn compute<K, R>(keys: &[K], ratios: &R, args: &ResolvedArgs) -> Self
    where
        R: RatioSource<K> + ?Sized,
    {
        let metrics = &args.metrics;
        let placements = place_all(
            keys,
            ratios,
            metrics.width,
            args.vertical_gap,
            metrics.count,
        );

        let mut content_height = Px::ZERO;
        let items: Vec<PlacedItem> = keys
            .iter()
            .zip(placements)
            .enumerate()
            .map(|(index, (key, placement))| {
                let height = ratios.ratio(key).height_for(metrics.width);
                content_height = content_height.max(placement.offset + height);
                PlacedItem {
                    index,
                    placement,
                    height,
                    rect: PxRect::new(
                        metrics.column_x(placement.column),
                        args.padding.top + placement.offset,
                        metrics.width,
                        height,
                    ),
                }
            })
            .collect();

        Self {
            items,
            column_count: metrics.count,
            column_width: metrics.width,
            content_height,
            scroll_extent: args.padding.top + content_height + args.padding.bottom,
        }
    }

    /// Placed items in list order.
    pub fn items(&self) -> &[PlacedItem] {
        &self.items
    }

    /// The placed item at `index`.
    pub fn get(&self, index: usize) -> Option<&PlacedItem> {
        self.items.get(index)
    }

    /// Number of placed items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` when nothing was placed.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of columns used.
    pub fn column_count(&self) -> usize {
        self.column_count
    }

    /// Width of each column.
    pub fn column_width(&self) -> Px {
        self.column_width
    }

    /// Largest `offset + height` over all items, zero when empty.
    pub fn content_height(&self) -> Px {
        self.content_height
    }

    /// Height of the scrollable content: top padding, content, bottom padding.
    pub fn scroll_extent(&self) -> Px {
        self.scroll_extent
    }

    /// Smallest index range covering every item that intersects the viewport,
    /// widened by `overscan` items on both sides.
    ///
    /// Items of a masonry layout are not sorted by position, so the range may
    /// include a few items that are themselves off screen. When nothing
    /// intersects (scrolled past the end) the last item is returned so hosts
    /// always keep something mounted.
    pub fn visible_range(
        &self,
        scroll_offset: Px,
        viewport_height: Px,
        overscan: usize,
    ) -> Range<usize> {
        let total = self.items.len();
        if total == 0 {
            return 0..0;
        }

        let top = scroll_offset.max(Px::ZERO);
        let bottom = top + viewport_height.non_negative();
        let mut first = None;
        let mut last = None;
        for item in &self.items {
            if item.rect.intersects_vertical(top, bottom) {
                if first.is_none() {
                    first = Some(item.index);
                }
                last = Some(item.index);
            }
        }

        let (start, end) = match (first, last) {
            (Some(start), Some(end)) => (start, end + 1),
            _ => (total - 1, total),
        };

        start.saturating_sub(overscan)..end.saturating_add(overscan).min(total)
    }
}
