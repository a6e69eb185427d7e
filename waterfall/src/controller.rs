//! Host-facing state for one waterfall.
//!
//! The controller owns everything that outlives a single layout pass: the
//! item list, measured aspect ratios, the panel width and the rectangles the
//! host reports after positioning. Every input change marks the cached layout
//! dirty; [`WaterfallController::layout`] recomputes it on demand.

use std::hash::Hash;

use rustc_hash::FxHashMap;
use tracing::{debug, trace, warn};

use crate::{
    AspectRatio, AspectRatioCache, Dp, PlacedItem, Px, PxRect, PxSize, WaterfallArgs,
    WaterfallError, WaterfallLayout,
};

/// Persistent state of a waterfall, driven by host events.
///
/// ```
/// use waterfall::{ColumnCount, Dp, Px, PxSize, WaterfallArgs, WaterfallController};
///
/// let mut controller = WaterfallController::new(
///     WaterfallArgs::default().columns(ColumnCount::fixed(2)),
/// );
/// controller.set_items(["a", "b", "c"]).unwrap();
/// controller.set_panel_width(Dp(200.0));
///
/// // "b" rendered twice as wide as it is tall.
/// controller
///     .record_item_size("b", PxSize::new(Px(100.0), Px(50.0)))
///     .unwrap();
///
/// let c = controller.placement_of(&"c").unwrap();
/// assert_eq!(c.placement.column, 1);
/// assert_eq!(c.placement.offset, Px(50.0));
/// ```
pub struct WaterfallController<K> {
    args: WaterfallArgs,
    keys: Vec<K>,
    positions: FxHashMap<K, usize>,
    ratios: AspectRatioCache<K>,
    bounds: FxHashMap<K, PxRect>,
    panel_width: Dp,
    layout: WaterfallLayout,
    dirty: bool,
}

impl<K> WaterfallController<K>
where
    K: Hash + Eq + Clone,
{
    /// Creates an empty controller. The panel width starts at zero until the
    /// host reports one.
    pub fn new(args: WaterfallArgs) -> Self {
        Self {
            args,
            keys: Vec::new(),
            positions: FxHashMap::default(),
            ratios: AspectRatioCache::new(),
            bounds: FxHashMap::default(),
            panel_width: Dp::ZERO,
            layout: WaterfallLayout::default(),
            dirty: true,
        }
    }

    /// Current arguments.
    pub fn args(&self) -> &WaterfallArgs {
        &self.args
    }

    /// Replaces the arguments.
    pub fn set_args(&mut self, args: WaterfallArgs) {
        self.args = args;
        self.dirty = true;
    }

    /// Item keys in layout order.
    pub fn keys(&self) -> &[K] {
        &self.keys
    }

    /// Replaces the item list.
    ///
    /// Keys must be unique; on a duplicate nothing changes and the index of
    /// the second occurrence is reported. Measured ratios are kept for every
    /// key, including removed ones, while reported bounds of removed keys are
    /// dropped.
    pub fn set_items<I>(&mut self, items: I) -> Result<(), WaterfallError>
    where
        I: IntoIterator<Item = K>,
    {
        let keys: Vec<K> = items.into_iter().collect();
        let mut positions = FxHashMap::default();
        positions.reserve(keys.len());
        for (index, key) in keys.iter().enumerate() {
            if positions.insert(key.clone(), index).is_some() {
                warn!(index, "rejected item list with duplicate key");
                return Err(WaterfallError::DuplicateKey { index });
            }
        }

        if keys != self.keys {
            self.bounds.retain(|key, _| positions.contains_key(key));
            self.keys = keys;
            self.positions = positions;
            self.dirty = true;
        }
        Ok(())
    }

    /// Replaces the item list, deriving each key with `key_of`.
    pub fn set_items_by<T, F>(&mut self, items: &[T], key_of: F) -> Result<(), WaterfallError>
    where
        F: FnMut(&T) -> K,
    {
        self.set_items(items.iter().map(key_of))
    }

    /// Current panel width.
    pub fn panel_width(&self) -> Dp {
        self.panel_width
    }

    /// Reports a new panel width.
    pub fn set_panel_width(&mut self, width: Dp) {
        if width != self.panel_width {
            trace!(width = width.0, "panel resized");
            self.panel_width = width;
            self.dirty = true;
        }
    }

    /// Reports a new panel width in physical pixels.
    pub fn set_panel_width_px(&mut self, width: Px) {
        self.set_panel_width(Dp::from(width));
    }

    /// Reports the rendered size of an item.
    ///
    /// Returns whether the stored ratio changed. Sizes that cannot form a
    /// ratio are rejected; the item keeps its previous ratio. Keys that are not
    /// in the list yet are still remembered.
    pub fn record_item_size(&mut self, key: K, size: PxSize) -> Result<bool, WaterfallError> {
        let in_list = self.positions.contains_key(&key);
        match self.ratios.record_size(key, size) {
            Ok(changed) => {
                trace!(
                    width = size.width.0,
                    height = size.height.0,
                    changed,
                    "item measured"
                );
                if changed && in_list {
                    self.dirty = true;
                }
                Ok(changed)
            }
            Err(err) => {
                warn!(%err, "ignoring item measurement");
                Err(err)
            }
        }
    }

    /// Last measured ratio of an item, square when unmeasured.
    pub fn ratio_of(&self, key: &K) -> AspectRatio {
        self.ratios.get(key)
    }

    /// All measured ratios.
    pub fn ratios(&self) -> &AspectRatioCache<K> {
        &self.ratios
    }

    /// Records where the host finally positioned an item.
    ///
    /// Bounds of keys that are not in the list are ignored.
    pub fn record_item_bounds(&mut self, key: K, rect: PxRect) {
        if self.positions.contains_key(&key) {
            self.bounds.insert(key, rect);
        }
    }

    /// Reported bounds of an item.
    pub fn item_bounds(&self, key: &K) -> Option<PxRect> {
        self.bounds.get(key).copied()
    }

    /// Scroll extent from the host-reported bounds: the lowest reported bottom
    /// edge plus the bottom padding. Zero bounds give just the padding.
    pub fn measured_extent(&self) -> Px {
        let bottom = self
            .bounds
            .values()
            .map(PxRect::bottom)
            .fold(Px::ZERO, Px::max);
        let padding = self.args.resolve(self.panel_width).padding;
        bottom + padding.bottom
    }

    /// Returns `true` when the next [`layout`](Self::layout) call recomputes.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Forces the next [`layout`](Self::layout) call to recompute.
    pub fn invalidate(&mut self) {
        self.dirty = true;
    }

    /// The layout for the current inputs, recomputed if any changed.
    pub fn layout(&mut self) -> &WaterfallLayout {
        if self.dirty {
            self.relayout();
        }
        &self.layout
    }

    /// The placed item for `key`, if it is in the list.
    pub fn placement_of(&mut self, key: &K) -> Option<&PlacedItem> {
        let index = *self.positions.get(key)?;
        self.layout().get(index)
    }

    #[tracing::instrument(level = "debug", skip(self), fields(items = self.keys.len()))]
    fn relayout(&mut self) {
        let resolved = self.args.resolve(self.panel_width);
        self.layout = WaterfallLayout::compute(&self.keys, &self.ratios, &resolved);
        self.dirty = false;
        debug!(
            columns = self.layout.column_count(),
            column_width = self.layout.column_width().0,
            content_height = self.layout.content_height().0,
            "waterfall laid out"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ColumnCount, Padding};

    fn fixed(columns: usize) -> WaterfallController<u32> {
        WaterfallController::new(WaterfallArgs::default().columns(ColumnCount::fixed(columns)))
    }

    fn size(width: f32, height: f32) -> PxSize {
        PxSize::new(Px(width), Px(height))
    }

    #[test]
    fn measurements_drive_reference_layout() {
        let mut controller = fixed(2);
        controller.set_items(0..4).unwrap();
        controller.set_panel_width(Dp(200.0));

        // Before any measurement every item is a 100px square.
        assert_eq!(controller.layout().content_height(), Px(200.0));
        assert_eq!(controller.placement_of(&2).unwrap().placement.offset, Px(100.0));

        controller.record_item_size(0, size(100.0, 100.0)).unwrap();
        controller.record_item_size(1, size(100.0, 50.0)).unwrap();
        controller.record_item_size(2, size(100.0, 100.0)).unwrap();
        controller.record_item_size(3, size(100.0, 100.0)).unwrap();

        let columns: Vec<_> = controller
            .layout()
            .items()
            .iter()
            .map(|item| (item.placement.column, item.placement.offset))
            .collect();
        assert_eq!(
            columns,
            vec![
                (0, Px(0.0)),
                (1, Px(0.0)),
                (1, Px(50.0)),
                (0, Px(100.0)),
            ]
        );
        assert_eq!(controller.layout().content_height(), Px(200.0));
    }

    #[test]
    fn layout_is_cached_until_inputs_change() {
        let mut controller = fixed(2);
        controller.set_items([1, 2, 3]).unwrap();
        controller.set_panel_width(Dp(300.0));
        assert!(controller.is_dirty());
        controller.layout();
        assert!(!controller.is_dirty());

        controller.set_panel_width(Dp(300.0));
        controller.set_items([1, 2, 3]).unwrap();
        assert!(!controller.is_dirty());

        assert!(controller.record_item_size(2, size(300.0, 100.0)).unwrap());
        assert!(controller.is_dirty());
        controller.layout();

        assert!(!controller.record_item_size(2, size(150.0, 50.0)).unwrap());
        assert!(!controller.is_dirty());

        controller.invalidate();
        assert!(controller.is_dirty());
    }

    #[test]
    fn invalid_measurements_keep_previous_ratio() {
        let mut controller = fixed(1);
        controller.set_items([7]).unwrap();
        controller.record_item_size(7, size(80.0, 40.0)).unwrap();
        controller.layout();

        let err = controller.record_item_size(7, size(80.0, 0.0)).unwrap_err();
        assert_eq!(
            err,
            WaterfallError::InvalidMeasurement {
                width: 80.0,
                height: 0.0
            }
        );
        assert_eq!(controller.ratio_of(&7).get(), 2.0);
        assert!(!controller.is_dirty());
    }

    #[test]
    fn duplicate_keys_are_rejected() {
        let mut controller = fixed(2);
        controller.set_items([1, 2]).unwrap();
        assert_eq!(
            controller.set_items([5, 6, 5]),
            Err(WaterfallError::DuplicateKey { index: 2 })
        );
        assert_eq!(controller.keys(), &[1, 2]);
    }

    #[test]
    fn items_by_key_function() {
        struct Photo {
            id: u32,
        }

        let photos = [Photo { id: 10 }, Photo { id: 11 }];
        let mut controller = fixed(2);
        controller.set_items_by(&photos, |photo| photo.id).unwrap();
        assert_eq!(controller.keys(), &[10, 11]);
    }

    #[test]
    fn early_measurements_apply_when_item_arrives() {
        let mut controller = fixed(1);
        controller.set_panel_width(Dp(100.0));
        controller.set_items([1]).unwrap();
        controller.layout();

        controller.record_item_size(2, size(100.0, 25.0)).unwrap();
        assert!(!controller.is_dirty());

        controller.set_items([1, 2]).unwrap();
        assert_eq!(controller.placement_of(&2).unwrap().height, Px(25.0));
        assert_eq!(controller.layout().content_height(), Px(125.0));
    }

    #[test]
    fn ratios_survive_removal() {
        let mut controller = fixed(1);
        controller.set_panel_width(Dp(100.0));
        controller.set_items([1, 2]).unwrap();
        controller.record_item_size(2, size(100.0, 20.0)).unwrap();

        controller.set_items([1]).unwrap();
        controller.set_items([2, 1]).unwrap();
        assert_eq!(controller.placement_of(&2).unwrap().height, Px(20.0));
        assert_eq!(controller.placement_of(&1).unwrap().placement.offset, Px(20.0));
    }

    #[test]
    fn resize_changes_adaptive_column_count() {
        let mut controller: WaterfallController<u32> =
            WaterfallController::new(WaterfallArgs::default());
        controller.set_items(0..6).unwrap();

        controller.set_panel_width(Dp(400.0));
        assert_eq!(controller.layout().column_count(), 2);

        controller.set_panel_width(Dp(650.0));
        assert_eq!(controller.layout().column_count(), 3);

        controller.set_panel_width_px(Px(100.0));
        assert_eq!(controller.layout().column_count(), 1);
    }

    #[test]
    fn reported_bounds_are_pruned_with_items() {
        let mut controller: WaterfallController<u32> = WaterfallController::new(
            WaterfallArgs::default()
                .columns(ColumnCount::fixed(2))
                .content_padding(Padding::new(Dp::ZERO, Dp(10.0), Dp::ZERO, Dp(24.0))),
        );
        controller.set_items([1, 2]).unwrap();
        controller.record_item_bounds(1, PxRect::new(Px::ZERO, Px(10.0), Px(50.0), Px(100.0)));
        controller.record_item_bounds(2, PxRect::new(Px(50.0), Px(10.0), Px(50.0), Px(300.0)));
        controller.record_item_bounds(9, PxRect::new(Px::ZERO, Px::ZERO, Px(50.0), Px(900.0)));
        assert_eq!(controller.item_bounds(&9), None);
        assert_eq!(controller.measured_extent(), Px(334.0));

        controller.set_items([1]).unwrap();
        assert_eq!(controller.item_bounds(&2), None);
        assert_eq!(controller.measured_extent(), Px(134.0));
    }

    #[test]
    fn scroll_extent_includes_padding() {
        let mut controller: WaterfallController<u32> = WaterfallController::new(
            WaterfallArgs::default()
                .columns(ColumnCount::fixed(2))
                .vertical_gap(Dp(8.0))
                .content_padding(Padding::symmetric(Dp(10.0), Dp(16.0))),
        );
        controller.set_items(0..3).unwrap();
        controller.set_panel_width(Dp(220.0));

        let layout = controller.layout();
        assert_eq!(layout.column_width(), Px(100.0));
        assert_eq!(layout.content_height(), Px(208.0));
        assert_eq!(layout.scroll_extent(), Px(240.0));
    }

    #[test]
    fn extreme_column_configs_still_lay_out() {
        for columns in [ColumnCount::adaptive(Dp(1e-300)), ColumnCount::fixed(usize::MAX)] {
            let mut controller: WaterfallController<u32> =
                WaterfallController::new(WaterfallArgs::default().columns(columns));
            controller.set_items(0..3).unwrap();
            controller.set_panel_width(Dp(400.0));

            let layout = controller.layout();
            assert_eq!(layout.column_count(), crate::MAX_COLUMNS);
            assert_eq!(layout.len(), 3);
            assert!(layout.items().iter().all(|item| item.placement.offset == Px::ZERO));
        }
    }

    #[test]
    fn empty_controller_lays_out_nothing() {
        let mut controller = fixed(3);
        let layout = controller.layout();
        assert!(layout.is_empty());
        assert_eq!(layout.content_height(), Px::ZERO);
    }
}
