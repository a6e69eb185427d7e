//! Aspect ratios and the identity-keyed ratio cache.
//!
//! Ratios arrive from the host one measurement at a time. Until an item has
//! been measured it is treated as a square, so the first layout pass can run
//! before anything has rendered.

use std::{
    collections::HashMap,
    hash::{BuildHasher, Hash},
};

use rustc_hash::FxHashMap;

use crate::{Px, PxSize, WaterfallError};

/// Width divided by height of an item's rendered content.
///
/// Always finite and strictly positive, so dividing a column width by it is
/// safe.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct AspectRatio(f32);

impl AspectRatio {
    /// The ratio of an unmeasured item.
    pub const SQUARE: Self = Self(1.0);

    /// Validates a raw ratio.
    ///
    /// ```
    /// use waterfall::AspectRatio;
    ///
    /// assert!(AspectRatio::new(1.5).is_ok());
    /// assert!(AspectRatio::new(0.0).is_err());
    /// assert!(AspectRatio::new(f32::NAN).is_err());
    /// ```
    pub fn new(ratio: f32) -> Result<Self, WaterfallError> {
        if ratio.is_finite() && ratio > f32::EPSILON {
            Ok(Self(ratio))
        } else {
            Err(WaterfallError::InvalidAspectRatio(ratio))
        }
    }

    /// Derives the ratio from a measured size.
    pub fn from_size(size: PxSize) -> Result<Self, WaterfallError> {
        let (width, height) = (size.width.0, size.height.0);
        let invalid = || WaterfallError::InvalidMeasurement { width, height };
        if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
            return Err(invalid());
        }
        Self::new(width / height).map_err(|_| invalid())
    }

    /// Returns the raw ratio.
    pub fn get(self) -> f32 {
        self.0
    }

    /// Height of an item with this ratio laid out at `width`.
    pub fn height_for(self, width: Px) -> Px {
        width / self.0
    }
}

impl Default for AspectRatio {
    fn default() -> Self {
        Self::SQUARE
    }
}

/// Read access to known aspect ratios, keyed by item identity.
///
/// The placement scan only reads through this trait, so hosts can keep ratios
/// in whatever map they already own.
pub trait RatioSource<K> {
    /// Ratio for `key`, [`AspectRatio::SQUARE`] when unknown.
    fn ratio(&self, key: &K) -> AspectRatio;
}

impl<K, S> RatioSource<K> for HashMap<K, f32, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    fn ratio(&self, key: &K) -> AspectRatio {
        self.get(key)
            .and_then(|ratio| AspectRatio::new(*ratio).ok())
            .unwrap_or_default()
    }
}

/// Last measured aspect ratio per item.
///
/// Entries are only added or overwritten; nothing is evicted while the cache
/// lives. Each item's entry is written by that item's own measurement events.
#[derive(Debug, Clone)]
pub struct AspectRatioCache<K> {
    ratios: FxHashMap<K, AspectRatio>,
}

impl<K> Default for AspectRatioCache<K> {
    fn default() -> Self {
        Self {
            ratios: FxHashMap::default(),
        }
    }
}

impl<K: Hash + Eq> AspectRatioCache<K> {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Last measured ratio for `key`, or [`AspectRatio::SQUARE`].
    pub fn get(&self, key: &K) -> AspectRatio {
        self.ratios.get(key).copied().unwrap_or_default()
    }

    /// Stores a ratio. Returns `true` when the stored value changed.
    pub fn set(&mut self, key: K, ratio: AspectRatio) -> bool {
        match self.ratios.insert(key, ratio) {
            Some(previous) => previous != ratio,
            None => true,
        }
    }

    /// Stores the ratio of a measured size.
    ///
    /// Sizes that cannot form a ratio are rejected and leave the entry as it
    /// was, so the item keeps its previous (or default) ratio.
    pub fn record_size(&mut self, key: K, size: PxSize) -> Result<bool, WaterfallError> {
        let ratio = AspectRatio::from_size(size)?;
        Ok(self.set(key, ratio))
    }

    /// Returns `true` when `key` has been measured.
    pub fn contains(&self, key: &K) -> bool {
        self.ratios.contains_key(key)
    }

    /// Number of measured items.
    pub fn len(&self) -> usize {
        self.ratios.len()
    }

    /// Returns `true` when nothing has been measured.
    pub fn is_empty(&self) -> bool {
        self.ratios.is_empty()
    }

    /// Forgets every measurement.
    pub fn clear(&mut self) {
        self.ratios.clear();
    }
}

impl<K: Hash + Eq> RatioSource<K> for AspectRatioCache<K> {
    fn ratio(&self, key: &K) -> AspectRatio {
        self.get(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unmeasured_items_are_square() {
        let cache: AspectRatioCache<&str> = AspectRatioCache::new();
        assert_eq!(cache.get(&"a"), AspectRatio::SQUARE);
        assert!(!cache.contains(&"a"));
        assert!(cache.is_empty());
    }

    #[test]
    fn set_reports_changes() {
        let mut cache = AspectRatioCache::new();
        let wide = AspectRatio::new(2.0).unwrap();
        assert!(cache.set("a", wide));
        assert!(!cache.set("a", wide));
        assert!(cache.set("a", AspectRatio::SQUARE));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn record_size_derives_ratio() {
        let mut cache = AspectRatioCache::new();
        let changed = cache
            .record_size(7u32, PxSize::new(Px(200.0), Px(100.0)))
            .unwrap();
        assert!(changed);
        assert_eq!(cache.get(&7).get(), 2.0);
    }

    #[test]
    fn record_size_rejects_degenerate_sizes() {
        let mut cache = AspectRatioCache::new();
        cache
            .record_size(1u32, PxSize::new(Px(50.0), Px(100.0)))
            .unwrap();

        for size in [
            PxSize::new(Px(100.0), Px(0.0)),
            PxSize::new(Px(0.0), Px(100.0)),
            PxSize::new(Px(-10.0), Px(100.0)),
            PxSize::new(Px(f32::NAN), Px(100.0)),
            PxSize::new(Px(100.0), Px(f32::INFINITY)),
        ] {
            assert!(matches!(
                cache.record_size(1, size),
                Err(WaterfallError::InvalidMeasurement { .. })
            ));
        }
        assert_eq!(cache.get(&1).get(), 0.5);
    }

    #[test]
    fn hash_map_source_sanitizes_values() {
        let mut map = HashMap::new();
        map.insert("ok", 0.5f32);
        map.insert("zero", 0.0);
        map.insert("nan", f32::NAN);
        assert_eq!(map.ratio(&"ok").get(), 0.5);
        assert_eq!(map.ratio(&"zero"), AspectRatio::SQUARE);
        assert_eq!(map.ratio(&"nan"), AspectRatio::SQUARE);
        assert_eq!(map.ratio(&"missing"), AspectRatio::SQUARE);
    }

    #[test]
    fn height_for_divides_width() {
        let ratio = AspectRatio::new(4.0).unwrap();
        assert_eq!(ratio.height_for(Px(100.0)), Px(25.0));
        assert_eq!(AspectRatio::SQUARE.height_for(Px(80.0)), Px(80.0));
    }
}
