//! A host that plays the part of a UI framework.

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;
use waterfall::{Dp, Px, PxRect, PxSize, WaterfallArgs, WaterfallController, WaterfallError};

const MAX_PASSES: usize = 8;
const FEED_RATIOS: [f32; 6] = [0.75, 1.5, 1.0, 0.6, 4.0 / 3.0, 2.0];

/// Identity of a tile in the feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileId(pub u32);

/// A piece of content with an intrinsic shape, e.g. a photo.
#[derive(Debug, Clone)]
pub struct Tile {
    /// Identity used as the layout key.
    pub id: TileId,
    /// Display label.
    pub label: String,
    /// Width divided by height of the content.
    pub intrinsic_ratio: f32,
}

impl Tile {
    /// Builds a feed of `count` tiles cycling through a few common shapes.
    pub fn feed(count: usize) -> Vec<Tile> {
        (0..count)
            .map(|index| Tile {
                id: TileId(index as u32),
                label: format!("Tile {}", index + 1),
                intrinsic_ratio: FEED_RATIOS[index % FEED_RATIOS.len()],
            })
            .collect()
    }

    /// Size of the tile rendered at `width`, rounded to whole pixels the way
    /// a framework reports it. `None` while there is no width to render into.
    pub fn render(&self, width: Px) -> Option<PxSize> {
        let width = width.0.round();
        if width <= 0.0 {
            return None;
        }
        let height = (width / self.intrinsic_ratio).round().max(1.0);
        Some(PxSize::new(Px(width), Px(height)))
    }
}

/// Drives a [`WaterfallController`] through frames like a UI framework would.
pub struct SimulatedHost {
    controller: Arc<RwLock<WaterfallController<TileId>>>,
    tiles: Vec<Tile>,
}

impl SimulatedHost {
    /// Creates a host showing `tiles` in order.
    pub fn new(args: WaterfallArgs, tiles: Vec<Tile>) -> Result<Self, WaterfallError> {
        let mut controller = WaterfallController::new(args);
        controller.set_items_by(&tiles, |tile| tile.id)?;
        Ok(Self {
            controller: Arc::new(RwLock::new(controller)),
            tiles,
        })
    }

    /// Shared handle to the controller.
    pub fn controller(&self) -> Arc<RwLock<WaterfallController<TileId>>> {
        self.controller.clone()
    }

    /// Tiles in feed order.
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Reports a new panel width.
    pub fn resize(&self, width: Dp) {
        self.controller.write().set_panel_width(width);
    }

    /// Runs one frame: lay out, render every tile at the column width, report
    /// the measured sizes and the final bounds.
    ///
    /// Returns how many tiles reported a new aspect ratio.
    pub fn frame(&self) -> usize {
        let mut controller = self.controller.write();
        let column_width = controller.layout().column_width();

        let mut changed = 0;
        for tile in &self.tiles {
            let Some(size) = tile.render(column_width) else {
                continue;
            };
            match controller.record_item_size(tile.id, size) {
                Ok(true) => changed += 1,
                Ok(false) => {}
                Err(err) => debug!(%err, tile = tile.id.0, "measurement rejected"),
            }
        }

        let bounds: Vec<(TileId, PxRect)> = self
            .tiles
            .iter()
            .zip(controller.layout().items())
            .map(|(tile, item)| (tile.id, item.rect))
            .collect();
        for (id, rect) in bounds {
            controller.record_item_bounds(id, rect);
        }
        changed
    }

    /// Runs frames until no measurement changes anymore.
    ///
    /// Returns the number of frames it took, at most a fixed pass limit.
    pub fn settle(&self) -> usize {
        for pass in 1..=MAX_PASSES {
            let changed = self.frame();
            debug!(pass, changed, "frame finished");
            if changed == 0 {
                return pass;
            }
        }
        tracing::warn!(passes = MAX_PASSES, "layout did not settle");
        MAX_PASSES
    }
}
