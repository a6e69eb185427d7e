//! waterfall is a headless masonry layout engine.
//!
//! Items of varying aspect ratio are distributed over a number of equally
//! wide columns. Each item goes into the column that is currently the
//! shortest, so column heights stay balanced. The engine knows nothing about
//! rendering: the host reports panel widths and measured item sizes, and reads
//! back columns, offsets and rectangles.
//!
//! # Placement
//!
//! The core is a pure function. An item's column and offset depend only on the
//! items before it, their aspect ratios and the configuration:
//!
//! ```
//! use std::collections::HashMap;
//! use waterfall::{Px, place_all};
//!
//! let keys = [0, 1, 2, 3];
//! let ratios = HashMap::from([(0, 1.0f32), (1, 2.0), (2, 1.0), (3, 1.0)]);
//!
//! let placements = place_all(&keys, &ratios, Px(100.0), Px::ZERO, 2);
//! let columns: Vec<_> = placements.iter().map(|p| p.column).collect();
//! assert_eq!(columns, [0, 1, 1, 0]);
//! ```
//!
//! Unmeasured items count as squares until their real size is known.
//!
//! # Driving a layout
//!
//! [`WaterfallController`] keeps the state a host needs between frames and
//! recomputes the layout only when an input changed:
//!
//! ```
//! use waterfall::{Dp, Padding, Px, PxSize, WaterfallArgs, WaterfallController};
//!
//! let mut controller = WaterfallController::new(
//!     WaterfallArgs::default()
//!         .vertical_gap(Dp(8.0))
//!         .horizontal_gap(Dp(8.0))
//!         .content_padding(Padding::all(Dp(16.0))),
//! );
//! controller.set_items(["sunset", "harbor", "forest"]).unwrap();
//! controller.set_panel_width(Dp(440.0));
//! controller
//!     .record_item_size("harbor", PxSize::new(Px(200.0), Px(300.0)))
//!     .unwrap();
//!
//! let layout = controller.layout();
//! assert_eq!(layout.column_count(), 2);
//! assert!(layout.scroll_extent() > layout.content_height());
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

pub mod columns;
pub mod config;
pub mod controller;
pub mod dp;
mod error;
pub mod layout;
pub mod occupation;
pub mod padding;
pub mod placement;
pub mod px;
pub mod ratio;

pub use crate::{
    columns::{ColumnCount, ColumnMetrics, MAX_COLUMNS, MinWidthFn},
    config::{ResolvedArgs, Responsive, WaterfallArgs},
    controller::WaterfallController,
    dp::Dp,
    error::WaterfallError,
    layout::{PlacedItem, WaterfallLayout},
    occupation::ColumnOccupation,
    padding::{Padding, PxPadding},
    placement::{Placement, place, place_all},
    px::{Px, PxPosition, PxRect, PxSize},
    ratio::{AspectRatio, AspectRatioCache, RatioSource},
};
