//! Command-line host for the waterfall engine.
//!
//! Stands in for a UI framework: it lays out a feed of tiles, "renders" each
//! tile at the column width it was given, feeds the measured sizes back and
//! repeats until the layout settles, then prints the result.

mod host;
mod report;

use anyhow::{Context, bail};
use clap::Parser;
use waterfall::{ColumnCount, Dp, Padding, Px, WaterfallArgs};

pub use crate::host::{SimulatedHost, Tile, TileId};

/// Lay out a feed of tiles with the waterfall engine.
#[derive(Parser, Debug)]
#[command(name = "example", version, about, long_about = None)]
pub struct Cli {
    /// Number of tiles in the feed
    #[arg(short, long, default_value_t = 24)]
    pub items: usize,
    /// Panel width in dp
    #[arg(short, long, default_value_t = 720.0)]
    pub panel_width: f64,
    /// Fixed column count; overrides --min-width
    #[arg(short, long)]
    pub columns: Option<usize>,
    /// Minimum column width in dp for adaptive columns
    #[arg(long, default_value_t = 200.0)]
    pub min_width: f64,
    /// Gap between tiles in a column, in dp
    #[arg(long, default_value_t = 8.0)]
    pub gap: f64,
    /// Gap between columns, in dp
    #[arg(long, default_value_t = 8.0)]
    pub horizontal_gap: f64,
    /// Padding on every edge, in dp
    #[arg(long, default_value_t = 16.0)]
    pub padding: f64,
    /// Physical pixels per dp
    #[arg(long, default_value_t = 1.0)]
    pub scale_factor: f64,
    /// Resize the panel to this width (dp) after the first layout settles
    #[arg(long)]
    pub resize_to: Option<f64>,
    /// Viewport height in px; prints the tiles a virtualizing host would mount
    #[arg(long)]
    pub viewport: Option<f32>,
    /// Scroll offset in px used with --viewport
    #[arg(long, default_value_t = 0.0)]
    pub scroll: f32,
    /// Print the layout as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    fn waterfall_args(&self) -> WaterfallArgs {
        let columns = match self.columns {
            Some(count) => ColumnCount::fixed(count),
            None => ColumnCount::adaptive(Dp(self.min_width)),
        };
        WaterfallArgs::default()
            .columns(columns)
            .vertical_gap(Dp(self.gap))
            .horizontal_gap(Dp(self.horizontal_gap))
            .content_padding(Padding::all(Dp(self.padding)))
    }
}

/// Installs the global tracing subscriber, honouring `RUST_LOG`.
pub fn init_tracing() {
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => match tracing_subscriber::EnvFilter::try_new("error,waterfall=info,example=info")
        {
            Ok(filter) => filter,
            Err(_) => tracing_subscriber::EnvFilter::new("error"),
        },
    };

    let _ = tracing_subscriber::fmt()
        .pretty()
        .with_env_filter(filter)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .try_init();
}

/// Runs the simulation described by `cli` and prints the final layout.
pub fn run(cli: Cli) -> anyhow::Result<()> {
    if cli.items == 0 {
        bail!("the feed needs at least one tile");
    }
    waterfall::dp::set_scale_factor(cli.scale_factor);

    let host = SimulatedHost::new(cli.waterfall_args(), Tile::feed(cli.items))
        .context("failed to build the tile feed")?;
    host.resize(Dp(cli.panel_width));
    let passes = host.settle();
    tracing::info!(passes, "layout settled");

    if let Some(width) = cli.resize_to {
        host.resize(Dp(width));
        let passes = host.settle();
        tracing::info!(passes, width, "layout settled after resize");
    }

    let controller = host.controller();
    let mut controller = controller.write();
    let measured_extent = controller.measured_extent();
    let layout = controller.layout();

    if cli.json {
        println!("{}", serde_json::to_string_pretty(layout)?);
    } else {
        println!("{}", report::layout_table(layout, host.tiles()));
        println!("{}", report::summary(layout, measured_extent));
    }

    if let Some(viewport) = cli.viewport {
        let range = layout.visible_range(Px(cli.scroll), Px(viewport), 2);
        println!(
            "viewport {}..{} px mounts tiles {}..{}",
            cli.scroll,
            cli.scroll + viewport,
            range.start,
            range.end
        );
    }
    Ok(())
}
