use comfy_table::{Cell, Color, ContentArrangement, Row, Table, presets::UTF8_FULL};
use waterfall::{Px, PxRect, WaterfallLayout};

use crate::Tile;

fn format_px(value: Px) -> String {
    format!("{:.1}", value.0)
}

fn format_rect(rect: &PxRect) -> String {
    format!(
        "({}, {}) {}x{}",
        format_px(rect.x),
        format_px(rect.y),
        format_px(rect.width),
        format_px(rect.height)
    )
}

/// One row per tile: where it went and how big it ended up.
pub fn layout_table(layout: &WaterfallLayout, tiles: &[Tile]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Tile").fg(Color::Cyan),
            Cell::new("Ratio").fg(Color::Cyan),
            Cell::new("Column").fg(Color::Cyan),
            Cell::new("Offset").fg(Color::Cyan),
            Cell::new("Height").fg(Color::Cyan),
            Cell::new("Rect").fg(Color::Cyan),
        ]);

    for (tile, item) in tiles.iter().zip(layout.items()) {
        table.add_row(Row::from(vec![
            Cell::new(&tile.label),
            Cell::new(format!("{:.2}", tile.intrinsic_ratio)),
            Cell::new(item.placement.column.to_string()),
            Cell::new(format_px(item.placement.offset)),
            Cell::new(format_px(item.height)),
            Cell::new(format_rect(&item.rect)),
        ]));
    }
    table
}

/// Single-line summary of a settled layout.
pub fn summary(layout: &WaterfallLayout, measured_extent: Px) -> String {
    format!(
        "{} tiles in {} columns of {} px, content {} px, scroll extent {} px (reported {} px)",
        layout.len(),
        layout.column_count(),
        format_px(layout.column_width()),
        format_px(layout.content_height()),
        format_px(layout.scroll_extent()),
        format_px(measured_extent)
    )
}

#[cfg(test)]
mod tests {
    use waterfall::{ColumnCount, Dp, WaterfallArgs, WaterfallController};

    use super::*;

    fn layout(count: usize) -> WaterfallLayout {
        let mut controller = WaterfallController::new(
            WaterfallArgs::default().columns(ColumnCount::fixed(2)),
        );
        controller.set_items(0..count as u32).unwrap();
        controller.set_panel_width(Dp(200.0));
        controller.layout().clone()
    }

    #[test]
    fn table_has_a_row_per_tile() {
        let table = layout_table(&layout(3), &Tile::feed(3));
        assert_eq!(table.row_iter().count(), 3);
        let second: Vec<String> = table
            .row_iter()
            .nth(1)
            .unwrap()
            .cell_iter()
            .map(|cell| cell.content())
            .collect();
        assert_eq!(second[0], "Tile 2");
        assert_eq!(second[2], "1");
        assert_eq!(second[5], "(100.0, 0.0) 100.0x100.0");
    }

    #[test]
    fn summary_names_the_extents() {
        let line = summary(&layout(4), Px(200.0));
        assert_eq!(
            line,
            "4 tiles in 2 columns of 100.0 px, content 200.0 px, scroll extent 200.0 px (reported 200.0 px)"
        );
    }
}
