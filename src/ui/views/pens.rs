use flockbook::domain::entities::Pen;
use flockbook::domain::services::{OccupancyThresholds, PenOccupancy};

use super::{occupancy_cell, text_or_dash};
use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::widgets::table::{Align, Table};

pub struct PenListView<'a> {
    rows: Vec<(&'a Pen, PenOccupancy)>,
    thresholds: OccupancyThresholds,
}

impl<'a> PenListView<'a> {
    pub fn new(rows: Vec<(&'a Pen, PenOccupancy)>, thresholds: OccupancyThresholds) -> Self {
        Self { rows, thresholds }
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let mut out = String::new();
        let mut header = CommandHeader::new(Icon::Pen, "Pens");
        header.add("Pens", self.rows.len().to_string());
        header.add(
            "Bands",
            format!(
                "warning above {}%, critical above {}%",
                self.thresholds.warning, self.thresholds.critical
            ),
        );
        out.push_str(&header.render(supports_color, supports_unicode));
        out.push('\n');
        out.push_str(&pen_table(&self.rows, &self.thresholds, supports_color, supports_unicode));
        out
    }
}

/// Shared with the dashboard
pub(crate) fn pen_table(
    rows: &[(&Pen, PenOccupancy)],
    thresholds: &OccupancyThresholds,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut table = Table::new()
        .column("Code", Align::Left)
        .column("Name", Align::Left)
        .column("Type", Align::Left)
        .column("Occupancy", Align::Right)
        .column("Notes", Align::Left);

    for (pen, occupancy) in rows {
        table.add_row(vec![
            pen.id.clone(),
            pen.name.clone(),
            pen.pen_type.to_string(),
            occupancy_cell(occupancy, thresholds, supports_color),
            text_or_dash(&pen.notes),
        ]);
    }
    table.render(supports_color, supports_unicode)
}
