use chrono::NaiveDate;
use flockbook::domain::entities::{BreedingRecord, FarmInfo, Pen};
use flockbook::domain::services::{DashboardStats, OccupancyThresholds, PenOccupancy};

use super::breeding::breeding_table;
use super::money;
use super::pens::pen_table;
use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::r#box::{Box, BoxStyle};

pub struct DashboardView<'a> {
    pub farm: &'a FarmInfo,
    pub stats: &'a DashboardStats,
    pub pens: Vec<(&'a Pen, PenOccupancy)>,
    pub pending: Vec<&'a BreedingRecord>,
    pub thresholds: OccupancyThresholds,
    pub today: NaiveDate,
}

impl DashboardView<'_> {
    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let mut out = String::new();

        let mut header = CommandHeader::new(Icon::Farm, self.farm.name.as_str());
        header.add("Today", self.today.to_string());
        out.push_str(&header.render(supports_color, supports_unicode));
        out.push('\n');

        let mut b = Box::with_title(ColoredText::info("Overview").bold().render(supports_color))
            .style(BoxStyle::Info);
        b.add_line(format!("Sheep in pen      {}", self.stats.sheep_in_pen));
        b.add_line(format!("Pens              {}", self.stats.pen_count));
        b.add_line(format!("Sales total       {}", money(self.stats.total_sales)));
        b.add_line(format!("Breeding records  {}", self.stats.breeding_count));
        out.push_str(&b.render(supports_color, supports_unicode));

        out.push('\n');
        out.push_str(&ColoredText::info("Pen occupancy").bold().render(supports_color));
        out.push('\n');
        out.push_str(&pen_table(
            &self.pens,
            &self.thresholds,
            supports_color,
            supports_unicode,
        ));

        out.push('\n');
        out.push_str(&ColoredText::info("Pending lambings").bold().render(supports_color));
        out.push('\n');
        if self.pending.is_empty() {
            out.push_str(&format!(
                "{} {}\n",
                Icon::Pending.colored(supports_color, supports_unicode),
                ColoredText::dim("Nothing due.").render(supports_color)
            ));
        } else {
            out.push_str(&breeding_table(
                &self.pending,
                self.today,
                supports_color,
                supports_unicode,
            ));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_dashboard_snapshot() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let farm = FarmInfo::seed(today);
        let pens = Pen::seed();
        let stats = DashboardStats {
            sheep_in_pen: 0,
            pen_count: 2,
            total_sales: 0.0,
            breeding_count: 0,
        };
        let view = DashboardView {
            farm: &farm,
            stats: &stats,
            pens: pens.iter().map(|p| (p, PenOccupancy::of(p, &[]))).collect(),
            pending: Vec::new(),
            thresholds: OccupancyThresholds::default(),
            today,
        };

        insta::assert_snapshot!(view.render(false, false), @r"
        [FARM] My Happy Sheep Farm
        Today: 2024-06-01

        +------------------------+
        | Overview               |
        | Sheep in pen      0    |
        | Pens              2    |
        | Sales total       0.00 |
        | Breeding records  0    |
        +------------------------+

        Pen occupancy
        Code  Name             Type       Occupancy  Notes
        --------------------------------------------------
        P001  Pen 1 fattening  fattening    0/50 0%  -
        P002  Pen 2 ewes       breeding     0/30 0%  -

        Pending lambings
        [ ] Nothing due.
        ");
    }
}
