use chrono::NaiveDate;
use flockbook::domain::entities::BreedingRecord;
use flockbook::domain::services::is_overdue;

use super::{date_or_dash, DASH};
use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::table::{Align, Table};

pub struct BreedingListView<'a> {
    records: &'a [&'a BreedingRecord],
    today: NaiveDate,
    pending_only: bool,
}

impl<'a> BreedingListView<'a> {
    pub fn new(records: &'a [&'a BreedingRecord], today: NaiveDate, pending_only: bool) -> Self {
        Self {
            records,
            today,
            pending_only,
        }
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let mut out = String::new();
        let title = if self.pending_only {
            "Pending lambings"
        } else {
            "Breeding records"
        };
        let overdue = self
            .records
            .iter()
            .filter(|r| is_overdue(r, self.today))
            .count();

        let mut header = CommandHeader::new(Icon::Breeding, title);
        header.add("Records", self.records.len().to_string());
        if overdue > 0 {
            header.add(
                "Overdue",
                ColoredText::error(overdue.to_string()).render(supports_color),
            );
        }
        out.push_str(&header.render(supports_color, supports_unicode));
        out.push('\n');

        if self.records.is_empty() {
            out.push_str(&format!(
                "{} {}\n",
                Icon::Pending.colored(supports_color, supports_unicode),
                ColoredText::dim("No breeding records.").render(supports_color)
            ));
            return out;
        }

        out.push_str(&breeding_table(
            self.records,
            self.today,
            supports_color,
            supports_unicode,
        ));
        out
    }
}

/// Shared with the dashboard
pub(crate) fn breeding_table(
    records: &[&BreedingRecord],
    today: NaiveDate,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut table = Table::new()
        .column("Ewe", Align::Left)
        .column("Ram", Align::Left)
        .column("Mated", Align::Left)
        .column("Type", Align::Left)
        .column("Due", Align::Left)
        .column("Lambed", Align::Left)
        .column("Lambs", Align::Right);

    for r in records {
        let due = if is_overdue(r, today) {
            ColoredText::error(format!("{} overdue", r.expected_date))
                .render(supports_color)
        } else {
            r.expected_date.to_string()
        };
        let lambs = match (r.lamb_count, r.survival_count) {
            (Some(born), Some(alive)) => format!("{alive}/{born}"),
            (Some(born), None) => born.to_string(),
            _ => DASH.to_string(),
        };
        table.add_row(vec![
            r.ewe_id.clone(),
            r.ram_id.clone().unwrap_or_else(|| DASH.to_string()),
            r.mating_date.to_string(),
            r.mating_type.to_string(),
            due,
            date_or_dash(r.actual_date),
            lambs,
        ]);
    }
    table.render(supports_color, supports_unicode)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn overdue_records_are_flagged() {
        let late = BreedingRecord::builder()
            .id("BR1")
            .ewe_id("E001")
            .ram_id("R001")
            .mating_date(day(2024, 1, 1))
            .build()
            .unwrap();
        let done = BreedingRecord::builder()
            .id("BR2")
            .ewe_id("E002")
            .mating_date(day(2024, 1, 1))
            .actual_date(day(2024, 5, 28))
            .lamb_count(2)
            .survival_count(1)
            .build()
            .unwrap();
        let rows = vec![&late, &done];

        let rendered = BreedingListView::new(&rows, day(2024, 6, 15), false).render(false, false);
        assert!(rendered.contains("Overdue: 1"));
        assert!(rendered.contains("2024-05-30 overdue"));
        assert!(rendered.contains("2024-05-28"));
        assert!(rendered.contains("1/2"));
    }

    #[test]
    fn no_overdue_line_before_due_date() {
        let rec = BreedingRecord::builder()
            .id("BR1")
            .ewe_id("E001")
            .mating_date(day(2024, 1, 1))
            .build()
            .unwrap();
        let rows = vec![&rec];
        let rendered = BreedingListView::new(&rows, day(2024, 5, 30), true).render(false, false);
        assert!(rendered.starts_with("[BREED] Pending lambings"));
        assert!(!rendered.contains("Overdue"));
    }
}
