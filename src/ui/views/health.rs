use flockbook::domain::entities::{DiseaseRecord, PreventionRecord};
use flockbook::domain::value_objects::DiseaseOutcome;

use super::{date_or_dash, text_or_dash};
use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::table::{Align, Table};

fn empty_line(message: &str, supports_color: bool, supports_unicode: bool) -> String {
    format!(
        "{} {}\n",
        Icon::Pending.colored(supports_color, supports_unicode),
        ColoredText::dim(message).render(supports_color)
    )
}

pub struct PreventionListView<'a> {
    records: &'a [&'a PreventionRecord],
}

impl<'a> PreventionListView<'a> {
    pub fn new(records: &'a [&'a PreventionRecord]) -> Self {
        Self { records }
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let mut header = CommandHeader::new(Icon::Health, "Prevention records");
        header.add("Records", self.records.len().to_string());
        let mut out = header.render(supports_color, supports_unicode);
        out.push('\n');

        if self.records.is_empty() {
            out.push_str(&empty_line("No prevention records.", supports_color, supports_unicode));
            return out;
        }

        let mut table = Table::new()
            .column("Sheep", Align::Left)
            .column("Project", Align::Left)
            .column("Date", Align::Left)
            .column("Next due", Align::Left)
            .column("Operator", Align::Left);
        for r in self.records {
            table.add_row(vec![
                r.sheep_id.clone(),
                r.project.clone(),
                r.date.to_string(),
                date_or_dash(r.next_date),
                text_or_dash(&r.operator),
            ]);
        }
        out.push_str(&table.render(supports_color, supports_unicode));
        out
    }
}

pub struct DiseaseListView<'a> {
    records: &'a [&'a DiseaseRecord],
}

impl<'a> DiseaseListView<'a> {
    pub fn new(records: &'a [&'a DiseaseRecord]) -> Self {
        Self { records }
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let deaths = self
            .records
            .iter()
            .filter(|r| r.outcome.is_fatal())
            .count();
        let mut header = CommandHeader::new(Icon::Health, "Disease records");
        header.add("Records", self.records.len().to_string());
        header.add("Deaths", deaths.to_string());
        let mut out = header.render(supports_color, supports_unicode);
        out.push('\n');

        if self.records.is_empty() {
            out.push_str(&empty_line("No disease records.", supports_color, supports_unicode));
            return out;
        }

        let mut table = Table::new()
            .column("Sheep", Align::Left)
            .column("Disease", Align::Left)
            .column("Onset", Align::Left)
            .column("Treatment", Align::Left)
            .column("Recovered", Align::Left)
            .column("Outcome", Align::Left);
        for r in self.records {
            let outcome = match r.outcome {
                DiseaseOutcome::Recovered => ColoredText::success(r.outcome.to_string()),
                DiseaseOutcome::Died => ColoredText::error(r.outcome.to_string()),
            };
            table.add_row(vec![
                r.sheep_id.clone(),
                r.disease_name.clone(),
                r.onset_date.to_string(),
                text_or_dash(&r.treatment),
                date_or_dash(r.recovery_date),
                outcome.render(supports_color),
            ]);
        }
        out.push_str(&table.render(supports_color, supports_unicode));
        out
    }
}
