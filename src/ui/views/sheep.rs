use flockbook::domain::entities::Sheep;
use flockbook::domain::value_objects::SheepStatus;

use super::text_or_dash;
use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::table::{Align, Table};

pub struct SheepListView<'a> {
    sheep: &'a [&'a Sheep],
    total: usize,
    filter: Option<String>,
}

impl<'a> SheepListView<'a> {
    pub fn new(sheep: &'a [&'a Sheep], total: usize) -> Self {
        Self {
            sheep,
            total,
            filter: None,
        }
    }

    /// Describe the active filter in the header
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let mut out = String::new();
        let mut header = CommandHeader::new(Icon::Flock, "Sheep");
        header.add("Shown", format!("{} of {}", self.sheep.len(), self.total));
        if let Some(filter) = &self.filter {
            header.add("Filter", filter.as_str());
        }
        out.push_str(&header.render(supports_color, supports_unicode));
        out.push('\n');

        if self.sheep.is_empty() {
            out.push_str(&format!(
                "{} {}\n",
                Icon::Pending.colored(supports_color, supports_unicode),
                ColoredText::dim("No sheep match.").render(supports_color)
            ));
            return out;
        }

        let mut table = Table::new()
            .column("Ear tag", Align::Left)
            .column("Breed", Align::Left)
            .column("Sex", Align::Left)
            .column("Born", Align::Left)
            .column("Pen", Align::Left)
            .column("Status", Align::Left)
            .column("Source", Align::Left);

        for s in self.sheep {
            table.add_row(vec![
                s.id.clone(),
                text_or_dash(&s.breed),
                s.gender.symbol().to_string(),
                s.birth_date.to_string(),
                s.pen_id.clone(),
                status_cell(s.status, supports_color),
                s.source.to_string(),
            ]);
        }
        out.push_str(&table.render(supports_color, supports_unicode));
        out
    }
}

fn status_cell(status: SheepStatus, supports_color: bool) -> String {
    match status {
        SheepStatus::InPen => ColoredText::success(status.as_str()),
        SheepStatus::Sold => ColoredText::info(status.as_str()),
        SheepStatus::Deceased => ColoredText::dim(status.as_str()),
    }
    .render(supports_color)
}
