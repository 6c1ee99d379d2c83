use flockbook::domain::entities::FeedRecord;
use flockbook::domain::services::{remaining_percent, remaining_quantity, used_quantity};

use super::quantity;
use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::table::{Align, Table};

/// Stock at or below this share of the delivery is highlighted
const LOW_STOCK_PERCENT: i64 = 20;

pub struct FeedListView<'a> {
    feed: &'a [FeedRecord],
}

impl<'a> FeedListView<'a> {
    pub fn new(feed: &'a [FeedRecord]) -> Self {
        Self { feed }
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let mut header = CommandHeader::new(Icon::Feed, "Feed stock");
        header.add("Deliveries", self.feed.len().to_string());
        let mut out = header.render(supports_color, supports_unicode);
        out.push('\n');

        if self.feed.is_empty() {
            out.push_str(&format!(
                "{} {}\n",
                Icon::Pending.colored(supports_color, supports_unicode),
                ColoredText::dim("No feed recorded.").render(supports_color)
            ));
            return out;
        }

        let mut table = Table::new()
            .column("Id", Align::Left)
            .column("Name", Align::Left)
            .column("Type", Align::Left)
            .column("In date", Align::Left)
            .column("In", Align::Right)
            .column("Used", Align::Right)
            .column("Left", Align::Right)
            .column("%", Align::Right);

        for f in self.feed {
            let remaining = remaining_quantity(f);
            let percent = match remaining_percent(f) {
                None => ColoredText::warning("n/a"),
                Some(p) if p <= 0 => ColoredText::error(format!("{p}%")),
                Some(p) if p <= LOW_STOCK_PERCENT => ColoredText::warning(format!("{p}%")),
                Some(p) => ColoredText::success(format!("{p}%")),
            };
            table.add_row(vec![
                f.id.clone(),
                f.name.clone(),
                f.feed_type.clone(),
                f.in_date.to_string(),
                quantity(f.in_quantity),
                quantity(used_quantity(f)),
                quantity(remaining),
                percent.render(supports_color),
            ]);
        }
        out.push_str(&table.render(supports_color, supports_unicode));
        out
    }
}
