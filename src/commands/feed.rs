//! Feed command handler

use anyhow::Result;

use flockbook::domain::entities::{FeedRecord, FeedUsage};
use flockbook::domain::services::remaining_quantity;
use flockbook::domain::value_objects::RecordKind;
use flockbook::presentation::cli::FeedCommand;
use flockbook::{FarmStore, FlockError};

use super::{report, show, summary_for, today};
use crate::ui::context::UiContext;
use crate::ui::views::feed::FeedListView;
use crate::ui::views::quantity;

pub fn cmd_feed(store: &mut FarmStore, ui: &UiContext, action: FeedCommand) -> Result<()> {
    match action {
        FeedCommand::List => {
            let feed = &store.data().feed;
            let view = FeedListView::new(feed).render(ui.color, ui.unicode);
            show(ui, "feed list", feed, view)
        }
        FeedCommand::Add {
            name,
            feed_type,
            quantity: amount,
            date,
            notes,
        } => {
            let mut builder = FeedRecord::builder()
                .id(store.next_record_id(RecordKind::Feed))
                .name(name)
                .in_quantity(amount)
                .in_date(date.unwrap_or_else(today));
            if let Some(feed_type) = feed_type {
                builder = builder.feed_type(feed_type);
            }
            if let Some(notes) = notes {
                builder = builder.notes(notes);
            }
            let record = builder.build().map_err(FlockError::from)?;
            store.add_feed(record.clone())?;

            let mut summary = summary_for("Feed stocked", false);
            summary.add_stat("Id", &record.id);
            summary.add_stat("Name", &record.name);
            summary.add_stat("Quantity", quantity(record.in_quantity));
            summary.with_next_step(format!(
                "Record usage with `flockbook feed use {} --quantity <kg>`",
                record.id
            ));
            report(ui, "feed add", &record, summary, Vec::new())
        }
        FeedCommand::Use {
            id,
            quantity: amount,
            date,
            target,
        } => {
            let mut builder = FeedUsage::builder()
                .quantity(amount)
                .date(date.unwrap_or_else(today));
            if let Some(target) = target {
                builder = builder.target(target);
            }
            let usage = builder.build().map_err(FlockError::from)?;

            let found = store.record_feed_usage(&id, usage.clone())?;
            let Some(lot) = store.data().find_feed(&id).filter(|_| found) else {
                let warning = format!("no feed record with id '{id}'; nothing recorded");
                let summary = summary_for("Feed usage not recorded", true);
                return report(ui, "feed use", Option::<&FeedRecord>::None, summary, vec![warning]);
            };

            let remaining = remaining_quantity(lot);
            let mut warnings = Vec::new();
            if remaining < 0.0 {
                warnings.push(format!(
                    "more feed used than delivered; {} is now at {}",
                    lot.name,
                    quantity(remaining)
                ));
            }
            let mut summary = summary_for("Feed usage recorded", false);
            summary.add_stat("Feed", &lot.name);
            summary.add_stat("Used", quantity(usage.quantity));
            summary.add_stat("Remaining", quantity(remaining));
            report(ui, "feed use", Some(lot), summary, warnings)
        }
    }
}
