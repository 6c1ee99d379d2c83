//! Command handlers
//!
//! Each handler receives the opened store and the UI context, applies the
//! change through `FarmStore`, and prints either a view or one `--json`
//! document.

pub mod breeding;
pub mod check;
pub mod dashboard;
pub mod export;
pub mod farm;
pub mod feed;
pub mod health;
pub mod pen;
pub mod reset;
pub mod sale;
pub mod sheep;

use anyhow::Result;
use chrono::{Local, NaiveDate};
use serde::Serialize;

use crate::ui::blocks::summary::ResultSummary;
use crate::ui::context::UiContext;
use crate::ui::json::emit_event;
use crate::ui::json::events::ResultEvent;

pub(crate) fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Print a listing: its view, or the data as a result document
pub(crate) fn show<T: Serialize>(ui: &UiContext, command: &str, data: T, view: String) -> Result<()> {
    if ui.json {
        emit_event(&ResultEvent::new(command, data))?;
    } else {
        print!("{view}");
    }
    Ok(())
}

/// Print the outcome of a mutation.
///
/// Warnings end up in the summary box, or in the `warnings` array with `--json`.
pub(crate) fn report<T: Serialize>(
    ui: &UiContext,
    command: &str,
    data: T,
    mut summary: ResultSummary,
    warnings: Vec<String>,
) -> Result<()> {
    if ui.json {
        let mut event = ResultEvent::new(command, data);
        event.warnings = warnings;
        emit_event(&event)?;
        return Ok(());
    }

    for warning in warnings {
        summary.add_warning(warning);
    }
    print!("{}", summary.render(ui.color, ui.unicode));
    Ok(())
}

/// Summary that turns partial when something was skipped
pub(crate) fn summary_for(title: &str, skipped: bool) -> ResultSummary {
    if skipped {
        ResultSummary::partial(title)
    } else {
        ResultSummary::success(title)
    }
}
