//! Check command handler
//!
//! Read-only integrity report. Problems are reported, never fixed, and do
//! not change the exit code.

use anyhow::Result;
use serde::Serialize;

use flockbook::domain::services::{check_integrity, IntegrityReport};
use flockbook::FarmStore;

use super::show;
use crate::ui::context::UiContext;
use crate::ui::views::check::CheckView;

#[derive(Serialize)]
struct CheckData<'a> {
    location: &'a str,
    clean: bool,
    issues: Vec<String>,
    #[serde(rename = "details")]
    report: &'a IntegrityReport,
}

pub fn cmd_check(store: &FarmStore, ui: &UiContext) -> Result<()> {
    let report = check_integrity(store.data());
    let location = store.location();
    tracing::debug!(issues = report.len(), "integrity check finished");

    let view = CheckView::new(&report, &location).render(ui.color, ui.unicode);
    let data = CheckData {
        location: &location,
        clean: report.is_clean(),
        issues: report.issues.iter().map(|i| i.describe()).collect(),
        report: &report,
    };
    show(ui, "check", data, view)
}
