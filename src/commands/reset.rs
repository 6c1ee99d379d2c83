//! Reset command handler
//!
//! Deletes the data file and starts again from the seed farm. Asks first
//! unless `--yes`; with `--json` there is nobody to ask, so `--yes` is
//! required.

use anyhow::{bail, Result};
use dialoguer::Confirm;
use serde::Serialize;

use flockbook::FarmStore;

use super::{report, summary_for};
use crate::ui::context::UiContext;
use crate::ui::theme::FlockTheme;

#[derive(Serialize)]
struct ResetData {
    reset: bool,
    location: String,
}

pub fn cmd_reset(store: &mut FarmStore, ui: &UiContext, yes: bool) -> Result<()> {
    let location = store.location();

    if !yes {
        if ui.json || !ui.caps.is_tty {
            bail!("reset needs confirmation; pass --yes to delete all farm data");
        }
        let theme = FlockTheme::new(ui.color, ui.unicode);
        let confirmed = Confirm::with_theme(&theme)
            .with_prompt(format!(
                "Delete all farm data in {location} and start again?"
            ))
            .default(false)
            .interact()?;
        if !confirmed {
            tracing::info!("reset cancelled");
            let summary = summary_for("Reset cancelled", true);
            return report(
                ui,
                "reset",
                ResetData {
                    reset: false,
                    location,
                },
                summary,
                Vec::new(),
            );
        }
    }

    store.reset()?;

    let mut summary = summary_for("Farm data reset", false);
    summary.add_stat("Data file", &location);
    summary.add_stat("Pens", store.data().pens.len());
    summary.with_next_step("Set your farm details with `flockbook farm set --name <name>`");
    report(
        ui,
        "reset",
        ResetData {
            reset: true,
            location,
        },
        summary,
        Vec::new(),
    )
}
