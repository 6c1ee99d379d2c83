//! Dashboard command handler
//!
//! The default command: stock count, pen occupancy, sales total and the
//! next pending lambings.

use anyhow::Result;
use serde::Serialize;

use flockbook::domain::entities::BreedingRecord;
use flockbook::domain::services::{pending_lambings, DashboardStats, PenOccupancy};
use flockbook::FarmStore;

use super::{show, today};
use crate::ui::context::UiContext;
use crate::ui::views::dashboard::DashboardView;

/// How many pending lambings the dashboard lists
const PENDING_SHOWN: usize = 5;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DashboardData<'a> {
    farm_name: &'a str,
    stats: &'a DashboardStats,
    occupancy: Vec<&'a PenOccupancy>,
    pending_lambings: &'a [&'a BreedingRecord],
}

pub fn cmd_dashboard(store: &FarmStore, ui: &UiContext) -> Result<()> {
    let data = store.data();
    let stats = DashboardStats::compute(data);
    let pens: Vec<_> = data
        .pens
        .iter()
        .map(|pen| (pen, PenOccupancy::of(pen, &data.sheep)))
        .collect();
    let pending = pending_lambings(&data.breeding, Some(PENDING_SHOWN));

    let payload = DashboardData {
        farm_name: &data.farm_info.name,
        stats: &stats,
        occupancy: pens.iter().map(|(_, occ)| occ).collect(),
        pending_lambings: &pending,
    };
    let view = if ui.json {
        String::new()
    } else {
        DashboardView {
            farm: &data.farm_info,
            stats: &stats,
            pens: pens.clone(),
            pending: pending.clone(),
            thresholds: ui.thresholds,
            today: today(),
        }
        .render(ui.color, ui.unicode)
    };

    show(ui, "dashboard", payload, view)
}
