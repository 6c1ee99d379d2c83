//! Breeding command handler

use anyhow::Result;

use flockbook::domain::entities::{AppData, BreedingRecord};
use flockbook::domain::services::{pending_lambings, roster};
use flockbook::domain::value_objects::RecordKind;
use flockbook::presentation::cli::BreedingCommand;
use flockbook::{FarmStore, FlockError};

use super::{report, show, summary_for, today};
use crate::ui::context::UiContext;
use crate::ui::views::breeding::BreedingListView;

pub fn cmd_breeding(store: &mut FarmStore, ui: &UiContext, action: BreedingCommand) -> Result<()> {
    match action {
        BreedingCommand::List { pending } => {
            let data = store.data();
            let records: Vec<&BreedingRecord> = if pending {
                pending_lambings(&data.breeding, None)
            } else {
                data.breeding.iter().collect()
            };
            let view =
                BreedingListView::new(&records, today(), pending).render(ui.color, ui.unicode);
            show(ui, "breeding list", &records, view)
        }
        BreedingCommand::Add {
            ewe,
            ram,
            date,
            mating_type,
            expected,
            lambed,
            lambs,
            survived,
            notes,
        } => {
            let mut builder = BreedingRecord::builder()
                .id(store.next_record_id(RecordKind::Breeding))
                .ewe_id(ewe)
                .mating_date(date.unwrap_or_else(today));
            if let Some(ram) = ram {
                builder = builder.ram_id(ram);
            }
            if let Some(mating_type) = mating_type {
                builder = builder.mating_type(mating_type);
            }
            if let Some(expected) = expected {
                builder = builder.expected_date(expected);
            }
            if let Some(lambed) = lambed {
                builder = builder.actual_date(lambed);
            }
            if let Some(lambs) = lambs {
                builder = builder.lamb_count(lambs);
            }
            if let Some(survived) = survived {
                builder = builder.survival_count(survived);
            }
            if let Some(notes) = notes {
                builder = builder.notes(notes);
            }
            let record = builder.build().map_err(FlockError::from)?;

            let warnings = parent_warnings(store.data(), &record);
            store.add_breeding(record.clone())?;

            let mut summary = summary_for("Mating recorded", false);
            summary.add_stat("Ewe", &record.ewe_id);
            summary.add_stat("Mated", record.mating_date);
            summary.add_stat("Lambing due", record.expected_date);
            report(ui, "breeding add", &record, summary, warnings)
        }
    }
}

/// The store accepts any ear tags; point out the ones that look wrong.
fn parent_warnings(data: &AppData, record: &BreedingRecord) -> Vec<String> {
    let mut warnings = Vec::new();
    if !data.has_sheep(&record.ewe_id) {
        warnings.push(format!("no sheep with ear tag '{}'", record.ewe_id));
    } else if !roster::ewes(&data.sheep).iter().any(|s| s.id == record.ewe_id) {
        warnings.push(format!("'{}' is not registered as a ewe", record.ewe_id));
    }
    if let Some(ram) = &record.ram_id {
        if !data.has_sheep(ram) {
            warnings.push(format!("no sheep with ear tag '{ram}'"));
        } else if !roster::rams(&data.sheep).iter().any(|s| &s.id == ram) {
            warnings.push(format!("'{ram}' is not registered as a ram"));
        }
    }
    warnings
}
