//! Health command handler
//!
//! Prevention work (vaccination, deworming, ...) and disease cases. A case
//! recorded with outcome `died` marks the sheep deceased.

use anyhow::Result;
use serde::Serialize;

use flockbook::domain::entities::{DiseaseRecord, PreventionRecord};
use flockbook::domain::value_objects::RecordKind;
use flockbook::presentation::cli::{DiseaseCommand, HealthCommand, PreventionCommand};
use flockbook::{FarmStore, FlockError};

use super::{report, show, summary_for, today};
use crate::ui::context::UiContext;
use crate::ui::views::health::{DiseaseListView, PreventionListView};

pub fn cmd_health(store: &mut FarmStore, ui: &UiContext, action: HealthCommand) -> Result<()> {
    match action {
        HealthCommand::Prevention { action } => prevention(store, ui, action),
        HealthCommand::Disease { action } => disease(store, ui, action),
    }
}

fn prevention(store: &mut FarmStore, ui: &UiContext, action: PreventionCommand) -> Result<()> {
    match action {
        PreventionCommand::List { sheep } => {
            let records: Vec<&PreventionRecord> = store
                .data()
                .prevention
                .iter()
                .filter(|r| sheep.as_deref().map_or(true, |id| r.sheep_id == id))
                .collect();
            let view = PreventionListView::new(&records).render(ui.color, ui.unicode);
            show(ui, "health prevention list", &records, view)
        }
        PreventionCommand::Add {
            sheep,
            project,
            date,
            next,
            operator,
            notes,
        } => {
            let mut builder = PreventionRecord::builder()
                .id(store.next_record_id(RecordKind::Prevention))
                .sheep_id(sheep)
                .project(project)
                .date(date.unwrap_or_else(today));
            if let Some(next) = next {
                builder = builder.next_date(next);
            }
            if let Some(operator) = operator {
                builder = builder.operator(operator);
            }
            if let Some(notes) = notes {
                builder = builder.notes(notes);
            }
            let record = builder.build().map_err(FlockError::from)?;

            let mut warnings = Vec::new();
            if !store.data().has_sheep(&record.sheep_id) {
                warnings.push(format!("no sheep with ear tag '{}'", record.sheep_id));
            }
            store.add_prevention(record.clone())?;

            let mut summary = summary_for("Prevention recorded", false);
            summary.add_stat("Sheep", &record.sheep_id);
            summary.add_stat("Project", &record.project);
            if let Some(next) = record.next_date {
                summary.add_stat("Next due", next);
            }
            report(ui, "health prevention add", &record, summary, warnings)
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DiseaseAdded<'a> {
    record: &'a DiseaseRecord,
    marked_deceased: usize,
}

fn disease(store: &mut FarmStore, ui: &UiContext, action: DiseaseCommand) -> Result<()> {
    match action {
        DiseaseCommand::List { sheep } => {
            let records: Vec<&DiseaseRecord> = store
                .data()
                .disease
                .iter()
                .filter(|r| sheep.as_deref().map_or(true, |id| r.sheep_id == id))
                .collect();
            let view = DiseaseListView::new(&records).render(ui.color, ui.unicode);
            show(ui, "health disease list", &records, view)
        }
        DiseaseCommand::Add {
            sheep,
            disease,
            onset,
            symptoms,
            treatment,
            medicine,
            recovered_on,
            outcome,
            notes,
        } => {
            let mut builder = DiseaseRecord::builder()
                .id(store.next_record_id(RecordKind::Disease))
                .sheep_id(sheep)
                .disease_name(disease)
                .onset_date(onset.unwrap_or_else(today));
            if let Some(symptoms) = symptoms {
                builder = builder.symptoms(symptoms);
            }
            if let Some(treatment) = treatment {
                builder = builder.treatment(treatment);
            }
            if let Some(medicine) = medicine {
                builder = builder.medicine(medicine);
            }
            if let Some(date) = recovered_on {
                builder = builder.recovery_date(date);
            }
            if let Some(outcome) = outcome {
                builder = builder.outcome(outcome);
            }
            if let Some(notes) = notes {
                builder = builder.notes(notes);
            }
            let record = builder.build().map_err(FlockError::from)?;

            let known = store.data().has_sheep(&record.sheep_id);
            let marked = store.add_disease(record.clone())?;

            let mut warnings = Vec::new();
            if !known {
                warnings.push(format!("no sheep with ear tag '{}'", record.sheep_id));
            }
            let fatal_but_unmatched = record.outcome.is_fatal() && marked == 0;
            let mut summary = summary_for("Disease case recorded", fatal_but_unmatched);
            summary.add_stat("Sheep", &record.sheep_id);
            summary.add_stat("Disease", &record.disease_name);
            if record.outcome.is_fatal() {
                summary.add_stat("Marked deceased", marked);
            }
            let data = DiseaseAdded {
                record: &record,
                marked_deceased: marked,
            };
            report(ui, "health disease add", data, summary, warnings)
        }
    }
}
