//! Pen command handler

use anyhow::Result;

use flockbook::domain::entities::{AppData, Pen, PenBuilder};
use flockbook::domain::services::PenOccupancy;
use flockbook::domain::value_objects::suggest_pen_id;
use flockbook::presentation::cli::{PenCommand, PenFields};
use flockbook::{FarmStore, FlockResult};

use super::{report, show, summary_for};
use crate::ui::context::UiContext;
use crate::ui::views::pens::PenListView;

pub fn cmd_pen(store: &mut FarmStore, ui: &UiContext, action: PenCommand) -> Result<()> {
    match action {
        PenCommand::List => {
            let data = store.data();
            let rows: Vec<_> = data
                .pens
                .iter()
                .map(|pen| (pen, PenOccupancy::of(pen, &data.sheep)))
                .collect();
            let occupancy: Vec<_> = rows.iter().map(|(_, occ)| occ.clone()).collect();
            let view = PenListView::new(rows, ui.thresholds).render(ui.color, ui.unicode);
            show(ui, "pen list", occupancy, view)
        }
        PenCommand::Add { id, fields } => {
            let id = id.unwrap_or_else(|| free_pen_id(store.data()));
            let mut warnings = Vec::new();
            if store.data().find_pen(&id).is_some() {
                warnings.push(format!(
                    "pen code '{id}' is already used; occupancy will count both pens together"
                ));
            }
            let pen = apply_fields(Pen::builder().id(id), fields)?;
            store.add_pen(pen.clone())?;

            let mut summary = summary_for("Pen created", false);
            summary.add_stat("Code", &pen.id);
            summary.add_stat("Name", &pen.name);
            summary.add_stat("Capacity", pen.max_capacity);
            report(ui, "pen add", &pen, summary, warnings)
        }
        PenCommand::Update { id, fields } => {
            let Some(current) = store.data().find_pen(&id) else {
                let warning = format!("no pen with code '{id}'; nothing changed");
                let summary = summary_for("Pen not updated", true);
                return report(ui, "pen update", Option::<&Pen>::None, summary, vec![warning]);
            };
            let updated = apply_fields(current.to_builder(), fields)?;
            store.update_pen(updated.clone())?;

            let occupancy = PenOccupancy::of(&updated, &store.data().sheep);
            let mut warnings = Vec::new();
            if occupancy.count > updated.max_capacity as usize {
                warnings.push(format!(
                    "{} sheep are in this pen, more than its new capacity of {}",
                    occupancy.count, updated.max_capacity
                ));
            }
            let mut summary = summary_for("Pen updated", false);
            summary.add_stat("Code", &updated.id);
            summary.add_stat("Capacity", updated.max_capacity);
            summary.add_stat("Occupants", occupancy.count);
            report(ui, "pen update", Some(&updated), summary, warnings)
        }
    }
}

/// First `P###` code at or after the suggestion that no pen uses yet
fn free_pen_id(data: &AppData) -> String {
    let mut n = data.pens.len();
    loop {
        let candidate = suggest_pen_id(n);
        if data.find_pen(&candidate).is_none() {
            return candidate;
        }
        n += 1;
    }
}

fn apply_fields(mut builder: PenBuilder, fields: PenFields) -> FlockResult<Pen> {
    if let Some(name) = fields.name {
        builder = builder.name(name);
    }
    if let Some(pen_type) = fields.pen_type {
        builder = builder.pen_type(pen_type);
    }
    if let Some(capacity) = fields.capacity {
        builder = builder.max_capacity(capacity);
    }
    if let Some(notes) = fields.notes {
        builder = builder.notes(notes);
    }
    Ok(builder.build()?)
}
