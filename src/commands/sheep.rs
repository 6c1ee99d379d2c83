//! Sheep command handler

use anyhow::Result;
use serde::Serialize;

use flockbook::domain::entities::{AppData, Sheep};
use flockbook::domain::services::roster;
use flockbook::presentation::cli::{Roster, SheepCommand, SheepFields};
use flockbook::{FarmStore, FlockError, FlockResult};

use super::{report, show, summary_for, today};
use crate::ui::context::UiContext;
use crate::ui::output::print_warning;
use crate::ui::views::sheep::SheepListView;

pub fn cmd_sheep(store: &mut FarmStore, ui: &UiContext, action: SheepCommand) -> Result<()> {
    match action {
        SheepCommand::List {
            search,
            status,
            pen,
            only,
        } => {
            let data = store.data();
            if let Some(pen) = pen.as_deref() {
                if data.find_pen(pen).is_none() && !ui.json {
                    print_warning(&format!("no pen with code '{pen}'"), ui.color, ui.unicode);
                }
            }

            let mut shown = match search.as_deref() {
                Some(term) => roster::search(&data.sheep, term),
                None => data.sheep.iter().collect(),
            };
            shown.retain(|s| {
                status.map_or(true, |st| s.status == st)
                    && pen.as_deref().map_or(true, |p| s.pen_id == p)
                    && only.map_or(true, |r| in_roster(s, r))
            });

            let filter = describe_filter(
                search.as_deref(),
                status.map(|s| s.as_str()),
                pen.as_deref(),
                only,
            );
            let mut view = SheepListView::new(&shown, data.sheep.len());
            if let Some(filter) = filter {
                view = view.with_filter(filter);
            }
            let rendered = view.render(ui.color, ui.unicode);
            show(ui, "sheep list", &shown, rendered)
        }
        SheepCommand::Add { id, fields } => {
            let sheep = new_sheep(store.data(), id, fields)?;
            let warnings = pen_warnings(store.data(), &sheep);
            store.add_sheep(sheep.clone())?;

            let mut summary = summary_for("Sheep registered", false);
            summary.add_stat("Ear tag", &sheep.id);
            summary.add_stat("Pen", &sheep.pen_id);
            summary.add_stat("Status", sheep.status.label());
            report(ui, "sheep add", &sheep, summary, warnings)
        }
        SheepCommand::Update { id, fields } => {
            let Some(current) = store.data().find_sheep(&id) else {
                let warning = format!("no sheep with ear tag '{id}'; nothing changed");
                let summary = summary_for("Sheep not updated", true);
                return report(ui, "sheep update", Option::<&Sheep>::None, summary, vec![warning]);
            };
            let updated = apply_fields(current, fields)?;
            let warnings = pen_warnings(store.data(), &updated);
            store.update_sheep(updated.clone())?;

            let mut summary = summary_for("Sheep updated", false);
            summary.add_stat("Ear tag", &updated.id);
            summary.add_stat("Pen", &updated.pen_id);
            summary.add_stat("Status", updated.status.label());
            report(ui, "sheep update", Some(&updated), summary, warnings)
        }
        SheepCommand::Delete { id } => {
            let removed = store.delete_sheep(&id)?;

            #[derive(Serialize)]
            struct Deleted<'a> {
                id: &'a str,
                removed: usize,
            }

            let mut warnings = Vec::new();
            if removed == 0 {
                warnings.push(format!("no sheep with ear tag '{id}'"));
            }
            let mut summary = summary_for("Sheep removed", removed == 0);
            summary.add_stat("Ear tag", &id);
            summary.add_stat("Removed", removed);
            if removed > 0 {
                summary.with_next_step("Records that mention it are kept; `flockbook check` lists them");
            }
            report(ui, "sheep delete", Deleted { id: &id, removed }, summary, warnings)
        }
    }
}

fn in_roster(sheep: &Sheep, roster: Roster) -> bool {
    match roster {
        Roster::Ewes => sheep.gender.is_ewe(),
        Roster::Rams => sheep.gender.is_ram(),
        Roster::Saleable => sheep.is_in_pen(),
    }
}

fn describe_filter(
    search: Option<&str>,
    status: Option<&str>,
    pen: Option<&str>,
    only: Option<Roster>,
) -> Option<String> {
    let mut parts = Vec::new();
    if let Some(term) = search {
        parts.push(format!("\"{term}\""));
    }
    if let Some(status) = status {
        parts.push(format!("status {status}"));
    }
    if let Some(pen) = pen {
        parts.push(format!("pen {pen}"));
    }
    match only {
        Some(Roster::Ewes) => parts.push("ewes".to_string()),
        Some(Roster::Rams) => parts.push("rams".to_string()),
        Some(Roster::Saleable) => parts.push("saleable".to_string()),
        None => {}
    }
    (!parts.is_empty()).then(|| parts.join(", "))
}

/// Ear tags must be unique; the store itself accepts duplicates.
fn new_sheep(data: &AppData, id: String, fields: SheepFields) -> FlockResult<Sheep> {
    if data.has_sheep(&id) {
        return Err(FlockError::DuplicateEarTag { id });
    }

    let mut builder = Sheep::builder()
        .id(id)
        .farm_id(data.farm_info.id.as_str())
        .birth_date(fields.birth_date.unwrap_or_else(today));
    if let Some(breed) = fields.breed {
        builder = builder.breed(breed);
    }
    if let Some(gender) = fields.gender {
        builder = builder.gender(gender);
    }
    if let Some(status) = fields.status {
        builder = builder.status(status);
    }
    if let Some(pen) = fields.pen {
        builder = builder.pen_id(pen);
    }
    if let Some(source) = fields.source {
        builder = builder.source(source);
    }
    if let Some(notes) = fields.notes {
        builder = builder.notes(notes);
    }
    Ok(builder.build()?)
}

fn apply_fields(current: &Sheep, fields: SheepFields) -> FlockResult<Sheep> {
    let mut builder = current.to_builder();
    if let Some(breed) = fields.breed {
        builder = builder.breed(breed);
    }
    if let Some(gender) = fields.gender {
        builder = builder.gender(gender);
    }
    if let Some(date) = fields.birth_date {
        builder = builder.birth_date(date);
    }
    if let Some(status) = fields.status {
        builder = builder.status(status);
    }
    if let Some(pen) = fields.pen {
        builder = builder.pen_id(pen);
    }
    if let Some(source) = fields.source {
        builder = builder.source(source);
    }
    if let Some(notes) = fields.notes {
        builder = builder.notes(notes);
    }
    Ok(builder.build()?)
}

fn pen_warnings(data: &AppData, sheep: &Sheep) -> Vec<String> {
    if data.find_pen(&sheep.pen_id).is_some() {
        return Vec::new();
    }
    vec![format!(
        "pen '{}' does not exist; the sheep is saved but counts towards no pen",
        sheep.pen_id
    )]
}
