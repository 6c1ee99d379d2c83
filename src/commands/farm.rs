//! Farm command handler

use anyhow::Result;

use flockbook::domain::entities::FarmInfo;
use flockbook::presentation::cli::{FarmCommand, FarmFields};
use flockbook::{FarmStore, FlockResult};

use super::{report, show};
use crate::ui::blocks::summary::ResultSummary;
use crate::ui::context::UiContext;
use crate::ui::views::farm::FarmView;

pub fn cmd_farm(store: &mut FarmStore, ui: &UiContext, action: FarmCommand) -> Result<()> {
    match action {
        FarmCommand::Show => {
            let location = store.location();
            let farm = &store.data().farm_info;
            let view = FarmView::new(farm, &location).render(ui.color, ui.unicode);
            show(ui, "farm show", farm, view)
        }
        FarmCommand::Set(fields) => {
            let updated = apply_fields(&store.data().farm_info, fields)?;
            store.update_farm_info(updated)?;

            let farm = &store.data().farm_info;
            let mut summary = ResultSummary::success("Farm details saved");
            summary.add_stat("Name", &farm.name);
            summary.add_stat("Owner", &farm.owner);
            report(ui, "farm set", farm, summary, Vec::new())
        }
    }
}

fn apply_fields(current: &FarmInfo, fields: FarmFields) -> FlockResult<FarmInfo> {
    let mut builder = current.to_builder();
    if let Some(name) = fields.name {
        builder = builder.name(name);
    }
    if let Some(owner) = fields.owner {
        builder = builder.owner(owner);
    }
    if let Some(contact) = fields.contact {
        builder = builder.contact(contact);
    }
    if let Some(address) = fields.address {
        builder = builder.address(address);
    }
    if let Some(date) = fields.established {
        builder = builder.established_date(date);
    }
    if let Some(notes) = fields.notes {
        builder = builder.notes(notes);
    }
    Ok(builder.build()?)
}
