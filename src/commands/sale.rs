//! Sale command handler

use anyhow::Result;
use serde::Serialize;

use flockbook::domain::entities::{AppData, SaleRecord};
use flockbook::domain::services::roster;
use flockbook::domain::value_objects::RecordKind;
use flockbook::presentation::cli::SaleCommand;
use flockbook::{FarmStore, FlockError};

use super::{report, show, summary_for, today};
use crate::ui::context::UiContext;
use crate::ui::views::money;
use crate::ui::views::sales::SalesListView;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SaleAdded<'a> {
    record: &'a SaleRecord,
    marked_sold: usize,
}

pub fn cmd_sale(store: &mut FarmStore, ui: &UiContext, action: SaleCommand) -> Result<()> {
    match action {
        SaleCommand::List => {
            let sales = &store.data().sales;
            let view = SalesListView::new(sales).render(ui.color, ui.unicode);
            show(ui, "sale list", sales, view)
        }
        SaleCommand::Add {
            sheep,
            customer,
            quantity,
            price,
            total,
            payment,
            date,
            notes,
        } => {
            let mut builder = SaleRecord::builder()
                .id(store.next_record_id(RecordKind::Sale))
                .sheep_id(sheep)
                .unit_price(price)
                .sale_date(date.unwrap_or_else(today));
            if let Some(customer) = customer {
                builder = builder.customer(customer);
            }
            if let Some(quantity) = quantity {
                builder = builder.quantity(quantity);
            }
            if let Some(total) = total {
                builder = builder.total_amount(total);
            }
            if let Some(payment) = payment {
                builder = builder.payment_method(payment);
            }
            if let Some(notes) = notes {
                builder = builder.notes(notes);
            }
            let record = builder.build().map_err(FlockError::from)?;

            let warnings = sale_warnings(store.data(), &record.sheep_id);
            let marked = store.add_sale(record.clone())?;

            let mut summary = summary_for("Sale recorded", marked == 0);
            summary.add_stat("Sheep", &record.sheep_id);
            summary.add_stat("Total", money(record.total_amount));
            summary.add_stat("Payment", record.payment_method.label());
            let data = SaleAdded {
                record: &record,
                marked_sold: marked,
            };
            report(ui, "sale add", data, summary, warnings)
        }
    }
}

/// Sales are recorded whatever the sheep's state; say when that looks odd.
fn sale_warnings(data: &AppData, sheep_id: &str) -> Vec<String> {
    match data.find_sheep(sheep_id) {
        None => vec![format!("no sheep with ear tag '{sheep_id}'; the sale is kept on its own")],
        Some(sheep) if !roster::saleable(&data.sheep).iter().any(|s| s.id == sheep_id) => {
            vec![format!(
                "'{sheep_id}' was already {}; it is marked sold again",
                sheep.status.as_str()
            )]
        }
        Some(_) => Vec::new(),
    }
}
