//! Sale record entity

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::validation::{finite, required_date, required_text, ValidationError};
use crate::domain::value_objects::PaymentMethod;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleRecord {
    pub id: String,
    pub sheep_id: String,
    pub sale_date: NaiveDate,
    /// Walk-in buyer when empty
    #[serde(default)]
    pub customer: String,
    pub quantity: u32,
    pub unit_price: f64,
    /// Stored as entered; not recomputed from price and quantity on read
    pub total_amount: f64,
    #[serde(default)]
    pub payment_method: PaymentMethod,
    #[serde(default)]
    pub notes: String,
}

impl SaleRecord {
    pub fn builder() -> SaleRecordBuilder {
        SaleRecordBuilder::default()
    }
}

#[derive(Debug, Clone)]
pub struct SaleRecordBuilder {
    id: Option<String>,
    sheep_id: Option<String>,
    sale_date: Option<NaiveDate>,
    customer: String,
    quantity: u32,
    unit_price: f64,
    total_amount: Option<f64>,
    payment_method: PaymentMethod,
    notes: String,
}

impl Default for SaleRecordBuilder {
    fn default() -> Self {
        Self {
            id: None,
            sheep_id: None,
            sale_date: None,
            customer: String::new(),
            quantity: 1,
            unit_price: 0.0,
            total_amount: None,
            payment_method: PaymentMethod::default(),
            notes: String::new(),
        }
    }
}

impl SaleRecordBuilder {
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn sheep_id(mut self, sheep_id: impl Into<String>) -> Self {
        self.sheep_id = Some(sheep_id.into());
        self
    }

    pub fn sale_date(mut self, date: NaiveDate) -> Self {
        self.sale_date = Some(date);
        self
    }

    pub fn customer(mut self, customer: impl Into<String>) -> Self {
        self.customer = customer.into();
        self
    }

    pub fn quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn unit_price(mut self, price: f64) -> Self {
        self.unit_price = price;
        self
    }

    /// Overrides `unit_price × quantity`
    pub fn total_amount(mut self, total: f64) -> Self {
        self.total_amount = Some(total);
        self
    }

    pub fn payment_method(mut self, method: PaymentMethod) -> Self {
        self.payment_method = method;
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    pub fn build(self) -> Result<SaleRecord, ValidationError> {
        let id = required_text("sale record", "id", self.id)?;
        let sheep_id = required_text("sale record", "sheepId", self.sheep_id)?;
        let sale_date = required_date("sale record", "saleDate", self.sale_date)?;
        let unit_price = finite("sale record", "unitPrice", self.unit_price)?;
        let total_amount = finite(
            "sale record",
            "totalAmount",
            self.total_amount
                .unwrap_or(unit_price * f64::from(self.quantity)),
        )?;
        if total_amount == 0.0 {
            return Err(ValidationError::ZeroAmount {
                entity: "sale record",
                field: "totalAmount",
            });
        }

        Ok(SaleRecord {
            id,
            sheep_id,
            sale_date,
            customer: self.customer,
            quantity: self.quantity,
            unit_price,
            total_amount,
            payment_method: self.payment_method,
            notes: self.notes,
        })
    }
}
