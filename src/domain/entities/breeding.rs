//! Breeding record entity

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::validation::{optional_text, required_date, required_text, ValidationError};
use crate::domain::services::gestation::expected_lambing_date;
use crate::domain::value_objects::MatingType;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreedingRecord {
    pub id: String,
    pub ewe_id: String,
    /// Unknown sire when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ram_id: Option<String>,
    pub mating_date: NaiveDate,
    pub mating_type: MatingType,
    pub expected_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lamb_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub survival_count: Option<u32>,
    #[serde(default)]
    pub notes: String,
}

impl BreedingRecord {
    pub fn builder() -> BreedingRecordBuilder {
        BreedingRecordBuilder::default()
    }

    pub fn has_lambed(&self) -> bool {
        self.actual_date.is_some()
    }
}

#[derive(Debug, Clone, Default)]
pub struct BreedingRecordBuilder {
    id: Option<String>,
    ewe_id: Option<String>,
    ram_id: Option<String>,
    mating_date: Option<NaiveDate>,
    mating_type: MatingType,
    expected_date: Option<NaiveDate>,
    actual_date: Option<NaiveDate>,
    lamb_count: Option<u32>,
    survival_count: Option<u32>,
    notes: String,
}

impl BreedingRecordBuilder {
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn ewe_id(mut self, ewe_id: impl Into<String>) -> Self {
        self.ewe_id = Some(ewe_id.into());
        self
    }

    pub fn ram_id(mut self, ram_id: impl Into<String>) -> Self {
        self.ram_id = Some(ram_id.into());
        self
    }

    pub fn mating_date(mut self, date: NaiveDate) -> Self {
        self.mating_date = Some(date);
        self
    }

    pub fn mating_type(mut self, mating_type: MatingType) -> Self {
        self.mating_type = mating_type;
        self
    }

    /// Overrides the date derived from the gestation constant
    pub fn expected_date(mut self, date: NaiveDate) -> Self {
        self.expected_date = Some(date);
        self
    }

    pub fn actual_date(mut self, date: NaiveDate) -> Self {
        self.actual_date = Some(date);
        self
    }

    pub fn lamb_count(mut self, count: u32) -> Self {
        self.lamb_count = Some(count);
        self
    }

    pub fn survival_count(mut self, count: u32) -> Self {
        self.survival_count = Some(count);
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    pub fn build(self) -> Result<BreedingRecord, ValidationError> {
        let id = required_text("breeding record", "id", self.id)?;
        let ewe_id = required_text("breeding record", "eweId", self.ewe_id)?;
        let mating_date = required_date("breeding record", "matingDate", self.mating_date)?;
        let expected_date = self
            .expected_date
            .unwrap_or_else(|| expected_lambing_date(mating_date));

        Ok(BreedingRecord {
            id,
            ewe_id,
            ram_id: optional_text(self.ram_id),
            mating_date,
            mating_type: self.mating_type,
            expected_date,
            actual_date: self.actual_date,
            lamb_count: self.lamb_count,
            survival_count: self.survival_count,
            notes: self.notes,
        })
    }
}
