//! Farm profile entity (singleton)

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::validation::{required_text, ValidationError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FarmInfo {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub owner: String,
    #[serde(default)]
    pub contact: String,
    #[serde(default)]
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub established_date: Option<NaiveDate>,
    #[serde(default)]
    pub notes: String,
}

impl FarmInfo {
    pub fn builder() -> FarmInfoBuilder {
        FarmInfoBuilder::default()
    }

    /// Default profile of a freshly seeded snapshot
    pub fn seed(today: NaiveDate) -> Self {
        Self {
            id: "F001".to_string(),
            name: "My Happy Sheep Farm".to_string(),
            owner: "Zhang San".to_string(),
            contact: "13800138000".to_string(),
            address: "Hohhot, Inner Mongolia".to_string(),
            established_date: Some(today),
            notes: "Welcome to flockbook".to_string(),
        }
    }

    /// Start an edit from the current values
    pub fn to_builder(&self) -> FarmInfoBuilder {
        FarmInfoBuilder {
            id: Some(self.id.clone()),
            name: Some(self.name.clone()),
            owner: self.owner.clone(),
            contact: self.contact.clone(),
            address: self.address.clone(),
            established_date: self.established_date,
            notes: self.notes.clone(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct FarmInfoBuilder {
    id: Option<String>,
    name: Option<String>,
    owner: String,
    contact: String,
    address: String,
    established_date: Option<NaiveDate>,
    notes: String,
}

impl FarmInfoBuilder {
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = owner.into();
        self
    }

    pub fn contact(mut self, contact: impl Into<String>) -> Self {
        self.contact = contact.into();
        self
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    pub fn established_date(mut self, date: NaiveDate) -> Self {
        self.established_date = Some(date);
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    pub fn build(self) -> Result<FarmInfo, ValidationError> {
        Ok(FarmInfo {
            id: required_text("farm", "id", self.id)?,
            name: required_text("farm", "name", self.name)?,
            owner: self.owner,
            contact: self.contact,
            address: self.address,
            established_date: self.established_date,
            notes: self.notes,
        })
    }
}
