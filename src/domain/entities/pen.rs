//! Pen entity

use serde::{Deserialize, Serialize};

use super::validation::{required_text, ValidationError};
use crate::domain::value_objects::PenType;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pen {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub pen_type: PenType,
    /// Advisory only; occupancy above it is allowed
    pub max_capacity: u32,
    #[serde(default)]
    pub notes: String,
}

impl Pen {
    pub fn builder() -> PenBuilder {
        PenBuilder::default()
    }

    /// The two pens every new farm starts with
    pub fn seed() -> Vec<Pen> {
        vec![
            Pen {
                id: "P001".to_string(),
                name: "Pen 1 fattening".to_string(),
                pen_type: PenType::Fattening,
                max_capacity: 50,
                notes: String::new(),
            },
            Pen {
                id: "P002".to_string(),
                name: "Pen 2 ewes".to_string(),
                pen_type: PenType::Breeding,
                max_capacity: 30,
                notes: String::new(),
            },
        ]
    }

    pub fn to_builder(&self) -> PenBuilder {
        PenBuilder {
            id: Some(self.id.clone()),
            name: Some(self.name.clone()),
            pen_type: self.pen_type,
            max_capacity: self.max_capacity,
            notes: self.notes.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PenBuilder {
    id: Option<String>,
    name: Option<String>,
    pen_type: PenType,
    max_capacity: u32,
    notes: String,
}

impl Default for PenBuilder {
    fn default() -> Self {
        Self {
            id: None,
            name: None,
            pen_type: PenType::Fattening,
            max_capacity: 50,
            notes: String::new(),
        }
    }
}

impl PenBuilder {
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn pen_type(mut self, pen_type: PenType) -> Self {
        self.pen_type = pen_type;
        self
    }

    /// Zero is accepted; occupancy percentages for such a pen are undefined.
    pub fn max_capacity(mut self, capacity: u32) -> Self {
        self.max_capacity = capacity;
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    pub fn build(self) -> Result<Pen, ValidationError> {
        Ok(Pen {
            id: required_text("pen", "id", self.id)?,
            name: required_text("pen", "name", self.name)?,
            pen_type: self.pen_type,
            max_capacity: self.max_capacity,
            notes: self.notes,
        })
    }
}
