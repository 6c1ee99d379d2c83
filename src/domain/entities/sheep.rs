//! Sheep entity, keyed by ear tag

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::validation::{required_date, required_text, ValidationError};
use crate::domain::value_objects::{Gender, SheepSource, SheepStatus};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sheep {
    /// Ear tag
    pub id: String,
    #[serde(default)]
    pub farm_id: String,
    #[serde(default)]
    pub breed: String,
    pub gender: Gender,
    pub birth_date: NaiveDate,
    pub status: SheepStatus,
    pub pen_id: String,
    pub source: SheepSource,
    #[serde(default)]
    pub notes: String,
}

impl Sheep {
    pub fn builder() -> SheepBuilder {
        SheepBuilder::default()
    }

    pub fn is_in_pen(&self) -> bool {
        self.status.is_in_pen()
    }

    /// Start an edit from the current values
    pub fn to_builder(&self) -> SheepBuilder {
        SheepBuilder {
            id: Some(self.id.clone()),
            farm_id: self.farm_id.clone(),
            breed: self.breed.clone(),
            gender: self.gender,
            birth_date: Some(self.birth_date),
            status: self.status,
            pen_id: Some(self.pen_id.clone()),
            source: self.source,
            notes: self.notes.clone(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SheepBuilder {
    id: Option<String>,
    farm_id: String,
    breed: String,
    gender: Gender,
    birth_date: Option<NaiveDate>,
    status: SheepStatus,
    pen_id: Option<String>,
    source: SheepSource,
    notes: String,
}

impl SheepBuilder {
    pub fn id(mut self, ear_tag: impl Into<String>) -> Self {
        self.id = Some(ear_tag.into());
        self
    }

    pub fn farm_id(mut self, farm_id: impl Into<String>) -> Self {
        self.farm_id = farm_id.into();
        self
    }

    pub fn breed(mut self, breed: impl Into<String>) -> Self {
        self.breed = breed.into();
        self
    }

    pub fn gender(mut self, gender: Gender) -> Self {
        self.gender = gender;
        self
    }

    pub fn birth_date(mut self, date: NaiveDate) -> Self {
        self.birth_date = Some(date);
        self
    }

    pub fn status(mut self, status: SheepStatus) -> Self {
        self.status = status;
        self
    }

    pub fn pen_id(mut self, pen_id: impl Into<String>) -> Self {
        self.pen_id = Some(pen_id.into());
        self
    }

    pub fn source(mut self, source: SheepSource) -> Self {
        self.source = source;
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    pub fn build(self) -> Result<Sheep, ValidationError> {
        Ok(Sheep {
            id: required_text("sheep", "id", self.id)?,
            farm_id: self.farm_id,
            breed: self.breed,
            gender: self.gender,
            birth_date: required_date("sheep", "birthDate", self.birth_date)?,
            status: self.status,
            pen_id: required_text("sheep", "penId", self.pen_id)?,
            source: self.source,
            notes: self.notes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn born() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 11, 20).unwrap()
    }

    #[test]
    fn builder_applies_form_defaults() {
        let sheep = Sheep::builder()
            .id("E001")
            .pen_id("P001")
            .birth_date(born())
            .build()
            .unwrap();

        assert_eq!(sheep.gender, Gender::Female);
        assert_eq!(sheep.status, SheepStatus::InPen);
        assert_eq!(sheep.source, SheepSource::Bred);
        assert!(sheep.is_in_pen());
    }

    #[test]
    fn ear_tag_and_pen_are_required() {
        let err = Sheep::builder()
            .pen_id("P001")
            .birth_date(born())
            .build()
            .unwrap_err();
        assert_eq!(err.field(), "id");

        let err = Sheep::builder()
            .id("E001")
            .birth_date(born())
            .build()
            .unwrap_err();
        assert_eq!(err.field(), "penId");
    }

    #[test]
    fn to_builder_round_trips() {
        let sheep = Sheep::builder()
            .id("E002")
            .pen_id("P002")
            .breed("Hu")
            .gender(Gender::Male)
            .birth_date(born())
            .build()
            .unwrap();

        let moved = sheep.to_builder().pen_id("P001").build().unwrap();
        assert_eq!(moved.pen_id, "P001");
        assert_eq!(moved.breed, "Hu");
        assert_eq!(moved.gender, Gender::Male);
    }

    #[test]
    fn json_shape_matches_storage_layout() {
        let sheep = Sheep::builder()
            .id("E003")
            .pen_id("P001")
            .birth_date(born())
            .build()
            .unwrap();
        let json = serde_json::to_value(&sheep).unwrap();
        assert_eq!(json["penId"], "P001");
        assert_eq!(json["birthDate"], "2023-11-20");
        assert_eq!(json["status"], "in-pen");
        assert_eq!(json["gender"], "F");
    }
}
