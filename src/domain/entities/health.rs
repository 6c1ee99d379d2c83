//! Health records: preventive treatments and disease cases

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::validation::{required_date, required_text, ValidationError};
use crate::domain::value_objects::DiseaseOutcome;

/// A vaccination or other preventive treatment given to one sheep
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreventionRecord {
    pub id: String,
    pub sheep_id: String,
    /// Vaccine or treatment name
    pub project: String,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_date: Option<NaiveDate>,
    #[serde(default)]
    pub operator: String,
    #[serde(default)]
    pub notes: String,
}

impl PreventionRecord {
    pub fn builder() -> PreventionRecordBuilder {
        PreventionRecordBuilder::default()
    }
}

#[derive(Debug, Clone)]
pub struct PreventionRecordBuilder {
    id: Option<String>,
    sheep_id: Option<String>,
    project: Option<String>,
    date: Option<NaiveDate>,
    next_date: Option<NaiveDate>,
    operator: String,
    notes: String,
}

impl Default for PreventionRecordBuilder {
    fn default() -> Self {
        Self {
            id: None,
            sheep_id: None,
            project: None,
            date: None,
            next_date: None,
            operator: "admin".to_string(),
            notes: String::new(),
        }
    }
}

impl PreventionRecordBuilder {
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn sheep_id(mut self, sheep_id: impl Into<String>) -> Self {
        self.sheep_id = Some(sheep_id.into());
        self
    }

    pub fn project(mut self, project: impl Into<String>) -> Self {
        self.project = Some(project.into());
        self
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn next_date(mut self, date: NaiveDate) -> Self {
        self.next_date = Some(date);
        self
    }

    pub fn operator(mut self, operator: impl Into<String>) -> Self {
        self.operator = operator.into();
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    pub fn build(self) -> Result<PreventionRecord, ValidationError> {
        Ok(PreventionRecord {
            id: required_text("prevention record", "id", self.id)?,
            sheep_id: required_text("prevention record", "sheepId", self.sheep_id)?,
            project: required_text("prevention record", "project", self.project)?,
            date: required_date("prevention record", "date", self.date)?,
            next_date: self.next_date,
            operator: self.operator,
            notes: self.notes,
        })
    }
}

/// A disease case; a fatal outcome marks the sheep deceased when recorded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiseaseRecord {
    pub id: String,
    pub sheep_id: String,
    pub onset_date: NaiveDate,
    pub disease_name: String,
    #[serde(default)]
    pub symptoms: String,
    #[serde(default)]
    pub treatment: String,
    #[serde(default)]
    pub medicine: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recovery_date: Option<NaiveDate>,
    pub outcome: DiseaseOutcome,
    #[serde(default)]
    pub notes: String,
}

impl DiseaseRecord {
    pub fn builder() -> DiseaseRecordBuilder {
        DiseaseRecordBuilder::default()
    }
}

#[derive(Debug, Clone, Default)]
pub struct DiseaseRecordBuilder {
    id: Option<String>,
    sheep_id: Option<String>,
    onset_date: Option<NaiveDate>,
    disease_name: Option<String>,
    symptoms: String,
    treatment: String,
    medicine: String,
    recovery_date: Option<NaiveDate>,
    outcome: DiseaseOutcome,
    notes: String,
}

impl DiseaseRecordBuilder {
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn sheep_id(mut self, sheep_id: impl Into<String>) -> Self {
        self.sheep_id = Some(sheep_id.into());
        self
    }

    pub fn onset_date(mut self, date: NaiveDate) -> Self {
        self.onset_date = Some(date);
        self
    }

    pub fn disease_name(mut self, name: impl Into<String>) -> Self {
        self.disease_name = Some(name.into());
        self
    }

    pub fn symptoms(mut self, symptoms: impl Into<String>) -> Self {
        self.symptoms = symptoms.into();
        self
    }

    pub fn treatment(mut self, treatment: impl Into<String>) -> Self {
        self.treatment = treatment.into();
        self
    }

    pub fn medicine(mut self, medicine: impl Into<String>) -> Self {
        self.medicine = medicine.into();
        self
    }

    pub fn recovery_date(mut self, date: NaiveDate) -> Self {
        self.recovery_date = Some(date);
        self
    }

    pub fn outcome(mut self, outcome: DiseaseOutcome) -> Self {
        self.outcome = outcome;
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    pub fn build(self) -> Result<DiseaseRecord, ValidationError> {
        Ok(DiseaseRecord {
            id: required_text("disease record", "id", self.id)?,
            sheep_id: required_text("disease record", "sheepId", self.sheep_id)?,
            onset_date: required_date("disease record", "onsetDate", self.onset_date)?,
            disease_name: required_text("disease record", "diseaseName", self.disease_name)?,
            symptoms: self.symptoms,
            treatment: self.treatment,
            medicine: self.medicine,
            recovery_date: self.recovery_date,
            outcome: self.outcome,
            notes: self.notes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 4, 10).unwrap()
    }

    #[test]
    fn prevention_defaults_operator() {
        let record = PreventionRecord::builder()
            .id("PV1")
            .sheep_id("E001")
            .project("Clostridial vaccine")
            .date(day())
            .build()
            .unwrap();
        assert_eq!(record.operator, "admin");
        assert_eq!(record.next_date, None);
    }

    #[test]
    fn prevention_requires_project() {
        let err = PreventionRecord::builder()
            .id("PV1")
            .sheep_id("E001")
            .date(day())
            .build()
            .unwrap_err();
        assert_eq!(err.field(), "project");
    }

    #[test]
    fn disease_defaults_to_recovered() {
        let record = DiseaseRecord::builder()
            .id("DS1")
            .sheep_id("E001")
            .onset_date(day())
            .disease_name("Orf")
            .build()
            .unwrap();
        assert_eq!(record.outcome, DiseaseOutcome::Recovered);
    }

    #[test]
    fn disease_requires_name() {
        let err = DiseaseRecord::builder()
            .id("DS1")
            .sheep_id("E001")
            .onset_date(day())
            .build()
            .unwrap_err();
        assert_eq!(err.field(), "diseaseName");
    }
}
