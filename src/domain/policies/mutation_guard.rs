//! Mutation guards
//!
//! Every store mutation is described as a [`Mutation`] and shown to a guard
//! before it is applied. The default guard approves everything, which keeps
//! the store permissive; a stricter guard can be selected in configuration.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{
    AppData, BreedingRecord, DiseaseRecord, FarmInfo, FeedRecord, Pen, PreventionRecord,
    SaleRecord, Sheep,
};

/// A pending change to the snapshot
#[derive(Debug, Clone, Copy)]
pub enum Mutation<'a> {
    UpdateFarmInfo(&'a FarmInfo),
    AddSheep(&'a Sheep),
    UpdateSheep(&'a Sheep),
    DeleteSheep(&'a str),
    AddPen(&'a Pen),
    UpdatePen(&'a Pen),
    AddBreeding(&'a BreedingRecord),
    AddPrevention(&'a PreventionRecord),
    AddFeed(&'a FeedRecord),
    UpdateFeed(&'a FeedRecord),
    AddDisease(&'a DiseaseRecord),
    AddSale(&'a SaleRecord),
    Reset,
}

impl Mutation<'_> {
    pub fn name(&self) -> &'static str {
        match self {
            Mutation::UpdateFarmInfo(_) => "update_farm_info",
            Mutation::AddSheep(_) => "add_sheep",
            Mutation::UpdateSheep(_) => "update_sheep",
            Mutation::DeleteSheep(_) => "delete_sheep",
            Mutation::AddPen(_) => "add_pen",
            Mutation::UpdatePen(_) => "update_pen",
            Mutation::AddBreeding(_) => "add_breeding",
            Mutation::AddPrevention(_) => "add_prevention",
            Mutation::AddFeed(_) => "add_feed",
            Mutation::UpdateFeed(_) => "update_feed",
            Mutation::AddDisease(_) => "add_disease",
            Mutation::AddSale(_) => "add_sale",
            Mutation::Reset => "reset",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{mutation} rejected: {reason}")]
pub struct GuardViolation {
    pub mutation: &'static str,
    pub reason: String,
}

impl GuardViolation {
    pub fn new(mutation: &Mutation<'_>, reason: impl Into<String>) -> Self {
        Self {
            mutation: mutation.name(),
            reason: reason.into(),
        }
    }
}

pub trait MutationGuard: Send + Sync {
    fn check(&self, mutation: &Mutation<'_>, data: &AppData) -> Result<(), GuardViolation>;
}

/// Approves every mutation
#[derive(Debug, Clone, Copy, Default)]
pub struct PermissiveGuard;

impl MutationGuard for PermissiveGuard {
    fn check(&self, _mutation: &Mutation<'_>, _data: &AppData) -> Result<(), GuardViolation> {
        Ok(())
    }
}

/// Refuses status changes out of terminal states and deletes that would orphan records.
///
/// - sales and fatal disease cases must name a sheep that is currently in-pen
/// - a sheep referenced by any breeding, prevention, disease or sale record cannot be deleted
#[derive(Debug, Clone, Copy, Default)]
pub struct StrictStatusGuard;

impl StrictStatusGuard {
    fn require_in_pen(
        mutation: &Mutation<'_>,
        data: &AppData,
        sheep_id: &str,
    ) -> Result<(), GuardViolation> {
        match data.find_sheep(sheep_id) {
            None => Err(GuardViolation::new(
                mutation,
                format!("no sheep with ear tag {sheep_id}"),
            )),
            Some(sheep) if !sheep.is_in_pen() => Err(GuardViolation::new(
                mutation,
                format!("sheep {sheep_id} is already {}", sheep.status.as_str()),
            )),
            Some(_) => Ok(()),
        }
    }

    fn is_referenced(data: &AppData, sheep_id: &str) -> bool {
        data.breeding
            .iter()
            .any(|r| r.ewe_id == sheep_id || r.ram_id.as_deref() == Some(sheep_id))
            || data.prevention.iter().any(|r| r.sheep_id == sheep_id)
            || data.disease.iter().any(|r| r.sheep_id == sheep_id)
            || data.sales.iter().any(|r| r.sheep_id == sheep_id)
    }
}

impl MutationGuard for StrictStatusGuard {
    fn check(&self, mutation: &Mutation<'_>, data: &AppData) -> Result<(), GuardViolation> {
        match mutation {
            Mutation::AddSale(sale) => Self::require_in_pen(mutation, data, &sale.sheep_id),
            Mutation::AddDisease(case) if case.outcome.is_fatal() => {
                Self::require_in_pen(mutation, data, &case.sheep_id)
            }
            Mutation::DeleteSheep(id) if Self::is_referenced(data, id) => Err(GuardViolation::new(
                mutation,
                format!("sheep {id} is still referenced by other records"),
            )),
            _ => Ok(()),
        }
    }
}

/// Guard selection as written in configuration
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum GuardMode {
    #[default]
    Permissive,
    Strict,
}

impl GuardMode {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "permissive" => Some(GuardMode::Permissive),
            "strict" => Some(GuardMode::Strict),
            _ => None,
        }
    }

    pub fn guard(&self) -> std::sync::Arc<dyn MutationGuard> {
        match self {
            GuardMode::Permissive => std::sync::Arc::new(PermissiveGuard),
            GuardMode::Strict => std::sync::Arc::new(StrictStatusGuard),
        }
    }
}
