//! Outcome of a disease case

use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum DiseaseOutcome {
    #[default]
    Recovered,
    Died,
}

impl DiseaseOutcome {
    /// Returns true when recording this outcome marks the sheep deceased
    pub fn is_fatal(&self) -> bool {
        matches!(self, DiseaseOutcome::Died)
    }
}

impl std::fmt::Display for DiseaseOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DiseaseOutcome::Recovered => write!(f, "recovered"),
            DiseaseOutcome::Died => write!(f, "died"),
        }
    }
}
