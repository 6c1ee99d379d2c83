//! Mating method recorded on a breeding record

use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default, clap::ValueEnum,
)]
pub enum MatingType {
    /// Natural service by a ram
    #[default]
    #[serde(rename = "natural")]
    Natural,
    /// Artificial insemination
    #[serde(rename = "AI")]
    #[value(name = "ai", alias = "AI")]
    Ai,
}

impl std::fmt::Display for MatingType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatingType::Natural => write!(f, "natural"),
            MatingType::Ai => write!(f, "AI"),
        }
    }
}
