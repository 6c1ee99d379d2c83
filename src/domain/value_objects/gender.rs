//! Gender and origin of a sheep

use serde::{Deserialize, Serialize};

/// Sex of a sheep; ewes are female, rams are male
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default, clap::ValueEnum,
)]
pub enum Gender {
    #[serde(rename = "M")]
    #[value(name = "male", aliases = ["m", "ram"])]
    Male,
    #[default]
    #[serde(rename = "F")]
    #[value(name = "female", aliases = ["f", "ewe"])]
    Female,
}

impl Gender {
    pub fn symbol(&self) -> &'static str {
        match self {
            Gender::Male => "M",
            Gender::Female => "F",
        }
    }

    pub fn is_ewe(&self) -> bool {
        matches!(self, Gender::Female)
    }

    pub fn is_ram(&self) -> bool {
        matches!(self, Gender::Male)
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// How a sheep came to the farm
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum SheepSource {
    /// Born on the farm
    #[default]
    Bred,
    /// Bought in
    Purchased,
}

impl std::fmt::Display for SheepSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SheepSource::Bred => write!(f, "bred"),
            SheepSource::Purchased => write!(f, "purchased"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gender_serializes_as_single_letter() {
        assert_eq!(serde_json::to_string(&Gender::Male).unwrap(), r#""M""#);
        let parsed: Gender = serde_json::from_str(r#""F""#).unwrap();
        assert_eq!(parsed, Gender::Female);
    }

    #[test]
    fn ewe_and_ram_follow_gender() {
        assert!(Gender::Female.is_ewe());
        assert!(!Gender::Female.is_ram());
        assert!(Gender::Male.is_ram());
    }

    #[test]
    fn source_serde_lowercase() {
        let parsed: SheepSource = serde_json::from_str(r#""purchased""#).unwrap();
        assert_eq!(parsed, SheepSource::Purchased);
        assert_eq!(SheepSource::default(), SheepSource::Bred);
    }
}
