//! Pen classification

use serde::{Deserialize, Serialize};

/// What a pen is used for
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum PenType {
    /// Growing out stock for sale
    #[default]
    Fattening,
    /// Ewes and breeding rams
    Breeding,
    /// Sick or newly purchased animals
    Isolation,
}

impl PenType {
    pub fn label(&self) -> &'static str {
        match self {
            PenType::Fattening => "fattening",
            PenType::Breeding => "breeding",
            PenType::Isolation => "isolation",
        }
    }
}

impl std::fmt::Display for PenType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_lowercase() {
        let parsed: PenType = serde_json::from_str(r#""isolation""#).unwrap();
        assert_eq!(parsed, PenType::Isolation);
        assert_eq!(
            serde_json::to_string(&PenType::Breeding).unwrap(),
            r#""breeding""#
        );
    }

    #[test]
    fn unknown_token_is_rejected() {
        assert!(serde_json::from_str::<PenType>(r#""nursery""#).is_err());
    }
}
