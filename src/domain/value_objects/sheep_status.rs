//! Sheep status value object - the lifecycle state of a sheep record
//!
//! - `InPen`: counted in stock and pen occupancy
//! - `Sold`: set when a sale is recorded for the sheep
//! - `Deceased`: set when a disease case ends in death

use serde::{Deserialize, Serialize};

/// Lifecycle state of a sheep
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum SheepStatus {
    /// Currently kept on the farm
    #[default]
    InPen,
    /// Left the farm through a sale
    Sold,
    /// Died on the farm
    Deceased,
}

impl SheepStatus {
    pub const ALL: [SheepStatus; 3] = [SheepStatus::InPen, SheepStatus::Sold, SheepStatus::Deceased];

    /// Returns true if the sheep still counts towards stock
    pub fn is_in_pen(&self) -> bool {
        matches!(self, SheepStatus::InPen)
    }

    /// Returns true for states with no operation leading back to `InPen`
    pub fn is_terminal(&self) -> bool {
        !self.is_in_pen()
    }

    /// Token used in the stored snapshot
    pub fn as_str(&self) -> &'static str {
        match self {
            SheepStatus::InPen => "in-pen",
            SheepStatus::Sold => "sold",
            SheepStatus::Deceased => "deceased",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SheepStatus::InPen => "In pen",
            SheepStatus::Sold => "Sold",
            SheepStatus::Deceased => "Deceased",
        }
    }
}

impl std::fmt::Display for SheepStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
