//! Domain Services
//!
//! Pure derived views over the farm snapshot. Nothing here is stored;
//! every value is recomputed from `AppData` when asked for.

pub mod dashboard;
pub mod feed_stock;
pub mod gestation;
pub mod integrity;
pub mod occupancy;
pub mod roster;

pub use dashboard::DashboardStats;
pub use feed_stock::{remaining_percent, remaining_quantity, used_quantity};
pub use gestation::{expected_lambing_date, is_overdue, pending_lambings, GESTATION_DAYS};
pub use integrity::{check_integrity, IntegrityIssue, IntegrityReport};
pub use occupancy::{
    occupancy_percent, occupant_count, OccupancyLevel, OccupancyThresholds, PenOccupancy,
};

/// Half-up rounding as spreadsheet users expect: 12.5 becomes 13, -2.5 becomes -2.
pub(crate) fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}
