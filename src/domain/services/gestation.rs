//! Gestation arithmetic for breeding records

use chrono::{Days, NaiveDate};

use crate::domain::entities::BreedingRecord;

/// Sheep gestation length used for lambing estimates
pub const GESTATION_DAYS: u64 = 150;

/// Mating date plus the gestation period
pub fn expected_lambing_date(mating_date: NaiveDate) -> NaiveDate {
    mating_date
        .checked_add_days(Days::new(GESTATION_DAYS))
        .unwrap_or(NaiveDate::MAX)
}

/// Past its expected date with no lambing recorded
pub fn is_overdue(record: &BreedingRecord, today: NaiveDate) -> bool {
    record.expected_date < today && record.actual_date.is_none()
}

/// Records still waiting for a lambing, in insertion order
pub fn pending_lambings(records: &[BreedingRecord], limit: Option<usize>) -> Vec<&BreedingRecord> {
    let pending = records.iter().filter(|r| r.actual_date.is_none());
    match limit {
        Some(n) => pending.take(n).collect(),
        None => pending.collect(),
    }
}
