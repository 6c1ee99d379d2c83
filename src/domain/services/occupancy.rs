//! Pen occupancy

use serde::Serialize;

use crate::domain::entities::{Pen, Sheep};

/// Occupancy bands used to colour pens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OccupancyLevel {
    Normal,
    Warning,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OccupancyThresholds {
    pub warning: u32,
    pub critical: u32,
}

impl Default for OccupancyThresholds {
    fn default() -> Self {
        Self {
            warning: 70,
            critical: 90,
        }
    }
}

impl OccupancyThresholds {
    /// Strictly above a threshold moves up a band.
    pub fn level(&self, percent: u32) -> OccupancyLevel {
        if percent > self.critical {
            OccupancyLevel::Critical
        } else if percent > self.warning {
            OccupancyLevel::Warning
        } else {
            OccupancyLevel::Normal
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PenOccupancy {
    pub pen_id: String,
    pub count: usize,
    pub max_capacity: u32,
    /// `None` for a zero-capacity pen
    pub percent: Option<u32>,
}

impl PenOccupancy {
    pub fn of(pen: &Pen, sheep: &[Sheep]) -> Self {
        let count = occupant_count(pen, sheep);
        Self {
            pen_id: pen.id.clone(),
            count,
            max_capacity: pen.max_capacity,
            percent: occupancy_percent(count, pen.max_capacity),
        }
    }

    pub fn level(&self, thresholds: &OccupancyThresholds) -> Option<OccupancyLevel> {
        self.percent.map(|p| thresholds.level(p))
    }
}

/// Sheep assigned to the pen and still in-pen
pub fn occupant_count(pen: &Pen, sheep: &[Sheep]) -> usize {
    sheep
        .iter()
        .filter(|s| s.pen_id == pen.id && s.is_in_pen())
        .count()
}

/// Rounded and capped at 100; undefined for zero capacity
pub fn occupancy_percent(count: usize, max_capacity: u32) -> Option<u32> {
    if max_capacity == 0 {
        return None;
    }
    let raw = 100.0 * count as f64 / f64::from(max_capacity);
    Some(super::round_half_up(raw).min(100.0) as u32)
}
