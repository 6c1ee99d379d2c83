//! Terminal views, one per listing command.
//!
//! Views only format; they never touch the store.

pub mod breeding;
pub mod check;
pub mod dashboard;
pub mod farm;
pub mod feed;
pub mod health;
pub mod pens;
pub mod sales;
pub mod sheep;

use chrono::NaiveDate;
use flockbook::domain::services::{OccupancyLevel, OccupancyThresholds, PenOccupancy};

use crate::ui::primitives::text::ColoredText;

pub(crate) const DASH: &str = "-";

pub(crate) fn money(amount: f64) -> String {
    format!("{amount:.2}")
}

/// Whole numbers print without decimals
pub(crate) fn quantity(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        format!("{value:.2}")
    }
}

pub(crate) fn date_or_dash(date: Option<NaiveDate>) -> String {
    date.map(|d| d.to_string()).unwrap_or_else(|| DASH.to_string())
}

pub(crate) fn text_or_dash(text: &str) -> String {
    if text.trim().is_empty() {
        DASH.to_string()
    } else {
        text.to_string()
    }
}

/// "46/50 92%" colored by band; "n/a" for a zero-capacity pen
pub(crate) fn occupancy_cell(
    occupancy: &PenOccupancy,
    thresholds: &OccupancyThresholds,
    supports_color: bool,
) -> String {
    let Some(percent) = occupancy.percent else {
        return ColoredText::warning(format!("{}/0 n/a", occupancy.count)).render(supports_color);
    };
    let text = format!("{}/{} {}%", occupancy.count, occupancy.max_capacity, percent);
    match thresholds.level(percent) {
        OccupancyLevel::Normal => ColoredText::success(text),
        OccupancyLevel::Warning => ColoredText::warning(text),
        OccupancyLevel::Critical => ColoredText::error(text).bold(),
    }
    .render(supports_color)
}
