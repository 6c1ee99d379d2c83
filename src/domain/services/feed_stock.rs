//! Feed stock arithmetic

use crate::domain::entities::FeedRecord;

pub fn used_quantity(feed: &FeedRecord) -> f64 {
    feed.usage_records.iter().map(|u| u.quantity).sum()
}

/// Stock left in the lot; negative when usage exceeds intake
pub fn remaining_quantity(feed: &FeedRecord) -> f64 {
    feed.in_quantity - used_quantity(feed)
}

/// Remaining stock as a rounded percentage of intake; `None` for an empty intake
pub fn remaining_percent(feed: &FeedRecord) -> Option<i64> {
    if feed.in_quantity == 0.0 {
        return None;
    }
    let raw = 100.0 * remaining_quantity(feed) / feed.in_quantity;
    Some(super::round_half_up(raw) as i64)
}
