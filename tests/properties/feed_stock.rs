//! Property tests for feed stock arithmetic.

use chrono::NaiveDate;
use proptest::prelude::*;

use flockbook::domain::entities::{FeedRecord, FeedUsage};
use flockbook::domain::services::{remaining_percent, remaining_quantity, used_quantity};

fn lot(in_quantity: f64, usage: &[f64]) -> FeedRecord {
    let day = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
    let mut record = FeedRecord::builder()
        .id("FD1")
        .name("Hay")
        .in_date(day)
        .in_quantity(in_quantity)
        .build()
        .unwrap();
    for q in usage {
        let entry = FeedUsage::builder().date(day).quantity(*q).build().unwrap();
        record = record.with_usage(entry);
    }
    record
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: remaining = delivered - sum of usage, in any order.
    #[test]
    fn property_remaining_is_delivered_minus_used(
        delivered in 0u32..10_000,
        usage in proptest::collection::vec(0u32..500, 0..20),
    ) {
        let usage: Vec<f64> = usage.into_iter().map(f64::from).collect();
        let record = lot(f64::from(delivered), &usage);
        let total: f64 = usage.iter().sum();

        prop_assert_eq!(used_quantity(&record), total);
        prop_assert_eq!(remaining_quantity(&record), f64::from(delivered) - total);

        let mut reversed = usage.clone();
        reversed.reverse();
        prop_assert_eq!(remaining_quantity(&lot(f64::from(delivered), &reversed)), remaining_quantity(&record));
    }

    /// PROPERTY: percent is undefined for an empty delivery and never above 100.
    #[test]
    fn property_percent_bounds(
        delivered in 0u32..10_000,
        usage in proptest::collection::vec(0u32..500, 0..20),
    ) {
        let usage: Vec<f64> = usage.into_iter().map(f64::from).collect();
        let record = lot(f64::from(delivered), &usage);

        match remaining_percent(&record) {
            None => prop_assert_eq!(delivered, 0),
            Some(p) => {
                prop_assert!(delivered > 0);
                prop_assert!(p <= 100);
            }
        }
    }
}
