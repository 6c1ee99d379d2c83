//! Property tests for pen occupancy.

use chrono::NaiveDate;
use proptest::prelude::*;

use flockbook::domain::entities::{Pen, Sheep};
use flockbook::domain::services::{occupancy_percent, OccupancyLevel, OccupancyThresholds, PenOccupancy};
use flockbook::domain::value_objects::SheepStatus;

fn sheep(i: usize, pen: &str, status: SheepStatus) -> Sheep {
    Sheep::builder()
        .id(format!("E{i:04}"))
        .pen_id(pen)
        .birth_date(NaiveDate::from_ymd_opt(2023, 1, 1).unwrap())
        .status(status)
        .build()
        .unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: only in-pen sheep assigned to the pen are counted.
    #[test]
    fn property_count_ignores_other_pens_and_statuses(
        here in 0usize..60,
        elsewhere in 0usize..20,
        gone in 0usize..20,
        capacity in 0u32..100,
    ) {
        let pen = Pen::builder().id("P001").name("Pen").max_capacity(capacity).build().unwrap();
        let mut flock = Vec::new();
        for i in 0..here {
            flock.push(sheep(i, "P001", SheepStatus::InPen));
        }
        for i in 0..elsewhere {
            flock.push(sheep(1000 + i, "P002", SheepStatus::InPen));
        }
        for i in 0..gone {
            flock.push(sheep(2000 + i, "P001", SheepStatus::Sold));
        }

        let occupancy = PenOccupancy::of(&pen, &flock);
        prop_assert_eq!(occupancy.count, here);
        prop_assert_eq!(occupancy.percent.is_none(), capacity == 0);
    }

    /// PROPERTY: percent is the rounded ratio, capped at 100, and grows with the count.
    #[test]
    fn property_percent_is_monotonic(count in 0usize..500, capacity in 1u32..300) {
        let p = occupancy_percent(count, capacity).unwrap();
        let next = occupancy_percent(count + 1, capacity).unwrap();
        prop_assert!(next >= p);

        let exact = (count as f64 * 100.0 / f64::from(capacity)).min(100.0);
        prop_assert!((f64::from(p) - exact).abs() <= 0.5);
        prop_assert!(p <= 100);
    }

    /// PROPERTY: bands follow the thresholds, strictly above each one.
    #[test]
    fn property_level_bands(percent in 0u32..200, warning in 0u32..100, gap in 0u32..100) {
        let thresholds = OccupancyThresholds { warning, critical: warning + gap };
        let level = thresholds.level(percent);
        let expected = if percent > warning + gap {
            OccupancyLevel::Critical
        } else if percent > warning {
            OccupancyLevel::Warning
        } else {
            OccupancyLevel::Normal
        };
        prop_assert_eq!(level, expected);
    }
}
