//! Property tests for the status rules applied by disease and sale records.

use chrono::NaiveDate;
use proptest::prelude::*;

use flockbook::domain::entities::{DiseaseRecord, SaleRecord, Sheep};
use flockbook::domain::value_objects::{DiseaseOutcome, SheepStatus};
use flockbook::AppData;

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
}

fn status() -> impl Strategy<Value = SheepStatus> {
    prop_oneof![
        Just(SheepStatus::InPen),
        Just(SheepStatus::Sold),
        Just(SheepStatus::Deceased),
    ]
}

fn flock(statuses: &[SheepStatus]) -> AppData {
    let mut data = AppData::seed(day());
    for (i, st) in statuses.iter().enumerate() {
        data.add_sheep(
            Sheep::builder()
                .id(format!("E{i:03}"))
                .pen_id("P001")
                .birth_date(day())
                .status(*st)
                .build()
                .unwrap(),
        );
    }
    data
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: distinct ear tags added one by one are all retrievable.
    #[test]
    fn property_distinct_sheep_are_all_kept(count in 0usize..40) {
        let data = flock(&vec![SheepStatus::InPen; count]);
        prop_assert_eq!(data.sheep.len(), count);
        for i in 0..count {
            let id = format!("E{i:03}");
            prop_assert!(data.has_sheep(&id));
        }
    }

    /// PROPERTY: a fatal case marks its sheep deceased and touches no other sheep.
    #[test]
    fn property_fatal_case_only_affects_its_sheep(
        statuses in proptest::collection::vec(status(), 1..12),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut data = flock(&statuses);
        let target = pick.index(statuses.len());
        let case = DiseaseRecord::builder()
            .id("DS1")
            .sheep_id(format!("E{target:03}"))
            .disease_name("Bloat")
            .onset_date(day())
            .outcome(DiseaseOutcome::Died)
            .build()
            .unwrap();

        prop_assert_eq!(data.add_disease(case), 1);
        for (i, s) in data.sheep.iter().enumerate() {
            if i == target {
                prop_assert_eq!(s.status, SheepStatus::Deceased);
            } else {
                prop_assert_eq!(s.status, statuses[i]);
            }
        }
    }

    /// PROPERTY: a sale marks its sheep sold whatever the previous status.
    #[test]
    fn property_sale_always_marks_sold(previous in status()) {
        let mut data = flock(&[previous]);
        let sale = SaleRecord::builder()
            .id("SL1")
            .sheep_id("E000")
            .sale_date(day())
            .unit_price(500.0)
            .build()
            .unwrap();

        prop_assert_eq!(data.add_sale(sale), 1);
        prop_assert_eq!(data.sheep[0].status, SheepStatus::Sold);
        prop_assert_eq!(data.sales.len(), 1);
    }

    /// PROPERTY: a recovered case never changes any status.
    #[test]
    fn property_recovered_case_changes_nothing(statuses in proptest::collection::vec(status(), 1..12)) {
        let mut data = flock(&statuses);
        let before = data.sheep.clone();
        let case = DiseaseRecord::builder()
            .id("DS1")
            .sheep_id("E000")
            .disease_name("Orf")
            .onset_date(day())
            .build()
            .unwrap();

        data.add_disease(case);
        prop_assert_eq!(data.sheep, before);
    }
}
