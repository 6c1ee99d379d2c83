//! Property tests for snapshot serialization.

use chrono::{Days, NaiveDate};
use proptest::prelude::*;

use flockbook::domain::entities::{BreedingRecord, FeedRecord, FeedUsage, SaleRecord, Sheep};
use flockbook::domain::value_objects::{Gender, SheepStatus};
use flockbook::AppData;

fn base() -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()
}

fn date() -> impl Strategy<Value = NaiveDate> {
    (0u64..3000).prop_map(|d| base().checked_add_days(Days::new(d)).unwrap())
}

fn tag() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Z][0-9]{3}").unwrap()
}

fn sheep() -> impl Strategy<Value = Sheep> {
    (tag(), date(), any::<bool>(), 0usize..3, "[a-zA-Z ]{0,12}").prop_map(
        |(id, born, male, status, breed)| {
            Sheep::builder()
                .id(id)
                .pen_id("P001")
                .birth_date(born)
                .gender(if male { Gender::Male } else { Gender::Female })
                .status(SheepStatus::ALL[status])
                .breed(breed)
                .build()
                .unwrap()
        },
    )
}

fn snapshot() -> impl Strategy<Value = AppData> {
    (
        proptest::collection::vec(sheep(), 0..10),
        proptest::collection::vec((tag(), date(), proptest::option::of(0u32..5)), 0..5),
        proptest::collection::vec((1u32..5000, proptest::collection::vec(0u32..100, 0..5)), 0..4),
        proptest::collection::vec((tag(), 1u32..5000, 1u32..5), 0..4),
    )
        .prop_map(|(flock, matings, lots, sales)| {
            let mut data = AppData::seed(base());
            for s in flock {
                data.add_sheep(s);
            }
            for (i, (ewe, mated, lambs)) in matings.into_iter().enumerate() {
                let mut b = BreedingRecord::builder()
                    .id(format!("BR{i}"))
                    .ewe_id(ewe)
                    .mating_date(mated);
                if let Some(n) = lambs {
                    b = b.lamb_count(n);
                }
                data.add_breeding(b.build().unwrap());
            }
            for (i, (delivered, usage)) in lots.into_iter().enumerate() {
                let mut lot = FeedRecord::builder()
                    .id(format!("FD{i}"))
                    .name("Corn")
                    .in_date(base())
                    .in_quantity(f64::from(delivered))
                    .build()
                    .unwrap();
                for q in usage {
                    lot = lot.with_usage(
                        FeedUsage::builder().date(base()).quantity(f64::from(q)).build().unwrap(),
                    );
                }
                data.add_feed(lot);
            }
            for (i, (sheep_id, price, qty)) in sales.into_iter().enumerate() {
                data.add_sale(
                    SaleRecord::builder()
                        .id(format!("SL{i}"))
                        .sheep_id(sheep_id)
                        .sale_date(base())
                        .unit_price(f64::from(price))
                        .quantity(qty)
                        .build()
                        .unwrap(),
                );
            }
            data
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: serialize then deserialize reproduces the snapshot.
    #[test]
    fn property_snapshot_round_trips(data in snapshot()) {
        let json = serde_json::to_string_pretty(&data).unwrap();
        let back: AppData = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, data);
    }

    /// PROPERTY: parsing arbitrary text never panics.
    #[test]
    fn property_parse_never_panics(input in ".{0,200}") {
        let _ = serde_json::from_str::<AppData>(&input);
    }
}
