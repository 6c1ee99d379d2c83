//! Read-only consistency diagnostics over a snapshot
//!
//! The store deliberately accepts data that breaks cross-record expectations
//! (dangling ids, duplicate ear tags, overdrawn feed). This module finds
//! those cases so they can be reported. It never repairs anything.

use std::collections::BTreeMap;

use serde::Serialize;

use super::feed_stock::remaining_quantity;
use crate::domain::entities::AppData;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum IntegrityIssue {
    /// A sheep assigned to a pen code that does not exist
    UnknownPen { sheep_id: String, pen_id: String },
    /// A prevention, disease or sale record naming a missing sheep
    UnknownSheep {
        record: &'static str,
        record_id: String,
        sheep_id: String,
    },
    UnknownEwe { record_id: String, ewe_id: String },
    UnknownRam { record_id: String, ram_id: String },
    DuplicateEarTag { sheep_id: String, count: usize },
    ZeroCapacityPen { pen_id: String },
    ZeroQuantityFeed { feed_id: String },
    NegativeFeedStock { feed_id: String, remaining: f64 },
    SoldMoreThanOnce { sheep_id: String, sales: usize },
}

impl IntegrityIssue {
    pub fn describe(&self) -> String {
        match self {
            IntegrityIssue::UnknownPen { sheep_id, pen_id } => {
                format!("sheep {sheep_id} is assigned to unknown pen {pen_id}")
            }
            IntegrityIssue::UnknownSheep {
                record,
                record_id,
                sheep_id,
            } => format!("{record} {record_id} refers to unknown sheep {sheep_id}"),
            IntegrityIssue::UnknownEwe { record_id, ewe_id } => {
                format!("breeding record {record_id} refers to unknown ewe {ewe_id}")
            }
            IntegrityIssue::UnknownRam { record_id, ram_id } => {
                format!("breeding record {record_id} refers to unknown ram {ram_id}")
            }
            IntegrityIssue::DuplicateEarTag { sheep_id, count } => {
                format!("ear tag {sheep_id} is used by {count} sheep")
            }
            IntegrityIssue::ZeroCapacityPen { pen_id } => {
                format!("pen {pen_id} has zero capacity; occupancy is undefined")
            }
            IntegrityIssue::ZeroQuantityFeed { feed_id } => {
                format!("feed {feed_id} was stocked with zero quantity; remaining percent is undefined")
            }
            IntegrityIssue::NegativeFeedStock { feed_id, remaining } => {
                format!("feed {feed_id} is overdrawn ({remaining} remaining)")
            }
            IntegrityIssue::SoldMoreThanOnce { sheep_id, sales } => {
                format!("sheep {sheep_id} appears in {sales} sales")
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct IntegrityReport {
    pub issues: Vec<IntegrityIssue>,
}

impl IntegrityReport {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }
}

pub fn check_integrity(data: &AppData) -> IntegrityReport {
    let mut issues = Vec::new();

    for sheep in &data.sheep {
        if data.find_pen(&sheep.pen_id).is_none() {
            issues.push(IntegrityIssue::UnknownPen {
                sheep_id: sheep.id.clone(),
                pen_id: sheep.pen_id.clone(),
            });
        }
    }

    let mut tag_counts: BTreeMap<&str, usize> = BTreeMap::new();
    for sheep in &data.sheep {
        *tag_counts.entry(sheep.id.as_str()).or_default() += 1;
    }
    for (tag, count) in &tag_counts {
        if *count > 1 {
            issues.push(IntegrityIssue::DuplicateEarTag {
                sheep_id: (*tag).to_string(),
                count: *count,
            });
        }
    }

    for record in &data.breeding {
        if !data.has_sheep(&record.ewe_id) {
            issues.push(IntegrityIssue::UnknownEwe {
                record_id: record.id.clone(),
                ewe_id: record.ewe_id.clone(),
            });
        }
        if let Some(ram_id) = &record.ram_id {
            if !data.has_sheep(ram_id) {
                issues.push(IntegrityIssue::UnknownRam {
                    record_id: record.id.clone(),
                    ram_id: ram_id.clone(),
                });
            }
        }
    }

    let sheep_refs = data
        .prevention
        .iter()
        .map(|r| ("prevention record", &r.id, &r.sheep_id))
        .chain(data.disease.iter().map(|r| ("disease record", &r.id, &r.sheep_id)))
        .chain(data.sales.iter().map(|r| ("sale", &r.id, &r.sheep_id)));
    for (record, record_id, sheep_id) in sheep_refs {
        if !data.has_sheep(sheep_id) {
            issues.push(IntegrityIssue::UnknownSheep {
                record,
                record_id: record_id.clone(),
                sheep_id: sheep_id.clone(),
            });
        }
    }

    for pen in data.pens.iter().filter(|p| p.max_capacity == 0) {
        issues.push(IntegrityIssue::ZeroCapacityPen {
            pen_id: pen.id.clone(),
        });
    }

    for feed in &data.feed {
        if feed.in_quantity == 0.0 {
            issues.push(IntegrityIssue::ZeroQuantityFeed {
                feed_id: feed.id.clone(),
            });
        }
        let remaining = remaining_quantity(feed);
        if remaining < 0.0 {
            issues.push(IntegrityIssue::NegativeFeedStock {
                feed_id: feed.id.clone(),
                remaining,
            });
        }
    }

    let mut sale_counts: BTreeMap<&str, usize> = BTreeMap::new();
    for sale in &data.sales {
        *sale_counts.entry(sale.sheep_id.as_str()).or_default() += 1;
    }
    for (sheep_id, sales) in sale_counts {
        if sales > 1 {
            issues.push(IntegrityIssue::SoldMoreThanOnce {
                sheep_id: sheep_id.to_string(),
                sales,
            });
        }
    }

    IntegrityReport { issues }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{BreedingRecord, FeedRecord, FeedUsage, Pen, SaleRecord, Sheep};
    use chrono::NaiveDate;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 4, 1).unwrap()
    }

    fn sheep(id: &str, pen: &str) -> Sheep {
        Sheep::builder()
            .id(id)
            .pen_id(pen)
            .birth_date(day())
            .build()
            .unwrap()
    }

    fn sale(id: &str, sheep_id: &str) -> SaleRecord {
        SaleRecord::builder()
            .id(id)
            .sheep_id(sheep_id)
            .sale_date(day())
            .unit_price(100.0)
            .build()
            .unwrap()
    }

    #[test]
    fn seed_is_clean() {
        assert!(check_integrity(&AppData::seed(day())).is_clean());
    }

    #[test]
    fn finds_dangling_references() {
        let mut data = AppData::seed(day());
        data.add_sheep(sheep("E001", "P404"));
        data.add_breeding(
            BreedingRecord::builder()
                .id("BR1")
                .ewe_id("E001")
                .ram_id("R404")
                .mating_date(day())
                .build()
                .unwrap(),
        );
        data.add_sale(sale("SL1", "E404"));

        let issues = check_integrity(&data).issues;
        assert!(issues.contains(&IntegrityIssue::UnknownPen {
            sheep_id: "E001".into(),
            pen_id: "P404".into()
        }));
        assert!(issues.contains(&IntegrityIssue::UnknownRam {
            record_id: "BR1".into(),
            ram_id: "R404".into()
        }));
        assert!(issues.contains(&IntegrityIssue::UnknownSheep {
            record: "sale",
            record_id: "SL1".into(),
            sheep_id: "E404".into()
        }));
        assert_eq!(issues.len(), 3);
    }

    #[test]
    fn deleted_sheep_leaves_dangling_sale() {
        let mut data = AppData::seed(day());
        data.add_sheep(sheep("E001", "P001"));
        data.add_sale(sale("SL1", "E001"));
        assert!(check_integrity(&data).is_clean());

        data.delete_sheep("E001");
        assert_eq!(check_integrity(&data).len(), 1);
    }

    #[test]
    fn finds_duplicates_and_repeat_sales() {
        let mut data = AppData::seed(day());
        data.add_sheep(sheep("E001", "P001"));
        data.add_sheep(sheep("E001", "P001"));
        data.add_sale(sale("SL1", "E001"));
        data.add_sale(sale("SL2", "E001"));

        let issues = check_integrity(&data).issues;
        assert_eq!(
            issues,
            vec![
                IntegrityIssue::DuplicateEarTag {
                    sheep_id: "E001".into(),
                    count: 2
                },
                IntegrityIssue::SoldMoreThanOnce {
                    sheep_id: "E001".into(),
                    sales: 2
                },
            ]
        );
    }

    #[test]
    fn finds_undefined_percentages_and_overdrawn_feed() {
        let mut data = AppData::seed(day());
        data.add_pen(
            Pen::builder()
                .id("P003")
                .name("Sick bay")
                .max_capacity(0)
                .build()
                .unwrap(),
        );
        let empty = FeedRecord::builder()
            .id("FD1")
            .name("Salt lick")
            .in_date(day())
            .build()
            .unwrap();
        let overdrawn = FeedRecord::builder()
            .id("FD2")
            .name("Corn")
            .in_date(day())
            .in_quantity(10.0)
            .build()
            .unwrap()
            .with_usage(FeedUsage::builder().date(day()).quantity(12.0).build().unwrap());
        data.add_feed(empty);
        data.add_feed(overdrawn);

        let issues = check_integrity(&data).issues;
        assert_eq!(issues.len(), 3);
        assert!(issues.contains(&IntegrityIssue::ZeroCapacityPen {
            pen_id: "P003".into()
        }));
        assert!(issues.contains(&IntegrityIssue::ZeroQuantityFeed {
            feed_id: "FD1".into()
        }));
        assert!(issues.contains(&IntegrityIssue::NegativeFeedStock {
            feed_id: "FD2".into(),
            remaining: -2.0
        }));
    }
}
