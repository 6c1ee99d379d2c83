//! The whole farm snapshot and the rules that mutate it
//!
//! `AppData` is the unit of persistence: it is loaded, mutated in memory and
//! written back as one document. The rule methods here are pure; the store
//! decides when they run and persists the result.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{
    BreedingRecord, DiseaseRecord, FarmInfo, FeedRecord, Pen, PreventionRecord, SaleRecord, Sheep,
};
use crate::domain::value_objects::{RecordKind, SheepStatus};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppData {
    pub farm_info: FarmInfo,
    #[serde(default)]
    pub sheep: Vec<Sheep>,
    #[serde(default)]
    pub pens: Vec<Pen>,
    #[serde(default)]
    pub breeding: Vec<BreedingRecord>,
    #[serde(default)]
    pub prevention: Vec<PreventionRecord>,
    #[serde(default)]
    pub feed: Vec<FeedRecord>,
    #[serde(default)]
    pub disease: Vec<DiseaseRecord>,
    #[serde(default)]
    pub sales: Vec<SaleRecord>,
}

impl AppData {
    /// First-run snapshot: one farm, two pens, no records
    pub fn seed(today: NaiveDate) -> Self {
        Self {
            farm_info: FarmInfo::seed(today),
            sheep: Vec::new(),
            pens: Pen::seed(),
            breeding: Vec::new(),
            prevention: Vec::new(),
            feed: Vec::new(),
            disease: Vec::new(),
            sales: Vec::new(),
        }
    }

    pub fn find_sheep(&self, id: &str) -> Option<&Sheep> {
        self.sheep.iter().find(|s| s.id == id)
    }

    pub fn find_pen(&self, id: &str) -> Option<&Pen> {
        self.pens.iter().find(|p| p.id == id)
    }

    pub fn find_feed(&self, id: &str) -> Option<&FeedRecord> {
        self.feed.iter().find(|f| f.id == id)
    }

    pub fn has_sheep(&self, id: &str) -> bool {
        self.find_sheep(id).is_some()
    }

    /// True when `id` is already used in the collection `kind` names
    pub fn record_id_taken(&self, kind: RecordKind, id: &str) -> bool {
        match kind {
            RecordKind::Breeding => self.breeding.iter().any(|r| r.id == id),
            RecordKind::Prevention => self.prevention.iter().any(|r| r.id == id),
            RecordKind::Disease => self.disease.iter().any(|r| r.id == id),
            RecordKind::Feed => self.feed.iter().any(|r| r.id == id),
            RecordKind::Sale => self.sales.iter().any(|r| r.id == id),
        }
    }

    pub fn update_farm_info(&mut self, info: FarmInfo) {
        self.farm_info = info;
    }

    /// Appends without checking the ear tag; uniqueness is the caller's job.
    pub fn add_sheep(&mut self, sheep: Sheep) {
        self.sheep.push(sheep);
    }

    /// Replaces every sheep carrying this ear tag. Returns false when none matched.
    pub fn update_sheep(&mut self, sheep: Sheep) -> bool {
        replace_by_id(&mut self.sheep, sheep, |s| &s.id)
    }

    /// Removes all sheep with this ear tag and returns how many went.
    ///
    /// Records that point at the sheep are left alone.
    pub fn delete_sheep(&mut self, id: &str) -> usize {
        let before = self.sheep.len();
        self.sheep.retain(|s| s.id != id);
        before - self.sheep.len()
    }

    pub fn add_pen(&mut self, pen: Pen) {
        self.pens.push(pen);
    }

    pub fn update_pen(&mut self, pen: Pen) -> bool {
        replace_by_id(&mut self.pens, pen, |p| &p.id)
    }

    pub fn add_breeding(&mut self, record: BreedingRecord) {
        self.breeding.push(record);
    }

    pub fn add_prevention(&mut self, record: PreventionRecord) {
        self.prevention.push(record);
    }

    pub fn add_feed(&mut self, record: FeedRecord) {
        self.feed.push(record);
    }

    pub fn update_feed(&mut self, record: FeedRecord) -> bool {
        replace_by_id(&mut self.feed, record, |f| &f.id)
    }

    /// Appends the case and, for a fatal outcome, marks the sheep deceased.
    ///
    /// Returns the number of sheep whose status was set.
    pub fn add_disease(&mut self, record: DiseaseRecord) -> usize {
        let affected = if record.outcome.is_fatal() {
            self.set_status(&record.sheep_id, SheepStatus::Deceased)
        } else {
            0
        };
        self.disease.push(record);
        affected
    }

    /// Appends the sale and marks the sheep sold whatever its prior status.
    ///
    /// Returns the number of sheep whose status was set.
    pub fn add_sale(&mut self, record: SaleRecord) -> usize {
        let affected = self.set_status(&record.sheep_id, SheepStatus::Sold);
        self.sales.push(record);
        affected
    }

    fn set_status(&mut self, sheep_id: &str, status: SheepStatus) -> usize {
        let mut affected = 0;
        for sheep in self.sheep.iter_mut().filter(|s| s.id == sheep_id) {
            sheep.status = status;
            affected += 1;
        }
        affected
    }
}

fn replace_by_id<T>(items: &mut [T], replacement: T, id_of: impl Fn(&T) -> &String) -> bool
where
    T: Clone,
{
    let mut replaced = false;
    for item in items.iter_mut() {
        if id_of(item) == id_of(&replacement) {
            *item = replacement.clone();
            replaced = true;
        }
    }
    replaced
}
