//! Farm Store
//!
//! Owns the in-memory snapshot for the life of the process. Every mutation
//! runs the same three steps:
//! 1. Ask the guard whether the change is allowed
//! 2. Apply the domain rule to the snapshot
//! 3. Write the whole snapshot through the repository
//!
//! There is no rollback. When step 3 fails the error is returned and the
//! in-memory snapshot keeps the change until the next successful write.

use std::sync::Arc;

use chrono::{Local, NaiveDate, Utc};

use crate::domain::entities::{
    AppData, BreedingRecord, DiseaseRecord, FarmInfo, FeedRecord, FeedUsage, Pen,
    PreventionRecord, SaleRecord, Sheep,
};
use crate::domain::policies::{Mutation, MutationGuard, PermissiveGuard};
use crate::domain::ports::SnapshotRepository;
use crate::domain::value_objects::{next_record_id, RecordKind};
use crate::error::FlockResult;

pub struct FarmStore {
    data: AppData,
    repository: Arc<dyn SnapshotRepository>,
    guard: Arc<dyn MutationGuard>,
    today: NaiveDate,
}

impl FarmStore {
    /// Load the saved snapshot or start from the seed.
    ///
    /// The seed is not written until the first mutation.
    pub fn open(
        repository: Arc<dyn SnapshotRepository>,
        guard: Arc<dyn MutationGuard>,
    ) -> FlockResult<Self> {
        Self::open_at(repository, guard, Local::now().date_naive())
    }

    /// Like [`FarmStore::open`] with a fixed "today" for the seed
    pub fn open_at(
        repository: Arc<dyn SnapshotRepository>,
        guard: Arc<dyn MutationGuard>,
        today: NaiveDate,
    ) -> FlockResult<Self> {
        let data = match repository.load()? {
            Some(data) => data,
            None => {
                tracing::info!(location = %repository.location(), "no saved farm, starting from seed");
                AppData::seed(today)
            }
        };
        Ok(Self {
            data,
            repository,
            guard,
            today,
        })
    }

    /// Store with the permissive guard
    pub fn permissive(repository: Arc<dyn SnapshotRepository>) -> FlockResult<Self> {
        Self::open(repository, Arc::new(PermissiveGuard))
    }

    pub fn data(&self) -> &AppData {
        &self.data
    }

    pub fn location(&self) -> String {
        self.repository.location()
    }

    /// Fresh id for a generated record, unique within its collection
    pub fn next_record_id(&self, kind: RecordKind) -> String {
        let millis = Utc::now().timestamp_millis();
        next_record_id(kind, millis, |candidate| {
            self.data.record_id_taken(kind, candidate)
        })
    }

    pub fn update_farm_info(&mut self, info: FarmInfo) -> FlockResult<()> {
        self.check(Mutation::UpdateFarmInfo(&info))?;
        tracing::debug!(farm = %info.id, "farm info replaced");
        self.data.update_farm_info(info);
        self.persist("update_farm_info")
    }

    pub fn add_sheep(&mut self, sheep: Sheep) -> FlockResult<()> {
        self.check(Mutation::AddSheep(&sheep))?;
        tracing::debug!(sheep = %sheep.id, pen = %sheep.pen_id, "sheep added");
        self.data.add_sheep(sheep);
        self.persist("add_sheep")
    }

    /// Returns false when no sheep had that ear tag
    pub fn update_sheep(&mut self, sheep: Sheep) -> FlockResult<bool> {
        self.check(Mutation::UpdateSheep(&sheep))?;
        let id = sheep.id.clone();
        let found = self.data.update_sheep(sheep);
        if !found {
            tracing::debug!(sheep = %id, "update_sheep: no such sheep");
        }
        self.persist("update_sheep")?;
        Ok(found)
    }

    /// Returns how many sheep were removed; related records are kept
    pub fn delete_sheep(&mut self, id: &str) -> FlockResult<usize> {
        self.check(Mutation::DeleteSheep(id))?;
        let removed = self.data.delete_sheep(id);
        tracing::debug!(sheep = %id, removed, "sheep deleted");
        self.persist("delete_sheep")?;
        Ok(removed)
    }

    pub fn add_pen(&mut self, pen: Pen) -> FlockResult<()> {
        self.check(Mutation::AddPen(&pen))?;
        tracing::debug!(pen = %pen.id, capacity = pen.max_capacity, "pen added");
        self.data.add_pen(pen);
        self.persist("add_pen")
    }

    pub fn update_pen(&mut self, pen: Pen) -> FlockResult<bool> {
        self.check(Mutation::UpdatePen(&pen))?;
        let id = pen.id.clone();
        let found = self.data.update_pen(pen);
        tracing::debug!(pen = %id, found, "pen updated");
        self.persist("update_pen")?;
        Ok(found)
    }

    pub fn add_breeding(&mut self, record: BreedingRecord) -> FlockResult<()> {
        self.check(Mutation::AddBreeding(&record))?;
        tracing::debug!(record = %record.id, ewe = %record.ewe_id, "breeding recorded");
        self.data.add_breeding(record);
        self.persist("add_breeding")
    }

    pub fn add_prevention(&mut self, record: PreventionRecord) -> FlockResult<()> {
        self.check(Mutation::AddPrevention(&record))?;
        tracing::debug!(record = %record.id, sheep = %record.sheep_id, "prevention recorded");
        self.data.add_prevention(record);
        self.persist("add_prevention")
    }

    pub fn add_feed(&mut self, record: FeedRecord) -> FlockResult<()> {
        self.check(Mutation::AddFeed(&record))?;
        tracing::debug!(feed = %record.id, quantity = record.in_quantity, "feed stocked");
        self.data.add_feed(record);
        self.persist("add_feed")
    }

    /// Replaces the feed lot wholesale, including its usage log
    pub fn update_feed(&mut self, record: FeedRecord) -> FlockResult<bool> {
        self.check(Mutation::UpdateFeed(&record))?;
        let id = record.id.clone();
        let found = self.data.update_feed(record);
        tracing::debug!(feed = %id, found, "feed updated");
        self.persist("update_feed")?;
        Ok(found)
    }

    /// Append one usage entry to a lot. Returns false when the lot is unknown.
    pub fn record_feed_usage(&mut self, feed_id: &str, usage: FeedUsage) -> FlockResult<bool> {
        let Some(feed) = self.data.find_feed(feed_id) else {
            tracing::debug!(feed = %feed_id, "record_feed_usage: no such feed");
            return Ok(false);
        };
        let updated = feed.with_usage(usage);
        self.update_feed(updated)
    }

    /// Returns the number of sheep marked deceased
    pub fn add_disease(&mut self, record: DiseaseRecord) -> FlockResult<usize> {
        self.check(Mutation::AddDisease(&record))?;
        let sheep_id = record.sheep_id.clone();
        let fatal = record.outcome.is_fatal();
        let affected = self.data.add_disease(record);
        if fatal {
            self.log_transition(&sheep_id, "deceased", affected);
        }
        self.persist("add_disease")?;
        Ok(affected)
    }

    /// Returns the number of sheep marked sold
    pub fn add_sale(&mut self, record: SaleRecord) -> FlockResult<usize> {
        self.check(Mutation::AddSale(&record))?;
        let sheep_id = record.sheep_id.clone();
        let affected = self.data.add_sale(record);
        self.log_transition(&sheep_id, "sold", affected);
        self.persist("add_sale")?;
        Ok(affected)
    }

    /// Erase the saved file and go back to the seed snapshot
    pub fn reset(&mut self) -> FlockResult<()> {
        self.check(Mutation::Reset)?;
        self.repository.clear()?;
        self.data = AppData::seed(self.today);
        tracing::info!(location = %self.repository.location(), "farm data reset");
        Ok(())
    }

    fn check(&self, mutation: Mutation<'_>) -> FlockResult<()> {
        self.guard.check(&mutation, &self.data).map_err(|violation| {
            tracing::warn!(mutation = mutation.name(), reason = %violation.reason, "mutation rejected");
            violation.into()
        })
    }

    fn persist(&self, operation: &'static str) -> FlockResult<()> {
        self.repository.save(&self.data).map_err(|e| {
            tracing::error!(operation, error = %e, "snapshot write failed; in-memory state is ahead of disk");
            e.into()
        })
    }

    fn log_transition(&self, sheep_id: &str, status: &str, affected: usize) {
        if affected == 0 {
            tracing::warn!(sheep = %sheep_id, status, "status change targets an unknown sheep");
        } else {
            tracing::info!(sheep = %sheep_id, status, affected, "sheep status changed");
        }
    }
}
