//! Domain Entities
//!
//! Farm records with identity. Every entity is keyed by a string id and
//! refers to others only through id strings.
//! - `AppData` - The whole snapshot and its mutation rules
//! - `Sheep`, `Pen` - Flock inventory
//! - `BreedingRecord`, `PreventionRecord`, `DiseaseRecord` - Husbandry logs
//! - `FeedRecord`, `SaleRecord` - Stock and sales

mod app_data;
mod breeding;
mod farm;
mod feed;
mod health;
mod pen;
mod sale;
mod sheep;
mod validation;

pub use app_data::AppData;
pub use breeding::{BreedingRecord, BreedingRecordBuilder};
pub use farm::{FarmInfo, FarmInfoBuilder};
pub use feed::{FeedRecord, FeedRecordBuilder, FeedUsage, FeedUsageBuilder};
pub use health::{DiseaseRecord, DiseaseRecordBuilder, PreventionRecord, PreventionRecordBuilder};
pub use pen::{Pen, PenBuilder};
pub use sale::{SaleRecord, SaleRecordBuilder};
pub use sheep::{Sheep, SheepBuilder};
pub use validation::ValidationError;
