//! Application Layer
//!
//! Orchestrates persistence around the domain rules.
//!
//! - `FarmStore` - Owns the snapshot; guard, apply, persist on every mutation
//! - `export_snapshot` - Dated JSON backup of the whole snapshot

pub mod backup;
pub mod store;

pub use backup::{backup_file_name, export_snapshot};
pub use store::FarmStore;
