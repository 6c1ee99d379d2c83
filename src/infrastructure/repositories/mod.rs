//! Repository Implementations
//!
//! Concrete implementations of the snapshot port.

mod json_snapshot;
mod memory;

pub use json_snapshot::JsonSnapshotRepository;
pub use memory::InMemorySnapshotRepository;
