//! Domain Layer
//!
//! The farm model and its rules, without I/O.
//!
//! ## Structure
//!
//! - `entities/` - Records and the `AppData` snapshot with its mutation rules
//! - `value_objects/` - Closed enumerations and id generation
//! - `services/` - Derived views (occupancy, feed stock, lambing, totals)
//! - `policies/` - Mutation guards
//! - `ports/` - Persistence interface implemented by infrastructure

pub mod entities;
pub mod policies;
pub mod ports;
pub mod services;
pub mod value_objects;
