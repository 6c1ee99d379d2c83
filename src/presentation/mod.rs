//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Opening the farm store with its infrastructure dependencies
//!
//! Rendering lives in the binary (`src/ui`, `src/commands`).
//!
//! ## Usage
//!
//! ```ignore
//! use flockbook::presentation::factory;
//!
//! let store = factory::open_store(cli.data.as_deref(), &config)?;
//! ```

pub mod cli;
pub mod factory;

pub use factory::open_store;
