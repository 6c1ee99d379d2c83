//! Terminal rendering for the CLI.
//!
//! - `primitives` / `widgets` / `blocks`: icons, colored text, boxes, tables
//! - `views`: one view per listing command
//! - `json`: the single document printed by `--json`

pub mod blocks;
pub mod context;
pub mod error;
pub mod json;
pub mod output;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;
pub mod widgets;
