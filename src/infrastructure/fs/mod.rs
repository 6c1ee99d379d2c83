//! File system locations

mod locations;

pub use locations::{config_home, default_data_path, user_config_path, DATA_PATH_VAR};
