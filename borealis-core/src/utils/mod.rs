//! Utility modules for the Borealis core layer.

pub mod fs;
pub mod paths;

pub use fs::{ensure_dir_exists, read_file_to_string, remove_file_if_exists, write_string_to_file};
pub use paths::{get_app_config_dir, get_app_data_dir, get_app_state_dir};
