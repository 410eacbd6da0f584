//! Configuration management for Borealis Core.
//!
//! The configuration is TOML-based with serde defaults: see [`types`] for the
//! structures, [`defaults`] for the fallback values, and [`loader`] for file
//! resolution, parsing, and validation.

mod defaults;
mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{CoreConfig, ErrorCenterConfig, ErrorTrackingConfig, LoggingConfig};
