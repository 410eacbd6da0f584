//! # Borealis Core Library (`borealis-core`)
//!
//! `borealis-core` is the foundational library of the Borealis workspace. It
//! provides the infrastructure the error-center domain layer and the UI layer
//! build on.
//!
//! ## Purpose
//!
//! - **Error Handling**: a unified error system through the [`CoreError`]
//!   enum and the more specific [`ConfigError`]. `CoreError` is also the
//!   error currency of the domain layer's outbound ports.
//! - **Configuration Management**: TOML-based configuration with serde
//!   defaults and validation, through [`ConfigLoader`] and [`CoreConfig`].
//! - **Logging**: a structured logging framework built on the `tracing`
//!   crate, with console output and optional rolling file output (text or
//!   JSON).
//! - **Error Tracking**: a bridge to Sentry used by the domain layer's
//!   remote error reporter; cleanly disabled when no DSN is configured.
//! - **Utilities**: filesystem helpers and XDG path resolution.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use borealis_core::config::ConfigLoader;
//! use borealis_core::error::CoreError;
//! use borealis_core::logging::init_logging;
//! use borealis_core::error_tracking::init_error_tracking;
//!
//! fn main() -> Result<(), CoreError> {
//!     let config = ConfigLoader::load()?;
//!     init_logging(&config.logging, false)?;
//!     init_error_tracking(&config.error_tracking);
//!     tracing::info!("Borealis core initialized.");
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod error_tracking;
pub mod logging;
pub mod utils;

// Re-export key types for convenience.
pub use config::{ConfigLoader, CoreConfig, ErrorCenterConfig, ErrorTrackingConfig, LoggingConfig};
pub use error::{ConfigError, CoreError};
pub use error_tracking::{add_breadcrumb, capture_event, init_error_tracking, CaptureLevel};
pub use logging::{init_logging, init_minimal_logging};
pub use utils::{
    ensure_dir_exists, get_app_config_dir, get_app_data_dir, get_app_state_dir,
    read_file_to_string, write_string_to_file,
};
