//! Configuration loading and validation.

/// Config file loader
mod loader;
/// Configuration types and settings
mod types;

pub use loader::load_from_workspace;
pub use types::{
    ConfigError,
    ExportSettings,
    SyncSettings,
    ValidationError,
};
