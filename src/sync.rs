//! Locale synchronization driver.

/// Synchronization pipeline
mod engine;
/// Locale file discovery
mod locales;
/// Synchronizer type definitions
mod types;

pub use engine::sync_locales;
pub use types::{
    LocaleDocument,
    SyncError,
    SyncReport,
};
