//! Flattened side-by-side export of every locale's translations.

/// Matrix pivot
mod table;
/// CSV writer
mod writer;

pub use table::TranslationMatrix;
pub use writer::{
    ExportError,
    write_csv,
};
