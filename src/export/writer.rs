//! CSV writer for the translation matrix.

use std::path::{
    Path,
    PathBuf,
};

use thiserror::Error;

use crate::config::ExportSettings;
use crate::sync::LocaleDocument;

use super::table::TranslationMatrix;

#[derive(Error, Debug)]
pub enum ExportError {
    /// Error when encoding or writing a CSV record
    #[error("Failed to write CSV: {0}")]
    Csv(#[from] csv::Error),
    /// Error when flushing the output file
    #[error("Failed to write CSV file: {0}")]
    Io(#[from] std::io::Error),
}

/// Write the side-by-side CSV for all loaded documents to
/// `<outDir>/<outFile>.csv` and return that path.
///
/// # Errors
/// Returns [`ExportError`] when the file cannot be created or written.
pub fn write_csv(
    documents: &[LocaleDocument],
    settings: &ExportSettings,
    separator: &str,
) -> Result<PathBuf, ExportError> {
    let matrix = TranslationMatrix::build(documents, separator);
    let out_path = settings.out_dir.join(format!("{}.csv", settings.out_file));
    write_matrix(&matrix, &out_path)?;
    Ok(out_path)
}

fn write_matrix(matrix: &TranslationMatrix, path: &Path) -> Result<(), ExportError> {
    tracing::debug!(path = %path.display(), "Writing translation matrix");

    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(matrix.columns())?;
    for record in matrix.records() {
        writer.write_record(&record)?;
    }
    writer.flush()?;

    Ok(())
}
