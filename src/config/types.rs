use std::path::PathBuf;

use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "export.outFile")
    pub field_path: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),
}

fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Settings for one synchronization pass.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SyncSettings {
    /// Locale whose key structure every other locale is reshaped to.
    ///
    /// Required; there is no usable default and validation rejects an empty
    /// value.
    pub master_locale: String,

    /// Directory holding one subdirectory per locale.
    pub locales_dir: PathBuf,

    /// Translation file name inside each locale directory.
    pub translation_file_name: String,

    /// Separator joining nested keys into flat paths for the export.
    pub key_separator: String,

    pub export: ExportSettings,
}

impl Default for SyncSettings {
    fn default() -> Self {
        Self {
            master_locale: String::new(),
            locales_dir: PathBuf::from("public/locales"),
            translation_file_name: "translation.json".to_string(),
            key_separator: ".".to_string(),
            export: ExportSettings::default(),
        }
    }
}

/// Settings for the side-by-side CSV export.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExportSettings {
    pub enabled: bool,

    pub out_dir: PathBuf,

    /// File stem of the export; ".csv" is appended by the writer.
    pub out_file: String,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self { enabled: false, out_dir: PathBuf::from("."), out_file: "output".to_string() }
    }
}

impl SyncSettings {
    /// # Errors
    /// - Required field is empty
    /// - Invalid separator
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.master_locale.is_empty() {
            errors.push(ValidationError::new(
                "masterLocale",
                "The master locale cannot be empty. Please specify a locale identifier, for example: \"en\"",
            ));
        }

        if self.key_separator.is_empty() {
            errors.push(ValidationError::new(
                "keySeparator",
                "The separator cannot be empty. Please specify a separator, for example: \".\" (dot)",
            ));
        }

        if self.translation_file_name.is_empty() {
            errors.push(ValidationError::new(
                "translationFileName",
                "The file name cannot be empty. Please specify a file name, for example: \"translation.json\"",
            ));
        }

        if self.export.enabled && self.export.out_file.is_empty() {
            errors.push(ValidationError::new(
                "export.outFile",
                "The export file stem cannot be empty. Please specify a name, for example: \"output\"",
            ));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}
