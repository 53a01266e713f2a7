//! Synchronization pipeline.

use std::fs;
use std::path::{
    Path,
    PathBuf,
};

use crate::config::SyncSettings;
use crate::export;
use crate::tree::{
    TranslationTree,
    merge_deep,
    prune_keys,
};

use super::locales;
use super::types::{
    LocaleDocument,
    SyncError,
    SyncReport,
};

/// Synchronize every subordinate locale against the master and, when
/// enabled, write the side-by-side CSV export.
///
/// Each subordinate's translation file is overwritten with
/// `prune_keys(merge_deep(subordinate, master), master)`, tab-indented. When
/// the master locale is not among the loaded documents, no file is touched
/// and a warning is logged; the CSV export (if enabled) still runs over
/// whatever was loaded.
///
/// # Errors
/// - The locales directory does not exist
/// - A synchronized file cannot be serialized or written
/// - The CSV export cannot be written
pub fn sync_locales(settings: &SyncSettings) -> Result<SyncReport, SyncError> {
    tracing::debug!(locales_dir = %settings.locales_dir.display(), "Starting translation sync");

    let files =
        locales::find_translation_files(&settings.locales_dir, &settings.translation_file_name)?;
    let documents = load_documents(&files);

    let mut report = SyncReport::default();

    if let Some(master) = documents.iter().find(|doc| doc.locale == settings.master_locale) {
        report.master_found = true;
        let master_tree = master.tree.clone();
        for document in &documents {
            if document.locale == settings.master_locale {
                continue;
            }
            let merged = merge_deep(&document.tree, &master_tree);
            let pruned = prune_keys(&merged, &master_tree);
            write_document(&document.path, &pruned)?;
            tracing::info!("{} updated", document.locale);
            report.updated.push(document.locale.clone());
        }
    } else {
        tracing::warn!(
            "Master locale '{}' not found among {} loaded locales, leaving files untouched",
            settings.master_locale,
            documents.len()
        );
    }

    if settings.export.enabled {
        let out_path = export::write_csv(&documents, &settings.export, &settings.key_separator)?;
        tracing::info!("Merged CSV produced");
        report.exported = Some(out_path);
    }

    tracing::debug!("Sync completed");
    Ok(report)
}

/// Load every discovered file, skipping the unreadable and the unparsable.
fn load_documents(files: &[(String, PathBuf)]) -> Vec<LocaleDocument> {
    let mut documents = Vec::with_capacity(files.len());
    for (locale, path) in files {
        match load_document(locale, path) {
            Ok(document) => documents.push(document),
            Err(err) => {
                tracing::warn!("Skipping locale '{locale}': {err}");
            }
        }
    }
    documents
}

fn load_document(locale: &str, path: &Path) -> Result<LocaleDocument, SyncError> {
    let content = fs::read_to_string(path)?;
    let tree: TranslationTree = serde_json::from_str(&content)?;
    Ok(LocaleDocument { locale: locale.to_string(), path: path.to_path_buf(), tree })
}

fn write_document(path: &Path, tree: &TranslationTree) -> Result<(), SyncError> {
    let json = tree.to_tab_indented_json()?;
    fs::write(path, json)?;
    Ok(())
}
