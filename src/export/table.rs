//! Pivot of flattened translations into a side-by-side matrix.

use indexmap::IndexMap;

use crate::sync::LocaleDocument;
use crate::tree::flatten_tree;

/// Flattened translations pivoted into one row per distinct dot-path.
///
/// Rows are the union of all dot-paths seen across the documents, in
/// first-seen traversal order; columns are `key` plus one locale per
/// document, in document order. A cell is empty when the locale has no value
/// at that path.
#[derive(Debug, Clone)]
pub struct TranslationMatrix {
    columns: Vec<String>,
    rows: IndexMap<String, IndexMap<String, String>>,
}

impl TranslationMatrix {
    /// Build the matrix from loaded locale documents.
    #[must_use]
    pub fn build(documents: &[LocaleDocument], separator: &str) -> Self {
        let mut columns = vec!["key".to_string()];
        let mut rows: IndexMap<String, IndexMap<String, String>> = IndexMap::new();

        for document in documents {
            columns.push(document.locale.clone());
            for (path, value) in flatten_tree(&document.tree, separator, None) {
                rows.entry(path).or_default().insert(document.locale.clone(), value);
            }
        }

        Self { columns, rows }
    }

    /// Column headers: `key` first, then the locales.
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Rows as records in header order, one per dot-path.
    pub fn records(&self) -> impl Iterator<Item = Vec<String>> + '_ {
        self.rows.iter().map(|(path, cells)| {
            let mut record = Vec::with_capacity(self.columns.len());
            record.push(path.clone());
            for locale in self.columns.iter().skip(1) {
                record.push(cells.get(locale).cloned().unwrap_or_default());
            }
            record
        })
    }
}
