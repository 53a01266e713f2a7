//! Locale file discovery.

use std::path::{
    Path,
    PathBuf,
};

use globset::{
    Glob,
    GlobSetBuilder,
};
use ignore::WalkBuilder;

use super::types::SyncError;

/// Find translation files under the locales directory.
///
/// Matches `<locales_dir>/<locale>/<file_name>` (at any depth); the locale
/// identifier is the name of the directory that holds the file. Results are
/// sorted by locale so processing order is stable across platforms.
///
/// # Errors
/// - The locales directory does not exist
/// - The file name does not form a valid glob
pub(super) fn find_translation_files(
    locales_dir: &Path,
    file_name: &str,
) -> Result<Vec<(String, PathBuf)>, SyncError> {
    if !locales_dir.is_dir() {
        return Err(SyncError::LocalesDirNotFound(locales_dir.to_path_buf()));
    }

    let pattern = format!("**/{file_name}");
    let mut builder = GlobSetBuilder::new();
    builder.add(
        Glob::new(&pattern)
            .map_err(|e| SyncError::InvalidFilePattern { pattern: pattern.clone(), source: e })?,
    );
    let matcher = builder
        .build()
        .map_err(|e| SyncError::InvalidFilePattern { pattern, source: e })?;

    let mut found = Vec::new();
    let walker = WalkBuilder::new(locales_dir).hidden(false).follow_links(false).build();
    for result in walker {
        let entry = match result {
            Ok(entry) => entry,
            Err(err) => {
                tracing::debug!(?err, "Failed to read directory entry");
                continue;
            }
        };

        // ファイルのみを対象
        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }

        let path = entry.path();

        let Ok(relative_path) = path.strip_prefix(locales_dir) else {
            continue;
        };
        if !matcher.is_match(relative_path) {
            continue;
        }

        let Some(locale) = locale_from_path(locales_dir, path) else {
            tracing::warn!("No locale directory for {:?}, skipping", path);
            continue;
        };
        found.push((locale, path.to_path_buf()));
    }

    found.sort();
    Ok(found)
}

/// The locale is the name of the directory holding the translation file. A
/// file sitting directly in the locales directory belongs to no locale.
fn locale_from_path(locales_dir: &Path, path: &Path) -> Option<String> {
    let parent = path.parent()?;
    if parent == locales_dir {
        return None;
    }
    Some(parent.file_name()?.to_string_lossy().into_owned())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::fs;

    use googletest::prelude::*;
    use rstest::rstest;
    use tempfile::TempDir;

    use super::*;

    fn write_file(root: &Path, relative: &str, content: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[rstest]
    fn finds_one_file_per_locale_sorted() {
        let temp_dir = TempDir::new().unwrap();
        write_file(temp_dir.path(), "ja/translation.json", "{}");
        write_file(temp_dir.path(), "en/translation.json", "{}");
        write_file(temp_dir.path(), "de/translation.json", "{}");

        let found = find_translation_files(temp_dir.path(), "translation.json").unwrap();

        let locales: Vec<&str> = found.iter().map(|(locale, _)| locale.as_str()).collect();
        assert_that!(locales, elements_are![eq(&"de"), eq(&"en"), eq(&"ja")]);
    }

    #[rstest]
    fn ignores_other_file_names() {
        let temp_dir = TempDir::new().unwrap();
        write_file(temp_dir.path(), "en/translation.json", "{}");
        write_file(temp_dir.path(), "en/common.json", "{}");
        write_file(temp_dir.path(), "en/notes.txt", "");

        let found = find_translation_files(temp_dir.path(), "translation.json").unwrap();

        assert_that!(found, len(eq(1)));
    }

    #[rstest]
    fn skips_files_outside_a_locale_directory() {
        let temp_dir = TempDir::new().unwrap();
        write_file(temp_dir.path(), "translation.json", "{}");
        write_file(temp_dir.path(), "en/translation.json", "{}");

        let found = find_translation_files(temp_dir.path(), "translation.json").unwrap();

        let locales: Vec<&str> = found.iter().map(|(locale, _)| locale.as_str()).collect();
        assert_that!(locales, elements_are![eq(&"en")]);
    }

    #[rstest]
    fn missing_directory_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("does-not-exist");

        let result = find_translation_files(&missing, "translation.json");

        assert!(matches!(result, Err(SyncError::LocalesDirNotFound(_))));
    }
}
