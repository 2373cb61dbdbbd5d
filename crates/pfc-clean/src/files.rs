//! Locating roster files whose names differ only in accents, case or spacing.

use std::fs;
use std::path::{Path, PathBuf};

use crate::text::normalize_str;

/// Finds the entry of `dir` whose normalized name equals the normalized `target`.
///
/// Entries are compared in directory listing order and the first match
/// wins. Returns `None` when the directory is missing or unreadable, or
/// when nothing matches.
pub fn find_local_file_by_normalized_name(dir: &Path, target: &str) -> Option<PathBuf> {
    if !dir.exists() {
        tracing::debug!(dir = %dir.display(), "lookup directory does not exist");
        return None;
    }

    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!(dir = %dir.display(), error = %e, "failed to list lookup directory");
            return None;
        }
    };

    let target_key = normalize_str(target);
    let found = entries
        .filter_map(|entry| entry.ok())
        .find(|entry| normalize_str(&*entry.file_name().to_string_lossy()) == target_key)
        .map(|entry| entry.path());

    match &found {
        Some(path) => tracing::debug!(path = %path.display(), "matched file by normalized name"),
        None => tracing::debug!(dir = %dir.display(), "no file matched normalized name"),
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_dir() -> TempDir {
        let dir = TempDir::new().unwrap();
        for name in &["Feuille Équipe.xlsx", "stats_2425.csv"] {
            fs::write(dir.path().join(name), "data").unwrap();
        }
        dir
    }

    #[test]
    fn test_matches_ignoring_accents_case_and_spacing() {
        let dir = create_test_dir();
        let found = find_local_file_by_normalized_name(dir.path(), "  feuille   EQUIPE.XLSX");
        assert_eq!(found, Some(dir.path().join("Feuille Équipe.xlsx")));
    }

    #[test]
    fn test_exact_name() {
        let dir = create_test_dir();
        let found = find_local_file_by_normalized_name(dir.path(), "stats_2425.csv");
        assert_eq!(found, Some(dir.path().join("stats_2425.csv")));
    }

    #[test]
    fn test_no_match() {
        let dir = create_test_dir();
        assert_eq!(find_local_file_by_normalized_name(dir.path(), "absent.csv"), None);
    }

    #[test]
    fn test_missing_directory() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");
        assert_eq!(find_local_file_by_normalized_name(&missing, "anything"), None);
        assert_eq!(find_local_file_by_normalized_name(&missing, ""), None);
    }

    #[test]
    fn test_path_is_a_file() {
        let dir = create_test_dir();
        let file = dir.path().join("stats_2425.csv");
        assert_eq!(find_local_file_by_normalized_name(&file, "stats_2425.csv"), None);
    }

    #[test]
    fn test_directories_are_entries_too() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("Saison 24-25")).unwrap();
        let found = find_local_file_by_normalized_name(dir.path(), "saison 24-25");
        assert_eq!(found, Some(dir.path().join("Saison 24-25")));
    }
}
