//! General-purpose string normalization for fuzzy comparison.

use pfc_common::CellValue;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::canonical_combining_class;

/// Builds a comparison key from any cell value.
///
/// The value is trimmed, decomposed with NFKD, stripped of combining
/// marks, whitespace-collapsed and lowercased. Null becomes `""`.
/// The result is meant for equality checks only, never for display.
///
/// ```
/// use pfc_clean::normalize_str;
///
/// assert_eq!(normalize_str("  Équipe   Réserve "), "equipe reserve");
/// assert_eq!(normalize_str(None::<&str>), "");
/// ```
pub fn normalize_str(value: impl CellValue) -> String {
    let raw = value.to_cell_string();
    let stripped: String = raw
        .trim()
        .nfkd()
        .filter(|ch| canonical_combining_class(*ch) == 0)
        .collect();
    collapse_whitespace(&stripped).to_lowercase()
}

/// Replaces every run of whitespace with a single space and trims the ends.
pub(crate) fn collapse_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}
