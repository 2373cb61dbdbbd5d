//! Canonical forms for player and team names.
//!
//! Canonical names are uppercase, whitespace-collapsed and folded through
//! a fixed table of French accented capitals. This is deliberately not
//! the Unicode folding of [`crate::normalize_str`]: roster matching relies
//! on exactly these characters being folded and no others.

use std::sync::LazyLock;

use pfc_common::CellValue;
use regex::Regex;

use crate::config::BadTokens;
use crate::text::collapse_whitespace;

/// Literals that spreadsheet exports write in place of an empty cell.
const NULL_LIKE: [&str; 3] = ["NAN", "NONE", "NULL"];

static DIGIT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d").expect("Invalid digit regex"));

/// Folds the accented capitals found in French rosters.
fn fold_accents(value: &str) -> String {
    value
        .chars()
        .map(|ch| match ch {
            'É' | 'È' | 'Ê' => 'E',
            'À' | 'Â' | 'Ä' => 'A',
            'Ù' => 'U',
            'Î' | 'Ï' => 'I',
            'Ô' | 'Ö' => 'O',
            'Ç' => 'C',
            other => other,
        })
        .collect()
}

/// Trim, uppercase, then fold accents.
fn canonical_upper(raw: &str) -> String {
    fold_accents(&raw.trim().to_uppercase())
}

fn is_null_like(upper: &str) -> bool {
    NULL_LIKE.contains(&upper)
}

/// Canonicalizes a player name.
///
/// Some exports write the surname twice as `"LAST, LAST"`; that artifact
/// collapses to a single `"LAST"`. Any other comma-containing name is
/// returned whole, commas included.
///
/// ```
/// use pfc_clean::clean_player_name;
///
/// assert_eq!(clean_player_name("Dupré"), "DUPRE");
/// assert_eq!(clean_player_name("Doe, doe"), "DOE");
/// assert_eq!(clean_player_name("Doe,  Jane"), "DOE, JANE");
/// ```
pub fn clean_player_name(value: impl CellValue) -> String {
    let collapsed = collapse_whitespace(&canonical_upper(&value.to_cell_string()));
    let mut parts: Vec<String> = collapsed
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_uppercase)
        .collect();
    if parts.len() > 1 && parts[0] == parts[1] {
        return parts.swap_remove(0);
    }
    collapsed
}

/// Canonicalizes a team name, keeping only the text before the first comma.
///
/// ```
/// use pfc_clean::clean_team_name;
///
/// assert_eq!(clean_team_name("Paris, B"), "PARIS");
/// assert_eq!(clean_team_name("  Lyon   Métropole "), "LYON METROPOLE");
/// ```
pub fn clean_team_name(value: impl CellValue) -> String {
    let upper = canonical_upper(&value.to_cell_string());
    let kept = if upper.contains(',') {
        upper
            .split(',')
            .map(str::trim)
            .find(|part| !part.is_empty())
            .unwrap_or(upper.as_str())
    } else {
        upper.as_str()
    };
    collapse_whitespace(kept)
}

/// Heuristic check that a cell plausibly holds a player name.
///
/// Rejects empty and null-like cells, names containing a bad token,
/// names of two characters or fewer, and anything with a digit. This
/// filters out headers, totals rows and error strings; it says nothing
/// about whether the player exists.
pub fn looks_like_player(value: impl CellValue, bad_tokens: &BadTokens) -> bool {
    let name = clean_player_name(value);
    if name.is_empty() || is_null_like(&name) {
        return false;
    }
    if bad_tokens.matches(&name) {
        return false;
    }
    if name.chars().count() <= 2 {
        return false;
    }
    !DIGIT.is_match(&name)
}

/// Splits a cell holding several comma-separated names.
///
/// The split only applies when it yields at least two non-empty names;
/// otherwise the trimmed cell comes back unchanged as a single element.
/// Empty and null-like cells yield nothing.
///
/// ```
/// use pfc_clean::split_if_comma;
///
/// assert_eq!(split_if_comma("Smith, Jones"), vec!["Smith", "Jones"]);
/// assert_eq!(split_if_comma("Smith,"), vec!["Smith,"]);
/// assert!(split_if_comma("null").is_empty());
/// ```
pub fn split_if_comma(value: impl CellValue) -> Vec<String> {
    let raw = value.to_cell_string();
    let trimmed = raw.trim();
    if trimmed.is_empty() || is_null_like(&trimmed.to_uppercase()) {
        return Vec::new();
    }
    let parts: Vec<String> = trimmed
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect();
    if parts.len() > 1 {
        parts
    } else {
        vec![trimmed.to_string()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::AnyValue;

    #[test]
    fn test_fold_accents_table() {
        assert_eq!(fold_accents("ÉÈÊÀÙÎÏÔÖÂÄÇ"), "EEEAUIIOOAAC");
        // Characters outside the table are kept
        assert_eq!(fold_accents("ËÜŸ"), "ËÜŸ");
    }

    #[test]
    fn test_player_accents() {
        assert_eq!(clean_player_name("Dupré"), "DUPRE");
        assert_eq!(clean_player_name("françoise"), "FRANCOISE");
        assert_eq!(clean_player_name("Zoë"), "ZOË");
    }

    #[test]
    fn test_player_duplicate_surname() {
        assert_eq!(clean_player_name("DOE, DOE"), "DOE");
        assert_eq!(clean_player_name("doe ,DOE, Jane"), "DOE");
        assert_eq!(clean_player_name(", Doe, Doe"), "DOE");
    }

    #[test]
    fn test_player_comma_kept_when_not_duplicate() {
        assert_eq!(clean_player_name("Doe, Jane"), "DOE, JANE");
        assert_eq!(clean_player_name("Doe,"), "DOE,");
    }

    #[test]
    fn test_player_whitespace_and_null() {
        assert_eq!(clean_player_name("  jane \t doe "), "JANE DOE");
        assert_eq!(clean_player_name(None::<&str>), "");
        assert_eq!(clean_player_name(AnyValue::Null), "");
        assert_eq!(clean_player_name(f64::NAN), "NAN");
    }

    #[test]
    fn test_team_first_segment() {
        assert_eq!(clean_team_name("PARIS, B"), "PARIS");
        assert_eq!(clean_team_name(", Nantes , Rezé"), "NANTES");
        assert_eq!(clean_team_name("Nantes  Rezé"), "NANTES REZE");
    }

    #[test]
    fn test_team_only_commas() {
        assert_eq!(clean_team_name(" , , "), ", ,");
        assert_eq!(clean_team_name(None::<String>), "");
    }

    #[test]
    fn test_player_and_team_differ_on_commas() {
        assert_eq!(clean_player_name("Paris, B"), "PARIS, B");
        assert_eq!(clean_team_name("Paris, B"), "PARIS");
    }

    #[test]
    fn test_looks_like_player_rejects() {
        let tokens = BadTokens::default();
        assert!(!looks_like_player("AB", &tokens));
        assert!(!looks_like_player("J9", &tokens));
        assert!(!looks_like_player("Martin 2", &tokens));
        assert!(!looks_like_player("", &tokens));
        assert!(!looks_like_player("none", &tokens));
        assert!(!looks_like_player(f64::NAN, &tokens));
        assert!(!looks_like_player(None::<&str>, &tokens));
        assert!(!looks_like_player("Total équipe", &tokens));
        assert!(!looks_like_player("#N/A", &tokens));
    }

    #[test]
    fn test_looks_like_player_accepts() {
        let tokens = BadTokens::default();
        assert!(looks_like_player("SMITH", &tokens));
        assert!(looks_like_player("Léa Martin", &tokens));
        assert!(looks_like_player("Abe", &tokens));
    }

    #[test]
    fn test_looks_like_player_custom_tokens() {
        let tokens = BadTokens::new(["SMITH"]);
        assert!(!looks_like_player("Smith", &tokens));
        assert!(looks_like_player("Smith", &BadTokens::empty()));
    }

    #[test]
    fn test_looks_like_player_unicode_digit() {
        // Arabic-Indic three
        assert!(!looks_like_player("MARTIN \u{0663}", &BadTokens::empty()));
    }

    #[test]
    fn test_split_if_comma() {
        assert_eq!(split_if_comma("Smith, Jones"), vec!["Smith", "Jones"]);
        assert_eq!(split_if_comma(" a ,b,, c "), vec!["a", "b", "c"]);
        assert_eq!(split_if_comma("Smith,"), vec!["Smith,"]);
        assert_eq!(split_if_comma("  Smith  "), vec!["Smith"]);
    }

    #[test]
    fn test_split_if_comma_empty_and_null_like() {
        assert!(split_if_comma("").is_empty());
        assert!(split_if_comma("   ").is_empty());
        assert!(split_if_comma("NaN").is_empty());
        assert!(split_if_comma("None").is_empty());
        assert!(split_if_comma(None::<&str>).is_empty());
        assert!(split_if_comma(AnyValue::Null).is_empty());
    }

    #[test]
    fn test_split_if_comma_numeric_cells() {
        assert_eq!(split_if_comma(7.0_f64), vec!["7.0"]);
        assert_eq!(split_if_comma(true), vec!["True"]);
        assert!(split_if_comma(f64::NAN).is_empty());
    }

    #[test]
    fn test_split_if_comma_only_commas() {
        assert_eq!(split_if_comma(",,"), vec![",,"]);
    }
}
