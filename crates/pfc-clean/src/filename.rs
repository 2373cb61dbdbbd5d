//! Metadata carried in export filenames: match dates and season codes.

use std::path::is_separator;
use std::sync::LazyLock;

use chrono::NaiveDate;
use pfc_common::CellValue;
use regex::Regex;

/// Season codes used in export names, `"2425"` being 2024-2025.
const SEASON_CODES: [&str; 2] = ["2425", "2526"];

/// `DD.MM.YY` or `DD.MM.YYYY`, as found in GF1 match sheet names.
/// ASCII digits only.
static GF1_DATE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]{2})\.([0-9]{2})\.([0-9]{2,4})").expect("Invalid GF1 date regex")
});

static FOUR_DIGIT_TOKEN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d{4}\b").expect("Invalid four-digit token regex"));

static SEASON_CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(2425|2526)").expect("Invalid season code regex"));

/// Parses the match date out of a GF1 export filename.
///
/// Only the last path component is searched and only the first
/// `DD.MM.YY(YY)` occurrence counts. Two-digit years are taken as 20YY.
/// Returns `None` when there is no such pattern or it is not a real date.
///
/// ```
/// use chrono::NaiveDate;
/// use pfc_clean::parse_date_from_gf1_filename;
///
/// assert_eq!(
///     parse_date_from_gf1_filename("exports/match_05.03.24.csv"),
///     NaiveDate::from_ymd_opt(2024, 3, 5)
/// );
/// assert_eq!(parse_date_from_gf1_filename("nodatehere.csv"), None);
/// ```
pub fn parse_date_from_gf1_filename(filename: &str) -> Option<NaiveDate> {
    let base = filename.rsplit(is_separator).next().unwrap_or(filename);
    let caps = GF1_DATE_REGEX.captures(base)?;

    let day: u32 = caps[1].parse().ok()?;
    let month: u32 = caps[2].parse().ok()?;
    let year_text = &caps[3];
    let year: i32 = if year_text.len() == 2 {
        format!("20{year_text}").parse().ok()?
    } else {
        year_text.parse().ok()?
    };
    // Calendar years start at 1
    if year < 1 {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Finds the season code in a filename.
///
/// A standalone four-digit token that is a known code wins; otherwise the
/// first known code embedded anywhere in the name is used.
///
/// ```
/// use pfc_clean::extract_season_from_filename;
///
/// assert_eq!(extract_season_from_filename("stats_2425_final.xlsx").as_deref(), Some("2425"));
/// assert_eq!(extract_season_from_filename("roster2526.xlsx").as_deref(), Some("2526"));
/// assert_eq!(extract_season_from_filename(None::<&str>), None);
/// ```
pub fn extract_season_from_filename(filename: impl CellValue) -> Option<String> {
    let name = filename.to_cell_string();
    if name.is_empty() {
        return None;
    }

    let standalone = FOUR_DIGIT_TOKEN_REGEX
        .find_iter(&name)
        .map(|m| m.as_str())
        .find(|token| SEASON_CODES.contains(token));
    if let Some(code) = standalone {
        return Some(code.to_string());
    }

    SEASON_CODE_REGEX
        .find(&name)
        .map(|m| m.as_str().to_string())
}

/// The season codes [`extract_season_from_filename`] recognizes.
pub fn recognized_seasons() -> &'static [&'static str] {
    &SEASON_CODES
}

/// Human-readable label for a recognized season code.
///
/// ```
/// use pfc_clean::season_label;
///
/// assert_eq!(season_label("2425").as_deref(), Some("2024-2025"));
/// assert_eq!(season_label("1999"), None);
/// ```
pub fn season_label(code: &str) -> Option<String> {
    if !SEASON_CODES.contains(&code) {
        return None;
    }
    Some(format!("20{}-20{}", &code[..2], &code[2..]))
}
