//! Cleaning helpers for sports-roster spreadsheets.
//!
//! Every function here is a small, stateless transformation applied to
//! roster data before it is loaded into a table:
//!
//! - **text**: Unicode-aware comparison keys ([`normalize_str`])
//! - **files**: locating a file by normalized name
//! - **numeric**: safe float coercion and `DataFrame` integerization
//! - **names**: player and team canonical forms, plausibility checks and
//!   comma-separated cell splitting
//! - **filename**: match dates and season codes embedded in filenames
//! - **config**: the bad-token set that rejects spreadsheet artifacts
//!
//! Cleaning functions never fail. Malformed or missing input maps to an
//! empty string, `None`, `false`, an empty `Vec` or a caller-supplied
//! default. Inputs are any [`CellValue`]: string slices, owned strings,
//! options, numbers or Polars `AnyValue`s.
//!
//! # Example
//!
//! ```
//! use pfc_clean::{CleaningConfig, clean_player_name, split_if_comma};
//!
//! let config = CleaningConfig::default();
//! let names: Vec<String> = split_if_comma("Dupré, Martin, Total")
//!     .into_iter()
//!     .filter(|cell| config.looks_like_player(cell))
//!     .map(clean_player_name)
//!     .collect();
//! assert_eq!(names, vec!["DUPRE", "MARTIN"]);
//! ```

mod config;
mod error;
mod filename;
mod files;
mod frame;
mod names;
mod numeric;
mod text;

// === Error Types ===
pub use error::{CleanError, Result};

// === Configuration ===
pub use config::{BadTokens, CleaningConfig, DEFAULT_BAD_TOKENS};

// === Text Normalization ===
pub use text::normalize_str;

// === File Lookup ===
pub use files::find_local_file_by_normalized_name;

// === Numeric Coercion ===
pub use frame::{IntegerizeOptions, safe_int_numeric_only};
pub use numeric::{safe_float, safe_float_or_nan};

// === Names ===
pub use names::{clean_player_name, clean_team_name, looks_like_player, split_if_comma};

// === Filename Metadata ===
pub use filename::{
    extract_season_from_filename, parse_date_from_gf1_filename, recognized_seasons, season_label,
};

pub use pfc_common::CellValue;
