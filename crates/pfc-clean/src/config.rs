//! Cleaning configuration: the bad-token set used to reject non-names.
//!
//! The configuration is a small TOML document:
//!
//! ```toml
//! bad_tokens = ["TOTAL", "EQUIPE", "#N/A"]
//! ```
//!
//! A missing `bad_tokens` key keeps [`DEFAULT_BAD_TOKENS`].

use std::fs;
use std::path::Path;

use pfc_common::CellValue;
use serde::{Deserialize, Serialize};

use crate::error::{CleanError, Result};

/// Tokens that mark spreadsheet artifacts rather than player names.
///
/// Header labels, totals rows and Excel error strings end up in name
/// columns when sheets are exported carelessly.
pub const DEFAULT_BAD_TOKENS: &[&str] = &[
    "TOTAL",
    "EQUIPE",
    "ADVERSAIRE",
    "JOUEUSE",
    "UNNAMED",
    "#N/A",
    "#REF!",
    "#VALUE!",
    "#DIV/0!",
];

/// Read-only set of substrings that disqualify a canonical player name.
///
/// Tokens are matched verbatim and case-sensitively against names that
/// are already uppercase, so they should be written in uppercase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BadTokens {
    tokens: Vec<String>,
}

impl BadTokens {
    /// Creates a token set, keeping the first occurrence of each token.
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for token in tokens {
            let token = token.into();
            if !unique.contains(&token) {
                unique.push(token);
            }
        }
        Self { tokens: unique }
    }

    /// A set that rejects nothing.
    pub fn empty() -> Self {
        Self { tokens: Vec::new() }
    }

    /// Returns true if any token occurs in `name`.
    pub fn matches(&self, name: &str) -> bool {
        self.tokens.iter().any(|token| name.contains(token.as_str()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl Default for BadTokens {
    fn default() -> Self {
        Self::new(DEFAULT_BAD_TOKENS.iter().copied())
    }
}

/// Configuration consumed by the cleaning functions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleaningConfig {
    /// Substrings rejected by [`crate::looks_like_player`].
    #[serde(default)]
    pub bad_tokens: BadTokens,
}

impl CleaningConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bad_tokens(mut self, bad_tokens: BadTokens) -> Self {
        self.bad_tokens = bad_tokens;
        self
    }

    /// Parses a configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| CleanError::InvalidConfig {
            message: e.to_string(),
        })
    }

    /// Renders the configuration as TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| CleanError::InvalidConfig {
            message: e.to_string(),
        })
    }

    /// Loads a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| CleanError::ConfigRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: Self = toml::from_str(&content).map_err(|e| CleanError::ConfigParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        tracing::info!(
            path = %path.display(),
            bad_tokens = config.bad_tokens.len(),
            "loaded cleaning config"
        );
        Ok(config)
    }

    /// Loads a configuration file, falling back to defaults.
    ///
    /// Returns the default configuration if the file does not exist or
    /// cannot be read or parsed.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(CleanError::ConfigRead { source, .. })
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                tracing::info!(path = %path.display(), "no cleaning config found, using defaults");
                Self::default()
            }
            Err(e) => {
                tracing::warn!("{e}, using default cleaning config");
                Self::default()
            }
        }
    }

    /// [`crate::looks_like_player`] with this configuration's bad tokens.
    pub fn looks_like_player(&self, value: impl CellValue) -> bool {
        crate::names::looks_like_player(value, &self.bad_tokens)
    }
}
