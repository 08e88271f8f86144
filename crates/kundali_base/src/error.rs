//! Error types for reference-data loading.

use thiserror::Error;

use crate::graha::Graha;

/// Errors from loading or validating reference data.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ReferenceError {
    /// Reading the reference file failed.
    #[error("I/O error: {0}")]
    Io(String),
    /// The TOML document did not parse.
    #[error("reference parse error: {0}")]
    Parse(String),
    /// A name list has the wrong number of entries.
    #[error("{field}: expected {expected} entries, found {found}")]
    WrongLength {
        field: &'static str,
        expected: usize,
        found: usize,
    },
    /// An aspect offset outside 1..=12.
    #[error("aspect offset {offset} for {graha} is outside 1-12")]
    InvalidAspectOffset { graha: Graha, offset: u8 },
    /// A table key that is not a known rashi or graha.
    #[error("unknown {section} key: {name}")]
    UnknownName { section: &'static str, name: String },
}

impl From<std::io::Error> for ReferenceError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

impl From<toml::de::Error> for ReferenceError {
    fn from(e: toml::de::Error) -> Self {
        Self::Parse(e.to_string())
    }
}
