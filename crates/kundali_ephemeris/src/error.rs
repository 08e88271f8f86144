//! Provider error type.

use thiserror::Error;

use crate::types::{AyanamshaSystem, EphemerisBody};

/// Errors surfaced by an [`EphemerisProvider`](crate::EphemerisProvider).
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ProviderError {
    /// The provider is not initialized or failed to load.
    #[error("ephemeris provider unavailable: {0}")]
    Unavailable(String),
    /// No position could be computed for this body.
    #[error("{body} (ipl {}) unavailable: {reason}", .body.code())]
    BodyUnavailable { body: EphemerisBody, reason: String },
    /// The requested epoch is outside what the provider covers.
    #[error("epoch out of range: JD {jd_ut}")]
    EpochOutOfRange { jd_ut: f64 },
    /// House cusps could not be computed.
    #[error("house computation failed: {0}")]
    HouseComputation(String),
    /// No ayanamsha value for this system.
    #[error("no ayanamsha recorded for {0} ({})", .0.swiss_id())]
    MissingAyanamsha(AyanamshaSystem),
    #[error("I/O error: {0}")]
    Io(String),
    #[error("snapshot parse error: {0}")]
    Parse(String),
}

impl From<std::io::Error> for ProviderError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

impl From<toml::de::Error> for ProviderError {
    fn from(e: toml::de::Error) -> Self {
        Self::Parse(e.to_string())
    }
}
