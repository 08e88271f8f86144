//! Chart-level errors.

use std::fmt::{Display, Formatter};

use kundali_base::Graha;
use kundali_ephemeris::ProviderError;
use serde::Serialize;
use thiserror::Error;

/// Errors that abort chart assembly as a whole.
///
/// Failures confined to one body or to the houses never surface here; they
/// are reported as [`ComputationFailure`]s next to a partial chart.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ChartError {
    /// The provider reported itself not ready.
    #[error("ephemeris provider unavailable: {0}")]
    ProviderUnavailable(ProviderError),
    /// The provider covers none of the requested epoch.
    #[error("epoch not covered by provider: {0}")]
    Epoch(ProviderError),
}

/// The part of a chart a failure removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ChartPart {
    Graha(Graha),
    /// House cusps and the ascendant.
    Houses,
}

impl Display for ChartPart {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Graha(g) => write!(f, "{g}"),
            Self::Houses => f.write_str("houses"),
        }
    }
}

/// One omitted chart part and the provider error behind it.
#[derive(Debug, Clone, PartialEq)]
pub struct ComputationFailure {
    pub part: ChartPart,
    pub error: ProviderError,
}

impl Display for ComputationFailure {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.part, self.error)
    }
}
