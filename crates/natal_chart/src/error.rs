//! Error types for chart assembly.

use std::error::Error;
use std::fmt::{Display, Formatter};

use natal_core::ProviderError;

/// Errors from chart assembly.
///
/// Only ephemeris provisioning can fail assembly as a whole. Every other
/// upstream defect (missing field, malformed record, aspect backend
/// failure) is recovered locally with documented defaults.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ChartError {
    /// The ephemeris backend is missing or the call failed.
    Provider(ProviderError),
}

impl Display for ChartError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Provider(e) => write!(f, "ephemeris provider error: {e}"),
        }
    }
}

impl Error for ChartError {}

impl From<ProviderError> for ChartError {
    fn from(e: ProviderError) -> Self {
        Self::Provider(e)
    }
}
