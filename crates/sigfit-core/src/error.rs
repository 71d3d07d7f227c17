//! Error types for the fitting engine

use thiserror::Error;

pub type Result<T> = std::result::Result<T, FitError>;

/// Main error type for sigfit
///
/// Only two variants are ever fatal to a fitting call: `InvalidContainer` and
/// `InvalidConfig`, both caller mistakes. Everything else is caught at the
/// strategy or pipeline boundary and degraded into a zero-quality outcome.
#[derive(Debug, Error)]
pub enum FitError {
    #[error("invalid container: {width}x{height} with {padding}px padding leaves no safe zone")]
    InvalidContainer {
        width: u32,
        height: u32,
        padding: u32,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("measurement failed: {0}")]
    Measurement(#[from] MeasureError),

    #[error("unknown device profile: {0}")]
    UnknownDevice(String),

    #[error("profile table rejected: {0}")]
    ProfileTable(String),
}

/// Errors reported by measurement backends
#[derive(Debug, Error)]
pub enum MeasureError {
    #[error("font not available: {0}")]
    FontUnavailable(String),

    #[error("cannot measure empty text")]
    EmptyText,

    #[error("backend error: {0}")]
    Backend(String),
}

impl FitError {
    /// Does this error abort the whole call, or degrade into a fallback?
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::InvalidContainer { .. } | Self::InvalidConfig(_)
        )
    }
}
