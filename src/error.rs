use crate::domain::identifiers::Segment;
use thiserror::Error;

/// Rejected input to eMI3 identifier generation.
///
/// These are call-site bugs, not transient failures; nothing retries them.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidArgument {
    #[error("country_code is required for generating an eMI3 compliant id")]
    MissingCountryCode,

    #[error("party_id is required for generating an eMI3 compliant id")]
    MissingPartyId,

    #[error("{segment} must not contain the '*' segment separator")]
    SeparatorInSegment { segment: Segment },
}

/// Failure to read an eMI3 identifier string back into its parts
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseIdentifierError {
    #[error("expected 3 or 4 '*'-separated segments, found {found}")]
    SegmentCount { found: usize },

    #[error("{segment} segment is empty")]
    EmptySegment { segment: Segment },

    #[error("invalid unique suffix '{suffix}': expected 24 upper-case hex characters")]
    InvalidSuffix { suffix: String },
}

/// Crate-level error types
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid argument: {0}")]
    InvalidArgument(#[from] InvalidArgument),

    #[error("Invalid identifier: {0}")]
    ParseIdentifier(#[from] ParseIdentifierError),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// True when the error comes from a bad call site rather than bad data or environment
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
