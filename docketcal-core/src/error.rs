//! Error types for the docketcal ecosystem.
//!
//! Feed data never raises; malformed hearing entries and judge fields are
//! dropped during aggregation. These errors cover what *should* be loud:
//! configuration problems and invalid operator input.

use thiserror::Error;

/// Errors that can occur in docketcal operations.
#[derive(Error, Debug)]
pub enum DocketError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid date '{0}'. Expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid month '{0}'. Expected YYYY-MM")]
    InvalidMonth(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for docketcal operations.
pub type DocketResult<T> = Result<T, DocketError>;
