//! Error types for daily_rates

use std::fmt;
use thiserror::Error;

/// Why the aggregator had nothing to work with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyDataCause {
    /// The input sequence itself was empty
    NoInputData,
    /// Every quote was removed by the exclusion filter
    NoDataAfterExclusion,
}

impl fmt::Display for EmptyDataCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmptyDataCause::NoInputData => write!(f, "no input data"),
            EmptyDataCause::NoDataAfterExclusion => write!(f, "no data after exclusion"),
        }
    }
}

/// Main error type for daily_rates
#[derive(Error, Debug)]
pub enum RatesError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Transport error for {url}: {message}")]
    Transport { url: String, message: String },

    #[error("HTTP status error for {url}: {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("Unsupported document encoding: {0}")]
    UnsupportedEncoding(String),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Numeric format error: cannot parse {raw:?} as a number")]
    NumericFormat { raw: String },

    #[error("Empty data: {0}")]
    EmptyData(EmptyDataCause),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl RatesError {
    /// True for failures scoped to a single day's fetch or decode.
    ///
    /// These are the errors a skip-and-continue run may record and move past.
    pub fn is_day_scoped(&self) -> bool {
        matches!(
            self,
            RatesError::Transport { .. }
                | RatesError::HttpStatus { .. }
                | RatesError::UnsupportedEncoding(_)
                | RatesError::Decode(_)
                | RatesError::NumericFormat { .. }
        )
    }

    /// The empty-data cause, if this is an `EmptyData` error
    pub fn empty_data_cause(&self) -> Option<EmptyDataCause> {
        match self {
            RatesError::EmptyData(cause) => Some(*cause),
            _ => None,
        }
    }
}

/// Result type alias for daily_rates operations
pub type Result<T> = std::result::Result<T, RatesError>;
