// crates/cityinfo-core/src/error.rs

//! Error taxonomy for the city database.
//!
//! Errors split into two groups. Source-level errors ([`CityInfoError::SourceUnavailable`],
//! [`CityInfoError::Io`]) abort the whole query. Record-level errors
//! ([`CityInfoError::MalformedRecord`], [`CityInfoError::LineTooLong`],
//! [`CityInfoError::MissingVariant`]) only concern one line of the backing data;
//! see [`CityInfoError::is_record_local`].

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CityInfoError {
    /// The backing data could not be opened.
    #[error("City database not available at {}: {source}", path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading from an already opened source failed.
    #[error("I/O error while reading city database: {0}")]
    Io(#[from] io::Error),

    /// A record has fewer columns than the layout requires.
    #[error("Malformed record: expected {expected} fields, found {found}")]
    MalformedRecord { found: usize, expected: usize },

    /// A physical line reached the fixed line capacity.
    #[error("Line {line} is {len} bytes long, which exceeds the line capacity")]
    LineTooLong { line: usize, len: usize },

    /// An indirected field names no alternative to select from.
    #[error("Indirection '{key}' has no variant at position {index}")]
    MissingVariant { key: String, index: usize },

    #[cfg(feature = "json")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CityInfoError {
    /// Whether the error only affects a single record, so that bulk queries
    /// may continue past it.
    pub fn is_record_local(&self) -> bool {
        matches!(
            self,
            CityInfoError::MalformedRecord { .. }
                | CityInfoError::LineTooLong { .. }
                | CityInfoError::MissingVariant { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, CityInfoError>;
