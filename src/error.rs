use std::path::PathBuf;
use thiserror::Error;

// Largest distance from the epoch, in milliseconds, that a timestamp may have
pub(crate) const MAX_TIMESTAMP_MS: f64 = 8.64e15;

#[derive(Debug, Error, PartialEq)]
pub enum Error {
    #[error("Timestamp {0} is not a finite number")]
    NotFinite(f64),

    #[error("Timestamp {0} is outside of the supported range of ±8.64e15 milliseconds")]
    OutOfRange(f64),

    #[error("Unknown language {0}")]
    UnknownLanguage(String),

    #[error("Failed to load locale file {}: {message}", path.display())]
    LocaleFile { path: PathBuf, message: String },
}

impl Error {
    /// Return `true` if the error was caused by an unusable timestamp
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::NotFinite(_) | Self::OutOfRange(_))
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Validate a millisecond timestamp and truncate it to whole milliseconds
pub(crate) fn validate_timestamp(timestamp: f64) -> Result<i64> {
    if !timestamp.is_finite() {
        return Err(Error::NotFinite(timestamp));
    }
    if timestamp.abs() > MAX_TIMESTAMP_MS {
        return Err(Error::OutOfRange(timestamp));
    }

    // The range check guarantees that the cast is lossless after truncation
    #[allow(clippy::cast_possible_truncation)]
    let millis = timestamp.trunc() as i64;
    Ok(millis)
}
