use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

pub type Result<T, E = HarmonogramError> = std::result::Result<T, E>;

/// Coarse grouping of failures, used for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Argument,
    Range,
    Path,
    Format,
    Io,
}

#[derive(Debug, Error)]
pub enum HarmonogramError {
    #[error("at least one month is required")]
    NoMonths,
    #[error("Months must be distinct: {0} given more than once")]
    DuplicateMonth(String),
    #[error("Number of days must be equal to number of months ({months} months, {days} days)")]
    LengthMismatch { months: usize, days: usize },
    #[error("Invalid month: {0}")]
    UnknownMonth(String),
    #[error("Invalid day: {0}")]
    UnknownDay(String),
    #[error("Invalid day range: {0}")]
    InvalidDayRange(String),

    #[error("Invalid day range: {start}-{end} does not close in weekday order")]
    UnclosedRange { start: String, end: String },

    #[error("Invalid path specified: {0:?} is neither a file nor a directory")]
    InvalidTarget(PathBuf),
    #[error("File does not exist: {0:?}")]
    MissingFile(PathBuf),

    #[error("Invalid CSV header. Expected {expected:?}, got {actual:?}")]
    HeaderMismatch {
        expected: Vec<String>,
        actual: Vec<String>,
    },
    #[error("Invalid file format: expected exactly one data row, found {0}")]
    RowCount(usize),
    #[error("Invalid file format: missing field {0}")]
    MissingField(&'static str),
    #[error("Invalid duration value: {0:?}")]
    InvalidDuration(String),
    #[error("malformed csv: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl HarmonogramError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            HarmonogramError::NoMonths
            | HarmonogramError::DuplicateMonth(_)
            | HarmonogramError::LengthMismatch { .. }
            | HarmonogramError::UnknownMonth(_)
            | HarmonogramError::UnknownDay(_)
            | HarmonogramError::InvalidDayRange(_) => ErrorKind::Argument,
            HarmonogramError::UnclosedRange { .. } => ErrorKind::Range,
            HarmonogramError::InvalidTarget(_) | HarmonogramError::MissingFile(_) => {
                ErrorKind::Path
            }
            HarmonogramError::HeaderMismatch { .. }
            | HarmonogramError::RowCount(_)
            | HarmonogramError::MissingField(_)
            | HarmonogramError::InvalidDuration(_)
            | HarmonogramError::Csv(_) => ErrorKind::Format,
            HarmonogramError::Io { .. } => ErrorKind::Io,
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        HarmonogramError::Io {
            path: path.into(),
            source,
        }
    }
}
