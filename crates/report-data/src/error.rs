// File: crates/report-data/src/error.rs
// Summary: Dataset error type.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid date '{input}'")]
    Date {
        input: String,
        #[source]
        source: chrono::ParseError,
    },
    #[error("unknown rating '{0}'")]
    UnknownRating(String),
    #[error("unknown quadrant '{0}'")]
    UnknownQuadrant(String),
    #[error("no {0} in the date range")]
    MissingDate(chrono::NaiveDate),
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
