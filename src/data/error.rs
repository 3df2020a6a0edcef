use std::path::PathBuf;

use thiserror::Error;

/// The dataset could not be read or does not match the expected format.
///
/// Fatal for the session: the caller shows the message and skips rendering.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed dataset JSON")]
    Json(#[from] serde_json::Error),

    #[error("record {row}: category index {index} out of range ({len} categories)")]
    UnknownCategory { row: usize, index: usize, len: usize },

    #[error("record {row}: year {year} not listed in the dataset years")]
    UnknownYear { row: usize, year: i32 },

    #[error("record {row}: month {month} outside 1-12")]
    MonthOutOfRange { row: usize, month: u32 },
}

/// Filter criteria outside their domain.
///
/// The UI is expected to reject these before running the pipeline; the core
/// never corrects them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidCriteria {
    #[error("{field} month {month} outside 1-12")]
    MonthOutOfRange { field: &'static str, month: u32 },

    #[error("start year {start} is after end year {end}")]
    YearsReversed { start: i32, end: i32 },

    #[error("category index {index} out of range ({len} categories)")]
    UnknownCategory { index: usize, len: usize },
}
