//! Data access error types.
//!
//! These errors represent failures of the data source to produce reference
//! data or response history at all. Defined in `reportgen-core` so the report
//! engine can propagate them unchanged from any `DataSource` implementation.
//!
//! A student with no completed responses is not an error: the reports render
//! that case as ordinary text.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when loading assessment data.
#[derive(Debug, Error)]
pub enum DataError {
    /// A data file or directory does not exist.
    #[error("data source not found: {}", .0.display())]
    NotFound(PathBuf),

    /// A data file exists but could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A data file could not be decoded into the expected records.
    #[error("malformed data in {}: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The source is unavailable for some other reason.
    #[error("data source unavailable: {0}")]
    Unavailable(String),
}
