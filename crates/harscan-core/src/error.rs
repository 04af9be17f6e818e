//! Error taxonomy for loading a HAR capture.
//!
//! A scan that finds nothing is not an error; see [`crate::filter::FilterOutcome`].

use std::path::PathBuf;
use thiserror::Error;

/// Terminal failure of one scan. No partial results are produced.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The HAR file does not exist or could not be read.
    #[error("file '{}' not found or unreadable", path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid JSON.
    #[error("failed to parse '{}': make sure it is a valid JSON", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Valid JSON, but `log.entries` is missing or not an array.
    #[error("invalid log structure: expected a `log.entries` array")]
    InvalidLog,
}

/// Unrecognized `--location` / `default_location` value.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown content-type location '{0}' (expected request, response, or both)")]
pub struct ParseLocationError(pub String);
