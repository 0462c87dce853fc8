//! Word-list loading errors.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading a word list or title corpus from disk.
#[derive(Debug, Error)]
pub enum WordListError {
    /// File could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// `.json` file is not an array of strings.
    #[error("failed to parse {path} as a JSON string array: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
