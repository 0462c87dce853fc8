//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or validating configuration.
///
/// Every variant names the `TITLE_GUARD_*` setting that caused it.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{setting}: port 0 is not allowed")]
    ZeroPort { setting: &'static str },

    #[error("{setting}: '{value}' is not a port number: {source}")]
    InvalidPort {
        setting: &'static str,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("{setting}: '{value}' is not an IP address: {source}")]
    InvalidBindAddr {
        setting: &'static str,
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },

    #[error("{setting}: {path} does not exist")]
    PathNotFound {
        setting: &'static str,
        path: PathBuf,
    },

    /// A word list or corpus path points at something other than a regular file.
    #[error("{setting}: {path} is not a file")]
    NotAFile {
        setting: &'static str,
        path: PathBuf,
    },

    /// The model path points at something other than a directory.
    #[error("{setting}: {path} is not a directory")]
    NotADirectory {
        setting: &'static str,
        path: PathBuf,
    },
}
