//! Global error handling for packfs
//!
//! A single crate-level error type; variants map to the failure kinds the
//! tool can hit: bad configuration, filesystem failures, malformed archives.
//! Every error aborts the run, so no partial archive is ever written.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Global error type for packfs operations
#[derive(Error, Debug)]
pub enum PackError {
    /// Invalid CLI arguments or unusable ignore rules
    #[error("Configuration error: {0}")]
    Config(String),

    /// Filesystem failure, tagged with the path that failed
    #[error("IO error: {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Structural violation found while parsing an archive
    #[error("Format error: {0}")]
    Format(String),
}

impl PackError {
    /// Wrap an `io::Error` with the path the operation touched
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Specialized Result type for packfs operations
pub type Result<T> = std::result::Result<T, PackError>;

// Allow converting PackError to io::Error so tests can mix the two
impl From<PackError> for io::Error {
    fn from(err: PackError) -> Self {
        io::Error::new(io::ErrorKind::Other, err.to_string())
    }
}
