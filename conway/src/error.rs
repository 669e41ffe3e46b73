// error.rs - Error type shared by the whole core crate

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong while building, querying or persisting a board.
#[derive(Debug, Error)]
pub enum LifeError {
    #[error("cell ({x}, {y}) is outside the {width}x{height} board")]
    InvalidCoordinate {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
    #[error("board dimensions {width}x{height} are invalid: {reason}")]
    InvalidDimensions {
        width: usize,
        height: usize,
        reason: &'static str,
    },
    #[error("malformed save data at line {line}: {reason}")]
    MalformedFormat { line: usize, reason: String },
    #[error("storage unavailable at {}: {source}", path.display())]
    StorageUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl LifeError {
    pub(crate) fn malformed(line: usize, reason: impl Into<String>) -> Self {
        LifeError::MalformedFormat {
            line,
            reason: reason.into(),
        }
    }
}

pub type Result<T, E = LifeError> = std::result::Result<T, E>;
