//! Error type shared by the pipeline and the binary.

use std::io;

use thiserror::Error;

/// Errors surfaced while laying out or drawing a frame.
#[derive(Debug, Error)]
pub enum Error {
    /// Terminal I/O failed (raw mode, writes, event reads).
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    /// taffy rejected a node operation.
    #[error("layout failed: {0}")]
    Layout(String),
}

impl From<taffy::TaffyError> for Error {
    fn from(err: taffy::TaffyError) -> Self {
        Error::Layout(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
