//! Error types surfaced by loading and selector parsing.

use std::{io, path::PathBuf, str::Utf8Error};

use thiserror::Error;

/// Failure to obtain log text. Parsing itself never fails.
#[derive(Debug, Error)]
pub enum ReadError {
    /// The file could not be opened or read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// File that was requested.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// The file was read but is not UTF-8 text.
    #[error("{} is not valid UTF-8 text: {source}", path.display())]
    Decode {
        /// File that was requested.
        path: PathBuf,
        /// Decoding failure.
        #[source]
        source: Utf8Error,
    },
    /// In-memory content is not UTF-8 text.
    #[error("log content is not valid UTF-8 text: {0}")]
    NotText(#[from] Utf8Error),
}

/// Unknown filter kind name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown filter kind `{0}`")]
pub struct ParseFilterKindError(pub String);
