//! Runtime event stream payloads.

use std::path::PathBuf;

/// Events emitted from the single-owner runtime loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QslEvent {
    /// A new record set replaced the previous one.
    Loaded {
        /// Records in the new set.
        records: usize,
        /// File the set came from, `None` for in-memory text.
        source: Option<PathBuf>,
    },
    /// A load failed; the previous set is still current.
    LoadFailed {
        /// Rendered error.
        message: String,
    },
    /// The current set was dropped.
    Cleared,
}
