//! Parsed record collections and the session that owns the latest one.

/// Key types used by set-based selections.
pub mod indices;
/// Session holding the most recently loaded record set.
pub mod session;
/// Immutable, ordered record collection.
pub mod store;
