//! Async single-owner runtime for hosts that must not block on parsing.

/// Event stream types emitted by the runtime.
pub mod events;
/// Handle and command loop implementation.
pub mod handle;
