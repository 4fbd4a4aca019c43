//! Error types for the waitline library.

use thiserror::Error;

/// Errors that can occur when mutating a waitline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WaitlineError {
    /// The requested insert position lies outside `0..=len`.
    #[error("invalid position {position} for a line of {len}")]
    InvalidPosition {
        /// The position that was requested.
        position: i64,
        /// The length of the line at the time of the request.
        len: usize,
    },
}
