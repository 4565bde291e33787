//! Error types for the helloworld library.

use thiserror::Error;

/// Reasons terminal capability detection can fail.
///
/// These never reach the end user: a failed detection degrades the
/// [`Terminal`](crate::terminal::Terminal) to plain text output.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DetectionError {
    /// `TERM` is set to `dumb`, which has no styling capabilities.
    #[error("terminal is dumb (TERM=dumb)")]
    DumbTerminal,

    /// The terminfo database entry for `TERM` could not be loaded.
    #[error("failed to read terminfo: {reason}")]
    TermInfo {
        /// Message reported by the terminfo reader.
        reason: String,
    },
}
