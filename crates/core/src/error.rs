//! Error types for the Death Star Pi tools.

use thiserror::Error;

/// Result type alias for Death Star Pi operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while producing terminal output.
///
/// Rendering is total over its inputs (unknown tags fall back rather
/// than fail), so writing to the sink is the only thing that can go
/// wrong.
#[derive(Debug, Error)]
pub enum Error {
    /// Writing to the output sink failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Exit codes for CLI commands
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
    pub const USAGE: i32 = 2;
}
