//! Error types for myshell

use thiserror::Error;

/// Result type alias for shell operations
pub type ShellResult<T> = Result<T, ShellError>;

/// Error types for shell command resolution and execution
#[derive(Error, Debug)]
pub enum ShellError {
    /// First token does not name a known command
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// An option token was not recognized by the command's resolver
    #[error("Unknown option: {0}")]
    UnknownOption(String),

    /// Wrong argument count; carries the command's usage line
    #[error("{0}")]
    Usage(&'static str),

    /// Mutually exclusive options were combined
    #[error("Error: Options {0} are mutually exclusive.")]
    OptionConflict(&'static str),

    /// IO error on the output sink
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ShellError {
    /// Diagnostics are printed to the console and the read loop continues;
    /// only sink failures propagate.
    pub const fn is_diagnostic(&self) -> bool {
        !matches!(self, Self::Io(_))
    }
}
