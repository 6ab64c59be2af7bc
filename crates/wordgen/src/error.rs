use std::path::PathBuf;
use thiserror::Error;

/// Errors generated by the command line tools.
#[derive(Debug, Error)]
pub enum Error {
    /// Error generated when the prompt for a base string
    /// is closed before a line is entered.
    #[error("no input string was provided")]
    InputExhausted,

    /// Error generated when a path is not a file.
    #[error("file not found: {}", .0.display())]
    NotFile(PathBuf),

    /// Error generated reading a substitution table file.
    #[error("invalid substitution table {}: {source}", path.display())]
    Table {
        /// Table file path.
        path: PathBuf,
        /// Parse error.
        #[source]
        source: toml::de::Error,
    },

    /// Errors generated by the core library.
    #[error(transparent)]
    Core(#[from] wordgen_core::Error),

    /// Errors generated by the IO module.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Errors generated converting to JSON.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Errors generated by the readline library.
    #[error(transparent)]
    Readline(#[from] rustyline::error::ReadlineError),
}
