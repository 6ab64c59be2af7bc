use std::path::PathBuf;
use thiserror::Error;

/// Errors generated by the library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error generated when a year range is not two integers
    /// separated by a hyphen.
    #[error(
        "invalid year range '{0}', expected START-END (for example 1990-2025)"
    )]
    YearRange(String),

    /// Error generated when the number of variants for an input
    /// does not fit in 128 bits.
    #[error(
        "variant count for a {0} character input exceeds the supported maximum of {max}",
        max = u128::MAX
    )]
    CountOverflow(usize),

    /// Error generated when a substitution table key is not a
    /// single lowercase letter.
    #[error("substitution table key '{0}' must be a single lowercase letter")]
    InvalidTableKey(String),

    /// Error generated when a substitution candidate is not a
    /// single character.
    #[error(
        "substitution candidate '{candidate}' for '{key}' must be a single character"
    )]
    InvalidCandidate {
        /// Table key.
        key: char,
        /// Offending candidate.
        candidate: String,
    },

    /// Error generated when a substitution table entry has no
    /// candidates.
    #[error("substitution table entry for '{0}' has no candidates")]
    EmptyCandidates(char),

    /// Error generated when an output file cannot be opened
    /// or written.
    #[error("failed to write to {}: {source}", path.display())]
    Output {
        /// Destination path.
        path: PathBuf,
        /// Underlying cause.
        #[source]
        source: std::io::Error,
    },

    /// Errors generated by the IO module.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
