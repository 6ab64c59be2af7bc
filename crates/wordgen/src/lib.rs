//! Command line tools for generating password audit wordlists.
//!
//! The `word-gen` executable streams every capitalization and
//! leetspeak variant of a base string, optionally followed by digit
//! and year suffixes. The `frequent-users` executable reports user
//! names that repeat in a colon delimited credentials file.
#![forbid(unsafe_code)]

pub mod cli;
pub mod commands;
mod config;
mod error;
pub(crate) mod helpers;

pub use config::load_table;
pub use error::Error;
pub use wordgen_cli_helpers::CommandTree;

/// Result type for the executables.
pub type Result<T> = std::result::Result<T, Error>;

/// Default tracing filter when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "wordgen=info";
