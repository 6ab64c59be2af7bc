//! Colored status lines.
//!
//! Written to stderr so they never mix with generated
//! output that is piped to another program.
use colored::Colorize;

const ERROR: &str = "Error:";
const WARN: &str = "Warning:";

/// Print a warning message.
pub fn warn(msg: impl AsRef<str>) {
    let out = format!("{} {}", WARN.yellow(), msg.as_ref());
    eprintln!("{}", out);
}

/// Print an error message for failure.
pub fn fail(msg: impl AsRef<str>) {
    let out = format!("{} {}", ERROR.red(), msg.as_ref());
    eprintln!("{}", out);
}
