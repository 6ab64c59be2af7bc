//! Argument parsing and entry points for the executables.
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub mod frequent_users;
pub mod word_gen;

/// Environment variable that prints the command tree as JSON.
pub const CLI_JSON_ENV: &str = "WORDGEN_CLI_JSON";

/// Install the tracing subscriber.
///
/// Logs are written to stderr so they never mix with
/// generated output on stdout.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| crate::DEFAULT_LOG_FILTER.into()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();
}

/// Print the command tree as JSON when requested.
///
/// Returns true when the tree was printed.
pub(crate) fn print_command_tree(cmd: &clap::Command) -> crate::Result<bool> {
    if std::env::var(CLI_JSON_ENV).ok().is_none() {
        return Ok(false);
    }
    let tree: crate::CommandTree = cmd.into();
    serde_json::to_writer_pretty(std::io::stdout(), &tree)?;
    println!();
    Ok(true)
}
