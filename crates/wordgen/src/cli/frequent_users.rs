use clap::{CommandFactory, Parser};
use std::{io, path::PathBuf};

use crate::{
    commands::frequent_users::{self, DEFAULT_THRESHOLD},
    Result,
};

/// Report user names that repeat in a colon delimited file.
#[derive(Parser, Debug)]
#[clap(name = "frequent-users", author, version, about, long_about = None)]
pub struct FrequentUsers {
    /// Report users seen more than this many times.
    #[clap(short, long, default_value_t = DEFAULT_THRESHOLD)]
    threshold: usize,

    /// Path to the password file.
    file: PathBuf,
}

/// Parse arguments and print the frequent users.
pub fn run() -> Result<()> {
    if super::print_command_tree(&FrequentUsers::command())? {
        return Ok(());
    }

    let args = FrequentUsers::parse();
    frequent_users::run(&args.file, args.threshold, io::stdout().lock())?;
    Ok(())
}
