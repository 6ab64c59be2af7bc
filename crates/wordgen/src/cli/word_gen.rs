use clap::{CommandFactory, Parser};
use std::{io, path::PathBuf};
use wordgen_core::SubstitutionTable;

use crate::{
    commands::{generate, Generate, Outcome},
    helpers::readline::read_line,
    load_table, Result,
};

const PROMPT: &str = "Enter string: ";

/// Generate capitalization and substitution variants with optional
/// numeric and year suffixes.
#[derive(Parser, Debug)]
#[clap(name = "word-gen", author, version, about, long_about = None)]
pub struct WordGen {
    /// Append all numeric combinations of length 1-4.
    #[clap(short, long)]
    append_digits: bool,

    /// Append every year in an inclusive range.
    #[clap(short, long, value_name = "START-END")]
    years: Option<String>,

    /// Also append the two digit form of each year.
    #[clap(long)]
    year2: bool,

    /// Stop after emitting this many variants (0 = no limit).
    #[clap(short, long, default_value_t = 0)]
    limit: u64,

    /// Write results to a file instead of stdout.
    #[clap(short, long)]
    out: Option<PathBuf>,

    /// Only print the total count (no generation).
    #[clap(short, long)]
    count_only: bool,

    /// Substitution table file (TOML), replaces the built in table.
    #[clap(short, long, env = "WORDGEN_SUBS", hide_env_values = true)]
    subs: Option<PathBuf>,

    /// Input string (prompted if omitted).
    text: Option<String>,
}

/// Parse arguments and run the generator.
pub fn run() -> Result<Option<Outcome>> {
    if super::print_command_tree(&WordGen::command())? {
        return Ok(None);
    }

    let args = WordGen::parse();

    let text = match args.text {
        Some(text) => text,
        None => read_line(PROMPT)?,
    };

    let table = match &args.subs {
        Some(path) => load_table(path)?,
        None => SubstitutionTable::default(),
    };

    let cmd = Generate {
        text,
        table,
        append_digits: args.append_digits,
        years: args.years,
        year2: args.year2,
        limit: args.limit,
        out: args.out,
        count_only: args.count_only,
    };

    let outcome = generate::run(cmd, io::stdout().lock())?;
    Ok(Some(outcome))
}
