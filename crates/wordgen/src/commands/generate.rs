use crate::{helpers::messages, Result};
use std::{io::Write, path::PathBuf};
use wordgen_core::{
    progress::ProgressBar,
    sink::{SinkWriter, WriteSummary},
    suffix::YearRange,
    EnumerationConfig, SubstitutionTable,
};

/// Options for a generate run.
#[derive(Debug, Clone, Default)]
pub struct Generate {
    /// Base string.
    pub text: String,
    /// Substitution table.
    pub table: SubstitutionTable,
    /// Append digit suffixes.
    pub append_digits: bool,
    /// Year range in the form `START-END`.
    pub years: Option<String>,
    /// Also emit two digit years.
    pub year2: bool,
    /// Stop after this many items, zero is unlimited.
    pub limit: u64,
    /// Write items to this file instead of stdout.
    pub out: Option<PathBuf>,
    /// Only print the number of items.
    pub count_only: bool,
}

/// Result of a generate run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Only the total was printed.
    Counted(u128),
    /// Items were written.
    Written {
        /// Number of items and whether the limit stopped the run.
        summary: WriteSummary,
        /// Destination file, `None` for stdout.
        path: Option<PathBuf>,
    },
}

/// Count or write the variants for a base string.
///
/// Items go to `stdout` unless an output file is given, in which
/// case `stdout` only receives a summary line. Progress is drawn
/// on stderr.
pub fn run<O: Write>(cmd: Generate, mut stdout: O) -> Result<Outcome> {
    let years = cmd
        .years
        .as_deref()
        .map(str::parse::<YearRange>)
        .transpose()?;
    if cmd.year2 && years.is_none() {
        messages::warn("--year2 has no effect without --years");
    }

    let config = EnumerationConfig::builder(cmd.text)
        .table(cmd.table)
        .append_digits(cmd.append_digits)
        .years(years)
        .year2(cmd.year2)
        .limit(cmd.limit)
        .build();

    let estimate = config.estimate()?;
    let total = estimate.effective_total(config.limit());

    tracing::debug!(
        base = %estimate.base(),
        total = %estimate.total(),
        effective = %total,
        "generate::run",
    );

    if cmd.count_only {
        return print_count(total, stdout);
    }

    let mut progress = ProgressBar::new(total);
    match cmd.out {
        Some(path) => {
            let mut sink = SinkWriter::create(&path, config.limit())?;
            let summary = sink.write_all(config.variants(), &mut progress)?;
            // close the file before reporting
            sink.into_inner()?;

            writeln!(
                stdout,
                "Wrote {} variants to {}",
                summary.emitted,
                path.display()
            )?;
            stdout.flush()?;
            Ok(Outcome::Written {
                summary,
                path: Some(path),
            })
        }
        None => {
            let mut sink = SinkWriter::new(stdout, config.limit());
            let summary = sink.write_all(config.variants(), &mut progress)?;
            Ok(Outcome::Written {
                summary,
                path: None,
            })
        }
    }
}

/// Print the total without building a variant stream.
fn print_count<O: Write>(total: u128, mut stdout: O) -> Result<Outcome> {
    writeln!(stdout, "{}", total)?;
    stdout.flush()?;
    Ok(Outcome::Counted(total))
}
