use crate::{Error, Result};
use indexmap::IndexMap;
use std::{
    fs::File,
    io::{BufRead, BufReader, Write},
    path::Path,
};

/// Default number of occurrences a user must exceed to be reported.
pub const DEFAULT_THRESHOLD: usize = 3;

/// Count the user field of every line that contains a colon.
///
/// The user is the text before the first colon of the trimmed line.
/// Users are kept in the order they are first seen.
pub fn count_users<R: BufRead>(reader: R) -> Result<IndexMap<String, usize>> {
    let mut counts = IndexMap::new();
    for line in reader.lines() {
        let line = line?;
        if !line.contains(':') {
            continue;
        }
        let user = line.trim().split(':').next().unwrap_or_default();
        *counts.entry(user.to_owned()).or_insert(0) += 1;
    }
    Ok(counts)
}

/// Print users that occur more than `threshold` times in a file.
///
/// Returns the number of users reported.
pub fn run<O: Write>(
    path: impl AsRef<Path>,
    threshold: usize,
    mut out: O,
) -> Result<usize> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(Error::NotFile(path.to_path_buf()));
    }

    let counts = count_users(BufReader::new(File::open(path)?))?;
    tracing::debug!(
        path = %path.display(),
        users = %counts.len(),
        "frequent_users::run",
    );

    writeln!(out, "Users occurring more than {} times:", threshold)?;
    writeln!(out)?;

    let mut found = 0;
    for (user, count) in counts.iter().filter(|(_, c)| **c > threshold) {
        writeln!(out, "{}: {} times", user, count)?;
        found += 1;
    }
    if found == 0 {
        writeln!(out, "No users occur more than {} times.", threshold)?;
    }
    out.flush()?;
    Ok(found)
}
