//! Substitution table files.
use crate::{Error, Result};
use std::path::Path;
use wordgen_core::SubstitutionTable;

/// Load a substitution table from a TOML file.
///
/// Each key is a lowercase letter mapped to its candidates in
/// output order:
///
/// ```toml
/// a = ["a", "A", "@", "4"]
/// o = ["o", "O", "0"]
/// ```
///
/// The loaded table replaces the built in table entirely.
pub fn load_table(path: impl AsRef<Path>) -> Result<SubstitutionTable> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(Error::NotFile(path.to_path_buf()));
    }

    let contents = std::fs::read_to_string(path)?;
    let table: SubstitutionTable =
        toml::from_str(&contents).map_err(|source| Error::Table {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::debug!(
        path = %path.display(),
        entries = %table.len(),
        "config::load_table",
    );

    Ok(table)
}
