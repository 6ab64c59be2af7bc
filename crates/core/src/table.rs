use crate::{options::dedup, Error, Result};
use serde::Deserialize;
use std::collections::BTreeMap;

/// Built in leetspeak substitutions.
const DEFAULT_SUBSTITUTIONS: &[(char, &[char])] = &[
    ('a', &['a', 'A', '@', '4']),
    ('b', &['b', 'B', '8']),
    ('c', &['c', 'C', '(']),
    ('e', &['e', 'E', '3']),
    ('g', &['g', 'G', '9', '6']),
    ('i', &['i', 'I', '1', '!']),
    ('l', &['l', 'L', '1', '|']),
    ('o', &['o', 'O', '0']),
    ('s', &['s', 'S', '$', '5']),
    ('t', &['t', 'T', '7', '+']),
    ('z', &['z', 'Z', '2']),
];

/// Substitution candidates keyed by lowercase letter.
///
/// Candidate order is output order. Every entry is non-empty and
/// free of duplicates; the first occurrence of a repeated candidate
/// wins when a table is built.
///
/// Tables deserialize from a map of single character strings, for
/// example the TOML document:
///
/// ```toml
/// a = ["a", "A", "@", "4"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "BTreeMap<String, Vec<String>>")]
pub struct SubstitutionTable {
    entries: BTreeMap<char, Vec<char>>,
}

impl SubstitutionTable {
    /// Table without entries, every letter falls back
    /// to toggling case.
    pub fn empty() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Build a table from letter and candidate pairs.
    ///
    /// A later entry for the same letter replaces an earlier one.
    pub fn from_entries<I, C>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (char, C)>,
        C: IntoIterator<Item = char>,
    {
        let mut table = Self::empty();
        for (letter, candidates) in entries {
            if !letter.is_alphabetic() || !letter.is_lowercase() {
                return Err(Error::InvalidTableKey(letter.to_string()));
            }
            let candidates = dedup(candidates);
            if candidates.is_empty() {
                return Err(Error::EmptyCandidates(letter));
            }
            table.entries.insert(letter, candidates);
        }
        Ok(table)
    }

    /// Candidates for a lowercase letter.
    pub fn get(&self, letter: char) -> Option<&[char]> {
        self.entries.get(&letter).map(|c| c.as_slice())
    }

    /// Number of letters with an entry.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in letter order.
    pub fn iter(&self) -> impl Iterator<Item = (char, &[char])> {
        self.entries.iter().map(|(k, v)| (*k, v.as_slice()))
    }
}

impl Default for SubstitutionTable {
    fn default() -> Self {
        let entries = DEFAULT_SUBSTITUTIONS
            .iter()
            .map(|(letter, candidates)| {
                (*letter, dedup(candidates.iter().copied()))
            })
            .collect();
        Self { entries }
    }
}

impl TryFrom<BTreeMap<String, Vec<String>>> for SubstitutionTable {
    type Error = Error;

    fn try_from(value: BTreeMap<String, Vec<String>>) -> Result<Self> {
        let mut entries = Vec::with_capacity(value.len());
        for (key, candidates) in value {
            let letter = single_char(&key)
                .ok_or_else(|| Error::InvalidTableKey(key.clone()))?;
            let candidates = candidates
                .iter()
                .map(|candidate| {
                    single_char(candidate).ok_or_else(|| {
                        Error::InvalidCandidate {
                            key: letter,
                            candidate: candidate.clone(),
                        }
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            entries.push((letter, candidates));
        }
        Self::from_entries(entries)
    }
}

fn single_char(value: &str) -> Option<char> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}
