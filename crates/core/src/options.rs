use crate::SubstitutionTable;

/// Ordered, duplicate free candidates for one input position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionSet(Vec<char>);

impl OptionSet {
    /// Number of candidates.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no candidates.
    ///
    /// Always false for sets produced by [options_for_char].
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Candidates in output order.
    pub fn as_slice(&self) -> &[char] {
        &self.0
    }
}

impl AsRef<[char]> for OptionSet {
    fn as_ref(&self) -> &[char] {
        &self.0
    }
}

/// Resolve the candidates for one input character.
///
/// Letters use the table entry for their lowercase form when there
/// is one, otherwise the lowercase and uppercase forms. Anything that
/// is not a letter is passed through verbatim.
///
/// Case mappings that expand to several characters (`ß` uppercases
/// to `SS`) keep the original character so every candidate is a
/// single character.
pub fn options_for_char(ch: char, table: &SubstitutionTable) -> OptionSet {
    if !ch.is_alphabetic() {
        return OptionSet(vec![ch]);
    }

    let lower = single_mapping(ch.to_lowercase(), ch);
    if let Some(candidates) = table.get(lower) {
        return OptionSet(candidates.to_vec());
    }
    let upper = single_mapping(ch.to_uppercase(), ch);
    OptionSet(dedup([lower, upper]))
}

fn single_mapping(mut mapping: impl Iterator<Item = char>, ch: char) -> char {
    match (mapping.next(), mapping.next()) {
        (Some(mapped), None) => mapped,
        _ => ch,
    }
}

/// Remove duplicates keeping the first occurrence.
pub(crate) fn dedup(values: impl IntoIterator<Item = char>) -> Vec<char> {
    let mut out: Vec<char> = Vec::new();
    for value in values {
        if !out.contains(&value) {
            out.push(value);
        }
    }
    out
}
