use crate::{options_for_char, Error, OptionSet, Result, SubstitutionTable};
use std::iter::FusedIterator;

/// Candidates for every position of a base string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantSpace {
    positions: Vec<OptionSet>,
}

impl VariantSpace {
    /// Resolve the candidates for each character of `text`.
    pub fn new(text: &str, table: &SubstitutionTable) -> Self {
        Self {
            positions: text
                .chars()
                .map(|ch| options_for_char(ch, table))
                .collect(),
        }
    }

    /// Candidates for each position.
    pub fn positions(&self) -> &[OptionSet] {
        &self.positions
    }

    /// Number of base variants, the product of every
    /// position's candidate count.
    pub fn total(&self) -> Result<u128> {
        self.positions.iter().try_fold(1u128, |total, options| {
            total
                .checked_mul(options.len() as u128)
                .ok_or(Error::CountOverflow(self.positions.len()))
        })
    }

    /// Iterate every base variant from the beginning.
    pub fn iter(&self) -> BaseVariants<'_> {
        BaseVariants {
            positions: &self.positions,
            indices: vec![0; self.positions.len()],
            exhausted: false,
        }
    }
}

impl<'a> IntoIterator for &'a VariantSpace {
    type Item = String;
    type IntoIter = BaseVariants<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Odometer over the candidates of a [VariantSpace].
///
/// The last position advances fastest, so the first item picks the
/// first candidate everywhere and the last item picks the last
/// candidate everywhere. An empty input yields a single empty string.
#[derive(Debug, Clone)]
pub struct BaseVariants<'a> {
    positions: &'a [OptionSet],
    indices: Vec<usize>,
    exhausted: bool,
}

impl BaseVariants<'_> {
    /// Move to the next combination, returns false once
    /// every position has wrapped.
    fn advance(&mut self) -> bool {
        for (index, options) in
            self.indices.iter_mut().zip(self.positions).rev()
        {
            *index += 1;
            if *index < options.len() {
                return true;
            }
            *index = 0;
        }
        false
    }
}

impl Iterator for BaseVariants<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let variant = self
            .positions
            .iter()
            .zip(&self.indices)
            .map(|(options, &index)| options.as_slice()[index])
            .collect();
        self.exhausted = !self.advance();
        Some(variant)
    }
}

impl FusedIterator for BaseVariants<'_> {}
