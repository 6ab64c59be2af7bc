use crate::{
    suffix::{DigitSuffixes, YearSuffixes},
    BaseVariants,
};
use std::iter::FusedIterator;

/// Suffixes appended to a single base variant.
///
/// The year run is exhausted before the digit run starts; the two
/// families are never combined with each other.
#[derive(Debug, Clone)]
struct SuffixRun {
    years: Option<YearSuffixes>,
    digits: Option<DigitSuffixes>,
}

impl SuffixRun {
    fn is_empty(&self) -> bool {
        self.years.is_none() && self.digits.is_none()
    }
}

impl Iterator for SuffixRun {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(years) = self.years.as_mut() {
            if let Some(suffix) = years.next() {
                return Some(suffix);
            }
            self.years = None;
        }
        self.digits.as_mut()?.next()
    }
}

/// Lazy stream of base variants with their configured suffixes.
///
/// Created by [EnumerationConfig::variants](crate::EnumerationConfig::variants).
#[derive(Debug, Clone)]
pub struct Variants<'a> {
    bases: BaseVariants<'a>,
    template: SuffixRun,
    current: Option<(String, SuffixRun)>,
}

impl<'a> Variants<'a> {
    pub(crate) fn new(
        bases: BaseVariants<'a>,
        years: Option<YearSuffixes>,
        digits: Option<DigitSuffixes>,
    ) -> Self {
        Self {
            bases,
            template: SuffixRun { years, digits },
            current: None,
        }
    }
}

impl Iterator for Variants<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        if self.template.is_empty() {
            return self.bases.next();
        }

        loop {
            if let Some((base, run)) = self.current.as_mut() {
                if let Some(suffix) = run.next() {
                    let mut item =
                        String::with_capacity(base.len() + suffix.len());
                    item.push_str(base);
                    item.push_str(&suffix);
                    return Some(item);
                }
            }
            let base = self.bases.next()?;
            self.current = Some((base, self.template.clone()));
        }
    }
}

impl FusedIterator for Variants<'_> {}
