use crate::{
    suffix::DIGIT_SUFFIX_TOTAL, EnumerationConfig, Error, Result,
};

/// Number of items a configuration produces.
///
/// When both suffix families are enabled each base variant gets the
/// year run followed by the digit run, so the per base count is the
/// sum of the two families rather than their product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Estimate {
    base: u128,
    years: Option<u128>,
    digits: Option<u128>,
    total: u128,
}

impl Estimate {
    /// Compute the counts for a configuration.
    pub fn new(config: &EnumerationConfig) -> Result<Self> {
        let overflow = || Error::CountOverflow(config.text().chars().count());

        let base = config.space().total()?;
        let years = config
            .years()
            .map(|range| range.suffix_total(config.year2()));
        let digits = config.append_digits().then_some(DIGIT_SUFFIX_TOTAL);

        let per_base = match (years, digits) {
            (None, None) => 1,
            (Some(years), None) => years,
            (None, Some(digits)) => digits,
            (Some(years), Some(digits)) => {
                years.checked_add(digits).ok_or_else(overflow)?
            }
        };
        let total = base.checked_mul(per_base).ok_or_else(overflow)?;

        tracing::debug!(
            base = %base,
            per_base = %per_base,
            total = %total,
            "estimate::new",
        );

        Ok(Self {
            base,
            years,
            digits,
            total,
        })
    }

    /// Number of base variants.
    pub fn base(&self) -> u128 {
        self.base
    }

    /// Number of year suffixes, if enabled.
    pub fn years(&self) -> Option<u128> {
        self.years
    }

    /// Number of digit suffixes, if enabled.
    pub fn digits(&self) -> Option<u128> {
        self.digits
    }

    /// Number of items emitted for every base variant.
    pub fn per_base(&self) -> u128 {
        self.total / self.base
    }

    /// Total number of items.
    pub fn total(&self) -> u128 {
        self.total
    }

    /// Total capped by an emission limit.
    pub fn effective_total(&self, limit: Option<u64>) -> u128 {
        match limit {
            Some(limit) => self.total.min(limit as u128),
            None => self.total,
        }
    }
}
