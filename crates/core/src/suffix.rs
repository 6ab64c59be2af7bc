//! Suffix families appended to base variants.
//!
//! Both families are cheap to clone so a fresh run can be started
//! for every base variant.
use crate::{Error, Result, DIGITS};
use std::{fmt, iter::FusedIterator, str::FromStr};

/// Longest digit suffix.
pub const MAX_DIGIT_SUFFIX_LEN: usize = 4;

/// Number of digit suffixes, `10 + 100 + 1000 + 10000`.
pub const DIGIT_SUFFIX_TOTAL: u128 = 11_110;

/// Separator between the years of a range.
pub const YEAR_SEPARATOR: char = '-';

/// Every digit string of length one to four.
///
/// Shorter strings come first; strings of the same length count up
/// from all zeros to all nines keeping leading zeros.
#[derive(Debug, Clone)]
pub struct DigitSuffixes {
    length: usize,
    value: u32,
}

impl DigitSuffixes {
    /// Start at `"0"`.
    pub fn new() -> Self {
        Self {
            length: 1,
            value: 0,
        }
    }
}

impl Default for DigitSuffixes {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for DigitSuffixes {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        if self.length > MAX_DIGIT_SUFFIX_LEN {
            return None;
        }
        let suffix = zero_padded(self.value, self.length);
        self.value += 1;
        if self.value == 10u32.pow(self.length as u32) {
            self.length += 1;
            self.value = 0;
        }
        Some(suffix)
    }
}

impl FusedIterator for DigitSuffixes {}

/// Render `value` with exactly `width` digits, right to left.
fn zero_padded(mut value: u32, width: usize) -> String {
    let mut buf = ['0'; MAX_DIGIT_SUFFIX_LEN];
    for slot in buf[..width].iter_mut().rev() {
        *slot = DIGITS[(value % 10) as usize];
        value /= 10;
    }
    buf[..width].iter().collect()
}

/// Inclusive, ascending range of years.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearRange {
    start: u32,
    end: u32,
}

impl YearRange {
    /// Create a range, swapping the bounds when given
    /// in descending order.
    pub fn new(start: u32, end: u32) -> Self {
        if start > end {
            Self {
                start: end,
                end: start,
            }
        } else {
            Self { start, end }
        }
    }

    /// First year.
    pub fn start(&self) -> u32 {
        self.start
    }

    /// Last year.
    pub fn end(&self) -> u32 {
        self.end
    }

    /// Number of years in the range.
    pub fn len(&self) -> u128 {
        (self.end - self.start) as u128 + 1
    }

    /// Always false, a range holds at least one year.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Number of suffixes produced by [YearRange::suffixes].
    pub fn suffix_total(&self, two_digit: bool) -> u128 {
        self.len() * if two_digit { 2 } else { 1 }
    }

    /// Suffixes for every year in the range.
    pub fn suffixes(&self, two_digit: bool) -> YearSuffixes {
        YearSuffixes {
            next_year: Some(self.start),
            end: self.end,
            two_digit,
            short_form: None,
        }
    }
}

impl FromStr for YearRange {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split(YEAR_SEPARATOR).collect();
        let [start, end] = parts.as_slice() else {
            return Err(Error::YearRange(s.to_owned()));
        };
        let parse = |year: &str| {
            year.trim()
                .parse::<u32>()
                .map_err(|_| Error::YearRange(s.to_owned()))
        };
        Ok(Self::new(parse(*start)?, parse(*end)?))
    }
}

impl fmt::Display for YearRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.start, YEAR_SEPARATOR, self.end)
    }
}

/// Year suffixes in ascending order.
///
/// With two digit forms enabled each year is followed by its last
/// two digits, `2020` then `20`.
#[derive(Debug, Clone)]
pub struct YearSuffixes {
    next_year: Option<u32>,
    end: u32,
    two_digit: bool,
    short_form: Option<String>,
}

impl Iterator for YearSuffixes {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(short) = self.short_form.take() {
            return Some(short);
        }
        let year = self.next_year?;
        self.next_year = (year < self.end).then(|| year + 1);
        if self.two_digit {
            self.short_form = Some(format!("{:02}", year % 100));
        }
        Some(year.to_string())
    }
}

impl FusedIterator for YearSuffixes {}
