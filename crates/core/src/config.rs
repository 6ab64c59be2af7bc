use crate::{
    suffix::{DigitSuffixes, YearRange},
    Estimate, Result, SubstitutionTable, VariantSpace, Variants,
};

/// Parameters for one enumeration run.
///
/// Immutable once built, the same configuration drives both the
/// [Estimate] and the [Variants] stream so the two always agree.
#[derive(Debug, Clone)]
pub struct EnumerationConfig {
    text: String,
    table: SubstitutionTable,
    space: VariantSpace,
    append_digits: bool,
    years: Option<YearRange>,
    year2: bool,
    limit: Option<u64>,
}

impl EnumerationConfig {
    /// Start building a configuration for a base string.
    pub fn builder(text: impl Into<String>) -> ConfigBuilder {
        ConfigBuilder {
            text: text.into(),
            table: SubstitutionTable::default(),
            append_digits: false,
            years: None,
            year2: false,
            limit: None,
        }
    }

    /// Base string.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Substitution table.
    pub fn table(&self) -> &SubstitutionTable {
        &self.table
    }

    /// Resolved candidates for the base string.
    pub fn space(&self) -> &VariantSpace {
        &self.space
    }

    /// Whether digit suffixes are appended.
    pub fn append_digits(&self) -> bool {
        self.append_digits
    }

    /// Year range for year suffixes.
    pub fn years(&self) -> Option<&YearRange> {
        self.years.as_ref()
    }

    /// Whether two digit year forms are emitted.
    ///
    /// Has no effect without a year range.
    pub fn year2(&self) -> bool {
        self.year2
    }

    /// Maximum number of items to emit.
    pub fn limit(&self) -> Option<u64> {
        self.limit
    }

    /// Predict the number of items without enumerating.
    pub fn estimate(&self) -> Result<Estimate> {
        Estimate::new(self)
    }

    /// Stream every item from the beginning.
    ///
    /// Each call starts over and yields the same sequence.
    pub fn variants(&self) -> Variants<'_> {
        Variants::new(
            self.space.iter(),
            self.years.map(|range| range.suffixes(self.year2)),
            self.append_digits.then(DigitSuffixes::new),
        )
    }
}

/// Builder for an [EnumerationConfig].
#[derive(Debug, Clone)]
pub struct ConfigBuilder {
    text: String,
    table: SubstitutionTable,
    append_digits: bool,
    years: Option<YearRange>,
    year2: bool,
    limit: Option<u64>,
}

impl ConfigBuilder {
    /// Substitution table, defaults to the built in table.
    pub fn table(mut self, table: SubstitutionTable) -> Self {
        self.table = table;
        self
    }

    /// Append every digit suffix to each base variant.
    pub fn append_digits(mut self, append_digits: bool) -> Self {
        self.append_digits = append_digits;
        self
    }

    /// Append year suffixes to each base variant.
    pub fn years(mut self, years: Option<YearRange>) -> Self {
        self.years = years;
        self
    }

    /// Emit the two digit form after each year.
    pub fn year2(mut self, year2: bool) -> Self {
        self.year2 = year2;
        self
    }

    /// Stop after this many items, zero means no limit.
    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = (limit > 0).then_some(limit);
        self
    }

    /// Resolve the base string and build the configuration.
    pub fn build(self) -> EnumerationConfig {
        let space = VariantSpace::new(&self.text, &self.table);
        EnumerationConfig {
            text: self.text,
            table: self.table,
            space,
            append_digits: self.append_digits,
            years: self.years,
            year2: self.year2,
            limit: self.limit,
        }
    }
}
