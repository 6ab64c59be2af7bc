//! Lazy enumeration of capitalization and leetspeak variants for
//! password audit wordlists.
//!
//! A base string is expanded one character at a time into an
//! [OptionSet] using a [SubstitutionTable], the Cartesian product of
//! those sets is walked lazily by [BaseVariants] and the result may be
//! extended with digit and year suffixes by [Variants]. The exact number
//! of items is known up front from an [Estimate] so callers can size
//! progress output or answer count queries without enumerating.
//!
//! ```
//! use wordgen_core::EnumerationConfig;
//!
//! let config = EnumerationConfig::builder("ab").build();
//! let total = config.estimate().unwrap().total();
//! let variants: Vec<String> = config.variants().collect();
//! assert_eq!(total, variants.len() as u128);
//! ```
#![deny(missing_docs)]
#![forbid(unsafe_code)]

mod compose;
mod config;
mod error;
mod estimate;
mod options;
pub mod progress;
pub mod sink;
pub mod suffix;
mod table;
mod variants;

pub use compose::Variants;
pub use config::{ConfigBuilder, EnumerationConfig};
pub use error::Error;
pub use estimate::Estimate;
pub use options::{options_for_char, OptionSet};
pub use table::SubstitutionTable;
pub use variants::{BaseVariants, VariantSpace};

/// Result type for the library.
pub type Result<T> = std::result::Result<T, Error>;

/// Numerical digits.
#[doc(hidden)]
pub const DIGITS: &[char] =
    &['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];
