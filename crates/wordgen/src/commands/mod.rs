//! Commands backing the executables.
pub mod frequent_users;
pub mod generate;

pub use generate::{Generate, Outcome};
