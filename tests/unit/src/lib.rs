//! Shared helpers for the wordgen integration tests.
use std::collections::HashSet;
use wordgen_core::EnumerationConfig;

/// Collect every item for a configuration.
pub fn collect(config: &EnumerationConfig) -> Vec<String> {
    config.variants().collect()
}

/// Assert that no item repeats.
pub fn assert_distinct(items: &[String]) {
    let unique: HashSet<&String> = items.iter().collect();
    assert_eq!(unique.len(), items.len(), "duplicate items generated");
}
