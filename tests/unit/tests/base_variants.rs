use anyhow::Result;
use wordgen_core::{
    options_for_char, EnumerationConfig, SubstitutionTable, VariantSpace,
};
use wordgen_unit_tests::{assert_distinct, collect};

#[test]
fn cat_variants_use_table_entries() -> Result<()> {
    let table = SubstitutionTable::default();
    let expected: u128 = "cat"
        .chars()
        .map(|ch| table.get(ch).map(|c| c.len()).unwrap_or(1) as u128)
        .product();

    let config = EnumerationConfig::builder("cat").build();
    let variants = collect(&config);

    assert_eq!(expected, 48);
    assert_eq!(config.estimate()?.total(), expected);
    assert_eq!(variants.len() as u128, expected);
    assert_eq!(variants.first().map(String::as_str), Some("cat"));
    assert_eq!(variants.last().map(String::as_str), Some("(4+"));
    assert!(variants.iter().any(|v| v == "C@7"));
    assert_distinct(&variants);
    Ok(())
}

#[test]
fn every_variant_keeps_input_length() -> Result<()> {
    let text = "Straße 42!";
    let config = EnumerationConfig::builder(text).build();
    let variants = collect(&config);

    let expected: u128 = config
        .space()
        .positions()
        .iter()
        .map(|options| options.len() as u128)
        .product();
    assert_eq!(variants.len() as u128, expected);
    for variant in &variants {
        assert_eq!(variant.chars().count(), text.chars().count());
        assert!(variant.ends_with(" 42!"));
    }
    assert_distinct(&variants);
    Ok(())
}

#[test]
fn enumeration_is_restartable() {
    let config = EnumerationConfig::builder("Tesla").build();
    let first = collect(&config);
    let second = collect(&config);
    assert_eq!(first, second);

    let space = VariantSpace::new("Tesla", &SubstitutionTable::default());
    let third: Vec<String> = space.iter().collect();
    assert_eq!(first, third);
}

#[test]
fn option_sets_are_stable_and_distinct() {
    let table = SubstitutionTable::default();
    for ch in "aAbBzZ!1 éß".chars() {
        let first = options_for_char(ch, &table);
        let second = options_for_char(ch, &table);
        assert_eq!(first, second);

        let mut seen = Vec::new();
        for candidate in first.as_slice() {
            assert!(!seen.contains(candidate), "{ch} repeats {candidate}");
            seen.push(*candidate);
        }
    }
}

#[test]
fn custom_table_changes_candidates() -> Result<()> {
    let table = SubstitutionTable::from_entries([('o', "o0".chars())])?;
    let config = EnumerationConfig::builder("oo").table(table).build();
    assert_eq!(collect(&config), vec!["oo", "o0", "0o", "00"]);
    Ok(())
}
