use anyhow::Result;
use wordgen_core::{
    suffix::{YearRange, DIGIT_SUFFIX_TOTAL},
    EnumerationConfig, SubstitutionTable,
};
use wordgen_unit_tests::collect;

#[test]
fn both_families_are_summed_not_multiplied() -> Result<()> {
    let config = EnumerationConfig::builder("1")
        .append_digits(true)
        .years(Some("2020-2020".parse()?))
        .build();
    let items = collect(&config);

    let year_total = 1;
    assert_eq!(items.len() as u128, DIGIT_SUFFIX_TOTAL + year_total);
    assert_ne!(items.len() as u128, DIGIT_SUFFIX_TOTAL * year_total);

    let estimate = config.estimate()?;
    assert_eq!(estimate.per_base(), DIGIT_SUFFIX_TOTAL + year_total);
    assert_eq!(estimate.total(), items.len() as u128);

    assert_eq!(items[0], "12020");
    assert_eq!(items[1], "10");
    assert_eq!(items.last().map(String::as_str), Some("19999"));
    Ok(())
}

#[test]
fn estimate_matches_emission_for_every_policy() -> Result<()> {
    let range = YearRange::new(1998, 2001);
    for append_digits in [false, true] {
        for years in [None, Some(range)] {
            for year2 in [false, true] {
                let config = EnumerationConfig::builder("Go")
                    .append_digits(append_digits)
                    .years(years)
                    .year2(year2)
                    .build();
                let emitted = config.variants().count() as u128;
                assert_eq!(
                    config.estimate()?.total(),
                    emitted,
                    "digits={append_digits} years={years:?} year2={year2}",
                );
            }
        }
    }
    Ok(())
}

#[test]
fn year_run_order_per_base() -> Result<()> {
    let config = EnumerationConfig::builder("z")
        .table(SubstitutionTable::empty())
        .years(Some("2001-2000".parse()?))
        .year2(true)
        .build();
    assert_eq!(
        collect(&config),
        vec![
            "z2000", "z00", "z2001", "z01", "Z2000", "Z00", "Z2001", "Z01",
        ]
    );
    Ok(())
}

#[test]
fn digit_run_follows_base_order() {
    let config = EnumerationConfig::builder("b").append_digits(true).build();
    let items = collect(&config);
    // b, B and 8 each get the full digit run
    assert_eq!(items.len(), 3 * 11_110);
    assert_eq!(items[0], "b0");
    assert_eq!(items[11_109], "b9999");
    assert_eq!(items[11_110], "B0");
    assert_eq!(items[2 * 11_110], "80");
}

#[test]
fn abandoning_the_stream_is_safe() {
    let config = EnumerationConfig::builder("password")
        .append_digits(true)
        .years(Some(YearRange::new(1900, 2100)))
        .build();
    let first: Vec<String> = config.variants().take(3).collect();
    assert_eq!(first, vec!["password1900", "password1901", "password1902"]);
    // a second stream starts over
    assert_eq!(config.variants().next().as_deref(), Some("password1900"));
}
