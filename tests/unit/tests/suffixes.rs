use anyhow::Result;
use wordgen_core::{
    suffix::{DigitSuffixes, YearRange, DIGIT_SUFFIX_TOTAL},
    Error,
};
use wordgen_unit_tests::assert_distinct;

#[test]
fn digit_suffixes_cover_lengths_one_to_four() {
    let suffixes: Vec<String> = DigitSuffixes::new().collect();
    assert_eq!(suffixes.len(), 11_110);
    assert_eq!(suffixes.len() as u128, DIGIT_SUFFIX_TOTAL);
    assert_eq!(suffixes[0], "0");
    assert_distinct(&suffixes);

    let two_digit: Vec<&String> =
        suffixes.iter().filter(|s| s.len() == 2).collect();
    assert_eq!(two_digit.len(), 100);
    assert_eq!(two_digit.first().map(|s| s.as_str()), Some("00"));
    assert_eq!(two_digit.last().map(|s| s.as_str()), Some("99"));
    for pair in two_digit.windows(2) {
        assert!(pair[0] < pair[1]);
    }

    // lengths never decrease
    for pair in suffixes.windows(2) {
        assert!(pair[0].len() <= pair[1].len());
    }
}

#[test]
fn reversed_year_range_is_normalized() -> Result<()> {
    let reversed: YearRange = "2020-2019".parse()?;
    let ascending: YearRange = "2019-2020".parse()?;
    assert_eq!(reversed, ascending);
    assert_eq!(
        reversed.suffixes(true).collect::<Vec<_>>(),
        ascending.suffixes(true).collect::<Vec<_>>(),
    );
    Ok(())
}

#[test]
fn year_suffixes_with_two_digit_forms() -> Result<()> {
    let range: YearRange = "2020-2021".parse()?;
    let suffixes: Vec<String> = range.suffixes(true).collect();
    assert_eq!(suffixes, vec!["2020", "20", "2021", "21"]);
    assert_eq!(range.suffix_total(true), 4);
    assert_eq!(range.suffix_total(false), 2);
    assert_eq!(range.suffixes(false).collect::<Vec<_>>(), vec!["2020", "2021"]);
    Ok(())
}

#[test]
fn year_range_accepts_whitespace() -> Result<()> {
    let range: YearRange = "1999 -\t2001".parse()?;
    assert_eq!(range.len(), 3);
    Ok(())
}

#[test]
fn malformed_year_range() {
    for input in ["", "2020", "twenty-21", "2020-2021-2022", "2020:2021"] {
        let err = input.parse::<YearRange>().unwrap_err();
        assert!(matches!(err, Error::YearRange(_)));
        assert!(err.to_string().contains("START-END"));
    }
}
