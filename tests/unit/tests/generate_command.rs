use anyhow::Result;
use std::fs;
use tempfile::tempdir;
use wordgen::commands::{generate, Generate, Outcome};
use wordgen_core::SubstitutionTable;

#[test]
fn count_only_prints_corrected_total() -> Result<()> {
    let mut stdout = Vec::new();
    let cmd = Generate {
        text: "Go".to_owned(),
        append_digits: true,
        years: Some("2000-2009".to_owned()),
        year2: true,
        count_only: true,
        ..Default::default()
    };
    let outcome = generate::run(cmd, &mut stdout)?;

    // 12 bases, each with 20 year suffixes then 11110 digit suffixes
    let expected = 12 * (20 + 11_110);
    assert_eq!(outcome, Outcome::Counted(expected));
    assert_eq!(String::from_utf8(stdout)?, format!("{}\n", expected));
    Ok(())
}

#[test]
fn count_only_respects_limit() -> Result<()> {
    let mut stdout = Vec::new();
    let cmd = Generate {
        text: "cat".to_owned(),
        limit: 10,
        count_only: true,
        ..Default::default()
    };
    generate::run(cmd, &mut stdout)?;
    assert_eq!(String::from_utf8(stdout)?, "10\n");
    Ok(())
}

#[test]
fn output_file_with_summary() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("words.txt");
    let mut stdout = Vec::new();
    let cmd = Generate {
        text: "hi".to_owned(),
        table: SubstitutionTable::empty(),
        years: Some("1999-2000".to_owned()),
        out: Some(path.clone()),
        ..Default::default()
    };
    let outcome = generate::run(cmd, &mut stdout)?;

    let Outcome::Written { summary, .. } = outcome else {
        panic!("expected written outcome");
    };
    assert_eq!(summary.emitted, 8);

    let contents = fs::read_to_string(&path)?;
    assert_eq!(
        contents,
        "hi1999\nhi2000\nhI1999\nhI2000\nHi1999\nHi2000\nHI1999\nHI2000\n"
    );
    assert_eq!(
        String::from_utf8(stdout)?,
        format!("Wrote 8 variants to {}\n", path.display())
    );
    Ok(())
}

#[test]
fn limit_on_file_output() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("limited.txt");
    let cmd = Generate {
        text: "secret".to_owned(),
        append_digits: true,
        limit: 5,
        out: Some(path.clone()),
        ..Default::default()
    };
    generate::run(cmd, Vec::new())?;
    let contents = fs::read_to_string(&path)?;
    assert_eq!(
        contents,
        "secret0\nsecret1\nsecret2\nsecret3\nsecret4\n"
    );
    Ok(())
}

#[test]
fn output_file_in_use_is_refused() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("busy.txt");
    let held = wordgen_core::sink::SinkWriter::create(&path, None)?;

    let cmd = Generate {
        text: "busy".to_owned(),
        out: Some(path.clone()),
        ..Default::default()
    };
    let mut stdout = Vec::new();
    let result = generate::run(cmd, &mut stdout);
    assert!(result.is_err());
    assert!(stdout.is_empty());

    drop(held);
    Ok(())
}
