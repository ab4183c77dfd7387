//! Listing tests for rex
//!
//! These tests build real directory trees in temporary directories and check the rows the
//! inspector produces for them. Temporary resources are cleaned up after the tests complete.

use rex_explorer::config::Config;
use rex_explorer::core::{
    DisplayEntry, Formatter, InspectError, Inspector, NAME_BUDGET, PARENT_SENTINEL, TYPE_BUDGET,
};
use std::error;
use std::fs::{self, File};
use std::io::Write;
use tempfile::tempdir;

#[test]
fn test_parent_row_ignores_current_dir() -> Result<(), Box<dyn error::Error>> {
    let record = Inspector::default().inspect("left-pane", PARENT_SENTINEL)?;
    assert_eq!(record.entry(), &DisplayEntry::Parent);
    assert_eq!(*record.context(), "left-pane");
    assert_eq!(
        (
            record.display_name(),
            record.display_type(),
            &*record.display_size(),
            record.display_date()
        ),
        ("<-", "PARENT", "", "")
    );
    Ok(())
}

#[test]
fn test_long_names_and_types_are_budgeted() -> Result<(), Box<dyn error::Error>> {
    let dir = tempdir()?;
    let long_name = format!("{}.tar.gz", "x".repeat(23)); // 30 characters
    let archive = dir.path().join(&long_name);
    File::create(&archive)?;

    let record = Inspector::default().inspect((), &archive)?;
    assert_eq!(record.display_name().chars().count(), NAME_BUDGET);
    assert!(record.display_name().ends_with("..."));
    assert_eq!(record.display_type(), "GZ");
    assert_eq!(record.display_size(), "0 B");

    let odd = dir.path().join("data.spreadsheet");
    File::create(&odd)?;
    let record = Inspector::default().inspect((), &odd)?;
    // Six characters plus the two character marker
    assert!(record.display_type().chars().count() > TYPE_BUDGET);
    assert_eq!(record.display_type(), "SPREAD..");
    Ok(())
}

#[test]
fn test_dotfiles_and_extensionless_use_their_name() -> Result<(), Box<dyn error::Error>> {
    let dir = tempdir()?;
    File::create(dir.path().join(".env"))?;
    File::create(dir.path().join("Makefile"))?;

    let inspector = Inspector::default();
    assert_eq!(
        inspector.inspect((), dir.path().join(".env"))?.display_type(),
        ".env"
    );
    assert_eq!(
        inspector.inspect((), dir.path().join("Makefile"))?.display_type(),
        "Makefi.."
    );
    Ok(())
}

#[test]
fn test_listing_order_and_columns() -> Result<(), Box<dyn error::Error>> {
    let dir = tempdir()?;
    fs::create_dir(dir.path().join("zeta"))?;
    fs::create_dir(dir.path().join("Alpha"))?;
    let mut f = File::create(dir.path().join("b.txt"))?;
    f.write_all(&vec![b'x'; 3000])?;
    File::create(dir.path().join("a.rs"))?;
    File::create(dir.path().join(".hidden"))?;

    let listing = Inspector::default().list_directory(9u64, dir.path(), &Formatter::default())?;
    assert!(listing.failures().is_empty());

    let names: Vec<_> = listing.records().iter().map(|r| r.display_name()).collect();
    assert_eq!(names, vec!["<-", "Alpha", "zeta", ".hidden", "a.rs", "b.txt"]);

    let b = &listing.records()[5];
    assert_eq!(b.display_type(), "TXT");
    assert_eq!(b.display_size(), "2 KB");
    assert!(listing.records().iter().all(|r| *r.context() == 9));
    assert!(listing.records().iter().all(|r| r.sort_weight() == 0));

    let zeta = &listing.records()[2];
    assert_eq!((zeta.display_type(), &*zeta.display_size()), ("DIR", "-"));
    Ok(())
}

#[test]
fn test_listing_respects_general_settings() -> Result<(), Box<dyn error::Error>> {
    let dir = tempdir()?;
    File::create(dir.path().join(".hidden"))?;
    File::create(dir.path().join("B.md"))?;
    File::create(dir.path().join("a.md"))?;

    let config = Config::parse(
        r#"
        [general]
        show_hidden = false
        show_parent = false
        case_insensitive = false
        "#,
    )?;
    let listing = config
        .inspector()
        .list_directory((), dir.path(), &config.formatter())?;

    let names: Vec<_> = listing.records().iter().map(|r| r.display_name()).collect();
    assert_eq!(names, vec!["B.md", "a.md"]);
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_dangling_entries_are_reported_not_dropped() -> Result<(), Box<dyn error::Error>> {
    let dir = tempdir()?;
    File::create(dir.path().join("ok.txt"))?;
    std::os::unix::fs::symlink(dir.path().join("missing"), dir.path().join("dangling"))?;

    let listing = Inspector::default().list_directory((), dir.path(), &Formatter::default())?;
    assert_eq!(listing.records().len(), 2);
    assert_eq!(listing.failures().len(), 1);
    assert!(matches!(
        &listing.failures()[0],
        InspectError::NotFound { path } if path.ends_with("dangling")
    ));
    Ok(())
}

#[test]
fn test_unreadable_directory_is_an_error() {
    let result = Inspector::default().list_directory(
        (),
        std::path::Path::new("/path/does/not/exist"),
        &Formatter::default(),
    );
    assert!(matches!(result, Err(InspectError::NotFound { .. })));
}
