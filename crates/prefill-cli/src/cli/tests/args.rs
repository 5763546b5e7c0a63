//! Tests for positional config path and flags.

use super::parse;
use crate::cli::Cli;
use chrono::NaiveDate;
use clap::Parser;
use std::path::Path;

#[test]
fn cli_parse_defaults() {
    let cli = parse(&["prefill"]);
    assert_eq!(cli.config, Path::new("prefill.toml"));
    assert!(cli.date.is_none());
    assert!(!cli.init);
}

#[test]
fn cli_parse_config_path() {
    let cli = parse(&["prefill", "forms/weekly.toml"]);
    assert_eq!(cli.config, Path::new("forms/weekly.toml"));
}

#[test]
fn cli_parse_date() {
    let cli = parse(&["prefill", "--date", "2024-01-15"]);
    assert_eq!(cli.date, NaiveDate::from_ymd_opt(2024, 1, 15));
}

#[test]
fn cli_parse_bad_date_rejected() {
    assert!(Cli::try_parse_from(["prefill", "--date", "15/01/2024"]).is_err());
}

#[test]
fn cli_parse_init() {
    let cli = parse(&["prefill", "--init", "new.toml"]);
    assert!(cli.init);
    assert_eq!(cli.config, Path::new("new.toml"));
}

#[test]
fn cli_parse_init_conflicts_with_date() {
    assert!(Cli::try_parse_from(["prefill", "--init", "--date", "2024-01-15"]).is_err());
}

#[test]
fn cli_init_then_run() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("form.toml");
    let path_str = path.to_str().unwrap();

    parse(&["prefill", "--init", path_str]).run().unwrap();
    assert!(path.exists());
    // Second --init must not clobber the file.
    assert!(parse(&["prefill", "--init", path_str]).run().is_err());

    parse(&["prefill", path_str, "--date", "2024-01-15"])
        .run()
        .unwrap();
}
