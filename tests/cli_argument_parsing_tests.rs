//! Tests for CLI argument parsing functionality
//!
//! These tests verify that command line arguments are parsed and merged over
//! the config file and defaults.

use std::io::Write;

use clap::Parser;
use event_pass_generator::types::config::{CliArgs, HolderSpec, PassConfig};
use event_pass_generator::types::{OutputFormat, Role};

/// No arguments yields the form defaults
#[test]
fn test_defaults() {
    let args = CliArgs::try_parse_from(["event-pass"]).unwrap();
    assert!(args.issue.is_empty());
    assert!(!args.interactive);

    let config = PassConfig::from_cli_args(args).unwrap();
    assert_eq!(config.get_role().unwrap(), Role::Professor);
    assert_eq!(config.event_name, "Software Engineering Expo");
    assert_eq!(config.get_output_format().unwrap(), OutputFormat::Text);
    assert!(config.validate().is_ok());
}

/// Event fields and repeated holders
#[test]
fn test_event_and_holders() {
    let args = CliArgs::try_parse_from([
        "event-pass",
        "--role",
        "monitor",
        "--event",
        "Expo",
        "--venue",
        "Lab 3",
        "--issue",
        "Ana Lee <ana@x.edu>",
        "--issue",
        "Bo Kim,bo@x.edu",
        "--seed",
        "42",
        "--output-format",
        "json",
    ])
    .unwrap();

    let config = PassConfig::from_cli_args(args).unwrap();
    assert_eq!(config.get_role().unwrap(), Role::Monitor);
    assert_eq!(config.event_name, "Expo");
    assert_eq!(config.venue, "Lab 3");
    assert_eq!(config.seed, Some(42));
    assert_eq!(config.get_output_format().unwrap(), OutputFormat::Json);
    assert_eq!(
        config.holders,
        vec![HolderSpec::new("Ana Lee", "ana@x.edu"), HolderSpec::new("Bo Kim", "bo@x.edu")]
    );
}

/// Malformed holders fail at load time
#[test]
fn test_invalid_holder() {
    let args = CliArgs::try_parse_from(["event-pass", "--issue", "just a name"]).unwrap();
    assert!(PassConfig::from_cli_args(args).is_err());
}

/// Semantic problems surface from validate
#[test]
fn test_validation_failures() {
    let args = CliArgs::try_parse_from(["event-pass", "--role", "janitor"]).unwrap();
    let config = PassConfig::from_cli_args(args).unwrap();
    assert!(config.validate().is_err());

    let args = CliArgs::try_parse_from(["event-pass", "--date", "  "]).unwrap();
    let config = PassConfig::from_cli_args(args).unwrap();
    assert!(config.validate().is_err());

    let args = CliArgs::try_parse_from(["event-pass", "--output-format", "xml"]).unwrap();
    let config = PassConfig::from_cli_args(args).unwrap();
    assert!(config.validate().is_err());
}

/// Flags parse with short and long forms
#[test]
fn test_flags() {
    let args = CliArgs::try_parse_from(["event-pass", "-i", "-v", "--dry-run"]).unwrap();
    assert!(args.interactive);
    assert!(args.verbose);
    assert!(!args.debug);
    assert!(args.dry_run);
    assert!(!args.print_config);

    assert!(CliArgs::try_parse_from(["event-pass", "--seed", "abc"]).is_err());
}

/// CLI values win over the config file
#[test]
fn test_config_file_with_overrides() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(
        file,
        r#"{{"role": "student", "event_name": "From File", "venue": "Annex",
            "holders": [{{"name": "Ana Lee", "email": "ana@x.edu"}}]}}"#
    )
    .unwrap();

    let path = file.path().to_string_lossy().to_string();
    let args =
        CliArgs::try_parse_from(["event-pass", "--config", path.as_str(), "--venue", "Hall B"])
            .unwrap();
    let config = PassConfig::from_cli_args(args).unwrap();

    assert_eq!(config.get_role().unwrap(), Role::Student);
    assert_eq!(config.event_name, "From File");
    assert_eq!(config.venue, "Hall B");
    assert_eq!(config.event_date, "2026-02-20");
    assert_eq!(config.holders.len(), 1);
}
