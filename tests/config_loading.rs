//! Integration tests for settings files on disk.

#![cfg(test)]

use std::time::Duration;

use hnview::config::{ConfigError, Settings};
use hnview::logic::DomainMatch;
use hnview::sources::FailurePolicy;

#[test]
/// What: A complete settings file drives the retriever options
///
/// - Input: Every key set in a temporary `config.toml`
/// - Output: Parsed settings and matching `FetchOptions`
fn full_file_round_trips_into_fetch_options() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
api_base = "http://127.0.0.1:8080/v0"
page_size = 15
concurrency = 8
request_timeout_secs = 10
failure_policy = "skip_failed"
domain_match = "contains"
"#,
    )
    .expect("write settings");

    let settings = Settings::load_from_path(&path).expect("settings parse");
    assert_eq!(settings.page_size, 15);
    assert_eq!(settings.domain_match, DomainMatch::Contains);
    let opts = settings.fetch_options();
    assert_eq!(opts.api_base, "http://127.0.0.1:8080/v0");
    assert_eq!(opts.concurrency, 8);
    assert_eq!(opts.request_timeout, Some(Duration::from_secs(10)));
    assert_eq!(opts.failure_policy, FailurePolicy::SkipFailed);
}

#[test]
fn missing_file_yields_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let settings =
        Settings::load_from_path(&dir.path().join("absent.toml")).expect("defaults");
    assert_eq!(settings, Settings::default());
}

#[test]
/// What: Zero values are normalized instead of rejected
///
/// - Input: `page_size = 0`, `concurrency = 0`, `request_timeout_secs = 0`
/// - Output: Counts clamped to 1, timeout disabled
fn zero_values_are_normalized() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "page_size = 0\nconcurrency = 0\nrequest_timeout_secs = 0\n")
        .expect("write settings");
    let settings = Settings::load_from_path(&path).expect("settings parse");
    assert_eq!(settings.page_size, 1);
    assert_eq!(settings.concurrency, 1);
    assert_eq!(settings.fetch_options().request_timeout, None);
}

#[test]
/// What: Bad files are reported by `load_from_path` and tolerated by `load`
///
/// - Input: Unknown key in an explicit config path
/// - Output: `ConfigError::Parse`; `Settings::load` falls back to defaults
fn invalid_file_errors_but_load_falls_back() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "colour = \"blue\"\n").expect("write settings");
    let err = Settings::load_from_path(&path).expect_err("unknown key rejected");
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("config.toml"));
    assert_eq!(Settings::load(Some(&path)), Settings::default());
}
