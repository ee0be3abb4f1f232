//! Common test utilities and fixtures
//!
//! This module provides shared test infrastructure

#![allow(dead_code)]

use std::path::PathBuf;

use assert_cmd::Command;

/// Get the path to the test fixtures directory
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Get a path to a specific fixture file
pub fn fixture_path(name: &str) -> PathBuf {
    fixtures_dir().join(name)
}

/// Get the valid config fixture path
pub fn valid_config_fixture() -> PathBuf {
    fixture_path("valid_config.toml")
}

/// Get the invalid config fixture path
pub fn invalid_config_fixture() -> PathBuf {
    fixture_path("invalid_config.toml")
}

/// A command for the binary with config-related env vars cleared
pub fn scripter_cmd() -> Command {
    let mut cmd = Command::cargo_bin("ugc-scripter").unwrap();
    for var in [
        "UGC_CONFIG",
        "UGC_PERSONA",
        "UGC_DEFAULT_PERSONA",
        "UGC_DEFAULT_DURATION_SECS",
        "UGC_MIN_DURATION_SECS",
        "UGC_MAX_DURATION_SECS",
        "UGC_OUTPUT_FORMAT",
        "UGC_PRETTY_JSON",
        "UGC_LOG_LEVEL",
        "UGC_LOG_FILE",
        "UGC_LOG_JSON",
        "RUST_LOG",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixtures_dir_exists() {
        assert!(fixtures_dir().exists(), "Fixtures directory should exist");
    }

    #[test]
    fn test_valid_config_exists() {
        assert!(
            valid_config_fixture().exists(),
            "Valid config fixture should exist"
        );
    }

    #[test]
    fn test_invalid_config_exists() {
        assert!(
            invalid_config_fixture().exists(),
            "Invalid config fixture should exist"
        );
    }
}
