// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Compile options loaded from application configuration.
//!
//! Run with: `cargo test --features serde -p search-derive --test config`

#![cfg(feature = "serde")]

use search_derive::{CompileOptions, Driver, Mode};

#[derive(serde::Deserialize)]
struct DatabaseConfig {
    #[allow(dead_code)]
    url:    String,
    #[serde(default)]
    search: CompileOptions
}

#[test]
fn options_from_config() {
    let config: DatabaseConfig = serde_json::from_str(
        r#"{"url":"postgres://localhost/app","search":{"driver":"postgres","mode":"strict"}}"#
    )
    .expect("valid config");
    assert_eq!(config.search.driver, Driver::Postgres);
    assert_eq!(config.search.mode, Mode::Strict);
}

#[test]
fn options_default_when_absent() {
    let config: DatabaseConfig =
        serde_json::from_str(r#"{"url":"mysql://localhost/app"}"#).expect("valid config");
    assert_eq!(config.search, CompileOptions::default());
}

#[test]
fn unknown_driver_is_other() {
    let options: CompileOptions =
        serde_json::from_str(r#"{"driver":"sqlite"}"#).expect("valid options");
    assert_eq!(options.driver, Driver::Other);
    assert_eq!(options.driver.to_string(), "other");
}
