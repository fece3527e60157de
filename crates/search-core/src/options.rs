// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Per-call compile configuration.
//!
//! Options are plain values handed to [`compile`](crate::compile) at every
//! call site; there is no process-wide driver setting.
//!
//! With the `serde` feature the options deserialize from application
//! configuration:
//!
//! ```rust,ignore
//! #[derive(serde::Deserialize)]
//! struct DatabaseConfig {
//!     url: String,
//!     #[serde(default)]
//!     search: search_core::CompileOptions,
//! }
//! // [database.search]
//! // driver = "postgres"
//! // mode = "strict"
//! ```

use crate::dialect::Driver;

/// How misconfigured annotations are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Mode {
    /// Ignore them, report them on [`Compiled`](crate::Compiled) and log a warning.
    #[default]
    Lenient,
    /// Fail the compile.
    Strict
}

/// Options of one compile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct CompileOptions {
    /// Target driver.
    pub driver: Driver,
    /// Annotation strictness.
    pub mode:   Mode
}

impl CompileOptions {
    /// Lenient options for a driver.
    #[must_use]
    pub const fn new(driver: Driver) -> Self {
        Self {
            driver,
            mode: Mode::Lenient
        }
    }

    /// Switch to strict mode.
    #[must_use]
    pub const fn strict(mut self) -> Self {
        self.mode = Mode::Strict;
        self
    }

    /// Switch to lenient mode.
    #[must_use]
    pub const fn lenient(mut self) -> Self {
        self.mode = Mode::Lenient;
        self
    }

    /// Check if strict mode is on.
    #[must_use]
    pub const fn is_strict(&self) -> bool {
        matches!(self.mode, Mode::Strict)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_lenient() {
        let options = CompileOptions::default();
        assert_eq!(options.driver, Driver::Other);
        assert!(!options.is_strict());
    }

    #[test]
    fn builder_switches_mode() {
        let options = CompileOptions::new(Driver::Postgres).strict();
        assert!(options.is_strict());
        assert!(!options.lenient().is_strict());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserializes_from_config() {
        let options: CompileOptions =
            serde_json::from_str(r#"{"driver":"postgresql","mode":"strict"}"#).expect("parse");
        assert_eq!(options, CompileOptions::new(Driver::Postgres).strict());

        let options: CompileOptions = serde_json::from_str(r#"{"driver":"mysql"}"#).expect("parse");
        assert_eq!(options.mode, Mode::Lenient);
    }
}
