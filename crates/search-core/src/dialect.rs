// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Database driver dialects.
//!
//! The driver decides one thing for the compiler: how a case-insensitive
//! match is spelled.
//!
//! | Driver | `icontains` / `istartswith` / `iendswith` | Other matches |
//! |--------|--------------------------------------------|---------------|
//! | `postgres` | `ILIKE` | `LIKE` |
//! | `mysql` | `LIKE` (collation is case-insensitive) | `LIKE` |
//! | anything else | `LIKE` | `LIKE` |

use std::{convert::Infallible, fmt, str::FromStr};

/// Database driver the compiled conditions target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "String", into = "String")
)]
pub enum Driver {
    /// MySQL / MariaDB.
    Mysql,

    /// PostgreSQL.
    ///
    /// - Case-insensitive match: `ILIKE`
    /// - Placeholders: `$1, $2, ...`
    Postgres,

    /// Any other driver; ordinary `LIKE`, `?` placeholders.
    #[default]
    Other
}

impl Driver {
    /// Resolve a driver identifier.
    ///
    /// Unknown identifiers fall back to [`Driver::Other`].
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "mysql" | "mariadb" => Self::Mysql,
            "postgres" | "postgresql" | "pg" => Self::Postgres,
            _ => Self::Other
        }
    }

    /// Driver identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Mysql => "mysql",
            Self::Postgres => "postgres",
            Self::Other => "other"
        }
    }

    /// Match operator for a pattern predicate.
    #[must_use]
    pub const fn match_operator(&self, case_insensitive: bool) -> &'static str {
        match (self, case_insensitive) {
            (Self::Postgres, true) => "ILIKE",
            _ => "LIKE"
        }
    }

    /// Placeholder for the parameter at given index (1-based).
    #[must_use]
    pub fn placeholder(&self, index: usize) -> String {
        match self {
            Self::Postgres => format!("${index}"),
            Self::Mysql | Self::Other => "?".to_string()
        }
    }
}

impl FromStr for Driver {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_name(s))
    }
}

impl From<String> for Driver {
    fn from(value: String) -> Self {
        Self::from_name(&value)
    }
}

impl From<Driver> for String {
    fn from(value: Driver) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for Driver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
