// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Compile diagnostics.
//!
//! Misconfigured annotations never abort a lenient compile; they are
//! collected as [`Issue`]s. A strict compile turns them into
//! [`CompileError::Annotations`].

use std::fmt;

use crate::tag::TagIssue;

/// What is wrong with an annotation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IssueKind {
    /// Lenient grammar parse.
    #[error(transparent)]
    Tag(#[from] TagIssue),

    /// Join annotation without `join` table or a complete `on` pair.
    #[error("join needs `join:<table>` and `on:<joined column>:<source column>`")]
    IncompleteJoin,

    /// Join whose source column has no table, from `table:` or the record.
    #[error("join source column needs a table, set `table:<source>` or `#[search(table)]`")]
    UnqualifiedJoinSource,

    /// Join declared inside a record that is itself joined.
    #[error("joins cannot be nested inside a joined record")]
    NestedJoin,

    /// `type:left` on a scalar field.
    #[error("`type:left` requires a nested search record")]
    ScalarJoin,

    /// Nested record whose annotation is not `type:left`.
    #[error("nested search record needs `type:left`, found `{0}`")]
    NotAJoin(String)
}

/// An annotation problem located at a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    /// Dotted field path, e.g. `orders.total`.
    pub field: String,
    /// Problem.
    pub kind:  IssueKind
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "field `{}`: {}", self.field, self.kind)
    }
}

/// Error returned by a strict compile.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompileError {
    /// Annotations a lenient compile would have ignored.
    #[error("rejected search annotations: {}", join_issues(.0))]
    Annotations(Vec<Issue>)
}

impl CompileError {
    /// Issues behind the error.
    #[must_use]
    pub fn issues(&self) -> &[Issue] {
        match self {
            Self::Annotations(issues) => issues
        }
    }
}

fn join_issues(issues: &[Issue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
