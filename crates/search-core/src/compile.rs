// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Compile phase: filter record to condition tree.
//!
//! Compiling is pure. It touches no database and holds no state beyond the
//! returned [`Compiled`], so the same record compiled twice yields equal
//! trees.

use crate::{
    apply::Transform,
    condition::ConditionTree,
    error::{CompileError, Issue},
    options::CompileOptions,
    walker::{Search, Walker}
};

/// Outcome of a successful compile.
#[derive(Debug, Clone, PartialEq)]
pub struct Compiled {
    tree:   ConditionTree,
    issues: Vec<Issue>
}

impl Compiled {
    /// Compiled tree.
    #[must_use]
    pub fn tree(&self) -> &ConditionTree {
        &self.tree
    }

    /// Annotations ignored by a lenient compile.
    #[must_use]
    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    /// Check if no annotation was ignored.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    /// Take the tree.
    #[must_use]
    pub fn into_tree(self) -> ConditionTree {
        self.tree
    }

    /// Turn the tree into a reusable query transform.
    #[must_use]
    pub fn into_transform(self) -> Transform {
        Transform::new(self.tree)
    }
}

/// Compile a filter record.
///
/// # Errors
///
/// In [`Mode::Strict`](crate::Mode::Strict), returns
/// [`CompileError::Annotations`] when any annotation had to be ignored.
///
/// # Example
///
/// ```rust
/// use search_core::{CompileOptions, Driver, FieldMeta, Search, SearchValue, Walker, compile};
///
/// struct NameSearch {
///     name: String
/// }
///
/// impl Search for NameSearch {
///     fn walk(&self, walker: &mut Walker<'_>) {
///         walker.field(&FieldMeta::new("name", "type:icontains;table:users"), &self.name);
///     }
///
///     fn is_zero(&self) -> bool {
///         self.name.is_zero()
///     }
/// }
///
/// let record = NameSearch {
///     name: "bo".into()
/// };
/// let compiled = compile(&record, &CompileOptions::new(Driver::Postgres)).unwrap();
/// assert_eq!(compiled.tree().root.and[0].expr, "users.name ILIKE ?");
/// ```
pub fn compile<S: Search + ?Sized>(
    record: &S,
    options: &CompileOptions
) -> Result<Compiled, CompileError> {
    let mut tree = ConditionTree::default();
    let mut issues = Vec::new();
    record.walk(&mut Walker::new(&mut tree, options, &mut issues));

    tracing::debug!(
        driver = %options.driver,
        predicates = tree.root.and.len() + tree.root.or.len(),
        joins = tree.joins.len(),
        issues = issues.len(),
        "search record compiled"
    );

    if issues.is_empty() {
        return Ok(Compiled {
            tree,
            issues
        });
    }
    if options.is_strict() {
        return Err(CompileError::Annotations(issues));
    }
    for issue in &issues {
        tracing::warn!(field = %issue.field, problem = %issue.kind, "search annotation ignored");
    }
    Ok(Compiled {
        tree,
        issues
    })
}
