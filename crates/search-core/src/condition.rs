// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Condition accumulation.
//!
//! A walk over a filter record writes into a [`Condition`]. The root of a
//! [`ConditionTree`] accepts everything; each [`JoinScope`] collects only the
//! predicates of its joined record.
//!
//! # Structure
//!
//! ```text
//! ConditionTree
//! ├── root: Scope            root-table predicates and ordering
//! ├── joins: Vec<JoinScope>  declaration order of the join fields
//! │   └── JoinScope
//! │       ├── kind + clause  LEFT JOIN orders ON orders.user_id = users.id
//! │       └── scope: Scope   predicates on the joined table
//! └── page: PageState        write-once page / page size
//! ```

use crate::{pagination::PageState, value::Value};

/// Expression template with its bound arguments.
///
/// Each `?` in `expr` consumes one argument.
#[derive(Debug, Clone, PartialEq)]
pub struct Predicate {
    /// Template, e.g. `users.name = ?`.
    pub expr: String,
    /// Arguments in placeholder order.
    pub args: Vec<Value>
}

impl Predicate {
    /// Create a predicate.
    pub fn new(expr: impl Into<String>, args: Vec<Value>) -> Self {
        Self {
            expr: expr.into(),
            args
        }
    }
}

/// Ordered predicate and ordering lists.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Scope {
    /// Conditions joined with `AND`.
    pub and:   Vec<Predicate>,
    /// Conditions joined with `OR`.
    pub or:    Vec<Predicate>,
    /// `ORDER BY` clauses.
    pub order: Vec<String>
}

impl Scope {
    /// Check if nothing was accumulated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.and.is_empty() && self.or.is_empty() && self.order.is_empty()
    }
}

/// Kind of join a join scope introduces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JoinKind {
    /// `LEFT JOIN`.
    #[default]
    Left
}

impl JoinKind {
    /// SQL keyword.
    #[must_use]
    pub const fn as_sql(&self) -> &'static str {
        match self {
            Self::Left => "LEFT JOIN"
        }
    }
}

/// Predicates isolated under one join clause.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct JoinScope {
    /// Join kind.
    pub kind:   JoinKind,
    /// Full join clause, e.g. `LEFT JOIN orders ON orders.user_id = users.id`.
    pub clause: String,
    /// Predicates on the joined table.
    pub scope:  Scope
}

impl JoinScope {
    /// Create an empty join scope.
    pub fn new(kind: JoinKind, clause: impl Into<String>) -> Self {
        Self {
            kind,
            clause: clause.into(),
            scope: Scope::default()
        }
    }
}

/// Root scope, join scopes and pagination of one compiled record.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConditionTree {
    /// Root-table scope.
    pub root:  Scope,
    /// Join scopes in declaration order.
    pub joins: Vec<JoinScope>,
    /// Pagination input.
    pub page:  PageState
}

impl ConditionTree {
    /// Check if the tree would change no query.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.root.is_empty() && self.joins.is_empty() && self.page.window().is_none()
    }
}

/// Accumulation capability shared by the root and join scopes.
pub trait Condition {
    /// Append an `AND` predicate.
    fn add_and(&mut self, expr: String, args: Vec<Value>);

    /// Append an `OR` predicate.
    fn add_or(&mut self, expr: String, args: Vec<Value>);

    /// Append an ordering clause.
    fn add_order(&mut self, clause: String);

    /// Open a join scope.
    ///
    /// Only the root can; join scopes return `None`.
    fn open_join(&mut self, kind: JoinKind, clause: String) -> Option<&mut dyn Condition>;

    /// Set the page unless already set.
    fn set_page(&mut self, value: &str);

    /// Set the page size unless already set.
    fn set_page_size(&mut self, value: &str);
}

impl Condition for ConditionTree {
    fn add_and(&mut self, expr: String, args: Vec<Value>) {
        self.root.and.push(Predicate::new(expr, args));
    }

    fn add_or(&mut self, expr: String, args: Vec<Value>) {
        self.root.or.push(Predicate::new(expr, args));
    }

    fn add_order(&mut self, clause: String) {
        self.root.order.push(clause);
    }

    fn open_join(&mut self, kind: JoinKind, clause: String) -> Option<&mut dyn Condition> {
        self.joins.push(JoinScope::new(kind, clause));
        self.joins.last_mut().map(|join| join as &mut dyn Condition)
    }

    fn set_page(&mut self, value: &str) {
        self.page.set_page(value);
    }

    fn set_page_size(&mut self, value: &str) {
        self.page.set_page_size(value);
    }
}

impl Condition for JoinScope {
    fn add_and(&mut self, expr: String, args: Vec<Value>) {
        self.scope.and.push(Predicate::new(expr, args));
    }

    fn add_or(&mut self, expr: String, args: Vec<Value>) {
        self.scope.or.push(Predicate::new(expr, args));
    }

    fn add_order(&mut self, clause: String) {
        self.scope.order.push(clause);
    }

    fn open_join(&mut self, _kind: JoinKind, _clause: String) -> Option<&mut dyn Condition> {
        None
    }

    fn set_page(&mut self, _value: &str) {}

    fn set_page_size(&mut self, _value: &str) {}
}
