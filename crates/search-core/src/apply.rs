// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Replay phase: condition tree onto a query handle.
//!
//! The query-execution side exposes a mutable builder through
//! [`QueryHandle`]. A [`Transform`] replays a compiled tree onto it:
//!
//! 1. every join scope in declaration order: join clause, its predicates,
//!    its orderings
//! 2. root predicates and orderings
//! 3. offset / limit, unless [`Paging::Cleared`]
//!
//! The same transform serves the list query and the total count:
//!
//! ```rust,ignore
//! let transform = compile(&filter, &options)?.into_transform();
//!
//! let mut list = Select::from("users");
//! transform.apply_paged(&mut list);
//!
//! let mut count = Select::from("users");
//! transform.apply_count(&mut count);
//! ```

use crate::{
    condition::{ConditionTree, Scope},
    pagination::Window,
    value::Value
};

/// Mutable query builder of the execution layer.
pub trait QueryHandle {
    /// Add a join clause.
    fn add_join(&mut self, clause: &str);

    /// Add an `AND` predicate.
    fn add_and(&mut self, expr: &str, args: &[Value]);

    /// Add an `OR` predicate.
    fn add_or(&mut self, expr: &str, args: &[Value]);

    /// Add an ordering clause.
    fn add_order(&mut self, clause: &str);

    /// Set rows to skip.
    fn set_offset(&mut self, offset: u64);

    /// Set rows to return, `None` removes the limit.
    fn set_limit(&mut self, limit: Option<u64>);
}

/// Whether a replay includes pagination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Paging {
    /// Apply offset / limit.
    #[default]
    Apply,
    /// Leave offset / limit out, for counting.
    Cleared
}

/// Reusable replay of one compiled tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    tree: ConditionTree
}

impl Transform {
    /// Wrap a tree.
    #[must_use]
    pub const fn new(tree: ConditionTree) -> Self {
        Self {
            tree
        }
    }

    /// Underlying tree.
    #[must_use]
    pub fn tree(&self) -> &ConditionTree {
        &self.tree
    }

    /// Resolved pagination window, if the record carried one.
    #[must_use]
    pub fn window(&self) -> Option<Window> {
        self.tree.page.window()
    }

    /// Replay onto a handle.
    pub fn apply<H: QueryHandle + ?Sized>(&self, handle: &mut H, paging: Paging) {
        for join in &self.tree.joins {
            handle.add_join(&join.clause);
            replay(&join.scope, handle);
        }
        replay(&self.tree.root, handle);

        if paging == Paging::Cleared {
            return;
        }
        if let Some(window) = self.window() {
            handle.set_offset(window.offset());
            handle.set_limit(window.limit());
        }
    }

    /// Replay with pagination, for a page of results.
    pub fn apply_paged<H: QueryHandle + ?Sized>(&self, handle: &mut H) {
        self.apply(handle, Paging::Apply);
    }

    /// Replay without pagination, for a total count.
    pub fn apply_count<H: QueryHandle + ?Sized>(&self, handle: &mut H) {
        self.apply(handle, Paging::Cleared);
    }
}

impl From<ConditionTree> for Transform {
    fn from(tree: ConditionTree) -> Self {
        Self::new(tree)
    }
}

fn replay<H: QueryHandle + ?Sized>(scope: &Scope, handle: &mut H) {
    for predicate in &scope.and {
        handle.add_and(&predicate.expr, &predicate.args);
    }
    for predicate in &scope.or {
        handle.add_or(&predicate.expr, &predicate.args);
    }
    for clause in &scope.order {
        handle.add_order(clause);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::condition::{Condition, JoinKind};

    #[derive(Default)]
    struct Recorder {
        calls: Vec<String>
    }

    impl QueryHandle for Recorder {
        fn add_join(&mut self, clause: &str) {
            self.calls.push(format!("join {clause}"));
        }

        fn add_and(&mut self, expr: &str, args: &[Value]) {
            self.calls.push(format!("and {expr} {}", args.len()));
        }

        fn add_or(&mut self, expr: &str, args: &[Value]) {
            self.calls.push(format!("or {expr} {}", args.len()));
        }

        fn add_order(&mut self, clause: &str) {
            self.calls.push(format!("order {clause}"));
        }

        fn set_offset(&mut self, offset: u64) {
            self.calls.push(format!("offset {offset}"));
        }

        fn set_limit(&mut self, limit: Option<u64>) {
            self.calls.push(format!("limit {limit:?}"));
        }
    }

    fn tree() -> ConditionTree {
        let mut tree = ConditionTree::default();
        tree.add_and("u.name = ?".into(), vec![Value::from("bo")]);
        tree.add_order("u.id DESC".into());
        if let Some(join) = tree.open_join(JoinKind::Left, "LEFT JOIN o ON o.uid = u.id".into()) {
            join.add_and("o.total > ?".into(), vec![Value::Int(5)]);
            join.add_or("o.total IS NULL".into(), Vec::new());
        }
        tree.set_page("2");
        tree.set_page_size("10");
        tree
    }

    #[test]
    fn replays_joins_first_then_root_then_paging() {
        let mut handle = Recorder::default();
        Transform::new(tree()).apply_paged(&mut handle);
        assert_eq!(handle.calls, [
            "join LEFT JOIN o ON o.uid = u.id",
            "and o.total > ? 1",
            "or o.total IS NULL 0",
            "and u.name = ? 1",
            "order u.id DESC",
            "offset 10",
            "limit Some(10)"
        ]);
    }

    #[test]
    fn count_replay_has_no_paging() {
        let mut handle = Recorder::default();
        Transform::new(tree()).apply_count(&mut handle);
        assert!(!handle.calls.iter().any(|c| c.starts_with("offset") || c.starts_with("limit")));
        assert_eq!(handle.calls.len(), 5);
    }

    #[test]
    fn unbounded_window_clears_limit() {
        let mut tree = ConditionTree::default();
        tree.set_page("4");
        tree.set_page_size("-1");
        let mut handle = Recorder::default();
        Transform::from(tree).apply_paged(&mut handle);
        assert_eq!(handle.calls, ["offset 0", "limit None"]);
    }

    #[test]
    fn page_without_size_is_not_applied() {
        let mut tree = ConditionTree::default();
        tree.set_page("4");
        let mut handle = Recorder::default();
        Transform::from(tree).apply_paged(&mut handle);
        assert!(handle.calls.is_empty());
    }

    #[test]
    fn transform_is_reusable() {
        let transform = Transform::new(tree());
        let mut first = Recorder::default();
        let mut second = Recorder::default();
        transform.apply_paged(&mut first);
        transform.apply_paged(&mut second);
        assert_eq!(first.calls, second.calls);
    }
}
