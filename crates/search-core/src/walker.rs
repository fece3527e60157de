// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Filter record traversal.
//!
//! A filter record implements [`Search`] by visiting its annotated fields
//! with a [`Walker`], normally through `#[derive(Search)]`. The walker parses
//! each annotation, skips unset values and dispatches on the [`Operator`] to
//! write predicates into the current [`Condition`].
//!
//! # Field Kinds
//!
//! | Walker call | Field | Effect |
//! |-------------|-------|--------|
//! | [`Walker::field`] | scalar with annotation | predicate, ordering or pagination |
//! | [`Walker::join`] | record with `type:left` | new join scope, record walked into it |
//! | [`Walker::flatten`] | embedded record | record walked into the same scope |
//!
//! # Manual Implementation
//!
//! ```rust
//! use search_core::{FieldMeta, Search, SearchValue, Walker};
//!
//! struct UserSearch {
//!     name: String,
//!     age:  Option<u32>
//! }
//!
//! impl Search for UserSearch {
//!     fn walk(&self, walker: &mut Walker<'_>) {
//!         walker.field(&FieldMeta::new("name", "type:like;table:users"), &self.name);
//!         walker.field(&FieldMeta::new("age", "type:gte;table:users"), &self.age);
//!     }
//!
//!     fn is_zero(&self) -> bool {
//!         self.name.is_zero() && self.age.is_zero()
//!     }
//! }
//! ```

use crate::{
    condition::{Condition, JoinKind, JoinScope},
    error::{Issue, IssueKind},
    options::CompileOptions,
    tag::{FieldDescriptor, FieldTag, Operator},
    value::{SearchValue, Value}
};

/// A filter record.
pub trait Search {
    /// Visit every searchable field.
    fn walk(&self, walker: &mut Walker<'_>);

    /// Check if every searchable field is unset.
    ///
    /// A zero record behind a join produces no join at all.
    fn is_zero(&self) -> bool;
}

impl<S: Search + ?Sized> Search for &S {
    fn walk(&self, walker: &mut Walker<'_>) {
        (**self).walk(walker);
    }

    fn is_zero(&self) -> bool {
        (**self).is_zero()
    }
}

impl<S: Search + ?Sized> Search for Box<S> {
    fn walk(&self, walker: &mut Walker<'_>) {
        (**self).walk(walker);
    }

    fn is_zero(&self) -> bool {
        (**self).is_zero()
    }
}

impl<S: Search> Search for Option<S> {
    fn walk(&self, walker: &mut Walker<'_>) {
        if let Some(record) = self {
            record.walk(walker);
        }
    }

    fn is_zero(&self) -> bool {
        self.as_ref().is_none_or(Search::is_zero)
    }
}

/// Static metadata of a visited field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldMeta {
    /// Field name, used in diagnostics.
    pub name:   &'static str,
    /// Column used when the annotation names none.
    pub column: &'static str,
    /// Table used when the annotation names none.
    pub table:  &'static str,
    /// `search` annotation.
    pub tag:    &'static str
}

impl FieldMeta {
    /// Metadata whose default column is the field name.
    #[must_use]
    pub const fn new(name: &'static str, tag: &'static str) -> Self {
        Self {
            name,
            column: name,
            table: "",
            tag
        }
    }

    /// Set the default column.
    #[must_use]
    pub const fn column(mut self, column: &'static str) -> Self {
        self.column = column;
        self
    }

    /// Set the default table.
    #[must_use]
    pub const fn table(mut self, table: &'static str) -> Self {
        self.table = table;
        self
    }
}

/// Visitor that turns record fields into conditions.
pub struct Walker<'a> {
    target:  &'a mut dyn Condition,
    options: &'a CompileOptions,
    issues:  &'a mut Vec<Issue>,
    prefix:  String,
    in_join: bool
}

impl<'a> Walker<'a> {
    /// Create a walker writing into `target`.
    pub fn new(
        target: &'a mut dyn Condition,
        options: &'a CompileOptions,
        issues: &'a mut Vec<Issue>
    ) -> Self {
        Self {
            target,
            options,
            issues,
            prefix: String::new(),
            in_join: false
        }
    }

    /// Options of the running compile.
    #[must_use]
    pub fn options(&self) -> &CompileOptions {
        self.options
    }

    /// Current target, for hand-written conditions such as `OR` groups.
    pub fn condition(&mut self) -> &mut dyn Condition {
        &mut *self.target
    }

    /// Visit a scalar field.
    ///
    /// `type:isnull` is meant for `bool` / `Option<bool>` fields: `true`
    /// renders `IS NULL`, `Some(false)` renders `IS NOT NULL`. Any other
    /// non-zero value counts as `true`.
    pub fn field<V: SearchValue + ?Sized>(&mut self, meta: &FieldMeta, value: &V) {
        let Some(descriptor) = self.descriptor(meta) else {
            return;
        };
        let Some(operator) = descriptor.operator else {
            return;
        };
        if operator.is_join() {
            self.issue(meta, IssueKind::ScalarJoin);
            return;
        }
        if value.is_zero() {
            return;
        }

        let column = qualify(
            non_empty(&descriptor.table, meta.table),
            non_empty(&descriptor.column, meta.column)
        );
        self.emit(operator, &column, value.to_value());
    }

    /// Visit a `type:left` record field.
    pub fn join<S: Search + ?Sized>(&mut self, meta: &FieldMeta, record: &S) {
        let Some(descriptor) = self.descriptor(meta) else {
            return;
        };
        if descriptor.operator != Some(Operator::Left) {
            if descriptor.operator.is_some() {
                self.issue(meta, IssueKind::NotAJoin(descriptor.kind.clone()));
            }
            return;
        }
        if descriptor.join.is_empty() || descriptor.on.len() < 2 {
            self.issue(meta, IssueKind::IncompleteJoin);
            return;
        }
        let source_table = non_empty(&descriptor.table, meta.table);
        if source_table.is_empty() {
            self.issue(meta, IssueKind::UnqualifiedJoinSource);
            return;
        }
        if self.in_join {
            self.issue(meta, IssueKind::NestedJoin);
            return;
        }

        let prefix = format!("{}{}.", self.prefix, meta.name);
        if record.is_zero() {
            // still walked so annotation issues do not depend on values
            let mut scratch = JoinScope::default();
            record.walk(&mut self.nested(&mut scratch, prefix));
            return;
        }

        let source = qualify(source_table, &descriptor.on[1]);
        let clause = format!(
            "{} {join} ON {join}.{} = {source}",
            JoinKind::Left.as_sql(),
            descriptor.on[0],
            join = descriptor.join
        );
        tracing::trace!(field = meta.name, clause = %clause, "join scope opened");

        let Some(scope) = self.target.open_join(JoinKind::Left, clause) else {
            self.issue(meta, IssueKind::NestedJoin);
            return;
        };
        let mut walker = Walker {
            target:  scope,
            options: self.options,
            issues:  &mut *self.issues,
            prefix,
            in_join: true
        };
        record.walk(&mut walker);
    }

    /// Visit an embedded record whose fields belong to the current scope.
    pub fn flatten<S: Search + ?Sized>(&mut self, record: &S) {
        record.walk(self);
    }

    fn nested<'b>(&'b mut self, target: &'b mut dyn Condition, prefix: String) -> Walker<'b> {
        Walker {
            target,
            options: self.options,
            issues: &mut *self.issues,
            prefix,
            in_join: true
        }
    }

    fn descriptor(&mut self, meta: &FieldMeta) -> Option<FieldDescriptor> {
        let parsed = FieldTag::parse(meta.tag);
        for issue in parsed.issues {
            self.issue(meta, issue.into());
        }
        match parsed.tag {
            FieldTag::Exclude => None,
            FieldTag::Search(descriptor) => Some(descriptor)
        }
    }

    fn issue(&mut self, meta: &FieldMeta, kind: IssueKind) {
        self.issues.push(Issue {
            field: format!("{}{}", self.prefix, meta.name),
            kind
        });
    }

    fn emit(&mut self, operator: Operator, column: &str, value: Value) {
        let driver = self.options.driver;
        match operator {
            Operator::Eq | Operator::Exact | Operator::IExact => {
                self.and(format!("{column} = ?"), vec![value]);
            }
            Operator::Like | Operator::Contains | Operator::IContains => {
                let op = driver.match_operator(operator.is_case_insensitive());
                self.and(format!("{column} {op} ?"), vec![Value::Text(format!("%{value}%"))]);
            }
            Operator::StartsWith | Operator::IStartsWith => {
                let op = driver.match_operator(operator.is_case_insensitive());
                self.and(format!("{column} {op} ?"), vec![Value::Text(format!("{value}%"))]);
            }
            Operator::EndsWith | Operator::IEndsWith => {
                let op = driver.match_operator(operator.is_case_insensitive());
                self.and(format!("{column} {op} ?"), vec![Value::Text(format!("%{value}"))]);
            }
            Operator::Gt => self.and(format!("{column} > ?"), vec![value]),
            Operator::Gte => self.and(format!("{column} >= ?"), vec![value]),
            Operator::Lt => self.and(format!("{column} < ?"), vec![value]),
            Operator::Lte => self.and(format!("{column} <= ?"), vec![value]),
            Operator::In => {
                self.and(format!("{column} IN (?)"), vec![Value::List(value.into_list())]);
            }
            Operator::Between => {
                let mut bounds = value.into_list().into_iter();
                match (bounds.next(), bounds.next()) {
                    (Some(low), Some(high)) => {
                        self.and(format!("{column} BETWEEN ? AND ?"), vec![low, high]);
                    }
                    _ => tracing::debug!(column, "between needs two bounds, skipped")
                }
            }
            Operator::IsNull => {
                let test = if value.is_truthy() {
                    "IS NULL"
                } else {
                    "IS NOT NULL"
                };
                self.and(format!("{column} {test}"), Vec::new());
            }
            Operator::Order => {
                let direction = value.to_string().to_lowercase();
                match direction.as_str() {
                    "asc" | "desc" => {
                        let clause = format!("{column} {}", direction.to_uppercase());
                        tracing::trace!(clause = %clause, "ordering added");
                        self.target.add_order(clause);
                    }
                    _ => tracing::debug!(column, direction = %direction, "ordering ignored")
                }
            }
            Operator::Page => self.target.set_page(&value.to_string()),
            Operator::PageSize => self.target.set_page_size(&value.to_string()),
            Operator::Left => {}
        }
    }

    fn and(&mut self, expr: String, args: Vec<Value>) {
        tracing::trace!(expr = %expr, args = args.len(), "predicate added");
        self.target.add_and(expr, args);
    }
}

fn non_empty<'s>(value: &'s str, fallback: &'s str) -> &'s str {
    if value.is_empty() { fallback } else { value }
}

fn qualify(table: &str, column: &str) -> String {
    if table.is_empty() {
        column.to_string()
    } else {
        format!("{table}.{column}")
    }
}
