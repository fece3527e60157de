// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Reference `SELECT` statement.
//!
//! [`Select`] implements [`QueryHandle`] and renders the replayed tree as SQL
//! text with driver placeholders, or (with the `postgres` / `mysql`
//! features) as an `sqlx::QueryBuilder` with every argument bound.
//!
//! # Rendering
//!
//! ```sql
//! SELECT * FROM users
//! LEFT JOIN orders ON orders.user_id = users.id
//! WHERE orders.total > $1 AND users.name ILIKE $2
//! ORDER BY users.id DESC
//! LIMIT 10 OFFSET 10
//! ```
//!
//! A `?` whose argument is a list expands to one placeholder per element;
//! an empty list renders `NULL`.

#[cfg(any(feature = "postgres", feature = "mysql"))]
mod bind;

use crate::{apply::QueryHandle, condition::Predicate, dialect::Driver, value::Value};

/// Largest MySQL row count, used when an offset needs a limit.
const MYSQL_NO_LIMIT: u64 = 18_446_744_073_709_551_615;

/// Rendered SQL with its arguments.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Sql {
    /// SQL text.
    pub text: String,
    /// Arguments in placeholder order.
    pub args: Vec<Value>
}

/// A `SELECT` over one table, built through [`QueryHandle`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Select {
    table:   String,
    columns: String,
    joins:      Vec<String>,
    predicates: Vec<(Connective, Predicate)>,
    order:      Vec<String>,
    offset:     Option<u64>,
    limit:      Option<u64>
}

/// Operator joining a predicate to the ones before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Connective {
    And,
    Or
}

impl Connective {
    const fn as_sql(self) -> &'static str {
        match self {
            Self::And => " AND ",
            Self::Or => " OR "
        }
    }
}

impl Select {
    /// Select all columns of a table.
    pub fn from(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            columns: "*".to_string(),
            ..Self::default()
        }
    }

    /// Select specific columns.
    #[must_use]
    pub fn columns(mut self, columns: impl Into<String>) -> Self {
        self.columns = columns.into();
        self
    }

    /// Render the row query.
    #[must_use]
    pub fn to_sql(&self, driver: Driver) -> Sql {
        let mut sink = TextSink::new(driver);
        self.write(&mut sink, driver, false);
        sink.finish()
    }

    /// Render `SELECT COUNT(*)` over the same joins and predicates.
    ///
    /// Ordering and pagination are left out.
    #[must_use]
    pub fn to_count_sql(&self, driver: Driver) -> Sql {
        let mut sink = TextSink::new(driver);
        self.write(&mut sink, driver, true);
        sink.finish()
    }

    fn write(&self, sink: &mut dyn Sink, driver: Driver, count: bool) {
        if count {
            sink.push_sql(&format!("SELECT COUNT(*) FROM {}", self.table));
        } else {
            sink.push_sql(&format!("SELECT {} FROM {}", self.columns, self.table));
        }

        for join in &self.joins {
            sink.push_sql(" ");
            sink.push_sql(join);
        }

        // rendered in call order
        for (i, (connective, predicate)) in self.predicates.iter().enumerate() {
            sink.push_sql(if i == 0 { " WHERE " } else { connective.as_sql() });
            write_predicate(sink, predicate);
        }

        if count {
            return;
        }

        if !self.order.is_empty() {
            sink.push_sql(&format!(" ORDER BY {}", self.order.join(", ")));
        }

        let offset = self.offset.filter(|offset| *offset > 0);
        match (self.limit, offset, driver) {
            (Some(limit), ..) => sink.push_sql(&format!(" LIMIT {limit}")),
            (None, Some(_), Driver::Mysql) => sink.push_sql(&format!(" LIMIT {MYSQL_NO_LIMIT}")),
            _ => {}
        }
        if let Some(offset) = offset {
            sink.push_sql(&format!(" OFFSET {offset}"));
        }
    }
}

impl QueryHandle for Select {
    fn add_join(&mut self, clause: &str) {
        self.joins.push(clause.to_string());
    }

    fn add_and(&mut self, expr: &str, args: &[Value]) {
        self.predicates
            .push((Connective::And, Predicate::new(expr, args.to_vec())));
    }

    fn add_or(&mut self, expr: &str, args: &[Value]) {
        self.predicates
            .push((Connective::Or, Predicate::new(expr, args.to_vec())));
    }

    fn add_order(&mut self, clause: &str) {
        self.order.push(clause.to_string());
    }

    fn set_offset(&mut self, offset: u64) {
        self.offset = Some(offset);
    }

    fn set_limit(&mut self, limit: Option<u64>) {
        self.limit = limit;
    }
}

/// Destination of rendered SQL pieces.
trait Sink {
    fn push_sql(&mut self, sql: &str);

    fn push_arg(&mut self, value: &Value);
}

struct TextSink {
    driver: Driver,
    sql:    Sql
}

impl TextSink {
    fn new(driver: Driver) -> Self {
        Self {
            driver,
            sql: Sql::default()
        }
    }

    fn finish(self) -> Sql {
        self.sql
    }
}

impl Sink for TextSink {
    fn push_sql(&mut self, sql: &str) {
        self.sql.text.push_str(sql);
    }

    fn push_arg(&mut self, value: &Value) {
        self.sql.args.push(value.clone());
        let placeholder = self.driver.placeholder(self.sql.args.len());
        self.sql.text.push_str(&placeholder);
    }
}

fn write_predicate(sink: &mut dyn Sink, predicate: &Predicate) {
    let mut args = predicate.args.iter();
    let mut pieces = predicate.expr.split('?');
    if let Some(head) = pieces.next() {
        sink.push_sql(head);
    }
    for piece in pieces {
        match args.next() {
            Some(Value::List(items)) => write_list(sink, items),
            Some(value) => sink.push_arg(value),
            None => sink.push_sql("?")
        }
        sink.push_sql(piece);
    }
}

/// Write list elements as comma-separated arguments, flattening nested lists.
fn write_list(sink: &mut dyn Sink, items: &[Value]) {
    if items.is_empty() {
        sink.push_sql("NULL");
        return;
    }
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            sink.push_sql(", ");
        }
        match item {
            Value::List(nested) => write_list(sink, nested),
            value => sink.push_arg(value)
        }
    }
}
