// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `sqlx::QueryBuilder` rendering with bound arguments.

use sqlx::QueryBuilder;

use super::{Select, Sink, write_list};
use crate::{dialect::Driver, value::Value};

#[cfg(feature = "postgres")]
impl Select {
    /// Build a Postgres row query.
    #[must_use]
    pub fn to_postgres(&self) -> QueryBuilder<'static, sqlx::Postgres> {
        let mut builder: QueryBuilder<'static, sqlx::Postgres> = QueryBuilder::new("");
        self.write(&mut builder, Driver::Postgres, false);
        builder
    }

    /// Build a Postgres count query.
    #[must_use]
    pub fn to_postgres_count(&self) -> QueryBuilder<'static, sqlx::Postgres> {
        let mut builder: QueryBuilder<'static, sqlx::Postgres> = QueryBuilder::new("");
        self.write(&mut builder, Driver::Postgres, true);
        builder
    }
}

#[cfg(feature = "mysql")]
impl Select {
    /// Build a MySQL row query.
    #[must_use]
    pub fn to_mysql(&self) -> QueryBuilder<'static, sqlx::MySql> {
        let mut builder: QueryBuilder<'static, sqlx::MySql> = QueryBuilder::new("");
        self.write(&mut builder, Driver::Mysql, false);
        builder
    }

    /// Build a MySQL count query.
    #[must_use]
    pub fn to_mysql_count(&self) -> QueryBuilder<'static, sqlx::MySql> {
        let mut builder: QueryBuilder<'static, sqlx::MySql> = QueryBuilder::new("");
        self.write(&mut builder, Driver::Mysql, true);
        builder
    }
}

#[cfg(feature = "postgres")]
impl Sink for QueryBuilder<'static, sqlx::Postgres> {
    fn push_sql(&mut self, sql: &str) {
        self.push(sql);
    }

    fn push_arg(&mut self, value: &Value) {
        match value {
            Value::Null => {
                self.push_bind(None::<String>);
            }
            Value::Bool(b) => {
                self.push_bind(*b);
            }
            Value::Int(n) => {
                self.push_bind(*n);
            }
            // no unsigned 64-bit type; values past BIGINT go through NUMERIC
            Value::UInt(n) => match i64::try_from(*n) {
                Ok(n) => {
                    self.push_bind(n);
                }
                Err(_) => {
                    self.push_bind(n.to_string());
                    self.push("::numeric");
                }
            },
            Value::Float(f) => {
                self.push_bind(*f);
            }
            Value::Text(s) => {
                self.push_bind(s.clone());
            }
            Value::List(items) => write_list(self, items),
        }
    }
}

#[cfg(feature = "mysql")]
impl Sink for QueryBuilder<'static, sqlx::MySql> {
    fn push_sql(&mut self, sql: &str) {
        self.push(sql);
    }

    fn push_arg(&mut self, value: &Value) {
        match value {
            Value::Null => {
                self.push_bind(None::<String>);
            }
            Value::Bool(b) => {
                self.push_bind(*b);
            }
            Value::Int(n) => {
                self.push_bind(*n);
            }
            Value::UInt(n) => {
                self.push_bind(*n);
            }
            Value::Float(f) => {
                self.push_bind(*f);
            }
            Value::Text(s) => {
                self.push_bind(s.clone());
            }
            Value::List(items) => write_list(self, items),
        }
    }
}
