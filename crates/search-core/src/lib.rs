// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Core types for search-derive.
//!
//! Turns an annotated filter record into query conditions in two phases:
//!
//! 1. **Compile**: [`compile`] walks a [`Search`] record, parses each field's
//!    annotation and writes predicates, join scopes, orderings and
//!    pagination into a [`ConditionTree`]. No database is touched.
//! 2. **Apply**: a [`Transform`] replays the tree onto any [`QueryHandle`],
//!    once for a page of rows and once more, without pagination, for the
//!    total count.
//!
//! # Overview
//!
//! | Item | Role |
//! |------|------|
//! | [`Search`] / [`Walker`] | record traversal, normally derived |
//! | [`tag`] | annotation grammar |
//! | [`ConditionTree`] | compiled predicates, joins and pagination |
//! | [`Transform`] / [`QueryHandle`] | replay onto a query builder |
//! | [`Select`] | reference `SELECT` builder rendering SQL text |
//! | [`CompileOptions`] | driver and strictness of one compile |
//!
//! # Features
//!
//! | Feature | Adds |
//! |---------|------|
//! | `serde` | `Serialize` / `Deserialize` for [`CompileOptions`] and [`Value`] |
//! | `postgres` | `Select::to_postgres`, an `sqlx::QueryBuilder` with bound arguments |
//! | `mysql` | `Select::to_mysql` |
//!
//! # Usage
//!
//! Most users should use `search-derive`, which re-exports this crate
//! together with `#[derive(Search)]`:
//!
//! ```rust,ignore
//! use search_derive::prelude::*;
//!
//! #[derive(Search)]
//! #[search(table = "users")]
//! struct UserSearch {
//!     #[search("type:icontains")]
//!     name: String,
//!     #[search("page")]
//!     page: u32,
//!     #[search("pageSize")]
//!     page_size: u32,
//! }
//!
//! let transform = compile(&filter, &CompileOptions::new(Driver::Postgres))?.into_transform();
//! let mut rows = Select::from("users");
//! transform.apply_paged(&mut rows);
//! let sql = rows.to_sql(Driver::Postgres);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod apply;
mod compile;
pub mod condition;
pub mod dialect;
mod error;
mod options;
pub mod pagination;
pub mod prelude;
mod statement;
pub mod tag;
mod value;
mod walker;

pub use apply::{Paging, QueryHandle, Transform};
pub use compile::{Compiled, compile};
pub use condition::{Condition, ConditionTree, JoinKind, JoinScope, Predicate, Scope};
pub use dialect::Driver;
pub use error::{CompileError, Issue, IssueKind};
pub use options::{CompileOptions, Mode};
pub use pagination::Window;
pub use statement::{Select, Sql};
pub use tag::{FieldDescriptor, FieldTag, Operator, TagIssue};
pub use value::{SearchValue, Value};
pub use walker::{FieldMeta, Search, Walker};
