// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::broken_intra_doc_links,
    rust_2018_idioms
)]
#![deny(unsafe_code)]

//! # Attribute Quick Reference
//!
//! ## Container `#[search(...)]`
//!
//! ```rust,ignore
//! #[derive(Search)]
//! #[search(table = "users")] // Optional: table of fields that name none
//! pub struct UserSearch { /* ... */ }
//! ```
//!
//! ## Field `#[search(...)]`
//!
//! ```rust,ignore
//! #[search("type:icontains")]                       // predicate, column defaults to the field name
//! #[search("type:eq;column:parent_id;table:cat")]   // explicit column and table
//! #[search("type:order;column:created_at")]         // ordering, value is "asc" / "desc"
//! #[search("page")] / #[search("pageSize")]         // pagination input
//! #[search("type:left;join:orders;on:user_id:id")]  // LEFT JOIN, field implements Search
//! #[search(flatten)]                                // embedded record, same scope
//! #[search("-")]                                    // never searched
//! ```
//!
//! Fields without `#[search]` are ignored.
//!
//! ## Operators
//!
//! | `type` | Expression | Argument |
//! |--------|------------|----------|
//! | `eq`, `exact`, `iexact` | `col = ?` | value |
//! | `like`, `contains`, `icontains` | `col LIKE ?` | `%value%` |
//! | `startswith`, `istartswith` | `col LIKE ?` | `value%` |
//! | `endswith`, `iendswith` | `col LIKE ?` | `%value` |
//! | `gt`, `gte`, `lt`, `lte` | `col > ?` ... | value |
//! | `in` | `col IN (?)` | sequence |
//! | `between` | `col BETWEEN ? AND ?` | two-element sequence |
//! | `isnull` | `col IS NULL` / `col IS NOT NULL` | none |
//!
//! Case-insensitive variants use `ILIKE` on Postgres.

mod search;

use proc_macro::TokenStream;

/// Derive `search_core::Search` for a filter record.
///
/// # Generated Code
///
/// | Field | Generated call |
/// |-------|----------------|
/// | scalar annotation | `walker.field(&meta, &self.field)` |
/// | `type:left` annotation | `walker.join(&meta, &self.field)` |
/// | `#[search(flatten)]` | `walker.flatten(&self.field)` |
///
/// `is_zero` holds when every visited field is zero.
///
/// # Example
///
/// ```rust,ignore
/// use search_derive::Search;
///
/// #[derive(Search)]
/// #[search(table = "category")]
/// pub struct CategorySearch {
///     #[search("type:like")]
///     pub name: String,
///
///     #[search("type:eq;column:parent_id")]
///     pub parent_id: u64,
///
///     #[search("page")]
///     pub page: u32,
///
///     #[search("pageSize")]
///     pub page_size: u32,
/// }
/// ```
#[proc_macro_derive(Search, attributes(search))]
pub fn derive_search(input: TokenStream) -> TokenStream {
    search::derive(input)
}
