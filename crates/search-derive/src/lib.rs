// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]

//! # search-derive
//!
//! One crate, all features. Re-exports:
//! - [`Search`](macro@Search) derive macro from `search-derive-impl`
//! - All types from `search-core` ([`compile`], [`Transform`], [`Select`],
//!   [`CompileOptions`])
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use search_derive::prelude::*;
//!
//! #[derive(Search)]
//! #[search(table = "category")]
//! pub struct CategorySearch {
//!     #[search("type:like")]
//!     pub name: String,
//!     #[search("page")]
//!     pub page: u32,
//!     #[search("pageSize")]
//!     pub page_size: u32,
//! }
//!
//! let transform = compile(&filter, &CompileOptions::default())?.into_transform();
//! ```

pub use search_core::*;
pub use search_derive_impl::Search;

/// Convenient re-exports, derive macro included.
pub mod prelude {
    pub use search_core::prelude::*;
    pub use search_derive_impl::Search;
}
