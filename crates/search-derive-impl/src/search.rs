// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Search derive macro implementation.
//!
//! # Architecture
//!
//! ```text
//! search/
//! ├── parse.rs       container attributes, SearchDef
//! ├── parse/field.rs field attributes, FieldKind
//! └── walk.rs        impl ::search_core::Search
//! ```

pub mod parse;
mod walk;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

use self::parse::SearchDef;

/// Main entry point for the Search derive macro.
pub fn derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match SearchDef::from_derive_input(&input) {
        Ok(def) => walk::generate(&def).into(),
        Err(err) => err.write_errors().into()
    }
}
