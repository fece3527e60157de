// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Parsing of `#[derive(Search)]` input.
//!
//! # Container Attributes
//!
//! | Attribute | Default | Effect |
//! |-----------|---------|--------|
//! | `table = "users"` | none | table of fields whose annotation names none |
//!
//! Unknown container keys are rejected by darling.

mod field;

use darling::FromDeriveInput;
pub use field::{FieldDef, FieldKind};
use syn::{DeriveInput, Generics, Ident};

/// Container attributes parsed from `#[search(...)]`.
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(search), supports(struct_named))]
struct SearchAttrs {
    ident: Ident,

    generics: Generics,

    #[darling(default)]
    table: Option<String>
}

/// Complete search record definition.
#[derive(Debug)]
pub struct SearchDef {
    /// Struct identifier.
    pub ident: Ident,

    /// Struct generics, carried onto the impl.
    pub generics: Generics,

    /// Default table.
    pub table: Option<String>,

    /// Fields in declaration order.
    pub fields: Vec<FieldDef>
}

impl SearchDef {
    /// Parse derive input.
    ///
    /// # Errors
    ///
    /// Returns error for anything but a struct with named fields, unknown
    /// container keys and malformed field attributes.
    pub fn from_derive_input(input: &DeriveInput) -> darling::Result<Self> {
        let attrs = SearchAttrs::from_derive_input(input)?;

        let fields = match &input.data {
            syn::Data::Struct(data) => match &data.fields {
                syn::Fields::Named(named) => named
                    .named
                    .iter()
                    .map(FieldDef::from_field)
                    .collect::<darling::Result<Vec<_>>>()?,
                _ => {
                    return Err(darling::Error::custom("Search requires named fields")
                        .with_span(&input.ident));
                }
            },
            _ => {
                return Err(
                    darling::Error::custom("Search can only be derived for structs")
                        .with_span(&input.ident)
                );
            }
        };

        Ok(Self {
            ident: attrs.ident,
            generics: attrs.generics,
            table: attrs.table,
            fields
        })
    }

    /// Default table, empty when none is set.
    #[must_use]
    pub fn table(&self) -> &str {
        self.table.as_deref().unwrap_or_default()
    }

    /// Fields the generated visitor touches.
    pub fn visited_fields(&self) -> impl Iterator<Item = &FieldDef> {
        self.fields.iter().filter(|f| f.kind.is_visited())
    }
}
