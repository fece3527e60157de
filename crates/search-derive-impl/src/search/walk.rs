// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `Search` impl generation.
//!
//! Every visited field becomes one walker call in declaration order:
//!
//! ```rust,ignore
//! impl ::search_core::Search for CategorySearch {
//!     fn walk(&self, walker: &mut ::search_core::Walker<'_>) {
//!         walker.field(
//!             &::search_core::FieldMeta::new("name", "type:like").column("name").table("category"),
//!             &self.name
//!         );
//!         walker.join(&::search_core::FieldMeta::new("orders", "type:left;...").column("orders"), &self.orders);
//!         walker.flatten(&self.base);
//!     }
//!
//!     fn is_zero(&self) -> bool {
//!         true && ::search_core::SearchValue::is_zero(&self.name) && ...
//!     }
//! }
//! ```

use proc_macro2::TokenStream;
use quote::quote;

use super::parse::{FieldDef, FieldKind, SearchDef};

/// Generate the `Search` impl.
pub fn generate(def: &SearchDef) -> TokenStream {
    let ident = &def.ident;
    let (impl_generics, ty_generics, where_clause) = def.generics.split_for_impl();

    let visits = def.visited_fields().map(|field| visit(field, def.table()));
    let zero_checks = def.visited_fields().map(zero_check);

    quote! {
        impl #impl_generics ::search_core::Search for #ident #ty_generics #where_clause {
            #[allow(unused_variables)]
            fn walk(&self, walker: &mut ::search_core::Walker<'_>) {
                #(#visits)*
            }

            fn is_zero(&self) -> bool {
                true #(&& #zero_checks)*
            }
        }
    }
}

fn meta(field: &FieldDef, tag: &str, table: &str) -> TokenStream {
    let name = field.name();
    let column = field.default_column();
    let table = (!table.is_empty()).then(|| quote! { .table(#table) });
    quote! {
        ::search_core::FieldMeta::new(#name, #tag).column(#column) #table
    }
}

fn visit(field: &FieldDef, table: &str) -> TokenStream {
    let ident = &field.ident;
    match &field.kind {
        FieldKind::Scalar {
            tag
        } => {
            let meta = meta(field, tag, table);
            quote! { walker.field(&#meta, &self.#ident); }
        }
        FieldKind::Join {
            tag
        } => {
            let meta = meta(field, tag, table);
            quote! { walker.join(&#meta, &self.#ident); }
        }
        FieldKind::Flatten => quote! { walker.flatten(&self.#ident); },
        FieldKind::Excluded | FieldKind::Untagged => TokenStream::new()
    }
}

fn zero_check(field: &FieldDef) -> TokenStream {
    let ident = &field.ident;
    match &field.kind {
        FieldKind::Scalar {
            ..
        } => quote! { ::search_core::SearchValue::is_zero(&self.#ident) },
        _ => quote! { ::search_core::Search::is_zero(&self.#ident) }
    }
}
