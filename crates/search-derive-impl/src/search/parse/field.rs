// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Field-level `#[search(...)]` parsing.
//!
//! # Supported Forms
//!
//! | Attribute | Kind | Field type must implement |
//! |-----------|------|---------------------------|
//! | `#[search("type:eq;column:name")]` | [`FieldKind::Scalar`] | `SearchValue` |
//! | `#[search("type:left;join:orders;on:user_id:id")]` | [`FieldKind::Join`] | `Search` |
//! | `#[search(flatten)]` | [`FieldKind::Flatten`] | `Search` |
//! | `#[search("-")]` | [`FieldKind::Excluded`] | nothing |
//! | none | [`FieldKind::Untagged`] | nothing |
//!
//! The annotation string is classified with the runtime grammar, so a
//! `type:left` annotation is recognised here exactly as the walker will
//! recognise it. Everything else about the string stays lenient and is
//! reported at compile time of the search, not of the crate.

use convert_case::{Case, Casing};
use search_core::tag::FieldTag;
use syn::{Attribute, Field, Ident, LitStr, ext::IdentExt, parse::ParseStream};

/// How a field takes part in the search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    /// Scalar annotation: predicate, ordering or pagination.
    Scalar {
        /// Annotation string.
        tag: String
    },

    /// `type:left` annotation on an embedded record.
    Join {
        /// Annotation string.
        tag: String
    },

    /// Embedded record searched in the same scope.
    Flatten,

    /// `-` annotation.
    Excluded,

    /// No `#[search]` attribute.
    Untagged
}

impl FieldKind {
    fn from_tag(tag: String) -> Self {
        let parsed = FieldTag::parse(&tag).tag;
        if parsed == FieldTag::Exclude {
            Self::Excluded
        } else if parsed.is_join() {
            Self::Join {
                tag
            }
        } else {
            Self::Scalar {
                tag
            }
        }
    }

    /// Check if the generated visitor touches this field.
    #[must_use]
    pub fn is_visited(&self) -> bool {
        !matches!(self, Self::Excluded | Self::Untagged)
    }
}

/// Parsed search field.
#[derive(Debug)]
pub struct FieldDef {
    /// Field identifier.
    pub ident: Ident,

    /// Participation in the search.
    pub kind: FieldKind
}

impl FieldDef {
    /// Parse a named field.
    ///
    /// # Errors
    ///
    /// Returns error for unnamed fields, duplicate `#[search]` attributes and
    /// arguments that are neither a string literal nor `flatten`.
    pub fn from_field(field: &Field) -> darling::Result<Self> {
        let ident = field.ident.clone().ok_or_else(|| {
            darling::Error::custom("Search fields must be named").with_span(field)
        })?;

        let mut kind = None;
        for attr in field.attrs.iter().filter(|a| a.path().is_ident("search")) {
            if kind.is_some() {
                return Err(
                    darling::Error::custom("duplicate #[search] attribute").with_span(attr)
                );
            }
            kind = Some(parse_search_attr(attr)?);
        }

        Ok(Self {
            ident,
            kind: kind.unwrap_or(FieldKind::Untagged)
        })
    }

    /// Field name as written, used in diagnostics.
    #[must_use]
    pub fn name(&self) -> String {
        self.ident.unraw().to_string()
    }

    /// Column used when the annotation names none.
    #[must_use]
    pub fn default_column(&self) -> String {
        self.name().to_case(Case::Snake)
    }
}

fn parse_search_attr(attr: &Attribute) -> darling::Result<FieldKind> {
    attr.parse_args_with(|input: ParseStream<'_>| {
        if input.peek(LitStr) {
            let tag: LitStr = input.parse()?;
            return Ok(FieldKind::from_tag(tag.value()));
        }
        let ident: Ident = input.parse()?;
        if ident == "flatten" {
            Ok(FieldKind::Flatten)
        } else {
            Err(syn::Error::new(
                ident.span(),
                "expected a search annotation string or `flatten`"
            ))
        }
    })
    .map_err(darling::Error::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: syn::DeriveInput) -> darling::Result<FieldDef> {
        let syn::Data::Struct(data) = input.data else {
            panic!("expected a struct");
        };
        let field = data.fields.into_iter().next().expect("one field");
        FieldDef::from_field(&field)
    }

    #[test]
    fn scalar_annotation() {
        let def = parse(syn::parse_quote! {
            struct S {
                #[search("type:like;column:name")]
                name: String
            }
        })
        .unwrap();
        assert_eq!(def.kind, FieldKind::Scalar {
            tag: "type:like;column:name".into()
        });
        assert!(def.kind.is_visited());
    }

    #[test]
    fn left_annotation_is_a_join() {
        let def = parse(syn::parse_quote! {
            struct S {
                #[search("type:left;join:orders;on:user_id:id")]
                orders: OrderSearch
            }
        })
        .unwrap();
        assert!(matches!(def.kind, FieldKind::Join { .. }));
    }

    #[test]
    fn flatten_and_exclude() {
        let def = parse(syn::parse_quote! {
            struct S {
                #[search(flatten)]
                base: BaseSearch
            }
        })
        .unwrap();
        assert_eq!(def.kind, FieldKind::Flatten);

        let def = parse(syn::parse_quote! {
            struct S {
                #[search("-")]
                secret: String
            }
        })
        .unwrap();
        assert_eq!(def.kind, FieldKind::Excluded);
        assert!(!def.kind.is_visited());
    }

    #[test]
    fn untagged_field() {
        let def = parse(syn::parse_quote! {
            struct S {
                #[serde(default)]
                other: Vec<u8>
            }
        })
        .unwrap();
        assert_eq!(def.kind, FieldKind::Untagged);
    }

    #[test]
    fn malformed_grammar_still_parses() {
        let def = parse(syn::parse_quote! {
            struct S {
                #[search("type:fuzzy;colour:red")]
                name: String
            }
        })
        .unwrap();
        assert!(matches!(def.kind, FieldKind::Scalar { .. }));
    }

    #[test]
    fn default_column_is_snake_case() {
        let def = parse(syn::parse_quote! {
            struct S {
                #[search("type:eq")]
                #[allow(non_snake_case)]
                parentId: u64
            }
        })
        .unwrap();
        assert_eq!(def.name(), "parentId");
        assert_eq!(def.default_column(), "parent_id");

        let def = parse(syn::parse_quote! {
            struct S {
                #[search("type:eq")]
                r#type: String
            }
        })
        .unwrap();
        assert_eq!(def.name(), "type");
    }

    #[test]
    fn rejects_non_string_argument() {
        let result = parse(syn::parse_quote! {
            struct S {
                #[search(42)]
                name: String
            }
        });
        assert!(result.is_err());

        let result = parse(syn::parse_quote! {
            struct S {
                #[search(deep)]
                name: String
            }
        });
        assert!(result.is_err());
    }

    #[test]
    fn rejects_duplicate_attribute() {
        let result = parse(syn::parse_quote! {
            struct S {
                #[search("type:eq")]
                #[search("type:gt")]
                age: u32
            }
        });
        assert!(result.is_err());
    }
}
