// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Search annotation grammar.
//!
//! A filter field carries a `search` annotation describing how its value
//! turns into a condition.
//!
//! # Grammar
//!
//! ```text
//! annotation := "-" | segment (";" segment)*
//! segment    := "page" | "pageSize" | key ":" value (":" value)*
//! key        := "type" | "column" | "table" | "on" | "join"
//! ```
//!
//! | Annotation | Meaning |
//! |------------|---------|
//! | `type:like;column:name;table:users` | `users.name LIKE ?` |
//! | `type:left;join:orders;on:user_id:id;table:users` | `LEFT JOIN orders ON orders.user_id = users.id` |
//! | `page` / `pageSize` | pagination input |
//! | `-` | never searched |
//!
//! Parsing is lenient: unknown keys and keys without a value leave the
//! descriptor field empty. Each of those is reported as a [`TagIssue`] so
//! the caller decides whether to tolerate it.

use std::fmt;

/// Condition operator named by the `type` key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `eq`: equality.
    Eq,
    /// `exact`: equality.
    Exact,
    /// `iexact`: equality.
    IExact,
    /// `like`: substring match.
    Like,
    /// `contains`: substring match.
    Contains,
    /// `icontains`: case-insensitive substring match.
    IContains,
    /// `gt`: greater than.
    Gt,
    /// `gte`: greater than or equal.
    Gte,
    /// `lt`: less than.
    Lt,
    /// `lte`: less than or equal.
    Lte,
    /// `startswith`: prefix match.
    StartsWith,
    /// `istartswith`: case-insensitive prefix match.
    IStartsWith,
    /// `endswith`: suffix match.
    EndsWith,
    /// `iendswith`: case-insensitive suffix match.
    IEndsWith,
    /// `in`: set membership.
    In,
    /// `between`: inclusive range over a two-element sequence.
    Between,
    /// `isnull`: null test.
    IsNull,
    /// `order`: ordering clause, value is `asc` or `desc`.
    Order,
    /// `left`: left join into a nested record.
    Left,
    /// `page`: page number.
    Page,
    /// `pageSize`: page size.
    PageSize
}

impl Operator {
    /// Every operator, in vocabulary order.
    pub const ALL: [Self; 21] = [
        Self::Eq,
        Self::Exact,
        Self::IExact,
        Self::Like,
        Self::Contains,
        Self::IContains,
        Self::Gt,
        Self::Gte,
        Self::Lt,
        Self::Lte,
        Self::StartsWith,
        Self::IStartsWith,
        Self::EndsWith,
        Self::IEndsWith,
        Self::In,
        Self::Between,
        Self::IsNull,
        Self::Order,
        Self::Left,
        Self::Page,
        Self::PageSize
    ];

    /// Look up an operator by its annotation token.
    ///
    /// Tokens are case-sensitive. Returns `None` for unsupported tokens.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.as_str() == token)
    }

    /// Annotation token of this operator.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Eq => "eq",
            Self::Exact => "exact",
            Self::IExact => "iexact",
            Self::Like => "like",
            Self::Contains => "contains",
            Self::IContains => "icontains",
            Self::Gt => "gt",
            Self::Gte => "gte",
            Self::Lt => "lt",
            Self::Lte => "lte",
            Self::StartsWith => "startswith",
            Self::IStartsWith => "istartswith",
            Self::EndsWith => "endswith",
            Self::IEndsWith => "iendswith",
            Self::In => "in",
            Self::Between => "between",
            Self::IsNull => "isnull",
            Self::Order => "order",
            Self::Left => "left",
            Self::Page => "page",
            Self::PageSize => "pageSize"
        }
    }

    /// Check if the dialect may spell this match case-insensitively.
    #[must_use]
    pub const fn is_case_insensitive(&self) -> bool {
        matches!(self, Self::IContains | Self::IStartsWith | Self::IEndsWith)
    }

    /// Check if this operator opens a join scope.
    #[must_use]
    pub const fn is_join(&self) -> bool {
        matches!(self, Self::Left)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parsed metadata of one annotated field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldDescriptor {
    /// Operator, `None` when the `type` token is missing or unsupported.
    pub operator: Option<Operator>,
    /// Raw `type` token as written.
    pub kind:     String,
    /// Target column.
    pub column:   String,
    /// Target table.
    pub table:    String,
    /// Join key pair `[joined column, source column]`.
    pub on:       Vec<String>,
    /// Joined table.
    pub join:     String
}

/// Annotation of a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldTag {
    /// `-`: excluded from search.
    Exclude,
    /// Searchable field.
    Search(FieldDescriptor)
}

/// A lenient parsing outcome worth reporting.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TagIssue {
    /// Segment key outside the grammar.
    #[error("unknown annotation key `{0}`")]
    UnknownKey(String),
    /// Key written without a value.
    #[error("annotation key `{0}` has no value")]
    MissingValue(&'static str),
    /// `type` names no known operator.
    #[error("unsupported operator `{0}`")]
    UnsupportedOperator(String),
    /// No `type` given.
    #[error("annotation names no operator")]
    MissingOperator
}

/// Result of parsing one annotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedTag {
    /// Parsed annotation.
    pub tag:    FieldTag,
    /// Everything the parser had to ignore.
    pub issues: Vec<TagIssue>
}

impl FieldTag {
    /// Parse a `search` annotation.
    ///
    /// # Example
    ///
    /// ```rust
    /// use search_core::tag::{FieldTag, Operator};
    ///
    /// let parsed = FieldTag::parse("type:eq;column:name;table:users");
    /// let FieldTag::Search(descriptor) = parsed.tag else {
    ///     panic!("not excluded");
    /// };
    /// assert_eq!(descriptor.operator, Some(Operator::Eq));
    /// assert_eq!(descriptor.column, "name");
    /// assert!(parsed.issues.is_empty());
    /// ```
    #[must_use]
    pub fn parse(annotation: &str) -> ParsedTag {
        let annotation = annotation.trim();
        if annotation == "-" {
            return ParsedTag {
                tag:    FieldTag::Exclude,
                issues: Vec::new()
            };
        }

        let mut descriptor = FieldDescriptor::default();
        let mut issues = Vec::new();

        for segment in annotation.split(';') {
            let segment = segment.trim();
            if segment.is_empty() {
                continue;
            }

            let mut parts = segment.split(':').map(str::trim);
            let key = parts.next().unwrap_or_default();
            let values: Vec<&str> = parts.collect();
            let first = values.first().copied().filter(|v| !v.is_empty());

            match key {
                "type" => match first {
                    Some(v) => descriptor.kind = v.to_string(),
                    None => issues.push(TagIssue::MissingValue("type"))
                },
                "column" => match first {
                    Some(v) => descriptor.column = v.to_string(),
                    None => issues.push(TagIssue::MissingValue("column"))
                },
                "table" => match first {
                    Some(v) => descriptor.table = v.to_string(),
                    None => issues.push(TagIssue::MissingValue("table"))
                },
                "join" => match first {
                    Some(v) => descriptor.join = v.to_string(),
                    None => issues.push(TagIssue::MissingValue("join"))
                },
                "on" => {
                    if first.is_some() {
                        descriptor.on = values.iter().map(|v| (*v).to_string()).collect();
                    } else {
                        issues.push(TagIssue::MissingValue("on"));
                    }
                }
                "page" | "pageSize" => descriptor.kind = key.to_string(),
                other => issues.push(TagIssue::UnknownKey(other.to_string()))
            }
        }

        descriptor.operator = Operator::from_token(&descriptor.kind);
        if descriptor.operator.is_none() {
            if descriptor.kind.is_empty() {
                issues.push(TagIssue::MissingOperator);
            } else {
                issues.push(TagIssue::UnsupportedOperator(descriptor.kind.clone()));
            }
        }

        ParsedTag {
            tag: FieldTag::Search(descriptor),
            issues
        }
    }

    /// Get the descriptor unless the field is excluded.
    #[must_use]
    pub fn descriptor(&self) -> Option<&FieldDescriptor> {
        match self {
            Self::Exclude => None,
            Self::Search(descriptor) => Some(descriptor)
        }
    }

    /// Check if this annotation opens a join.
    #[must_use]
    pub fn is_join(&self) -> bool {
        self.descriptor()
            .and_then(|d| d.operator)
            .is_some_and(|op| op.is_join())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(annotation: &str) -> FieldDescriptor {
        match FieldTag::parse(annotation).tag {
            FieldTag::Search(d) => d,
            FieldTag::Exclude => panic!("unexpected exclude")
        }
    }

    #[test]
    fn parses_full_annotation() {
        let d = descriptor("type:like;column:name;table:users");
        assert_eq!(d.operator, Some(Operator::Like));
        assert_eq!(d.kind, "like");
        assert_eq!(d.column, "name");
        assert_eq!(d.table, "users");
        assert!(d.on.is_empty());
        assert!(d.join.is_empty());
    }

    #[test]
    fn dash_excludes() {
        let parsed = FieldTag::parse("-");
        assert_eq!(parsed.tag, FieldTag::Exclude);
        assert!(parsed.issues.is_empty());
        assert!(parsed.tag.descriptor().is_none());
    }

    #[test]
    fn bare_pagination_keywords() {
        assert_eq!(descriptor("page").operator, Some(Operator::Page));
        assert_eq!(descriptor("pageSize").operator, Some(Operator::PageSize));
        assert!(FieldTag::parse("pageSize").issues.is_empty());
    }

    #[test]
    fn on_consumes_remaining_tokens() {
        let d = descriptor("type:left;join:orders;on:user_id:id;table:users");
        assert_eq!(d.operator, Some(Operator::Left));
        assert_eq!(d.join, "orders");
        assert_eq!(d.on, vec!["user_id".to_string(), "id".to_string()]);
        assert!(FieldTag::parse("type:left;join:orders;on:user_id:id").tag.is_join());
    }

    #[test]
    fn unknown_key_is_reported_and_ignored() {
        let parsed = FieldTag::parse("type:eq;colunm:name");
        assert_eq!(parsed.issues, vec![TagIssue::UnknownKey("colunm".into())]);
        let d = parsed.tag.descriptor().cloned().unwrap_or_default();
        assert_eq!(d.operator, Some(Operator::Eq));
        assert!(d.column.is_empty());
    }

    #[test]
    fn missing_value_leaves_field_empty() {
        let parsed = FieldTag::parse("type:eq;column:;table");
        assert!(parsed.issues.contains(&TagIssue::MissingValue("column")));
        assert!(parsed.issues.contains(&TagIssue::MissingValue("table")));
    }

    #[test]
    fn unsupported_operator_keeps_raw_token() {
        let parsed = FieldTag::parse("type:fuzzy;column:name");
        let d = parsed.tag.descriptor().cloned().unwrap_or_default();
        assert_eq!(d.operator, None);
        assert_eq!(d.kind, "fuzzy");
        assert_eq!(parsed.issues, vec![TagIssue::UnsupportedOperator("fuzzy".into())]);
    }

    #[test]
    fn bare_operator_word_is_not_grammar() {
        let parsed = FieldTag::parse("exact");
        assert_eq!(
            parsed.issues,
            vec![TagIssue::UnknownKey("exact".into()), TagIssue::MissingOperator]
        );
    }

    #[test]
    fn trailing_separator_is_harmless() {
        let parsed = FieldTag::parse("type:gt;column:age;");
        assert!(parsed.issues.is_empty());
    }

    #[test]
    fn tokens_round_trip_through_vocabulary() {
        for op in Operator::ALL {
            assert_eq!(Operator::from_token(op.as_str()), Some(op));
        }
        assert_eq!(Operator::from_token("EQ"), None);
    }

    #[test]
    fn case_insensitive_variants() {
        assert!(Operator::IContains.is_case_insensitive());
        assert!(Operator::IStartsWith.is_case_insensitive());
        assert!(Operator::IEndsWith.is_case_insensitive());
        assert!(!Operator::Like.is_case_insensitive());
        assert!(!Operator::IExact.is_case_insensitive());
    }
}
