// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Bound argument values and the zero-value contract.
//!
//! Every value a filter record contributes to a predicate travels as a
//! [`Value`]. Table and column names never do; they are schema metadata and
//! are written straight into the expression template.
//!
//! # Zero Values
//!
//! A field whose value is the zero value of its type produces no predicate.
//!
//! | Type | Zero |
//! |------|------|
//! | `String`, `&str` | `""` |
//! | integers | `0` |
//! | floats | `0.0` |
//! | `bool` | `false` |
//! | `Vec<T>`, `[T]` | empty |
//! | `Option<T>` | `None` |
//!
//! `Option<T>` is the way to filter on a zero: `Some(0)` is not zero.

use std::fmt;

/// A parameter-bound argument.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum Value {
    /// SQL `NULL`.
    #[default]
    Null,
    /// Boolean.
    Bool(bool),
    /// Signed integer.
    Int(i64),
    /// Unsigned integer.
    UInt(u64),
    /// Floating point.
    Float(f64),
    /// Text.
    Text(String),
    /// Sequence, bound as a whole for `IN (?)`.
    List(Vec<Value>)
}

impl Value {
    /// Check if this is the zero value of its variant.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Bool(b) => !b,
            Self::Int(n) => *n == 0,
            Self::UInt(n) => *n == 0,
            Self::Float(f) => *f == 0.0,
            Self::Text(s) => s.is_empty(),
            Self::List(items) => items.is_empty()
        }
    }

    /// Truthiness used by the null-test operator.
    ///
    /// Only an explicit `false` is falsy.
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        !matches!(self, Self::Bool(false))
    }

    /// Treat the value as a sequence.
    ///
    /// Scalars become a one-element list.
    #[must_use]
    pub fn into_list(self) -> Vec<Value> {
        match self {
            Self::List(items) => items,
            other => vec![other]
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("NULL"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::UInt(n) => write!(f, "{n}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Text(s) => f.write_str(s),
            Self::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{item}")?;
                }
                Ok(())
            }
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Self::UInt(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(value: Vec<T>) -> Self {
        Self::List(value.into_iter().map(Into::into).collect())
    }
}

/// A field value a filter record can contribute to a predicate.
///
/// Implemented for the common scalar types, sequences and `Option<T>`.
/// Implement it for domain newtypes to use them in `#[search("...")]` fields.
///
/// # Example
///
/// ```rust
/// use search_core::{SearchValue, Value};
///
/// struct Email(String);
///
/// impl SearchValue for Email {
///     fn is_zero(&self) -> bool {
///         self.0.is_empty()
///     }
///
///     fn to_value(&self) -> Value {
///         Value::Text(self.0.clone())
///     }
/// }
///
/// assert!(Email(String::new()).is_zero());
/// ```
pub trait SearchValue {
    /// Check if the value is unset.
    fn is_zero(&self) -> bool;

    /// Convert into a bound argument.
    fn to_value(&self) -> Value;
}

macro_rules! search_value_int {
    ($variant:ident, $target:ty: $($ty:ty),+) => {
        $(
            impl SearchValue for $ty {
                fn is_zero(&self) -> bool {
                    *self == 0
                }

                fn to_value(&self) -> Value {
                    Value::$variant(*self as $target)
                }
            }
        )+
    };
}

search_value_int!(Int, i64: i8, i16, i32, i64, isize);
search_value_int!(UInt, u64: u8, u16, u32, u64, usize);

impl SearchValue for f32 {
    fn is_zero(&self) -> bool {
        *self == 0.0
    }

    fn to_value(&self) -> Value {
        Value::Float(f64::from(*self))
    }
}

impl SearchValue for f64 {
    fn is_zero(&self) -> bool {
        *self == 0.0
    }

    fn to_value(&self) -> Value {
        Value::Float(*self)
    }
}

impl SearchValue for bool {
    fn is_zero(&self) -> bool {
        !*self
    }

    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }
}

impl SearchValue for str {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }

    fn to_value(&self) -> Value {
        Value::Text(self.to_string())
    }
}

impl SearchValue for String {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }

    fn to_value(&self) -> Value {
        Value::Text(self.clone())
    }
}

impl SearchValue for Value {
    fn is_zero(&self) -> bool {
        Value::is_zero(self)
    }

    fn to_value(&self) -> Value {
        self.clone()
    }
}

impl<T: SearchValue> SearchValue for [T] {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }

    fn to_value(&self) -> Value {
        Value::List(self.iter().map(SearchValue::to_value).collect())
    }
}

impl<T: SearchValue> SearchValue for Vec<T> {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }

    fn to_value(&self) -> Value {
        self.as_slice().to_value()
    }
}

impl<T: SearchValue> SearchValue for Option<T> {
    fn is_zero(&self) -> bool {
        self.is_none()
    }

    fn to_value(&self) -> Value {
        self.as_ref().map_or(Value::Null, SearchValue::to_value)
    }
}

impl<T: SearchValue + ?Sized> SearchValue for &T {
    fn is_zero(&self) -> bool {
        (**self).is_zero()
    }

    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

impl<T: SearchValue + ?Sized> SearchValue for Box<T> {
    fn is_zero(&self) -> bool {
        (**self).is_zero()
    }

    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_zero_values() {
        assert!(0_i32.is_zero());
        assert!(0_u64.is_zero());
        assert!(0.0_f64.is_zero());
        assert!(false.is_zero());
        assert!(String::new().is_zero());
        assert!("".is_zero());
        assert!(Vec::<i64>::new().is_zero());
        assert!(!5_i32.is_zero());
        assert!(!"bob".is_zero());
    }

    #[test]
    fn option_zero_only_when_none() {
        assert!(None::<i64>.is_zero());
        assert!(!Some(0_i64).is_zero());
        assert_eq!(Some(0_i64).to_value(), Value::Int(0));
        assert_eq!(None::<i64>.to_value(), Value::Null);
    }

    #[test]
    fn sequences_convert_to_list() {
        let ids = vec![1_u64, 2, 3];
        assert_eq!(
            ids.to_value(),
            Value::List(vec![Value::UInt(1), Value::UInt(2), Value::UInt(3)])
        );
    }

    #[test]
    fn display_is_plain() {
        assert_eq!(Value::Text("bo".into()).to_string(), "bo");
        assert_eq!(Value::Int(-1).to_string(), "-1");
        assert_eq!(Value::from(vec![1_i64, 2]).to_string(), "1,2");
    }

    #[test]
    fn truthiness() {
        assert!(Value::Bool(true).is_truthy());
        assert!(!Value::Bool(false).is_truthy());
        assert!(Value::Int(1).is_truthy());
    }

    #[test]
    fn scalar_into_list() {
        assert_eq!(Value::Int(7).into_list(), vec![Value::Int(7)]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_untagged() {
        let value = Value::from(vec![Value::Null, Value::from("bo"), Value::Int(3)]);
        let json = serde_json::to_string(&value).expect("serialize");
        assert_eq!(json, r#"[null,"bo",3]"#);
    }
}
