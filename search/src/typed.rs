//! Typed field-value wrappers used by the generated entity criteria.
//!
//! These carry the same shapes as [`FieldValue`] but restrict which
//! constructors a field of a given kind offers; they change nothing about
//! how the value compiles.

use chrono::NaiveDate;

use crate::types::{FieldValue, Ops, Scalar};

/// Filter value for string-typed fields.
///
/// A plain value means equality, a list means any-of, and `like` carries
/// the caller's wildcard pattern verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct StringFieldValue(FieldValue);

impl StringFieldValue {
    pub fn like(pattern: impl Into<String>) -> Self {
        Self(FieldValue::Ops(Ops {
            like: Some(pattern.into()),
            ..Ops::default()
        }))
    }

    pub fn one_of<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(FieldValue::Ops(Ops {
            one_of: Some(
                values
                    .into_iter()
                    .map(|value| Scalar::Str(value.into()))
                    .collect(),
            ),
            ..Ops::default()
        }))
    }
}

impl From<&str> for StringFieldValue {
    fn from(value: &str) -> Self {
        Self(value.into())
    }
}

impl From<String> for StringFieldValue {
    fn from(value: String) -> Self {
        Self(value.into())
    }
}

impl From<Vec<&str>> for StringFieldValue {
    fn from(values: Vec<&str>) -> Self {
        Self(values.into())
    }
}

impl From<Vec<String>> for StringFieldValue {
    fn from(values: Vec<String>) -> Self {
        Self(values.into())
    }
}

impl From<Ops> for StringFieldValue {
    fn from(ops: Ops) -> Self {
        Self(FieldValue::Ops(ops))
    }
}

impl From<StringFieldValue> for FieldValue {
    fn from(value: StringFieldValue) -> Self {
        value.0
    }
}

/// Filter value for numeric fields.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberFieldValue(FieldValue);

impl NumberFieldValue {
    pub fn gte(value: impl Into<Scalar>) -> Self {
        Self(FieldValue::Ops(Ops {
            gte: Some(value.into()),
            ..Ops::default()
        }))
    }

    pub fn lte(value: impl Into<Scalar>) -> Self {
        Self(FieldValue::Ops(Ops {
            lte: Some(value.into()),
            ..Ops::default()
        }))
    }

    /// Inclusive range; compiles to `gte` and `lte` clauses in that order.
    pub fn between(low: impl Into<Scalar>, high: impl Into<Scalar>) -> Self {
        Self(FieldValue::Ops(Ops {
            gte: Some(low.into()),
            lte: Some(high.into()),
            ..Ops::default()
        }))
    }

    pub fn one_of<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Scalar>,
    {
        Self(FieldValue::Ops(Ops {
            one_of: Some(values.into_iter().map(Into::into).collect()),
            ..Ops::default()
        }))
    }
}

impl From<i64> for NumberFieldValue {
    fn from(value: i64) -> Self {
        Self(value.into())
    }
}

impl From<i32> for NumberFieldValue {
    fn from(value: i32) -> Self {
        Self(value.into())
    }
}

impl From<u32> for NumberFieldValue {
    fn from(value: u32) -> Self {
        Self(value.into())
    }
}

impl From<f64> for NumberFieldValue {
    fn from(value: f64) -> Self {
        Self(value.into())
    }
}

impl From<Vec<i64>> for NumberFieldValue {
    fn from(values: Vec<i64>) -> Self {
        Self(values.into())
    }
}

impl From<Vec<i32>> for NumberFieldValue {
    fn from(values: Vec<i32>) -> Self {
        Self(values.into())
    }
}

impl From<Ops> for NumberFieldValue {
    fn from(ops: Ops) -> Self {
        Self(FieldValue::Ops(ops))
    }
}

impl From<NumberFieldValue> for FieldValue {
    fn from(value: NumberFieldValue) -> Self {
        value.0
    }
}

/// Filter value for date fields; dates render as quoted ISO `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq)]
pub struct DateFieldValue(FieldValue);

impl DateFieldValue {
    pub fn gte(date: NaiveDate) -> Self {
        Self(FieldValue::Ops(Ops {
            gte: Some(date.into()),
            ..Ops::default()
        }))
    }

    pub fn lte(date: NaiveDate) -> Self {
        Self(FieldValue::Ops(Ops {
            lte: Some(date.into()),
            ..Ops::default()
        }))
    }

    /// Inclusive range; compiles to `gte` and `lte` clauses in that order.
    pub fn between(from: NaiveDate, to: NaiveDate) -> Self {
        Self(FieldValue::Ops(Ops {
            gte: Some(from.into()),
            lte: Some(to.into()),
            ..Ops::default()
        }))
    }
}

impl From<NaiveDate> for DateFieldValue {
    fn from(date: NaiveDate) -> Self {
        Self(date.into())
    }
}

impl From<Vec<NaiveDate>> for DateFieldValue {
    fn from(dates: Vec<NaiveDate>) -> Self {
        Self(dates.into())
    }
}

impl From<Ops> for DateFieldValue {
    fn from(ops: Ops) -> Self {
        Self(FieldValue::Ops(ops))
    }
}

impl From<DateFieldValue> for FieldValue {
    fn from(value: DateFieldValue) -> Self {
        value.0
    }
}
