/// Value model for search criteria
use chrono::NaiveDate;
use serde::Deserialize;

/// A single scalar value attached to a criteria field.
///
/// Deserialization is untagged so dynamic (JSON) criteria can use plain
/// literals; integers are tried before floats so `1` stays `Int(1)`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Str(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::Str(value)
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Int(value)
    }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Scalar::Int(i64::from(value))
    }
}

impl From<u32> for Scalar {
    fn from(value: u32) -> Self {
        Scalar::Int(i64::from(value))
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Float(value)
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Scalar::Bool(value)
    }
}

impl From<NaiveDate> for Scalar {
    fn from(value: NaiveDate) -> Self {
        Scalar::Str(value.format("%Y-%m-%d").to_string())
    }
}

/// Operator set for one field.
///
/// Each present operator contributes one clause; multiple present
/// operators are ANDed in the fixed order `eq`, `like`, `gte`, `lte`,
/// `in`. Unrecognized keys in dynamic input are dropped during
/// deserialization rather than failing the whole object, and an operator
/// set with nothing present compiles to no clause at all.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Ops {
    #[serde(default)]
    pub eq: Option<Scalar>,
    #[serde(default)]
    pub like: Option<String>,
    #[serde(default)]
    pub gte: Option<Scalar>,
    #[serde(default)]
    pub lte: Option<Scalar>,
    #[serde(default, rename = "in")]
    pub one_of: Option<Vec<Scalar>>,
}

impl Ops {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.eq.is_none()
            && self.like.is_none()
            && self.gte.is_none()
            && self.lte.is_none()
            && self.one_of.is_none()
    }
}

/// The value attached to one criteria field: a scalar meaning equality, a
/// list meaning any-of (compiled to a parenthesized OR group), or an
/// operator set.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Scalar(Scalar),
    List(Vec<Scalar>),
    Ops(Ops),
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Scalar(value.into())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Scalar(value.into())
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Scalar(value.into())
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Scalar(value.into())
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        FieldValue::Scalar(value.into())
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Scalar(value.into())
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Scalar(value.into())
    }
}

impl From<NaiveDate> for FieldValue {
    fn from(value: NaiveDate) -> Self {
        FieldValue::Scalar(value.into())
    }
}

impl From<Scalar> for FieldValue {
    fn from(value: Scalar) -> Self {
        FieldValue::Scalar(value)
    }
}

impl From<Ops> for FieldValue {
    fn from(value: Ops) -> Self {
        FieldValue::Ops(value)
    }
}

impl<T: Into<Scalar>> From<Vec<T>> for FieldValue {
    fn from(values: Vec<T>) -> Self {
        FieldValue::List(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Scalar>, const N: usize> From<[T; N]> for FieldValue {
    fn from(values: [T; N]) -> Self {
        FieldValue::List(values.into_iter().map(Into::into).collect())
    }
}
