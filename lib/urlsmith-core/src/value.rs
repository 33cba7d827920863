//! Parameter value model.
//!
//! OpenAPI parameter values are at most one level deep: a scalar, a sequence
//! of scalars, or a flat mapping of string keys to scalars. [`Scalar`] and
//! [`ParamValue`] make that shape explicit so every encoder dispatches on a
//! tagged variant instead of probing runtime types. Deeper nesting is
//! unrepresentable in the typed API; the [`ParamValue::from_json`] boundary
//! rejects it with [`Error::UnsupportedValue`](crate::Error::UnsupportedValue).

use indexmap::IndexMap;

use crate::{Error, Result};

/// A single scalar parameter value.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    /// String value.
    String(String),
    /// Numeric value (integer or float, rendered as JSON would).
    Number(serde_json::Number),
    /// Boolean value.
    Bool(bool),
    /// Absent value; contributes an empty string and is skipped by encoders.
    Null,
}

impl Scalar {
    /// Returns `true` if this scalar is [`Scalar::Null`].
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl std::fmt::Display for Scalar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::String(s) => write!(f, "{s}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Null => Ok(()),
        }
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Self::Number(serde_json::Number::from(value))
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Self::Number(serde_json::Number::from(value))
    }
}

impl From<u32> for Scalar {
    fn from(value: u32) -> Self {
        Self::Number(serde_json::Number::from(value))
    }
}

impl From<u64> for Scalar {
    fn from(value: u64) -> Self {
        Self::Number(serde_json::Number::from(value))
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        // Non-finite floats have no JSON representation; treat as absent.
        serde_json::Number::from_f64(value).map_or(Self::Null, Self::Number)
    }
}

/// A parameter value: scalar, sequence of scalars, or flat mapping.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    /// Single scalar value.
    Scalar(Scalar),
    /// Sequence of scalars.
    List(Vec<Scalar>),
    /// Flat mapping of string keys to scalars, in insertion order.
    Map(IndexMap<String, Scalar>),
}

/// Insertion-ordered mapping of parameter names to values.
pub type ParamMap = IndexMap<String, ParamValue>;

impl ParamValue {
    /// Returns `true` if this value is an absent scalar.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Scalar(Scalar::Null))
    }

    /// Convert a JSON value into a [`ParamValue`].
    ///
    /// `name` is only used for error reporting.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedValue`] if the JSON value nests arrays or
    /// objects more than one level deep (e.g., an array of objects).
    pub fn from_json(name: &str, value: &serde_json::Value) -> Result<Self> {
        use serde_json::Value;
        match value {
            Value::Null => Ok(Self::Scalar(Scalar::Null)),
            Value::Bool(b) => Ok(Self::Scalar(Scalar::Bool(*b))),
            Value::Number(n) => Ok(Self::Scalar(Scalar::Number(n.clone()))),
            Value::String(s) => Ok(Self::Scalar(Scalar::String(s.clone()))),
            Value::Array(items) => items
                .iter()
                .enumerate()
                .map(|(i, item)| {
                    scalar_from_json(item).ok_or_else(|| Error::unsupported_value(format!("{name}[{i}]")))
                })
                .collect::<Result<Vec<_>>>()
                .map(Self::List),
            Value::Object(fields) => fields
                .iter()
                .map(|(key, field)| {
                    scalar_from_json(field)
                        .map(|scalar| (key.clone(), scalar))
                        .ok_or_else(|| Error::unsupported_value(format!("{name}.{key}")))
                })
                .collect::<Result<IndexMap<_, _>>>()
                .map(Self::Map),
        }
    }
}

fn scalar_from_json(value: &serde_json::Value) -> Option<Scalar> {
    use serde_json::Value;
    match value {
        Value::Null => Some(Scalar::Null),
        Value::Bool(b) => Some(Scalar::Bool(*b)),
        Value::Number(n) => Some(Scalar::Number(n.clone())),
        Value::String(s) => Some(Scalar::String(s.clone())),
        Value::Array(_) | Value::Object(_) => None,
    }
}

/// Convert a JSON object into a [`ParamMap`].
///
/// # Errors
///
/// Returns [`Error::UnsupportedValue`] if `value` is not a JSON object, or
/// if any member nests arrays/objects more than one level deep.
pub fn params_from_json(value: &serde_json::Value) -> Result<ParamMap> {
    let Some(fields) = value.as_object() else {
        return Err(Error::unsupported_value("parameters"));
    };
    fields
        .iter()
        .map(|(name, field)| ParamValue::from_json(name, field).map(|v| (name.clone(), v)))
        .collect()
}

impl From<Scalar> for ParamValue {
    fn from(value: Scalar) -> Self {
        Self::Scalar(value)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Scalar(value.into())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Scalar(value.into())
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        Self::Scalar(value.into())
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        Self::Scalar(value.into())
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        Self::Scalar(value.into())
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        Self::Scalar(value.into())
    }
}

impl From<u64> for ParamValue {
    fn from(value: u64) -> Self {
        Self::Scalar(value.into())
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        Self::Scalar(value.into())
    }
}

impl From<Vec<Scalar>> for ParamValue {
    fn from(value: Vec<Scalar>) -> Self {
        Self::List(value)
    }
}

impl From<IndexMap<String, Scalar>> for ParamValue {
    fn from(value: IndexMap<String, Scalar>) -> Self {
        Self::Map(value)
    }
}
