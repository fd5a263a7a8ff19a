//! Attribute values and lookup results.

use serde::Serialize;
use std::fmt;

/// Display text used for a key that is absent on one side of a comparison.
pub const MISSING_DISPLAY: &str = "<missing>";

/// A single attribute value after best-effort coercion.
///
/// Equality compares the tag as well as the payload: `Integer(1)`,
/// `Float(1.0)` and `String("1")` are three distinct values.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Integer(u64),
    Float(f64),
    String(String),
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::Integer(n) => write!(f, "{}", n),
            // Whole floats keep their decimal point so `1.0` never reads as an integer.
            AttributeValue::Float(x) if x.is_finite() && x.fract() == 0.0 => write!(f, "{:.1}", x),
            AttributeValue::Float(x) => write!(f, "{}", x),
            AttributeValue::String(s) => f.write_str(s),
        }
    }
}

impl From<u64> for AttributeValue {
    fn from(n: u64) -> Self {
        AttributeValue::Integer(n)
    }
}

impl From<f64> for AttributeValue {
    fn from(x: f64) -> Self {
        AttributeValue::Float(x)
    }
}

impl From<&str> for AttributeValue {
    fn from(s: &str) -> Self {
        AttributeValue::String(s.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(s: String) -> Self {
        AttributeValue::String(s)
    }
}

/// The value found for a key on one side of a comparison.
///
/// `Missing` is a distinct case, so a record that literally carries the text
/// `<missing>` never compares equal to an absent key.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Present(AttributeValue),
    Missing,
}

impl FieldValue {
    pub fn is_missing(&self) -> bool {
        matches!(self, FieldValue::Missing)
    }
}

impl From<Option<&AttributeValue>> for FieldValue {
    fn from(value: Option<&AttributeValue>) -> Self {
        value.cloned().map_or(FieldValue::Missing, FieldValue::Present)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Present(v) => fmt::Display::fmt(v, f),
            FieldValue::Missing => f.write_str(MISSING_DISPLAY),
        }
    }
}
