//! Option values and labels.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A value or label carried by an option: either a number or a string.
///
/// Deserializes untagged, so `1`, `2.5` and `"Jan"` are all valid scalars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Number(f64),
    Text(String),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Integral numbers print without a trailing ".0"
            Scalar::Number(n) if n.fract() == 0.0 && n.is_finite() => write!(f, "{:.0}", n),
            Scalar::Number(n) => write!(f, "{}", n),
            Scalar::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for Scalar {
    fn from(n: f64) -> Self {
        Scalar::Number(n)
    }
}

impl From<i32> for Scalar {
    fn from(n: i32) -> Self {
        Scalar::Number(n as f64)
    }
}

impl From<u32> for Scalar {
    fn from(n: u32) -> Self {
        Scalar::Number(n as f64)
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::Text(s.to_string())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Scalar::Text(s)
    }
}

/// One selectable `(value, label)` pair in a column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PickerOption {
    pub value: Scalar,
    pub label: Scalar,
}

impl PickerOption {
    pub fn new(value: impl Into<Scalar>, label: impl Into<Scalar>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}
