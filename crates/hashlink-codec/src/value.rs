//! Parameter values.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single parameter value.
///
/// Values are either text or numbers. Both are stringified on encode; the
/// decoder only ever produces [`ParamValue::Text`], except for the bare-name
/// fallback which yields `Number(0.0)`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    /// A numeric value (camera coordinates, indices, ...).
    Number(f64),
    /// A text value.
    Text(String),
}

impl ParamValue {
    /// Returns `true` if the value is truthy.
    ///
    /// Empty text, zero and NaN are falsy. Falsy values are encoded as a bare
    /// key when names are included.
    pub fn is_truthy(&self) -> bool {
        match self {
            ParamValue::Number(n) => *n != 0.0 && !n.is_nan(),
            ParamValue::Text(s) => !s.is_empty(),
        }
    }

    /// Returns the text if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ParamValue::Text(s) => Some(s),
            ParamValue::Number(_) => None,
        }
    }

    /// Returns the number if this is a numeric value.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            ParamValue::Number(n) => Some(*n),
            ParamValue::Text(_) => None,
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Text(s) => f.write_str(s),
            ParamValue::Number(n) if n.is_nan() => f.write_str("NaN"),
            ParamValue::Number(n) if n.is_infinite() => {
                f.write_str(if *n > 0.0 { "Infinity" } else { "-Infinity" })
            }
            // Covers -0 as well.
            ParamValue::Number(n) if *n == 0.0 => f.write_str("0"),
            ParamValue::Number(n) => write_number(f, *n),
        }
    }
}

/// Finite, non-zero numbers: plain decimal inside `[1e-6, 1e21)`, otherwise
/// shortest digits with an `e+N` / `e-N` exponent (`1e+21`, `1.5e-7`).
fn write_number(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    let magnitude = n.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return write!(f, "{n}");
    }
    let exp = format!("{n:e}");
    match exp.split_once('e') {
        Some((mantissa, power)) if !power.starts_with('-') => write!(f, "{mantissa}e+{power}"),
        _ => f.write_str(&exp),
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        ParamValue::Text(s.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(s: String) -> Self {
        ParamValue::Text(s)
    }
}

impl From<f64> for ParamValue {
    fn from(n: f64) -> Self {
        ParamValue::Number(n)
    }
}

impl From<i32> for ParamValue {
    fn from(n: i32) -> Self {
        ParamValue::Number(f64::from(n))
    }
}

impl From<u32> for ParamValue {
    fn from(n: u32) -> Self {
        ParamValue::Number(f64::from(n))
    }
}
