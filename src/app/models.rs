//! Data models for bank ETL processing
//!
//! This module contains the typed values produced by field parsers and
//! consumed by reshape functions and output plugins.

use crate::constants::CANONICAL_DATE_FORMAT;
use chrono::NaiveDate;
use serde::{Serialize, Serializer};
use std::fmt;

/// A typed row: one value per schema column, in schema order
pub type Row = Vec<Value>;

// =============================================================================
// Typed Value
// =============================================================================

/// A single typed field value
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Missing value accepted by a nullable field
    Null,
    Int(i64),
    Float(f64),
    Str(String),
    Date(NaiveDate),
}

impl Value {
    /// Returns the integer payload, if any
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the value as a float, widening integers
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(v) => Some(*v),
            Value::Int(v) => Some(*v as f64),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(v) => Some(v),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Short name of the variant for error messages
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "str",
            Value::Date(_) => "date",
        }
    }
}

/// Display form used by the CSV output plugin
///
/// Integral floats keep a trailing `.0` so that amounts stay recognisable
/// as decimals in the output file. Magnitudes of at least 1e16 or below
/// 1e-4 switch to exponent form with a signed, two-digit exponent (`1e+20`).
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Int(v) => write!(f, "{}", v),
            Value::Float(v) => fmt_float(f, *v),
            Value::Str(v) => f.write_str(v),
            Value::Date(v) => write!(f, "{}", v.format(CANONICAL_DATE_FORMAT)),
        }
    }
}

fn fmt_float(f: &mut fmt::Formatter<'_>, v: f64) -> fmt::Result {
    let magnitude = v.abs();
    if !v.is_finite() {
        write!(f, "{}", v)
    } else if magnitude != 0.0 && !(EXPONENT_LOWER..EXPONENT_UPPER).contains(&magnitude) {
        let scientific = format!("{:e}", v);
        let (mantissa, exponent) = scientific.split_once('e').unwrap_or((scientific.as_str(), "0"));
        let exponent: i32 = exponent.parse().unwrap_or(0);
        let sign = if exponent < 0 { '-' } else { '+' };
        write!(f, "{}e{}{:02}", mantissa, sign, exponent.abs())
    } else if v.fract() == 0.0 {
        write!(f, "{:.1}", v)
    } else {
        write!(f, "{}", v)
    }
}

const EXPONENT_LOWER: f64 = 1e-4;
const EXPONENT_UPPER: f64 = 1e16;

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_none(),
            Value::Int(v) => serializer.serialize_i64(*v),
            Value::Float(v) => serializer.serialize_f64(*v),
            Value::Str(v) => serializer.serialize_str(v),
            Value::Date(v) => serializer.collect_str(&v.format(CANONICAL_DATE_FORMAT)),
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

impl From<NaiveDate> for Value {
    fn from(v: NaiveDate) -> Self {
        Value::Date(v)
    }
}
