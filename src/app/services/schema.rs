//! Typed field parsers and row schemas
//!
//! A [`FieldType`] converts one raw CSV field into a typed [`Value`] and
//! enforces nullability and membership rules. A [`Schema`] is the ordered,
//! immutable list of field types describing every column of a row.
//!
//! Date fields work in both directions: [`FieldType::parse`] turns text into
//! a calendar date, while [`FieldType::render`] turns an already-typed date
//! back into its canonical string so one schema can describe both the parsed
//! input and the stringified output.

use crate::app::models::Value;
use crate::constants::CANONICAL_DATE_FORMAT;
use crate::{Error, Result};
use chrono::NaiveDate;
use std::collections::BTreeSet;
use std::fmt;

/// Semantic type of a column
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Int,
    Str,
    Float,
    /// Calendar date; `None` means the canonical `%Y-%m-%d` format
    Date { format: Option<String> },
    /// Opaque string restricted to a fixed set of allowed values
    Enum { allowed: BTreeSet<String> },
}

/// Single-column type and validation rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldType {
    kind: FieldKind,
    nullable: bool,
}

impl FieldType {
    fn new(kind: FieldKind) -> Self {
        Self {
            kind,
            nullable: false,
        }
    }

    pub fn int() -> Self {
        Self::new(FieldKind::Int)
    }

    pub fn string() -> Self {
        Self::new(FieldKind::Str)
    }

    pub fn float() -> Self {
        Self::new(FieldKind::Float)
    }

    /// Date field parsed with a chrono strftime-style format, e.g. `"%d %b %Y"`
    pub fn date(format: impl Into<String>) -> Self {
        Self::new(FieldKind::Date {
            format: Some(format.into()),
        })
    }

    /// Date field using the canonical `YYYY-MM-DD` format
    pub fn canonical_date() -> Self {
        Self::new(FieldKind::Date { format: None })
    }

    /// Enumeration field accepting only the given values
    pub fn enumeration<I, S>(allowed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(FieldKind::Enum {
            allowed: allowed.into_iter().map(Into::into).collect(),
        })
    }

    /// Marks the field as accepting missing values
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    /// Parse a raw field into a typed value
    ///
    /// Empty input yields [`Value::Null`] for nullable fields and a
    /// validation error otherwise.
    pub fn parse(&self, raw: &str) -> Result<Value> {
        if raw.is_empty() {
            return self.missing();
        }

        match &self.kind {
            FieldKind::Int => raw.trim().parse::<i64>().map(Value::Int).map_err(|e| {
                Error::validation(format!("'{}' is not numeric: expected an integer ({})", raw, e))
            }),
            FieldKind::Float => {
                let value = raw.trim().parse::<f64>().map_err(|e| {
                    Error::validation(format!("'{}' is not numeric: expected a float ({})", raw, e))
                })?;
                if !value.is_finite() {
                    return Err(Error::validation(format!(
                        "'{}' is not numeric: expected a finite float",
                        raw
                    )));
                }
                Ok(Value::Float(value))
            }
            FieldKind::Str => Ok(Value::Str(raw.to_string())),
            FieldKind::Date { .. } => {
                let format = self.date_format();
                NaiveDate::parse_from_str(raw, format)
                    .map(Value::Date)
                    .map_err(|e| {
                        Error::validation(format!(
                            "Date '{}' format mismatch: expected '{}' ({})",
                            raw, format, e
                        ))
                    })
            }
            FieldKind::Enum { allowed } => {
                if allowed.contains(raw) {
                    Ok(Value::Str(raw.to_string()))
                } else {
                    Err(Error::validation(format!(
                        "'{}' not in allowed set {{{}}}",
                        raw,
                        allowed.iter().cloned().collect::<Vec<_>>().join(", ")
                    )))
                }
            }
        }
    }

    /// Convert an already-typed value into its output form
    ///
    /// Dates on a date field become their canonical string. Null follows the
    /// nullability rule; every other value is returned unchanged.
    pub fn render(&self, value: &Value) -> Result<Value> {
        match (value, &self.kind) {
            (Value::Null, _) => self.missing(),
            (Value::Date(date), FieldKind::Date { .. }) => Ok(Value::Str(
                date.format(CANONICAL_DATE_FORMAT).to_string(),
            )),
            _ => Ok(value.clone()),
        }
    }

    fn missing(&self) -> Result<Value> {
        if self.nullable {
            Ok(Value::Null)
        } else {
            Err(Error::validation(format!(
                "missing required value for {}; set nullable to accept it",
                self
            )))
        }
    }

    fn date_format(&self) -> &str {
        match &self.kind {
            FieldKind::Date {
                format: Some(format),
            } => format.as_str(),
            _ => CANONICAL_DATE_FORMAT,
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            FieldKind::Int => write!(f, "IntType(nullable={})", self.nullable),
            FieldKind::Str => write!(f, "StrType(nullable={})", self.nullable),
            FieldKind::Float => write!(f, "FloatType(nullable={})", self.nullable),
            FieldKind::Date { .. } => write!(
                f,
                "DateType(fmt={}, nullable={})",
                self.date_format(),
                self.nullable
            ),
            FieldKind::Enum { allowed } => write!(
                f,
                "EnumType(valid_values={:?}, nullable={})",
                allowed, self.nullable
            ),
        }
    }
}

// =============================================================================
// Schema
// =============================================================================

/// Ordered list of field types, one per column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    fields: Vec<FieldType>,
}

impl Schema {
    pub fn new(fields: Vec<FieldType>) -> Self {
        Self { fields }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldType> {
        self.fields.iter()
    }

    /// Fails unless a row of `row_len` values matches this schema's width
    pub fn check_len(&self, row_len: usize) -> Result<()> {
        if row_len != self.fields.len() {
            return Err(Error::validation(format!(
                "Row length {} does not match schema length {}",
                row_len,
                self.fields.len()
            )));
        }
        Ok(())
    }
}

impl From<Vec<FieldType>> for Schema {
    fn from(fields: Vec<FieldType>) -> Self {
        Self::new(fields)
    }
}

impl<'a> IntoIterator for &'a Schema {
    type Item = &'a FieldType;
    type IntoIter = std::slice::Iter<'a, FieldType>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, field) in self.fields.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", field)?;
        }
        f.write_str(")")
    }
}
