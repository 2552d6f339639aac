//! Test utilities for input and output plugin testing
//!
//! Provides the shared schemas and rows used across the plugin test modules.

use crate::app::models::{Row, Value};
use crate::app::services::schema::{FieldType, Schema};
use chrono::NaiveDate;

mod output_tests;

/// Input schema of a source exporting euro and cents separately
pub fn split_amount_schema() -> Schema {
    Schema::new(vec![
        FieldType::date("%d %b %Y"),
        FieldType::enumeration(["add", "remove"]),
        FieldType::int(),
        FieldType::int(),
        FieldType::int(),
        FieldType::int(),
    ])
}

/// Normalised output schema: date, type, amount, from, to
pub fn output_schema() -> Schema {
    Schema::new(vec![
        FieldType::canonical_date(),
        FieldType::enumeration(["add", "remove"]),
        FieldType::float(),
        FieldType::int(),
        FieldType::int(),
    ])
}

pub fn sample_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2019, 10, 6).unwrap()
}

/// A typed row matching [`output_schema`]
pub fn sample_output_row() -> Row {
    vec![
        Value::Date(sample_date()),
        Value::from("add"),
        Value::Float(1060.2),
        Value::Int(198),
        Value::Int(188),
    ]
}
