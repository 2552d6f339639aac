//! Source definitions for the supported bank exports
//!
//! Every bank exports the same information in its own layout. This module
//! declares each input schema, the shared output schema, and the reshape
//! functions that map a bank's typed row onto `date, type, amount, from, to`.
//!
//! | bank  | columns                                   | date example |
//! |-------|-------------------------------------------|--------------|
//! | bank1 | timestamp, type, amount, from, to         | `Oct 1 2019` |
//! | bank2 | date, transaction, amounts, to, from      | `03-10-2019` |
//! | bank3 | date_readable, type, euro, cents, to, from| `5 Oct 2019` |

use crate::app::models::{Row, Value};
use crate::app::services::plugins::{CsvOutputPlugin, InputPlugin};
use crate::app::services::schema::{FieldType, Schema};
use crate::app::services::transformation::Transformation;
use crate::constants::TRANSACTION_TYPES;
use crate::{Error, Result};

fn transaction_type() -> FieldType {
    FieldType::enumeration(TRANSACTION_TYPES.iter().copied())
}

/// Normalised output schema: date, type, amount, from, to
pub fn output_schema() -> Schema {
    Schema::new(vec![
        FieldType::canonical_date(),
        transaction_type(),
        FieldType::float(),
        FieldType::int(),
        FieldType::int(),
    ])
}

pub fn bank1_schema() -> Schema {
    Schema::new(vec![
        FieldType::date("%b %d %Y"),
        transaction_type(),
        FieldType::float(),
        FieldType::int(),
        FieldType::int(),
    ])
}

pub fn bank2_schema() -> Schema {
    Schema::new(vec![
        FieldType::date("%d-%m-%Y"),
        transaction_type(),
        FieldType::float(),
        FieldType::int(),
        FieldType::int(),
    ])
}

pub fn bank3_schema() -> Schema {
    Schema::new(vec![
        FieldType::date("%d %b %Y"),
        transaction_type(),
        FieldType::int(),
        FieldType::int(),
        FieldType::int(),
        FieldType::int(),
    ])
}

/// bank1 already uses the output layout
pub fn bank1_reshape(row: Row) -> Result<Row> {
    Ok(row)
}

/// bank2 lists `to` before `from`
pub fn bank2_reshape(mut row: Row) -> Result<Row> {
    if row.len() < 5 {
        return Err(Error::validation(format!(
            "bank2 row needs 5 values, found {}",
            row.len()
        )));
    }
    row.swap(3, 4);
    Ok(row)
}

/// bank3 splits the amount into euro and cents and lists `to` before `from`
pub fn bank3_reshape(row: Row) -> Result<Row> {
    let [date, kind, euro, cents, to, from]: [Value; 6] = row.try_into().map_err(|row: Row| {
        Error::validation(format!("bank3 row needs 6 values, found {}", row.len()))
    })?;

    let amount = merge_amount(&euro, &cents)?;
    Ok(vec![date, kind, Value::Float(amount), from, to])
}

fn merge_amount(euro: &Value, cents: &Value) -> Result<f64> {
    match (euro.as_int(), cents.as_int()) {
        (Some(euro), Some(cents)) => Ok(euro as f64 + cents as f64 / 100.0),
        _ => Err(Error::validation(format!(
            "Cannot merge amount from {} euro and {} cents; both must be integers",
            euro.kind_name(),
            cents.kind_name()
        ))),
    }
}

pub fn bank1_transformation() -> Transformation {
    Transformation::new(
        InputPlugin::new(bank1_schema()),
        bank1_reshape,
        CsvOutputPlugin::new(output_schema()),
    )
}

pub fn bank2_transformation() -> Transformation {
    Transformation::new(
        InputPlugin::new(bank2_schema()),
        bank2_reshape,
        CsvOutputPlugin::new(output_schema()),
    )
}

pub fn bank3_transformation() -> Transformation {
    Transformation::new(
        InputPlugin::new(bank3_schema()),
        bank3_reshape,
        CsvOutputPlugin::new(output_schema()),
    )
}
