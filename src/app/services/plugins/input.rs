//! Input plugin converting raw CSV lines into typed rows

use crate::app::models::Row;
use crate::app::services::schema::Schema;
use crate::constants::DEFAULT_SEPARATOR;
use crate::{Error, Result};
use std::fmt;

/// Parses a single CSV line into a type-aware row using its schema
#[derive(Debug, Clone, PartialEq)]
pub struct InputPlugin {
    schema: Schema,
    separator: String,
}

impl InputPlugin {
    /// Create an input plugin splitting on the default separator
    pub fn new(schema: Schema) -> Self {
        Self {
            schema,
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }

    /// Create an input plugin splitting on a custom, non-empty separator
    pub fn with_separator(schema: Schema, separator: impl Into<String>) -> Result<Self> {
        Ok(Self {
            schema,
            separator: checked_separator(separator.into())?,
        })
    }

    /// Parse one raw row
    ///
    /// Fails on an empty row, on a field count that differs from the schema,
    /// or on the first field its parser rejects. No partial row is returned.
    pub fn process(&self, row: &str) -> Result<Row> {
        if row.is_empty() {
            return Err(Error::validation("Must be a valid csv row, found an empty line"));
        }

        let values: Vec<&str> = row.split(self.separator.as_str()).collect();
        self.schema.check_len(values.len())?;

        self.schema
            .iter()
            .zip(values)
            .map(|(field, raw)| field.parse(raw))
            .collect()
    }
}

/// Rejects the empty separator, which would split every character apart
pub(crate) fn checked_separator(separator: String) -> Result<String> {
    if separator.is_empty() {
        return Err(Error::configuration("Field separator cannot be empty"));
    }
    Ok(separator)
}

impl fmt::Display for InputPlugin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "InputPlugin(schema={}, separator={})",
            self.schema, self.separator
        )
    }
}
