//! Output plugins serializing typed rows into single lines of text

use crate::app::models::Value;
use crate::app::services::plugins::input::checked_separator;
use crate::app::services::schema::{FieldType, Schema};
use crate::constants::{DEFAULT_SEPARATOR, OUTPUT_ATTRIBUTES};
use crate::{Error, Result};
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::ser::Formatter;
use std::fmt;
use std::io;

/// Serializes a typed row into one line of output
pub trait OutputPlugin: fmt::Debug + Send + Sync {
    /// Schema the row must match
    fn schema(&self) -> &Schema;

    /// Serialize a row. No trailing newline, no header.
    fn output(&self, row: &[Value]) -> Result<String>;

    /// Basic validation shared by all output formats
    fn validate(&self, row: &[Value]) -> Result<()> {
        self.schema().check_len(row.len())
    }
}

// =============================================================================
// CSV
// =============================================================================

/// Writes rows as separator-joined display strings
#[derive(Debug, Clone, PartialEq)]
pub struct CsvOutputPlugin {
    schema: Schema,
    separator: String,
}

impl CsvOutputPlugin {
    pub fn new(schema: Schema) -> Self {
        Self {
            schema,
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }

    /// Create a CSV plugin joining on a custom, non-empty separator
    pub fn with_separator(schema: Schema, separator: impl Into<String>) -> Result<Self> {
        Ok(Self {
            schema,
            separator: checked_separator(separator.into())?,
        })
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }
}

impl OutputPlugin for CsvOutputPlugin {
    fn schema(&self) -> &Schema {
        &self.schema
    }

    fn output(&self, row: &[Value]) -> Result<String> {
        self.validate(row)?;

        Ok(row
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(&self.separator))
    }
}

impl fmt::Display for CsvOutputPlugin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CsvOutputPlugin(schema={}, separator={})",
            self.schema, self.separator
        )
    }
}

// =============================================================================
// JSON
// =============================================================================

/// Writes rows as one JSON object keyed by the output attribute names
#[derive(Debug, Clone, PartialEq)]
pub struct JsonOutputPlugin {
    schema: Schema,
    attributes: Vec<String>,
}

impl JsonOutputPlugin {
    /// Create a JSON plugin keyed by the standard output attributes
    pub fn new(schema: Schema) -> Result<Self> {
        Self::with_attributes(schema, OUTPUT_ATTRIBUTES.iter().copied())
    }

    /// Create a JSON plugin with custom attribute names, one per schema column
    pub fn with_attributes<I, S>(schema: Schema, attributes: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let attributes: Vec<String> = attributes.into_iter().map(Into::into).collect();
        if attributes.len() != schema.len() {
            return Err(Error::configuration(format!(
                "JSON output needs one attribute name per column: got {} names for {} columns",
                attributes.len(),
                schema.len()
            )));
        }

        Ok(Self { schema, attributes })
    }
}

impl OutputPlugin for JsonOutputPlugin {
    fn schema(&self) -> &Schema {
        &self.schema
    }

    fn output(&self, row: &[Value]) -> Result<String> {
        self.validate(row)?;

        let mut entries = Vec::with_capacity(row.len());
        for ((name, field), value) in self.attributes.iter().zip(self.schema.iter()).zip(row) {
            entries.push((name.as_str(), render_for_json(field, value)?));
        }

        let mut buffer = Vec::new();
        let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, SpacedFormatter);
        JsonRecord(&entries)
            .serialize(&mut serializer)
            .map_err(|e| Error::serialization("Failed to serialize row as JSON", e))?;

        String::from_utf8(buffer).map_err(|e| {
            Error::validation(format!("JSON output is not valid UTF-8: {}", e))
        })
    }
}

impl fmt::Display for JsonOutputPlugin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "JsonOutputPlugin(schema={})", self.schema)
    }
}

/// Dates become their string form; everything else is written as-is
fn render_for_json(field: &FieldType, value: &Value) -> Result<Value> {
    match value {
        Value::Date(_) => field.render(value),
        Value::Float(v) if !v.is_finite() => Err(Error::validation(format!(
            "Float value {} has no JSON representation",
            v
        ))),
        _ => Ok(value.clone()),
    }
}

/// Ordered key/value pairs serialized as a JSON object
struct JsonRecord<'a>(&'a [(&'a str, Value)]);

impl Serialize for JsonRecord<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in self.0 {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Single-line JSON with a space after every `:` and `,`
struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}
