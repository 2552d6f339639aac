//! Row-level input and output plugins
//!
//! Plugins bind a [`Schema`](crate::app::services::schema::Schema) to one
//! direction of the conversion:
//! - [`input`] - splits a raw CSV line and parses each column into a typed value
//! - [`output`] - validates a typed row and serializes it as CSV or JSON text
//!
//! ## Usage
//!
//! ```rust
//! use bank_etl::app::services::plugins::{CsvOutputPlugin, InputPlugin, OutputPlugin};
//! use bank_etl::{FieldType, Schema};
//!
//! # fn example() -> bank_etl::Result<()> {
//! let schema = Schema::new(vec![FieldType::string(), FieldType::int()]);
//! let input = InputPlugin::new(schema.clone());
//! let output = CsvOutputPlugin::with_separator(schema, ";")?;
//!
//! let row = input.process("alice,42")?;
//! assert_eq!(output.output(&row)?, "alice;42");
//! # Ok(())
//! # }
//! ```

pub mod input;
pub mod output;

#[cfg(test)]
mod tests;

// Re-export main types for easy access
pub use input::InputPlugin;
pub use output::{CsvOutputPlugin, JsonOutputPlugin, OutputPlugin};
