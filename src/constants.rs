//! Application constants for the bank ETL tool
//!
//! This module contains the output format definition, default values
//! and shared literals used throughout the converter.

// =============================================================================
// Output Format
// =============================================================================

/// Column names of the normalised output, in order
pub const OUTPUT_ATTRIBUTES: &[&str] = &["date", "type", "amount", "from", "to"];

/// Separator used for the output header line
pub const HEADER_SEPARATOR: &str = ",";

/// Extension of the converted file written to the output directory
pub const OUTPUT_EXTENSION: &str = "csv";

// =============================================================================
// Parsing Defaults
// =============================================================================

/// Default field separator for input and CSV output plugins
pub const DEFAULT_SEPARATOR: &str = ",";

/// Date format used when a date field has no explicit format, and the
/// canonical string form of dates in the output
pub const CANONICAL_DATE_FORMAT: &str = "%Y-%m-%d";

/// Allowed values of the transaction type column
pub const TRANSACTION_TYPES: &[&str] = &["add", "remove"];

// =============================================================================
// Logging
// =============================================================================

/// Tracing target prefix used for the default log filter
pub const LOG_TARGET: &str = "bank_etl";

/// Default log level without `--verbose`
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Log level with `--verbose`
pub const VERBOSE_LOG_LEVEL: &str = "debug";
