//! Bank ETL Library
//!
//! A Rust library for converting bank-specific CSV exports into a single
//! normalised transaction format.
//!
//! This library provides tools for:
//! - Declaring typed column schemas with nullability and validation rules
//! - Parsing raw CSV rows into typed values through input plugins
//! - Reshaping rows per source bank (reordering and merging columns)
//! - Serializing rows as CSV or JSON through output plugins
//! - Reading a source export and writing the converted file

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod banks;
        pub mod plugins;
        pub mod schema;
        pub mod stream_registry;
        pub mod transformation;
    }
    pub mod adapters {
        pub mod filesystem;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{Row, Value};
pub use app::services::schema::{FieldKind, FieldType, Schema};
pub use app::services::stream_registry::StreamRegistry;
pub use app::services::transformation::Transformation;
pub use config::Config;

/// Result type alias for bank ETL operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for bank ETL operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A field value, row length or enum member failed validation
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// Invalid configuration such as an unregistered transformation
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization failed
    #[error("Serialization error: {message}")]
    Serialization {
        message: String,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a serialization error with context
    pub fn serialization(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialization {
            message: message.into(),
            source,
        }
    }

    /// True for errors caused by bad input data
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// True for errors caused by bad configuration
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration { .. })
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization {
            message: "JSON serialization failed".to_string(),
            source: error,
        }
    }
}
