//! Registry of named transformations
//!
//! Maps a source identifier such as `"bank1"` to a fully configured
//! [`Transformation`]. The registry is an ordinary value built at startup and
//! handed to the driver; adding a source means registering its name together
//! with an input schema, reshape function and output plugin.

use crate::app::services::banks;
use crate::app::services::transformation::Transformation;
use crate::{Error, Result};
use std::collections::BTreeMap;
use tracing::debug;

#[derive(Debug, Default)]
pub struct StreamRegistry {
    streams: BTreeMap<String, Transformation>,
}

impl StreamRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every built-in bank source
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register("bank1", banks::bank1_transformation());
        registry.register("bank2", banks::bank2_transformation());
        registry.register("bank3", banks::bank3_transformation());
        registry
    }

    /// Register a transformation, replacing any previous one with the same name
    pub fn register(&mut self, name: impl Into<String>, transformation: Transformation) {
        let name = name.into();
        debug!("Registering transformation '{}'", name);
        self.streams.insert(name, transformation);
    }

    /// Look up a transformation by name
    pub fn get(&self, name: &str) -> Result<&Transformation> {
        self.streams.get(name).ok_or_else(|| {
            Error::configuration(format!(
                "Transformation '{}' is not registered. Available names: {}",
                name,
                self.names().join(", ")
            ))
        })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.streams.contains_key(name)
    }

    /// Registered names in sorted order
    pub fn names(&self) -> Vec<&str> {
        self.streams.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.streams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.streams.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::services::plugins::{CsvOutputPlugin, InputPlugin};
    use crate::app::services::schema::{FieldType, Schema};

    #[test]
    fn test_defaults_contain_all_banks() {
        let registry = StreamRegistry::with_defaults();
        assert_eq!(registry.names(), vec!["bank1", "bank2", "bank3"]);
        assert!(registry.contains("bank2"));
        assert!(registry.get("bank3").is_ok());
    }

    #[test]
    fn test_unknown_name_is_configuration_error() {
        let registry = StreamRegistry::with_defaults();
        let err = registry.get("bank9").unwrap_err();

        assert!(err.is_configuration());
        let message = err.to_string();
        assert!(message.contains("bank9"));
        assert!(message.contains("bank1, bank2, bank3"));
    }

    #[test]
    fn test_register_custom_source() {
        let schema = Schema::new(vec![FieldType::string()]);
        let mut registry = StreamRegistry::new();
        assert!(registry.is_empty());

        registry.register(
            "echo",
            Transformation::new(
                InputPlugin::new(schema.clone()),
                Ok,
                CsvOutputPlugin::new(schema),
            ),
        );

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("echo").unwrap().apply("hello").unwrap(), "hello");
    }
}
