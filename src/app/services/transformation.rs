//! Parse → reshape → serialize pipeline for one source format
//!
//! A [`Transformation`] is defined by three parts:
//! - an input plugin that parses a CSV line into typed values and enforces the schema
//! - a reshape function applying source-specific logic such as reordering or merging columns
//! - an output plugin that serializes the reshaped row
//!
//! Every step is fail-fast: the first error aborts the line and is returned unchanged.

use crate::Result;
use crate::app::models::Row;
use crate::app::services::plugins::{InputPlugin, OutputPlugin};
use std::fmt;

/// Row reshaping function applied between parsing and serialization
pub type ReshapeFn = dyn Fn(Row) -> Result<Row> + Send + Sync;

/// Converts one raw input line into one serialized output line
pub struct Transformation {
    input_plugin: InputPlugin,
    reshape: Box<ReshapeFn>,
    output_plugin: Box<dyn OutputPlugin>,
}

impl Transformation {
    pub fn new<F, O>(input_plugin: InputPlugin, reshape: F, output_plugin: O) -> Self
    where
        F: Fn(Row) -> Result<Row> + Send + Sync + 'static,
        O: OutputPlugin + 'static,
    {
        Self {
            input_plugin,
            reshape: Box::new(reshape),
            output_plugin: Box::new(output_plugin),
        }
    }

    /// Run one raw line through parse, reshape and serialize
    pub fn apply(&self, row: &str) -> Result<String> {
        let parsed = self.input_plugin.process(row)?;
        let reshaped = (self.reshape)(parsed)?;
        self.output_plugin.output(&reshaped)
    }
}

impl fmt::Debug for Transformation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transformation")
            .field("input_plugin", &self.input_plugin)
            .field("reshape", &"<fn>")
            .field("output_plugin", &self.output_plugin)
            .finish()
    }
}
