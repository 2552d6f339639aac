//! Filesystem adapter for reading source exports and writing converted files
//!
//! Whole file in, whole file out: the source is read into memory, every data
//! line is transformed in order, and only then is the destination written.

use crate::app::services::transformation::Transformation;
use crate::constants::HEADER_SEPARATOR;
use crate::{Error, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Read a CSV export and apply a transformation to every data line
///
/// The first line is the source header and is discarded. The first line that
/// fails aborts the whole read.
pub fn read_and_transform(path: &Path, transformation: &Transformation) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .map_err(|e| Error::io(format!("Failed to read {}", path.display()), e))?;

    let mut lines = content.lines();
    let header = lines.next().ok_or_else(|| {
        Error::validation(format!(
            "Source file {} is empty; expected a header row",
            path.display()
        ))
    })?;
    debug!("Column names of CSV: {}", header);

    let mut processed = Vec::new();
    for (index, line) in lines.enumerate() {
        // header is line 1
        let line_number = index + 2;
        let converted = transformation.apply(line).inspect_err(|e| {
            debug!("Line {} of {} failed: {}", line_number, path.display(), e);
        })?;
        processed.push(converted);
    }

    debug!("Transformed {} rows from {}", processed.len(), path.display());
    Ok(processed)
}

/// Write the header followed by the converted lines, replacing any existing file
pub fn write_output(path: &Path, lines: &[String], header: &[&str]) -> Result<()> {
    let full_content = format!("{}\n{}", header.join(HEADER_SEPARATOR), lines.join("\n"));

    fs::write(path, full_content)
        .map_err(|e| Error::io(format!("Failed to write {}", path.display()), e))?;

    info!("Outputted to {}", path.display());
    Ok(())
}
