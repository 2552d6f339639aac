//! Run configuration and validation.
//!
//! Resolves command-line arguments into the settings of a single conversion:
//! which file to read, which registered transformation to apply, and where
//! to write the result.

use crate::cli::args::Args;
use crate::constants::OUTPUT_EXTENSION;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Settings for one conversion run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Source CSV export
    pub source_path: PathBuf,

    /// Registered transformation name, e.g. `bank1`
    pub transformation: String,

    /// Directory receiving `<transformation>.csv`
    pub out_dir: PathBuf,

    /// Debug-level logging
    pub verbose: bool,
}

impl Config {
    pub fn new(
        source_path: impl Into<PathBuf>,
        transformation: impl Into<String>,
        out_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            source_path: source_path.into(),
            transformation: transformation.into(),
            out_dir: out_dir.into(),
            verbose: false,
        }
    }

    /// Build the configuration from parsed CLI arguments
    ///
    /// Without `--out-path` the output lands next to the executable.
    pub fn from_args(args: &Args) -> Result<Self> {
        let source_path = args
            .source_path
            .clone()
            .ok_or_else(|| Error::configuration("--source-path is required"))?;
        let transformation = args
            .transformation
            .clone()
            .ok_or_else(|| Error::configuration("--transformation is required"))?;

        let out_dir = match &args.out_path {
            Some(path) => path.clone(),
            None => default_output_dir()?,
        };
        debug!("Output directory: {}", out_dir.display());

        Ok(Self {
            source_path,
            transformation,
            out_dir,
            verbose: args.verbose,
        })
    }

    /// Check that the output directory can receive the converted file
    pub fn validate(&self) -> Result<()> {
        if self.transformation.trim().is_empty() {
            return Err(Error::configuration("Transformation name cannot be empty"));
        }

        if !self.out_dir.exists() {
            return Err(Error::configuration(format!(
                "Output directory does not exist: {}",
                self.out_dir.display()
            )));
        }

        if !self.out_dir.is_dir() {
            return Err(Error::configuration(format!(
                "Output path is not a directory: {}",
                self.out_dir.display()
            )));
        }

        Ok(())
    }

    /// Destination file: `<out_dir>/<transformation>.csv`
    pub fn output_file(&self) -> PathBuf {
        self.out_dir
            .join(format!("{}.{}", self.transformation, OUTPUT_EXTENSION))
    }

    pub fn source_path(&self) -> &Path {
        &self.source_path
    }
}

/// Directory containing the running executable
pub fn default_output_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe()
        .map_err(|e| Error::io("Failed to locate the running executable", e))?;

    exe.parent().map(Path::to_path_buf).ok_or_else(|| {
        Error::configuration(format!(
            "Executable path has no parent directory: {}",
            exe.display()
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    #[test]
    fn test_output_file_name() {
        let config = Config::new("in.csv", "bank2", "/tmp/out");
        assert_eq!(config.output_file(), PathBuf::from("/tmp/out/bank2.csv"));
    }

    #[test]
    fn test_from_args_with_out_path() {
        let args = Args::parse_from([
            "bank-etl",
            "--source-path",
            "exports/bank1.csv",
            "--transformation",
            "bank1",
            "--out-path",
            "converted",
            "--verbose",
        ]);

        let config = Config::from_args(&args).unwrap();
        assert_eq!(config.source_path, PathBuf::from("exports/bank1.csv"));
        assert_eq!(config.transformation, "bank1");
        assert_eq!(config.out_dir, PathBuf::from("converted"));
        assert!(config.verbose);
    }

    #[test]
    fn test_from_args_defaults_to_executable_dir() {
        let args = Args::parse_from([
            "bank-etl",
            "--source-path",
            "in.csv",
            "--transformation",
            "bank1",
        ]);

        let config = Config::from_args(&args).unwrap();
        assert_eq!(config.out_dir, default_output_dir().unwrap());
        assert!(!config.verbose);
    }

    #[test]
    fn test_validate_output_directory() {
        let dir = TempDir::new().unwrap();
        assert!(Config::new("in.csv", "bank1", dir.path()).validate().is_ok());

        let missing = Config::new("in.csv", "bank1", dir.path().join("nope"));
        assert!(missing.validate().unwrap_err().is_configuration());

        let file_path = dir.path().join("file.txt");
        std::fs::write(&file_path, "x").unwrap();
        let not_dir = Config::new("in.csv", "bank1", &file_path);
        assert!(not_dir.validate().unwrap_err().is_configuration());
    }

    #[test]
    fn test_config_serializes() {
        let config = Config::new("in.csv", "bank3", "out");
        let json = serde_json::to_string(&config).unwrap();
        let restored: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, config);
    }
}
