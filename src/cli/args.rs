//! Command-line argument definitions for the bank ETL tool
//!
//! This module defines the CLI interface using the clap derive API.

use crate::constants::{DEFAULT_LOG_LEVEL, VERBOSE_LOG_LEVEL};
use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for the bank export converter
///
/// Converts a bank-specific CSV export into the normalised
/// `date,type,amount,from,to` format using a registered transformation.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "bank-etl",
    version,
    about = "Type-aware, plugin-based converter for bank CSV exports",
    long_about = "Reads a bank-specific CSV export, validates and type-converts every row \
                  against the bank's schema, reshapes it into the common layout and writes \
                  <out-path>/<transformation>.csv. The first invalid row aborts the run and \
                  nothing is written."
)]
pub struct Args {
    /// Path to the source CSV export
    ///
    /// The first line is treated as the bank's header and discarded.
    #[arg(
        long = "source-path",
        value_name = "FILE",
        required_unless_present = "list",
        help = "Path to CSV file"
    )]
    pub source_path: Option<PathBuf>,

    /// Registered transformation name (defines the source layout)
    #[arg(
        long = "transformation",
        value_name = "NAME",
        required_unless_present = "list",
        help = "Bank name (defines transformations)"
    )]
    pub transformation: Option<String>,

    /// Output directory for the converted file
    ///
    /// Defaults to the directory containing the executable.
    #[arg(
        long = "out-path",
        value_name = "DIR",
        help = "Output directory to save csv"
    )]
    pub out_path: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long = "verbose", help = "Set logging to DEBUG")]
    pub verbose: bool,

    /// Print the registered transformation names and exit
    #[arg(long = "list", help = "List available transformations and exit")]
    pub list: bool,
}

impl Args {
    /// Determine the log level based on the verbosity flag
    pub fn get_log_level(&self) -> &'static str {
        if self.verbose {
            VERBOSE_LOG_LEVEL
        } else {
            DEFAULT_LOG_LEVEL
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_required_arguments() {
        let args = Args::try_parse_from([
            "bank-etl",
            "--source-path",
            "bank1.csv",
            "--transformation",
            "bank1",
        ])
        .unwrap();

        assert_eq!(args.source_path, Some(PathBuf::from("bank1.csv")));
        assert_eq!(args.transformation.as_deref(), Some("bank1"));
        assert_eq!(args.out_path, None);
        assert!(!args.verbose);
        assert_eq!(args.get_log_level(), "info");
    }

    #[test]
    fn test_missing_required_arguments_fail() {
        assert!(Args::try_parse_from(["bank-etl", "--source-path", "x.csv"]).is_err());
        assert!(Args::try_parse_from(["bank-etl", "--transformation", "bank1"]).is_err());
    }

    #[test]
    fn test_list_does_not_need_other_arguments() {
        let args = Args::try_parse_from(["bank-etl", "--list"]).unwrap();
        assert!(args.list);
        assert!(args.source_path.is_none());
    }

    #[test]
    fn test_verbose_raises_log_level() {
        let args = Args::try_parse_from([
            "bank-etl",
            "--source-path",
            "x.csv",
            "--transformation",
            "bank2",
            "--verbose",
        ])
        .unwrap();
        assert_eq!(args.get_log_level(), "debug");
    }
}
