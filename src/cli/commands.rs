//! Command implementations for the bank ETL CLI
//!
//! This module contains the conversion workflow, logging setup and the
//! final report printed after a successful run.

use crate::Result;
use crate::app::adapters::filesystem::{read_and_transform, write_output};
use crate::app::services::stream_registry::StreamRegistry;
use crate::cli::args::Args;
use crate::config::Config;
use crate::constants::{LOG_TARGET, OUTPUT_ATTRIBUTES};
use colored::*;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::{debug, error, info};

/// Outcome of a successful conversion
#[derive(Debug, Clone, Default)]
pub struct ConversionStats {
    /// Transformation that was applied
    pub transformation: String,
    /// Number of data rows written
    pub rows_converted: usize,
    /// Destination file
    pub output_path: PathBuf,
    /// Total processing time
    pub processing_time: Duration,
}

/// Main command runner
///
/// 1. Set up logging
/// 2. Resolve configuration and look up the transformation
/// 3. Convert the source file
/// 4. Print the summary
pub fn run(args: Args) -> Result<ConversionStats> {
    setup_logging(&args)?;
    debug!("Parsed values: {:?}", args);

    let registry = StreamRegistry::with_defaults();

    if args.list {
        print_transformations(&registry);
        return Ok(ConversionStats::default());
    }

    let config = Config::from_args(&args)?;
    let stats = convert(&config, &registry).inspect_err(|e| error!("{}", e))?;

    generate_final_report(&stats);
    info!("Finished successfully");
    Ok(stats)
}

/// Convert one source file with a registered transformation
///
/// The transformation name is resolved before any file is touched, and the
/// destination is written only after every row converted.
pub fn convert(config: &Config, registry: &StreamRegistry) -> Result<ConversionStats> {
    let start_time = Instant::now();

    let transformation = registry.get(&config.transformation)?;
    debug!("Processor details: {:?}", transformation);

    config.validate()?;

    info!(
        "Converting {} with '{}'",
        config.source_path().display(),
        config.transformation
    );
    let lines = read_and_transform(config.source_path(), transformation)?;

    let output_path = config.output_file();
    write_output(&output_path, &lines, OUTPUT_ATTRIBUTES)?;

    Ok(ConversionStats {
        transformation: config.transformation.clone(),
        rows_converted: lines.len(),
        output_path,
        processing_time: start_time.elapsed(),
    })
}

/// Set up structured logging based on CLI arguments
fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}={}", LOG_TARGET, log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_timer(fmt::time::uptime())
                .with_writer(std::io::stderr),
        )
        .try_init()
        .map_err(|e| crate::Error::configuration(format!("Failed to set up logging: {}", e)))?;

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

fn print_transformations(registry: &StreamRegistry) {
    println!("{}", "Available transformations:".bold());
    for name in registry.names() {
        println!("   • {}", name.cyan());
    }
}

/// Generate human-readable report
fn generate_final_report(stats: &ConversionStats) {
    println!("{}", "Conversion complete".green().bold());
    println!("   • Transformation: {}", stats.transformation);
    println!("   • Rows converted: {}", stats.rows_converted);
    println!("   • Output file: {}", stats.output_path.display());
    println!(
        "   • Processing time: {:.2}s",
        stats.processing_time.as_secs_f64()
    );
}
