//! Command-line interface for storm-config-from-env
//!
//! One linear pass: load the existing document, overlay environment
//! overrides, log the report, write the result. All diagnostics go to stderr;
//! the document file is the only primary output.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info, warn, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::keypath;
use crate::merge;
use crate::store;

/// Merge prefixed environment variables into an ordered storm.yaml
///
/// Variables use double underscores for nested keys and commas for lists:
/// STORM_SUPERVISOR__SLOTS__PORTS=6700,6701 becomes
/// supervisor.slots.ports: [6700, 6701].
#[derive(Parser)]
#[command(name = "storm-config-from-env")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory holding the configuration file
    #[arg(long, env = "STORM_CONF_DIR", default_value = "/conf", value_name = "DIR")]
    conf_dir: PathBuf,

    /// Environment variable prefix selecting configuration values
    #[arg(long, default_value = keypath::DEFAULT_PREFIX, value_name = "PREFIX")]
    prefix: String,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long)]
    verbose: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // Wire verbose flag to the tracing log level.
    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::INFO.into())
    };
    let _ = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false)
                .with_timer(fmt::time::ChronoUtc::new("%Y-%m-%d %H:%M:%S UTC".to_string())),
        )
        .with(filter)
        .try_init();

    if let Err(err) = run_merge(&cli) {
        error!("{err:#}");
        std::process::exit(1);
    }
    Ok(())
}

fn run_merge(cli: &Cli) -> Result<()> {
    let config_file = cli.conf_dir.join(store::CONFIG_FILE_NAME);

    let mut doc = store::load_document(&config_file)
        .with_context(|| format!("failed to load existing config {}", config_file.display()))?;

    let report = merge::apply_overrides(&mut doc, std::env::vars(), &cli.prefix);

    if report.candidates == 0 {
        info!("No {}* environment variables found", cli.prefix);
    } else {
        info!("Processing {} configuration(s) from environment variables", report.candidates);
    }

    for skipped in &report.skipped {
        warn!(
            "Skipping '{}' - cannot override {} with {}",
            skipped.path, skipped.existing, skipped.rejected
        );
    }

    if !report.accepted.is_empty() {
        info!("Overridden configuration keys:");
        for key in &report.accepted {
            info!("  - {}", key);
        }
    }

    store::save_document(&config_file, &doc)
        .with_context(|| format!("failed to write config {}", config_file.display()))?;

    info!("Storm configuration written to {}", config_file.display());
    Ok(())
}
