//! storm-config-from-env: merge STORM_* environment variables into storm.yaml
//!
//! Reads the existing Storm configuration file (if any), overlays typed values
//! derived from prefixed environment variables, and writes the merged document
//! back with key order preserved.

use anyhow::Result;

mod cli;
mod document;
mod keypath;
mod merge;
mod store;
mod value;

fn main() -> Result<()> {
    cli::run()
}
