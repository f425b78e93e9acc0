//! # CLI Argument Definitions
//!
//! Command-line interface of the launcher, defined with `clap`.

use clap::Parser;
use std::path::PathBuf;

/// Provision the prysk virtualenv and run the cram integration tests.
#[derive(Debug, Parser)]
#[command(name = "cram")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Provision the prysk virtualenv and run the cram integration tests")]
pub struct Cli {
    /// Tests to run, relative to the tests directory (e.g. 'run/dry-run.t'). Runs all when omitted
    pub tests: Option<String>,

    /// Directory holding the venv and the tests directory
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Config file (defaults to 'cram.toml' in the root, if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print the setup steps and runner command without executing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Reuse an existing venv instead of provisioning it
    #[arg(long)]
    pub skip_setup: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Log filter directives (e.g. 'cram_launcher=debug'); overrides RUST_LOG
    #[arg(long)]
    pub log_filter: Option<String>,

    /// Also write logs to rolling files in this directory
    #[arg(long)]
    pub log_dir: Option<PathBuf>,

    /// Write file logs as JSON lines
    #[arg(long, requires = "log_dir")]
    pub json_logs: bool,
}
