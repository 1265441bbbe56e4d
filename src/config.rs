use std::path::PathBuf;

use clap::Parser;
use serde::Serialize;
use tracing::info;

use crate::error::Result;
use crate::validate::{self, DayArg};
use crate::vocab::Vocabulary;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Create,
    #[default]
    Read,
}

#[derive(Debug, Parser, Clone)]
#[command(
    name = "harmonogram",
    version,
    about = "Generate or read a month/day/time-of-day catalog of CSV records",
    long_about = None
)]
pub struct Cli {
    /// Months to include, e.g. styczen luty marzec
    #[arg(short = 'm', long, num_args = 1.., required = true)]
    pub months: Vec<String>,

    /// One day or day range per month, e.g. pn-wt pt
    #[arg(short = 'd', long, num_args = 1.., required = true)]
    pub days: Vec<String>,

    /// Time of day per generated day (r = morning, w = evening); morning once exhausted
    #[arg(short = 't', long = "time", num_args = 0..)]
    pub time: Vec<String>,

    /// Create record files
    #[arg(short = 'c', long, conflicts_with = "read")]
    pub create: bool,

    /// Read record files and sum durations (default)
    #[arg(short = 'r', long)]
    pub read: bool,

    /// Directory the catalog is rooted at
    #[arg(long, env = "HARMONOGRAM_ROOT", default_value = ".")]
    pub root: PathBuf,

    /// Seed for record generation; random when omitted
    #[arg(long, env = "HARMONOGRAM_SEED")]
    pub seed: Option<u64>,

    /// Suppress progress output
    #[arg(long, default_value_t = false)]
    pub quiet: bool,

    /// Emit machine readable JSON progress events
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Print a per-file summary table
    #[arg(long, default_value_t = false)]
    pub table: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct AppConfig {
    pub months: Vec<String>,
    pub days: Vec<DayArg>,
    pub times: Vec<String>,
    pub mode: Mode,
    pub root: PathBuf,
    pub seed: Option<u64>,
    pub quiet: bool,
    pub json: bool,
    pub table: bool,
}

impl AppConfig {
    pub fn from_cli(cli: Cli, vocab: &Vocabulary) -> Result<Self> {
        let days = validate::validate(vocab, &cli.months, &cli.days)?;
        let mode = if cli.create { Mode::Create } else { Mode::Read };

        let config = AppConfig {
            months: cli.months,
            days,
            times: cli.time,
            mode,
            root: cli.root,
            seed: cli.seed,
            quiet: cli.quiet,
            json: cli.json,
            table: cli.table,
        };

        info!(
            target: "harmonogram::config",
            config = %serde_json::to_string(&config).unwrap_or_default(),
            "configuration loaded"
        );
        Ok(config)
    }
}
