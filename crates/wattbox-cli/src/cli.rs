//! CLI argument definitions for wattbox.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `report` | Fetch the price history and render the PDF report |
//! | `fetch` | Fetch the price history and print it as JSON |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--weeks` | `4` | Lookback window in weeks |
//! | `--timeout-ms` | `3000` | Per-request timeout in ms |
//! | `--cache-ttl-minutes` | `90` | Response cache freshness window |
//! | `--cache-dir` | `http_cache` | Response cache directory |
//! | `--refresh` | `false` | Refetch but keep updating the cache |
//! | `--no-cache` | `false` | Disable the response cache entirely |
//!
//! The API token and house id come from the `TIBBER_TOKEN` and `HOUSE_ID`
//! environment variables (a `.env` file is honored).

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Tibber hourly price fetcher and box-plot reporter.
#[derive(Debug, Parser)]
#[command(
    name = "wattbox",
    version,
    about = "Fetch Tibber hourly electricity prices and render box-plot reports"
)]
pub struct Cli {
    /// Lookback window in weeks.
    #[arg(long, global = true, default_value_t = wattbox_core::DEFAULT_LOOKBACK_WEEKS)]
    pub weeks: u32,

    /// Per-request timeout in milliseconds.
    #[arg(long, global = true, default_value_t = 3000)]
    pub timeout_ms: u64,

    /// Response cache freshness window in minutes.
    #[arg(long, global = true, default_value_t = 90)]
    pub cache_ttl_minutes: u64,

    /// Response cache directory.
    #[arg(long, global = true, default_value = wattbox_core::DEFAULT_CACHE_DIR)]
    pub cache_dir: PathBuf,

    /// Refetch from the network but keep updating the cache.
    #[arg(long, global = true, default_value_t = false)]
    pub refresh: bool,

    /// Disable the response cache entirely.
    #[arg(long, global = true, default_value_t = false, conflicts_with = "refresh")]
    pub no_cache: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch the price history and render the PDF report.
    Report(ReportArgs),
    /// Fetch the price history and print it as JSON.
    Fetch(FetchArgs),
}

#[derive(Debug, Args)]
pub struct ReportArgs {
    /// Output PDF path.
    #[arg(long, default_value = "tibber-energy-prices.pdf")]
    pub output: PathBuf,
}

#[derive(Debug, Args)]
pub struct FetchArgs {
    /// Pretty-print the JSON output.
    #[arg(long, default_value_t = false)]
    pub pretty: bool,
}
