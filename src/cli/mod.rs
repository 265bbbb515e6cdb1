//! CLI definition

use clap::Parser;

pub mod report;

/// Output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// `Customer, DeviceType, Qty` lines, fields unquoted (default)
    #[default]
    Legacy,
    /// RFC 4180 CSV, fields quoted when needed
    Csv,
    /// JSON rows with generation metadata
    Json,
}

/// Count NinjaRMM devices by type for every organization and print the
/// result as CSV.
///
/// Credentials are read from NINJA_ACCESS_KEY_ID and NINJA_SECRET_ACCESS_KEY.
#[derive(Parser, Debug)]
#[command(name = "ninjacsv")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format (legacy, csv, json)
    #[arg(
        long,
        env = "NINJA_FORMAT",
        default_value = "legacy",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: OutputFormat,

    /// Enable debug logging
    #[arg(long, env = "NINJA_DEBUG", hide_env = true)]
    pub debug: bool,

    /// Custom API host for development/testing
    #[arg(long, env = "NINJA_API_HOST", hide = true)]
    pub api_host: Option<String>,
}
