mod commands;
mod common;

pub use commands::*;
pub use common::*;

use crate::types::{LogLevel, OutputFormat};
use clap::Parser;

#[derive(Parser)]
#[command(name = "tripplan")]
#[command(about = "Fill in a trip request and ask the planning service for an itinerary", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Data directory holding config.toml [env: TRIPPLAN_PATH]")]
    pub data_dir: Option<String>,

    #[arg(long, global = true, help = "Planning service base URL [env: TRIPPLAN_API_URL]")]
    pub api_url: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, global = true, help = "Log verbosity on stderr [default: RUST_LOG, else warn]")]
    pub log_level: Option<LogLevel>,

    /// Treat this date as today (YYYY-MM-DD) [env: TRIPPLAN_TODAY]
    #[arg(long, global = true, hide = true)]
    pub today: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}
