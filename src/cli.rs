//! CLI argument parsing

use std::path::PathBuf;

use clap::Parser;

use crate::config::defaults;

/// coshell CLI
#[derive(Parser, Debug)]
#[command(name = "coshell")]
#[command(version)]
#[command(
    about = "Interactive administrative shell for tenant-aware collaboration platforms",
    long_about = None
)]
pub struct Cli {
    /// Path to the session config file (defaults to ~/.coshell/config.json)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Environment to bind as current for this session
    #[arg(short, long, env = "COSHELL_ENV")]
    pub env: Option<String>,

    /// Run a single command line and exit instead of starting the shell
    #[arg(short = 'c', long = "command", value_name = "LINE")]
    pub command: Option<String>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,
}
