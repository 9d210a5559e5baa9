use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "ac")]
#[command(about = "Admin console: sign in and manage user accounts")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// API root including version prefix (overrides config and AC_API_BASE_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}
