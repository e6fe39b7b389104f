use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "tb")]
#[command(about = "Bulk issue updates and links with read-back verification")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Tracker URL (overrides config and TB_TRACKER_URL)
    #[arg(long, global = true)]
    pub server: Option<String>,

    /// Permanent token (overrides config and TB_TRACKER_TOKEN)
    #[arg(long, global = true)]
    pub token: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}
