use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Apply one update to many issues, verifying fields set through commands
    BulkUpdate {
        /// Issue ID, readable (PROJ-7) or internal (3-42); repeatable
        #[arg(long = "issue", required = true)]
        issues: Vec<String>,

        /// Update as inline JSON
        #[arg(long, conflicts_with = "update_file", required_unless_present = "update_file")]
        update: Option<String>,

        /// Update read from a JSON file
        #[arg(long)]
        update_file: Option<PathBuf>,
    },

    /// Create issue links
    BulkLink {
        /// SOURCE:TARGET[:COMMAND]; repeatable
        #[arg(long = "link", conflicts_with = "links_file", required_unless_present = "links_file")]
        links: Vec<String>,

        /// JSON array of {sourceIssueId, targetIssueId, linkCommand?}
        #[arg(long)]
        links_file: Option<PathBuf>,

        /// Skip reading each source issue back to confirm the link
        #[arg(long)]
        no_verify: bool,
    },

    /// Rank issues by priority and age
    Rank {
        /// Tracker search query
        #[arg(long, conflicts_with = "input", required_unless_present = "input")]
        query: Option<String>,

        /// JSON array of {priority?, createdAt, ...}
        #[arg(long)]
        input: Option<PathBuf>,

        /// Keep only the N most critical
        #[arg(long)]
        top: Option<usize>,
    },

    /// Show how an update would be split, without contacting the tracker
    Translate {
        /// Update as inline JSON
        #[arg(long, conflicts_with = "update_file", required_unless_present = "update_file")]
        update: Option<String>,

        /// Update read from a JSON file
        #[arg(long)]
        update_file: Option<PathBuf>,
    },
}
