use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about = "rateit rating and review engine")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "kebab-case")]
pub enum Command {
    /// Start the HTTP API server
    Serve {
        /// Port number (optional, defaults to 3000)
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
    },
    /// Print the reviewer leaderboard
    TopReviewers {
        /// How many reviewers to show (defaults to 10)
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Search items and show their overall rating
    Search {
        query: String,
    },
    /// Print site-wide totals
    Stats,
    /// Write a dated JSON export of users and items
    Export {
        /// Target directory (defaults to EXPORT_DIR or "exports")
        #[arg(short, long)]
        dir: Option<String>,
    },
}
