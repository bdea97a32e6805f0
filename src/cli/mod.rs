pub mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "cleanfeed")]
#[command(about = "Load a remote image feed", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch the feed once and print its items
    Load {
        /// Feed URL (overrides [feed].url in the config file)
        #[arg(short, long)]
        url: Option<String>,

        /// Request timeout in seconds
        #[arg(short, long)]
        timeout: Option<u64>,
    },
    /// Print the config file location
    Config,
}
