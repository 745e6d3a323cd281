//! CLI argument definitions using clap
//!
//! Commands:
//! - msgboard serve [--config <path>] [--port <port>]
//! - msgboard init [--config <path>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// msgboard - In-memory CRUD message board
#[derive(Parser, Debug)]
#[command(name = "msgboard")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write a default configuration file
    Init {
        /// Path to configuration file
        #[arg(long, default_value = "./msgboard.json")]
        config: PathBuf,
    },

    /// Start the HTTP server
    Serve {
        /// Path to configuration file (defaults are used if it does not exist)
        #[arg(long, default_value = "./msgboard.json")]
        config: PathBuf,

        /// Override the configured port
        #[arg(long)]
        port: Option<u16>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
