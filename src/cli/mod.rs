//! CLI module for msgboard
//!
//! Provides command-line interface for:
//! - init: Write a default configuration file
//! - serve: Load configuration, build the stores and run the HTTP server

mod args;
mod commands;
mod config;
mod errors;

pub use args::{Cli, Command};
pub use commands::{init, run, run_command, serve};
pub use config::AppConfig;
pub use errors::{CliError, CliErrorCode, CliResult};
