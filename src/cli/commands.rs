//! CLI command implementations

use std::fs;
use std::path::Path;

use super::args::{Cli, Command};
use super::config::AppConfig;
use super::errors::{CliError, CliResult};
use crate::http_server::{HttpServer, Stores};
use crate::observability::init_logging;

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Dispatch a parsed command
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Init { config } => init(&config),
        Command::Serve { config, port } => serve(&config, port),
    }
}

/// Write a default configuration file
///
/// Refuses to overwrite an existing file.
pub fn init(config_path: &Path) -> CliResult<()> {
    if config_path.exists() {
        return Err(CliError::config_error(format!(
            "Config file already exists: {}",
            config_path.display()
        )));
    }

    if let Some(parent) = config_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let content = AppConfig::default().to_pretty_json()?;
    fs::write(config_path, content)?;

    println!("Wrote default config to {}", config_path.display());
    Ok(())
}

/// Load configuration and run the HTTP server until shutdown
pub fn serve(config_path: &Path, port: Option<u16>) -> CliResult<()> {
    let mut config = AppConfig::load_or_default(config_path)?;
    if let Some(port) = port {
        config.http.port = port;
        config.validate()?;
    }

    init_logging(&config.log_level);
    tracing::info!(
        config = %config_path.display(),
        seed_records = config.seed_records,
        cors_permissive = config.http.is_cors_permissive(),
        "configuration loaded"
    );

    let stores = if config.seed_records {
        Stores::seeded()
    } else {
        Stores::empty()
    };
    let server = HttpServer::with_config(config.http, stores);

    let runtime = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::serve_failed(format!("Failed to start runtime: {}", e)))?;

    runtime
        .block_on(server.start())
        .map_err(|e| CliError::serve_failed(e.to_string()))
}
