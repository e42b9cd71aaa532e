//! `gestprof` server entry point.
//!
//! # Responsibility
//! - Resolve configuration from flags and environment.
//! - Start logging, then serve the HTTP API until Ctrl-C.

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use gestprof_api::{ServerConfig, DEFAULT_BIND_ADDR, DEFAULT_DB_LOCATION};
use gestprof_core::{core_version, default_log_level, init_logging, LogConfig};
use log::{info, warn};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

/// Professor and specialty registry HTTP server.
#[derive(Debug, Parser)]
#[command(name = "gestprof", version, about)]
struct Cli {
    /// Address to listen on.
    #[arg(long, env = "GESTPROF_BIND", default_value = DEFAULT_BIND_ADDR)]
    bind: SocketAddr,

    /// SQLite database file, or `:memory:` for a throwaway store.
    #[arg(long, env = "GESTPROF_DB", default_value = DEFAULT_DB_LOCATION)]
    db_path: String,

    /// trace|debug|info|warn|error; defaults to debug in debug builds.
    #[arg(long, env = "GESTPROF_LOG_LEVEL")]
    log_level: Option<String>,

    /// Directory for rotated log files.
    #[arg(long, env = "GESTPROF_LOG_DIR", default_value = "logs")]
    log_dir: PathBuf,

    /// Do not mirror log records to stderr.
    #[arg(long)]
    quiet: bool,
}

impl Cli {
    fn log_config(&self) -> Result<LogConfig> {
        let log_dir = absolute(&self.log_dir)?;
        Ok(LogConfig {
            level: self
                .log_level
                .clone()
                .unwrap_or_else(|| default_log_level().to_string()),
            log_dir: log_dir.to_string_lossy().into_owned(),
            echo_stderr: !self.quiet,
        })
    }

    fn server_config(&self) -> ServerConfig {
        ServerConfig {
            bind_addr: self.bind,
            db_location: self.db_path.clone(),
        }
    }
}

fn absolute(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = std::env::current_dir().context("failed to resolve working directory")?;
    Ok(cwd.join(path))
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        // Without a signal handler, run until the process is killed.
        warn!("event=shutdown_signal module=cli status=error error={err}");
        std::future::pending::<()>().await;
    }
    info!("event=shutdown_signal module=cli status=ok");
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(&cli.log_config()?).map_err(|err| anyhow!(err))?;
    info!(
        "event=cli_start module=cli status=ok version={}",
        core_version()
    );

    gestprof_api::serve(cli.server_config(), shutdown_signal())
        .await
        .context("server terminated with an error")
}

#[cfg(test)]
mod tests {
    use super::Cli;
    use clap::Parser;

    #[test]
    fn defaults_resolve_to_local_server_and_file_db() {
        let cli = Cli::try_parse_from(["gestprof"]).unwrap();
        let server = cli.server_config();

        assert_eq!(server.bind_addr.to_string(), "127.0.0.1:8080");
        assert_eq!(server.db_location, "gestprof.db");

        let log = cli.log_config().unwrap();
        assert!(std::path::Path::new(&log.log_dir).is_absolute());
        assert!(log.echo_stderr);
    }

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "gestprof",
            "--bind",
            "0.0.0.0:9000",
            "--db-path",
            ":memory:",
            "--log-level",
            "warn",
            "--log-dir",
            "/var/log/gestprof",
            "--quiet",
        ])
        .unwrap();

        assert_eq!(cli.server_config().bind_addr.port(), 9000);
        assert_eq!(cli.server_config().db_location, ":memory:");
        let log = cli.log_config().unwrap();
        assert_eq!(log.level, "warn");
        assert_eq!(log.log_dir, "/var/log/gestprof");
        assert!(!log.echo_stderr);
    }

    #[test]
    fn invalid_bind_address_is_rejected() {
        assert!(Cli::try_parse_from(["gestprof", "--bind", "not-an-addr"]).is_err());
    }
}
