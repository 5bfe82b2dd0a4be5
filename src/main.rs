//! Mcstatus command-line probe
//!
//! Queries a Minecraft server over the legacy server list ping protocol and
//! prints its status with the MOTD resolved into styled spans.
//!
//! Usage: `mcstatus [host] [port]` — arguments override the configuration
//! file and `MCSTATUS_*` environment variables.

use std::env;
use std::process::ExitCode;

use anyhow::{Context, Result};
use tracing::{debug, error, info};
use tracing_subscriber::{fmt, EnvFilter};

use mcstatus::config::ProbeConfig;
use mcstatus::{ProbeError, VERSION};

#[tokio::main]
async fn main() -> ExitCode {
    init_logging();
    debug!("mcstatus v{}", VERSION);

    let config = match load_config().await {
        Ok(config) => config,
        Err(e) => {
            error!("Configuration error: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    info!(host = %config.host, port = config.port, "Querying server");

    let status = match mcstatus::query(&config.host, config.port, config.timeout()).await {
        Ok(status) => status,
        Err(ProbeError::Unreachable(cause)) => {
            error!(host = %config.host, port = config.port, %cause, "Server is offline");
            return ExitCode::FAILURE;
        }
        Err(ProbeError::MalformedResponse(detail)) => {
            error!(
                host = %config.host,
                port = config.port,
                detail,
                "Server sent an unrecognized response"
            );
            return ExitCode::FAILURE;
        }
    };

    let motd = mcstatus::render(&status.motd);

    println!(
        "{} ({} / {} players, version {})",
        motd.plain_text(),
        status.current_players,
        status.max_players,
        status.version
    );
    for span in &motd {
        let color = span.color.map(|c| c.hex()).unwrap_or("inherit");
        println!("  [{color} {:?}] {}", span.style, span.text);
    }

    ExitCode::SUCCESS
}

/// Load the configuration, applying `host [port]` command-line overrides
async fn load_config() -> Result<ProbeConfig> {
    let mut config = ProbeConfig::load().await?;

    let args: Vec<String> = env::args().skip(1).collect();
    if let Some(host) = args.first() {
        config.host = host.clone();
    }
    if let Some(port) = args.get(1) {
        config.port = port
            .parse()
            .with_context(|| format!("Invalid port argument: {port}"))?;
    }

    Ok(config)
}

/// Initialize logging with an env-filtered subscriber
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).with_target(false).init();
}
