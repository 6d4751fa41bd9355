//! TRAPI MCP Server - Entry Point
//!
//! Provides both stdio (for desktop MCP hosts) and HTTP transports.

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use trapi_mcp::{TranslatorClient, config::Config, server::McpServer};

#[derive(Parser, Debug)]
#[command(name = "trapi-mcp")]
#[command(about = "MCP server for Translator ARS, Name Resolution and Node Normalization")]
#[command(version)]
struct Cli {
    /// Transport mode: stdio or http
    #[arg(long, default_value = "stdio")]
    transport: Transport,

    /// HTTP bind address (only used with --transport http)
    #[arg(long, default_value = "127.0.0.1", env = "HOST")]
    host: IpAddr,

    /// HTTP server port (only used with --transport http)
    #[arg(long, default_value = "8000", env = "PORT")]
    port: u16,

    /// Per-request upstream timeout in seconds [overrides TRAPI_REQUEST_TIMEOUT_SECS]
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// ARS API base URL [overrides TRAPI_ARS_URL]
    #[arg(long)]
    ars_url: Option<String>,

    /// Name Resolution base URL [overrides TRAPI_NAME_RESOLUTION_URL]
    #[arg(long)]
    name_resolution_url: Option<String>,

    /// Node Normalization base URL [overrides TRAPI_NODE_NORMALIZATION_URL]
    #[arg(long)]
    node_normalization_url: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum Transport {
    /// Standard input/output
    #[default]
    Stdio,
    /// Streamable HTTP
    Http,
}

impl Cli {
    /// Environment first, then command-line flags on top.
    fn config(&self) -> anyhow::Result<Config> {
        let mut config = Config::from_env()?;

        if let Some(url) = &self.ars_url {
            config.ars_api_url.clone_from(url);
        }
        if let Some(url) = &self.name_resolution_url {
            config.name_resolution_url.clone_from(url);
        }
        if let Some(url) = &self.node_normalization_url {
            config.node_normalization_url.clone_from(url);
        }
        if let Some(secs) = self.timeout_secs {
            config = config.with_request_timeout(Duration::from_secs(secs));
        }

        config.validate()?;
        Ok(config)
    }
}

/// Logs go to stderr; stdout carries the stdio transport.
fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if json {
        subscriber
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().compact().with_writer(std::io::stderr))
            .init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.json_logs);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        transport = ?cli.transport,
        "Starting TRAPI MCP server"
    );

    let config = cli.config()?;
    tracing::debug!(?config, "Loaded configuration");

    let client = TranslatorClient::new(config)?;
    let server = McpServer::new(client);

    match cli.transport {
        Transport::Stdio => {
            server.run_stdio().await?;
        }
        Transport::Http => {
            server.run_http(SocketAddr::new(cli.host, cli.port)).await?;
        }
    }

    Ok(())
}
