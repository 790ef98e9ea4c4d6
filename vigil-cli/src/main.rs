//! Vigil CLI
//!
//! Command-line interface for waiting on long-running operations of the
//! classification service and for evaluating batch classification results.

mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::Config;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "vigil")]
#[command(about = "Wait on classification service operations", long_about = None)]
struct Cli {
    /// Classification service URL
    #[arg(
        long,
        global = true,
        env = "VIGIL_SERVICE_URL",
        default_value = "http://localhost:4566"
    )]
    service_url: String,

    /// Timeout of a single HTTP request, in seconds
    #[arg(long, global = true, env = "VIGIL_REQUEST_TIMEOUT", default_value_t = 30)]
    request_timeout: u64,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vigil=info,vigil_poller=info,vigil_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = Config {
        service_url: cli.service_url,
        request_timeout: Duration::from_secs(cli.request_timeout),
    };
    config.validate()?;

    handle_command(cli.command, &config).await
}
