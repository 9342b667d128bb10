//! Flight search gateway.
//!
//! # Architecture Overview
//!
//! ```text
//! client ──▶ http (request id, cors, handlers)
//!                 │
//!                 ▼
//!            flights::search ──── single GET, fixed timeout ────▶ provider
//!                 │
//!                 ▼
//! client ◀── flights::transform (+ duration)
//!
//! cross-cutting: config (TOML + .env), lifecycle, observability
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use flight_gateway::config::{load_or_default, ProviderCredentials};
use flight_gateway::http::HttpServer;
use flight_gateway::lifecycle::{signals, startup, Shutdown};
use flight_gateway::observability::{logging, metrics};

#[derive(Parser)]
#[command(name = "flight-gateway")]
#[command(about = "HTTP gateway for provider flight searches", long_about = None)]
struct Args {
    /// Optional TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Env file holding RAPIDAPI_KEY and RAPIDAPI_HOST.
    #[arg(short, long, default_value = ".env")]
    env_file: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = load_or_default(args.config.as_deref())?;
    logging::init_logging(&config.observability.log_level);

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "flight-gateway starting");

    let credentials = ProviderCredentials::load(&args.env_file);

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    if config.observability.metrics_enabled {
        // Validation already checked the address.
        if let Ok(addr) = config.observability.metrics_address.parse() {
            metrics::init_metrics(addr);
        }
    }

    startup::log_startup(&config, &credentials, local_addr);

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    signals::spawn_signal_listener(shutdown);

    let server = HttpServer::new(config, credentials)?;
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
