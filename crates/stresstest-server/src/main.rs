//! Stress test server binary.

use std::path::Path;

use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use stresstest_server::{run_server, AppState, ServerConfig};

/// Portfolio stress test REST server
#[derive(Parser, Debug)]
#[command(name = "stresstest-server")]
#[command(version, about, long_about = None)]
struct Args {
    /// Configuration file (defaults are used if it does not exist)
    #[arg(short, long, default_value = "config/stresstest.toml")]
    config: String,

    /// Host address to bind to
    #[arg(short = 'H', long)]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,

    /// Use the built-in quote table and disable text generation
    #[arg(long)]
    offline: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging
    let default_filter = if args.verbose {
        "debug,tower_http=debug"
    } else {
        "info,stresstest=debug,tower_http=info"
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Stress test server v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let mut config = if Path::new(&args.config).exists() {
        info!("Loading configuration from {}", args.config);
        ServerConfig::from_file(&args.config)?
    } else {
        info!("Using default configuration");
        ServerConfig::default()
    };
    config.apply_env();
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(port) = args.port {
        config.port = port;
    }

    if args.offline {
        info!("Starting in OFFLINE mode with static quotes");
    }
    let state = AppState::from_config(&config, args.offline)?;

    run_server(state, &config).await
}
