//! Demo gateway - serves the httpkit helpers over HTTP.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gateway_lib::config::{GatewayConfig, DEFAULT_GATEWAY_HOST, DEFAULT_GATEWAY_PORT};

#[derive(Parser, Debug)]
#[command(name = "gateway")]
#[command(author, version, about = "Demo gateway for the httpkit helpers", long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Host to bind to
        #[arg(short = 'H', long, default_value = DEFAULT_GATEWAY_HOST, env = "GATEWAY_HOST")]
        host: String,

        /// Port to listen on
        #[arg(short, long, default_value_t = DEFAULT_GATEWAY_PORT, env = "GATEWAY_PORT")]
        port: u16,
    },
}

#[tokio::main]
async fn main() {
    // Load environment variables before clap reads its `env` fallbacks
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let mut config = GatewayConfig::from_env();
    tracing::debug!(?config, "Configuration loaded");

    let result = match cli.command {
        Commands::Serve { host, port } => {
            config.host = host;
            config.port = port;
            gateway_lib::run_server(config).await
        }
    };

    if let Err(e) = result {
        tracing::error!("Command failed: {:?}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing subscriber
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        "debug".to_string()
    } else {
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string())
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();
}
