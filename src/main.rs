//! Eventora web front end.
//!
//! Hosts the site's route table behind an Axum server.
//!
//! ```text
//!   Client Request
//!   ──────────────▶ tower-http layers ──▶ dispatch ──▶ RouteTable::resolve
//!                   (trace, request id,                   │
//!                    body limit, timeout)         match   │   no match
//!                                                 ┌───────┴────────┐
//!                                                 ▼                ▼
//!   Client Response                          View::render      404 Not Found
//!   ◀──────────────────────────────────────────────┴────────────────┘
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tokio::net::TcpListener;

use eventora::config::{self, AppConfig};
use eventora::lifecycle::{signals, startup, Shutdown};
use eventora::observability::logging;
use eventora::urls;

#[derive(Parser)]
#[command(name = "eventora")]
#[command(about = "Eventora site server and URL tools", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server (default)
    Serve,
    /// List the route table in match order
    Routes,
    /// Print the URL of a named route
    Reverse {
        /// Route name
        name: String,
        /// Parameters as KEY=VALUE
        params: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => {
            let config = config::load_or_default(cli.config.as_deref())?;
            serve(config).await
        }
        Commands::Routes => {
            let routes = urls::build_route_table()?;
            for entry in routes.iter() {
                println!(
                    "/{:<24} {:<24} {}",
                    entry.pattern().as_str(),
                    entry.name(),
                    entry.handler()
                );
            }
            Ok(())
        }
        Commands::Reverse { name, params } => {
            let routes = urls::build_route_table()?;
            let pairs = params
                .iter()
                .map(|param| {
                    param
                        .split_once('=')
                        .ok_or_else(|| format!("parameter '{}' must be KEY=VALUE", param))
                })
                .collect::<Result<Vec<_>, _>>()?;
            println!("{}", routes.url_for(&name, &pairs)?);
            Ok(())
        }
    }
}

async fn serve(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    logging::init_logging(&config.observability);

    tracing::info!("eventora v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        static_dir = ?config.assets.static_dir,
        metrics_enabled = config.observability.metrics_enabled,
        "Configuration loaded"
    );

    let server = startup::prepare(config)?;

    let listener = TcpListener::bind(&server.config().listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    signals::spawn_signal_handler(shutdown);

    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
