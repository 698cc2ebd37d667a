pub mod api;
pub mod clients;
pub mod config;
pub mod constants;
pub mod db;
pub mod entities;
pub mod models;
pub mod services;
pub mod state;

use std::sync::Arc;
use tokio::signal;

pub use config::Config;
use constants::limits::DEFAULT_CLI_HISTORY;
use db::Store;
use state::SharedState;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

pub async fn run() -> anyhow::Result<()> {
    let config = Config::load()?;
    config.validate()?;

    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level));

    let fmt_layer = tracing_subscriber::fmt::layer();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    let args: Vec<String> = std::env::args().collect();

    match args.get(1).map(String::as_str) {
        None | Some("serve" | "-s" | "--serve") => run_server(config).await,

        Some("history" | "h") => {
            let limit = args
                .get(2)
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_CLI_HISTORY);
            cmd_history(&config, limit).await
        }

        Some("init" | "--init") => {
            Config::create_default_if_missing()?;
            println!("✓ Config file created. Edit config.toml and run again.");
            Ok(())
        }

        Some("help" | "-h" | "--help") => {
            print_help();
            Ok(())
        }

        Some(other) => {
            println!("Unknown command: {}", other);
            println!();
            print_help();
            Ok(())
        }
    }
}

fn print_help() {
    println!("Recondash - OSINT Lookup Aggregator");
    println!("Fans one query out to configured lookup providers and keeps a history");
    println!();
    println!("USAGE:");
    println!("  recondash [COMMAND]");
    println!();
    println!("COMMANDS:");
    println!("  serve             Start the API server and dashboard (default)");
    println!("  history [n]       Show recent lookups (default: 10)");
    println!("  init              Create default config file");
    println!("  help              Show this help message");
    println!();
    println!("CONFIG:");
    println!("  Edit config.toml to configure providers, or set the vendor");
    println!("  environment variables (NUMLOOKUP_API_KEY, ABSTRACT_API_KEY,");
    println!("  VERIPHONE_API_KEY, HUNTERIO_API_KEY, IPGEOLOCATION_API_KEY,");
    println!("  MACVENDORS_API_KEY).");
}

async fn run_server(config: Config) -> anyhow::Result<()> {
    info!(
        "Recondash v{} starting...",
        env!("CARGO_PKG_VERSION")
    );

    let port = config.server.port;

    let shared = Arc::new(SharedState::new(config).await?);
    let api_state = api::create_app_state(shared).await?;

    let app = api::router(api_state).await;
    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    let server_handle = tokio::spawn(async move {
        info!("🌐 Server running at http://0.0.0.0:{}", port);
        if let Err(e) = axum::serve(listener, app).await {
            error!("Server error: {}", e);
        }
    });

    info!("Press Ctrl+C to stop.");

    match signal::ctrl_c().await {
        Ok(()) => {
            info!("Shutdown signal received");
        }
        Err(e) => {
            error!("Error listening for shutdown: {}", e);
        }
    }

    server_handle.abort();
    info!("Stopped");

    Ok(())
}

async fn cmd_history(config: &Config, limit: u64) -> anyhow::Result<()> {
    let store = Store::with_pool_options(
        &config.general.database_path,
        config.general.max_db_connections,
        config.general.min_db_connections,
    )
    .await?;
    let entries = store.recent_searches(limit).await?;

    if entries.is_empty() {
        println!("No lookup history.");
        return Ok(());
    }

    println!("Recent Lookups (last {}):", entries.len());
    println!("{:-<70}", "");

    for entry in entries {
        println!("• [{}] {}", entry.kind, entry.query);
        println!("  At: {}", entry.timestamp);
    }

    Ok(())
}
