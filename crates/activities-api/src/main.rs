//! Activities signup service - entry point.

use activities_api::api::{create_router_with_static_dir, AppState};
use activities_api::config::Config;
use anyhow::Context;
use roster_store::{default_roster, Activity, RosterStore};
use std::collections::HashMap;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() {
    // Load configuration
    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize logging
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log.level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting activities signup service");

    // Seed the roster
    let activities = match load_seed(&config).await {
        Ok(a) => a,
        Err(e) => {
            error!("Failed to seed roster: {}", e);
            std::process::exit(1);
        }
    };

    info!("Roster seeded with {} activities", activities.len());

    // Create application state
    let state = AppState::new(RosterStore::new(activities));

    // Create router
    let app = create_router_with_static_dir(state, &config.static_files.dir);

    // Bind to address
    let addr = SocketAddr::new(
        config.server.listen_addr.parse().unwrap_or([0, 0, 0, 0].into()),
        config.server.port,
    );

    info!("Listening on {}", addr);

    let listener = match TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            error!("Failed to bind to {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    // Run server
    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Read the seed roster from the configured file, or fall back to the
/// built-in school roster.
async fn load_seed(config: &Config) -> anyhow::Result<HashMap<String, Activity>> {
    match &config.roster.seed_path {
        Some(path) => {
            let raw = tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("Failed to read seed file {}", path.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("Failed to parse seed file {}", path.display()))
        }
        None => Ok(default_roster()),
    }
}
