//! cnap-atlas - ЦНАП Registry Dashboard
//!
//! Self-contained dashboard server for the Ukrainian administrative service
//! center registry. Loads the registry JSON once, then serves a JSON API and
//! the embedded browser shell.
//!
//! # Usage
//!
//! ```bash
//! # Serve the registry at data/centers.json (or the configured path)
//! cargo run --release
//!
//! # Serve a specific registry export
//! cargo run --release -- --dataset data/sample/centers.json
//!
//! # Serve a generated synthetic registry (development mode)
//! cargo run --release -- --sample
//! ```
//!
//! # Environment Variables
//!
//! - `ATLAS_CONFIG`: Path to a TOML config file (default: ./atlas.toml)
//! - `ATLAS_CORS_ORIGINS`: Comma-separated origins allowed cross-origin
//! - `RUST_LOG`: Logging level (default: info)

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tokio_util::sync::CancellationToken;
use tracing::info;

use cnap_atlas::api::{create_app, DashboardState};
use cnap_atlas::config::AtlasConfig;
use cnap_atlas::dataset;
use cnap_atlas::types::ServiceCenter;

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "cnap-atlas")]
#[command(about = "Dashboard server for the ЦНАП service center registry")]
#[command(version)]
struct CliArgs {
    /// Override the server address (default: "0.0.0.0:8080")
    #[arg(short, long)]
    addr: Option<String>,

    /// Path to the registry JSON array (overrides the configured path)
    #[arg(long, value_name = "FILE")]
    dataset: Option<String>,

    /// Serve a generated synthetic registry instead of loading a file
    #[arg(long)]
    sample: bool,

    /// Number of synthetic records generated with --sample
    #[arg(long, default_value = "500", value_name = "COUNT")]
    sample_count: usize,
}

// ============================================================================
// Dataset Loading
// ============================================================================

/// Load the registry according to the CLI flags, failing fast on a missing or
/// malformed file. Returns the records plus a label for the status endpoint.
fn load_registry(args: &CliArgs, config: &AtlasConfig) -> Result<(Vec<ServiceCenter>, String)> {
    if args.sample {
        info!("📊 Input: synthetic registry ({} records)", args.sample_count);
        let records = dataset::generate_sample(args.sample_count);
        return Ok((records, format!("synthetic ({} records)", args.sample_count)));
    }

    let path = args
        .dataset
        .clone()
        .map_or_else(|| PathBuf::from(&config.dataset.path), PathBuf::from);
    info!("📥 Input: registry file {}", path.display());

    let records = dataset::load_dataset(&path)
        .with_context(|| format!("Failed to load the registry from {}", path.display()))?;
    Ok((records, path.display().to_string()))
}

// ============================================================================
// Main Entry Point
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let args = CliArgs::parse();
    let config = AtlasConfig::load();
    let server_addr = args.addr.clone().unwrap_or_else(|| config.server.addr.clone());

    info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    info!("  cnap-atlas - ЦНАП Registry Dashboard");
    info!("  Administrative Service Center Explorer");
    info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    info!("");

    // The registry is the one required collaborator: no data, no server.
    let (records, dataset_label) = load_registry(&args, &config)?;
    let mappable = records.iter().filter(|c| c.coordinates().is_some()).count();
    info!("✓ {} centers loaded ({} with map coordinates)", records.len(), mappable);

    let state = DashboardState::new(records, config.view_settings(), dataset_label);
    info!(
        "✓ Filter vocabularies: {} regions, {} facility types, {} districts",
        state.options.regions.len(),
        state.options.facility_types.len(),
        state.options.districts.len()
    );
    info!("");

    let app = create_app(state);
    let listener = tokio::net::TcpListener::bind(&server_addr)
        .await
        .with_context(|| format!("Failed to bind to {server_addr}"))?;

    info!("✓ HTTP server listening on {}", server_addr);
    info!("");
    info!("🎯 Dashboard available at: http://{}", server_addr);
    info!("");

    // Graceful shutdown via Ctrl+C
    let cancel_token = CancellationToken::new();
    let shutdown_token = cancel_token.clone();
    tokio::spawn(async move {
        tokio::signal::ctrl_c().await.ok();
        info!("🛑 Received Ctrl+C, initiating shutdown...");
        shutdown_token.cancel();
    });

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            cancel_token.cancelled().await;
        })
        .await
        .context("HTTP server error")?;

    info!("");
    info!("✓ cnap-atlas shutdown complete");
    Ok(())
}
