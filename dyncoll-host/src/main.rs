//! Dynamic collections demo host
//!
//! Boots the dynamic collections plugin against an empty host
//! configuration, serves the admin API, and exits with the restart status
//! once a different version is promoted.
//!
//! Usage:
//!   dyncoll-host --config dyncoll.toml --store store.json --port 4002

use anyhow::{Context, Result};
use clap::Parser;
use dyncoll_host::{AppState, StatusResponse, build_router, demo};
use dyncoll_plugin::{DynamicCollectionsPlugin, HostConfig, PluginSettings};
use dyncoll_versions::{CollectionStore, RESTART_EXIT_CODE, RolloutOutcome};
use std::{path::PathBuf, sync::Arc};
use tracing::{Level, debug, info};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "dyncoll-host")]
#[command(about = "Demo host for dynamic collections")]
struct Args {
    /// Path to the settings file
    #[arg(short, long, default_value = "dyncoll.toml")]
    config: PathBuf,

    /// Path to the collection and version store
    #[arg(short, long, default_value = "dyncoll-store.json")]
    store: PathBuf,

    /// HTTP API port
    #[arg(short, long, default_value = "4002")]
    port: u16,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .compact()
        .init();

    let settings = PluginSettings::load_from(args.config);
    let options = demo::options().context("Failed to build function registries")?;
    let plugin = DynamicCollectionsPlugin::new(settings, options);

    let boot = plugin.boot(HostConfig::default()).await;
    for collection in &boot.config.collections {
        debug!(slug = %collection.slug, config = %collection.describe(), "Collection installed");
    }

    let store = Arc::new(
        CollectionStore::open(&args.store)
            .await
            .with_context(|| format!("Failed to open store at {}", args.store.display()))?,
    );

    let state = AppState {
        store: store.clone(),
        status: Arc::new(StatusResponse {
            loaded_version: boot.loaded_version.clone(),
            installed: boot.installed.clone(),
            errors: boot.errors.iter().map(ToString::to_string).collect(),
        }),
    };
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", args.port))
        .await
        .context("Failed to bind HTTP port")?;
    info!("HTTP admin API listening on port {}", args.port);
    let server = tokio::spawn(async move { axum::serve(listener, build_router(state)).await });

    match plugin.watcher(&boot, store) {
        Some(watcher) => {
            if let RolloutOutcome::RestartRequested { target } = watcher.run().await {
                info!(target = %target, "Exiting for restart");
            }
            std::process::exit(RESTART_EXIT_CODE);
        }
        None => {
            server
                .await
                .context("HTTP server task failed")?
                .context("HTTP server failed")?;
        }
    }
    Ok(())
}
