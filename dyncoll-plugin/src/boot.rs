use crate::error::PluginError;
use crate::management::{self, GlobalConfig};
use crate::settings::PluginSettings;
use dyncoll_derivation::{CollectionConfig, PluginOptions, derive_collection};
use dyncoll_model::Snapshot;
use dyncoll_versions::{RolloutWatcher, VersionStore, read_snapshot};
use std::sync::Arc;
use tracing::{error, info};

/// The host application's collection and global configuration.
#[derive(Debug, Clone, Default)]
pub struct HostConfig {
    pub collections: Vec<CollectionConfig>,
    pub globals: Vec<GlobalConfig>,
}

impl HostConfig {
    pub fn collection(&self, slug: &str) -> Option<&CollectionConfig> {
        self.collections.iter().find(|c| c.slug == slug)
    }

    pub fn global(&self, slug: &str) -> Option<&GlobalConfig> {
        self.globals.iter().find(|g| g.slug == slug)
    }
}

/// Result of deriving every collection in a snapshot.
#[derive(Debug)]
pub struct DerivedSnapshot {
    pub version: String,
    pub collections: Vec<CollectionConfig>,
    pub errors: Vec<PluginError>,
}

/// Derives every collection in `snapshot`. Failures are collected per
/// collection; the rest still derive.
pub fn derive_snapshot(snapshot: &Snapshot, options: &PluginOptions) -> DerivedSnapshot {
    let mut collections = Vec::new();
    let mut errors = Vec::new();
    for definition in &snapshot.collection_definitions {
        match derive_collection(definition, options) {
            Ok(config) => collections.push(config),
            Err(source) => errors.push(PluginError::Derivation {
                slug: definition.slug.clone(),
                source,
            }),
        }
    }
    DerivedSnapshot {
        version: snapshot.version.clone(),
        collections,
        errors,
    }
}

/// Outcome of [`DynamicCollectionsPlugin::boot`].
#[derive(Debug)]
pub struct Boot {
    pub config: HostConfig,
    /// Version of the snapshot read at startup.
    pub loaded_version: String,
    /// Slugs of the dynamic collections that were installed.
    pub installed: Vec<String>,
    /// Collections from the snapshot that were not installed.
    pub errors: Vec<PluginError>,
}

pub struct DynamicCollectionsPlugin {
    settings: PluginSettings,
    options: PluginOptions,
}

impl DynamicCollectionsPlugin {
    pub fn new(settings: PluginSettings, options: PluginOptions) -> Self {
        Self { settings, options }
    }

    pub fn settings(&self) -> &PluginSettings {
        &self.settings
    }

    pub fn options(&self) -> &PluginOptions {
        &self.options
    }

    /// Reads the snapshot, derives it, and installs the result into `host`.
    ///
    /// When the plugin is disabled the snapshot is still read and derived so
    /// problems show up in the log, but `host` is returned unchanged.
    pub async fn boot(&self, mut host: HostConfig) -> Boot {
        let snapshot = read_snapshot(&self.settings.collection_path).await;
        let derived = derive_snapshot(&snapshot, &self.options);
        let mut errors = derived.errors;

        if !self.settings.enabled {
            info!(
                version = %derived.version,
                collections = derived.collections.len(),
                "Dynamic collections plugin is disabled; nothing installed"
            );
            log_errors(&errors);
            return Boot {
                config: host,
                loaded_version: derived.version,
                installed: Vec::new(),
                errors,
            };
        }

        host.collections
            .push(management::editor_collection(&self.options));
        host.collections
            .push(management::versions_collection(&self.options));

        let mut installed = Vec::with_capacity(derived.collections.len());
        for config in derived.collections {
            if host.collection(&config.slug).is_some() {
                errors.push(PluginError::SlugConflict { slug: config.slug });
                continue;
            }
            installed.push(config.slug.clone());
            host.collections
                .push(config.with_passthrough_fields(self.options.common_fields()));
        }

        host.globals
            .push(management::current_version_global(&self.options));

        log_loaded(&derived.version, installed.len());
        log_errors(&errors);

        Boot {
            config: host,
            loaded_version: derived.version,
            installed,
            errors,
        }
    }

    /// The rollout watcher for a booted process, or `None` when the plugin
    /// is disabled.
    pub fn watcher(&self, boot: &Boot, store: Arc<dyn VersionStore>) -> Option<RolloutWatcher> {
        self.settings.enabled.then(|| {
            RolloutWatcher::new(
                store,
                self.settings.collection_path.clone(),
                boot.loaded_version.clone(),
                self.settings.poll_interval(),
            )
        })
    }
}

fn log_loaded(version: &str, count: usize) {
    let plural = if count == 1 { "" } else { "s" };
    info!("Loaded Dynamic Collections version {version} ({count} Collection{plural} loaded)");
}

fn log_errors(errors: &[PluginError]) {
    for e in errors {
        error!(slug = e.slug(), "{e}");
    }
}
