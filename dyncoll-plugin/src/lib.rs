//! Dynamic collections plugin.
//!
//! Ties the workspace together at host startup:
//! - [`PluginSettings`] are read from `dyncoll.toml`
//! - the last persisted snapshot is read and every collection in it is derived
//! - derived collections, the editor and version-history collections, and the
//!   current-version global are installed into the [`HostConfig`]
//! - [`DynamicCollectionsPlugin::watcher`] builds the rollout watcher for the
//!   loaded version

mod boot;
mod error;
pub mod management;
mod settings;

pub use boot::{Boot, DerivedSnapshot, DynamicCollectionsPlugin, HostConfig, derive_snapshot};
pub use error::PluginError;
pub use management::GlobalConfig;
pub use settings::PluginSettings;
