use dyncoll_derivation::DerivationError;
use thiserror::Error;

/// Why a collection from the loaded snapshot was not installed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PluginError {
    #[error("{source}")]
    Derivation {
        slug: String,
        source: DerivationError,
    },

    #[error("Collection {slug} conflicts with an existing collection and was not installed")]
    SlugConflict { slug: String },
}

impl PluginError {
    pub fn slug(&self) -> &str {
        match self {
            Self::Derivation { slug, .. } | Self::SlugConflict { slug } => slug,
        }
    }
}
