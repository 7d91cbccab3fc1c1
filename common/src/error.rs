use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building or querying the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// A detail view asked for an id that is not in the collection.
    #[error("no record with id '{id}'")]
    NotFound { id: String },

    #[error("unknown system: {0}")]
    UnknownSystem(String),

    #[error("unknown difficulty: {0}")]
    UnknownDifficulty(String),

    #[error("unknown tab: {0}")]
    UnknownTab(String),

    #[error("unknown view mode: {0} (expected 'grid' or 'list')")]
    UnknownViewMode(String),

    /// Two records in the same collection share an id.
    #[error("duplicate id '{0}' in collection")]
    DuplicateId(String),

    /// A plant was seeded without any therapeutic use.
    #[error("plant '{0}' has no uses")]
    EmptyUses(String),
}

impl CatalogError {
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }
}

/// Errors raised while loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}
