use super::config::ConfigError;
use crate::core::io::fs::FsError;
use crate::core::io::ipynb::IpynbError;
use crate::core::io::toc::TocLoadError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error(transparent)]
    Filesystem(#[from] FsError),

    #[error("Failed to serialize notebook '{path}': {source}", path = path.display())]
    Serialization {
        path: PathBuf,
        #[source]
        source: IpynbError,
    },

    #[error(transparent)]
    TocLoad(#[from] TocLoadError),

    #[error("{what} '{title}' produces an empty name; add at least one letter or digit")]
    EmptyName { what: &'static str, title: String },

    #[error("Path collision: '{first}' and '{second}' both map to '{path}'", path = path.display())]
    PathCollision {
        path: PathBuf,
        first: String,
        second: String,
    },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}
