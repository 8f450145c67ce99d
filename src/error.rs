use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to dump data structure: {0}")]
    Dump(#[from] serde_json::Error),

    #[error("Failed to parse config file {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl CatalogError {
    pub fn config(path: impl Into<PathBuf>, source: toml::de::Error) -> Self {
        Self::Config {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
