use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AcetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error in {path}: {source}")]
    Config {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Config file not found: {0}")]
    ConfigNotFound(PathBuf),

    #[error("Logging setup failed: {0}")]
    Logging(String),
}
