//! File-backed tracing setup.
//!
//! The terminal belongs to the UI while it runs, so log output always goes to
//! a file. `RUST_LOG` takes precedence over the configured level.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::AcetError;

pub fn init_logging(level: &str, path: &Path) -> Result<(), AcetError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level)
            .map_err(|e| AcetError::Logging(format!("invalid log level {level:?}: {e}")))?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| AcetError::Logging(e.to_string()))
}
