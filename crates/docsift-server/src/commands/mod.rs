//! CLI command implementations.

pub mod config;
pub mod extract;
pub mod serve;

use std::path::{Path, PathBuf};

use docsift_core::DocsiftConfig;
use tracing::debug;

/// Platform config location, e.g. `~/.config/docsift/config.json`.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("docsift")
        .join("config.json")
}

/// Load the config from `-c`, else the default location if present, else
/// defaults; then apply environment overrides.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<DocsiftConfig> {
    let mut config = match config_path {
        Some(path) => DocsiftConfig::from_file(Path::new(path))?,
        None => {
            let path = default_config_path();
            if path.exists() {
                debug!("Using config file {}", path.display());
                DocsiftConfig::from_file(&path)?
            } else {
                DocsiftConfig::default()
            }
        }
    };

    config.apply_env()?;
    Ok(config)
}
