//! Subcommands.

pub mod config;
pub mod extract;
pub mod run;

use std::path::{Path, PathBuf};

use tracing::debug;

use facturas_core::FacturasConfig;

/// Location of the user's configuration file.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("facturas")
        .join("config.json")
}

/// Load the explicit config file, else the default one if present, else defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<FacturasConfig> {
    let config = match config_path {
        Some(path) => FacturasConfig::from_file(Path::new(path))?,
        None => {
            let default_path = default_config_path();
            if default_path.exists() {
                debug!("Using config file {}", default_path.display());
                FacturasConfig::from_file(&default_path)?
            } else {
                FacturasConfig::default()
            }
        }
    };

    config.validate()?;
    Ok(config)
}
