//! Configuration file loading for the CLI
//!
//! Finds the TOML configuration for a run and turns it into an
//! [`AppConfig`]. Locations are tried in a fixed order and the first file
//! found wins; without any file the defaults apply.

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use stencil::{StencilError, config::AppConfig, views};

const LOCAL_CONFIG: &str = "stencil/config.toml";
const CONFIG_FILE: &str = "config.toml";

/// Configuration-related errors for CLI
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse `{}`: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    #[error("missing configuration file: {}", .0.display())]
    MissingFile(PathBuf),

    #[error("unknown dialect `{dialect}` (available: {available})")]
    Validation { dialect: String, available: String },
}

impl From<ConfigError> for StencilError {
    fn from(err: ConfigError) -> Self {
        StencilError::Config(err.to_string())
    }
}

/// Find and load the configuration.
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Local project directory (`stencil/config.toml`)
/// 3. Platform-specific config directory
/// 4. Default config if none found
///
/// # Errors
///
/// Returns an error if an explicit path does not exist, a found file
/// cannot be read or parsed, or it names a dialect that is not built in.
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, StencilError> {
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        info!(path:% = path.display(); "Loading configuration from explicit path");
        return load_config_file(path);
    }

    let local_config = Path::new(LOCAL_CONFIG);
    if local_config.exists() {
        info!(path:% = local_config.display(); "Loading configuration from local path");
        return load_config_file(local_config);
    }

    match ProjectDirs::from("com", "stencil", "stencil") {
        Some(dirs) => {
            let system_config = dirs.config_dir().join(CONFIG_FILE);
            if system_config.exists() {
                info!(path:% = system_config.display(); "Loading configuration from system path");
                return load_config_file(&system_config);
            }
            debug!(path:% = system_config.display(); "System configuration file not found");
        }
        None => debug!("Could not determine platform-specific config directory"),
    }

    debug!("No configuration file found, using default configuration");
    Ok(AppConfig::default())
}

fn load_config_file(path: &Path) -> Result<AppConfig, StencilError> {
    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()).into());
    }

    let content = fs::read_to_string(path)?;
    let config: AppConfig = toml::from_str(&content).map_err(|err| ConfigError::Parse {
        path: path.to_path_buf(),
        message: err.to_string(),
    })?;
    validate(&config)?;

    debug!(dialect = config.dialect(); "Configuration loaded");
    Ok(config)
}

fn validate(config: &AppConfig) -> Result<(), ConfigError> {
    if views::installer(config.dialect()).is_some() {
        return Ok(());
    }
    Err(ConfigError::Validation {
        dialect: config.dialect().to_string(),
        available: views::dialects().collect::<Vec<_>>().join(", "),
    })
}
