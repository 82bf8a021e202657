//! Reading the TOML config file, and writing the template on first run.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chatpanel_common::ConfigError;
use tracing::{debug, info};

use crate::schema::PanelConfig;

use super::template::default_config_toml;

const APP_DIR: &str = "chatpanel";
const FILE_NAME: &str = "config.toml";

/// `<platform config dir>/chatpanel/config.toml`.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR).join(FILE_NAME))
        .ok_or_else(|| ConfigError::ParseError("no platform config directory".into()))
}

/// Parse the file at `path`. Absent keys take their defaults; nothing is
/// validated here.
pub fn load_from_path(path: &Path) -> Result<PanelConfig, ConfigError> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(ConfigError::FileNotFound(path.to_path_buf()))
        }
        Err(e) => return Err(io_failure("read", path, e)),
    };

    let config = toml::from_str(&text)
        .map_err(|e| ConfigError::ParseError(format!("{}: {e}", path.display())))?;
    debug!(path = %path.display(), "config loaded");
    Ok(config)
}

/// Load the platform default file, writing the template first if there is
/// none yet.
pub fn load_default() -> Result<PanelConfig, ConfigError> {
    let path = default_config_path()?;
    match load_from_path(&path) {
        Err(ConfigError::FileNotFound(_)) => {
            create_default_config(&path)?;
            Ok(PanelConfig::default())
        }
        loaded => loaded,
    }
}

/// Write the commented template to `path`, creating parent directories.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(|e| io_failure("create the directory of", path, e))?;
    }
    fs::write(path, default_config_toml()).map_err(|e| io_failure("write", path, e))?;
    info!(path = %path.display(), "wrote default config");
    Ok(())
}

fn io_failure(action: &str, path: &Path, e: io::Error) -> ConfigError {
    ConfigError::ParseError(format!("failed to {action} {}: {e}", path.display()))
}
