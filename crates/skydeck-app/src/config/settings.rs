//! Settings parser for `<config_dir>/skydeck/config.toml`

use super::types::Settings;
use skydeck_core::prelude::*;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.toml";
const APP_DIR: &str = "skydeck";

/// Resolve the configuration directory.
///
/// An explicit override (from `--config-dir`) wins; otherwise the platform
/// config dir is used, falling back to `./.skydeck`.
pub fn resolve_config_dir(override_dir: Option<&Path>) -> PathBuf {
    if let Some(dir) = override_dir {
        return dir.to_path_buf();
    }
    match dirs::config_dir() {
        Some(base) => base.join(APP_DIR),
        None => PathBuf::from(".").join(format!(".{APP_DIR}")),
    }
}

/// Load settings from `config.toml`, falling back to defaults.
pub fn load_settings(config_dir: &Path) -> Settings {
    let config_path = config_dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Create the config directory with a commented default `config.toml`.
pub fn init_config_dir(config_dir: &Path) -> Result<()> {
    if !config_dir.exists() {
        std::fs::create_dir_all(config_dir)
            .map_err(|e| Error::config(format!("Failed to create config dir: {}", e)))?;
    }

    let config_path = config_dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        let default_content = r#"# Skydeck Configuration

[ui]
sidebar_expanded = true   # Sidebar state at startup
icons = "nerd_fonts"      # "nerd_fonts" or "unicode"

[appearance]
# Fallback when no theme has been chosen yet:
# "auto" reads the terminal's COLORFGBG hint, "light"/"dark" force one
system_scheme = "auto"

[provider]
kind = "mock"             # "mock" or "fixtures"
latency_ms = 1000         # Simulated request latency (mock only)
jitter_ms = 0             # Random extra latency per request (mock only)
# fixtures_dir = "/path/to/fixtures"
"#;
        std::fs::write(&config_path, default_content)
            .map_err(|e| Error::config(format!("Failed to write config.toml: {}", e)))?;
        info!("Created default config at {:?}", config_path);
    }

    Ok(())
}
