//! Configuration file parsing for Skydeck
//!
//! Supports:
//! - `config.toml` - Global settings
//! - `preferences.toml` - The persisted theme, owned by [`crate::preferences`]

pub mod settings;
pub mod types;

pub use settings::{init_config_dir, load_settings, resolve_config_dir};
pub use types::*;
