//! Preference store for the persisted theme
//!
//! Resolution order for [`PreferenceStore::get`]:
//! 1. value set during this session (or loaded from storage at startup)
//! 2. the system color-scheme signal
//! 3. [`Theme::Light`]
//!
//! Writes go through synchronously. A failed write is logged and otherwise
//! ignored; the in-memory value still applies for the rest of the session.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use fs2::FileExt;
use serde::{Deserialize, Serialize};
use skydeck_core::prelude::*;
use skydeck_core::Theme;

use crate::config::SystemScheme;

const PREFERENCES_FILENAME: &str = "preferences.toml";

/// Environment variable carrying the terminal's `fg;bg` color indices
pub const COLORFGBG_VAR: &str = "COLORFGBG";

// ─────────────────────────────────────────────────────────────────────────────
// Seams
// ─────────────────────────────────────────────────────────────────────────────

/// Durable storage for the single `theme` key.
#[cfg_attr(test, mockall::automock)]
pub trait PreferenceBackend: Send {
    /// `Ok(None)` when nothing has been stored yet
    fn load(&self) -> Result<Option<Theme>>;

    fn save(&self, theme: Theme) -> Result<()>;
}

/// Read-only platform hint for the preferred color scheme.
#[cfg_attr(test, mockall::automock)]
pub trait ColorSchemeSignal: Send {
    fn preferred(&self) -> Option<Theme>;
}

// ─────────────────────────────────────────────────────────────────────────────
// PreferenceStore
// ─────────────────────────────────────────────────────────────────────────────

pub struct PreferenceStore {
    backend: Box<dyn PreferenceBackend>,
    system: Box<dyn ColorSchemeSignal>,
    current: Option<Theme>,
}

impl std::fmt::Debug for PreferenceStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreferenceStore")
            .field("current", &self.current)
            .finish_non_exhaustive()
    }
}

impl PreferenceStore {
    /// Open the store, reading the persisted value once.
    ///
    /// An unreadable or malformed stored value counts as absent.
    pub fn open(backend: Box<dyn PreferenceBackend>, system: Box<dyn ColorSchemeSignal>) -> Self {
        let current = match backend.load() {
            Ok(stored) => stored,
            Err(e) => {
                warn!("Ignoring unreadable theme preference: {}", e);
                None
            }
        };
        debug!("Stored theme preference: {:?}", current);
        Self {
            backend,
            system,
            current,
        }
    }

    /// Process-local store with the given system hint. Nothing is persisted.
    pub fn in_memory(system: Option<Theme>) -> Self {
        Self::open(
            Box::new(MemoryPreferenceBackend::new()),
            Box::new(FixedColorScheme(system)),
        )
    }

    pub fn get(&self) -> Theme {
        self.current
            .or_else(|| self.system.preferred())
            .unwrap_or_default()
    }

    /// Whether a value has been stored or set (the system signal is not
    /// consulted in that case)
    pub fn has_explicit(&self) -> bool {
        self.current.is_some()
    }

    pub fn set(&mut self, theme: Theme) {
        self.current = Some(theme);
        if let Err(e) = self.backend.save(theme) {
            warn!("Theme preference not persisted ({}): {}", theme, e);
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File backend
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize, Serialize)]
struct PreferenceFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    theme: Option<String>,
}

/// `preferences.toml` holding `theme = "light" | "dark"`.
#[derive(Debug, Clone)]
pub struct FilePreferenceBackend {
    path: PathBuf,
}

impl FilePreferenceBackend {
    pub fn new(config_dir: &Path) -> Self {
        Self {
            path: config_dir.join(PREFERENCES_FILENAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PreferenceBackend for FilePreferenceBackend {
    fn load(&self) -> Result<Option<Theme>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&self.path)?;
        let file: PreferenceFile = toml::from_str(&content)
            .map_err(|e| Error::preference(format!("Failed to parse {:?}: {}", self.path, e)))?;

        match file.theme {
            None => Ok(None),
            Some(raw) => match raw.parse::<Theme>() {
                Ok(theme) => Ok(Some(theme)),
                Err(e) => {
                    warn!("Ignoring stored theme: {}", e);
                    Ok(None)
                }
            },
        }
    }

    fn save(&self, theme: Theme) -> Result<()> {
        let dir = self
            .path
            .parent()
            .ok_or_else(|| Error::PreferenceUnavailable {
                path: self.path.clone(),
            })?;
        std::fs::create_dir_all(dir)
            .map_err(|e| Error::preference(format!("Failed to create {:?}: {}", dir, e)))?;

        let content = toml::to_string(&PreferenceFile {
            theme: Some(theme.as_str().to_string()),
        })
        .map_err(|e| Error::preference(format!("Failed to serialize preferences: {}", e)))?;

        let temp_path = dir.join(".preferences.toml.tmp");
        {
            use std::io::Write;

            let mut file = std::fs::File::create(&temp_path)
                .map_err(|e| Error::preference(format!("Failed to open temp file: {}", e)))?;

            // Exclusive lock (blocks while another instance is writing)
            file.lock_exclusive()
                .map_err(|e| Error::preference(format!("Failed to lock temp file: {}", e)))?;
            file.write_all(content.as_bytes())
                .map_err(|e| Error::preference(format!("Failed to write temp file: {}", e)))?;
            file.flush()
                .map_err(|e| Error::preference(format!("Failed to flush temp file: {}", e)))?;
        }

        std::fs::rename(&temp_path, &self.path)
            .map_err(|e| Error::preference(format!("Failed to rename temp file: {}", e)))?;

        debug!("Saved theme preference {} to {:?}", theme, self.path);
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Memory backend
// ─────────────────────────────────────────────────────────────────────────────

/// Process-local storage. Clones share the same slot.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferenceBackend {
    inner: Arc<Mutex<MemorySlot>>,
}

#[derive(Debug, Default)]
struct MemorySlot {
    theme: Option<Theme>,
    writes: usize,
    fail_writes: bool,
}

impl MemoryPreferenceBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stored(theme: Theme) -> Self {
        let backend = Self::new();
        backend.slot().theme = Some(theme);
        backend
    }

    /// Every subsequent `save` fails, like a read-only disk.
    pub fn failing() -> Self {
        let backend = Self::new();
        backend.slot().fail_writes = true;
        backend
    }

    pub fn stored(&self) -> Option<Theme> {
        self.slot().theme
    }

    /// Number of successful writes
    pub fn writes(&self) -> usize {
        self.slot().writes
    }

    fn slot(&self) -> std::sync::MutexGuard<'_, MemorySlot> {
        self.inner.lock().unwrap_or_else(|p| p.into_inner())
    }
}

impl PreferenceBackend for MemoryPreferenceBackend {
    fn load(&self) -> Result<Option<Theme>> {
        Ok(self.slot().theme)
    }

    fn save(&self, theme: Theme) -> Result<()> {
        let mut slot = self.slot();
        if slot.fail_writes {
            return Err(Error::preference("storage unavailable"));
        }
        slot.theme = Some(theme);
        slot.writes += 1;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// System signals
// ─────────────────────────────────────────────────────────────────────────────

/// A fixed answer, used when the config forces a scheme.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedColorScheme(pub Option<Theme>);

impl ColorSchemeSignal for FixedColorScheme {
    fn preferred(&self) -> Option<Theme> {
        self.0
    }
}

/// Reads `COLORFGBG`, which many terminals export as `fg;bg`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvColorScheme;

impl ColorSchemeSignal for EnvColorScheme {
    fn preferred(&self) -> Option<Theme> {
        std::env::var(COLORFGBG_VAR)
            .ok()
            .and_then(|v| parse_colorfgbg(&v))
    }
}

/// Map the background index of a `COLORFGBG` value to a theme.
///
/// Indices 0-6 and 8 are dark backgrounds, 7 and 9-15 light ones.
pub fn parse_colorfgbg(value: &str) -> Option<Theme> {
    let bg: u8 = value.rsplit(';').next()?.trim().parse().ok()?;
    match bg {
        0..=6 | 8 => Some(Theme::Dark),
        7 | 9..=15 => Some(Theme::Light),
        _ => None,
    }
}

/// Signal matching the `appearance.system_scheme` setting
pub fn system_signal(scheme: SystemScheme) -> Box<dyn ColorSchemeSignal> {
    match scheme.forced() {
        Some(theme) => Box::new(FixedColorScheme(Some(theme))),
        None => Box::new(EnvColorScheme),
    }
}
