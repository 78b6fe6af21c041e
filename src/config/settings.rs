//! Gallery preferences with XDG Base Directory compliance.
//!
//! Settings are stored as pretty-printed JSON under the user's config
//! directory and loaded once at start-up.

use std::{
    env::var,
    fs::{create_dir_all, read_to_string, write},
    io::Error as StdError,
    path::PathBuf,
};

use {
    parking_lot::{RwLock, RwLockReadGuard},
    serde::{Deserialize, Serialize},
    serde_json::{Error as SerdeJsonError, from_str, to_string_pretty},
    thiserror::Error,
    tracing::debug,
};

/// Error type for settings operations.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// Failed to read or write settings file.
    #[error("IO error: {0}")]
    IoError(#[from] StdError),
    /// Failed to serialize or deserialize settings.
    #[error("Serialization error: {0}")]
    SerializationError(#[from] SerdeJsonError),
    /// Invalid settings value.
    #[error("Invalid settings value: {reason}")]
    InvalidValue { reason: String },
}

/// Serializable gallery settings with default values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GallerySettings {
    /// Page shown when the gallery opens. Any integer is accepted.
    pub start_page: i64,
    /// Maximum number of art pieces listed per page.
    pub page_size: u32,
}

impl Default for GallerySettings {
    fn default() -> Self {
        Self {
            start_page: 0,
            page_size: 10,
        }
    }
}

impl GallerySettings {
    /// Checks values that would make the listing unusable.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::InvalidValue` for a zero page size.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.page_size == 0 {
            return Err(SettingsError::InvalidValue {
                reason: "page_size must be positive".to_string(),
            });
        }
        Ok(())
    }
}

/// Handles loading and saving of gallery settings.
#[derive(Debug)]
pub struct SettingsManager {
    /// Thread-safe settings storage.
    settings: RwLock<GallerySettings>,
    /// Path to the configuration file on disk.
    config_path: PathBuf,
}

impl SettingsManager {
    /// Creates a settings manager backed by the default config path.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError` if settings cannot be loaded from disk.
    pub fn new() -> Result<Self, SettingsError> {
        Self::with_config_path(get_config_path())
    }

    /// Creates a settings manager with a custom config path.
    ///
    /// Missing files yield defaults; nothing is written until
    /// `update_settings` is called.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError` if the directory cannot be created or an
    /// existing file cannot be read or parsed.
    pub fn with_config_path(config_path: PathBuf) -> Result<Self, SettingsError> {
        if let Some(parent) = config_path.parent() {
            create_dir_all(parent)?;
        }

        let settings = if config_path.exists() {
            debug!("Loading settings from existing file: {:?}", config_path);
            let contents = read_to_string(&config_path)?;
            from_str(&contents)?
        } else {
            debug!("Using default settings, no file at: {:?}", config_path);
            GallerySettings::default()
        };

        Ok(Self {
            settings: RwLock::new(settings),
            config_path,
        })
    }

    /// Gets the current settings.
    pub fn get_settings(&self) -> RwLockReadGuard<'_, GallerySettings> {
        self.settings.read()
    }

    /// Gets the configuration file path.
    pub fn get_config_path(&self) -> &PathBuf {
        &self.config_path
    }

    /// Validates, applies and saves new settings.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::InvalidValue` if validation fails (the
    /// current settings are kept), or an I/O or serialization error if they
    /// cannot be saved.
    pub fn update_settings(&self, new_settings: GallerySettings) -> Result<(), SettingsError> {
        new_settings.validate()?;
        *self.settings.write() = new_settings;
        self.save_settings()
    }

    fn save_settings(&self) -> Result<(), SettingsError> {
        debug!("Saving settings to file: {:?}", self.config_path);
        let contents = to_string_pretty(&*self.settings.read())?;
        write(&self.config_path, contents)?;
        Ok(())
    }
}

/// Path of the settings file under the XDG config home.
#[must_use]
pub fn get_config_path() -> PathBuf {
    let mut config_dir = get_xdg_config_home();
    config_dir.push("artgallery");
    config_dir.push("settings.json");
    config_dir
}

/// Uses `XDG_CONFIG_HOME` if set, otherwise `$HOME/.config`.
fn get_xdg_config_home() -> PathBuf {
    if let Ok(config_home) = var("XDG_CONFIG_HOME")
        && !config_home.is_empty()
    {
        return PathBuf::from(config_home);
    }

    if let Ok(home) = var("HOME") {
        let mut path = PathBuf::from(home);
        path.push(".config");
        return path;
    }

    PathBuf::from(".")
}
