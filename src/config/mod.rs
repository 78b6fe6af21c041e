//! User preferences and their on-disk persistence.

pub mod settings;

pub use settings::{GallerySettings, SettingsError, SettingsManager, get_config_path};
