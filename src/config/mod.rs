//! Configuration module for the card engine

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

/// Main engine settings
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub assets: AssetSettings,
    pub export: ExportSettings,
}

/// Asset locations
#[derive(Debug, Clone, Deserialize)]
pub struct AssetSettings {
    /// Directory holding the card typeface files
    pub fonts_path: PathBuf,
}

/// Export tuning
#[derive(Debug, Clone, Deserialize)]
pub struct ExportSettings {
    /// JPEG encode quality, 0-100
    pub jpeg_quality: u8,
}

impl Settings {
    /// Load configuration from files and environment variables
    ///
    /// Configuration priority (highest to lowest):
    /// 1. Environment variables (prefixed with HOLOCARD_)
    /// 2. config/local.toml (gitignored)
    /// 3. config/default.toml
    pub fn load() -> Result<Self, ConfigError> {
        let config_dir = std::env::var("CONFIG_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("config"));

        let builder = Config::builder()
            .add_source(File::from(config_dir.join("default.toml")).required(false))
            .add_source(File::from(config_dir.join("local.toml")).required(false))
            .add_source(
                Environment::with_prefix("HOLOCARD")
                    .separator("__")
                    .try_parsing(true),
            );

        builder.build()?.try_deserialize()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            assets: AssetSettings {
                fonts_path: PathBuf::from("assets/fonts"),
            },
            export: ExportSettings {
                jpeg_quality: crate::engine::JPEG_QUALITY,
            },
        }
    }
}
