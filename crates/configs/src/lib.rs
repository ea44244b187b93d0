//! # configs
//!
//! Layered runtime settings: built-in defaults, then `config/default.toml`
//! and `config/local.toml` (or the file named by `ARUNIKA_CONFIG`), then
//! `ARUNIKA__`-prefixed environment variables. Call [`load_dotenv`] before
//! [`Settings::load`] so a `.env` file can feed the environment layer.

use std::path::{Path, PathBuf};

use config::{builder::DefaultState, Config, ConfigBuilder, Environment, File, FileFormat};
use serde::Deserialize;
use thiserror::Error;

pub const ENV_PREFIX: &str = "ARUNIKA";
pub const CONFIG_FILE_VAR: &str = "ARUNIKA_CONFIG";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    File,
    Memory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    pub backend: StorageBackend,
    /// Directory holding `<key>.json` for the file backend
    pub data_dir: PathBuf,
    pub key: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogSettings {
    /// Default filter directive; `RUST_LOG` wins when set.
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SiteSettings {
    /// Prefix for public course links
    pub base_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub storage: StorageSettings,
    pub log: LogSettings,
    pub site: SiteSettings,
}

/// Loads `.env` from the working directory or a parent, if there is one.
/// Returns its path so the caller can log it once tracing is installed.
pub fn load_dotenv() -> Option<PathBuf> {
    dotenvy::dotenv().ok()
}

/// Loads a specific env file into the process environment.
pub fn load_dotenv_from(path: &Path) -> Option<PathBuf> {
    dotenvy::from_path(path).ok().map(|()| path.to_path_buf())
}

impl Settings {
    /// Reads config files and the environment.
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = defaults()?;
        builder = match std::env::var(CONFIG_FILE_VAR) {
            Ok(path) => builder.add_source(File::with_name(&path)),
            Err(_) => builder
                .add_source(File::with_name("config/default").required(false))
                .add_source(File::with_name("config/local").required(false)),
        };
        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__"),
        );

        Ok(builder.build()?.try_deserialize()?)
    }

    /// Defaults overlaid with a TOML document.
    pub fn from_toml(toml: &str) -> Result<Self, ConfigError> {
        let builder = defaults()?.add_source(File::from_str(toml, FileFormat::Toml));
        Ok(builder.build()?.try_deserialize()?)
    }
}

fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Ok(Config::builder()
        .set_default("storage.backend", "file")?
        .set_default("storage.data_dir", "./data")?
        .set_default("storage.key", "arunika_lms_state_v2")?
        .set_default("log.level", "info")?
        .set_default("log.format", "pretty")?
        .set_default("site.base_url", "http://localhost:3000/")?)
}
