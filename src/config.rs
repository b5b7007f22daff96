//! TOML configuration.
//!
//! Every setting has a default, so qrn runs without a config file. A file
//! only needs the sections it changes:
//!
//! ```toml
//! [data]
//! dir = "/usr/share/qrn"
//!
//! [data.files]
//! decotype = "mushaf_dt_2024.json"
//!
//! [defaults]
//! source = "tanzil-uthmani"
//! sep = "|"
//! ```

use anyhow::{Context, Result};
use qrn_core::Source;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Config file looked up when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "./config/qrn.toml";

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DataConfig {
    /// Directory holding the encoding data files.
    #[serde(default = "default_data_dir")]
    pub dir: PathBuf,
    /// Per-source file overrides, keyed by source name. Relative paths are
    /// resolved against `dir`.
    #[serde(default)]
    pub files: HashMap<String, PathBuf>,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dir: default_data_dir(),
            files: HashMap::new(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data")
}

#[derive(Debug, Deserialize, Clone)]
pub struct DefaultsConfig {
    #[serde(default = "default_source")]
    pub source: String,
    #[serde(default = "default_sep")]
    pub sep: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            source: default_source(),
            sep: default_sep(),
        }
    }
}

fn default_source() -> String {
    Source::default().name().to_string()
}

fn default_sep() -> String {
    "\t".to_string()
}

impl DataConfig {
    /// Path of the data file for `source`.
    pub fn path_for(&self, source: Source) -> PathBuf {
        let file = self
            .files
            .get(source.name())
            .cloned()
            .unwrap_or_else(|| PathBuf::from(source.file_name()));
        if file.is_absolute() {
            file
        } else {
            self.dir.join(file)
        }
    }
}

impl Config {
    /// Built-in defaults, used when no config file exists.
    pub fn minimal() -> Self {
        Self::default()
    }

    /// The configured default source.
    pub fn default_source(&self) -> Result<Source> {
        self.defaults
            .source
            .parse()
            .with_context(|| "invalid defaults.source")
    }
}

/// Read and validate a config file.
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: Config = toml::from_str(&content).with_context(|| "Failed to parse config file")?;

    validate(&config)?;
    Ok(config)
}

/// Load `path` if given; otherwise load [`DEFAULT_CONFIG_PATH`] when it
/// exists, falling back to [`Config::minimal`].
pub fn load_or_default(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => load_config(path),
        None => {
            let default = Path::new(DEFAULT_CONFIG_PATH);
            if default.exists() {
                load_config(default)
            } else {
                Ok(Config::minimal())
            }
        }
    }
}

fn validate(config: &Config) -> Result<()> {
    if config.defaults.sep.is_empty() {
        anyhow::bail!("defaults.sep must not be empty");
    }

    config.default_source()?;

    for name in config.data.files.keys() {
        if name.parse::<Source>().is_err() {
            anyhow::bail!(
                "Unknown source in data.files: '{}'. Must be tanzil-simple, tanzil-uthmani, or decotype.",
                name
            );
        }
    }

    Ok(())
}
