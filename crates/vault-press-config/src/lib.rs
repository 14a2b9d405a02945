use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// Settings read from `config.toml`. Every field is optional; command-line
/// arguments take precedence over whatever is set here.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Root of the vault to publish
    pub vault_path: Option<PathBuf>,
    /// Prefix for every rewritten link, e.g. `/knowledge`
    pub url_base: Option<String>,
    /// Directory-name patterns to leave out, e.g. `_site`
    pub exclude: Vec<String>,
    pub mermaid_script_src: Option<String>,
}

impl Config {
    /// Load the config at `config_path`. A missing file is `Ok(None)`.
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        config.vault_path = config.vault_path.map(|path| Self::expand_path(&path));

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/vault-press");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Expands a leading `~` only; environment variables are left as written.
    fn expand_path(path: &Path) -> PathBuf {
        let path_str = path.to_string_lossy();
        PathBuf::from(shellexpand::tilde(&path_str).as_ref())
    }
}
