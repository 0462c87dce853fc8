//! Environment-backed configuration.
//!
//! Every setting has a default. Override with `TITLE_GUARD_*` environment variables.

pub mod error;

#[cfg(test)]
mod tests;

pub use error::ConfigError;

use std::env;
use std::net::IpAddr;
use std::path::{Path, PathBuf};

/// Server configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `TITLE_GUARD_*` overrides on top of defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port. Default: `8080`.
    pub port: u16,

    /// IP address to bind to. Default: `127.0.0.1`.
    pub bind_addr: IpAddr,

    /// Directory holding `config.json`, `model.safetensors` and `tokenizer.json`.
    /// When unset the stub embedder is used.
    pub model_path: Option<PathBuf>,

    /// Existing-title corpus. Default: `./data/existing_titles.txt`.
    pub corpus_path: PathBuf,

    /// Restricted words. Default: `./data/restricted_words.txt`.
    pub restricted_words_path: PathBuf,

    /// Forbidden prefixes and suffixes. Default: `./data/forbidden_prefix_suffix.txt`.
    pub forbidden_affixes_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            bind_addr: IpAddr::V4(std::net::Ipv4Addr::new(127, 0, 0, 1)),
            model_path: None,
            corpus_path: PathBuf::from("./data/existing_titles.txt"),
            restricted_words_path: PathBuf::from("./data/restricted_words.txt"),
            forbidden_affixes_path: PathBuf::from("./data/forbidden_prefix_suffix.txt"),
        }
    }
}

impl Config {
    const ENV_PORT: &'static str = "TITLE_GUARD_PORT";
    const ENV_BIND_ADDR: &'static str = "TITLE_GUARD_BIND_ADDR";
    const ENV_MODEL_PATH: &'static str = "TITLE_GUARD_MODEL_PATH";
    const ENV_CORPUS_PATH: &'static str = "TITLE_GUARD_CORPUS_PATH";
    const ENV_RESTRICTED_WORDS_PATH: &'static str = "TITLE_GUARD_RESTRICTED_WORDS_PATH";
    const ENV_FORBIDDEN_AFFIXES_PATH: &'static str = "TITLE_GUARD_FORBIDDEN_AFFIXES_PATH";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        Ok(Self {
            port: Self::parse_port_from_env(defaults.port)?,
            bind_addr: Self::parse_bind_addr_from_env(defaults.bind_addr)?,
            model_path: Self::parse_optional_path_from_env(Self::ENV_MODEL_PATH),
            corpus_path: Self::parse_path_from_env(Self::ENV_CORPUS_PATH, defaults.corpus_path),
            restricted_words_path: Self::parse_path_from_env(
                Self::ENV_RESTRICTED_WORDS_PATH,
                defaults.restricted_words_path,
            ),
            forbidden_affixes_path: Self::parse_path_from_env(
                Self::ENV_FORBIDDEN_AFFIXES_PATH,
                defaults.forbidden_affixes_path,
            ),
        })
    }

    /// Checks that every configured path exists and has the expected kind.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(ref path) = self.model_path {
            Self::require_dir(Self::ENV_MODEL_PATH, path)?;
        }

        Self::require_file(Self::ENV_CORPUS_PATH, &self.corpus_path)?;
        Self::require_file(Self::ENV_RESTRICTED_WORDS_PATH, &self.restricted_words_path)?;
        Self::require_file(Self::ENV_FORBIDDEN_AFFIXES_PATH, &self.forbidden_affixes_path)?;

        Ok(())
    }

    /// Returns `"{bind_addr}:{port}"` (useful for logging/binding).
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }

    fn require_file(setting: &'static str, path: &Path) -> Result<(), ConfigError> {
        let path = path.to_path_buf();
        match path.metadata() {
            Err(_) => Err(ConfigError::PathNotFound { setting, path }),
            Ok(meta) if !meta.is_file() => Err(ConfigError::NotAFile { setting, path }),
            Ok(_) => Ok(()),
        }
    }

    fn require_dir(setting: &'static str, path: &Path) -> Result<(), ConfigError> {
        let path = path.to_path_buf();
        match path.metadata() {
            Err(_) => Err(ConfigError::PathNotFound { setting, path }),
            Ok(meta) if !meta.is_dir() => Err(ConfigError::NotADirectory { setting, path }),
            Ok(_) => Ok(()),
        }
    }

    fn parse_port_from_env(default: u16) -> Result<u16, ConfigError> {
        let Ok(value) = env::var(Self::ENV_PORT) else {
            return Ok(default);
        };

        match value.trim().parse::<u16>() {
            Ok(0) => Err(ConfigError::ZeroPort {
                setting: Self::ENV_PORT,
            }),
            Ok(port) => Ok(port),
            Err(source) => Err(ConfigError::InvalidPort {
                setting: Self::ENV_PORT,
                value,
                source,
            }),
        }
    }

    fn parse_bind_addr_from_env(default: IpAddr) -> Result<IpAddr, ConfigError> {
        match env::var(Self::ENV_BIND_ADDR) {
            Ok(value) => value
                .trim()
                .parse()
                .map_err(|source| ConfigError::InvalidBindAddr {
                    setting: Self::ENV_BIND_ADDR,
                    value,
                    source,
                }),
            Err(_) => Ok(default),
        }
    }

    fn parse_path_from_env(var_name: &str, default: PathBuf) -> PathBuf {
        env::var(var_name).map(PathBuf::from).unwrap_or(default)
    }

    fn parse_optional_path_from_env(var_name: &str) -> Option<PathBuf> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    }
}
