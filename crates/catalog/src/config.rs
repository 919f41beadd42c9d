use std::env;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("TMDB_API_KEY is not set")]
    MissingApiKey,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub language: String,
    pub data_path: PathBuf,
}

impl Config {
    pub fn new(api_key: impl Into<String>, data_path: impl AsRef<Path>) -> Self {
        Self {
            api_key: api_key.into(),
            language: "en-US".to_string(),
            data_path: data_path.as_ref().to_path_buf(),
        }
    }

    /// Read configuration from the environment. `TMDB_API_KEY` is required;
    /// `TMDB_LANGUAGE` and `DATA_PATH` fall back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = env::var("TMDB_API_KEY").map_err(|_| ConfigError::MissingApiKey)?;
        let language = env::var("TMDB_LANGUAGE").unwrap_or_else(|_| "en-US".to_string());
        let data_path = env::var("DATA_PATH").unwrap_or_else(|_| "./data".to_string());

        Ok(Self {
            api_key,
            language,
            data_path: PathBuf::from(data_path),
        })
    }

    /// Path of the key-value store file inside the data directory.
    pub fn store_path(&self) -> PathBuf {
        self.data_path.join("catalog.json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_path_under_data_dir() {
        let config = Config::new("key", "/data");
        assert_eq!(config.store_path(), PathBuf::from("/data/catalog.json"));
    }

    #[test]
    fn test_defaults() {
        let config = Config::new("key", "./data");
        assert_eq!(config.language, "en-US");
    }
}
