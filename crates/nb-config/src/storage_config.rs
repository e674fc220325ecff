use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

pub const DEFAULT_STORAGE_BASE_URL: &str = "http://127.0.0.1:9199";
pub const DEFAULT_STORAGE_BUCKET: &str = "noteboard.appspot.com";

/// Object storage endpoint settings for profile pictures.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub base_url: String,
    pub bucket: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_STORAGE_BASE_URL),
            bucket: String::from(DEFAULT_STORAGE_BUCKET),
        }
    }
}

impl StorageConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ConfigError::storage(format!(
                "storage.base_url must start with http:// or https://, got '{}'",
                self.base_url
            )));
        }

        if self.bucket.is_empty() {
            return Err(ConfigError::storage("storage.bucket must not be empty"));
        }

        Ok(())
    }
}
