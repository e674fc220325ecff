use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

pub const DEFAULT_PROVIDER_BASE_URL: &str =
    "http://127.0.0.1:9099/identitytoolkit.googleapis.com";
/// The auth emulator accepts any non-empty key.
pub const DEFAULT_PROVIDER_API_KEY: &str = "fake-api-key";

/// Identity Toolkit endpoint settings.
/// Point `base_url` at the hosted service or a local emulator.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    pub base_url: String,
    /// Browser API key, appended as the `key` query parameter.
    pub api_key: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_PROVIDER_BASE_URL),
            api_key: String::from(DEFAULT_PROVIDER_API_KEY),
        }
    }
}

impl ProviderConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ConfigError::provider(format!(
                "provider.base_url must start with http:// or https://, got '{}'",
                self.base_url
            )));
        }

        if self.api_key.is_empty() {
            return Err(ConfigError::provider("provider.api_key must not be empty"));
        }

        Ok(())
    }
}
