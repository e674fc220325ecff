use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

// Session lifetime constraints (seconds)
pub const MIN_SESSION_TTL_SECS: u64 = 60;
pub const MAX_SESSION_TTL_SECS: u64 = 2_592_000;
pub const DEFAULT_SESSION_TTL_SECS: u64 = 86_400;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// How long a login remains valid without re-authenticating.
    pub ttl_secs: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            ttl_secs: DEFAULT_SESSION_TTL_SECS,
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.ttl_secs < MIN_SESSION_TTL_SECS || self.ttl_secs > MAX_SESSION_TTL_SECS {
            return Err(ConfigError::config(format!(
                "session.ttl_secs must be {}-{}, got {}",
                MIN_SESSION_TTL_SECS, MAX_SESSION_TTL_SECS, self.ttl_secs
            )));
        }

        Ok(())
    }
}
