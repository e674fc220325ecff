use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

// Sampling interval constraints (seconds)
pub const MIN_STATS_INTERVAL_SECS: u64 = 1;
pub const MAX_STATS_INTERVAL_SECS: u64 = 3600;
pub const DEFAULT_STATS_INTERVAL_SECS: u64 = 5;

// Broadcast channel capacity constraints
pub const MIN_STATS_CHANNEL_CAPACITY: usize = 1;
pub const MAX_STATS_CHANNEL_CAPACITY: usize = 10_000;
pub const DEFAULT_STATS_CHANNEL_CAPACITY: usize = 100;

/// Usage statistics broadcast settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StatsConfig {
    /// How often the request total is sampled and pushed to WebSocket clients.
    pub interval_secs: u64,
    /// Broadcast channel capacity; slow clients drop the oldest updates.
    pub channel_capacity: usize,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            interval_secs: DEFAULT_STATS_INTERVAL_SECS,
            channel_capacity: DEFAULT_STATS_CHANNEL_CAPACITY,
        }
    }
}

impl StatsConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.interval_secs < MIN_STATS_INTERVAL_SECS
            || self.interval_secs > MAX_STATS_INTERVAL_SECS
        {
            return Err(ConfigError::config(format!(
                "stats.interval_secs must be {}-{}, got {}",
                MIN_STATS_INTERVAL_SECS, MAX_STATS_INTERVAL_SECS, self.interval_secs
            )));
        }

        if self.channel_capacity < MIN_STATS_CHANNEL_CAPACITY
            || self.channel_capacity > MAX_STATS_CHANNEL_CAPACITY
        {
            return Err(ConfigError::config(format!(
                "stats.channel_capacity must be {}-{}, got {}",
                MIN_STATS_CHANNEL_CAPACITY, MAX_STATS_CHANNEL_CAPACITY, self.channel_capacity
            )));
        }

        Ok(())
    }
}
