use crate::{
    ConfigError, ConfigErrorResult, DatabaseConfig, LoggingConfig, ProviderConfig, ServerConfig,
    SessionConfig, StatsConfig, StorageConfig,
};

use std::path::PathBuf;

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub provider: ProviderConfig,
    pub storage: StorageConfig,
    pub session: SessionConfig,
    pub stats: StatsConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config with full production error handling.
    ///
    /// Loading order:
    /// 1. Check for NB_CONFIG_DIR env var, else use ./.noteboard/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply NB_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        // Auto-create config directory
        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join("config.toml");

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &PathBuf) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.clone(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: NB_CONFIG_DIR env var > ./.noteboard/ (relative to cwd)
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        if let Ok(dir) = std::env::var("NB_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(".noteboard"))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.provider.validate()?;
        self.storage.validate()?;
        self.session.validate()?;
        self.stats.validate()?;

        // Validate database path doesn't escape config dir
        let db_path = std::path::Path::new(&self.database.path);
        if db_path.is_absolute() || self.database.path.contains("..") {
            return Err(ConfigError::database(
                "database.path must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }

    /// Get absolute path to database file.
    pub fn database_path(&self) -> Result<PathBuf, ConfigError> {
        let config_dir = Self::config_dir()?;
        Ok(config_dir.join(&self.database.path))
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!("  database: {}", self.database.path);
        info!("  provider: {}", self.provider.base_url);
        info!(
            "  storage: {} (bucket: {})",
            self.storage.base_url, self.storage.bucket
        );
        info!("  session: ttl={}s", self.session.ttl_secs);
        info!(
            "  stats: interval={}s, capacity={}",
            self.stats.interval_secs, self.stats.channel_capacity
        );
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("NB_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("NB_SERVER_PORT", &mut self.server.port);

        // Database
        Self::apply_env_string("NB_DATABASE_PATH", &mut self.database.path);

        // Identity provider
        Self::apply_env_string("NB_PROVIDER_BASE_URL", &mut self.provider.base_url);
        Self::apply_env_string("NB_PROVIDER_API_KEY", &mut self.provider.api_key);

        // Object storage
        Self::apply_env_string("NB_STORAGE_BASE_URL", &mut self.storage.base_url);
        Self::apply_env_string("NB_STORAGE_BUCKET", &mut self.storage.bucket);

        // Sessions
        Self::apply_env_parse("NB_SESSION_TTL_SECS", &mut self.session.ttl_secs);

        // Stats broadcast
        Self::apply_env_parse("NB_STATS_INTERVAL_SECS", &mut self.stats.interval_secs);
        Self::apply_env_parse(
            "NB_STATS_CHANNEL_CAPACITY",
            &mut self.stats.channel_capacity,
        );

        // Logging
        Self::apply_env_parse("NB_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("NB_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("NB_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
