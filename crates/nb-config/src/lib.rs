mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod provider_config;
mod server_config;
mod session_config;
mod stats_config;
mod storage_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use provider_config::ProviderConfig;
pub use server_config::ServerConfig;
pub use session_config::SessionConfig;
pub use stats_config::StatsConfig;
pub use storage_config::StorageConfig;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const MIN_PORT: u16 = 1024;
const DEFAULT_DATABASE_FILENAME: &str = "noteboard.db";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
