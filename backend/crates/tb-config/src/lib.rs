mod bulk_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod retry_config;
mod tracker_config;

pub use bulk_config::BulkConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use retry_config::RetryConfig;
pub use tracker_config::TrackerConfig;

const CONFIG_DIR_ENV: &str = "TB_CONFIG_DIR";
const CONFIG_DIR_NAME: &str = ".tb";
const CONFIG_FILE_NAME: &str = "config.toml";

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8080";
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_COLORED: bool = true;
const DEFAULT_VERIFY_LINKS: bool = true;
const DEFAULT_LINK_COMMAND: &str = "relates to";

#[cfg(test)]
mod tests;
