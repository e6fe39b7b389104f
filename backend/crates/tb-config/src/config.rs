use crate::{
    BulkConfig, CONFIG_DIR_ENV, CONFIG_DIR_NAME, CONFIG_FILE_NAME, ConfigError, ConfigErrorResult,
    LoggingConfig, RetryConfig, TrackerConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub tracker: TrackerConfig,
    pub retry: RetryConfig,
    pub logging: LoggingConfig,
    pub bulk: BulkConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for TB_CONFIG_DIR env var, else use ./.tb/
    /// 2. Load config.toml if it exists, else use defaults
    /// 3. Apply TB_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_path = Self::config_dir()?.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: TB_CONFIG_DIR env var > ./.tb/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(CONFIG_DIR_NAME))
    }

    /// Validate all configuration.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.tracker.validate()?;
        self.retry.validate()?;
        self.bulk.validate()?;

        Ok(())
    }

    /// Log configuration summary (NEVER logs the token).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  tracker: {} (timeout {}s, token: {})",
            self.tracker.base_url,
            self.tracker.timeout_secs,
            if self.tracker.token.is_some() {
                "set"
            } else {
                "none"
            }
        );

        info!(
            "  retry: attempts={}, initial={:?}, max={:?}, backoff={}x, jitter={}",
            self.retry.max_attempts,
            self.retry.initial_delay(),
            self.retry.max_delay(),
            self.retry.backoff_multiplier,
            self.retry.jitter
        );

        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stderr")
        );

        info!(
            "  bulk: verify_links={}, default_link_command='{}'",
            self.bulk.verify_links, self.bulk.default_link_command
        );
    }

    fn apply_env_overrides(&mut self) {
        // Tracker
        Self::apply_env_string("TB_TRACKER_URL", &mut self.tracker.base_url);
        Self::apply_env_option_string("TB_TRACKER_TOKEN", &mut self.tracker.token);
        Self::apply_env_parse("TB_TRACKER_TIMEOUT_SECS", &mut self.tracker.timeout_secs);

        // Retry
        Self::apply_env_parse("TB_RETRY_MAX_ATTEMPTS", &mut self.retry.max_attempts);
        Self::apply_env_parse(
            "TB_RETRY_INITIAL_DELAY_MS",
            &mut self.retry.initial_delay_ms,
        );
        Self::apply_env_parse("TB_RETRY_MAX_DELAY_SECS", &mut self.retry.max_delay_secs);
        Self::apply_env_parse(
            "TB_RETRY_BACKOFF_MULTIPLIER",
            &mut self.retry.backoff_multiplier,
        );
        Self::apply_env_bool("TB_RETRY_JITTER", &mut self.retry.jitter);

        // Logging
        Self::apply_env_parse("TB_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("TB_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("TB_LOG_FILE", &mut self.logging.file);

        // Bulk
        Self::apply_env_bool("TB_BULK_VERIFY_LINKS", &mut self.bulk.verify_links);
        Self::apply_env_string(
            "TB_BULK_DEFAULT_LINK_COMMAND",
            &mut self.bulk.default_link_command,
        );
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
