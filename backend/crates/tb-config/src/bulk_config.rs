use crate::{ConfigError, ConfigErrorResult, DEFAULT_LINK_COMMAND, DEFAULT_VERIFY_LINKS};

use serde::Deserialize;

/// Defaults for bulk operations when the caller does not say otherwise
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BulkConfig {
    /// Read links back after creating them
    pub verify_links: bool,
    /// Link phrase for requests that omit one
    pub default_link_command: String,
}

impl Default for BulkConfig {
    fn default() -> Self {
        Self {
            verify_links: DEFAULT_VERIFY_LINKS,
            default_link_command: String::from(DEFAULT_LINK_COMMAND),
        }
    }
}

impl BulkConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.default_link_command.trim().is_empty() {
            return Err(ConfigError::bulk("bulk.default_link_command cannot be empty"));
        }

        Ok(())
    }
}
