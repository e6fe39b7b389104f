use crate::{ConfigError, ConfigErrorResult};

use std::fmt::Display;
use std::ops::RangeInclusive;
use std::time::Duration;

use serde::Deserialize;

pub(crate) const ATTEMPTS_RANGE: RangeInclusive<u32> = 1..=10;
pub(crate) const INITIAL_DELAY_MS_RANGE: RangeInclusive<u64> = 10..=10_000;
pub(crate) const MAX_DELAY_SECS_RANGE: RangeInclusive<u64> = 1..=60;
pub(crate) const BACKOFF_RANGE: RangeInclusive<f64> = 1.0..=10.0;

/// How a single tracker call is repeated after a transient failure.
///
/// Only the HTTP call that failed is attempted again; a batch item is never
/// re-run as a whole.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RetryConfig {
    /// Attempts per tracker call, the first one included
    pub max_attempts: u32,
    /// Pause before the second attempt
    pub initial_delay_ms: u64,
    /// Ceiling for the growing pause between attempts
    pub max_delay_secs: u64,
    /// Growth factor applied to the pause after each failed attempt
    pub backoff_multiplier: f64,
    /// Scale each pause by a random factor in 0.5..1.5
    pub jitter: bool,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_delay_ms: 100,
            max_delay_secs: 5,
            backoff_multiplier: 2.0,
            jitter: true,
        }
    }
}

impl RetryConfig {
    pub fn initial_delay(&self) -> Duration {
        Duration::from_millis(self.initial_delay_ms)
    }

    pub fn max_delay(&self) -> Duration {
        Duration::from_secs(self.max_delay_secs)
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        check_range(
            "max_attempts",
            self.max_attempts,
            &ATTEMPTS_RANGE,
            "attempts per tracker call",
        )?;
        check_range(
            "initial_delay_ms",
            self.initial_delay_ms,
            &INITIAL_DELAY_MS_RANGE,
            "ms before retrying a tracker call",
        )?;
        check_range(
            "max_delay_secs",
            self.max_delay_secs,
            &MAX_DELAY_SECS_RANGE,
            "s between tracker call attempts",
        )?;
        check_range(
            "backoff_multiplier",
            self.backoff_multiplier,
            &BACKOFF_RANGE,
            "x growth per failed tracker call",
        )?;

        if self.initial_delay() > self.max_delay() {
            return Err(ConfigError::retry(format!(
                "retry.initial_delay_ms ({}ms) exceeds retry.max_delay_secs ({}s); \
                 the first tracker call retry would already be past the cap",
                self.initial_delay_ms, self.max_delay_secs
            )));
        }

        Ok(())
    }
}

#[track_caller]
fn check_range<T: PartialOrd + Display>(
    field: &str,
    value: T,
    range: &RangeInclusive<T>,
    unit: &str,
) -> ConfigErrorResult<()> {
    if range.contains(&value) {
        return Ok(());
    }

    Err(ConfigError::retry(format!(
        "retry.{} must be {}-{} {}, got {}",
        field,
        range.start(),
        range.end(),
        unit,
        value
    )))
}
