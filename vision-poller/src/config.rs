//! Poll configuration
//!
//! The attempt budget and the wait between attempts. Both stay fixed for the
//! whole poll session: there is no backoff and no jitter.

use std::time::Duration;

use crate::error::{PollError, Result};

/// Attempts made before giving up when nothing else is configured
pub const DEFAULT_MAX_ATTEMPTS: u32 = 40;

/// Wait between attempts when nothing else is configured
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(3);

/// Poll session configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollConfig {
    /// Maximum number of fetches for one job
    pub max_attempts: u32,

    /// Constant delay between two fetches
    pub interval: Duration,
}

impl PollConfig {
    pub fn new(max_attempts: u32, interval: Duration) -> Self {
        Self {
            max_attempts,
            interval,
        }
    }

    /// Creates configuration from environment variables
    ///
    /// Recognised environment variables:
    /// - VISION_POLL_MAX_ATTEMPTS (optional, default: 40)
    /// - VISION_POLL_INTERVAL_MS (optional, milliseconds, default: 3000)
    ///
    /// Missing or unparsable values fall back to the defaults.
    pub fn from_env() -> Self {
        let max_attempts = std::env::var("VISION_POLL_MAX_ATTEMPTS")
            .ok()
            .and_then(|s| s.parse::<u32>().ok())
            .unwrap_or(DEFAULT_MAX_ATTEMPTS);

        let interval = std::env::var("VISION_POLL_INTERVAL_MS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_INTERVAL);

        Self {
            max_attempts,
            interval,
        }
    }

    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<()> {
        if self.max_attempts == 0 {
            return Err(PollError::InvalidConfig(
                "max_attempts must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for PollConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ATTEMPTS, DEFAULT_INTERVAL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PollConfig::default();
        assert_eq!(config.max_attempts, 40);
        assert_eq!(config.interval, Duration::from_secs(3));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let config = PollConfig::default().with_max_attempts(0);
        assert!(matches!(
            config.validate(),
            Err(PollError::InvalidConfig(_))
        ));

        // A zero interval is allowed: attempts then run back to back
        let config = PollConfig::new(1, Duration::ZERO);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builders() {
        let config = PollConfig::default()
            .with_max_attempts(3)
            .with_interval(Duration::from_millis(250));
        assert_eq!(config, PollConfig::new(3, Duration::from_millis(250)));
    }
}
