use std::env;
use std::time::Duration;

use super::app_config::ConfigError;

const DEFAULT_URL: &str = "http://localhost:8090";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Location of the media-management service
#[derive(Debug, Clone)]
pub struct MediaServiceConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl MediaServiceConfig {
    /// Environment variables:
    /// - MEDIA_SERVICE_URL: Base URL (default: "http://localhost:8090")
    /// - MEDIA_SERVICE_TIMEOUT_SECS: Request timeout in seconds (default: 10)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(
            env::var("MEDIA_SERVICE_URL").ok(),
            env::var("MEDIA_SERVICE_TIMEOUT_SECS").ok(),
        )
    }

    fn from_values(url: Option<String>, timeout: Option<String>) -> Result<Self, ConfigError> {
        let timeout_secs = match timeout {
            None => DEFAULT_TIMEOUT_SECS,
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or(ConfigError::Invalid("MEDIA_SERVICE_TIMEOUT_SECS"))?,
        };

        Ok(Self {
            base_url: url
                .filter(|u| !u.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_URL.to_string()),
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_fall_back_to_defaults() {
        let config = MediaServiceConfig::from_values(None, None).unwrap();

        assert_eq!(config.base_url, "http://localhost:8090");
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    fn should_reject_zero_timeout() {
        let result = MediaServiceConfig::from_values(None, Some("0".to_string()));

        assert!(matches!(
            result,
            Err(ConfigError::Invalid("MEDIA_SERVICE_TIMEOUT_SECS"))
        ));
    }
}
