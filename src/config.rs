//! Client configuration
//!
//! Process-wide tunables (access token, request throttle, timeout, request body
//! logging) live here and are owned by the transport. Nothing is read from global
//! state after the configuration has been built.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{SmartsheetError, SmartsheetResult};

/// Default API root
pub const DEFAULT_BASE_URL: &str = "https://api.smartsheet.com/2.0";

/// Configuration for a [`crate::SmartsheetClient`]
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClientConfig {
    /// API root, without trailing slash
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API access token
    #[serde(default)]
    pub access_token: String,

    /// Pause after every call, keeps usage under the per-minute request ceiling
    #[serde(default = "default_request_delay_ms")]
    pub request_delay_ms: u64,

    /// Overall per-call deadline
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    /// Log outgoing JSON bodies at debug level
    #[serde(default)]
    pub log_request_bodies: bool,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_request_delay_ms() -> u64 {
    1000
}

fn default_timeout_seconds() -> u64 {
    120
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            access_token: String::new(),
            request_delay_ms: default_request_delay_ms(),
            timeout_seconds: default_timeout_seconds(),
            log_request_bodies: false,
        }
    }
}

// Implement Debug by hand so the token never reaches a log line
impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("access_token", &"<redacted>")
            .field("request_delay_ms", &self.request_delay_ms)
            .field("timeout_seconds", &self.timeout_seconds)
            .field("log_request_bodies", &self.log_request_bodies)
            .finish()
    }
}

impl ClientConfig {
    /// Create a configuration with default settings and the given token
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            ..Self::default()
        }
    }

    /// Create from environment variables
    ///
    /// Reads `SMARTSHEET_ACCESS_TOKEN` (required), and optionally
    /// `SMARTSHEET_BASE_URL`, `SMARTSHEET_REQUEST_DELAY_MS`, `SMARTSHEET_TIMEOUT_SECS`.
    pub fn from_env() -> SmartsheetResult<Self> {
        let access_token = std::env::var("SMARTSHEET_ACCESS_TOKEN").map_err(|_| {
            SmartsheetError::Config("SMARTSHEET_ACCESS_TOKEN environment variable not set".to_string())
        })?;

        let mut config = Self::new(access_token.trim());
        if let Ok(base_url) = std::env::var("SMARTSHEET_BASE_URL") {
            config = config.with_base_url(base_url);
        }
        if let Some(delay) = parse_env_u64("SMARTSHEET_REQUEST_DELAY_MS")? {
            config.request_delay_ms = delay;
        }
        if let Some(timeout) = parse_env_u64("SMARTSHEET_TIMEOUT_SECS")? {
            config.timeout_seconds = timeout;
        }
        config.validate()?;
        Ok(config)
    }

    /// Load from a TOML file
    #[cfg(feature = "config-file")]
    pub fn from_toml_file(path: &std::path::Path) -> SmartsheetResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content).map_err(|e| {
            SmartsheetError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })?;
        config.base_url = config.base_url.trim_end_matches('/').to_string();
        config.validate()?;
        Ok(config)
    }

    /// Set the API root
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the post-call delay
    pub fn with_request_delay(mut self, delay: Duration) -> Self {
        self.request_delay_ms = delay.as_millis() as u64;
        self
    }

    /// Set the per-call timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout_seconds = seconds;
        self
    }

    /// Enable or disable request body logging
    pub fn with_request_body_logging(mut self, enabled: bool) -> Self {
        self.log_request_bodies = enabled;
        self
    }

    pub fn request_delay(&self) -> Duration {
        Duration::from_millis(self.request_delay_ms)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// Value for the Authorization header
    pub fn authorization_header(&self) -> String {
        if self.access_token.starts_with("Bearer ") {
            self.access_token.clone()
        } else {
            format!("Bearer {}", self.access_token)
        }
    }

    /// Check the settings needed to talk to the service
    pub fn validate(&self) -> SmartsheetResult<()> {
        if self.access_token.trim().is_empty() {
            return Err(SmartsheetError::Config(
                "Access token cannot be empty".to_string(),
            ));
        }
        if !(self.base_url.starts_with("https://") || self.base_url.starts_with("http://")) {
            return Err(SmartsheetError::Config(format!(
                "Base URL must start with http:// or https://, got '{}'",
                self.base_url
            )));
        }
        if self.timeout_seconds == 0 {
            return Err(SmartsheetError::Config(
                "Timeout must be at least one second".to_string(),
            ));
        }
        Ok(())
    }
}

fn parse_env_u64(name: &str) -> SmartsheetResult<Option<u64>> {
    match std::env::var(name) {
        Ok(value) => value
            .trim()
            .parse::<u64>()
            .map(Some)
            .map_err(|_| SmartsheetError::Config(format!("{name} must be a whole number, got '{value}'"))),
        Err(_) => Ok(None),
    }
}
