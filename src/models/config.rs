//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Enrollment endpoint and fallback settings
    #[serde(default)]
    pub submission: SubmissionConfig,

    /// Form field limits
    #[serde(default)]
    pub form: FormConfig,

    /// Log output settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.submission.endpoint.trim().is_empty() {
            return Err(AppError::config("submission.endpoint is empty"));
        }
        Url::parse(&self.submission.endpoint)?;
        if self.submission.user_agent.trim().is_empty() {
            return Err(AppError::config("submission.user_agent is empty"));
        }
        if self.submission.timeout_secs == 0 {
            return Err(AppError::config("submission.timeout_secs must be > 0"));
        }
        if !self.submission.fallback_email.contains('@') {
            return Err(AppError::config(
                "submission.fallback_email must be an email address",
            ));
        }
        if self.form.name_max_len == 0 {
            return Err(AppError::config("form.name_max_len must be > 0"));
        }
        if self.form.phone_max_len == 0 {
            return Err(AppError::config("form.phone_max_len must be > 0"));
        }
        Ok(())
    }
}

/// Enrollment endpoint settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionConfig {
    /// URL the enrollment payload is POSTed to
    #[serde(default = "defaults::endpoint")]
    pub endpoint: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,

    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Mailbox the fallback email is addressed to
    #[serde(default = "defaults::fallback_email")]
    pub fallback_email: String,

    /// Confirm course applications locally instead of calling the endpoint
    #[serde(default)]
    pub simulate_apply: bool,
}

impl Default for SubmissionConfig {
    fn default() -> Self {
        Self {
            endpoint: defaults::endpoint(),
            timeout_secs: defaults::timeout(),
            user_agent: defaults::user_agent(),
            fallback_email: defaults::fallback_email(),
            simulate_apply: false,
        }
    }
}

/// Field length limits for the apply form.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FormConfig {
    /// Maximum name length in characters
    #[serde(default = "defaults::name_max_len")]
    pub name_max_len: usize,

    /// Maximum phone length in characters
    #[serde(default = "defaults::phone_max_len")]
    pub phone_max_len: usize,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            name_max_len: defaults::name_max_len(),
            phone_max_len: defaults::phone_max_len(),
        }
    }
}

/// Log output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default level when RUST_LOG is unset
    #[serde(default = "defaults::log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: defaults::log_level(),
        }
    }
}

mod defaults {
    pub fn endpoint() -> String {
        "https://educationtreeglobal.com/api/enroll".into()
    }
    pub fn timeout() -> u64 {
        15
    }
    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; coursefinder/0.1)".into()
    }
    pub fn fallback_email() -> String {
        "info@educationtreeglobal.com".into()
    }
    pub fn name_max_len() -> usize {
        60
    }
    pub fn phone_max_len() -> usize {
        30
    }
    pub fn log_level() -> String {
        "info".into()
    }
}
