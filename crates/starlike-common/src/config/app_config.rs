//! Application configuration structs
//!
//! Loads configuration from environment variables (and a `.env` file if present).

use std::env;
use std::time::Duration;

use reqwest::Url;
use starlike_core::LikeSelectors;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub backend: BackendConfig,
    pub selectors: LikeSelectors,
}

/// General application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub name: String,
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "production" => Some(Self::Production),
            "staging" => Some(Self::Staging),
            "development" => Some(Self::Development),
            _ => None,
        }
    }
}

/// Likes backend connection settings
#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// Origin (optionally with a path prefix) the like endpoints hang off
    pub base_url: Url,
    pub request_timeout_ms: u64,
    pub connect_timeout_ms: u64,
    /// Raw `Cookie` header value identifying the user's session
    pub session_cookie: Option<String>,
}

impl BackendConfig {
    /// Settings pointing at `base_url` with default timeouts
    #[must_use]
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            request_timeout_ms: default_request_timeout_ms(),
            connect_timeout_ms: default_connect_timeout_ms(),
            session_cookie: None,
        }
    }

    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    #[must_use]
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }
}

// Default value functions
fn default_app_name() -> String {
    "starlike".to_string()
}

fn default_base_url() -> &'static str {
    "http://127.0.0.1:5001"
}

fn default_request_timeout_ms() -> u64 {
    10_000
}

fn default_connect_timeout_ms() -> u64 {
    3_000
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if a variable is present but holds an invalid value
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = LikeSelectors::default();

        let base_url = lookup("LIKES_BASE_URL").unwrap_or_else(|| default_base_url().to_string());
        let base_url = Url::parse(&base_url)
            .ok()
            .filter(|url| !url.cannot_be_a_base())
            .ok_or_else(|| ConfigError::InvalidValue("LIKES_BASE_URL", base_url.clone()))?;

        Ok(Self {
            app: AppSettings {
                name: lookup("APP_NAME").unwrap_or_else(default_app_name),
                env: lookup("APP_ENV")
                    .and_then(|s| Environment::parse(&s))
                    .unwrap_or_default(),
            },
            backend: BackendConfig {
                base_url,
                request_timeout_ms: parse_timeout(
                    &lookup,
                    "LIKES_REQUEST_TIMEOUT_MS",
                    default_request_timeout_ms(),
                )?,
                connect_timeout_ms: parse_timeout(
                    &lookup,
                    "LIKES_CONNECT_TIMEOUT_MS",
                    default_connect_timeout_ms(),
                )?,
                session_cookie: lookup("LIKES_SESSION_COOKIE").filter(|s| !s.trim().is_empty()),
            },
            selectors: LikeSelectors {
                message_class: lookup("LIKES_MESSAGE_CLASS").unwrap_or(defaults.message_class),
                id_key: lookup("LIKES_ID_KEY").unwrap_or(defaults.id_key),
                button_class: lookup("LIKES_BUTTON_CLASS").unwrap_or(defaults.button_class),
                filled_class: lookup("LIKES_ICON_FILLED").unwrap_or(defaults.filled_class),
                outline_class: lookup("LIKES_ICON_OUTLINE").unwrap_or(defaults.outline_class),
            },
        })
    }
}

fn parse_timeout<F>(lookup: &F, key: &'static str, default: u64) -> Result<u64, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse::<u64>()
            .ok()
            .filter(|ms| *ms > 0)
            .ok_or(ConfigError::InvalidValue(key, raw)),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
