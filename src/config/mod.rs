//! Configuration handling for the enrichment and validation tools.
//!
//! Every setting comes from an environment variable and falls back to a
//! local-development default, so the binaries run against a developer's
//! machine without any setup. `Config::from_env` performs the loading and
//! rejects values that cannot be used (non-http base URLs, bad numbers).

use std::env;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Duration;

use url::Url;

/// Environment variable names. Public so tests and scripts can refer to them.
pub const ENV_OWNER_LOOKUP_URL: &str = "OWNER_LOOKUP_URL";
pub const ENV_VALIDATION_BACKEND_URL: &str = "VALIDATION_BACKEND_URL";
pub const ENV_BIND_ADDR: &str = "BIND_ADDR";
pub const ENV_ENRICH_DELAY_MS: &str = "ENRICH_DELAY_MS";
pub const ENV_ENRICH_MAX_LOOKUPS: &str = "ENRICH_MAX_LOOKUPS";

/// Default development values used when environment variables are absent.
const DEFAULT_OWNER_LOOKUP_URL: &str = "http://localhost:3000";
const DEFAULT_VALIDATION_BACKEND_URL: &str = "http://localhost:8000";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";
const DEFAULT_ENRICH_DELAY_MS: u64 = 1000;

/// Application runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    owner_lookup_url: String,
    validation_backend_url: String,
    bind_addr: String,
    enrich_delay: Duration,
    max_lookups: Option<usize>,
}

impl Config {
    /// Create a new config explicitly.
    pub fn new(
        owner_lookup_url: impl Into<String>,
        validation_backend_url: impl Into<String>,
        bind_addr: impl Into<String>,
        enrich_delay: Duration,
        max_lookups: Option<usize>,
    ) -> Self {
        Self {
            owner_lookup_url: trim_base(owner_lookup_url.into()),
            validation_backend_url: trim_base(validation_backend_url.into()),
            bind_addr: bind_addr.into(),
            enrich_delay,
            max_lookups,
        }
    }

    /// Load from environment variables, falling back to development defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let owner_lookup_url = base_url_var(ENV_OWNER_LOOKUP_URL, DEFAULT_OWNER_LOOKUP_URL)?;
        let validation_backend_url =
            base_url_var(ENV_VALIDATION_BACKEND_URL, DEFAULT_VALIDATION_BACKEND_URL)?;
        let bind_addr = env::var(ENV_BIND_ADDR).unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

        let delay_ms = match env::var(ENV_ENRICH_DELAY_MS) {
            Ok(raw) => parse_number::<u64>(ENV_ENRICH_DELAY_MS, &raw)?,
            Err(_) => DEFAULT_ENRICH_DELAY_MS,
        };
        let max_lookups = match env::var(ENV_ENRICH_MAX_LOOKUPS) {
            Ok(raw) if !raw.trim().is_empty() => {
                Some(parse_number::<usize>(ENV_ENRICH_MAX_LOOKUPS, &raw)?)
            }
            _ => None,
        };

        Ok(Self::new(
            owner_lookup_url,
            validation_backend_url,
            bind_addr,
            Duration::from_millis(delay_ms),
            max_lookups,
        ))
    }

    /// Base URL of the owner lookup service, without a trailing slash.
    pub fn owner_lookup_url(&self) -> &str {
        &self.owner_lookup_url
    }
    /// Base URL of the platform classification backend, without a trailing slash.
    pub fn validation_backend_url(&self) -> &str {
        &self.validation_backend_url
    }
    /// TCP bind address (host:port) for the local classification API.
    pub fn bind_addr(&self) -> &str {
        &self.bind_addr
    }
    /// Cooling period between two owner lookups.
    pub fn enrich_delay(&self) -> Duration {
        self.enrich_delay
    }
    /// Maximum number of owner lookups issued in one run, if capped.
    pub fn max_lookups(&self) -> Option<usize> {
        self.max_lookups
    }

    /// Development defaults (mirrors `from_env` with no env overrides).
    pub fn default() -> Self {
        Self::new(
            DEFAULT_OWNER_LOOKUP_URL,
            DEFAULT_VALIDATION_BACKEND_URL,
            DEFAULT_BIND_ADDR,
            Duration::from_millis(DEFAULT_ENRICH_DELAY_MS),
            None,
        )
    }
}

fn trim_base(url: String) -> String {
    url.trim().trim_end_matches('/').to_string()
}

fn base_url_var(field: &'static str, default: &str) -> Result<String, ConfigError> {
    let raw = env::var(field).unwrap_or_else(|_| default.to_string());
    let parsed = Url::parse(raw.trim()).map_err(|e| ConfigError::InvalidValue {
        field,
        reason: e.to_string(),
    })?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidValue {
            field,
            reason: format!("unsupported scheme '{}'", parsed.scheme()),
        });
    }
    Ok(raw)
}

fn parse_number<T>(field: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: Display,
{
    raw.trim().parse::<T>().map_err(|e| ConfigError::InvalidValue {
        field,
        reason: e.to_string(),
    })
}

/// Errors that can occur while building a configuration.
#[derive(Debug)]
pub enum ConfigError {
    InvalidValue { field: &'static str, reason: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidValue { field, reason } => {
                write!(f, "invalid value for '{}': {}", field, reason)
            }
        }
    }
}

impl Error for ConfigError {}
