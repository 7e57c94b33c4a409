//! Console configuration parsed from environment variables.

use std::collections::HashMap;
use std::env::VarError;

use tracing::warn;

pub const DEFAULT_API_SERVER: &str = "http://127.0.0.1:3000";
pub const DEFAULT_CREATED_BY: &str = "First name Last name";
pub const DEFAULT_FILE_SIZE: &str = "1Kb";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The API base URL is not an absolute http(s) URL.
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// A numeric setting could not be parsed.
    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl Default for ApiTimeouts {
    fn default() -> Self {
        Self { request_secs: DEFAULT_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS }
    }
}

/// Metadata stamped onto every record the console creates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordDefaults {
    pub created_by: String,
    pub file_size: String,
}

impl Default for RecordDefaults {
    fn default() -> Self {
        Self { created_by: DEFAULT_CREATED_BY.to_owned(), file_size: DEFAULT_FILE_SIZE.to_owned() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    pub api_server: String,
    pub record_defaults: RecordDefaults,
    pub timeouts: ApiTimeouts,
}

impl ConsoleConfig {
    /// Build typed console config from environment variables.
    ///
    /// Optional:
    /// - `API_SERVER`: base URL of the functions API, default `http://127.0.0.1:3000`
    /// - `FUNCTION_CONSOLE_CREATED_BY`: creator label stamped on new records
    /// - `FUNCTION_CONSOLE_FILE_SIZE`: size placeholder stamped on new records
    /// - `FUNCTION_CONSOLE_REQUEST_TIMEOUT_SECS`: default 30
    /// - `FUNCTION_CONSOLE_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is not http(s) or a timeout is not a number.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env_value(key, std::env::var(key)))
    }

    /// Build config from a fixed set of key/value pairs.
    ///
    /// # Errors
    ///
    /// Same as [`ConsoleConfig::from_env`].
    pub fn from_map(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        Self::from_lookup(|key| vars.get(key).cloned())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let setting = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let api_server = normalize_base_url(setting("API_SERVER").as_deref().unwrap_or(DEFAULT_API_SERVER))?;
        let record_defaults = RecordDefaults {
            created_by: setting("FUNCTION_CONSOLE_CREATED_BY").unwrap_or_else(|| DEFAULT_CREATED_BY.to_owned()),
            file_size: setting("FUNCTION_CONSOLE_FILE_SIZE").unwrap_or_else(|| DEFAULT_FILE_SIZE.to_owned()),
        };
        let timeouts = ApiTimeouts {
            request_secs: parse_u64(
                "FUNCTION_CONSOLE_REQUEST_TIMEOUT_SECS",
                setting("FUNCTION_CONSOLE_REQUEST_TIMEOUT_SECS"),
                DEFAULT_REQUEST_TIMEOUT_SECS,
            )?,
            connect_secs: parse_u64(
                "FUNCTION_CONSOLE_CONNECT_TIMEOUT_SECS",
                setting("FUNCTION_CONSOLE_CONNECT_TIMEOUT_SECS"),
                DEFAULT_CONNECT_TIMEOUT_SECS,
            )?,
        };

        Ok(Self { api_server, record_defaults, timeouts })
    }

    /// Replace the API base URL, e.g. from a command-line flag.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is not http(s).
    pub fn with_api_server(mut self, raw: &str) -> Result<Self, ConfigError> {
        self.api_server = normalize_base_url(raw)?;
        Ok(self)
    }

    /// Replace the creator label stamped on new records.
    #[must_use]
    pub fn with_created_by(mut self, created_by: String) -> Self {
        self.record_defaults.created_by = created_by;
        self
    }
}

/// Trim whitespace and trailing slashes; require an http(s) scheme.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidBaseUrl`] for anything else.
pub fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let host = trimmed
        .strip_prefix("http://")
        .or_else(|| trimmed.strip_prefix("https://"));
    match host {
        Some(rest) if !rest.is_empty() => Ok(trimmed.to_owned()),
        _ => Err(ConfigError::InvalidBaseUrl(raw.to_owned())),
    }
}

/// An unset variable is `None`; a non-Unicode one is logged and ignored.
fn env_value(key: &str, value: Result<String, VarError>) -> Option<String> {
    match value {
        Ok(value) => Some(value),
        Err(VarError::NotPresent) => None,
        Err(error @ VarError::NotUnicode(_)) => {
            warn!(key, %error, "ignoring environment variable");
            None
        }
    }
}

fn parse_u64(key: &str, raw: Option<String>, default: u64) -> Result<u64, ConfigError> {
    let Some(raw) = raw else {
        return Ok(default);
    };
    raw.trim()
        .parse::<u64>()
        .map_err(|_| ConfigError::InvalidValue { key: key.to_owned(), value: raw })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
