//! Application configuration from the environment.
//!
//! | Variable             | Default          |
//! |----------------------|------------------|
//! | `BISECT_BIND`        | `127.0.0.1:5000` |
//! | `BISECT_MAX_LEN`     | `100000`         |
//! | `BISECT_TRACE_STEPS` | `false`          |
//! | `RUST_LOG`           | `info`           |
//!
//! A `.env` file in the working directory is loaded first if present;
//! variables already set in the process environment win.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::path::Path;

use bisect_search::policy::{NormalizePolicyV1, DEFAULT_MAX_LEN};
use thiserror::Error;

pub const ENV_BIND: &str = "BISECT_BIND";
pub const ENV_MAX_LEN: &str = "BISECT_MAX_LEN";
pub const ENV_TRACE_STEPS: &str = "BISECT_TRACE_STEPS";
pub const ENV_LOG: &str = "RUST_LOG";

pub const DEFAULT_BIND: &str = "127.0.0.1:5000";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{key}={value:?} is invalid: {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },

    #[error("cannot read env file {path}: {source}")]
    EnvFile {
        path: String,
        #[source]
        source: dotenvy::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// HTTP listen address.
    pub bind: SocketAddr,
    /// Normalizer element limit.
    pub max_len: usize,
    /// Log every step of every HTTP search at `debug`.
    pub trace_steps: bool,
    /// `tracing_subscriber::EnvFilter` directive string.
    pub log_filter: String,
}

impl AppConfig {
    /// Load `.env` (if any), then read the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if a variable does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration from a specific env file, ignoring the process
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EnvFile`] if the file cannot be read or
    /// parsed, or [`ConfigError::InvalidValue`] if a variable does not parse.
    pub fn from_env_file(path: &Path) -> Result<Self, ConfigError> {
        let env_file_error = |source| ConfigError::EnvFile {
            path: path.display().to_string(),
            source,
        };
        let vars = dotenvy::from_path_iter(path)
            .map_err(env_file_error)?
            .collect::<Result<HashMap<String, String>, _>>()
            .map_err(env_file_error)?;
        Self::from_lookup(|key| vars.get(key).cloned())
    }

    /// Build from an arbitrary key lookup. Missing keys take defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if a variable does not parse.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind = match lookup(ENV_BIND) {
            Some(raw) => raw.trim().parse::<SocketAddr>().map_err(|e| {
                ConfigError::InvalidValue {
                    key: ENV_BIND,
                    value: raw.clone(),
                    reason: e.to_string(),
                }
            })?,
            None => default_bind(),
        };

        let max_len = match lookup(ENV_MAX_LEN) {
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                Ok(_) => {
                    return Err(ConfigError::InvalidValue {
                        key: ENV_MAX_LEN,
                        value: raw,
                        reason: "must be at least 1".into(),
                    })
                }
                Err(e) => {
                    return Err(ConfigError::InvalidValue {
                        key: ENV_MAX_LEN,
                        value: raw,
                        reason: e.to_string(),
                    })
                }
            },
            None => DEFAULT_MAX_LEN,
        };

        let trace_steps = match lookup(ENV_TRACE_STEPS) {
            Some(raw) => parse_flag(&raw).ok_or_else(|| ConfigError::InvalidValue {
                key: ENV_TRACE_STEPS,
                value: raw.clone(),
                reason: "expected true/false, 1/0, yes/no or on/off".into(),
            })?,
            None => false,
        };

        let log_filter = lookup(ENV_LOG)
            .map(|raw| raw.trim().to_string())
            .filter(|raw| !raw.is_empty())
            .unwrap_or_else(|| crate::logging::DEFAULT_FILTER.to_string());

        Ok(Self {
            bind,
            max_len,
            trace_steps,
            log_filter,
        })
    }

    #[must_use]
    pub fn normalize_policy(&self) -> NormalizePolicyV1 {
        NormalizePolicyV1::with_max_len(self.max_len)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            max_len: DEFAULT_MAX_LEN,
            trace_steps: false,
            log_filter: crate::logging::DEFAULT_FILTER.to_string(),
        }
    }
}

fn default_bind() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 5000))
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
