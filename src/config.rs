//! Backend location and environment selection.
//!
//! The client itself never looks at the process environment. Picking between
//! the development and production backend happens once at startup, through
//! [`Environment::from_env`] or [`ApiConfig::from_env`], and the resulting
//! [`ApiConfig`] is handed to [`Client::new`](crate::Client::new).

use crate::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Environment variable consulted by [`Environment::from_env`].
pub const ENV_VAR: &str = "MLBRIDGE_ENV";

/// Base URL of the backend when running locally.
pub const DEVELOPMENT_BASE_URL: &str = "http://localhost:5000/api";

/// Base URL of the deployed backend.
pub const PRODUCTION_BASE_URL: &str = "https://your-production-server.com/api";

/// The deployment the client talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    /// A backend running on the developer's machine.
    #[default]
    Development,
    /// The deployed backend.
    Production,
}

impl Environment {
    /// Returns the default base URL for this environment.
    pub fn base_url(self) -> &'static str {
        match self {
            Environment::Development => DEVELOPMENT_BASE_URL,
            Environment::Production => PRODUCTION_BASE_URL,
        }
    }

    /// Reads the environment from `MLBRIDGE_ENV`.
    ///
    /// An unset variable selects [`Environment::Development`].
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the variable is set to an unknown name.
    pub fn from_env() -> Result<Self> {
        match std::env::var(ENV_VAR) {
            Ok(value) => value.parse(),
            Err(std::env::VarError::NotPresent) => Ok(Environment::Development),
            Err(e) => Err(Error::ConfigurationError(format!("{}: {}", ENV_VAR, e))),
        }
    }
}

impl FromStr for Environment {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "production" | "prod" => Ok(Environment::Production),
            other => Err(Error::ConfigurationError(format!(
                "Unknown environment: {:?}",
                other
            ))),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Development => f.write_str("development"),
            Environment::Production => f.write_str("production"),
        }
    }
}

/// Connection settings for a [`Client`](crate::Client).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL every endpoint is appended to, e.g. `http://localhost:5000/api`.
    pub base_url: String,
}

impl ApiConfig {
    /// Creates a config pointing at an explicit base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Creates a config pointing at the default backend for `env`.
    pub fn for_environment(env: Environment) -> Self {
        Self::new(env.base_url())
    }

    /// Startup bootstrap: resolves the environment from `MLBRIDGE_ENV` and
    /// uses its default base URL.
    pub fn from_env() -> Result<Self> {
        Environment::from_env().map(Self::for_environment)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::for_environment(Environment::default())
    }
}
