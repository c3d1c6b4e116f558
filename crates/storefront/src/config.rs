//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `STOREFRONT_HOST` - Bind address (default: 127.0.0.1)
//! - `STOREFRONT_PORT` - Listen port (default: 3000)
//! - `API_BASE` - Runtime override for the commerce backend base address
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name
//!
//! ## Build-time
//! - `STOREFRONT_API_BASE` - Compile-time override for the commerce backend
//!   base address, captured with `option_env!` when this crate is built.

use std::net::{IpAddr, SocketAddr};

use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Invalid API base address {0}: {1}")]
    InvalidApiBase(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Commerce backend base address
    pub api_base: ApiBase,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment name
    pub sentry_environment: Option<String>,
}

/// Base address of the commerce backend API.
///
/// The address is an explicit value injected into the client at construction
/// rather than an ambient global. Resolution precedence:
///
/// 1. `env_override` - captured at build time from `STOREFRONT_API_BASE`
/// 2. `runtime_override` - read at startup from `API_BASE`
/// 3. [`ApiBase::DEFAULT`] - the local development backend
#[derive(Debug, Clone, Default)]
pub struct ApiBase {
    /// Build-time override (`option_env!("STOREFRONT_API_BASE")`).
    pub env_override: Option<String>,
    /// Runtime override (`API_BASE` environment variable).
    pub runtime_override: Option<String>,
}

impl ApiBase {
    /// Fallback backend address for local development.
    pub const DEFAULT: &'static str = "http://127.0.0.1:5000";

    /// Capture both overrides from the environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            env_override: option_env!("STOREFRONT_API_BASE").map(str::to_owned),
            runtime_override: get_optional_env("API_BASE"),
        }
    }

    /// Resolve the effective base address.
    ///
    /// Trailing slashes are not trimmed; endpoint paths are joined with a
    /// leading slash, matching the backend's routing.
    #[must_use]
    pub fn resolve(&self) -> &str {
        self.env_override
            .as_deref()
            .or(self.runtime_override.as_deref())
            .unwrap_or(Self::DEFAULT)
    }

    /// Validate that the resolved address parses as an absolute URL.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidApiBase` if the address is not a URL.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let resolved = self.resolve();
        url::Url::parse(resolved)
            .map_err(|e| ConfigError::InvalidApiBase(resolved.to_owned(), e.to_string()))?;
        Ok(())
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable fails to parse or the API base
    /// address is not a valid URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("STOREFRONT_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("STOREFRONT_HOST".to_string(), e.to_string())
            })?;
        let port = get_env_or_default("STOREFRONT_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("STOREFRONT_PORT".to_string(), e.to_string())
            })?;

        let api_base = ApiBase::from_env();
        api_base.validate()?;

        let sentry_dsn = get_optional_env("SENTRY_DSN");
        let sentry_environment = get_optional_env("SENTRY_ENVIRONMENT");

        Ok(Self {
            host,
            port,
            api_base,
            sentry_dsn,
            sentry_environment,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_api_base_default() {
        let base = ApiBase::default();
        assert_eq!(base.resolve(), "http://127.0.0.1:5000");
    }

    #[test]
    fn test_api_base_runtime_override_beats_default() {
        let base = ApiBase {
            env_override: None,
            runtime_override: Some("http://backend:8000".to_string()),
        };
        assert_eq!(base.resolve(), "http://backend:8000");
    }

    #[test]
    fn test_api_base_env_override_beats_runtime() {
        let base = ApiBase {
            env_override: Some("https://api.verdant.example".to_string()),
            runtime_override: Some("http://backend:8000".to_string()),
        };
        assert_eq!(base.resolve(), "https://api.verdant.example");
    }

    #[test]
    fn test_api_base_validate_rejects_garbage() {
        let base = ApiBase {
            env_override: Some("not a url".to_string()),
            runtime_override: None,
        };
        assert!(base.validate().is_err());
    }

    #[test]
    fn test_api_base_validate_accepts_default() {
        assert!(ApiBase::default().validate().is_ok());
    }

    #[test]
    fn test_socket_addr() {
        let config = StorefrontConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 3000,
            api_base: ApiBase::default(),
            sentry_dsn: None,
            sentry_environment: None,
        };

        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 3000);
    }
}
