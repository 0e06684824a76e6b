//! Application configuration loaded from environment variables.
//!
//! All configuration is read from the environment (or a `.env` file) with
//! development-friendly defaults.
//!
//! # Security Configuration
//!
//! - `API_KEY`: Shared secret expected in the `X-API-Key` header of every
//!   `/api/*` request. When unset, every `/api/*` request is rejected.
//! - `CORS_ALLOWED_ORIGINS`: Comma-separated list of allowed origins (default: `*`)
//!
//! # Catalog
//!
//! - `SEED_PRODUCTS`: Load the demo catalog at startup (default: `true`)
//! - `DEFAULT_PAGE_LIMIT`: Page size used when `limit` is omitted (default: 5)

use std::env;
use std::net::SocketAddr;

use crate::error::{AppError, AppResult};

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable multi-field lines
    Pretty,
    /// One JSON object per line
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(format!("unknown log format '{other}' (expected pretty or json)")),
        }
    }
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormat::Pretty => f.write_str("pretty"),
            LogFormat::Json => f.write_str("json"),
        }
    }
}

/// Application configuration loaded from environment variables.
///
/// # Example
///
/// ```rust,ignore
/// let config = Config::from_env()?;
/// println!("Server will listen on {}", config.server_addr());
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    // =========================================================================
    // Server Configuration
    // =========================================================================
    /// Server host address (default: "0.0.0.0")
    pub host: String,

    /// Server port (default: 3000)
    pub port: u16,

    /// Maximum request body size in bytes (default: 1MB)
    pub max_request_body_size: usize,

    // =========================================================================
    // Security Configuration
    // =========================================================================
    /// Shared secret for `/api/*` routes (None = every request rejected)
    pub api_key: Option<String>,

    /// Allowed CORS origins; `"*"` allows any origin
    pub cors_allowed_origins: Vec<String>,

    // =========================================================================
    // Catalog Configuration
    // =========================================================================
    /// Load the three demo products at startup
    pub seed_products: bool,

    /// Page size applied when the list query omits `limit`
    pub default_page_limit: i64,

    // =========================================================================
    // Observability Configuration
    // =========================================================================
    /// Log filter directive (e.g., "info", "products_api=debug")
    pub log_level: String,

    /// Log output format
    pub log_format: LogFormat,

    /// Port for the Prometheus metrics endpoint (0 = disabled)
    pub metrics_port: u16,
}

impl Config {
    /// Load configuration from environment variables with defaults.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a value cannot be parsed or fails
    /// validation.
    pub fn from_env() -> AppResult<Self> {
        // Load an .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let config = Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: Self::parse_env("PORT", 3000)?,
            max_request_body_size: Self::parse_env("MAX_REQUEST_BODY_SIZE", 1024 * 1024)?,

            api_key: env::var("API_KEY").ok().filter(|k| !k.is_empty()),
            cors_allowed_origins: Self::parse_cors_origins(),

            seed_products: Self::parse_env("SEED_PRODUCTS", true)?,
            default_page_limit: Self::parse_env("DEFAULT_PAGE_LIMIT", 5)?,

            log_level: env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            log_format: Self::parse_env("LOG_FORMAT", LogFormat::Pretty)?,
            metrics_port: Self::parse_env("METRICS_PORT", 0)?,
        };

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    fn validate(&self) -> AppResult<()> {
        if self.max_request_body_size == 0 {
            return Err(AppError::Config(
                "MAX_REQUEST_BODY_SIZE must be greater than 0".to_string(),
            ));
        }

        if self.default_page_limit <= 0 {
            return Err(AppError::Config(
                "DEFAULT_PAGE_LIMIT must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Get the full server address for binding.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Check if an API key has been configured.
    pub fn auth_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Get the metrics endpoint address, or `None` when disabled.
    pub fn metrics_addr(&self) -> Option<SocketAddr> {
        (self.metrics_port > 0).then(|| SocketAddr::from(([0, 0, 0, 0], self.metrics_port)))
    }

    /// Parse an environment variable into the specified type with a default value.
    fn parse_env<T>(name: &str, default: T) -> AppResult<T>
    where
        T: std::str::FromStr,
        T::Err: std::fmt::Display,
    {
        match env::var(name) {
            Ok(val) => val
                .trim()
                .parse()
                .map_err(|e| AppError::Config(format!("Invalid {name}: {e}"))),
            Err(_) => Ok(default),
        }
    }

    /// Parse CORS allowed origins from environment variable.
    fn parse_cors_origins() -> Vec<String> {
        env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }
}

/// Default configuration for testing and development.
///
/// Production deployments should use `Config::from_env()` instead.
impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            max_request_body_size: 1024 * 1024,
            api_key: None,
            cors_allowed_origins: vec!["*".to_string()],
            seed_products: true,
            default_page_limit: 5,
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            metrics_port: 0,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_values() {
        let config = Config::default();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.default_page_limit, 5);
        assert!(config.seed_products);
        assert!(config.api_key.is_none());
        assert!(config.metrics_addr().is_none());
    }

    #[test]
    fn test_server_addr_format() {
        let config = Config {
            host: "127.0.0.1".to_string(),
            port: 8080,
            ..Config::default()
        };

        assert_eq!(config.server_addr(), "127.0.0.1:8080");
    }

    #[test]
    fn test_auth_configured() {
        assert!(!Config::default().auth_configured());

        let config = Config {
            api_key: Some("secret-key".to_string()),
            ..Config::default()
        };
        assert!(config.auth_configured());
    }

    #[test]
    fn test_metrics_addr_enabled() {
        let config = Config {
            metrics_port: 9090,
            ..Config::default()
        };
        assert_eq!(config.metrics_addr().unwrap().port(), 9090);
    }

    #[test]
    fn test_validate_zero_page_limit() {
        let config = Config {
            default_page_limit: 0,
            ..Config::default()
        };

        let result = config.validate();
        assert!(result.unwrap_err().to_string().contains("DEFAULT_PAGE_LIMIT"));
    }

    #[test]
    fn test_validate_zero_body_size() {
        let config = Config {
            max_request_body_size: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_log_format_parse() {
        assert_eq!("json".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert_eq!("Pretty".parse::<LogFormat>().unwrap(), LogFormat::Pretty);
        assert!("xml".parse::<LogFormat>().is_err());
    }
}
