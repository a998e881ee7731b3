//! Client configuration from environment variables

use std::path::PathBuf;

use super::error::{AppError, Result};

const DEFAULT_API_URL: &str = "https://api-pasteleria.vercel.app";
const DEFAULT_V1_PATH: &str = "/api/v1";
const DEFAULT_GRAPHQL_PATH: &str = "/graphql";
const DEFAULT_LOG_LEVEL: &str = "bakery_client=info,warn";

/// Client configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Backend origin, without trailing slash
    pub api_url: String,
    /// Path prefix of the versioned REST API
    pub v1_path: String,
    /// Path of the GraphQL endpoint
    pub graphql_path: String,
    /// Per-request timeout
    pub timeout_secs: u64,
    /// Log directory (daily rotation)
    pub log_dir: PathBuf,
    /// Log level filter (e.g., "bakery_client=debug,info")
    pub log_level: String,
    /// Page size requested from `GET /api/users`
    pub users_page_size: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            v1_path: DEFAULT_V1_PATH.to_string(),
            graphql_path: DEFAULT_GRAPHQL_PATH.to_string(),
            timeout_secs: 10,
            log_dir: PathBuf::from("logs"),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            users_page_size: 10,
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup (used by tests).
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let timeout_secs = match lookup("BAKERY_HTTP_TIMEOUT_SECS") {
            Some(raw) => raw
                .parse()
                .map_err(|_| AppError::Config("BAKERY_HTTP_TIMEOUT_SECS must be a valid number".to_string()))?,
            None => defaults.timeout_secs,
        };

        let users_page_size = match lookup("BAKERY_USERS_PAGE_SIZE") {
            Some(raw) => raw
                .parse()
                .map_err(|_| AppError::Config("BAKERY_USERS_PAGE_SIZE must be a valid number".to_string()))?,
            None => defaults.users_page_size,
        };

        let config = Self {
            api_url: lookup("BAKERY_API_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_url),
            v1_path: lookup("BAKERY_API_V1_PATH").unwrap_or(defaults.v1_path),
            graphql_path: lookup("BAKERY_GRAPHQL_PATH").unwrap_or(defaults.graphql_path),
            timeout_secs,
            log_dir: lookup("BAKERY_LOG_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.log_dir),
            log_level: lookup("RUST_LOG").unwrap_or(defaults.log_level),
            users_page_size,
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.api_url.starts_with("http://") || self.api_url.starts_with("https://")) {
            return Err(AppError::Config(format!(
                "BAKERY_API_URL must start with http:// or https:// (got {})",
                self.api_url
            )));
        }

        if self.timeout_secs == 0 {
            return Err(AppError::Config("BAKERY_HTTP_TIMEOUT_SECS must be greater than 0".to_string()));
        }

        if self.users_page_size == 0 {
            return Err(AppError::Config("BAKERY_USERS_PAGE_SIZE must be greater than 0".to_string()));
        }

        Ok(())
    }

    /// Absolute URL for an unversioned path such as `/api/auth/login`.
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.api_url, path)
    }

    /// Absolute URL under the versioned REST prefix.
    pub fn v1_url(&self, path: &str) -> String {
        format!("{}{}{}", self.api_url, self.v1_path, path)
    }

    pub fn graphql_url(&self) -> String {
        self.api_url(&self.graphql_path)
    }

    pub fn is_debug_enabled(&self) -> bool {
        self.log_level.contains("debug") || self.log_level.contains("trace")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_environment_is_empty() {
        let config = ClientConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.v1_url("/products"), "https://api-pasteleria.vercel.app/api/v1/products");
        assert_eq!(config.graphql_url(), "https://api-pasteleria.vercel.app/graphql");
    }

    #[test]
    fn test_overrides_and_trailing_slash() {
        let config = ClientConfig::from_lookup(lookup_from(&[
            ("BAKERY_API_URL", "http://localhost:3000/"),
            ("BAKERY_HTTP_TIMEOUT_SECS", "3"),
            ("RUST_LOG", "bakery_client=debug"),
        ]))
        .unwrap();

        assert_eq!(config.api_url("/api/auth/me"), "http://localhost:3000/api/auth/me");
        assert_eq!(config.timeout_secs, 3);
        assert!(config.is_debug_enabled());
    }

    #[test]
    fn test_rejects_invalid_values() {
        assert!(ClientConfig::from_lookup(lookup_from(&[("BAKERY_API_URL", "ftp://x")])).is_err());
        assert!(ClientConfig::from_lookup(lookup_from(&[("BAKERY_HTTP_TIMEOUT_SECS", "0")])).is_err());
        assert!(ClientConfig::from_lookup(lookup_from(&[("BAKERY_HTTP_TIMEOUT_SECS", "soon")])).is_err());
        assert!(ClientConfig::from_lookup(lookup_from(&[("BAKERY_USERS_PAGE_SIZE", "0")])).is_err());
    }
}
