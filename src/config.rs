//! Configuration Module
//!
//! Handles loading client and server configuration from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Default Warfish REST endpoint.
pub const DEFAULT_API_URL: &str = "http://warfish.net/war/services/rest";

/// Default host serving board images.
pub const DEFAULT_IMAGE_URL: &str = "http://as1.warfish.net";

const THIRTY_DAYS_SECS: u64 = 30 * 24 * 60 * 60;

/// Client and server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Session cookie sent with every Warfish API request
    pub cookie: Option<String>,
    /// Warfish REST endpoint
    pub api_url: String,
    /// Base URL for board images
    pub image_url: String,
    /// HTTP request timeout in seconds
    pub request_timeout: u64,
    /// Cache lifetime in seconds for cards, players, stage and territories
    pub state_ttl: u64,
    /// Cache lifetime in seconds for rules, map, board and continents
    pub details_ttl: u64,
    /// Cache lifetime in seconds for the history log
    pub history_ttl: u64,
    /// Number of history items requested per page
    pub history_page_size: u32,
    /// HTTP server port
    pub server_port: u16,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `WARFISH_COOKIE` - Session cookie (default: unset)
    /// - `WARFISH_API_URL` - REST endpoint (default: [`DEFAULT_API_URL`])
    /// - `WARFISH_IMAGE_URL` - Board image host (default: [`DEFAULT_IMAGE_URL`])
    /// - `REQUEST_TIMEOUT` - Request timeout in seconds (default: 30)
    /// - `STATE_TTL` - Game state lifetime in seconds (default: 60)
    /// - `DETAILS_TTL` - Game details lifetime in seconds (default: 30 days)
    /// - `HISTORY_TTL` - History log lifetime in seconds (default: 180)
    /// - `HISTORY_PAGE_SIZE` - History items per request (default: 1500)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            cookie: env::var("WARFISH_COOKIE").ok(),
            api_url: env::var("WARFISH_API_URL").unwrap_or(defaults.api_url),
            image_url: env::var("WARFISH_IMAGE_URL").unwrap_or(defaults.image_url),
            request_timeout: parse_env("REQUEST_TIMEOUT").unwrap_or(defaults.request_timeout),
            state_ttl: parse_env("STATE_TTL").unwrap_or(defaults.state_ttl),
            details_ttl: parse_env("DETAILS_TTL").unwrap_or(defaults.details_ttl),
            history_ttl: parse_env("HISTORY_TTL").unwrap_or(defaults.history_ttl),
            history_page_size: parse_env::<u32>("HISTORY_PAGE_SIZE")
                .filter(|size| *size > 0)
                .unwrap_or(defaults.history_page_size),
            server_port: parse_env("SERVER_PORT").unwrap_or(defaults.server_port),
        }
    }

    pub fn with_cookie(mut self, cookie: impl Into<String>) -> Self {
        self.cookie = Some(cookie.into());
        self
    }

    pub fn state_ttl(&self) -> Duration {
        Duration::from_secs(self.state_ttl)
    }

    pub fn details_ttl(&self) -> Duration {
        Duration::from_secs(self.details_ttl)
    }

    pub fn history_ttl(&self) -> Duration {
        Duration::from_secs(self.history_ttl)
    }
}

fn parse_env<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cookie: None,
            api_url: DEFAULT_API_URL.to_string(),
            image_url: DEFAULT_IMAGE_URL.to_string(),
            request_timeout: 30,
            state_ttl: 60,
            details_ttl: THIRTY_DAYS_SECS,
            history_ttl: 180,
            history_page_size: 1500,
            server_port: 3000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.cookie.is_none());
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.image_url, DEFAULT_IMAGE_URL);
        assert_eq!(config.state_ttl(), Duration::from_secs(60));
        assert_eq!(config.details_ttl(), Duration::from_secs(2_592_000));
        assert_eq!(config.history_ttl(), Duration::from_secs(180));
        assert_eq!(config.history_page_size, 1500);
        assert_eq!(config.server_port, 3000);
    }

    #[test]
    fn test_config_from_env_defaults() {
        // Clear any existing env vars to test defaults
        env::remove_var("WARFISH_COOKIE");
        env::remove_var("WARFISH_API_URL");
        env::remove_var("STATE_TTL");
        env::remove_var("HISTORY_PAGE_SIZE");
        env::remove_var("SERVER_PORT");

        let config = Config::from_env();
        assert!(config.cookie.is_none());
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.state_ttl, 60);
        assert_eq!(config.history_page_size, 1500);
        assert_eq!(config.server_port, 3000);
    }

    #[test]
    fn test_with_cookie() {
        let config = Config::default().with_cookie("SESSION=abc");
        assert_eq!(config.cookie.as_deref(), Some("SESSION=abc"));
    }
}
