use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::time::Duration;

use posts_client::{DEFAULT_BASE_URL, DEFAULT_USER_ID};

/// Application configuration loaded from environment variables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub posts_api_url: String,
    pub user_id: i64,
    pub http_timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            posts_api_url: DEFAULT_BASE_URL.to_string(),
            user_id: DEFAULT_USER_ID,
            http_timeout: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let http_timeout = match lookup("POSTS_HTTP_TIMEOUT_SECS") {
            Some(secs) => Some(Duration::from_secs(
                secs.parse()
                    .context("POSTS_HTTP_TIMEOUT_SECS must be a whole number of seconds")?,
            )),
            None => None,
        };

        Ok(Self {
            posts_api_url: lookup("POSTS_API_URL")
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            user_id: lookup("POSTS_USER_ID")
                .unwrap_or_else(|| DEFAULT_USER_ID.to_string())
                .parse()
                .context("POSTS_USER_ID must be a valid number")?,
            http_timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.posts_api_url, "https://jsonplaceholder.typicode.com");
        assert_eq!(config.user_id, 1);
    }

    #[test]
    fn reads_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("POSTS_API_URL", "http://localhost:3000"),
            ("POSTS_USER_ID", "42"),
            ("POSTS_HTTP_TIMEOUT_SECS", "5"),
        ]))
        .unwrap();

        assert_eq!(config.posts_api_url, "http://localhost:3000");
        assert_eq!(config.user_id, 42);
        assert_eq!(config.http_timeout, Some(Duration::from_secs(5)));
    }

    #[test]
    fn rejects_non_numeric_user_id() {
        let err = Config::from_lookup(lookup(&[("POSTS_USER_ID", "admin")])).unwrap_err();
        assert!(err.to_string().contains("POSTS_USER_ID"));
    }
}
