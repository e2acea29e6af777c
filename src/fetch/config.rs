// src/fetch/config.rs
// =============================================================================
// Request settings shared (read-only) by every fetch in a run.
//
// The User-Agent is picked once when the config is built and then passed
// down explicitly. Nothing here is global or mutable.
// =============================================================================

use reqwest::header::{HeaderMap, HeaderValue, InvalidHeaderValue, USER_AGENT};
use std::time::Duration;

// Per-request timeout used when the caller doesn't override it
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

// Browser signatures to blend in with normal traffic
const USER_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/119.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:121.0) Gecko/20100101 Firefox/121.0",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.2 Safari/605.1.15",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
    "Mozilla/5.0 (X11; Ubuntu; Linux x86_64; rv:121.0) Gecko/20100101 Firefox/121.0",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36 Edg/120.0.0.0",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestConfig {
    pub user_agent: String,
    pub timeout: Duration,
}

impl RequestConfig {
    pub fn new(user_agent: impl Into<String>, timeout: Duration) -> Self {
        Self {
            user_agent: user_agent.into(),
            timeout,
        }
    }

    // Builds a config with a User-Agent drawn at random from the pool
    pub fn random(timeout: Duration) -> Self {
        Self::new(random_user_agent(), timeout)
    }

    // The header mapping sent with every request
    //
    // Fails only if the User-Agent contains bytes that aren't allowed in
    // an HTTP header (e.g. a newline passed via --user-agent).
    pub fn headers(&self) -> Result<HeaderMap, InvalidHeaderValue> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_str(&self.user_agent)?);
        Ok(headers)
    }
}

pub fn random_user_agent() -> &'static str {
    USER_AGENTS[rand::random_range(0..USER_AGENTS.len())]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_user_agent_comes_from_pool() {
        for _ in 0..20 {
            assert!(USER_AGENTS.contains(&random_user_agent()));
        }
    }

    #[test]
    fn test_random_config_keeps_timeout() {
        let config = RequestConfig::random(DEFAULT_TIMEOUT);
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert!(config.user_agent.starts_with("Mozilla/5.0"));
    }

    #[test]
    fn test_headers_contain_only_user_agent() {
        let config = RequestConfig::new("test-agent/1.0", DEFAULT_TIMEOUT);
        let headers = config.headers().unwrap();
        assert_eq!(headers.len(), 1);
        assert_eq!(headers.get(USER_AGENT).unwrap(), "test-agent/1.0");
    }

    #[test]
    fn test_headers_reject_newline() {
        let config = RequestConfig::new("bad\nagent", DEFAULT_TIMEOUT);
        assert!(config.headers().is_err());
    }
}
