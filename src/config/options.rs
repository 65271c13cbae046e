// src/config/options.rs
use std::time::Duration;

use super::consts::*;

/// Where and how profile pages are fetched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchOptions {
    pub scheme: String,
    pub host: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            scheme: s!(SCHEME),
            host: s!(HOST),
            timeout: Duration::from_secs(TIMEOUT_SECS),
            user_agent: s!(USER_AGENT),
        }
    }
}

impl FetchOptions {
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn with_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = scheme.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// `<scheme>://<host>/<user>`. The username is passed through as-is;
    /// the site decides whether it is valid.
    pub fn profile_url(&self, user: &str) -> String {
        join!(&self.scheme, "://", &self.host, "/", user)
    }
}
