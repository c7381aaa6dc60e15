//! Client settings loaded from environment variables.

use crate::constants::{DEFAULT_API_URL, DEFAULT_CDN_URL, DEFAULT_TIMEOUT_SECS};
use crate::env::{env_nonempty, env_parse};
use crate::text::normalize_base_url;
use std::time::Duration;

/// Environment variable naming the backend API base URL.
pub const API_URL_ENV: &str = "PASTEBIN_API_URL";
/// Environment variable naming the CDN base URL.
pub const CDN_URL_ENV: &str = "PASTEBIN_CDN_URL";
/// Environment variable holding the request timeout in seconds.
pub const TIMEOUT_ENV: &str = "PASTEBIN_TIMEOUT_SECS";

/// Where the client sends requests and how long it waits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    /// API base URL without the version prefix or a trailing slash.
    pub api_url: String,
    /// CDN base URL without a trailing slash.
    pub cdn_url: String,
    pub timeout: Duration,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL, DEFAULT_CDN_URL)
    }
}

impl ClientSettings {
    /// Settings for explicit base URLs with the default timeout.
    pub fn new(api_url: &str, cdn_url: &str) -> Self {
        Self {
            api_url: normalize_base_url(api_url),
            cdn_url: normalize_base_url(cdn_url),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Load settings from environment variables.
    ///
    /// # Returns
    /// A populated [`ClientSettings`] with defaults applied when variables are
    /// missing, blank or unparsable.
    pub fn from_env() -> Self {
        let api_url = env_nonempty(API_URL_ENV).unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let cdn_url = env_nonempty(CDN_URL_ENV).unwrap_or_else(|| DEFAULT_CDN_URL.to_string());
        let timeout_secs = env_parse(TIMEOUT_ENV).unwrap_or(DEFAULT_TIMEOUT_SECS);
        Self {
            timeout: Duration::from_secs(timeout_secs),
            ..Self::new(&api_url, &cdn_url)
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
