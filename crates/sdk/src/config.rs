//! SDK configuration
//!
//! This module provides configuration options for the SDK client.

use crate::error::{SdkError, SdkResult};
use std::collections::HashMap;
use std::time::Duration;

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL for the API, including the version prefix
    pub base_url: String,

    /// API key for authentication
    pub api_key: Option<String>,

    /// Bearer token for authentication
    pub bearer_token: Option<String>,

    /// Headers added to every request
    pub default_headers: HashMap<String, String>,

    /// Request timeout
    pub timeout: Duration,

    /// Connection timeout
    pub connect_timeout: Duration,

    /// Number of retry attempts for failed requests
    pub retry_count: u32,

    /// Initial backoff duration for retries
    pub retry_initial_backoff: Duration,

    /// Maximum backoff duration for retries
    pub retry_max_backoff: Duration,

    /// Whether to verify the server's TLS certificate
    pub verify_tls: bool,

    /// User agent string
    pub user_agent: String,

    /// Enable request/response logging
    pub debug: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: crate::DEFAULT_API_URL.to_string(),
            api_key: None,
            bearer_token: None,
            default_headers: HashMap::new(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            retry_count: 3,
            retry_initial_backoff: Duration::from_millis(100),
            retry_max_backoff: Duration::from_secs(10),
            verify_tls: true,
            user_agent: format!("modelserve-sdk/{}", crate::VERSION),
            debug: false,
        }
    }
}

impl ClientConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables
    ///
    /// Supported environment variables:
    /// - `MODELSERVE_API_URL`: base URL for the API
    /// - `MODELSERVE_API_KEY`: API key for authentication
    /// - `MODELSERVE_TOKEN`: bearer token for authentication
    /// - `MODELSERVE_TIMEOUT`: request timeout in seconds
    /// - `MODELSERVE_SKIP_TLS_VERIFY`: disable TLS certificate verification
    /// - `MODELSERVE_DEBUG`: enable debug logging
    pub fn from_env() -> SdkResult<Self> {
        let mut config = Self::default();

        if let Ok(url) = std::env::var("MODELSERVE_API_URL") {
            config.base_url = url;
        }

        if let Ok(key) = std::env::var("MODELSERVE_API_KEY") {
            config.api_key = Some(key);
        }

        if let Ok(token) = std::env::var("MODELSERVE_TOKEN") {
            config.bearer_token = Some(token);
        }

        if let Ok(timeout) = std::env::var("MODELSERVE_TIMEOUT") {
            let secs: u64 = timeout.parse().map_err(|_| SdkError::Config {
                message: format!("Invalid timeout value: {}", timeout),
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        if std::env::var("MODELSERVE_SKIP_TLS_VERIFY").is_ok() {
            config.verify_tls = false;
        }

        if std::env::var("MODELSERVE_DEBUG").is_ok() {
            config.debug = true;
        }

        Ok(config)
    }

    /// Set the base URL
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the API key
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the bearer token
    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    /// Add a header sent with every request
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.insert(name.into(), value.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the connection timeout
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Set the retry count
    pub fn with_retry_count(mut self, count: u32) -> Self {
        self.retry_count = count;
        self
    }

    /// Set whether to verify the server's TLS certificate
    pub fn with_verify_tls(mut self, verify: bool) -> Self {
        self.verify_tls = verify;
        self
    }

    /// Set the user agent
    pub fn with_user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Enable debug mode
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> SdkResult<()> {
        if self.base_url.is_empty() {
            return Err(SdkError::Config {
                message: "Base URL cannot be empty".to_string(),
            });
        }

        url::Url::parse(&self.base_url).map_err(|e| SdkError::Config {
            message: format!("Invalid base URL: {}", e),
        })?;

        Ok(())
    }

    /// Get the authentication header value
    ///
    /// A bearer token takes precedence over an API key when both are set.
    pub fn auth_header(&self) -> Option<String> {
        if let Some(ref token) = self.bearer_token {
            Some(format!("Bearer {}", token))
        } else {
            self.api_key.as_ref().map(|key| format!("X-API-Key {}", key))
        }
    }

    /// Check if authentication is configured
    pub fn has_auth(&self) -> bool {
        self.api_key.is_some() || self.bearer_token.is_some()
    }
}
