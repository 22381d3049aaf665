//! SDK client implementation
//!
//! This module provides the main client for interacting with the ModelServe
//! API: it builds requests from typed inputs, performs the network call with
//! bounded retries, and maps the HTTP outcome to a decoded model object or a
//! typed error.

use crate::config::ClientConfig;
use crate::error::{SdkError, SdkResult};
use crate::services::{
    AlertService, EnvironmentService, LogService, ModelEndpointService, ModelService,
    PredictionJobService, ProjectService, SecretService, TransformerService,
    VersionEndpointService, VersionService,
};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use reqwest::Method;
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error};

/// Main SDK client
#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http: reqwest::Client,
    config: ClientConfig,
}

impl Client {
    /// Create a new client builder
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Create a new client with the given configuration
    pub fn new(config: ClientConfig) -> SdkResult<Self> {
        config.validate()?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&config.user_agent)
                .unwrap_or_else(|_| HeaderValue::from_static("modelserve-sdk")),
        );

        if let Some(auth) = config.auth_header() {
            headers.insert(
                AUTHORIZATION,
                HeaderValue::from_str(&auth).map_err(|_| SdkError::Config {
                    message: "Invalid authorization header".to_string(),
                })?,
            );
        }

        for (name, value) in &config.default_headers {
            let name = HeaderName::from_bytes(name.as_bytes()).map_err(|_| SdkError::Config {
                message: format!("Invalid header name: {}", name),
            })?;
            let value = HeaderValue::from_str(value).map_err(|_| SdkError::Config {
                message: format!("Invalid value for header {}", name),
            })?;
            headers.insert(name, value);
        }

        let mut builder = reqwest::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .default_headers(headers);

        if !config.verify_tls {
            builder = builder.danger_accept_invalid_certs(true);
        }

        let http = builder.build().map_err(|e| SdkError::Config {
            message: format!("Failed to create HTTP client: {}", e),
        })?;

        Ok(Self {
            inner: Arc::new(ClientInner { http, config }),
        })
    }

    /// Create a client from environment variables
    pub fn from_env() -> SdkResult<Self> {
        let config = ClientConfig::from_env()?;
        Self::new(config)
    }

    /// Get the configuration
    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    /// Get the project service
    pub fn projects(&self) -> ProjectService {
        ProjectService::new(self.clone())
    }

    /// Get the model service
    pub fn models(&self) -> ModelService {
        ModelService::new(self.clone())
    }

    /// Get the version service
    pub fn versions(&self) -> VersionService {
        VersionService::new(self.clone())
    }

    /// Get the version endpoint service
    pub fn version_endpoints(&self) -> VersionEndpointService {
        VersionEndpointService::new(self.clone())
    }

    /// Get the model endpoint service
    pub fn model_endpoints(&self) -> ModelEndpointService {
        ModelEndpointService::new(self.clone())
    }

    /// Get the batch prediction job service
    pub fn prediction_jobs(&self) -> PredictionJobService {
        PredictionJobService::new(self.clone())
    }

    /// Get the environment service
    pub fn environments(&self) -> EnvironmentService {
        EnvironmentService::new(self.clone())
    }

    /// Get the secret service
    pub fn secrets(&self) -> SecretService {
        SecretService::new(self.clone())
    }

    /// Get the alert service
    pub fn alerts(&self) -> AlertService {
        AlertService::new(self.clone())
    }

    /// Get the log service
    pub fn logs(&self) -> LogService {
        LogService::new(self.clone())
    }

    /// Get the transformer service
    pub fn transformers(&self) -> TransformerService {
        TransformerService::new(self.clone())
    }

    /// Make a GET request
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> SdkResult<T> {
        let request = self.request(Method::GET, path);
        self.execute_json(request).await
    }

    /// Make a GET request with query parameters
    pub(crate) async fn get_with_query<T: DeserializeOwned, Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> SdkResult<T> {
        let request = self.request(Method::GET, path).query(query);
        self.execute_json(request).await
    }

    /// Make a GET request returning the raw text body
    pub(crate) async fn get_text<Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> SdkResult<String> {
        let request = self.request(Method::GET, path).query(query);
        let response = self.execute_with_retry(request).await?;

        if response.status().is_success() {
            Ok(response.text().await?)
        } else {
            Err(self.error_response(response).await)
        }
    }

    /// Make a POST request
    pub(crate) async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> SdkResult<T> {
        let request = self.request(Method::POST, path).json(body);
        self.execute_json(request).await
    }

    /// Make a PUT request
    pub(crate) async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> SdkResult<T> {
        let request = self.request(Method::PUT, path).json(body);
        self.execute_json(request).await
    }

    /// Make a PUT request with no meaningful body or response
    pub(crate) async fn put_empty(&self, path: &str) -> SdkResult<()> {
        let request = self.request(Method::PUT, path).json(&serde_json::json!({}));
        self.execute_void(request).await
    }

    /// Make a PATCH request
    pub(crate) async fn patch<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> SdkResult<T> {
        let request = self.request(Method::PATCH, path).json(body);
        self.execute_json(request).await
    }

    /// Make a DELETE request
    pub(crate) async fn delete(&self, path: &str) -> SdkResult<()> {
        let request = self.request(Method::DELETE, path);
        self.execute_void(request).await
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}{}",
            self.inner.config.base_url.trim_end_matches('/'),
            path
        )
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = self.url(path);
        if self.inner.config.debug {
            debug!("SDK request: {} {}", method, url);
        }
        self.inner.http.request(method, url)
    }

    async fn execute_json<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> SdkResult<T> {
        let response = self.execute_with_retry(request).await?;
        self.handle_response(response).await
    }

    async fn execute_void(&self, request: reqwest::RequestBuilder) -> SdkResult<()> {
        let response = self.execute_with_retry(request).await?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(self.error_response(response).await)
        }
    }

    /// Execute request with retry logic
    ///
    /// Only transient failures are retried: connect errors, timeouts, 429 and
    /// 5xx responses. Everything else passes through on the first attempt.
    async fn execute_with_retry(
        &self,
        request: reqwest::RequestBuilder,
    ) -> SdkResult<reqwest::Response> {
        let max_retries = self.inner.config.retry_count;
        let mut attempt = 0;

        loop {
            attempt += 1;

            // Clone the request for retry (reqwest doesn't support direct retry)
            let request_clone = request.try_clone().ok_or_else(|| SdkError::Network {
                message: "Request cannot be cloned for retry".to_string(),
                source: None,
            })?;

            match request_clone.send().await {
                Ok(response) => {
                    if response.status().is_success() || !is_retryable_status(response.status()) {
                        return Ok(response);
                    }

                    // Retryable status; let the response handler surface the
                    // error once attempts run out
                    if attempt > max_retries {
                        return Ok(response);
                    }
                }
                Err(e) => {
                    let err: SdkError = e.into();
                    if !err.is_retryable() || attempt > max_retries {
                        return Err(err);
                    }
                }
            }

            let backoff = calculate_backoff(
                attempt,
                self.inner.config.retry_initial_backoff,
                self.inner.config.retry_max_backoff,
            );

            if self.inner.config.debug {
                debug!("SDK retry {}/{} after {:?}", attempt, max_retries, backoff);
            }

            tokio::time::sleep(backoff).await;
        }
    }

    /// Handle successful response
    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> SdkResult<T> {
        if !response.status().is_success() {
            return Err(self.error_response(response).await);
        }

        let text = response.text().await?;

        if self.inner.config.debug {
            debug!("SDK response body: {}", text);
        }

        if text.is_empty() {
            return Err(SdkError::UnexpectedType {
                message: format!(
                    "empty response body, expected {}",
                    std::any::type_name::<T>()
                ),
            });
        }

        serde_json::from_str(&text).map_err(|e| {
            error!("Failed to decode response: {}", e);
            SdkError::classify_decode(e)
        })
    }

    /// Build an API error from a non-success response
    async fn error_response(&self, response: reqwest::Response) -> SdkError {
        let status = response.status();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.to_string(),
                    value.to_str().unwrap_or_default().to_string(),
                )
            })
            .collect();

        let body = response.text().await.unwrap_or_default();

        if self.inner.config.debug {
            debug!("SDK error response ({}): {}", status.as_u16(), body);
        }

        SdkError::Api {
            status_code: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            headers,
            body,
        }
    }
}

/// Check if a status code is retryable
fn is_retryable_status(status: reqwest::StatusCode) -> bool {
    status.is_server_error() || status == reqwest::StatusCode::TOO_MANY_REQUESTS
}

/// Calculate exponential backoff
fn calculate_backoff(attempt: u32, initial: Duration, max: Duration) -> Duration {
    let backoff = initial.saturating_mul(2u32.saturating_pow(attempt - 1));
    backoff.min(max)
}

/// Client builder for ergonomic configuration
#[derive(Default)]
pub struct ClientBuilder {
    config: ClientConfig,
}

impl ClientBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self {
            config: ClientConfig::default(),
        }
    }

    /// Load configuration from environment
    pub fn from_env(mut self) -> SdkResult<Self> {
        self.config = ClientConfig::from_env()?;
        Ok(self)
    }

    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Set the API key
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.config.api_key = Some(key.into());
        self
    }

    /// Set the bearer token
    pub fn bearer_token(mut self, token: impl Into<String>) -> Self {
        self.config.bearer_token = Some(token.into());
        self
    }

    /// Add a header sent with every request
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.default_headers.insert(name.into(), value.into());
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the retry count
    pub fn retry_count(mut self, count: u32) -> Self {
        self.config.retry_count = count;
        self
    }

    /// Set whether to verify the server's TLS certificate
    pub fn verify_tls(mut self, verify: bool) -> Self {
        self.config.verify_tls = verify;
        self
    }

    /// Set the user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Enable debug mode
    pub fn debug(mut self, debug: bool) -> Self {
        self.config.debug = debug;
        self
    }

    /// Build the client
    pub fn build(self) -> SdkResult<Client> {
        Client::new(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_builder() {
        let client = Client::builder()
            .base_url("https://modelserve.example.com/v1")
            .bearer_token("test-token")
            .timeout(Duration::from_secs(60))
            .retry_count(5)
            .build()
            .unwrap();

        assert_eq!(client.config().base_url, "https://modelserve.example.com/v1");
        assert_eq!(client.config().bearer_token, Some("test-token".to_string()));
        assert_eq!(client.config().timeout, Duration::from_secs(60));
        assert_eq!(client.config().retry_count, 5);
    }

    #[test]
    fn test_url_joins_without_double_slash() {
        let client = Client::builder()
            .base_url("https://modelserve.example.com/v1/")
            .build()
            .unwrap();

        assert_eq!(
            client.url("/projects"),
            "https://modelserve.example.com/v1/projects"
        );
    }

    #[test]
    fn test_calculate_backoff() {
        let initial = Duration::from_millis(100);
        let max = Duration::from_secs(10);

        assert_eq!(calculate_backoff(1, initial, max), Duration::from_millis(100));
        assert_eq!(calculate_backoff(2, initial, max), Duration::from_millis(200));
        assert_eq!(calculate_backoff(3, initial, max), Duration::from_millis(400));
        assert_eq!(calculate_backoff(10, initial, max), max); // Capped at max
    }

    #[test]
    fn test_invalid_config_rejected() {
        let result = Client::builder().base_url("not a url").build();
        assert!(matches!(result, Err(SdkError::Config { .. })));
    }
}
