//! Mock platform server for HTTP-level SDK tests.
//!
//! Wraps a wiremock server with JSON stubbing helpers and a synchronous
//! journal of the requests each stub answered.

use modelserve_sdk::{Client, SdkResult};
use parking_lot::RwLock;
use std::sync::Arc;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

/// A request answered by a [`MockPlatform`] stub
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    /// HTTP method
    pub method: String,
    /// Request path
    pub path: String,
}

/// A mock ModelServe API server
///
/// Stubs answer by method and path; every answered request is recorded in a
/// journal that tests can inspect without awaiting the server.
pub struct MockPlatform {
    server: MockServer,
    journal: Arc<RwLock<Vec<RecordedRequest>>>,
}

impl MockPlatform {
    /// Start a mock platform on a random local port
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
            journal: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Base URL of the mock platform
    pub fn uri(&self) -> String {
        self.server.uri()
    }

    /// An SDK client pointed at the mock platform
    ///
    /// Retries are disabled so tests observe each request exactly once.
    pub fn client(&self) -> SdkResult<Client> {
        Client::builder()
            .base_url(self.uri())
            .bearer_token("test-token")
            .retry_count(0)
            .build()
    }

    /// Stub a JSON response
    pub async fn stub_json(
        &self,
        http_method: &str,
        request_path: &str,
        status: u16,
        body: serde_json::Value,
    ) {
        self.mount(http_method, request_path, RecordingStub {
            status,
            body: Body::Json(body),
            journal: self.journal.clone(),
        })
        .await;
    }

    /// Stub a plain-text response
    pub async fn stub_text(
        &self,
        http_method: &str,
        request_path: &str,
        status: u16,
        body: impl Into<String>,
    ) {
        self.mount(http_method, request_path, RecordingStub {
            status,
            body: Body::Text(body.into()),
            journal: self.journal.clone(),
        })
        .await;
    }

    /// Stub an error response with a raw body
    pub async fn stub_error(&self, http_method: &str, request_path: &str, status: u16) {
        self.mount(http_method, request_path, RecordingStub {
            status,
            body: Body::Empty,
            journal: self.journal.clone(),
        })
        .await;
    }

    /// Requests answered so far
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.journal.read().clone()
    }

    /// Number of requests answered so far
    pub fn request_count(&self) -> usize {
        self.journal.read().len()
    }

    /// Clear the request journal
    pub fn clear(&self) {
        self.journal.write().clear();
    }

    async fn mount(&self, http_method: &str, request_path: &str, stub: RecordingStub) {
        Mock::given(method(http_method))
            .and(path(request_path))
            .respond_with(stub)
            .mount(&self.server)
            .await;
    }
}

enum Body {
    Json(serde_json::Value),
    Text(String),
    Empty,
}

struct RecordingStub {
    status: u16,
    body: Body,
    journal: Arc<RwLock<Vec<RecordedRequest>>>,
}

impl Respond for RecordingStub {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        self.journal.write().push(RecordedRequest {
            method: request.method.to_string(),
            path: request.url.path().to_string(),
        });

        let template = ResponseTemplate::new(self.status);
        match &self.body {
            Body::Json(value) => template.set_body_json(value.clone()),
            Body::Text(text) => template.set_body_string(text.clone()),
            Body::Empty => template,
        }
    }
}
