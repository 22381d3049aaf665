//! HTTP pipeline tests
//!
//! Exercises the request/response/error pipeline against a mock server:
//! status mapping, decode classification, retry behavior, and connection
//! failures.

use modelserve_sdk::{Client, SdkError};
use modelserve_domain::ProjectId;
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> Client {
    Client::builder()
        .base_url(server.uri())
        .bearer_token("test-token")
        .retry_count(0)
        .build()
        .unwrap()
}

#[tokio::test]
async fn well_formed_response_decodes_into_model() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/projects/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 1,
            "name": "fraud-detection",
            "team": "risk",
            "mlflow_tracking_url": "http://mlflow.internal"
        })))
        .mount(&server)
        .await;

    let project = client_for(&server)
        .projects()
        .get(ProjectId::new(1))
        .await
        .unwrap();

    assert_eq!(project.id, ProjectId::new(1));
    assert_eq!(project.name, "fraud-detection");
    assert_eq!(project.team.as_deref(), Some("risk"));
    assert_eq!(
        project.mlflow_tracking_url.as_deref(),
        Some("http://mlflow.internal")
    );
}

#[tokio::test]
async fn auth_header_is_sent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/projects"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let projects = client_for(&server).projects().list(None).await.unwrap();
    assert!(projects.is_empty());
}

#[tokio::test]
async fn non_success_statuses_surface_exact_code() {
    for status in [400u16, 401, 403, 404, 409, 422, 500, 503] {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/projects/7"))
            .respond_with(
                ResponseTemplate::new(status).set_body_string("{\"error\": \"nope\"}"),
            )
            .mount(&server)
            .await;

        let err = client_for(&server)
            .projects()
            .get(ProjectId::new(7))
            .await
            .unwrap_err();

        match err {
            SdkError::Api { status_code, ref body, .. } => {
                assert_eq!(status_code, status);
                assert!(body.contains("nope"));
            }
            other => panic!("expected Api error for {status}, got {other:?}"),
        }
    }
}

#[tokio::test]
async fn api_error_carries_headers_and_reason() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/projects/7"))
        .respond_with(
            ResponseTemplate::new(429)
                .insert_header("Retry-After", "30")
                .set_body_string("slow down"),
        )
        .mount(&server)
        .await;

    let err = client_for(&server)
        .projects()
        .get(ProjectId::new(7))
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), Some(429));
    assert_eq!(err.header("retry-after"), Some("30"));
    match err {
        SdkError::Api { reason, body, .. } => {
            assert_eq!(reason, "Too Many Requests");
            assert_eq!(body, "slow down");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn missing_required_field_is_key_error() {
    let server = MockServer::start().await;

    // Project without its required name
    Mock::given(method("GET"))
        .and(path("/projects/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": 1 })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .projects()
        .get(ProjectId::new(1))
        .await
        .unwrap_err();

    match err {
        SdkError::MissingField { field } => assert_eq!(field, "name"),
        other => panic!("expected MissingField, got {other:?}"),
    }
}

#[tokio::test]
async fn wrong_field_type_is_type_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/projects/1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "id": "one", "name": "fraud-detection" })),
        )
        .mount(&server)
        .await;

    let err = client_for(&server)
        .projects()
        .get(ProjectId::new(1))
        .await
        .unwrap_err();

    match err {
        SdkError::UnexpectedType { message } => {
            assert!(message.contains("invalid type"), "message: {message}");
        }
        other => panic!("expected UnexpectedType, got {other:?}"),
    }
}

#[tokio::test]
async fn out_of_domain_enum_is_value_error() {
    let server = MockServer::start().await;

    // "archived" is not an endpoint status
    Mock::given(method("GET"))
        .and(path("/models/1/endpoints"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 5, "model_id": 1, "status": "archived" }
        ])))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .model_endpoints()
        .list(modelserve_domain::ModelId::new(1))
        .await
        .unwrap_err();

    match err {
        SdkError::InvalidValue { message } => {
            assert!(message.contains("unknown variant"), "message: {message}");
        }
        other => panic!("expected InvalidValue, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_json_is_serialization_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/projects/1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not json"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .projects()
        .get(ProjectId::new(1))
        .await
        .unwrap_err();

    assert!(matches!(err, SdkError::Serialization { .. }), "got {err:?}");
}

#[tokio::test]
async fn connection_failure_is_network_error() {
    let server = MockServer::start().await;
    let uri = server.uri();
    drop(server);

    let client = Client::builder()
        .base_url(uri)
        .retry_count(0)
        .build()
        .unwrap();

    let err = client.projects().get(ProjectId::new(1)).await.unwrap_err();
    assert!(matches!(err, SdkError::Network { .. }), "got {err:?}");
    assert!(err.is_retryable());
}

#[tokio::test]
async fn transient_server_error_is_retried() {
    let server = MockServer::start().await;

    // First attempt fails with 503, the retry succeeds
    Mock::given(method("GET"))
        .and(path("/projects/1"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/projects/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 1,
            "name": "fraud-detection"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = Client::builder()
        .base_url(server.uri())
        .retry_count(2)
        .build()
        .unwrap();

    let project = client.projects().get(ProjectId::new(1)).await.unwrap();
    assert_eq!(project.name, "fraud-detection");
}

#[tokio::test]
async fn client_errors_are_not_retried() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/projects/1"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    let client = Client::builder()
        .base_url(server.uri())
        .retry_count(3)
        .build()
        .unwrap();

    let err = client.projects().get(ProjectId::new(1)).await.unwrap_err();
    assert_eq!(err.status_code(), Some(404));

    // The expect(1) above verifies no retry happened when the server drops
}

#[tokio::test]
async fn retries_exhausted_surface_last_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/projects/1"))
        .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
        .expect(3) // initial attempt + two retries
        .mount(&server)
        .await;

    let client = Client::builder()
        .base_url(server.uri())
        .retry_count(2)
        .build()
        .unwrap();

    let err = client.projects().get(ProjectId::new(1)).await.unwrap_err();
    assert_eq!(err.status_code(), Some(503));
}

#[tokio::test]
async fn void_operations_accept_empty_bodies() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/projects/1/models/2"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    client_for(&server)
        .models()
        .delete(ProjectId::new(1), modelserve_domain::ModelId::new(2))
        .await
        .unwrap();
}

#[tokio::test]
async fn typed_operations_reject_empty_bodies() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/projects/1"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .projects()
        .get(ProjectId::new(1))
        .await
        .unwrap_err();

    assert!(matches!(err, SdkError::UnexpectedType { .. }), "got {err:?}");
}
