//! Endpoint wrapper tests
//!
//! Representative request/response scenarios for the service facades: path
//! construction, query parameters, request bodies, and response decoding.

use modelserve_domain::{
    DeploymentMode, EndpointStatus, JobId, JobStatus, ModelEndpointId, ModelId, ProjectId,
    VersionId,
};
use modelserve_sdk::services::{LogParams, PageParams, VersionListParams};
use modelserve_sdk::{Client, CreatePredictionJobRequest, Secret, VersionEndpoint};
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path, query_param};
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
async fn list_versions_sends_query_params() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/models/4/versions"))
        .and(query_param("limit", "5"))
        .and(query_param("search", "environment:staging"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 12, "model_id": 4, "artifact_uri": "gs://models/4/12" }
        ])))
        .mount(&server)
        .await;

    let versions = client_for(&server)
        .versions()
        .list(
            ModelId::new(4),
            VersionListParams::new().limit(5).search("environment:staging"),
        )
        .await
        .unwrap();

    assert_eq!(versions.len(), 1);
    assert_eq!(versions[0].id, VersionId::new(12));
    assert_eq!(versions[0].artifact_uri.as_deref(), Some("gs://models/4/12"));
}

#[tokio::test]
async fn deploy_sends_endpoint_body_and_decodes_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/models/4/versions/12/endpoint"))
        .and(body_partial_json(json!({
            "environment_name": "staging",
            "deployment_mode": "serverless"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "b8f6f2a0-9b2e-4f53-b27e-9a2f4f3c1d10",
            "version_id": 12,
            "status": "pending",
            "environment_name": "staging",
            "deployment_mode": "serverless"
        })))
        .mount(&server)
        .await;

    let endpoint = VersionEndpoint {
        environment_name: Some("staging".to_string()),
        deployment_mode: Some(DeploymentMode::Serverless),
        ..Default::default()
    };

    let deployed = client_for(&server)
        .version_endpoints()
        .deploy(ModelId::new(4), VersionId::new(12), &endpoint)
        .await
        .unwrap();

    assert_eq!(deployed.status, Some(EndpointStatus::Pending));
    assert_eq!(deployed.version_id, Some(VersionId::new(12)));
    assert!(!deployed.is_ready());
}

#[tokio::test]
async fn paginated_job_listing_decodes_paging() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/projects/1/jobs-by-page"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [
                {
                    "id": 31,
                    "name": "daily-scoring",
                    "version_id": 12,
                    "model_id": 4,
                    "project_id": 1,
                    "status": "running"
                }
            ],
            "paging": { "page": 2, "pages": 7, "total": 130 }
        })))
        .mount(&server)
        .await;

    let page = client_for(&server)
        .prediction_jobs()
        .list_in_project(ProjectId::new(1), PageParams::new().page(2))
        .await
        .unwrap();

    assert_eq!(page.len(), 1);
    assert_eq!(page.paging.pages, 7);
    let job = &page.results[0];
    assert_eq!(job.id, JobId::new(31));
    assert_eq!(job.status, Some(JobStatus::Running));
    assert!(!job.is_finished());
}

#[tokio::test]
async fn submit_and_stop_job() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/models/4/versions/12/jobs"))
        .and(body_partial_json(json!({ "name": "backfill" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 77,
            "name": "backfill",
            "version_id": 12,
            "model_id": 4,
            "status": "pending"
        })))
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/models/4/versions/12/jobs/77/stop"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let request = CreatePredictionJobRequest::new().with_name("backfill");
    let job = client
        .prediction_jobs()
        .create(ModelId::new(4), VersionId::new(12), &request)
        .await
        .unwrap();
    assert_eq!(job.id, JobId::new(77));

    client
        .prediction_jobs()
        .stop(ModelId::new(4), VersionId::new(12), job.id)
        .await
        .unwrap();
}

#[tokio::test]
async fn log_read_returns_plain_text() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/logs"))
        .and(query_param("model_id", "4"))
        .and(query_param("tail_lines", "50"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("2026-08-05 INFO model server ready\n"),
        )
        .mount(&server)
        .await;

    let logs = client_for(&server)
        .logs()
        .read(&LogParams::new().model_id(ModelId::new(4)).tail_lines(50))
        .await
        .unwrap();

    assert!(logs.contains("model server ready"));
}

#[tokio::test]
async fn secret_lifecycle_paths() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/projects/1/secrets"))
        .and(body_partial_json(json!({ "name": "db-password" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 9,
            "name": "db-password",
            "data": "hunter2"
        })))
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/projects/1/secrets/9"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let created = client
        .secrets()
        .create(ProjectId::new(1), &Secret::new("db-password", "hunter2"))
        .await
        .unwrap();
    let secret_id = created.id.unwrap();

    client.secrets().delete(ProjectId::new(1), secret_id).await.unwrap();
}

#[tokio::test]
async fn alert_teams_decode_as_strings() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/alerts/teams"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["risk", "growth"])))
        .mount(&server)
        .await;

    let teams = client_for(&server).alerts().list_teams().await.unwrap();
    assert_eq!(teams, vec!["risk".to_string(), "growth".to_string()]);
}

#[tokio::test]
async fn model_endpoint_stop_uses_delete() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/models/4/endpoints/2"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server)
        .model_endpoints()
        .stop(ModelId::new(4), ModelEndpointId::new(2))
        .await
        .unwrap();
}

#[tokio::test]
async fn environment_listing_with_show_all() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/environments"))
        .and(query_param("show_all", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 1, "name": "staging", "is_default": true },
            { "id": 2, "name": "decommissioned" }
        ])))
        .mount(&server)
        .await;

    let environments = client_for(&server).environments().list(true).await.unwrap();
    assert_eq!(environments.len(), 2);
    assert_eq!(environments[0].name, "staging");
    assert_eq!(environments[0].is_default, Some(true));
}

#[tokio::test]
async fn transformer_simulation_round_trip() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/standard_transformer/simulate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": { "predictions": [0.42] },
            "operation_tracing": {
                "preprocess": [
                    { "operation_type": "variable_op", "input": null, "output": {"x": 1} }
                ],
                "postprocess": []
            }
        })))
        .mount(&server)
        .await;

    let request = modelserve_sdk::StandardTransformerSimulationRequest {
        payload: Some(json!({ "instances": [[1.0, 2.0]] })),
        ..Default::default()
    };

    let result = client_for(&server)
        .transformers()
        .simulate(&request)
        .await
        .unwrap();

    assert_eq!(result.response.unwrap()["predictions"][0], 0.42);
    let tracing = result.operation_tracing.unwrap();
    assert_eq!(tracing.preprocess.unwrap().len(), 1);
}
