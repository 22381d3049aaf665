//! Test fixtures for generating SDK model objects with realistic data.
//!
//! Fixtures return fully-populated instances with sensible defaults; use the
//! builders when a test needs control over specific fields.

use chrono::Utc;
use fake::faker::lorem::en::Word;
use fake::Fake;
use modelserve_domain::{
    DeploymentMode, EndpointStatus, JobStatus, ModelType, Protocol,
};
use modelserve_sdk::models::*;
use std::collections::HashMap;

fn resource_name(prefix: &str) -> String {
    let word: String = Word().fake::<String>().to_lowercase();
    // Model names are length-capped; keep the random part short
    let word = &word[..word.len().min(10)];
    let n: u16 = (1..999).fake();
    format!("{prefix}-{word}-{n}")
}

/// Create a test project
pub fn create_test_project() -> Project {
    Project {
        id: ProjectId::new((1..10_000).fake()),
        name: resource_name("project"),
        mlflow_tracking_url: Some("http://mlflow.internal".to_string()),
        administrators: Some(vec!["owner@example.com".to_string()]),
        readers: None,
        team: Some("platform".to_string()),
        stream: Some("ml".to_string()),
        labels: None,
        created_at: Some(Utc::now()),
        updated_at: Some(Utc::now()),
    }
}

/// Create a test model owned by the given project
pub fn create_test_model(project_id: ProjectId) -> Model {
    create_test_model_of_type(project_id, ModelType::Xgboost)
}

/// Create a test model of a specific type
pub fn create_test_model_of_type(project_id: ProjectId, model_type: ModelType) -> Model {
    Model {
        id: ModelId::new((1..10_000).fake()),
        project_id,
        name: resource_name("model"),
        model_type,
        mlflow_experiment_id: Some((1..1_000).fake()),
        mlflow_url: None,
        endpoints: None,
        observability_supported: Some(false),
        created_at: Some(Utc::now()),
        updated_at: Some(Utc::now()),
    }
}

/// Create a test version of the given model
pub fn create_test_version(model_id: ModelId) -> Version {
    Version {
        id: VersionId::new((1..10_000).fake()),
        model_id,
        mlflow_run_id: Some(uuid::Uuid::new_v4().simple().to_string()),
        mlflow_url: None,
        artifact_uri: Some(format!("gs://models/{}/artifacts", model_id)),
        endpoints: None,
        labels: Some(HashMap::from([(
            "stage".to_string(),
            "candidate".to_string(),
        )])),
        python_version: Some("3.10.*".to_string()),
        custom_predictor: None,
        model_schema: None,
        created_at: Some(Utc::now()),
        updated_at: Some(Utc::now()),
    }
}

/// Create a test resource request with small, valid quantities
pub fn create_test_resource_request() -> ResourceRequest {
    ResourceRequest {
        min_replica: Some(1),
        max_replica: Some(2),
        cpu_request: Some("500m".to_string()),
        cpu_limit: None,
        memory_request: Some("512Mi".to_string()),
        gpu_name: None,
        gpu_request: None,
    }
}

/// Create a test version endpoint in the given status
pub fn create_test_version_endpoint(version_id: VersionId, status: EndpointStatus) -> VersionEndpoint {
    VersionEndpoint {
        id: Some(EndpointId::new()),
        version_id: Some(version_id),
        status: Some(status),
        url: Some("model-1.staging.modelserve.internal".to_string()),
        service_name: None,
        environment_name: Some("staging".to_string()),
        environment: None,
        monitoring_url: None,
        message: None,
        resource_request: Some(create_test_resource_request()),
        image_builder_resource_request: None,
        env_vars: Some(vec![EnvVar::new("WORKERS", "1")]),
        secrets: None,
        transformer: None,
        logger: None,
        deployment_mode: Some(DeploymentMode::Serverless),
        autoscaling_policy: None,
        protocol: Some(Protocol::HttpJson),
        enable_model_observability: None,
        created_at: Some(Utc::now()),
        updated_at: Some(Utc::now()),
    }
}

/// Create a test environment
pub fn create_test_environment(name: &str, is_default: bool) -> Environment {
    Environment {
        id: EnvironmentId::new((1..100).fake()),
        name: name.to_string(),
        cluster: Some(format!("{name}-cluster")),
        is_default: Some(is_default),
        region: Some("asia-southeast2".to_string()),
        gcp_project: Some("modelserve-staging".to_string()),
        max_cpu: Some("8".to_string()),
        max_memory: Some("16Gi".to_string()),
        gpus: None,
        default_resource_request: Some(create_test_resource_request()),
        default_transformer_resource_request: None,
        default_prediction_job_resource_request: None,
        created_at: Some(Utc::now()),
        updated_at: Some(Utc::now()),
    }
}

/// Create a test batch prediction job in the given status
pub fn create_test_prediction_job(
    model_id: ModelId,
    version_id: VersionId,
    status: JobStatus,
) -> PredictionJob {
    PredictionJob {
        id: JobId::new((1..10_000).fake()),
        name: Some(resource_name("job")),
        version_id,
        model_id,
        project_id: None,
        config: None,
        status: Some(status),
        error: None,
        created_at: Some(Utc::now()),
        updated_at: Some(Utc::now()),
    }
}

/// Create a test prediction schema spec for a binary classifier
pub fn create_test_schema_spec() -> SchemaSpec {
    SchemaSpec {
        prediction_id_column: "prediction_id".to_string(),
        tag_columns: Some(vec!["session_id".to_string()]),
        feature_types: HashMap::from([
            ("amount".to_string(), ValueType::Float64),
            ("merchant".to_string(), ValueType::String),
            ("is_weekend".to_string(), ValueType::Boolean),
        ]),
        model_prediction_output: ModelPredictionOutput::BinaryClassificationOutput(
            BinaryClassificationOutput {
                prediction_score_column: "score".to_string(),
                actual_label_column: None,
                negative_class_label: "legit".to_string(),
                positive_class_label: "fraud".to_string(),
                score_threshold: Some(0.5),
            },
        ),
    }
}
