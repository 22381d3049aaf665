//! SDK data models
//!
//! This module provides the data structures used in API requests and
//! responses. Field names and enum values match the wire format; optional
//! fields are skipped during serialization when unset.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use modelserve_domain::quantity::{
    validate_cpu_quantity, validate_memory_quantity, validate_model_name, validate_project_name,
    validate_replica_range,
};
use modelserve_domain::ValidationResult;

// Re-export domain types for convenience
pub use modelserve_domain::deployment::{DeploymentMode, ModelType, Protocol};
pub use modelserve_domain::identifiers::{
    EndpointId, EnvironmentId, JobId, ModelEndpointId, ModelId, ProjectId, SecretId, VersionId,
};
pub use modelserve_domain::status::{EndpointStatus, ImageBuildingJobState, JobStatus};

// ============================================================================
// Pagination
// ============================================================================

/// Pagination cursor for paginated list responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paging {
    /// Current page (1-indexed)
    pub page: i32,
    /// Total number of pages
    pub pages: i32,
    /// Total number of items
    pub total: i32,
}

/// Paginated list of batch prediction jobs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListJobsPaginatedResponse {
    /// Jobs in the current page
    pub results: Vec<PredictionJob>,
    /// Pagination cursor
    pub paging: Paging,
}

impl ListJobsPaginatedResponse {
    /// Check if the page is empty
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Get the number of jobs in the current page
    pub fn len(&self) -> usize {
        self.results.len()
    }
}

// ============================================================================
// Projects
// ============================================================================

/// A project groups models, secrets, and access control
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Unique identifier
    pub id: ProjectId,
    /// Project name
    pub name: String,
    /// Tracking server URL for the project's experiments
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mlflow_tracking_url: Option<String>,
    /// User emails with administrative access
    #[serde(skip_serializing_if = "Option::is_none")]
    pub administrators: Option<Vec<String>>,
    /// User emails with read-only access
    #[serde(skip_serializing_if = "Option::is_none")]
    pub readers: Option<Vec<String>>,
    /// Owning team
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    /// Owning stream
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream: Option<String>,
    /// Project labels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<Label>>,
    /// Creation timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Last update timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A key/value label
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Label {
    /// Label key
    pub key: String,
    /// Label value
    pub value: String,
}

/// Request to create a project
#[derive(Debug, Clone, Serialize)]
pub struct CreateProjectRequest {
    /// Project name
    pub name: String,
    /// Owning team
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    /// Owning stream
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream: Option<String>,
    /// Project labels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<Label>>,
}

impl CreateProjectRequest {
    /// Create a new project request
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            team: None,
            stream: None,
            labels: None,
        }
    }

    /// Set the owning team
    pub fn with_team(mut self, team: impl Into<String>) -> Self {
        self.team = Some(team.into());
        self
    }

    /// Set the owning stream
    pub fn with_stream(mut self, stream: impl Into<String>) -> Self {
        self.stream = Some(stream.into());
        self
    }

    /// Add labels
    pub fn with_labels(mut self, labels: Vec<Label>) -> Self {
        self.labels = Some(labels);
        self
    }

    /// Validate the request against the platform's naming rules
    pub fn validate(&self) -> ValidationResult {
        match validate_project_name(&self.name) {
            Ok(()) => ValidationResult::success(),
            Err(e) => ValidationResult::error("name", e.to_string()),
        }
    }
}

// ============================================================================
// Models & versions
// ============================================================================

/// A registered model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Model {
    /// Unique identifier
    pub id: ModelId,
    /// Owning project
    pub project_id: ProjectId,
    /// Model name
    pub name: String,
    /// Kind of model artifact
    #[serde(rename = "type")]
    pub model_type: ModelType,
    /// Experiment identifier on the tracking server
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mlflow_experiment_id: Option<i32>,
    /// Tracking server URL for the model
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mlflow_url: Option<String>,
    /// Model endpoints currently serving this model
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoints: Option<Vec<ModelEndpoint>>,
    /// Whether observability can be enabled for this model
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observability_supported: Option<bool>,
    /// Creation timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Last update timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Request to register a model
#[derive(Debug, Clone, Serialize)]
pub struct CreateModelRequest {
    /// Model name
    pub name: String,
    /// Kind of model artifact
    #[serde(rename = "type")]
    pub model_type: ModelType,
}

impl CreateModelRequest {
    /// Create a new model request
    pub fn new(name: impl Into<String>, model_type: ModelType) -> Self {
        Self {
            name: name.into(),
            model_type,
        }
    }

    /// Validate the request against the platform's naming rules
    pub fn validate(&self) -> ValidationResult {
        match validate_model_name(&self.name) {
            Ok(()) => ValidationResult::success(),
            Err(e) => ValidationResult::error("name", e.to_string()),
        }
    }
}

/// A model version
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Version {
    /// Unique identifier
    pub id: VersionId,
    /// Owning model
    pub model_id: ModelId,
    /// Run identifier on the tracking server
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mlflow_run_id: Option<String>,
    /// Tracking server URL for the run
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mlflow_url: Option<String>,
    /// Location of the model artifact
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artifact_uri: Option<String>,
    /// Endpoints deployed from this version
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoints: Option<Vec<VersionEndpoint>>,
    /// Version labels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<HashMap<String, String>>,
    /// Python version the model was built with
    #[serde(skip_serializing_if = "Option::is_none")]
    pub python_version: Option<String>,
    /// Custom serving image settings, for custom models
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_predictor: Option<CustomPredictor>,
    /// Prediction schema attached to this version
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_schema: Option<ModelSchema>,
    /// Creation timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Last update timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Serving image settings for custom models
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomPredictor {
    /// Serving image reference
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Container entrypoint override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    /// Container argument override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub args: Option<String>,
}

/// Request to create a model version
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateVersionRequest {
    /// Run identifier on the tracking server
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mlflow_run_id: Option<String>,
    /// Location of the model artifact
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artifact_uri: Option<String>,
    /// Version labels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<HashMap<String, String>>,
    /// Python version the model was built with
    #[serde(skip_serializing_if = "Option::is_none")]
    pub python_version: Option<String>,
    /// Custom serving image settings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_predictor: Option<CustomPredictor>,
    /// Prediction schema
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_schema: Option<ModelSchema>,
}

impl CreateVersionRequest {
    /// Create an empty version request
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the tracking-server run ID
    pub fn with_mlflow_run_id(mut self, run_id: impl Into<String>) -> Self {
        self.mlflow_run_id = Some(run_id.into());
        self
    }

    /// Set the artifact location
    pub fn with_artifact_uri(mut self, uri: impl Into<String>) -> Self {
        self.artifact_uri = Some(uri.into());
        self
    }

    /// Add labels
    pub fn with_labels(mut self, labels: HashMap<String, String>) -> Self {
        self.labels = Some(labels);
        self
    }
}

/// Partial update for a model version
#[derive(Debug, Clone, Default, Serialize)]
pub struct VersionPatch {
    /// Replacement labels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<HashMap<String, String>>,
    /// Replacement custom predictor settings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_predictor: Option<CustomPredictor>,
    /// Replacement prediction schema
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_schema: Option<ModelSchema>,
}

// ============================================================================
// Model schemas
// ============================================================================

/// Prediction schema attached to a model version
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelSchema {
    /// Unique identifier, assigned by the server
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    /// Owning model
    pub model_id: ModelId,
    /// Schema specification
    pub spec: SchemaSpec,
}

/// Specification of a model's prediction log schema
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemaSpec {
    /// Column holding the prediction identifier
    pub prediction_id_column: String,
    /// Columns carried through as tags
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_columns: Option<Vec<String>>,
    /// Feature column types
    pub feature_types: HashMap<String, ValueType>,
    /// Shape of the model's prediction output
    pub model_prediction_output: ModelPredictionOutput,
}

/// Type of a feature column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    /// 64-bit integer
    Int64,
    /// 64-bit float
    Float64,
    /// Boolean
    Boolean,
    /// UTF-8 string
    String,
}

/// Shape of a model's prediction output
///
/// Tagged by the `output_class` field on the wire, so each variant decodes
/// only when its declared discriminator matches.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "output_class")]
pub enum ModelPredictionOutput {
    /// Binary classification scores
    BinaryClassificationOutput(BinaryClassificationOutput),
    /// Ranking scores per prediction group
    RankingOutput(RankingOutput),
    /// Scalar regression scores
    RegressionOutput(RegressionOutput),
}

/// Output columns of a binary classification model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BinaryClassificationOutput {
    /// Column holding the prediction score
    pub prediction_score_column: String,
    /// Column holding the observed label, when available
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_label_column: Option<String>,
    /// Label of the negative class
    pub negative_class_label: String,
    /// Label of the positive class
    pub positive_class_label: String,
    /// Decision threshold applied to the score
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score_threshold: Option<f64>,
}

/// Output columns of a ranking model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingOutput {
    /// Column holding the rank score
    pub rank_score_column: String,
    /// Column grouping predictions into ranking sessions
    pub prediction_group_id_column: String,
    /// Column holding the observed relevance score, when available
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relevance_score_column: Option<String>,
}

/// Output columns of a regression model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegressionOutput {
    /// Column holding the prediction score
    pub prediction_score_column: String,
    /// Column holding the observed value, when available
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_score_column: Option<String>,
}

// ============================================================================
// Serving
// ============================================================================

/// A deployment of a model version
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VersionEndpoint {
    /// Unique identifier, assigned by the server
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<EndpointId>,
    /// Version this endpoint serves
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_id: Option<VersionId>,
    /// Lifecycle status
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<EndpointStatus>,
    /// URL the endpoint answers on
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Generated service name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_name: Option<String>,
    /// Name of the environment the endpoint runs in
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment_name: Option<String>,
    /// Environment the endpoint runs in
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment: Option<Environment>,
    /// Monitoring dashboard URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monitoring_url: Option<String>,
    /// Deployment message, set when the deployment failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Resources requested for the model server
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_request: Option<ResourceRequest>,
    /// Resources requested for the image build
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_builder_resource_request: Option<ResourceRequest>,
    /// Environment variables injected into the model server
    #[serde(skip_serializing_if = "Option::is_none")]
    pub env_vars: Option<Vec<EnvVar>>,
    /// Platform secrets mounted into the model server
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secrets: Option<Vec<MountedMLPSecret>>,
    /// Pre/post-processing transformer attached to the endpoint
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transformer: Option<Transformer>,
    /// Request/response logging settings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logger: Option<Logger>,
    /// How the endpoint is deployed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deployment_mode: Option<DeploymentMode>,
    /// Autoscaling settings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autoscaling_policy: Option<AutoscalingPolicy>,
    /// Protocol the endpoint speaks
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol: Option<Protocol>,
    /// Whether prediction observability is enabled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_model_observability: Option<bool>,
    /// Creation timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Last update timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl VersionEndpoint {
    /// Create an empty deployment request
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the endpoint has a live model server
    pub fn is_ready(&self) -> bool {
        self.status.map(|s| s.is_active()).unwrap_or(false)
    }
}

/// Resources requested for a deployment
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResourceRequest {
    /// Minimum replica count
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_replica: Option<i32>,
    /// Maximum replica count
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_replica: Option<i32>,
    /// CPU request, as a Kubernetes quantity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu_request: Option<String>,
    /// CPU limit, as a Kubernetes quantity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu_limit: Option<String>,
    /// Memory request, as a Kubernetes quantity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory_request: Option<String>,
    /// GPU class name, required when requesting GPUs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gpu_name: Option<String>,
    /// Number of GPUs requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gpu_request: Option<String>,
}

impl ResourceRequest {
    /// Validate quantities and replica ranges before submission
    pub fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::success();

        if let (Some(min), Some(max)) = (self.min_replica, self.max_replica) {
            if let Err(e) = validate_replica_range(min, max) {
                result.add_error("min_replica", e.to_string());
            }
        }
        if let Some(ref cpu) = self.cpu_request {
            if let Err(e) = validate_cpu_quantity(cpu) {
                result.add_error("cpu_request", e.to_string());
            }
        }
        if let Some(ref cpu) = self.cpu_limit {
            if let Err(e) = validate_cpu_quantity(cpu) {
                result.add_error("cpu_limit", e.to_string());
            }
        }
        if let Some(ref memory) = self.memory_request {
            if let Err(e) = validate_memory_quantity(memory) {
                result.add_error("memory_request", e.to_string());
            }
        }
        if self.gpu_request.is_some() && self.gpu_name.is_none() {
            result.add_error("gpu_name", "gpu_name is required when requesting GPUs");
        }

        result
    }
}

/// Autoscaling settings for a deployment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutoscalingPolicy {
    /// Metric driving the autoscaler
    pub metrics_type: MetricsType,
    /// Target value of the metric
    pub target_value: f64,
}

/// Metric driving an autoscaler
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricsType {
    /// In-flight requests per replica
    Concurrency,
    /// CPU utilization percentage
    CpuUtilization,
    /// Memory utilization percentage
    MemoryUtilization,
    /// Requests per second
    Rps,
}

/// An environment variable injected into a serving container
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvVar {
    /// Variable name
    pub name: String,
    /// Variable value
    pub value: String,
}

impl EnvVar {
    /// Create a new environment variable
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A platform secret mounted into a serving container
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MountedMLPSecret {
    /// Name of the platform secret
    pub mlp_secret_name: String,
    /// Environment variable the secret value is exposed as
    pub env_var_name: String,
}

/// Pre/post-processing transformer attached to an endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Transformer {
    /// Whether the transformer is deployed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Kind of transformer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transformer_type: Option<TransformerType>,
    /// Image reference, for custom transformers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Container entrypoint override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    /// Container argument override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub args: Option<String>,
    /// Environment variables injected into the transformer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub env_vars: Option<Vec<EnvVar>>,
    /// Resources requested for the transformer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_request: Option<ResourceRequest>,
    /// Creation timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Last update timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Kind of transformer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransformerType {
    /// Configuration-driven standard transformer
    Standard,
    /// User-supplied transformer image
    Custom,
}

/// Request/response logging settings for an endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Logger {
    /// Model server logging
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<LoggerConfig>,
    /// Transformer logging
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transformer: Option<LoggerConfig>,
    /// Prediction log ingestion
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prediction: Option<PredictionLoggerConfig>,
}

/// Logging settings for one component
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggerConfig {
    /// Whether logging is enabled
    pub enabled: bool,
    /// What gets logged
    pub mode: LoggerMode,
}

/// What a component logger records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoggerMode {
    /// Log requests and responses
    All,
    /// Log requests only
    Request,
    /// Log responses only
    Response,
}

/// Prediction log ingestion settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionLoggerConfig {
    /// Whether prediction logging is enabled
    pub enabled: bool,
    /// Table receiving raw feature rows
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_features_table: Option<String>,
    /// Table receiving entity rows
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entities_table: Option<String>,
}

// ============================================================================
// Model endpoints
// ============================================================================

/// A stable serving endpoint routing traffic to version endpoints
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModelEndpoint {
    /// Unique identifier, assigned by the server
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<ModelEndpointId>,
    /// Model this endpoint serves
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_id: Option<ModelId>,
    /// Model this endpoint serves
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<Box<Model>>,
    /// Lifecycle status
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<EndpointStatus>,
    /// URL the endpoint answers on
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Traffic routing rule
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule: Option<ModelEndpointRule>,
    /// Name of the environment the endpoint runs in
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment_name: Option<String>,
    /// Environment the endpoint runs in
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment: Option<Environment>,
    /// Protocol the endpoint speaks
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol: Option<Protocol>,
    /// Creation timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Last update timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Traffic routing rule of a model endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelEndpointRule {
    /// Weighted destinations
    pub destination: Vec<ModelEndpointRuleDestination>,
    /// Version endpoint receiving mirrored traffic
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mirror: Option<VersionEndpoint>,
}

/// One weighted destination of a routing rule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelEndpointRuleDestination {
    /// Target version endpoint
    pub version_endpoint_id: EndpointId,
    /// Target version endpoint, expanded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_endpoint: Option<VersionEndpoint>,
    /// Share of traffic routed to the target, 0-100
    pub weight: i32,
}

// ============================================================================
// Environments
// ============================================================================

/// A deployment environment (cluster)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Environment {
    /// Unique identifier
    pub id: EnvironmentId,
    /// Environment name
    pub name: String,
    /// Kubernetes cluster name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster: Option<String>,
    /// Whether this is the default deployment target
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,
    /// Cloud region
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Cloud project the cluster runs in
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gcp_project: Option<String>,
    /// Largest CPU request the environment accepts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_cpu: Option<String>,
    /// Largest memory request the environment accepts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_memory: Option<String>,
    /// GPU classes available in the environment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gpus: Option<Vec<GpuConfig>>,
    /// Resources applied when a deployment does not request any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_resource_request: Option<ResourceRequest>,
    /// Default resources for transformers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_transformer_resource_request: Option<ResourceRequest>,
    /// Default resources for batch prediction jobs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_prediction_job_resource_request: Option<PredictionJobResourceRequest>,
    /// Creation timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Last update timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A GPU class offered by an environment
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GpuConfig {
    /// GPU class name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Allowed per-replica GPU counts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<String>>,
    /// Kubernetes resource type of the GPU
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
    /// Node selector targeting GPU nodes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_selector: Option<HashMap<String, String>>,
    /// Tolerations applied to GPU workloads
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tolerations: Option<Vec<GpuToleration>>,
    /// Lower bound of the monthly cost per GPU
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_monthly_cost_per_gpu: Option<f64>,
    /// Upper bound of the monthly cost per GPU
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_monthly_cost_per_gpu: Option<f64>,
}

/// A toleration applied to GPU workloads
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GpuToleration {
    /// Taint key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Match operator
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operator: Option<String>,
    /// Taint value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Taint effect
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effect: Option<String>,
    /// Eviction grace period in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub toleration_seconds: Option<i64>,
}

/// A container belonging to a deployment or job
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Container {
    /// Container name
    pub name: String,
    /// Pod the container runs in
    pub pod_name: String,
    /// Namespace the pod runs in
    pub namespace: String,
    /// Cluster the pod runs in
    pub cluster: String,
    /// Cloud project of the cluster
    pub gcp_project: String,
}

// ============================================================================
// Batch prediction
// ============================================================================

/// A batch prediction job
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionJob {
    /// Unique identifier
    pub id: JobId,
    /// Job name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Version the job runs
    pub version_id: VersionId,
    /// Model the job belongs to
    pub model_id: ModelId,
    /// Project the job belongs to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<ProjectId>,
    /// Job configuration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<PredictionJobConfig>,
    /// Lifecycle status
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<JobStatus>,
    /// Failure detail, set when the job failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Creation timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Last update timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl PredictionJob {
    /// Whether the job has reached a final state
    pub fn is_finished(&self) -> bool {
        self.status.map(|s| s.is_terminal()).unwrap_or(false)
    }
}

/// Configuration envelope of a batch prediction job
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PredictionJobConfig {
    /// Source/sink specification
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_config: Option<PredictionJobConfigSpec>,
    /// Image the job runs, when overriding the built image
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_ref: Option<String>,
    /// Service account the job runs as
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_account_name: Option<String>,
    /// Resources requested for the job
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_request: Option<PredictionJobResourceRequest>,
    /// Resources requested for the image build
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_builder_resource_request: Option<ResourceRequest>,
    /// Environment variables injected into the job
    #[serde(skip_serializing_if = "Option::is_none")]
    pub env_vars: Option<Vec<EnvVar>>,
    /// Platform secrets mounted into the job
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secrets: Option<Vec<MountedMLPSecret>>,
}

/// Source/sink specification of a batch prediction job
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PredictionJobConfigSpec {
    /// Specification version
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Specification kind
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Job name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// BigQuery input table
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bigquery_source: Option<PredictionJobConfigBigquerySource>,
    /// Object-storage input files
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gcs_source: Option<PredictionJobConfigGcsSource>,
    /// Model settings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<PredictionJobConfigModel>,
    /// BigQuery output table
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bigquery_sink: Option<PredictionJobConfigBigquerySink>,
    /// Object-storage output files
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gcs_sink: Option<PredictionJobConfigGcsSink>,
}

/// Model settings of a batch prediction job
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PredictionJobConfigModel {
    /// Kind of model artifact
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub model_type: Option<ModelType>,
    /// Artifact location
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    /// Shape of the prediction result
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<PredictionJobConfigModelResult>,
    /// Extra model options
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<HashMap<String, String>>,
}

/// Shape of a batch prediction result column
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionJobConfigModelResult {
    /// Result column type
    #[serde(rename = "type")]
    pub result_type: ResultType,
    /// Element type, when the result is an array
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_type: Option<ResultType>,
}

/// Type of a batch prediction result column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResultType {
    /// 64-bit float
    #[serde(rename = "DOUBLE")]
    Double,
    /// 32-bit float
    #[serde(rename = "FLOAT")]
    Float,
    /// 32-bit integer
    #[serde(rename = "INTEGER")]
    Integer,
    /// 64-bit integer
    #[serde(rename = "LONG")]
    Long,
    /// UTF-8 string
    #[serde(rename = "STRING")]
    String,
    /// Array of `item_type` elements
    #[serde(rename = "ARRAY")]
    Array,
}

/// BigQuery input table of a batch prediction job
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionJobConfigBigquerySource {
    /// Fully qualified table name
    pub table: String,
    /// Columns read from the table
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<String>>,
    /// Extra read options
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<HashMap<String, String>>,
}

/// Object-storage input files of a batch prediction job
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionJobConfigGcsSource {
    /// File format
    pub format: FileFormat,
    /// Source URI pattern
    pub uri: String,
    /// Columns read from the files
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<String>>,
}

/// BigQuery output table of a batch prediction job
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionJobConfigBigquerySink {
    /// Fully qualified table name
    pub table: String,
    /// Bucket staging the load job
    pub staging_bucket: String,
    /// Column receiving the prediction result
    pub result_column: String,
    /// Behavior when the table exists
    #[serde(skip_serializing_if = "Option::is_none")]
    pub save_mode: Option<SaveMode>,
    /// Extra write options
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<HashMap<String, String>>,
}

/// Object-storage output files of a batch prediction job
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionJobConfigGcsSink {
    /// File format
    pub format: FileFormat,
    /// Destination URI
    pub uri: String,
    /// Column receiving the prediction result
    pub result_column: String,
    /// Behavior when the destination exists
    #[serde(skip_serializing_if = "Option::is_none")]
    pub save_mode: Option<SaveMode>,
}

/// Behavior when a batch prediction sink already exists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SaveMode {
    /// Fail the job
    #[serde(rename = "ERRORIFEXISTS")]
    ErrorIfExists,
    /// Replace existing data
    #[serde(rename = "OVERWRITE")]
    Overwrite,
    /// Append to existing data
    #[serde(rename = "APPEND")]
    Append,
    /// Skip the write
    #[serde(rename = "IGNORE")]
    Ignore,
    /// Fail the job (legacy alias)
    #[serde(rename = "ERROR")]
    Error,
}

/// File format of a batch prediction source or sink
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileFormat {
    /// Newline-delimited JSON
    Json,
    /// Comma-separated values
    Csv,
    /// Apache Parquet
    Parquet,
    /// Apache Avro
    Avro,
}

/// Resources requested for a batch prediction job
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PredictionJobResourceRequest {
    /// Driver CPU request, as a Kubernetes quantity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub driver_cpu_request: Option<String>,
    /// Driver memory request, as a Kubernetes quantity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub driver_memory_request: Option<String>,
    /// Executor CPU request, as a Kubernetes quantity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub executor_cpu_request: Option<String>,
    /// Executor memory request, as a Kubernetes quantity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub executor_memory_request: Option<String>,
    /// Executor count
    #[serde(skip_serializing_if = "Option::is_none")]
    pub executor_replica: Option<i32>,
}

impl PredictionJobResourceRequest {
    /// Validate quantities before submission
    pub fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::success();

        for (path, value) in [
            ("driver_cpu_request", &self.driver_cpu_request),
            ("executor_cpu_request", &self.executor_cpu_request),
        ] {
            if let Some(cpu) = value {
                if let Err(e) = validate_cpu_quantity(cpu) {
                    result.add_error(path, e.to_string());
                }
            }
        }
        for (path, value) in [
            ("driver_memory_request", &self.driver_memory_request),
            ("executor_memory_request", &self.executor_memory_request),
        ] {
            if let Some(memory) = value {
                if let Err(e) = validate_memory_quantity(memory) {
                    result.add_error(path, e.to_string());
                }
            }
        }
        if let Some(replicas) = self.executor_replica {
            if replicas < 1 {
                result.add_error("executor_replica", "executor count must be at least 1");
            }
        }

        result
    }
}

/// Request to submit a batch prediction job
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreatePredictionJobRequest {
    /// Job name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Job configuration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<PredictionJobConfig>,
}

impl CreatePredictionJobRequest {
    /// Create an empty job request
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the job name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the job configuration
    pub fn with_config(mut self, config: PredictionJobConfig) -> Self {
        self.config = Some(config);
        self
    }
}

// ============================================================================
// Secrets
// ============================================================================

/// A project-scoped secret
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Secret {
    /// Unique identifier, assigned by the server
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<SecretId>,
    /// Secret name
    pub name: String,
    /// Secret value
    pub data: String,
}

impl Secret {
    /// Create a new secret
    pub fn new(name: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            data: data.into(),
        }
    }
}

// ============================================================================
// Alerts
// ============================================================================

/// Alerting rules attached to a model endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModelEndpointAlert {
    /// Model the alert belongs to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_id: Option<ModelId>,
    /// Model endpoint the alert watches
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_endpoint_id: Option<ModelEndpointId>,
    /// Environment the endpoint runs in
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment_name: Option<String>,
    /// Team receiving the alert
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_name: Option<String>,
    /// Alert conditions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert_conditions: Option<Vec<ModelEndpointAlertCondition>>,
}

/// One alerting condition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelEndpointAlertCondition {
    /// Whether the condition is active
    pub enabled: bool,
    /// Metric the condition watches
    pub metric_type: AlertConditionMetricType,
    /// Severity of the raised alert
    pub severity: AlertConditionSeverity,
    /// Threshold value
    pub target: f64,
    /// Percentile the threshold applies to, for latency metrics
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentile: Option<f64>,
    /// Unit of the threshold value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

/// Metric watched by an alert condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertConditionMetricType {
    /// Request throughput
    Throughput,
    /// Request latency
    Latency,
    /// Error rate
    ErrorRate,
    /// CPU usage
    Cpu,
    /// Memory usage
    Memory,
}

/// Severity of a raised alert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertConditionSeverity {
    /// Non-paging alert
    #[serde(rename = "WARNING")]
    Warning,
    /// Paging alert
    #[serde(rename = "CRITICAL")]
    Critical,
}

// ============================================================================
// Version images
// ============================================================================

/// The built serving image of a model version
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VersionImage {
    /// Owning project
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<ProjectId>,
    /// Owning model
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_id: Option<ModelId>,
    /// Owning version
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_id: Option<VersionId>,
    /// Image reference
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_ref: Option<String>,
    /// Whether the image exists in the registry
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exists: Option<bool>,
    /// Status of the most recent build
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_building_job_status: Option<ImageBuildingJobStatus>,
}

/// Status of an image build
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImageBuildingJobStatus {
    /// Build state
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<ImageBuildingJobState>,
    /// Failure detail, set when the build failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Options for triggering an image build
#[derive(Debug, Clone, Default, Serialize)]
pub struct BuildImageOptions {
    /// Resources requested for the build
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_request: Option<ResourceRequest>,
}

// ============================================================================
// Transformer simulation
// ============================================================================

/// Request to simulate a standard transformer configuration
#[derive(Debug, Clone, Default, Serialize)]
pub struct StandardTransformerSimulationRequest {
    /// Incoming prediction request payload
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<serde_json::Value>,
    /// Incoming request headers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<HashMap<String, String>>,
    /// Transformer configuration under test
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<serde_json::Value>,
    /// How the model behind the transformer is simulated
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_prediction_config: Option<ModelPredictionConfig>,
}

/// How the model is simulated during a transformer simulation
#[derive(Debug, Clone, Default, Serialize)]
pub struct ModelPredictionConfig {
    /// Canned model response
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mock_response: Option<MockResponse>,
}

/// Canned model response used in a simulation
#[derive(Debug, Clone, Default, Serialize)]
pub struct MockResponse {
    /// Response body
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<serde_json::Value>,
    /// Response headers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<HashMap<String, String>>,
}

/// Result of a transformer simulation
#[derive(Debug, Clone, Deserialize)]
pub struct StandardTransformerSimulationResponse {
    /// Final transformed response
    pub response: Option<serde_json::Value>,
    /// Per-operation trace of the pipeline
    pub operation_tracing: Option<OperationTracing>,
}

/// Per-stage trace of a transformer pipeline run
#[derive(Debug, Clone, Deserialize)]
pub struct OperationTracing {
    /// Preprocess stage operations
    pub preprocess: Option<Vec<PipelineTracing>>,
    /// Postprocess stage operations
    pub postprocess: Option<Vec<PipelineTracing>>,
}

/// Trace of one pipeline operation
#[derive(Debug, Clone, Deserialize)]
pub struct PipelineTracing {
    /// Operation input
    pub input: Option<serde_json::Value>,
    /// Operation output
    pub output: Option<serde_json::Value>,
    /// Operation specification
    pub spec: Option<serde_json::Value>,
    /// Kind of operation
    pub operation_type: Option<String>,
    /// Failure detail, set when the operation failed
    pub error: Option<String>,
}
