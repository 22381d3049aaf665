//! Builder patterns for constructing SDK model objects in tests.
//!
//! Builders start from the fixture defaults and let a test override exactly
//! the fields it cares about.

use modelserve_domain::{DeploymentMode, ModelType, Protocol};
use modelserve_sdk::models::*;

/// Builder for [`Project`]
pub struct ProjectBuilder {
    project: Project,
}

impl ProjectBuilder {
    /// Create a builder with fixture defaults
    pub fn new() -> Self {
        Self {
            project: crate::fixtures::create_test_project(),
        }
    }

    /// Set the project ID
    pub fn with_id(mut self, id: ProjectId) -> Self {
        self.project.id = id;
        self
    }

    /// Set the project name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.project.name = name.into();
        self
    }

    /// Set the owning team
    pub fn with_team(mut self, team: impl Into<String>) -> Self {
        self.project.team = Some(team.into());
        self
    }

    /// Add a label
    pub fn with_label(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.project
            .labels
            .get_or_insert_with(Vec::new)
            .push(Label { key: key.into(), value: value.into() });
        self
    }

    /// Build the project
    pub fn build(self) -> Project {
        self.project
    }
}

impl Default for ProjectBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for [`VersionEndpoint`] deployment requests
pub struct VersionEndpointBuilder {
    endpoint: VersionEndpoint,
}

impl VersionEndpointBuilder {
    /// Create a builder for a bare deployment request
    pub fn new() -> Self {
        Self {
            endpoint: VersionEndpoint::new(),
        }
    }

    /// Set the target environment
    pub fn with_environment(mut self, name: impl Into<String>) -> Self {
        self.endpoint.environment_name = Some(name.into());
        self
    }

    /// Set the deployment mode
    pub fn with_deployment_mode(mut self, mode: DeploymentMode) -> Self {
        self.endpoint.deployment_mode = Some(mode);
        self
    }

    /// Set the serving protocol
    pub fn with_protocol(mut self, protocol: Protocol) -> Self {
        self.endpoint.protocol = Some(protocol);
        self
    }

    /// Set the resource request
    pub fn with_resource_request(mut self, request: ResourceRequest) -> Self {
        self.endpoint.resource_request = Some(request);
        self
    }

    /// Add an environment variable
    pub fn with_env_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.endpoint
            .env_vars
            .get_or_insert_with(Vec::new)
            .push(EnvVar::new(name, value));
        self
    }

    /// Attach a transformer
    pub fn with_transformer(mut self, transformer: Transformer) -> Self {
        self.endpoint.transformer = Some(transformer);
        self
    }

    /// Build the deployment request
    pub fn build(self) -> VersionEndpoint {
        self.endpoint
    }
}

impl Default for VersionEndpointBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for [`ResourceRequest`]
pub struct ResourceRequestBuilder {
    request: ResourceRequest,
}

impl ResourceRequestBuilder {
    /// Create a builder with fixture defaults
    pub fn new() -> Self {
        Self {
            request: crate::fixtures::create_test_resource_request(),
        }
    }

    /// Set the replica range
    pub fn with_replicas(mut self, min: i32, max: i32) -> Self {
        self.request.min_replica = Some(min);
        self.request.max_replica = Some(max);
        self
    }

    /// Set the CPU request
    pub fn with_cpu(mut self, cpu: impl Into<String>) -> Self {
        self.request.cpu_request = Some(cpu.into());
        self
    }

    /// Set the memory request
    pub fn with_memory(mut self, memory: impl Into<String>) -> Self {
        self.request.memory_request = Some(memory.into());
        self
    }

    /// Request GPUs of the given class
    pub fn with_gpu(mut self, name: impl Into<String>, count: i32) -> Self {
        self.request.gpu_name = Some(name.into());
        self.request.gpu_request = Some(count.to_string());
        self
    }

    /// Build the resource request
    pub fn build(self) -> ResourceRequest {
        self.request
    }
}

impl Default for ResourceRequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for [`PredictionJobConfig`]
pub struct PredictionJobConfigBuilder {
    config: PredictionJobConfig,
}

impl PredictionJobConfigBuilder {
    /// Create a builder for an empty job configuration
    pub fn new() -> Self {
        Self {
            config: PredictionJobConfig::default(),
        }
    }

    /// Read input rows from a BigQuery table
    pub fn with_bigquery_source(mut self, table: impl Into<String>) -> Self {
        self.spec().bigquery_source = Some(PredictionJobConfigBigquerySource {
            table: table.into(),
            features: None,
            options: None,
        });
        self
    }

    /// Write results to a BigQuery table
    pub fn with_bigquery_sink(
        mut self,
        table: impl Into<String>,
        staging_bucket: impl Into<String>,
        result_column: impl Into<String>,
    ) -> Self {
        self.spec().bigquery_sink = Some(PredictionJobConfigBigquerySink {
            table: table.into(),
            staging_bucket: staging_bucket.into(),
            result_column: result_column.into(),
            save_mode: Some(SaveMode::Overwrite),
            options: None,
        });
        self
    }

    /// Set the model artifact settings
    pub fn with_model(mut self, model_type: ModelType, uri: impl Into<String>) -> Self {
        self.spec().model = Some(PredictionJobConfigModel {
            model_type: Some(model_type),
            uri: Some(uri.into()),
            result: Some(PredictionJobConfigModelResult {
                result_type: ResultType::Double,
                item_type: None,
            }),
            options: None,
        });
        self
    }

    /// Set the job resources
    pub fn with_resource_request(mut self, request: PredictionJobResourceRequest) -> Self {
        self.config.resource_request = Some(request);
        self
    }

    /// Set the service account the job runs as
    pub fn with_service_account(mut self, name: impl Into<String>) -> Self {
        self.config.service_account_name = Some(name.into());
        self
    }

    /// Add an environment variable
    pub fn with_env_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.config
            .env_vars
            .get_or_insert_with(Vec::new)
            .push(EnvVar::new(name, value));
        self
    }

    /// Build the job configuration
    pub fn build(self) -> PredictionJobConfig {
        self.config
    }

    fn spec(&mut self) -> &mut PredictionJobConfigSpec {
        self.config
            .job_config
            .get_or_insert_with(|| PredictionJobConfigSpec {
                version: Some("v1".to_string()),
                kind: Some("PredictionJob".to_string()),
                ..Default::default()
            })
    }
}

impl Default for PredictionJobConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for [`SchemaSpec`]
pub struct SchemaSpecBuilder {
    spec: SchemaSpec,
}

impl SchemaSpecBuilder {
    /// Create a builder with fixture defaults (binary classification)
    pub fn new() -> Self {
        Self {
            spec: crate::fixtures::create_test_schema_spec(),
        }
    }

    /// Add a feature column
    pub fn with_feature(mut self, name: impl Into<String>, value_type: ValueType) -> Self {
        self.spec.feature_types.insert(name.into(), value_type);
        self
    }

    /// Set the prediction output shape
    pub fn with_output(mut self, output: ModelPredictionOutput) -> Self {
        self.spec.model_prediction_output = output;
        self
    }

    /// Build the schema spec
    pub fn build(self) -> SchemaSpec {
        self.spec
    }
}

impl Default for SchemaSpecBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_builder_overrides() {
        let project = ProjectBuilder::new()
            .with_id(ProjectId::new(42))
            .with_name("fraud-detection")
            .with_label("env", "staging")
            .build();

        assert_eq!(project.id, ProjectId::new(42));
        assert_eq!(project.name, "fraud-detection");
        assert_eq!(project.labels.unwrap()[0].key, "env");
    }

    #[test]
    fn test_version_endpoint_builder() {
        let endpoint = VersionEndpointBuilder::new()
            .with_environment("production")
            .with_deployment_mode(DeploymentMode::RawDeployment)
            .with_resource_request(
                ResourceRequestBuilder::new().with_replicas(2, 4).with_cpu("1").build(),
            )
            .with_env_var("WORKERS", "4")
            .build();

        assert_eq!(endpoint.environment_name.as_deref(), Some("production"));
        assert_eq!(endpoint.deployment_mode, Some(DeploymentMode::RawDeployment));
        let resources = endpoint.resource_request.unwrap();
        assert_eq!(resources.min_replica, Some(2));
        assert!(resources.validate().valid);
    }

    #[test]
    fn test_gpu_request_passes_validation() {
        let request = ResourceRequestBuilder::new().with_gpu("nvidia-tesla-t4", 1).build();
        assert!(request.validate().valid);
        assert_eq!(request.gpu_request.as_deref(), Some("1"));
    }

    #[test]
    fn test_job_config_builder_populates_spec() {
        let config = PredictionJobConfigBuilder::new()
            .with_bigquery_source("proj.dataset.features")
            .with_model(ModelType::PyfuncV2, "gs://models/4/12")
            .with_bigquery_sink("proj.dataset.scores", "staging-bucket", "score")
            .with_service_account("batch-runner")
            .build();

        let spec = config.job_config.unwrap();
        assert_eq!(spec.kind.as_deref(), Some("PredictionJob"));
        assert_eq!(spec.bigquery_source.unwrap().table, "proj.dataset.features");
        assert_eq!(spec.bigquery_sink.unwrap().save_mode, Some(SaveMode::Overwrite));
        assert_eq!(config.service_account_name.as_deref(), Some("batch-runner"));
    }

    #[test]
    fn test_schema_spec_builder() {
        let spec = SchemaSpecBuilder::new()
            .with_feature("tenure_days", ValueType::Int64)
            .with_output(ModelPredictionOutput::RegressionOutput(RegressionOutput {
                prediction_score_column: "score".to_string(),
                actual_score_column: None,
            }))
            .build();

        assert_eq!(spec.feature_types["tenure_days"], ValueType::Int64);
        assert!(matches!(
            spec.model_prediction_output,
            ModelPredictionOutput::RegressionOutput(_)
        ));
    }
}
