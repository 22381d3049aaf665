//! Log service
//!
//! Service for reading container logs of deployments and jobs. The endpoint
//! answers with plain text, one log line per row.

use crate::client::Client;
use crate::error::SdkResult;
use crate::models::{JobId, ModelId, VersionId};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Service for log retrieval
#[derive(Clone)]
pub struct LogService {
    client: Client,
}

impl LogService {
    /// Create a new log service
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Read container logs
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use modelserve_sdk::services::LogParams;
    /// use modelserve_sdk::Client;
    /// use modelserve_domain::{ModelId, VersionId};
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = Client::builder().bearer_token("token").build()?;
    ///
    /// let params = LogParams::new()
    ///     .model_id(ModelId::new(1))
    ///     .version_id(VersionId::new(3))
    ///     .tail_lines(100);
    /// let logs = client.logs().read(&params).await?;
    /// print!("{logs}");
    /// # Ok(())
    /// # }
    /// ```
    pub async fn read(&self, params: &LogParams) -> SdkResult<String> {
        self.client.get_text("/logs", params).await
    }
}

/// Query parameters for log retrieval
#[derive(Debug, Clone, Default, Serialize)]
pub struct LogParams {
    /// Filter by project name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,
    /// Filter by model
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_id: Option<ModelId>,
    /// Filter by model name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_name: Option<String>,
    /// Filter by version
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_id: Option<VersionId>,
    /// Filter by batch prediction job
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prediction_job_id: Option<JobId>,
    /// Cluster to read from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster: Option<String>,
    /// Namespace to read from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    /// Pod to read from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pod_name: Option<String>,
    /// Container to read from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_name: Option<String>,
    /// Prefix each line with the container name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<bool>,
    /// Number of trailing lines to return
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tail_lines: Option<i32>,
    /// Only return lines after this instant
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since_time: Option<DateTime<Utc>>,
    /// Keep the connection open and stream new lines
    #[serde(skip_serializing_if = "Option::is_none")]
    pub follow: Option<bool>,
}

impl LogParams {
    /// Create empty parameters
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by model
    pub fn model_id(mut self, model_id: ModelId) -> Self {
        self.model_id = Some(model_id);
        self
    }

    /// Filter by version
    pub fn version_id(mut self, version_id: VersionId) -> Self {
        self.version_id = Some(version_id);
        self
    }

    /// Filter by batch prediction job
    pub fn prediction_job_id(mut self, job_id: JobId) -> Self {
        self.prediction_job_id = Some(job_id);
        self
    }

    /// Filter by container name
    pub fn container_name(mut self, name: impl Into<String>) -> Self {
        self.container_name = Some(name.into());
        self
    }

    /// Limit output to the trailing `lines` lines
    pub fn tail_lines(mut self, lines: i32) -> Self {
        self.tail_lines = Some(lines);
        self
    }

    /// Only return lines after `since`
    pub fn since_time(mut self, since: DateTime<Utc>) -> Self {
        self.since_time = Some(since);
        self
    }
}
