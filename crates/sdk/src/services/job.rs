//! Batch prediction job service
//!
//! Service for submitting and monitoring batch prediction jobs.

use crate::client::Client;
use crate::error::SdkResult;
use crate::models::{
    Container, CreatePredictionJobRequest, JobId, ListJobsPaginatedResponse, ModelId,
    PredictionJob, ProjectId, VersionId,
};
use serde::Serialize;

/// Service for batch prediction job operations
#[derive(Clone)]
pub struct PredictionJobService {
    client: Client,
}

impl PredictionJobService {
    /// Create a new prediction job service
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// List jobs of a version
    pub async fn list(
        &self,
        model_id: ModelId,
        version_id: VersionId,
    ) -> SdkResult<Vec<PredictionJob>> {
        self.client
            .get(&format!("/models/{}/versions/{}/jobs", model_id, version_id))
            .await
    }

    /// List jobs across a project, one page at a time
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use modelserve_sdk::services::PageParams;
    /// use modelserve_sdk::Client;
    /// use modelserve_domain::ProjectId;
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = Client::builder().bearer_token("token").build()?;
    ///
    /// let page = client
    ///     .prediction_jobs()
    ///     .list_in_project(ProjectId::new(1), PageParams::new().page(2).page_size(20))
    ///     .await?;
    /// println!("page {} of {}", page.paging.page, page.paging.pages);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn list_in_project(
        &self,
        project_id: ProjectId,
        params: PageParams,
    ) -> SdkResult<ListJobsPaginatedResponse> {
        self.client
            .get_with_query(&format!("/projects/{}/jobs-by-page", project_id), &params)
            .await
    }

    /// Submit a new batch prediction job
    pub async fn create(
        &self,
        model_id: ModelId,
        version_id: VersionId,
        request: &CreatePredictionJobRequest,
    ) -> SdkResult<PredictionJob> {
        self.client
            .post(
                &format!("/models/{}/versions/{}/jobs", model_id, version_id),
                request,
            )
            .await
    }

    /// Get a job by ID
    pub async fn get(
        &self,
        model_id: ModelId,
        version_id: VersionId,
        job_id: JobId,
    ) -> SdkResult<PredictionJob> {
        self.client
            .get(&format!(
                "/models/{}/versions/{}/jobs/{}",
                model_id, version_id, job_id
            ))
            .await
    }

    /// Stop a running job
    pub async fn stop(
        &self,
        model_id: ModelId,
        version_id: VersionId,
        job_id: JobId,
    ) -> SdkResult<()> {
        self.client
            .put_empty(&format!(
                "/models/{}/versions/{}/jobs/{}/stop",
                model_id, version_id, job_id
            ))
            .await
    }

    /// List containers backing a job
    pub async fn containers(
        &self,
        model_id: ModelId,
        version_id: VersionId,
        job_id: JobId,
    ) -> SdkResult<Vec<Container>> {
        self.client
            .get(&format!(
                "/models/{}/versions/{}/jobs/{}/containers",
                model_id, version_id, job_id
            ))
            .await
    }
}

/// Pagination parameters for paged job listings
#[derive(Debug, Clone, Default, Serialize)]
pub struct PageParams {
    /// Page number (1-indexed)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i32>,
    /// Number of items per page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<i32>,
    /// Free-text search filter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl PageParams {
    /// Create empty parameters
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page number
    pub fn page(mut self, page: i32) -> Self {
        self.page = Some(page);
        self
    }

    /// Set the page size
    pub fn page_size(mut self, size: i32) -> Self {
        self.page_size = Some(size);
        self
    }

    /// Set the search filter
    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }
}
