//! Version service
//!
//! Service for managing model versions and their serving images.

use crate::client::Client;
use crate::error::SdkResult;
use crate::models::{
    BuildImageOptions, CreateVersionRequest, ModelId, Version, VersionId, VersionImage,
    VersionPatch,
};
use serde::Serialize;

/// Service for version operations
#[derive(Clone)]
pub struct VersionService {
    client: Client,
}

impl VersionService {
    /// Create a new version service
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// List versions of a model
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use modelserve_sdk::services::VersionListParams;
    /// use modelserve_sdk::Client;
    /// use modelserve_domain::ModelId;
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = Client::builder().bearer_token("token").build()?;
    ///
    /// let params = VersionListParams::new().limit(10).search("environment:staging");
    /// let versions = client.versions().list(ModelId::new(1), params).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn list(
        &self,
        model_id: ModelId,
        params: VersionListParams,
    ) -> SdkResult<Vec<Version>> {
        self.client
            .get_with_query(&format!("/models/{}/versions", model_id), &params)
            .await
    }

    /// Create a new version
    pub async fn create(
        &self,
        model_id: ModelId,
        request: &CreateVersionRequest,
    ) -> SdkResult<Version> {
        self.client
            .post(&format!("/models/{}/versions", model_id), request)
            .await
    }

    /// Get a version by ID
    pub async fn get(&self, model_id: ModelId, version_id: VersionId) -> SdkResult<Version> {
        self.client
            .get(&format!("/models/{}/versions/{}", model_id, version_id))
            .await
    }

    /// Partially update a version
    pub async fn patch(
        &self,
        model_id: ModelId,
        version_id: VersionId,
        patch: &VersionPatch,
    ) -> SdkResult<Version> {
        self.client
            .patch(&format!("/models/{}/versions/{}", model_id, version_id), patch)
            .await
    }

    /// Delete a version
    ///
    /// Fails while the version still has active endpoints or jobs.
    pub async fn delete(&self, model_id: ModelId, version_id: VersionId) -> SdkResult<()> {
        self.client
            .delete(&format!("/models/{}/versions/{}", model_id, version_id))
            .await
    }

    /// Get the serving image of a version
    pub async fn get_image(
        &self,
        model_id: ModelId,
        version_id: VersionId,
    ) -> SdkResult<VersionImage> {
        self.client
            .get(&format!("/models/{}/versions/{}/image", model_id, version_id))
            .await
    }

    /// Trigger a serving image build for a version
    pub async fn build_image(
        &self,
        model_id: ModelId,
        version_id: VersionId,
        options: &BuildImageOptions,
    ) -> SdkResult<VersionImage> {
        self.client
            .put(
                &format!("/models/{}/versions/{}/image", model_id, version_id),
                options,
            )
            .await
    }
}

/// Query parameters for listing versions
#[derive(Debug, Clone, Default, Serialize)]
pub struct VersionListParams {
    /// Page size
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,
    /// Opaque cursor returned by the previous page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
    /// Free-text search filter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl VersionListParams {
    /// Create empty parameters
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page size
    pub fn limit(mut self, limit: i32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Set the page cursor
    pub fn cursor(mut self, cursor: impl Into<String>) -> Self {
        self.cursor = Some(cursor.into());
        self
    }

    /// Set the search filter
    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_list_params_skip_unset() {
        let params = VersionListParams::new().limit(10);
        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(json["limit"], 10);
        assert!(json.get("cursor").is_none());
        assert!(json.get("search").is_none());
    }
}
