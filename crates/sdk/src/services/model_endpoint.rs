//! Model endpoint service
//!
//! Service for managing the stable endpoints that route live traffic to
//! version endpoints.

use crate::client::Client;
use crate::error::SdkResult;
use crate::models::{ModelEndpoint, ModelEndpointId, ModelId, ProjectId};

/// Service for model endpoint operations
#[derive(Clone)]
pub struct ModelEndpointService {
    client: Client,
}

impl ModelEndpointService {
    /// Create a new model endpoint service
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// List model endpoints across a project
    pub async fn list_in_project(&self, project_id: ProjectId) -> SdkResult<Vec<ModelEndpoint>> {
        self.client
            .get(&format!("/projects/{}/model_endpoints", project_id))
            .await
    }

    /// List endpoints of a model
    pub async fn list(&self, model_id: ModelId) -> SdkResult<Vec<ModelEndpoint>> {
        self.client.get(&format!("/models/{}/endpoints", model_id)).await
    }

    /// Start serving a model through a new endpoint
    ///
    /// The routing rule decides how traffic is split across the model's
    /// version endpoints.
    pub async fn create(
        &self,
        model_id: ModelId,
        endpoint: &ModelEndpoint,
    ) -> SdkResult<ModelEndpoint> {
        self.client
            .post(&format!("/models/{}/endpoints", model_id), endpoint)
            .await
    }

    /// Get an endpoint by ID
    pub async fn get(
        &self,
        model_id: ModelId,
        endpoint_id: ModelEndpointId,
    ) -> SdkResult<ModelEndpoint> {
        self.client
            .get(&format!("/models/{}/endpoints/{}", model_id, endpoint_id))
            .await
    }

    /// Update an endpoint's routing rule
    pub async fn update(
        &self,
        model_id: ModelId,
        endpoint_id: ModelEndpointId,
        endpoint: &ModelEndpoint,
    ) -> SdkResult<ModelEndpoint> {
        self.client
            .put(&format!("/models/{}/endpoints/{}", model_id, endpoint_id), endpoint)
            .await
    }

    /// Stop serving through an endpoint
    pub async fn stop(&self, model_id: ModelId, endpoint_id: ModelEndpointId) -> SdkResult<()> {
        self.client
            .delete(&format!("/models/{}/endpoints/{}", model_id, endpoint_id))
            .await
    }
}
