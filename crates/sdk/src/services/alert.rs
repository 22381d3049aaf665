//! Alert service
//!
//! Service for managing alerting rules on model endpoints.

use crate::client::Client;
use crate::error::SdkResult;
use crate::models::{ModelEndpointAlert, ModelEndpointId, ModelId, ProjectId};

/// Service for alert operations
#[derive(Clone)]
pub struct AlertService {
    client: Client,
}

impl AlertService {
    /// Create a new alert service
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// List teams that can receive alerts
    pub async fn list_teams(&self) -> SdkResult<Vec<String>> {
        self.client.get("/alerts/teams").await
    }

    /// List alerts across a project
    pub async fn list(&self, project_id: ProjectId) -> SdkResult<Vec<ModelEndpointAlert>> {
        self.client.get(&format!("/projects/{}/alerts", project_id)).await
    }

    /// Get the alert attached to a model endpoint
    pub async fn get(
        &self,
        model_id: ModelId,
        model_endpoint_id: ModelEndpointId,
    ) -> SdkResult<ModelEndpointAlert> {
        self.client
            .get(&format!("/models/{}/alerts/{}", model_id, model_endpoint_id))
            .await
    }

    /// Attach an alert to a model endpoint
    pub async fn create(
        &self,
        model_id: ModelId,
        alert: &ModelEndpointAlert,
    ) -> SdkResult<ModelEndpointAlert> {
        self.client.post(&format!("/models/{}/alerts", model_id), alert).await
    }

    /// Update the alert attached to a model endpoint
    pub async fn update(
        &self,
        model_id: ModelId,
        model_endpoint_id: ModelEndpointId,
        alert: &ModelEndpointAlert,
    ) -> SdkResult<ModelEndpointAlert> {
        self.client
            .put(&format!("/models/{}/alerts/{}", model_id, model_endpoint_id), alert)
            .await
    }
}
