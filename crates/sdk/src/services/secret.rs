//! Secret service
//!
//! Service for managing project-scoped secrets. Secret values are write-only
//! from the platform's point of view; list responses carry names only.

use crate::client::Client;
use crate::error::SdkResult;
use crate::models::{ProjectId, Secret, SecretId};

/// Service for secret operations
#[derive(Clone)]
pub struct SecretService {
    client: Client,
}

impl SecretService {
    /// Create a new secret service
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// List secrets in a project
    pub async fn list(&self, project_id: ProjectId) -> SdkResult<Vec<Secret>> {
        self.client.get(&format!("/projects/{}/secrets", project_id)).await
    }

    /// Create a secret
    pub async fn create(&self, project_id: ProjectId, secret: &Secret) -> SdkResult<Secret> {
        self.client
            .post(&format!("/projects/{}/secrets", project_id), secret)
            .await
    }

    /// Update a secret
    pub async fn update(
        &self,
        project_id: ProjectId,
        secret_id: SecretId,
        secret: &Secret,
    ) -> SdkResult<Secret> {
        self.client
            .patch(&format!("/projects/{}/secrets/{}", project_id, secret_id), secret)
            .await
    }

    /// Delete a secret
    pub async fn delete(&self, project_id: ProjectId, secret_id: SecretId) -> SdkResult<()> {
        self.client
            .delete(&format!("/projects/{}/secrets/{}", project_id, secret_id))
            .await
    }
}
