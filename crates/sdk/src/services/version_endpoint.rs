//! Version endpoint service
//!
//! Service for deploying model versions and managing their endpoints.

use crate::client::Client;
use crate::error::SdkResult;
use crate::models::{Container, EndpointId, ModelId, VersionEndpoint, VersionId};

/// Service for version endpoint operations
#[derive(Clone)]
pub struct VersionEndpointService {
    client: Client,
}

impl VersionEndpointService {
    /// Create a new version endpoint service
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// List endpoints deployed from a version
    pub async fn list(
        &self,
        model_id: ModelId,
        version_id: VersionId,
    ) -> SdkResult<Vec<VersionEndpoint>> {
        self.client
            .get(&format!("/models/{}/versions/{}/endpoint", model_id, version_id))
            .await
    }

    /// Deploy a version as a new endpoint
    ///
    /// The endpoint starts out `pending`; poll [`get`](Self::get) until it
    /// reaches `running` or `failed`.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use modelserve_sdk::{Client, ResourceRequest, VersionEndpoint};
    /// use modelserve_domain::{DeploymentMode, ModelId, VersionId};
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = Client::builder().bearer_token("token").build()?;
    ///
    /// let endpoint = VersionEndpoint {
    ///     environment_name: Some("staging".to_string()),
    ///     deployment_mode: Some(DeploymentMode::Serverless),
    ///     resource_request: Some(ResourceRequest {
    ///         min_replica: Some(0),
    ///         max_replica: Some(2),
    ///         cpu_request: Some("500m".to_string()),
    ///         memory_request: Some("512Mi".to_string()),
    ///         ..Default::default()
    ///     }),
    ///     ..Default::default()
    /// };
    ///
    /// let deployed = client
    ///     .version_endpoints()
    ///     .deploy(ModelId::new(1), VersionId::new(3), &endpoint)
    ///     .await?;
    /// println!("Deployment {} is {:?}", deployed.id.unwrap(), deployed.status);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn deploy(
        &self,
        model_id: ModelId,
        version_id: VersionId,
        endpoint: &VersionEndpoint,
    ) -> SdkResult<VersionEndpoint> {
        self.client
            .post(
                &format!("/models/{}/versions/{}/endpoint", model_id, version_id),
                endpoint,
            )
            .await
    }

    /// Get an endpoint by ID
    pub async fn get(
        &self,
        model_id: ModelId,
        version_id: VersionId,
        endpoint_id: EndpointId,
    ) -> SdkResult<VersionEndpoint> {
        self.client
            .get(&format!(
                "/models/{}/versions/{}/endpoint/{}",
                model_id, version_id, endpoint_id
            ))
            .await
    }

    /// Update a deployed endpoint
    ///
    /// Redeploys the endpoint with the given settings.
    pub async fn update(
        &self,
        model_id: ModelId,
        version_id: VersionId,
        endpoint_id: EndpointId,
        endpoint: &VersionEndpoint,
    ) -> SdkResult<VersionEndpoint> {
        self.client
            .put(
                &format!(
                    "/models/{}/versions/{}/endpoint/{}",
                    model_id, version_id, endpoint_id
                ),
                endpoint,
            )
            .await
    }

    /// Undeploy an endpoint
    pub async fn undeploy(
        &self,
        model_id: ModelId,
        version_id: VersionId,
        endpoint_id: EndpointId,
    ) -> SdkResult<()> {
        self.client
            .delete(&format!(
                "/models/{}/versions/{}/endpoint/{}",
                model_id, version_id, endpoint_id
            ))
            .await
    }

    /// List containers backing an endpoint
    pub async fn containers(
        &self,
        model_id: ModelId,
        version_id: VersionId,
        endpoint_id: EndpointId,
    ) -> SdkResult<Vec<Container>> {
        self.client
            .get(&format!(
                "/models/{}/versions/{}/endpoint/{}/containers",
                model_id, version_id, endpoint_id
            ))
            .await
    }
}
