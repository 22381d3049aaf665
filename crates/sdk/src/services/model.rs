//! Model service
//!
//! Service for registering models and managing their prediction schemas.

use crate::client::Client;
use crate::error::SdkResult;
use crate::models::{CreateModelRequest, Model, ModelId, ModelSchema, ProjectId};

/// Service for model operations
#[derive(Clone)]
pub struct ModelService {
    client: Client,
}

impl ModelService {
    /// Create a new model service
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// List models in a project, optionally filtered by name
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use modelserve_sdk::Client;
    /// use modelserve_domain::ProjectId;
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = Client::builder().bearer_token("token").build()?;
    ///
    /// let models = client.models().list(ProjectId::new(1), None).await?;
    /// for model in models {
    ///     println!("{}: {}", model.name, model.model_type.display_name());
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn list(&self, project_id: ProjectId, name: Option<&str>) -> SdkResult<Vec<Model>> {
        let path = format!("/projects/{}/models", project_id);
        match name {
            Some(name) => self.client.get_with_query(&path, &[("name", name)]).await,
            None => self.client.get(&path).await,
        }
    }

    /// Register a new model
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use modelserve_sdk::{Client, CreateModelRequest};
    /// use modelserve_domain::{ModelType, ProjectId};
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = Client::builder().bearer_token("token").build()?;
    ///
    /// let request = CreateModelRequest::new("churn-predictor", ModelType::Xgboost);
    /// let model = client.models().create(ProjectId::new(1), &request).await?;
    /// println!("Registered model {}", model.id);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create(
        &self,
        project_id: ProjectId,
        request: &CreateModelRequest,
    ) -> SdkResult<Model> {
        self.client
            .post(&format!("/projects/{}/models", project_id), request)
            .await
    }

    /// Get a model by ID
    pub async fn get(&self, project_id: ProjectId, model_id: ModelId) -> SdkResult<Model> {
        self.client
            .get(&format!("/projects/{}/models/{}", project_id, model_id))
            .await
    }

    /// Delete a model
    ///
    /// Fails while the model still has active endpoints or jobs.
    pub async fn delete(&self, project_id: ProjectId, model_id: ModelId) -> SdkResult<()> {
        self.client
            .delete(&format!("/projects/{}/models/{}", project_id, model_id))
            .await
    }

    /// List prediction schemas of a model
    pub async fn list_schemas(&self, model_id: ModelId) -> SdkResult<Vec<ModelSchema>> {
        self.client.get(&format!("/models/{}/schemas", model_id)).await
    }

    /// Get a prediction schema by ID
    pub async fn get_schema(&self, model_id: ModelId, schema_id: i32) -> SdkResult<ModelSchema> {
        self.client
            .get(&format!("/models/{}/schemas/{}", model_id, schema_id))
            .await
    }

    /// Create or update a prediction schema
    pub async fn upsert_schema(
        &self,
        model_id: ModelId,
        schema: &ModelSchema,
    ) -> SdkResult<ModelSchema> {
        self.client
            .put(&format!("/models/{}/schemas", model_id), schema)
            .await
    }

    /// Delete a prediction schema
    pub async fn delete_schema(&self, model_id: ModelId, schema_id: i32) -> SdkResult<()> {
        self.client
            .delete(&format!("/models/{}/schemas/{}", model_id, schema_id))
            .await
    }
}
