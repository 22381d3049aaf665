//! Project service
//!
//! Service for managing projects.

use crate::client::Client;
use crate::error::SdkResult;
use crate::models::{CreateProjectRequest, Project, ProjectId};

/// Service for project operations
#[derive(Clone)]
pub struct ProjectService {
    client: Client,
}

impl ProjectService {
    /// Create a new project service
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// List projects, optionally filtered by name
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use modelserve_sdk::Client;
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = Client::builder().bearer_token("token").build()?;
    ///
    /// // List all projects readable by the caller
    /// let projects = client.projects().list(None).await?;
    ///
    /// // Filter by name
    /// let projects = client.projects().list(Some("fraud-detection")).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn list(&self, name: Option<&str>) -> SdkResult<Vec<Project>> {
        match name {
            Some(name) => self.client.get_with_query("/projects", &[("name", name)]).await,
            None => self.client.get("/projects").await,
        }
    }

    /// Create a new project
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use modelserve_sdk::{Client, CreateProjectRequest};
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = Client::builder().bearer_token("token").build()?;
    ///
    /// let request = CreateProjectRequest::new("fraud-detection").with_team("risk");
    /// let project = client.projects().create(&request).await?;
    /// println!("Created project {}", project.id);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create(&self, request: &CreateProjectRequest) -> SdkResult<Project> {
        self.client.post("/projects", request).await
    }

    /// Get a project by ID
    pub async fn get(&self, project_id: ProjectId) -> SdkResult<Project> {
        self.client.get(&format!("/projects/{}", project_id)).await
    }

    /// Update a project
    ///
    /// Requires administrative access to the project.
    pub async fn update(&self, project_id: ProjectId, project: &Project) -> SdkResult<Project> {
        self.client
            .put(&format!("/projects/{}", project_id), project)
            .await
    }
}
