//! Environment service
//!
//! Service for listing deployment environments.

use crate::client::Client;
use crate::error::SdkResult;
use crate::models::Environment;

/// Service for environment operations
#[derive(Clone)]
pub struct EnvironmentService {
    client: Client,
}

impl EnvironmentService {
    /// Create a new environment service
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// List deployment environments
    ///
    /// With `show_all` set, environments closed to new deployments are
    /// included as well.
    pub async fn list(&self, show_all: bool) -> SdkResult<Vec<Environment>> {
        if show_all {
            self.client
                .get_with_query("/environments", &[("show_all", "true")])
                .await
        } else {
            self.client.get("/environments").await
        }
    }
}
