//! Transformer service
//!
//! Service for dry-running standard transformer configurations before they
//! are attached to an endpoint.

use crate::client::Client;
use crate::error::SdkResult;
use crate::models::{StandardTransformerSimulationRequest, StandardTransformerSimulationResponse};

/// Service for transformer operations
#[derive(Clone)]
pub struct TransformerService {
    client: Client,
}

impl TransformerService {
    /// Create a new transformer service
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Simulate a standard transformer configuration
    ///
    /// Runs the configuration against the given payload without deploying
    /// anything; the response carries the transformed output and a
    /// per-operation trace.
    pub async fn simulate(
        &self,
        request: &StandardTransformerSimulationRequest,
    ) -> SdkResult<StandardTransformerSimulationResponse> {
        self.client.post("/standard_transformer/simulate", request).await
    }
}
