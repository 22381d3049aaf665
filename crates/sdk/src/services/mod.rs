//! SDK service implementations
//!
//! This module provides one service per API resource group. Services are
//! typed facades over the HTTP client: each method substitutes its path
//! parameters, delegates to the client, and returns the decoded model object.

mod alert;
mod environment;
mod job;
mod log;
mod model;
mod model_endpoint;
mod project;
mod secret;
mod transformer;
mod version;
mod version_endpoint;

pub use alert::AlertService;
pub use environment::EnvironmentService;
pub use job::{PageParams, PredictionJobService};
pub use log::{LogParams, LogService};
pub use model::ModelService;
pub use model_endpoint::ModelEndpointService;
pub use project::ProjectService;
pub use secret::SecretService;
pub use transformer::TransformerService;
pub use version::{VersionListParams, VersionService};
pub use version_endpoint::VersionEndpointService;
