//! # ModelServe SDK
//!
//! Official Rust SDK for the ModelServe model management and serving API.
//!
//! This SDK provides a type-safe, ergonomic interface for managing the full
//! lifecycle of machine learning models on a ModelServe installation:
//!
//! - **Projects**: organize models, secrets, and access control
//! - **Models & versions**: register models and track their versions
//! - **Deployments**: deploy versions as HTTP/gRPC endpoints and route
//!   traffic through model endpoints
//! - **Batch prediction**: run and monitor batch prediction jobs
//! - **Operations**: environments, secrets, alerts, logs, and transformer
//!   simulation
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use modelserve_sdk::{Client, ClientConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Create a client
//!     let client = Client::builder()
//!         .base_url("https://modelserve.example.com/v1")
//!         .bearer_token("your-token")
//!         .build()?;
//!
//!     // List projects
//!     let projects = client.projects().list(None).await?;
//!     for project in projects {
//!         println!("{}: {}", project.id, project.name);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Configuration
//!
//! The SDK can be configured through environment variables:
//!
//! - `MODELSERVE_API_URL`: API endpoint URL (including the `/v1` prefix)
//! - `MODELSERVE_TOKEN`: bearer token for authentication
//! - `MODELSERVE_API_KEY`: API key for authentication
//!
//! Or programmatically:
//!
//! ```rust,no_run
//! use modelserve_sdk::Client;
//!
//! let client = Client::builder()
//!     .base_url("https://modelserve.example.com/v1")
//!     .bearer_token("your-token")
//!     .timeout(std::time::Duration::from_secs(30))
//!     .retry_count(3)
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Error Handling
//!
//! All operations return `Result<T, SdkError>`. Remote failures carry the
//! exact HTTP status code, reason, headers, and body; response decoding
//! failures identify the offending field:
//!
//! ```rust,no_run
//! use modelserve_sdk::{Client, SdkError};
//! use modelserve_domain::ProjectId;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! # let client = Client::builder().bearer_token("token").build()?;
//! match client.projects().get(ProjectId::new(1)).await {
//!     Ok(project) => println!("Found: {}", project.name),
//!     Err(SdkError::Api { status_code: 404, .. }) => println!("Project not found"),
//!     Err(SdkError::Api { status_code: 401, .. }) => println!("Invalid token"),
//!     Err(e) => println!("Other error: {}", e),
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod services;

// Re-exports
pub use client::{Client, ClientBuilder};
pub use config::ClientConfig;
pub use error::{SdkError, SdkResult};
pub use models::*;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::client::{Client, ClientBuilder};
    pub use crate::config::ClientConfig;
    pub use crate::error::{SdkError, SdkResult};
    pub use crate::models::*;
    pub use crate::services::*;
}

/// SDK version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default API URL
pub const DEFAULT_API_URL: &str = "http://localhost:8080/v1";
