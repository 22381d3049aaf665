//! Testing utilities for the ModelServe SDK
//!
//! This crate provides:
//! - Test fixtures for the SDK's model objects
//! - Builder patterns for complex test data construction
//! - A wiremock-backed mock platform for HTTP-level tests
//!
//! # Examples
//!
//! ```
//! use modelserve_testing::{fixtures::*, builders::*};
//! use modelserve_domain::DeploymentMode;
//!
//! // Create a test project
//! let project = create_test_project();
//!
//! // Build a custom deployment request
//! let endpoint = VersionEndpointBuilder::new()
//!     .with_environment("staging")
//!     .with_deployment_mode(DeploymentMode::Serverless)
//!     .build();
//! ```

pub mod builders;
pub mod fixtures;
pub mod mocks;

// Re-export commonly used types
pub use builders::*;
pub use fixtures::*;
pub use mocks::*;

// Re-export testing dependencies for convenience
pub use fake;
pub use wiremock;
