//! Error types for domain-level validation.

use crate::status::{EndpointStatus, JobStatus};

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Errors produced by domain validation rules
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// A resource name violates the platform's naming rules
    #[error("Invalid name '{name}': {reason}")]
    InvalidName {
        /// The rejected name
        name: String,
        /// Why it was rejected
        reason: String,
    },

    /// A resource quantity string does not parse
    #[error("Invalid quantity '{value}': {reason}")]
    InvalidQuantity {
        /// The rejected quantity string
        value: String,
        /// Why it was rejected
        reason: String,
    },

    /// A replica range is inconsistent
    #[error("Invalid replica range: min {min}, max {max}")]
    InvalidReplicaRange {
        /// Minimum replica count
        min: i32,
        /// Maximum replica count
        max: i32,
    },

    /// An endpoint status transition is not allowed
    #[error("Endpoint status transition not allowed: {from:?} -> {to:?}")]
    InvalidEndpointTransition {
        /// Current status
        from: EndpointStatus,
        /// Requested status
        to: EndpointStatus,
    },

    /// A job status transition is not allowed
    #[error("Job status transition not allowed: {from:?} -> {to:?}")]
    InvalidJobTransition {
        /// Current status
        from: JobStatus,
        /// Requested status
        to: JobStatus,
    },
}
