//! Lifecycle status types for endpoints, batch jobs, and image builds.

use crate::errors::DomainError;
use serde::{Deserialize, Serialize};

/// Version endpoint lifecycle status
///
/// A deployment starts out `pending` while the platform provisions it, moves
/// to `running` once the model server is up, and to `serving` when it is wired
/// into a public model endpoint. Redeploying a live endpoint puts it back to
/// `pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndpointStatus {
    /// Deployment accepted, infrastructure being provisioned
    Pending,
    /// Model server is up and reachable at its internal URL
    Running,
    /// Endpoint is receiving live traffic through a model endpoint
    Serving,
    /// Deployment failed
    Failed,
    /// Endpoint has been torn down
    Terminated,
}

impl EndpointStatus {
    /// Check whether a transition to `target` is allowed
    pub fn can_transition_to(&self, target: EndpointStatus) -> bool {
        matches!(
            (self, target),
            (Self::Pending, Self::Running)
                | (Self::Pending, Self::Failed)
                | (Self::Pending, Self::Terminated)
                | (Self::Running, Self::Serving)
                | (Self::Running, Self::Pending)
                | (Self::Running, Self::Failed)
                | (Self::Running, Self::Terminated)
                | (Self::Serving, Self::Running)
                | (Self::Serving, Self::Pending)
                | (Self::Serving, Self::Terminated)
                | (Self::Failed, Self::Pending)
                | (Self::Failed, Self::Terminated)
        )
    }

    /// Validate a transition, returning the target status on success
    pub fn transition_to(self, target: EndpointStatus) -> Result<EndpointStatus, DomainError> {
        if self.can_transition_to(target) {
            Ok(target)
        } else {
            Err(DomainError::InvalidEndpointTransition { from: self, to: target })
        }
    }

    /// Whether the endpoint has a live model server
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Running | Self::Serving)
    }

    /// Whether the endpoint is in its final state
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Terminated)
    }
}

/// Batch prediction job lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    /// Job accepted, waiting to be scheduled
    Pending,
    /// Job is executing
    Running,
    /// Stop requested, job is shutting down
    Terminating,
    /// Job was stopped before completion
    Terminated,
    /// Job finished successfully
    Completed,
    /// Job finished with an error
    Failed,
    /// Job could not be submitted to the cluster
    FailedSubmission,
}

impl JobStatus {
    /// Check whether a transition to `target` is allowed
    pub fn can_transition_to(&self, target: JobStatus) -> bool {
        matches!(
            (self, target),
            (Self::Pending, Self::Running)
                | (Self::Pending, Self::Terminating)
                | (Self::Pending, Self::FailedSubmission)
                | (Self::Running, Self::Completed)
                | (Self::Running, Self::Failed)
                | (Self::Running, Self::Terminating)
                | (Self::Terminating, Self::Terminated)
        )
    }

    /// Validate a transition, returning the target status on success
    pub fn transition_to(self, target: JobStatus) -> Result<JobStatus, DomainError> {
        if self.can_transition_to(target) {
            Ok(target)
        } else {
            Err(DomainError::InvalidJobTransition { from: self, to: target })
        }
    }

    /// Whether the job has reached a final state
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::Completed | Self::Failed | Self::Terminated | Self::FailedSubmission
        )
    }

    /// Whether the job finished successfully
    pub fn is_successful(&self) -> bool {
        matches!(self, Self::Completed)
    }
}

/// State of a model image building job
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageBuildingJobState {
    /// Build is in progress
    Active,
    /// Image was built and pushed
    Succeeded,
    /// Build failed
    Failed,
    /// Build state could not be determined
    Unknown,
}

impl ImageBuildingJobState {
    /// Whether the build has finished, successfully or not
    pub fn is_finished(&self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed)
    }
}
