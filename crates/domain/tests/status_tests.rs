//! Tests for status transitions and validation
//!
//! Tests EndpointStatus and JobStatus state machine transitions.

use modelserve_domain::status::{EndpointStatus, JobStatus};

// ============================================================================
// EndpointStatus Tests
// ============================================================================

#[test]
fn test_endpoint_pending_transitions() {
    let pending = EndpointStatus::Pending;

    assert!(pending.can_transition_to(EndpointStatus::Running));
    assert!(pending.can_transition_to(EndpointStatus::Failed));
    assert!(pending.can_transition_to(EndpointStatus::Terminated));

    // Cannot go straight to serving, and cannot stay pending
    assert!(!pending.can_transition_to(EndpointStatus::Serving));
    assert!(!pending.can_transition_to(EndpointStatus::Pending));
}

#[test]
fn test_endpoint_running_transitions() {
    let running = EndpointStatus::Running;

    assert!(running.can_transition_to(EndpointStatus::Serving));
    assert!(running.can_transition_to(EndpointStatus::Failed));
    assert!(running.can_transition_to(EndpointStatus::Terminated));
    // Redeploy puts a live endpoint back to pending
    assert!(running.can_transition_to(EndpointStatus::Pending));

    assert!(!running.can_transition_to(EndpointStatus::Running));
}

#[test]
fn test_endpoint_serving_transitions() {
    let serving = EndpointStatus::Serving;

    assert!(serving.can_transition_to(EndpointStatus::Running));
    assert!(serving.can_transition_to(EndpointStatus::Pending));
    assert!(serving.can_transition_to(EndpointStatus::Terminated));

    assert!(!serving.can_transition_to(EndpointStatus::Failed));
    assert!(!serving.can_transition_to(EndpointStatus::Serving));
}

#[test]
fn test_endpoint_failed_transitions() {
    let failed = EndpointStatus::Failed;

    assert!(failed.can_transition_to(EndpointStatus::Pending));
    assert!(failed.can_transition_to(EndpointStatus::Terminated));

    assert!(!failed.can_transition_to(EndpointStatus::Running));
    assert!(!failed.can_transition_to(EndpointStatus::Serving));
}

#[test]
fn test_endpoint_terminated_is_final() {
    let terminated = EndpointStatus::Terminated;

    assert!(terminated.is_terminal());
    for target in [
        EndpointStatus::Pending,
        EndpointStatus::Running,
        EndpointStatus::Serving,
        EndpointStatus::Failed,
        EndpointStatus::Terminated,
    ] {
        assert!(!terminated.can_transition_to(target));
    }
}

#[test]
fn test_endpoint_active_states() {
    assert!(EndpointStatus::Running.is_active());
    assert!(EndpointStatus::Serving.is_active());

    assert!(!EndpointStatus::Pending.is_active());
    assert!(!EndpointStatus::Failed.is_active());
    assert!(!EndpointStatus::Terminated.is_active());
}

// ============================================================================
// JobStatus Tests
// ============================================================================

#[test]
fn test_job_pending_transitions() {
    let pending = JobStatus::Pending;

    assert!(pending.can_transition_to(JobStatus::Running));
    assert!(pending.can_transition_to(JobStatus::Terminating));
    assert!(pending.can_transition_to(JobStatus::FailedSubmission));

    assert!(!pending.can_transition_to(JobStatus::Completed));
    assert!(!pending.can_transition_to(JobStatus::Terminated));
}

#[test]
fn test_job_running_transitions() {
    let running = JobStatus::Running;

    assert!(running.can_transition_to(JobStatus::Completed));
    assert!(running.can_transition_to(JobStatus::Failed));
    assert!(running.can_transition_to(JobStatus::Terminating));

    assert!(!running.can_transition_to(JobStatus::Terminated));
    assert!(!running.can_transition_to(JobStatus::FailedSubmission));
}

#[test]
fn test_job_terminating_transitions() {
    let terminating = JobStatus::Terminating;

    assert!(terminating.can_transition_to(JobStatus::Terminated));

    assert!(!terminating.can_transition_to(JobStatus::Completed));
    assert!(!terminating.can_transition_to(JobStatus::Failed));
    assert!(!terminating.can_transition_to(JobStatus::Running));
}

#[test]
fn test_job_terminal_states() {
    let terminals = [
        JobStatus::Completed,
        JobStatus::Failed,
        JobStatus::Terminated,
        JobStatus::FailedSubmission,
    ];

    for status in terminals {
        assert!(status.is_terminal(), "{status:?} should be terminal");
        for target in [
            JobStatus::Pending,
            JobStatus::Running,
            JobStatus::Terminating,
            JobStatus::Terminated,
            JobStatus::Completed,
            JobStatus::Failed,
            JobStatus::FailedSubmission,
        ] {
            assert!(!status.can_transition_to(target));
        }
    }

    assert!(JobStatus::Completed.is_successful());
    assert!(!JobStatus::Failed.is_successful());
}
