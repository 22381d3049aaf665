//! Validation result types.
//!
//! Used when checking a deployment request against the platform's rules:
//! a request can accumulate several independent issues, and some of them
//! (warnings) do not block the operation.

use serde::{Deserialize, Serialize};

/// Result of a validation operation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidationResult {
    /// Whether the validation passed (no errors)
    pub valid: bool,

    /// Validation errors (block the operation)
    pub errors: Vec<ValidationIssue>,

    /// Validation warnings (do not block the operation)
    pub warnings: Vec<ValidationIssue>,
}

impl ValidationResult {
    /// Create a successful validation result
    pub fn success() -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Create a failed validation result with a single error
    pub fn error(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            valid: false,
            errors: vec![ValidationIssue {
                path: path.into(),
                message: message.into(),
                severity: IssueSeverity::Error,
            }],
            warnings: Vec::new(),
        }
    }

    /// Add an error to this validation result
    pub fn add_error(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.valid = false;
        self.errors.push(ValidationIssue {
            path: path.into(),
            message: message.into(),
            severity: IssueSeverity::Error,
        });
    }

    /// Add a warning to this validation result
    pub fn add_warning(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ValidationIssue {
            path: path.into(),
            message: message.into(),
            severity: IssueSeverity::Warning,
        });
    }

    /// Merge another validation result into this one
    pub fn merge(&mut self, other: ValidationResult) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
        self.valid = self.errors.is_empty();
    }

    /// Check if there are any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Check if there are any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::success()
    }
}

/// A single validation issue
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Path of the offending field (supports nested paths like `resource_request.cpu_request`)
    pub path: String,
    /// Human-readable message
    pub message: String,
    /// Severity of the issue
    pub severity: IssueSeverity,
}

/// Severity of a validation issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueSeverity {
    /// Blocks the operation
    Error,
    /// Advisory only
    Warning,
}
