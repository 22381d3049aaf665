//! Grammars for Kubernetes-style resource quantities and resource names.
//!
//! Deployment requests carry CPU and memory amounts as strings in the
//! Kubernetes quantity format. The platform rejects malformed quantities
//! server-side; validating here surfaces the mistake before a request is
//! issued.

use crate::errors::DomainError;
use regex::Regex;
use std::sync::OnceLock;

/// Maximum length of a project name
pub const MAX_PROJECT_NAME_LEN: usize = 50;

/// Minimum length of a project name
pub const MIN_PROJECT_NAME_LEN: usize = 3;

/// Maximum length of a model name
///
/// Kept short because the name is embedded into generated service hostnames.
pub const MAX_MODEL_NAME_LEN: usize = 25;

fn cpu_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^([0-9]+m|[0-9]+(\.[0-9]+)?)$").unwrap())
}

fn memory_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[0-9]+(\.[0-9]+)?(Ki|Mi|Gi|Ti|k|M|G|T)?$").unwrap())
}

fn rfc1123_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[a-z0-9]([-a-z0-9]*[a-z0-9])?$").unwrap())
}

/// Validate a CPU quantity such as `"1"`, `"2.5"`, or `"500m"`
pub fn validate_cpu_quantity(value: &str) -> Result<(), DomainError> {
    if cpu_re().is_match(value) {
        Ok(())
    } else {
        Err(DomainError::InvalidQuantity {
            value: value.to_string(),
            reason: "expected a CPU quantity like \"1\", \"2.5\", or \"500m\"".to_string(),
        })
    }
}

/// Validate a memory quantity such as `"512Mi"`, `"2Gi"`, or `"1024"` (bytes)
pub fn validate_memory_quantity(value: &str) -> Result<(), DomainError> {
    if memory_re().is_match(value) {
        Ok(())
    } else {
        Err(DomainError::InvalidQuantity {
            value: value.to_string(),
            reason: "expected a memory quantity like \"512Mi\", \"2Gi\", or \"1024\"".to_string(),
        })
    }
}

/// Validate a replica range for an autoscaled deployment
pub fn validate_replica_range(min: i32, max: i32) -> Result<(), DomainError> {
    if min < 0 || max < 1 || min > max {
        return Err(DomainError::InvalidReplicaRange { min, max });
    }
    Ok(())
}

fn validate_rfc1123_label(name: &str, min: usize, max: usize) -> Result<(), DomainError> {
    if name.len() < min || name.len() > max {
        return Err(DomainError::InvalidName {
            name: name.to_string(),
            reason: format!("length must be between {min} and {max} characters"),
        });
    }
    if !rfc1123_re().is_match(name) {
        return Err(DomainError::InvalidName {
            name: name.to_string(),
            reason: "only lowercase alphanumeric characters and \"-\" are allowed, and the name \
                     must start and end with an alphanumeric character"
                .to_string(),
        });
    }
    Ok(())
}

/// Validate a project name
pub fn validate_project_name(name: &str) -> Result<(), DomainError> {
    validate_rfc1123_label(name, MIN_PROJECT_NAME_LEN, MAX_PROJECT_NAME_LEN)
}

/// Validate a model name
pub fn validate_model_name(name: &str) -> Result<(), DomainError> {
    validate_rfc1123_label(name, 1, MAX_MODEL_NAME_LEN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cpu_quantities() {
        assert!(validate_cpu_quantity("1").is_ok());
        assert!(validate_cpu_quantity("2.5").is_ok());
        assert!(validate_cpu_quantity("500m").is_ok());

        assert!(validate_cpu_quantity("").is_err());
        assert!(validate_cpu_quantity("1.5m").is_err()); // millicores are integral
        assert!(validate_cpu_quantity("two").is_err());
        assert!(validate_cpu_quantity("-1").is_err());
    }

    #[test]
    fn test_memory_quantities() {
        assert!(validate_memory_quantity("512Mi").is_ok());
        assert!(validate_memory_quantity("2Gi").is_ok());
        assert!(validate_memory_quantity("1024").is_ok());
        assert!(validate_memory_quantity("1.5G").is_ok());

        assert!(validate_memory_quantity("512mb").is_err());
        assert!(validate_memory_quantity("Gi").is_err());
        assert!(validate_memory_quantity("2 Gi").is_err());
    }

    #[test]
    fn test_replica_ranges() {
        assert!(validate_replica_range(0, 4).is_ok());
        assert!(validate_replica_range(2, 2).is_ok());

        assert!(validate_replica_range(3, 1).is_err());
        assert!(validate_replica_range(-1, 2).is_err());
        assert!(validate_replica_range(0, 0).is_err());
    }

    #[test]
    fn test_project_names() {
        assert!(validate_project_name("fraud-detection").is_ok());
        assert!(validate_project_name("abc").is_ok());

        assert!(validate_project_name("ab").is_err());
        assert!(validate_project_name("Fraud").is_err());
        assert!(validate_project_name("-fraud").is_err());
        assert!(validate_project_name("fraud-").is_err());
    }

    #[test]
    fn test_model_names() {
        assert!(validate_model_name("churn-predictor").is_ok());
        assert!(validate_model_name("a").is_ok());

        assert!(validate_model_name("a-very-long-model-name-over-limit").is_err());
        assert!(validate_model_name("my_model").is_err());
    }

    #[test]
    fn test_invalid_name_reason_mentions_length() {
        let err = validate_project_name("ab").unwrap_err();
        assert!(err.to_string().contains("length"));
    }
}
