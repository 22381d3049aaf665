//! Strongly-typed identifier types for ModelServe resources.
//!
//! The platform addresses projects, models, versions, jobs, secrets, and
//! environments by small integer identifiers assigned by the server, and
//! deployment endpoints by UUID. Each gets its own wrapper type so identifiers
//! for different resources cannot be mixed up at compile time.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use uuid::Uuid;

macro_rules! define_numeric_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// Wrap a server-assigned identifier
            #[inline]
            pub fn new(value: i32) -> Self {
                Self(value)
            }

            /// Get the underlying integer value
            #[inline]
            pub fn value(&self) -> i32 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i32> for $name {
            fn from(value: i32) -> Self {
                Self(value)
            }
        }

        impl From<$name> for i32 {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.parse()?))
            }
        }
    };
}

define_numeric_id!(ProjectId, "Unique identifier for projects");

define_numeric_id!(ModelId, "Unique identifier for models");

define_numeric_id!(VersionId, "Unique identifier for model versions");

define_numeric_id!(JobId, "Unique identifier for batch prediction jobs");

define_numeric_id!(ModelEndpointId, "Unique identifier for model endpoints");

define_numeric_id!(SecretId, "Unique identifier for project secrets");

define_numeric_id!(EnvironmentId, "Unique identifier for deployment environments");

/// Unique identifier for version endpoints (deployments)
///
/// Endpoints are UUID-addressed on the wire, unlike the integer-addressed
/// resources above.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EndpointId(Uuid);

impl EndpointId {
    /// Create a new random endpoint ID
    #[inline]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create an ID from an existing UUID
    #[inline]
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Get a reference to the underlying UUID
    #[inline]
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for EndpointId {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for EndpointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for EndpointId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl From<EndpointId> for Uuid {
    fn from(id: EndpointId) -> Self {
        id.0
    }
}

impl std::str::FromStr for EndpointId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_id_roundtrip() {
        let id = ModelId::new(7);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "7");
        let back: ModelId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, back);
    }

    #[test]
    fn test_numeric_id_from_string() {
        let id: ProjectId = "123".parse().unwrap();
        assert_eq!(id.value(), 123);
        assert!("abc".parse::<ProjectId>().is_err());
    }

    #[test]
    fn test_endpoint_id_serialization() {
        let id = EndpointId::new();
        let json = serde_json::to_string(&id).unwrap();
        let back: EndpointId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, back);
    }

    #[test]
    fn test_endpoint_id_from_string() {
        let id = EndpointId::new();
        let parsed: EndpointId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_different_id_types() {
        let model_id = ModelId::new(1);
        let version_id = VersionId::new(1);

        // This should not compile (different types):
        // assert_eq!(model_id, version_id);

        assert_eq!(model_id.value(), version_id.value());
    }
}
