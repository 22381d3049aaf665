//! Deployment vocabulary: deployment modes, serving protocols, model kinds.

use serde::{Deserialize, Serialize};

/// How a version endpoint is deployed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeploymentMode {
    /// Scale-to-zero deployment behind the platform's serverless stack
    #[default]
    Serverless,
    /// Plain Kubernetes deployment with a fixed replica set
    RawDeployment,
}

impl DeploymentMode {
    /// All deployment modes
    pub fn all() -> &'static [DeploymentMode] {
        &[Self::Serverless, Self::RawDeployment]
    }

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Serverless => "Serverless",
            Self::RawDeployment => "Raw Deployment",
        }
    }
}

/// Protocol spoken by a deployed model server
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Protocol {
    /// JSON over plain HTTP
    #[default]
    #[serde(rename = "HTTP_JSON")]
    HttpJson,
    /// Universal prediction interface over gRPC
    #[serde(rename = "UPI_V1")]
    UpiV1,
}

impl Protocol {
    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::HttpJson => "HTTP/JSON",
            Self::UpiV1 => "UPI v1",
        }
    }
}

/// Kind of model artifact a model holds
///
/// Determines which standard model server (or user image, for `Custom`) the
/// platform deploys for the model's versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelType {
    /// User-defined Python function
    Pyfunc,
    /// User-defined Python function, v2 inference protocol
    #[serde(rename = "pyfunc_v2")]
    PyfuncV2,
    /// TensorFlow SavedModel
    Tensorflow,
    /// PyTorch model archive
    Pytorch,
    /// scikit-learn pickle
    Sklearn,
    /// XGBoost booster
    Xgboost,
    /// ONNX graph
    Onnx,
    /// User-supplied serving image
    Custom,
}

impl ModelType {
    /// All model types
    pub fn all() -> &'static [ModelType] {
        &[
            Self::Pyfunc,
            Self::PyfuncV2,
            Self::Tensorflow,
            Self::Pytorch,
            Self::Sklearn,
            Self::Xgboost,
            Self::Onnx,
            Self::Custom,
        ]
    }

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Pyfunc => "PyFunc",
            Self::PyfuncV2 => "PyFunc v2",
            Self::Tensorflow => "TensorFlow",
            Self::Pytorch => "PyTorch",
            Self::Sklearn => "scikit-learn",
            Self::Xgboost => "XGBoost",
            Self::Onnx => "ONNX",
            Self::Custom => "Custom",
        }
    }

    /// Whether versions of this model run user code inside the server
    pub fn runs_user_code(&self) -> bool {
        matches!(self, Self::Pyfunc | Self::PyfuncV2 | Self::Custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deployment_mode_wire_names() {
        assert_eq!(
            serde_json::to_string(&DeploymentMode::RawDeployment).unwrap(),
            "\"raw_deployment\""
        );
        assert_eq!(DeploymentMode::default(), DeploymentMode::Serverless);
    }

    #[test]
    fn test_protocol_wire_names() {
        assert_eq!(serde_json::to_string(&Protocol::HttpJson).unwrap(), "\"HTTP_JSON\"");
        assert_eq!(serde_json::to_string(&Protocol::UpiV1).unwrap(), "\"UPI_V1\"");
    }

    #[test]
    fn test_model_type_wire_names() {
        assert_eq!(serde_json::to_string(&ModelType::PyfuncV2).unwrap(), "\"pyfunc_v2\"");
        let parsed: ModelType = serde_json::from_str("\"tensorflow\"").unwrap();
        assert_eq!(parsed, ModelType::Tensorflow);
    }

    #[test]
    fn test_unknown_model_type_rejected() {
        let result: Result<ModelType, _> = serde_json::from_str("\"keras\"");
        assert!(result.is_err());
    }
}
