//! Text transform errors.

use std::fmt;

use thiserror::Error;

/// Which remote call a service failure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceStage {
    ListModels,
    GenerateContent,
}

impl fmt::Display for ServiceStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ListModels => f.write_str("List Models"),
            Self::GenerateContent => f.write_str("Generate Content"),
        }
    }
}

/// Failure of an asynchronous text transform.
///
/// Every variant is returned as a value from the service; the controller shows
/// the `Display` text verbatim as the transform result.
#[derive(Debug, Clone, Error)]
pub enum TransformError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("{stage} Failed ({status}): {body}")]
    ServiceUnavailable {
        stage: ServiceStage,
        status: u16,
        body: String,
    },

    #[error("No compatible models found for your API key.")]
    NoCompatibleModel,

    #[error("Blocked by safety filters.")]
    SafetyBlocked,

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("{0}")]
    Failed(String),
}

impl TransformError {
    pub fn service(stage: ServiceStage, status: u16, body: impl Into<String>) -> Self {
        Self::ServiceUnavailable {
            stage,
            status,
            body: body.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_error() {
        let err = TransformError::Configuration("API key is missing".to_string());
        assert!(err.to_string().contains("API key is missing"));
    }

    #[test]
    fn test_service_unavailable_embeds_body() {
        let err = TransformError::service(
            ServiceStage::ListModels,
            403,
            r#"{"error":{"message":"denied"}}"#,
        );
        let display = err.to_string();
        assert!(display.starts_with("List Models Failed"));
        assert!(display.contains("403"));
        assert!(display.contains("denied"));
    }

    #[test]
    fn test_generate_stage_display() {
        let err = TransformError::service(ServiceStage::GenerateContent, 500, "boom");
        assert!(err.to_string().starts_with("Generate Content Failed"));
    }

    #[test]
    fn test_safety_blocked_is_distinct() {
        let blocked = TransformError::SafetyBlocked.to_string();
        let network = TransformError::Network("reset".to_string()).to_string();
        assert_ne!(blocked, network);
        assert!(blocked.contains("safety"));
    }

    #[test]
    fn test_failed_is_verbatim() {
        let err = TransformError::Failed("timeout".to_string());
        assert_eq!(err.to_string(), "timeout");
    }

    #[test]
    fn test_error_debug() {
        let err = TransformError::NoCompatibleModel;
        assert!(format!("{:?}", err).contains("NoCompatibleModel"));
    }
}
