//! Asynchronous text transform service.

use async_trait::async_trait;

use crate::error::TransformError;

/// Remote text transform, typically a language model call.
///
/// Implementations report every failure as a `TransformError` value; they
/// never panic across the await point.
#[async_trait]
pub trait AsyncTextService: Send + Sync {
    /// Service identifier for logs.
    fn id(&self) -> &str;

    /// Transform `text` into its replacement.
    async fn transform(&self, text: &str) -> Result<String, TransformError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Upper;

    #[async_trait]
    impl AsyncTextService for Upper {
        fn id(&self) -> &str {
            "upper"
        }

        async fn transform(&self, text: &str) -> Result<String, TransformError> {
            if text.is_empty() {
                return Err(TransformError::Failed("empty input".to_string()));
            }
            Ok(text.to_uppercase())
        }
    }

    #[tokio::test]
    async fn test_service_object_safety() {
        let service: Box<dyn AsyncTextService> = Box::new(Upper);
        assert_eq!(service.id(), "upper");
        assert_eq!(service.transform("abc").await.unwrap(), "ABC");
        assert_eq!(service.transform("").await.unwrap_err().to_string(), "empty input");
    }
}
