//! Gemini API client.

use std::time::Duration;

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use inkling_protocols::{ServiceStage, TransformError};

use crate::types::*;

pub const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Gemini API client.
pub struct GeminiClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl GeminiClient {
    /// Create a new Gemini client against the public endpoint.
    pub fn new(api_key: String) -> Result<Self, TransformError> {
        Self::with_options(
            api_key,
            BASE_URL.to_string(),
            Duration::from_secs(10),
            Duration::from_secs(60),
        )
    }

    /// Create a client with a custom endpoint and timeouts.
    pub fn with_options(
        api_key: String,
        base_url: String,
        connect_timeout: Duration,
        timeout: Duration,
    ) -> Result<Self, TransformError> {
        let client = Client::builder()
            .connect_timeout(connect_timeout)
            .timeout(timeout)
            .build()
            .map_err(|e| TransformError::Configuration(format!("HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// List the models available to the API key.
    pub async fn list_models(&self) -> Result<ModelList, TransformError> {
        let url = format!("{}/models", self.base_url);
        debug!("Gemini list_models");

        let response = self
            .client
            .get(&url)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| TransformError::Network(e.to_string()))?;

        Self::decode(ServiceStage::ListModels, response).await
    }

    /// Generate content (non-streaming).
    pub async fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, TransformError> {
        let url = format!("{}/models/{}:generateContent", self.base_url, model);
        debug!("Gemini generate_content: model={}", model);

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(request)
            .send()
            .await
            .map_err(|e| TransformError::Network(e.to_string()))?;

        Self::decode(ServiceStage::GenerateContent, response).await
    }

    async fn decode<T: DeserializeOwned>(
        stage: ServiceStage,
        response: Response,
    ) -> Result<T, TransformError> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TransformError::Network(e.to_string()))?;

        if !status.is_success() {
            if let Ok(error) = serde_json::from_str::<GeminiError>(&body) {
                warn!("{} rejected: {} ({})", stage, error.error.message, error.error.status);
            }
            return Err(TransformError::service(stage, status.as_u16(), body));
        }

        serde_json::from_str(&body).map_err(|e| {
            TransformError::InvalidResponse(format!("{}: {}", stage, e))
        })
    }
}
