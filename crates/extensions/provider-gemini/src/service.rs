//! Gemini text service.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, info};

use inkling_config::GeminiConfig;
use inkling_protocols::{AsyncTextService, TransformError};

use crate::client::GeminiClient;
use crate::selection::{model_id, ModelSelector};
use crate::types::*;

/// Rewrites text with whichever Gemini model the key can use.
///
/// Every call lists the available models, picks one with the
/// [`ModelSelector`], then generates from the rendered prompt.
pub struct GeminiTextService {
    client: Option<GeminiClient>,
    selector: ModelSelector,
    prompt_template: String,
}

impl GeminiTextService {
    /// Build from config. A missing API key is not an error here; it is
    /// reported by the first `transform` before any request is made.
    pub fn from_config(config: &GeminiConfig) -> Result<Self, TransformError> {
        let client = config
            .api_key()
            .map(|key| {
                GeminiClient::with_options(
                    key.to_string(),
                    config.base_url.clone(),
                    Duration::from_secs(config.connect_timeout_secs),
                    Duration::from_secs(config.timeout_secs),
                )
            })
            .transpose()?;

        Ok(Self {
            client,
            selector: ModelSelector::new(&config.preferred),
            prompt_template: config.prompt_template.clone(),
        })
    }

    fn client(&self) -> Result<&GeminiClient, TransformError> {
        self.client
            .as_ref()
            .ok_or_else(|| TransformError::Configuration("API key is missing".to_string()))
    }

    /// All models available to the key.
    pub async fn models(&self) -> Result<Vec<ModelInfo>, TransformError> {
        Ok(self.client()?.list_models().await?.models)
    }

    /// Model id the next `transform` would use.
    pub async fn select_model(&self) -> Result<String, TransformError> {
        let models = self.models().await?;
        debug!("Available models: {}", models.len());

        let selected = self
            .selector
            .select(&models)
            .ok_or(TransformError::NoCompatibleModel)?;
        let id = model_id(&selected.name).to_string();
        info!("Selected model: {}", id);
        Ok(id)
    }

    /// Prompt sent for `text`.
    pub fn render_prompt(&self, text: &str) -> String {
        self.prompt_template.replace("{text}", text)
    }

    fn extract_text(response: &GenerateContentResponse) -> Result<String, TransformError> {
        if response.candidates.is_empty() {
            if let Some(reason) = response
                .prompt_feedback
                .as_ref()
                .and_then(|f| f.block_reason.as_deref())
            {
                debug!("Prompt blocked: {}", reason);
            }
            return Err(TransformError::SafetyBlocked);
        }

        match response.first_text() {
            Some(text) => Ok(text.to_string()),
            None => match response.candidates[0].finish_reason.as_deref() {
                Some("SAFETY") => Err(TransformError::SafetyBlocked),
                reason => Err(TransformError::InvalidResponse(format!(
                    "candidate has no text (finish reason: {})",
                    reason.unwrap_or("none")
                ))),
            },
        }
    }
}

#[async_trait]
impl AsyncTextService for GeminiTextService {
    fn id(&self) -> &str {
        "gemini"
    }

    async fn transform(&self, text: &str) -> Result<String, TransformError> {
        let client = self.client()?;
        let model = self.select_model().await?;

        let request = GenerateContentRequest::prompt(self.render_prompt(text));
        let response = client.generate_content(&model, &request).await?;
        Self::extract_text(&response)
    }
}

#[cfg(test)]
#[path = "service_tests.rs"]
mod tests;
