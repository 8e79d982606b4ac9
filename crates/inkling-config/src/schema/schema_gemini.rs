//! Gemini text service configuration.

use serde::{Deserialize, Serialize};

/// Prompt sent to the model; `{text}` is replaced by the spanned text.
pub const DEFAULT_PROMPT_TEMPLATE: &str = r#"Analyze the following text.
1. Extract the main idea.
2. Rewrite it into a SINGLE, concise sentence suitable for an AI prompt.
3. Do not add bolding or markdown. Just the text.

Text: "{text}"
"#;

/// Gemini configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    #[serde(default)]
    pub api_key: Option<String>,

    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Model-name substrings in order of preference.
    #[serde(default = "default_preferred")]
    pub preferred: Vec<String>,

    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,

    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    #[serde(default = "default_prompt_template")]
    pub prompt_template: String,
}

impl GeminiConfig {
    /// The API key, treating an empty string as unset.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|key| !key.trim().is_empty())
    }
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            preferred: default_preferred(),
            connect_timeout_secs: default_connect_timeout(),
            timeout_secs: default_timeout(),
            prompt_template: default_prompt_template(),
        }
    }
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_preferred() -> Vec<String> {
    vec!["flash".to_string(), "pro".to_string()]
}

fn default_connect_timeout() -> u64 {
    10
}

fn default_timeout() -> u64 {
    60
}

fn default_prompt_template() -> String {
    DEFAULT_PROMPT_TEMPLATE.to_string()
}
