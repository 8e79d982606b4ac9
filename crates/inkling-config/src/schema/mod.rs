//! Configuration schema definitions.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use inkling_protocols::QualificationPolicy;

mod schema_gemini;
mod schema_logging;

pub use schema_gemini::*;
pub use schema_logging::*;

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub controller: ControllerConfig,

    #[serde(default)]
    pub policy: QualificationPolicy,

    #[serde(default)]
    pub action: ActionConfig,

    #[serde(default)]
    pub gemini: GeminiConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Interaction controller configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ControllerConfig {
    /// Quiet period after the last text change before analysis runs.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// Key that advances the flow and applies the result.
    #[serde(default = "default_trigger_key")]
    pub trigger_key: String,

    /// Tooltip placement relative to the pointer, `[dx, dy]`.
    #[serde(default = "default_tooltip_offset")]
    pub tooltip_offset: [f64; 2],
}

impl ControllerConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            trigger_key: default_trigger_key(),
            tooltip_offset: default_tooltip_offset(),
        }
    }
}

fn default_debounce_ms() -> u64 {
    1500
}

fn default_trigger_key() -> String {
    "Tab".to_string()
}

fn default_tooltip_offset() -> [f64; 2] {
    [20.0, 20.0]
}

/// What happens when the trigger key is pressed on a ready span.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ActionConfig {
    /// Send the spanned text to the text service and offer its output.
    #[default]
    Transform,

    /// Offer a fixed replacement string.
    Replace { replacement: String },
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
