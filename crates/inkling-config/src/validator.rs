//! Configuration validation.

use inkling_protocols::QualificationPolicy;

use crate::error::ConfigError;
use crate::schema::{ActionConfig, Config};

/// Validation result.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }

    /// Fold every error into one `ConfigError`.
    pub fn into_result(self) -> Result<Vec<ValidationWarning>, ConfigError> {
        if self.errors.is_empty() {
            return Ok(self.warnings);
        }
        if let [error] = self.errors.as_slice() {
            return Err(ConfigError::InvalidValue {
                field: error.path.clone(),
                message: error.message.clone(),
            });
        }

        let fields: Vec<_> = self.errors.iter().map(|e| e.path.as_str()).collect();
        let messages: Vec<_> = self
            .errors
            .iter()
            .map(|e| format!("{}: {}", e.path, e.message))
            .collect();
        Err(ConfigError::InvalidValue {
            field: fields.join(", "),
            message: messages.join("; "),
        })
    }
}

/// A validation error.
#[derive(Debug)]
pub struct ValidationError {
    pub path: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// A validation warning.
#[derive(Debug)]
pub struct ValidationWarning {
    pub path: String,
    pub message: String,
}

impl ValidationWarning {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the configuration.
    pub fn validate(config: &Config) -> ValidationResult {
        let mut result = ValidationResult::default();

        Self::validate_controller(config, &mut result);
        Self::validate_policy(config, &mut result);
        Self::validate_action(config, &mut result);
        Self::validate_gemini(config, &mut result);

        result
    }

    fn validate_controller(config: &Config, result: &mut ValidationResult) {
        let controller = &config.controller;

        if controller.debounce_ms == 0 {
            result.add_error(ValidationError::new(
                "controller.debounce_ms",
                "debounce_ms must be greater than 0",
            ));
        }

        if controller.debounce_ms > 10_000 {
            result.add_warning(ValidationWarning::new(
                "controller.debounce_ms",
                "debounce_ms is very high (>10s), hints will feel unresponsive",
            ));
        }

        if controller.trigger_key.trim().is_empty() {
            result.add_error(ValidationError::new(
                "controller.trigger_key",
                "Trigger key cannot be empty",
            ));
        }

        if controller.tooltip_offset.iter().any(|v| !v.is_finite()) {
            result.add_error(ValidationError::new(
                "controller.tooltip_offset",
                "tooltip_offset must be finite",
            ));
        }
    }

    fn validate_policy(config: &Config, result: &mut ValidationResult) {
        match &config.policy {
            QualificationPolicy::Length { .. } => {}
            QualificationPolicy::KeywordCount { keyword, min_count } => {
                if *min_count == 0 {
                    result.add_error(ValidationError::new(
                        "policy.min_count",
                        "min_count must be greater than 0",
                    ));
                }
                Self::validate_keyword(keyword, result);
            }
            QualificationPolicy::KeywordEach { keyword } => {
                Self::validate_keyword(keyword, result);
            }
        }
    }

    fn validate_keyword(keyword: &str, result: &mut ValidationResult) {
        if keyword.is_empty() {
            result.add_error(ValidationError::new(
                "policy.keyword",
                "Keyword cannot be empty",
            ));
        }
    }

    fn validate_action(config: &Config, result: &mut ValidationResult) {
        if let ActionConfig::Replace { replacement } = &config.action {
            if replacement.is_empty() {
                result.add_warning(ValidationWarning::new(
                    "action.replacement",
                    "Replacement is empty, matches will be deleted",
                ));
            }
        }
    }

    fn validate_gemini(config: &Config, result: &mut ValidationResult) {
        let gemini = &config.gemini;

        if !gemini.base_url.starts_with("http://") && !gemini.base_url.starts_with("https://") {
            result.add_error(ValidationError::new(
                "gemini.base_url",
                "base_url must start with http:// or https://",
            ));
        }

        if !gemini.prompt_template.contains("{text}") {
            result.add_error(ValidationError::new(
                "gemini.prompt_template",
                "prompt_template must contain a {text} placeholder",
            ));
        }

        if gemini.preferred.iter().any(|p| p.is_empty()) {
            result.add_error(ValidationError::new(
                "gemini.preferred",
                "Preferred model names cannot be empty",
            ));
        }

        if gemini.timeout_secs == 0 || gemini.connect_timeout_secs == 0 {
            result.add_error(ValidationError::new(
                "gemini.timeout_secs",
                "Timeouts must be greater than 0",
            ));
        }

        if config.action == ActionConfig::Transform && gemini.api_key().is_none() {
            result.add_warning(ValidationWarning::new(
                "gemini.api_key",
                "API key is not set, transform requests will fail",
            ));
        }
    }
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
