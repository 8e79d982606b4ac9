//! Model selection.
//!
//! The choice is an ordered rule table. Each rule only considers models that
//! support [`GENERATE_CONTENT`]; the first rule with a match wins, and within a
//! rule the first model in list order wins.

use crate::types::ModelInfo;

/// Generation method a model must support to be usable.
pub const GENERATE_CONTENT: &str = "generateContent";

/// One row of the selection table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionRule {
    /// Model name contains the substring.
    NameContains(String),
    /// Any model.
    Any,
}

impl SelectionRule {
    pub fn matches(&self, model: &ModelInfo) -> bool {
        model.supports(GENERATE_CONTENT)
            && match self {
                Self::NameContains(needle) => model.name.contains(needle.as_str()),
                Self::Any => true,
            }
    }
}

/// Ordered model selection policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelSelector {
    rules: Vec<SelectionRule>,
}

impl ModelSelector {
    /// Prefer names containing each of `preferred` in turn, then anything.
    pub fn new<S: AsRef<str>>(preferred: &[S]) -> Self {
        let mut rules: Vec<SelectionRule> = preferred
            .iter()
            .map(|p| SelectionRule::NameContains(p.as_ref().to_string()))
            .collect();
        rules.push(SelectionRule::Any);
        Self { rules }
    }

    pub fn rules(&self) -> &[SelectionRule] {
        &self.rules
    }

    pub fn select<'a>(&self, models: &'a [ModelInfo]) -> Option<&'a ModelInfo> {
        self.rules
            .iter()
            .find_map(|rule| models.iter().find(|model| rule.matches(model)))
    }
}

impl Default for ModelSelector {
    fn default() -> Self {
        Self::new(&["flash", "pro"])
    }
}

/// Model id for URLs: the resource name without its `models/` prefix.
pub fn model_id(name: &str) -> &str {
    name.strip_prefix("models/").unwrap_or(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(name: &str, methods: &[&str]) -> ModelInfo {
        ModelInfo {
            name: name.to_string(),
            display_name: None,
            supported_generation_methods: methods.iter().map(|m| m.to_string()).collect(),
        }
    }

    #[test]
    fn test_default_rules() {
        let selector = ModelSelector::default();
        assert_eq!(
            selector.rules(),
            &[
                SelectionRule::NameContains("flash".to_string()),
                SelectionRule::NameContains("pro".to_string()),
                SelectionRule::Any,
            ]
        );
    }

    #[test]
    fn test_prefers_flash() {
        let models = vec![
            model("models/gemini-1.5-pro", &[GENERATE_CONTENT]),
            model("models/gemini-2.0-flash", &[GENERATE_CONTENT]),
        ];
        let selected = ModelSelector::default().select(&models).unwrap();
        assert_eq!(selected.name, "models/gemini-2.0-flash");
    }

    #[test]
    fn test_falls_back_to_pro() {
        let models = vec![
            model("models/embedding-001", &["embedContent"]),
            model("models/gemini-2.0-flash", &["countTokens"]),
            model("models/gemini-1.5-pro", &[GENERATE_CONTENT, "countTokens"]),
        ];
        let selected = ModelSelector::default().select(&models).unwrap();
        assert_eq!(selected.name, "models/gemini-1.5-pro");
    }

    #[test]
    fn test_falls_back_to_first_generating_model() {
        let models = vec![
            model("models/embedding-001", &["embedContent"]),
            model("models/gemma-3-27b-it", &[GENERATE_CONTENT]),
            model("models/learnlm-2.0", &[GENERATE_CONTENT]),
        ];
        let selected = ModelSelector::default().select(&models).unwrap();
        assert_eq!(selected.name, "models/gemma-3-27b-it");
    }

    #[test]
    fn test_no_generating_model() {
        let models = vec![
            model("models/gemini-2.0-flash", &["countTokens"]),
            model("models/embedding-001", &["embedContent"]),
        ];
        assert!(ModelSelector::default().select(&models).is_none());
        assert!(ModelSelector::default().select(&[]).is_none());
    }

    #[test]
    fn test_custom_preference_order() {
        let models = vec![
            model("models/gemini-2.0-flash", &[GENERATE_CONTENT]),
            model("models/gemini-1.5-pro", &[GENERATE_CONTENT]),
        ];
        let selected = ModelSelector::new(&["pro"]).select(&models).unwrap();
        assert_eq!(selected.name, "models/gemini-1.5-pro");
    }

    #[test]
    fn test_model_id_strips_prefix() {
        assert_eq!(model_id("models/gemini-2.0-flash"), "gemini-2.0-flash");
        assert_eq!(model_id("gemini-2.0-flash"), "gemini-2.0-flash");
    }
}
