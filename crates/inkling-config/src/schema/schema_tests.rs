use super::*;

#[test]
fn test_config_default() {
    let config = Config::default();
    assert_eq!(config.controller.debounce_ms, 1500);
    assert_eq!(config.controller.trigger_key, "Tab");
    assert_eq!(config.policy, QualificationPolicy::Length { min_chars: 15 });
    assert_eq!(config.action, ActionConfig::Transform);
}

#[test]
fn test_controller_debounce_duration() {
    let controller = ControllerConfig {
        debounce_ms: 2000,
        ..Default::default()
    };
    assert_eq!(controller.debounce(), Duration::from_secs(2));
}

#[test]
fn test_gemini_config_default() {
    let gemini = GeminiConfig::default();
    assert!(gemini.api_key().is_none());
    assert_eq!(gemini.preferred, vec!["flash", "pro"]);
    assert!(gemini.base_url.starts_with("https://generativelanguage.googleapis.com"));
    assert!(gemini.prompt_template.contains("{text}"));
}

#[test]
fn test_gemini_blank_api_key() {
    let gemini = GeminiConfig {
        api_key: Some("   ".to_string()),
        ..Default::default()
    };
    assert!(gemini.api_key().is_none());

    let gemini = GeminiConfig {
        api_key: Some("abc".to_string()),
        ..Default::default()
    };
    assert_eq!(gemini.api_key(), Some("abc"));
}

#[test]
fn test_logging_config_default() {
    let logging = LoggingConfig::default();
    assert_eq!(logging.level, "info");
    assert!(logging.resolved_dir().is_none());
}

#[test]
fn test_logging_dir_expands_tilde() {
    let logging = LoggingConfig {
        level: "debug".to_string(),
        dir: Some("~/.inkling/logs".to_string()),
    };
    let dir = logging.resolved_dir().unwrap();
    assert!(!dir.to_string_lossy().starts_with('~'));
    assert!(dir.ends_with(".inkling/logs"));
}

#[test]
fn test_action_config_serialization() {
    let action = ActionConfig::Replace {
        replacement: "orange".to_string(),
    };
    let json = serde_json::to_value(&action).unwrap();
    assert_eq!(json["kind"], "replace");
    assert_eq!(json["replacement"], "orange");

    let json = serde_json::to_value(ActionConfig::Transform).unwrap();
    assert_eq!(json["kind"], "transform");
}

#[test]
fn test_config_serialization() {
    let config = Config::default();
    let json = serde_json::to_string(&config).unwrap();
    assert!(json.contains("\"debounce_ms\":1500"));
    assert!(json.contains("\"kind\":\"length\""));
}
