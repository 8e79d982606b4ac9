    use super::*;

    #[test]
    fn test_validate_default_config() {
        let config = Config::default();
        let result = ConfigValidator::validate(&config);
        assert!(result.is_valid());
        // Transform without a key only warns
        assert!(result.warnings.iter().any(|w| w.path == "gemini.api_key"));
    }

    #[test]
    fn test_validate_zero_debounce() {
        let mut config = Config::default();
        config.controller.debounce_ms = 0;

        let result = ConfigValidator::validate(&config);
        assert!(!result.is_valid());
        assert!(result.errors.iter().any(|e| e.path == "controller.debounce_ms"));
    }

    #[test]
    fn test_validate_long_debounce_warning() {
        let mut config = Config::default();
        config.controller.debounce_ms = 60_000;

        let result = ConfigValidator::validate(&config);
        assert!(result.is_valid());
        assert!(result.warnings.iter().any(|w| w.path == "controller.debounce_ms"));
    }

    #[test]
    fn test_validate_empty_trigger_key() {
        let mut config = Config::default();
        config.controller.trigger_key = " ".to_string();

        let result = ConfigValidator::validate(&config);
        assert!(result.errors.iter().any(|e| e.path == "controller.trigger_key"));
    }

    #[test]
    fn test_validate_empty_keyword() {
        let mut config = Config::default();
        config.policy = QualificationPolicy::KeywordEach {
            keyword: String::new(),
        };

        let result = ConfigValidator::validate(&config);
        assert!(result.errors.iter().any(|e| e.path == "policy.keyword"));
    }

    #[test]
    fn test_validate_zero_min_count() {
        let mut config = Config::default();
        config.policy = QualificationPolicy::KeywordCount {
            keyword: "apple".to_string(),
            min_count: 0,
        };

        let result = ConfigValidator::validate(&config);
        assert!(result.errors.iter().any(|e| e.path == "policy.min_count"));
    }

    #[test]
    fn test_validate_invalid_base_url() {
        let mut config = Config::default();
        config.gemini.base_url = "generativelanguage.googleapis.com".to_string();

        let result = ConfigValidator::validate(&config);
        assert!(result.errors.iter().any(|e| e.path == "gemini.base_url"));
    }

    #[test]
    fn test_validate_template_without_placeholder() {
        let mut config = Config::default();
        config.gemini.prompt_template = "Summarize this".to_string();

        let result = ConfigValidator::validate(&config);
        assert!(result.errors.iter().any(|e| e.path == "gemini.prompt_template"));
    }

    #[test]
    fn test_validate_replace_mode_skips_api_key_warning() {
        let mut config = Config::default();
        config.action = ActionConfig::Replace {
            replacement: "orange".to_string(),
        };

        let result = ConfigValidator::validate(&config);
        assert!(result.is_valid());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_into_result_reports_first_error() {
        let mut config = Config::default();
        config.controller.debounce_ms = 0;

        let err = ConfigValidator::validate(&config).into_result().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "controller.debounce_ms"));
    }

    #[test]
    fn test_into_result_reports_every_error() {
        let mut config = Config::default();
        config.controller.debounce_ms = 0;
        config.controller.trigger_key = " ".to_string();

        let err = ConfigValidator::validate(&config).into_result().unwrap_err();
        let ConfigError::InvalidValue { field, message } = err else {
            panic!("expected InvalidValue");
        };
        assert_eq!(field, "controller.debounce_ms, controller.trigger_key");
        assert!(message.contains("controller.debounce_ms:"));
        assert!(message.contains("controller.trigger_key:"));
    }

    #[test]
    fn test_into_result_passes_warnings() {
        let warnings = ConfigValidator::validate(&Config::default())
            .into_result()
            .unwrap();
        assert_eq!(warnings.len(), 1);
    }
