use super::*;

use inkling_protocols::ServiceStage;
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer) -> GeminiConfig {
    GeminiConfig {
        api_key: Some("test-key".to_string()),
        base_url: server.uri(),
        ..Default::default()
    }
}

fn service_for(server: &MockServer) -> GeminiTextService {
    GeminiTextService::from_config(&config_for(server)).unwrap()
}

async fn mount_models(server: &MockServer, models: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/models"))
        .and(query_param("key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "models": models })))
        .mount(server)
        .await;
}

fn text_response(text: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "candidates": [{
            "content": {"role": "model", "parts": [{"text": text}]},
            "finishReason": "STOP"
        }]
    }))
}

#[test]
fn test_service_id() {
    let service = GeminiTextService::from_config(&GeminiConfig::default()).unwrap();
    assert_eq!(service.id(), "gemini");
}

#[test]
fn test_render_prompt() {
    let service = GeminiTextService::from_config(&GeminiConfig::default()).unwrap();
    let prompt = service.render_prompt("make me a poem");
    assert!(prompt.contains("Text: \"make me a poem\""));
    assert!(prompt.contains("SINGLE, concise sentence"));
    assert!(!prompt.contains("{text}"));
}

#[tokio::test]
async fn test_missing_api_key_fails_before_network() {
    let server = MockServer::start().await;
    let config = GeminiConfig {
        api_key: None,
        base_url: server.uri(),
        ..Default::default()
    };
    let service = GeminiTextService::from_config(&config).unwrap();

    let err = service.transform("hello").await.unwrap_err();
    assert!(matches!(err, TransformError::Configuration(_)));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_transform_uses_flash_model() {
    let server = MockServer::start().await;
    mount_models(
        &server,
        json!([
            {"name": "models/gemini-1.5-pro", "supportedGenerationMethods": ["generateContent"]},
            {"name": "models/gemini-2.0-flash", "supportedGenerationMethods": ["generateContent"]}
        ]),
    )
    .await;
    Mock::given(method("POST"))
        .and(path("/models/gemini-2.0-flash:generateContent"))
        .and(query_param("key", "test-key"))
        .and(body_partial_json(json!({
            "safetySettings": [
                {"category": "HARM_CATEGORY_HARASSMENT", "threshold": "BLOCK_NONE"},
                {"category": "HARM_CATEGORY_HATE_SPEECH", "threshold": "BLOCK_NONE"},
                {"category": "HARM_CATEGORY_SEXUALLY_EXPLICIT", "threshold": "BLOCK_NONE"},
                {"category": "HARM_CATEGORY_DANGEROUS_CONTENT", "threshold": "BLOCK_NONE"}
            ]
        })))
        .respond_with(text_response("Write a poem about autumn."))
        .expect(1)
        .mount(&server)
        .await;

    let service = service_for(&server);
    let result = service.transform("please write me a poem about autumn").await;
    assert_eq!(result.unwrap(), "Write a poem about autumn.");

    let requests = server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&requests[1].body).unwrap();
    let prompt = body["contents"][0]["parts"][0]["text"].as_str().unwrap();
    assert!(prompt.contains("please write me a poem about autumn"));
}

#[tokio::test]
async fn test_fallback_to_first_generating_model() {
    let server = MockServer::start().await;
    mount_models(
        &server,
        json!([
            {"name": "models/embedding-001", "supportedGenerationMethods": ["embedContent"]},
            {"name": "models/gemma-3-27b-it", "supportedGenerationMethods": ["generateContent"]}
        ]),
    )
    .await;
    Mock::given(method("POST"))
        .and(path("/models/gemma-3-27b-it:generateContent"))
        .respond_with(text_response("ok"))
        .mount(&server)
        .await;

    let service = service_for(&server);
    assert_eq!(service.select_model().await.unwrap(), "gemma-3-27b-it");
    assert_eq!(service.transform("text").await.unwrap(), "ok");
}

#[tokio::test]
async fn test_no_compatible_model() {
    let server = MockServer::start().await;
    mount_models(
        &server,
        json!([
            {"name": "models/gemini-2.0-flash", "supportedGenerationMethods": ["countTokens"]}
        ]),
    )
    .await;

    let err = service_for(&server).transform("text").await.unwrap_err();
    assert!(matches!(err, TransformError::NoCompatibleModel));
}

#[tokio::test]
async fn test_list_models_failure_embeds_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/models"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": {"code": 400, "message": "API key not valid", "status": "INVALID_ARGUMENT"}
        })))
        .mount(&server)
        .await;

    let err = service_for(&server).transform("text").await.unwrap_err();
    match &err {
        TransformError::ServiceUnavailable { stage, status, body } => {
            assert_eq!(*stage, ServiceStage::ListModels);
            assert_eq!(*status, 400);
            assert!(body.contains("API key not valid"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert!(err.to_string().starts_with("List Models Failed"));
}

#[tokio::test]
async fn test_generate_failure_embeds_body() {
    let server = MockServer::start().await;
    mount_models(
        &server,
        json!([{"name": "models/gemini-2.0-flash", "supportedGenerationMethods": ["generateContent"]}]),
    )
    .await;
    Mock::given(method("POST"))
        .and(path("/models/gemini-2.0-flash:generateContent"))
        .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
        .mount(&server)
        .await;

    let err = service_for(&server).transform("text").await.unwrap_err();
    assert!(matches!(
        err,
        TransformError::ServiceUnavailable { stage: ServiceStage::GenerateContent, status: 503, ref body } if body == "overloaded"
    ));
}

#[tokio::test]
async fn test_no_candidates_is_safety_blocked() {
    let server = MockServer::start().await;
    mount_models(
        &server,
        json!([{"name": "models/gemini-2.0-flash", "supportedGenerationMethods": ["generateContent"]}]),
    )
    .await;
    Mock::given(method("POST"))
        .and(path("/models/gemini-2.0-flash:generateContent"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"promptFeedback": {"blockReason": "SAFETY"}})),
        )
        .mount(&server)
        .await;

    let err = service_for(&server).transform("text").await.unwrap_err();
    assert!(matches!(err, TransformError::SafetyBlocked));
}

#[tokio::test]
async fn test_malformed_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/models"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = service_for(&server).transform("text").await.unwrap_err();
    assert!(matches!(err, TransformError::InvalidResponse(_)));
}

#[tokio::test]
async fn test_unreachable_server_is_network_error() {
    let config = GeminiConfig {
        api_key: Some("test-key".to_string()),
        base_url: "http://127.0.0.1:9".to_string(),
        connect_timeout_secs: 1,
        timeout_secs: 1,
        ..Default::default()
    };
    let service = GeminiTextService::from_config(&config).unwrap();

    let err = service.transform("text").await.unwrap_err();
    assert!(matches!(err, TransformError::Network(_)));
}
