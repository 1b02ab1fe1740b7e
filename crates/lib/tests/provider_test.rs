//! Integration tests for the provider clients, run against a `wiremock`
//! stand-in for the upstream APIs. These verify the wire shapes each
//! provider sends, the auth mechanism, and the non-success handling.

use serde_json::json;
use tahrir::providers::ai::{gapgpt::GapGptProvider, gemini::GeminiProvider, AiProvider};
use tahrir::GenerateError;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn gapgpt_sends_openai_shaped_request_with_bearer_auth() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", "Bearer test-key"))
        .and(body_partial_json(json!({
            "model": "gpt-4o",
            "temperature": 0.7,
            "max_tokens": 4000,
            "stream": false,
            "messages": [
                { "role": "system", "content": "دستور سیستم" },
                { "role": "user", "content": "موضوع" }
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [
                { "message": { "role": "assistant", "content": "متن تولیدشده" } }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let provider = GapGptProvider::new(
        format!("{}/v1/chat/completions", server.uri()),
        "test-key".to_string(),
        "gpt-4o".to_string(),
    )
    .unwrap();

    let text = provider.generate("دستور سیستم", "موضوع").await.unwrap();
    assert_eq!(text, "متن تولیدشده");
}

#[tokio::test]
async fn gemini_sends_generate_content_request_with_key_header() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-2.0-flash:generateContent"))
        .and(header("x-goog-api-key", "test-key"))
        .and(body_partial_json(json!({
            "generationConfig": { "temperature": 0.7, "maxOutputTokens": 4000 }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [
                { "content": { "parts": [ { "text": "# عنوان\nمتن" } ] } }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let provider = GeminiProvider::new(
        format!(
            "{}/v1beta/models/gemini-2.0-flash:generateContent",
            server.uri()
        ),
        "test-key".to_string(),
    )
    .unwrap();

    let text = provider.generate("دستور با موضوع", "").await.unwrap();
    assert_eq!(text, "# عنوان\nمتن");
}

#[tokio::test]
async fn non_success_status_is_reported_without_retry() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
        .expect(1)
        .mount(&server)
        .await;

    let provider = GapGptProvider::new(
        format!("{}/v1/chat/completions", server.uri()),
        "test-key".to_string(),
        "gpt-4o".to_string(),
    )
    .unwrap();

    let err = provider.generate("system", "user").await.unwrap_err();
    match err {
        GenerateError::AiApi { status, body } => {
            assert_eq!(status, 503);
            assert_eq!(body, "overloaded");
        }
        other => panic!("expected AiApi error, got: {other:?}"),
    }
}

#[tokio::test]
async fn empty_candidate_list_yields_empty_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "candidates": [] })))
        .mount(&server)
        .await;

    let provider = GeminiProvider::new(server.uri(), "test-key".to_string()).unwrap();
    let text = provider.generate("prompt", "").await.unwrap();
    assert_eq!(text, "");
}
