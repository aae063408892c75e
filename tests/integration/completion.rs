//! Text completion endpoint

use crate::mock_server::MockServerFixture;
use compactifai_rust::{catalog, CompletionRequest};
use mockito::Matcher;
use serde_json::json;

const COMPLETION_BODY: &str = r#"{
    "id": "cmpl-1",
    "object": "text_completion",
    "created": 1700000000,
    "model": "cai-llama-3-1-8b-slim",
    "choices": [{"index": 0, "text": " upon a time", "finish_reason": "length"}],
    "usage": {"prompt_tokens": 2, "completion_tokens": 4, "total_tokens": 6}
}"#;

#[tokio::test]
async fn complete_returns_first_choice_text() {
    let fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_json_request(
            "/v1/completions",
            Matcher::Json(json!({
                "model": catalog::LLAMA_3_1_8B_SLIM,
                "prompt": "Once",
                "max_tokens": 16
            })),
            COMPLETION_BODY,
        )
        .await;

    let text = fixture
        .client()
        .complete("Once", None, Some(16))
        .await
        .unwrap();

    assert_eq!(text, " upon a time");
    mock.assert_async().await;
}

#[tokio::test]
async fn complete_with_explicit_model_omits_max_tokens() {
    let fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_json_request(
            "/v1/completions",
            Matcher::Json(json!({"model": catalog::LLAMA_3_1_8B, "prompt": "Once"})),
            COMPLETION_BODY,
        )
        .await;

    fixture
        .client()
        .complete("Once", Some(catalog::LLAMA_3_1_8B), None)
        .await
        .unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn complete_with_no_choices_returns_empty_text() {
    let fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_json_response("POST", "/v1/completions", 200, r#"{"id": "cmpl-2", "choices": []}"#)
        .await;

    let text = fixture.client().complete("Once", None, None).await.unwrap();
    assert_eq!(text, "");
}

#[tokio::test]
async fn create_completion_decodes_response() {
    let fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_json_request(
            "/v1/completions",
            Matcher::PartialJson(json!({"temperature": 0.2, "top_p": 0.9, "stop": ["."]})),
            COMPLETION_BODY,
        )
        .await;

    let request = CompletionRequest::new("Once")
        .with_temperature(0.2)
        .with_top_p(0.9)
        .with_stop(vec![".".to_string()]);
    let response = fixture.client().create_completion(request).await.unwrap();

    assert_eq!(response.id, "cmpl-1");
    assert_eq!(response.choices[0].finish_reason.as_deref(), Some("length"));
    assert_eq!(response.usage.as_ref().map(|u| u.completion_tokens), Some(4));
    mock.assert_async().await;
}
