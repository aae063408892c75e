//! Error handling: service failures, decode failures, transport failures

use crate::mock_server::{chat_body, closed_port_url, silent_server, MockServerFixture};
use compactifai_rust::transport::TransportError;
use compactifai_rust::{
    ApiErrorKind, CancellationToken, ChatRequest, CompactifAiClient, CompletionRequest, Error,
    Message, TranscriptionRequest,
};
use std::time::{Duration, Instant};

const UNAUTHORIZED: &str = r#"{"error":"Invalid API key"}"#;

fn assert_unauthorized(result: compactifai_rust::Result<impl std::fmt::Debug>, endpoint: &str) {
    let err = result.expect_err(endpoint);
    let api = err
        .as_api()
        .unwrap_or_else(|| panic!("{}: expected API error, got {:?}", endpoint, err));
    assert_eq!(api.kind(), ApiErrorKind::Service, "{}", endpoint);
    assert_eq!(api.status(), Some(401), "{}", endpoint);
    assert_eq!(api.body(), Some(UNAUTHORIZED), "{}", endpoint);
    assert_eq!(
        err.to_string(),
        format!("API request failed with status 401: {}", UNAUTHORIZED)
    );
}

#[tokio::test]
async fn unauthorized_on_every_endpoint() {
    let fixture = MockServerFixture::new().await;
    let _chat = fixture
        .mock_error_response("POST", "/v1/chat/completions", 401, UNAUTHORIZED)
        .await;
    let _completion = fixture
        .mock_error_response("POST", "/v1/completions", 401, UNAUTHORIZED)
        .await;
    let _audio = fixture
        .mock_error_response("POST", "/v1/audio/transcriptions", 401, UNAUTHORIZED)
        .await;
    let _list = fixture
        .mock_error_response("GET", "/v1/models", 401, UNAUTHORIZED)
        .await;
    let _get = fixture
        .mock_error_response("GET", "/v1/models/gpt-oss-20b", 401, UNAUTHORIZED)
        .await;

    let client = fixture.client();
    assert_unauthorized(client.chat("Hello", None, None).await, "chat");
    assert_unauthorized(
        client
            .create_chat_completion(ChatRequest::new(vec![Message::user("Hello")]))
            .await,
        "create_chat_completion",
    );
    assert_unauthorized(client.complete("Once", None, None).await, "complete");
    assert_unauthorized(
        client.create_completion(CompletionRequest::new("Once")).await,
        "create_completion",
    );
    assert_unauthorized(
        client
            .transcribe(TranscriptionRequest::new(vec![0u8; 4], "a.mp3"))
            .await,
        "transcribe",
    );
    assert_unauthorized(client.list_models().await, "list_models");
    assert_unauthorized(client.get_model("gpt-oss-20b").await, "get_model");
}

#[tokio::test]
async fn error_status_wins_over_decodable_body() {
    let fixture = MockServerFixture::new().await;
    let body = chat_body("should not be decoded");
    let _mock = fixture
        .mock_error_response("POST", "/v1/chat/completions", 500, &body)
        .await;

    let err = fixture.client().chat("Hello", None, None).await.unwrap_err();
    assert_eq!(err.status(), Some(500));
    assert_eq!(err.as_api().unwrap().body(), Some(body.as_str()));
}

#[tokio::test]
async fn rate_limit_is_reported_verbatim() {
    let fixture = MockServerFixture::new().await;
    let body = "slow down";
    let _mock = fixture
        .mock_error_response("GET", "/v1/models", 429, body)
        .await;

    let err = fixture.client().list_models().await.unwrap_err();
    assert_eq!(err.status(), Some(429));
    assert_eq!(err.as_api().unwrap().body(), Some(body));
}

#[tokio::test]
async fn empty_success_body_is_a_decode_error() {
    let fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_json_response("POST", "/v1/chat/completions", 200, "")
        .await;

    let err = fixture.client().chat("Hello", None, None).await.unwrap_err();
    let api = err.as_api().unwrap();
    assert_eq!(api.kind(), ApiErrorKind::Decode);
    assert_eq!(api.status(), None);
    assert_eq!(api.message(), "Failed to deserialize API response");
}

#[tokio::test]
async fn malformed_success_body_is_a_decode_error() {
    let fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_json_response("GET", "/v1/models", 200, "<html>gateway</html>")
        .await;

    let err = fixture.client().list_models().await.unwrap_err();
    let api = err.as_api().unwrap();
    assert!(api.is_decode_error());
    assert_eq!(api.body(), Some("<html>gateway</html>"));
}

#[tokio::test]
async fn unreachable_server_is_a_transport_error() {
    let client = CompactifAiClient::builder()
        .api_key("test-key")
        .base_url(closed_port_url())
        .timeout_secs(5)
        .build()
        .unwrap();

    let err = client.list_models().await.unwrap_err();
    assert!(
        matches!(err, Error::Transport(TransportError::Connect(_))),
        "unexpected error: {:?}",
        err
    );
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn slow_server_times_out() {
    let client = CompactifAiClient::builder()
        .api_key("test-key")
        .base_url(silent_server().await)
        .timeout_secs(1)
        .build()
        .unwrap();

    let err = client.chat("Hello", None, None).await.unwrap_err();
    assert!(err.is_timeout(), "unexpected error: {:?}", err);
}

#[tokio::test]
async fn cancellation_aborts_in_flight_request() {
    let client = CompactifAiClient::builder()
        .api_key("test-key")
        .base_url(silent_server().await)
        .timeout_secs(60)
        .build()
        .unwrap();
    let token = CancellationToken::new();
    let scoped = client.with_cancellation(token.clone());

    let canceller = tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(100)).await;
        token.cancel();
    });

    let started = Instant::now();
    let err = scoped.chat("Hello", None, None).await.unwrap_err();
    canceller.await.unwrap();

    assert!(err.is_cancelled(), "unexpected error: {:?}", err);
    assert!(started.elapsed() < Duration::from_secs(10));
}

#[tokio::test]
async fn cancelled_token_stops_before_sending() {
    let fixture = MockServerFixture::new().await;
    let mock = {
        let mut server = fixture.server.lock().await;
        server
            .mock("GET", "/v1/models")
            .with_status(200)
            .with_body(r#"{"data": []}"#)
            .expect(0)
            .create_async()
            .await
    };

    let token = CancellationToken::new();
    token.cancel();
    let err = fixture
        .client()
        .with_cancellation(token)
        .list_models()
        .await
        .unwrap_err();

    assert!(err.is_cancelled());
    mock.assert_async().await;
}

#[tokio::test]
async fn concurrent_calls_share_one_client() {
    let fixture = MockServerFixture::new().await;
    let mock = {
        let mut server = fixture.server.lock().await;
        server
            .mock("POST", "/v1/chat/completions")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(chat_body("pong"))
            .expect(8)
            .create_async()
            .await
    };

    let client = fixture.client();
    let calls = (0..8).map(|i| {
        let client = client.clone();
        async move { client.chat(&format!("ping {}", i), None, None).await }
    });
    let results = futures::future::join_all(calls).await;

    assert!(results.iter().all(|r| r.as_deref().ok() == Some("pong")));
    mock.assert_async().await;
}
