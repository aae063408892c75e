//! Audio transcription endpoint

use crate::mock_server::{MockServerFixture, TEST_API_KEY};
use compactifai_rust::{catalog, Error, TranscriptionRequest};
use mockito::Matcher;

const TRANSCRIPTION_BODY: &str = r#"{
    "task": "transcribe",
    "language": "english",
    "duration": 2.5,
    "text": "hello world",
    "segments": [
        {"id": 0, "start": 0.0, "end": 1.2, "text": "hello"},
        {"id": 1, "start": 1.2, "end": 2.5, "text": " world"}
    ]
}"#;

fn form_field(name: &str, value: &str) -> Matcher {
    Matcher::Regex(format!(r#"name="{}"\r\n\r\n{}\r\n"#, name, regex::escape(value)))
}

#[tokio::test]
async fn transcribe_uploads_multipart_form() {
    let fixture = MockServerFixture::new().await;
    let mock = {
        let mut server = fixture.server.lock().await;
        server
            .mock("POST", "/v1/audio/transcriptions")
            .match_header("authorization", format!("Bearer {}", TEST_API_KEY).as_str())
            .match_header(
                "content-type",
                Matcher::Regex("^multipart/form-data; boundary=".to_string()),
            )
            .match_body(Matcher::AllOf(vec![
                Matcher::Regex(r#"name="file"; filename="clip\.mp3""#.to_string()),
                Matcher::Regex(r"(?i)content-type: audio/mpeg".to_string()),
                Matcher::Regex("fake-audio-bytes".to_string()),
                form_field("model", catalog::WHISPER_LARGE_V3),
                form_field("language", "en"),
                form_field("prompt", "greeting"),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(TRANSCRIPTION_BODY)
            .create_async()
            .await
    };

    let request = TranscriptionRequest::new(b"fake-audio-bytes".to_vec(), "clip.mp3")
        .with_language("en")
        .with_prompt("greeting");
    let response = fixture.client().transcribe(request).await.unwrap();

    assert_eq!(response.text, "hello world");
    assert_eq!(response.language, "english");
    assert_eq!(response.duration, 2.5);
    let segments = response.segments.unwrap();
    assert_eq!(segments.len(), 2);
    assert_eq!(segments[1].text, " world");
    mock.assert_async().await;
}

#[tokio::test]
async fn transcribe_uses_configured_transcription_model() {
    let fixture = MockServerFixture::new().await;
    let mock = {
        let mut server = fixture.server.lock().await;
        server
            .mock("POST", "/v1/audio/transcriptions")
            .match_body(form_field("model", "whisper-small"))
            .with_status(200)
            .with_body(TRANSCRIPTION_BODY)
            .create_async()
            .await
    };

    let client = fixture
        .builder()
        .transcription_model("whisper-small")
        .build()
        .unwrap();
    let request = TranscriptionRequest::new(vec![1u8, 2, 3], "a.wav").with_model("");
    client.transcribe(request).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn transcribe_file_reads_from_disk() {
    let fixture = MockServerFixture::new().await;
    let file_name = format!("compactifai-{}.wav", uuid::Uuid::new_v4());
    let path = std::env::temp_dir().join(&file_name);
    tokio::fs::write(&path, b"RIFF-wave-data").await.unwrap();

    let mock = {
        let mut server = fixture.server.lock().await;
        server
            .mock("POST", "/v1/audio/transcriptions")
            .match_body(Matcher::AllOf(vec![
                Matcher::Regex(format!(r#"filename="{}""#, regex::escape(&file_name))),
                Matcher::Regex(r"(?i)content-type: audio/wav".to_string()),
                Matcher::Regex("RIFF-wave-data".to_string()),
                form_field("language", "fr"),
            ]))
            .with_status(200)
            .with_body(TRANSCRIPTION_BODY)
            .create_async()
            .await
    };

    let text = fixture
        .client()
        .transcribe_file(&path, Some("fr"))
        .await
        .unwrap();
    let _ = tokio::fs::remove_file(&path).await;

    assert_eq!(text, "hello world");
    mock.assert_async().await;
}

#[tokio::test]
async fn transcribe_file_reports_missing_file() {
    let fixture = MockServerFixture::new().await;
    let path = std::env::temp_dir().join(format!("missing-{}.mp3", uuid::Uuid::new_v4()));

    let err = fixture
        .client()
        .transcribe_file(&path, None)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[tokio::test]
async fn form_values_with_markup_are_sent_verbatim() {
    let fixture = MockServerFixture::new().await;
    let mock = {
        let mut server = fixture.server.lock().await;
        server
            .mock("POST", "/v1/audio/transcriptions")
            .match_body(Matcher::AllOf(vec![
                form_field("prompt", "<b>bold</b> & (parens)?"),
                form_field("response_format", "verbose_json"),
            ]))
            .with_status(200)
            .with_body(TRANSCRIPTION_BODY)
            .create_async()
            .await
    };

    let request = TranscriptionRequest::new(vec![0u8; 8], "clip.ogg")
        .with_prompt("<b>bold</b> & (parens)?")
        .with_response_format("verbose_json");
    let response = fixture.client().transcribe(request).await.unwrap();

    assert_eq!(response.text, "hello world");
    mock.assert_async().await;
}
