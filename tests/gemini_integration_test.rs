//! 실제 Gemini API 호출 테스트 (GEMINI_API_KEY가 없으면 건너뜀)

use major_compass::catalog::lookup_models;
use major_compass::gemini::{GeminiClient, ReplyFormat};
use major_compass_common::{
    build_link_prompt, build_recommendation_prompt, default_model, interpret_recommendations,
};
use std::time::Duration;
use tempfile::tempdir;

fn api_key() -> Option<String> {
    match std::env::var("GEMINI_API_KEY") {
        Ok(key) if !key.trim().is_empty() => Some(key),
        _ => {
            eprintln!("GEMINI_API_KEY not set; skipping integration test");
            None
        }
    }
}

#[tokio::test]
async fn gemini_recommendation_integration() {
    let Some(key) = api_key() else { return };
    let client = GeminiClient::new(key, Duration::from_secs(120)).expect("client");

    let dir = tempdir().expect("Failed to create temp dir");
    let lookup = lookup_models(&client, dir.path()).await;
    assert!(lookup.error.is_none(), "model list failed: {:?}", lookup.error);
    let model = default_model(&lookup.models).to_string();

    let prompt = build_recommendation_prompt("게임 개발자", "인공지능", "코딩", "수학");
    let reply = client
        .generate(&model, &prompt, ReplyFormat::Json)
        .await
        .expect("generate failed");

    let result = interpret_recommendations(&reply);
    assert!(!result.is_parse_failure(), "reply was not JSON: {}", reply);
    assert!(!result.recommendations().is_empty());
}

#[tokio::test]
async fn gemini_link_integration() {
    let Some(key) = api_key() else { return };
    let client = GeminiClient::new(key, Duration::from_secs(120)).expect("client");

    let reply = client
        .generate(
            "gemini-1.5-flash",
            &build_link_prompt("평면벡터의 내적", "컴퓨터공학과"),
            ReplyFormat::Text,
        )
        .await
        .expect("generate failed");

    assert!(!reply.trim().is_empty());
}

/// 잘못된 키는 모델 호출 오류
#[tokio::test]
async fn gemini_invalid_key_is_invocation_error() {
    if api_key().is_none() {
        return;
    }
    let client = GeminiClient::new("invalid-key".into(), Duration::from_secs(30)).expect("client");
    let result = client.generate("gemini-1.5-flash", "hello", ReplyFormat::Text).await;

    assert!(matches!(result, Err(major_compass::error::AppError::Invocation(_))));
}
