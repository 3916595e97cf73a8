//! Gemini API 연동
//!
//! - generate: 프롬프트 한 번 호출 → 응답 텍스트 (재시도 없음)
//! - list_models: 모델 목록 (페이지 끝까지)

use crate::error::{AppError, Result};
use major_compass_common::catalog::strip_models_prefix;
use major_compass_common::ModelInfo;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
const API_KEY_HEADER: &str = "x-goog-api-key";

/// 응답 형식 지시
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyFormat {
    /// 자유 텍스트
    Text,
    /// `application/json` 으로 제한
    Json,
}

/// generateContent 요청 본문
#[derive(Serialize)]
struct GeminiRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
struct GenerationConfig {
    #[serde(rename = "responseMimeType")]
    response_mime_type: &'static str,
}

impl<'a> GeminiRequest<'a> {
    fn new(prompt: &'a str, format: ReplyFormat) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: match format {
                ReplyFormat::Text => None,
                ReplyFormat::Json => Some(GenerationConfig {
                    response_mime_type: "application/json",
                }),
            },
        }
    }
}

/// generateContent 응답 본문
#[derive(Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<ResponseContent>,
}

#[derive(Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: String,
}

impl GeminiResponse {
    /// 첫 후보의 텍스트 파트를 이어 붙임
    fn text(&self) -> Option<String> {
        let parts = &self.candidates.first()?.content.as_ref()?.parts;
        let text: String = parts.iter().map(|p| p.text.as_str()).collect();
        (!text.trim().is_empty()).then_some(text)
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListModelsResponse {
    #[serde(default)]
    models: Vec<ModelInfo>,
    next_page_token: Option<String>,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Deserialize)]
struct ApiErrorDetail {
    message: String,
}

/// 실패 응답 본문에서 사람이 읽을 메시지 추출
fn upstream_error_message(status: StatusCode, body: &str) -> String {
    let message = serde_json::from_str::<ApiErrorBody>(body)
        .map(|e| e.error.message)
        .unwrap_or_else(|_| body.trim().to_string());
    format!("HTTP {}: {}", status.as_u16(), message)
}

fn generate_url(base: &str, model: &str) -> String {
    format!("{}/models/{}:generateContent", base, strip_models_prefix(model.trim()))
}

#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(api_key: String, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Config(format!("HTTP 클라이언트 생성 실패: {}", e)))?;

        Ok(Self {
            client,
            api_key,
            base_url: GEMINI_API_BASE.to_string(),
        })
    }

    /// API 주소를 바꾼 클라이언트 (프록시, 로컬 테스트 서버)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// 프롬프트 한 번 호출
    ///
    /// # Returns
    /// * `Ok(String)` - 응답 텍스트 (원문 그대로)
    /// * `Err(AppError::Invocation)` - 네트워크/인증/할당량 오류, 또는 빈 응답
    pub async fn generate(&self, model: &str, prompt: &str, format: ReplyFormat) -> Result<String> {
        let request = GeminiRequest::new(prompt, format);
        debug!(model, prompt_chars = prompt.chars().count(), ?format, "generateContent 호출");

        let response = self
            .client
            .post(generate_url(&self.base_url, model))
            .header(API_KEY_HEADER, &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| AppError::Invocation(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AppError::Invocation(e.to_string()))?;

        if !status.is_success() {
            return Err(AppError::Invocation(upstream_error_message(status, &body)));
        }

        let parsed: GeminiResponse = serde_json::from_str(&body)
            .map_err(|e| AppError::Invocation(format!("응답 형식 오류: {}", e)))?;
        let text = parsed
            .text()
            .ok_or_else(|| AppError::Invocation("응답에 텍스트가 없습니다".into()))?;

        debug!(reply_chars = text.chars().count(), "응답 수신");
        Ok(text)
    }

    /// 모델 목록 전체 (nextPageToken 을 따라감)
    pub async fn list_models(&self) -> Result<Vec<ModelInfo>> {
        let url = format!("{}/models", self.base_url);
        let mut models = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let mut request = self
                .client
                .get(&url)
                .header(API_KEY_HEADER, &self.api_key)
                .query(&[("pageSize", "1000")]);
            if let Some(token) = &page_token {
                request = request.query(&[("pageToken", token.as_str())]);
            }

            let response = request
                .send()
                .await
                .map_err(|e| AppError::Catalog(e.to_string()))?;
            let status = response.status();
            let body = response
                .text()
                .await
                .map_err(|e| AppError::Catalog(e.to_string()))?;

            if !status.is_success() {
                return Err(AppError::Catalog(upstream_error_message(status, &body)));
            }

            let page: ListModelsResponse = serde_json::from_str(&body)
                .map_err(|e| AppError::Catalog(format!("응답 형식 오류: {}", e)))?;
            debug!(count = page.models.len(), "모델 목록 페이지 수신");
            models.extend(page.models);

            match page.next_page_token.filter(|t| !t.is_empty()) {
                Some(token) => page_token = Some(token),
                None => break,
            }
        }

        Ok(models)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =============================================
    // 요청 직렬화 테스트
    // =============================================

    #[test]
    fn test_text_request_has_no_generation_config() {
        let request = GeminiRequest::new("안녕", ReplyFormat::Text);
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"contents":[{"parts":[{"text":"안녕"}]}]}"#);
    }

    #[test]
    fn test_json_request_sets_mime_type() {
        let request = GeminiRequest::new("추천해줘", ReplyFormat::Json);
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"generationConfig\""));
        assert!(json.contains("\"responseMimeType\":\"application/json\""));
    }

    #[test]
    fn test_generate_url_strips_prefix() {
        assert_eq!(
            generate_url("https://x", "models/gemini-1.5-flash"),
            "https://x/models/gemini-1.5-flash:generateContent"
        );
        assert_eq!(
            generate_url("https://x", "gemini-pro"),
            "https://x/models/gemini-pro:generateContent"
        );
    }

    // =============================================
    // 응답 해석 테스트
    // =============================================

    #[test]
    fn test_response_text_joins_parts() {
        let json = r#"{"candidates": [{"content": {"parts": [{"text": "첫 "}, {"text": "문단"}]}}]}"#;
        let response: GeminiResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.text().as_deref(), Some("첫 문단"));
    }

    #[test]
    fn test_response_without_candidates() {
        let response: GeminiResponse = serde_json::from_str(r#"{"promptFeedback": {}}"#).unwrap();
        assert!(response.text().is_none());
    }

    #[test]
    fn test_response_blocked_candidate() {
        let json = r#"{"candidates": [{"finishReason": "SAFETY"}]}"#;
        let response: GeminiResponse = serde_json::from_str(json).unwrap();
        assert!(response.text().is_none());
    }

    #[test]
    fn test_list_models_page() {
        let json = r#"{
            "models": [{"name": "models/gemini-pro", "version": "001", "supportedGenerationMethods": ["generateContent"]}],
            "nextPageToken": "abc"
        }"#;
        let page: ListModelsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(page.models.len(), 1);
        assert_eq!(page.next_page_token.as_deref(), Some("abc"));
    }

    #[test]
    fn test_upstream_error_message_from_body() {
        let body = r#"{"error": {"code": 400, "message": "API key not valid.", "status": "INVALID_ARGUMENT"}}"#;
        let message = upstream_error_message(StatusCode::BAD_REQUEST, body);
        assert_eq!(message, "HTTP 400: API key not valid.");
    }

    #[test]
    fn test_upstream_error_message_plain_body() {
        let message = upstream_error_message(StatusCode::TOO_MANY_REQUESTS, " quota exceeded \n");
        assert_eq!(message, "HTTP 429: quota exceeded");
    }
}
