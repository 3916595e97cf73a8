//! 모델 목록 정리
//!
//! 목록 API 응답에서 생성 가능한 모델만 골라 최신 버전 순으로 정렬한다.

use serde::{Deserialize, Serialize};

/// 생성 가능 모델이 지원해야 하는 메서드
pub const GENERATE_CONTENT: &str = "generateContent";

/// 기본 모델 (목록에서 우선 선택하고, 목록이 비었을 때도 사용)
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// 모델 목록 API의 항목 하나
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ModelInfo {
    /// "models/gemini-1.5-flash" 형태
    pub name: String,
    pub version: String,
    pub supported_generation_methods: Vec<String>,
}

impl ModelInfo {
    pub fn can_generate(&self) -> bool {
        self.supported_generation_methods
            .iter()
            .any(|m| m == GENERATE_CONTENT)
    }

    /// "models/" 접두사를 뗀 모델 ID
    pub fn short_name(&self) -> &str {
        strip_models_prefix(&self.name)
    }
}

pub fn strip_models_prefix(name: &str) -> &str {
    name.strip_prefix("models/").unwrap_or(name)
}

/// 생성 가능 모델 ID 목록 (버전 내림차순)
///
/// 같은 버전끼리는 원래 순서를 유지한다.
pub fn generation_capable_models(models: &[ModelInfo]) -> Vec<String> {
    let mut capable: Vec<&ModelInfo> = models.iter().filter(|m| m.can_generate()).collect();
    capable.sort_by(|a, b| b.version.cmp(&a.version));
    capable.into_iter().map(|m| m.short_name().to_string()).collect()
}

/// 기본 선택 위치: `DEFAULT_MODEL`을 포함하는 첫 항목, 없으면 0
pub fn default_model_index(names: &[String]) -> usize {
    names
        .iter()
        .position(|name| name.contains(DEFAULT_MODEL))
        .unwrap_or(0)
}

/// 기본 모델 ID (목록이 비면 `DEFAULT_MODEL`)
pub fn default_model(names: &[String]) -> &str {
    names
        .get(default_model_index(names))
        .map(String::as_str)
        .unwrap_or(DEFAULT_MODEL)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(name: &str, version: &str, methods: &[&str]) -> ModelInfo {
        ModelInfo {
            name: name.to_string(),
            version: version.to_string(),
            supported_generation_methods: methods.iter().map(|m| m.to_string()).collect(),
        }
    }

    #[test]
    fn test_deserialize_list_entry() {
        let json = r#"{
            "name": "models/gemini-1.5-flash",
            "version": "001",
            "displayName": "Gemini 1.5 Flash",
            "supportedGenerationMethods": ["generateContent", "countTokens"]
        }"#;
        let info: ModelInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.short_name(), "gemini-1.5-flash");
        assert!(info.can_generate());
    }

    #[test]
    fn test_filters_and_sorts() {
        let models = vec![
            model("models/embedding-001", "001", &["embedContent"]),
            model("models/gemini-1.0-pro", "001", &["generateContent"]),
            model("models/gemini-2.0-flash", "2.0", &["generateContent"]),
            model("models/gemini-1.5-flash", "001", &["generateContent", "countTokens"]),
        ];
        let names = generation_capable_models(&models);
        assert_eq!(
            names,
            vec!["gemini-2.0-flash", "gemini-1.0-pro", "gemini-1.5-flash"]
        );
    }

    #[test]
    fn test_default_prefers_flash() {
        let names = vec!["gemini-2.0-pro".to_string(), "gemini-1.5-flash-latest".to_string()];
        assert_eq!(default_model_index(&names), 1);
        assert_eq!(default_model(&names), "gemini-1.5-flash-latest");
    }

    #[test]
    fn test_default_first_when_no_flash() {
        let names = vec!["gemini-2.0-pro".to_string(), "gemini-1.0-pro".to_string()];
        assert_eq!(default_model_index(&names), 0);
        assert_eq!(default_model(&names), "gemini-2.0-pro");
    }

    #[test]
    fn test_default_fallback_on_empty() {
        assert_eq!(default_model_index(&[]), 0);
        assert_eq!(default_model(&[]), DEFAULT_MODEL);
    }

    #[test]
    fn test_strip_models_prefix() {
        assert_eq!(strip_models_prefix("models/gemini-pro"), "gemini-pro");
        assert_eq!(strip_models_prefix("gemini-pro"), "gemini-pro");
    }
}
