//! 모델 응답 해석기
//!
//! 학과 추천 응답(JSON 지시를 줬지만 형태가 보장되지 않음)에서
//! 추천 레코드 목록을 복구한다.
//!
//! 처리 순서:
//! 1. 코드 펜스 제거 후 JSON 파싱 (실패 시 `ParseFailed`)
//! 2. 목록 위치 결정 (`SHAPE_RESOLVERS` 순서대로, 첫 성공 채택)
//! 3. 필드 투영 (객체가 아닌 요소는 건너뜀, 빠진 필드는 기본값)

use crate::error::{Error, Result};
use crate::types::{Interpretation, Recommendation};
use serde_json::{Map, Value};

/// 목록 위치 결정 함수
pub type ShapeResolver = fn(&Value) -> Option<&Vec<Value>>;

/// 목록 위치 결정 전략 (우선순위 순)
pub const SHAPE_RESOLVERS: &[(&str, ShapeResolver)] = &[
    ("recommendations", recommendations_key),
    ("bare_list", bare_list),
    ("first_list_value", first_list_value),
];

/// 응답 앞뒤 공백과 Markdown 코드 펜스를 제거
///
/// ```
/// use major_compass_common::strip_code_fence;
///
/// assert_eq!(strip_code_fence("```json\n[1]\n```"), "[1]");
/// assert_eq!(strip_code_fence("  {}  "), "{}");
/// ```
pub fn strip_code_fence(response: &str) -> &str {
    let trimmed = response.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // 여는 펜스 줄의 정보 문자열 (```json, ```Json 등)
    let rest = match rest.get(..4) {
        Some(tag) if tag.eq_ignore_ascii_case("json") => &rest[4..],
        _ => rest,
    };
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

/// 응답 문자열을 JSON 값으로 파싱
///
/// # Returns
/// * `Ok(Value)` - 객체/배열/스칼라 어느 것이든
/// * `Err(Error::Parse)` - JSON 문법 오류
pub fn parse_payload(response: &str) -> Result<Value> {
    serde_json::from_str(strip_code_fence(response))
        .map_err(|e| Error::Parse(format!("JSON 파싱 오류: {}", e)))
}

/// a. `recommendations` 키의 값이 배열이면 그것을 사용
pub fn recommendations_key(value: &Value) -> Option<&Vec<Value>> {
    value.get("recommendations")?.as_array()
}

/// b. 최상위 값 자체가 배열
pub fn bare_list(value: &Value) -> Option<&Vec<Value>> {
    value.as_array()
}

/// c. 객체의 값 중 첫 번째 배열 (문서 순서)
pub fn first_list_value(value: &Value) -> Option<&Vec<Value>> {
    value.as_object()?.values().find_map(Value::as_array)
}

/// 레코드 목록 위치를 결정하고, 채택된 전략 이름과 함께 반환
///
/// 어떤 전략도 맞지 않으면 `None` (스칼라, 배열 값이 없는 객체 등)
pub fn resolve_shape(value: &Value) -> Option<(&'static str, &Vec<Value>)> {
    SHAPE_RESOLVERS
        .iter()
        .find_map(|&(name, resolve)| resolve(value).map(|items| (name, items)))
}

/// 목록 요소 하나를 추천 레코드로 투영 (객체가 아니면 `None`)
pub fn project_recommendation(item: &Value) -> Option<Recommendation> {
    let map = item.as_object()?;
    Some(Recommendation {
        major_name: get_string(map, "majorName"),
        introduction: get_string(map, "introduction"),
        reason: get_string(map, "reason"),
        curriculum: get_list(map, "curriculum"),
        career: get_list(map, "career"),
    })
}

/// 모델 응답을 추천 레코드 목록으로 해석
///
/// 절대 패닉하지 않는다. 실패는 `ParseFailed` / `NoRecords` 로 돌려준다.
///
/// ```
/// use major_compass_common::{interpret_recommendations, Interpretation};
///
/// let reply = r#"{"recommendations": [{"majorName": "통계학과"}]}"#;
/// let result = interpret_recommendations(reply);
/// assert_eq!(result.recommendations()[0].major_name, "통계학과");
///
/// assert!(interpret_recommendations("not json").is_parse_failure());
/// ```
pub fn interpret_recommendations(response: &str) -> Interpretation {
    let value = match parse_payload(response) {
        Ok(value) => value,
        Err(e) => return Interpretation::ParseFailed(e.to_string()),
    };

    let Some((_, items)) = resolve_shape(&value) else {
        return Interpretation::NoRecords;
    };

    let records: Vec<Recommendation> = items.iter().filter_map(project_recommendation).collect();
    if records.is_empty() {
        Interpretation::NoRecords
    } else {
        Interpretation::Found(records)
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

fn get_string(map: &Map<String, Value>, key: &str) -> String {
    map.get(key).and_then(scalar_text).unwrap_or_default()
}

fn get_list(map: &Map<String, Value>, key: &str) -> Vec<String> {
    match map.get(key) {
        Some(Value::Array(items)) => items.iter().filter_map(scalar_text).collect(),
        // 문자열 하나만 온 경우 한 항목짜리 목록으로
        Some(other) => scalar_text(other).into_iter().collect(),
        None => Vec::new(),
    }
}
