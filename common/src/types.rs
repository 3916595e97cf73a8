//! 추천 결과 타입 정의
//!
//! CLI와 테스트에서 공유하는 타입:
//! - Recommendation: 학과 추천 한 건
//! - Interpretation: 모델 응답 해석 결과

use serde::{Deserialize, Serialize};

/// 학과 추천 레코드
///
/// 다섯 필드는 항상 존재한다 (값이 없으면 빈 문자열/빈 목록).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Recommendation {
    pub major_name: String,
    pub introduction: String,
    pub reason: String,
    pub curriculum: Vec<String>,
    pub career: Vec<String>,
}

/// 모델 응답 해석 결과
///
/// 파싱 실패와 "파싱은 됐지만 쓸 만한 레코드 없음"은 사용자 안내가 다르므로 구분한다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Interpretation {
    /// 레코드를 하나 이상 복구함
    Found(Vec<Recommendation>),
    /// JSON으로는 읽혔으나 레코드 목록을 찾지 못함
    NoRecords,
    /// JSON이 아님 (파서 메시지 포함)
    ParseFailed(String),
}

impl Interpretation {
    /// 복구된 레코드 (없으면 빈 슬라이스)
    pub fn recommendations(&self) -> &[Recommendation] {
        match self {
            Interpretation::Found(records) => records,
            Interpretation::NoRecords | Interpretation::ParseFailed(_) => &[],
        }
    }

    pub fn into_recommendations(self) -> Vec<Recommendation> {
        match self {
            Interpretation::Found(records) => records,
            Interpretation::NoRecords | Interpretation::ParseFailed(_) => Vec::new(),
        }
    }

    pub fn is_parse_failure(&self) -> bool {
        matches!(self, Interpretation::ParseFailed(_))
    }
}
