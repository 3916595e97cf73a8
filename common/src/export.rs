//! 추천 결과 텍스트 내보내기
//!
//! 레코드 하나당 한 섹션, 섹션 사이는 빈 줄.

use crate::types::Recommendation;

pub const LABEL_INTRODUCTION: &str = "학과 소개";
pub const LABEL_REASON: &str = "추천 이유";
pub const LABEL_CURRICULUM: &str = "주요 교육과정";
pub const LABEL_CAREER: &str = "진출 분야";

/// 레코드 하나를 섹션 텍스트로 (index는 1부터)
pub fn format_recommendation(index: usize, record: &Recommendation) -> String {
    format!(
        "{index}. {name}\n   {LABEL_INTRODUCTION}: {intro}\n   {LABEL_REASON}: {reason}\n   {LABEL_CURRICULUM}: {curriculum}\n   {LABEL_CAREER}: {career}\n",
        name = record.major_name,
        intro = record.introduction,
        reason = record.reason,
        curriculum = record.curriculum.join(", "),
        career = record.career.join(", "),
    )
}

/// 추천 목록 전체를 일반 텍스트 문서로 직렬화
///
/// ```
/// use major_compass_common::{to_plain_text, Recommendation};
///
/// let records = vec![Recommendation { major_name: "수학과".into(), ..Default::default() }];
/// assert!(to_plain_text(&records).starts_with("1. 수학과\n"));
/// ```
pub fn to_plain_text(records: &[Recommendation]) -> String {
    records
        .iter()
        .enumerate()
        .map(|(i, record)| format_recommendation(i + 1, record))
        .collect::<Vec<_>>()
        .join("\n")
}
