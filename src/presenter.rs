//! 결과 표시 및 텍스트 내보내기
//!
//! 화면 출력용 문자열을 만들고, 추천 결과를 파일로 저장한다.

use crate::error::Result;
use chrono::{DateTime, Local};
use major_compass_common::export::{LABEL_CAREER, LABEL_CURRICULUM, LABEL_INTRODUCTION, LABEL_REASON};
use major_compass_common::{to_plain_text, Interpretation, LinkRequest, Recommendation};
use std::path::Path;

/// 연결고리 설명 화면
pub fn render_link_result(request: &LinkRequest, analysis: &str, model: &str) -> String {
    format!(
        "💡 {} & {}\n\n{}\n\nAnalyzed by {}",
        request.major,
        request.topic,
        analysis.trim(),
        model
    )
}

/// 추천 목록 화면 (카드 형태)
pub fn render_recommendations(records: &[Recommendation]) -> String {
    records
        .iter()
        .enumerate()
        .map(|(i, r)| {
            let mut card = format!("🎓 {}. {}\n", i + 1, or_dash(&r.major_name));
            card.push_str(&format!("  📘 {}: {}\n", LABEL_INTRODUCTION, or_dash(&r.introduction)));
            card.push_str(&format!("  💬 {}: {}\n", LABEL_REASON, or_dash(&r.reason)));
            card.push_str(&format!("  📚 {}: {}\n", LABEL_CURRICULUM, or_dash(&r.curriculum.join(", "))));
            card.push_str(&format!("  💼 {}: {}\n", LABEL_CAREER, or_dash(&r.career.join(", "))));
            card
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn or_dash(value: &str) -> &str {
    if value.trim().is_empty() {
        "-"
    } else {
        value
    }
}

/// 레코드가 없을 때 사용자 안내 문구
pub fn interpretation_notice(interpretation: &Interpretation) -> Option<&'static str> {
    match interpretation {
        Interpretation::Found(_) => None,
        Interpretation::NoRecords => {
            Some("⚠️ AI 응답에서 추천 학과를 찾지 못했습니다. 다시 시도해주세요.")
        }
        Interpretation::ParseFailed(_) => {
            Some("⚠️ AI 응답을 해석하지 못했습니다 (JSON 형식 아님). 다시 시도해주세요.")
        }
    }
}

/// 기본 저장 파일 이름 (예: 학과추천_20261019_1530.txt)
pub fn default_export_file_name(now: DateTime<Local>) -> String {
    format!("학과추천_{}.txt", now.format("%Y%m%d_%H%M"))
}

/// 추천 결과를 텍스트 파일로 저장
pub fn save_export(records: &[Recommendation], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, to_plain_text(records))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn record() -> Recommendation {
        Recommendation {
            major_name: "산업디자인학과".into(),
            introduction: "제품을 디자인합니다".into(),
            reason: "미술을 좋아해서".into(),
            curriculum: vec!["3D 모델링".into()],
            career: vec![],
        }
    }

    #[test]
    fn test_render_link_result() {
        let request = LinkRequest::new("I", "포물선의 방정식", "기계공학과").unwrap();
        let text = render_link_result(&request, "  포물선은...  \n", "gemini-1.5-flash");
        assert!(text.starts_with("💡 기계공학과 & 포물선의 방정식"));
        assert!(text.contains("\n\n포물선은...\n\n"));
        assert!(text.ends_with("Analyzed by gemini-1.5-flash"));
    }

    #[test]
    fn test_render_recommendations_dashes_empty_fields() {
        let text = render_recommendations(&[record()]);
        assert!(text.contains("🎓 1. 산업디자인학과"));
        assert!(text.contains("📚 주요 교육과정: 3D 모델링"));
        assert!(text.contains("💼 진출 분야: -"));
    }

    #[test]
    fn test_interpretation_notice() {
        assert!(interpretation_notice(&Interpretation::Found(vec![record()])).is_none());
        assert!(interpretation_notice(&Interpretation::NoRecords)
            .unwrap()
            .contains("찾지 못했습니다"));
        assert!(interpretation_notice(&Interpretation::ParseFailed("x".into()))
            .unwrap()
            .contains("해석하지 못했습니다"));
    }

    #[test]
    fn test_default_export_file_name() {
        let now = Local.with_ymd_and_hms(2026, 10, 19, 15, 30, 0).unwrap();
        assert_eq!(default_export_file_name(now), "학과추천_20261019_1530.txt");
    }

    #[test]
    fn test_save_export() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("nested").join("result.txt");
        save_export(&[record()], &path).expect("저장 실패");

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("1. 산업디자인학과\n"));
        assert!(content.contains("   진출 분야: \n"));
    }
}
