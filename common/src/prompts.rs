//! 프롬프트 생성 모듈
//!
//! - build_link_prompt: 기하 단원-전공 연결고리 설명용
//! - build_recommendation_prompt: 학과 추천용 (JSON 스키마 지시 포함)
//!
//! 사용자 입력은 그대로 끼워 넣는다.

use crate::form::{LinkRequest, StudentProfile};

/// 추천받을 학과 수
pub const RECOMMENDATION_COUNT: usize = 3;

/// 연결고리 설명 프롬프트 생성
///
/// # Arguments
/// * `topic` - 기하 소단원
/// * `major` - 희망 학과
///
/// # Returns
/// 200자 내외 한 문단 설명을 요청하는 프롬프트
pub fn build_link_prompt(topic: &str, major: &str) -> String {
    format!(
        "고등학교 기하 단원 '{topic}'와 대학교 전공 '{major}'의 연관성을 설명해줘.\n\
         실제 전공에서 어떻게 활용되는지 구체적인 예시를 들어 200자 내외로 한 문단으로 설명해줘.\n\
         설명은 친절하고 격려하는 어조로 작성해줘."
    )
}

/// `LinkRequest`에서 바로 프롬프트 생성
pub fn link_prompt_for(request: &LinkRequest) -> String {
    build_link_prompt(request.topic, &request.major)
}

/// 학과 추천 프롬프트 생성
///
/// 응답 형식을 `recommendations` 배열로 고정하도록 스키마를 명시한다.
pub fn build_recommendation_prompt(job: &str, interest: &str, hobby: &str, subject: &str) -> String {
    format!(
        r#"당신은 고등학생의 진로를 돕는 입시 상담 교사입니다.
아래 학생 정보를 바탕으로 어울리는 대학교 학과 {count}개를 추천해주세요.

## 학생 정보
- 희망 직업: {job}
- 관심 분야: {interest}
- 취미: {hobby}
- 좋아하는 과목: {subject}

## 출력 형식 (반드시 이 JSON 형식으로만 출력)
{{
  "recommendations": [
    {{
      "majorName": "학과 이름",
      "introduction": "학과 소개 (2~3문장)",
      "reason": "이 학생에게 추천하는 이유",
      "curriculum": ["주요 교과목1", "주요 교과목2", "주요 교과목3"],
      "career": ["진출 분야1", "진출 분야2"]
    }}
  ]
}}

## 주의
- JSON 외의 설명문은 출력하지 마세요
- 학생이 이해하기 쉬운 친절한 말투로 작성하세요"#,
        count = RECOMMENDATION_COUNT,
    )
}

/// `StudentProfile`에서 바로 프롬프트 생성
pub fn recommendation_prompt_for(profile: &StudentProfile) -> String {
    build_recommendation_prompt(&profile.job, &profile.interest, &profile.hobby, &profile.subject)
}
