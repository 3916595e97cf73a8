//! 입력 폼 검증
//!
//! 두 화면의 입력값을 검증된 요청 타입으로 변환한다.
//! 필수 항목이 비어 있으면 `Error::MissingField`.

use crate::curriculum::find_unit;
use crate::error::{Error, Result};

/// 기하-전공 연결고리 요청
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRequest {
    pub unit: &'static str,
    pub topic: &'static str,
    pub major: String,
}

impl LinkRequest {
    /// # Arguments
    /// * `unit` - 대단원 (이름 또는 로마 숫자)
    /// * `topic` - 소단원 (해당 대단원에 속해야 함)
    /// * `major` - 희망 학과 (공백만 있으면 안 됨)
    pub fn new(unit: &str, topic: &str, major: &str) -> Result<Self> {
        let unit = find_unit(&required("대단원", unit)?)?;
        let topic = required("소단원", topic)?;
        let topic = unit.topic(&topic).ok_or_else(|| Error::UnknownTopic {
            unit: unit.name.to_string(),
            topic,
        })?;
        let major = required("희망 학과", major)?;

        Ok(Self {
            unit: unit.name,
            topic,
            major,
        })
    }
}

/// 학과 추천용 학생 프로필
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentProfile {
    pub job: String,
    pub interest: String,
    pub hobby: String,
    pub subject: String,
}

impl StudentProfile {
    /// 네 항목 모두 필수
    pub fn new(job: &str, interest: &str, hobby: &str, subject: &str) -> Result<Self> {
        Ok(Self {
            job: required("희망 직업", job)?,
            interest: required("관심 분야", interest)?,
            hobby: required("취미", hobby)?,
            subject: required("좋아하는 과목", subject)?,
        })
    }
}

/// 앞뒤 공백을 제거하고, 비어 있으면 에러
pub fn required(label: &'static str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::MissingField(label));
    }
    Ok(trimmed.to_string())
}
