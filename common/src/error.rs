//! 에러 타입 정의

use thiserror::Error;

/// 공통 에러 타입
#[derive(Error, Debug)]
pub enum Error {
    /// 모델 응답이 JSON이 아님
    #[error("{0}")]
    Parse(String),

    /// 필수 입력 항목이 비어 있음 (항목 이름을 담는다)
    #[error("{0}을(를) 입력해주세요")]
    MissingField(&'static str),

    #[error("알 수 없는 대단원: {0}")]
    UnknownUnit(String),

    #[error("'{unit}' 단원에 없는 소단원: {topic}")]
    UnknownTopic { unit: String, topic: String },
}

/// Result 타입 별칭
pub type Result<T> = std::result::Result<T, Error>;
