use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("설정 오류: {0}")]
    Config(String),

    #[error("API 키가 설정되지 않았습니다. `major-compass config --set-api-key YOUR_KEY` 또는 GOOGLE_API_KEY 환경 변수로 설정하세요")]
    MissingApiKey,

    /// 외부 생성 API 호출 실패 (네트워크, 인증, 할당량 등)
    #[error("모델 호출 오류: {0}")]
    Invocation(String),

    #[error("모델 목록 조회 오류: {0}")]
    Catalog(String),

    /// 터미널 입력 실패
    #[error("입력 오류: {0}")]
    Prompt(String),

    #[error("JSON 해석 오류: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO 오류: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] major_compass_common::Error),
}

impl From<dialoguer::Error> for AppError {
    fn from(e: dialoguer::Error) -> Self {
        AppError::Prompt(e.to_string())
    }
}

impl AppError {
    /// 화면을 다시 제출할 수 있는 오류인지 (입력 검증, 모델 호출)
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            AppError::Invocation(_)
                | AppError::Common(
                    major_compass_common::Error::MissingField(_)
                        | major_compass_common::Error::UnknownUnit(_)
                        | major_compass_common::Error::UnknownTopic { .. }
                )
        )
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
