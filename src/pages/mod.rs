//! 대화형 화면 공통 처리
//!
//! 화면 하나 = 입력 수집 → 프롬프트 생성 → 모델 호출 → 결과 표시.
//! 실패해도 터미널이면 다시 제출할 수 있다.

pub mod link;
pub mod recommend;

use crate::catalog::lookup_models;
use crate::config::Config;
use crate::error::{AppError, Result};
use crate::gemini::GeminiClient;
use dialoguer::{Confirm, Password};
use indicatif::{ProgressBar, ProgressStyle};
use major_compass_common::default_model;
use std::io::IsTerminal;
use std::path::Path;
use std::time::Duration;
use tracing::info;

/// 한 번의 실행 동안 쓰는 모델 호출 환경
pub struct Session {
    pub client: GeminiClient,
    pub model: String,
    pub interactive: bool,
}

/// 제출 결과
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// 결과 표시 완료
    Done,
    /// 표시할 결과가 없음 (안내 문구)
    Warned(&'static str),
}

/// 화면 하나의 입력/제출
#[allow(async_fn_in_trait)]
pub trait Page {
    /// 입력 수집. `ask_all`이면 이미 있는 값도 (기본값으로 채워서) 다시 묻는다.
    fn collect(&mut self, ask_all: bool) -> Result<()>;

    async fn submit(&self, session: &Session) -> Result<Step>;
}

/// 표준 입력/에러가 모두 터미널인지
pub fn is_interactive() -> bool {
    std::io::stdin().is_terminal() && std::io::stderr().is_terminal()
}

/// API 키, 모델을 정해 세션을 연다
pub async fn open_session(
    config: &Config,
    api_key_flag: Option<&str>,
    model_flag: Option<&str>,
    config_dir: &Path,
) -> Result<Session> {
    let interactive = is_interactive();
    let api_key = match config.resolve_api_key(api_key_flag) {
        Some(key) => key,
        None if interactive => Password::new()
            .with_prompt("Gemini API 키")
            .interact()?,
        None => return Err(AppError::MissingApiKey),
    };

    let client = GeminiClient::new(api_key, Duration::from_secs(config.timeout_seconds))?;
    let model = match model_flag.or(config.model.as_deref()) {
        Some(model) => model.trim().to_string(),
        None => {
            let lookup = lookup_models(&client, config_dir).await;
            if let Some(error) = &lookup.error {
                println!("⚠️ 모델 목록을 불러오는 중 오류 발생: {}", error);
            }
            default_model(&lookup.models).to_string()
        }
    };
    info!(model = %model, interactive, "세션 시작");

    Ok(Session {
        client,
        model,
        interactive,
    })
}

/// 모델 호출 중 표시할 스피너
pub fn spinner(message: String) -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    bar.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    bar.set_message(message);
    bar.enable_steady_tick(Duration::from_millis(100));
    bar
}

fn confirm_retry(session: &Session) -> Result<bool> {
    if !session.interactive {
        return Ok(false);
    }
    Ok(Confirm::new()
        .with_prompt("다시 시도할까요?")
        .default(true)
        .interact()?)
}

/// 한 번 제출한 결과를 어떻게 처리할지
#[derive(Debug)]
enum Outcome {
    Finished,
    /// 메시지를 보여주고 재시도 여부를 묻는다
    Retry(String),
    Fail(AppError),
}

/// 입력 수집 또는 제출 결과 분류
///
/// - 결과 없음 안내: 오류 종료가 아님
/// - 입력 검증/모델 호출 오류: 터미널이면 재시도 가능, 아니면 `Err`
fn classify(result: Result<Step>, interactive: bool) -> Outcome {
    match result {
        Ok(Step::Done) => Outcome::Finished,
        Ok(Step::Warned(notice)) => Outcome::Retry(notice.to_string()),
        Err(e) if e.is_recoverable() && interactive => Outcome::Retry(format!("❌ {}", e)),
        Err(e) => Outcome::Fail(e),
    }
}

async fn attempt<P: Page>(session: &Session, page: &mut P, ask_all: bool) -> Result<Step> {
    if session.interactive {
        page.collect(ask_all)?;
    }
    page.submit(session).await
}

/// 화면 실행 루프
pub async fn run_page<P: Page>(session: &Session, page: &mut P) -> Result<()> {
    let mut ask_all = false;
    loop {
        match classify(attempt(session, page, ask_all).await, session.interactive) {
            Outcome::Finished => return Ok(()),
            Outcome::Retry(message) => {
                println!("{}", message);
                if !confirm_retry(session)? {
                    return Ok(());
                }
            }
            Outcome::Fail(e) => return Err(e),
        }
        ask_all = true;
    }
}
