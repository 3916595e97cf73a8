//! 학과 추천 화면

use super::{spinner, Page, Session, Step};
use crate::error::Result;
use crate::gemini::ReplyFormat;
use crate::presenter::{
    default_export_file_name, interpretation_notice, render_recommendations, save_export,
};
use chrono::Local;
use dialoguer::{Confirm, Input};
use major_compass_common::{
    interpret_recommendations, recommendation_prompt_for, Interpretation, Recommendation,
    StudentProfile,
};
use std::path::PathBuf;
use tracing::{debug, warn};

/// 학생 프로필 입력 폼
#[derive(Debug, Clone, Default)]
pub struct RecommendPage {
    pub job: Option<String>,
    pub interest: Option<String>,
    pub hobby: Option<String>,
    pub subject: Option<String>,
    /// 결과 저장 경로 (없으면 터미널에서 물어봄)
    pub output: Option<PathBuf>,
}

impl RecommendPage {
    pub fn profile(&self) -> Result<StudentProfile> {
        Ok(StudentProfile::new(
            self.job.as_deref().unwrap_or_default(),
            self.interest.as_deref().unwrap_or_default(),
            self.hobby.as_deref().unwrap_or_default(),
            self.subject.as_deref().unwrap_or_default(),
        )?)
    }

    fn save(&self, records: &[Recommendation], interactive: bool) -> Result<()> {
        let path = match &self.output {
            Some(path) => path.clone(),
            None if interactive => {
                let wants = Confirm::new()
                    .with_prompt("결과를 텍스트 파일로 저장할까요?")
                    .default(false)
                    .interact()?;
                if !wants {
                    return Ok(());
                }
                let name: String = Input::new()
                    .with_prompt("파일 이름")
                    .default(default_export_file_name(Local::now()))
                    .interact_text()?;
                PathBuf::from(name)
            }
            None => return Ok(()),
        };

        save_export(records, &path)?;
        println!("✔ 저장했습니다: {}", path.display());
        Ok(())
    }
}

fn ask(prompt: &str, current: Option<&str>) -> Result<String> {
    let mut input = Input::<String>::new().with_prompt(prompt).allow_empty(true);
    if let Some(value) = current {
        input = input.with_initial_text(value);
    }
    Ok(input.interact_text()?)
}

/// 응답 해석 결과를 표시용 레코드와 안내 문구로 나눈다
pub fn interpret_reply(reply: &str) -> (Vec<Recommendation>, Option<&'static str>) {
    let interpretation = interpret_recommendations(reply);
    match &interpretation {
        Interpretation::Found(records) => debug!(count = records.len(), "추천 레코드 복구"),
        Interpretation::NoRecords => warn!("응답에서 추천 목록을 찾지 못함"),
        Interpretation::ParseFailed(detail) => warn!(%detail, "응답 JSON 파싱 실패"),
    }
    let notice = interpretation_notice(&interpretation);
    (interpretation.into_recommendations(), notice)
}

impl Page for RecommendPage {
    fn collect(&mut self, ask_all: bool) -> Result<()> {
        let fields: [(&str, &mut Option<String>); 4] = [
            ("희망 직업 (예: 게임 개발자)", &mut self.job),
            ("관심 분야 (예: 인공지능)", &mut self.interest),
            ("취미 (예: 코딩, 그림 그리기)", &mut self.hobby),
            ("좋아하는 과목 (예: 수학)", &mut self.subject),
        ];
        for (prompt, slot) in fields {
            if ask_all || slot.is_none() {
                *slot = Some(ask(prompt, slot.as_deref())?);
            }
        }
        Ok(())
    }

    async fn submit(&self, session: &Session) -> Result<Step> {
        let profile = self.profile()?;
        let prompt = recommendation_prompt_for(&profile);

        let bar = spinner(format!("AI({})가 어울리는 학과를 찾는 중입니다...", session.model));
        let reply = session
            .client
            .generate(&session.model, &prompt, ReplyFormat::Json)
            .await;
        bar.finish_and_clear();

        let (records, notice) = interpret_reply(&reply?);
        if let Some(notice) = notice {
            return Ok(Step::Warned(notice));
        }

        println!("✨ 추천 학과 {}개\n", records.len());
        println!("{}", render_recommendations(&records));
        println!("Analyzed by {}", session.model);

        self.save(&records, session.interactive)?;
        Ok(Step::Done)
    }
}
