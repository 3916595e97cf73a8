//! 기하-전공 연결고리 탐색 화면

use super::{spinner, Page, Session, Step};
use crate::error::Result;
use crate::gemini::ReplyFormat;
use crate::presenter::render_link_result;
use dialoguer::{Input, Select};
use major_compass_common::{find_unit, link_prompt_for, LinkRequest, GEOMETRY_UNITS};

/// 연결고리 입력 폼 (명령줄 인자로 채워진 값은 묻지 않음)
#[derive(Debug, Clone, Default)]
pub struct LinkPage {
    pub unit: Option<String>,
    pub topic: Option<String>,
    pub major: Option<String>,
}

impl LinkPage {
    pub fn new(unit: Option<String>, topic: Option<String>, major: Option<String>) -> Self {
        Self { unit, topic, major }
    }

    /// 대단원을 물어야 하는지 (없거나 알 수 없는 단원이면 다시 고른다)
    fn needs_unit(&self, ask_all: bool) -> bool {
        ask_all || self.unit.as_deref().map_or(true, |u| find_unit(u).is_err())
    }

    /// 소단원을 물어야 하는지 (선택된 대단원에 없는 소단원도 포함)
    fn needs_topic(&self, ask_all: bool) -> bool {
        let known = match (self.unit.as_deref().map(find_unit), self.topic.as_deref()) {
            (Some(Ok(unit)), Some(topic)) => unit.has_topic(topic),
            _ => false,
        };
        ask_all || !known
    }

    /// 검증된 요청으로 변환
    pub fn request(&self) -> Result<LinkRequest> {
        Ok(LinkRequest::new(
            self.unit.as_deref().unwrap_or_default(),
            self.topic.as_deref().unwrap_or_default(),
            self.major.as_deref().unwrap_or_default(),
        )?)
    }
}

impl Page for LinkPage {
    fn collect(&mut self, ask_all: bool) -> Result<()> {
        if self.needs_unit(ask_all) {
            let names: Vec<&str> = GEOMETRY_UNITS.iter().map(|u| u.name).collect();
            let current = self
                .unit
                .as_deref()
                .and_then(|u| find_unit(u).ok())
                .and_then(|unit| names.iter().position(|n| *n == unit.name))
                .unwrap_or(0);
            let index = Select::new()
                .with_prompt("대단원 선택")
                .items(&names)
                .default(current)
                .interact()?;
            let previous = self.unit.as_deref().and_then(|u| find_unit(u).ok());
            if previous.map(|unit| unit.name) != Some(names[index]) {
                // 단원이 바뀌면 소단원도 다시 고른다
                self.topic = None;
            }
            self.unit = Some(names[index].to_string());
        }

        if self.needs_topic(ask_all) {
            let unit = find_unit(self.unit.as_deref().unwrap_or_default())?;
            let current = self
                .topic
                .as_deref()
                .and_then(|t| unit.topics.iter().position(|candidate| *candidate == t))
                .unwrap_or(0);
            let index = Select::new()
                .with_prompt("소단원 선택")
                .items(unit.topics)
                .default(current)
                .interact()?;
            self.topic = Some(unit.topics[index].to_string());
        }

        if ask_all || self.major.is_none() {
            let mut input = Input::<String>::new()
                .with_prompt("희망 학과 입력 (예: 컴퓨터공학과, 기계공학과, 의예과 등)")
                .allow_empty(true);
            if let Some(major) = &self.major {
                input = input.with_initial_text(major.clone());
            }
            self.major = Some(input.interact_text()?);
        }

        Ok(())
    }

    async fn submit(&self, session: &Session) -> Result<Step> {
        let request = self.request()?;
        let prompt = link_prompt_for(&request);

        let bar = spinner(format!("AI({})가 연결고리를 분석 중입니다...", session.model));
        let reply = session
            .client
            .generate(&session.model, &prompt, ReplyFormat::Text)
            .await;
        bar.finish_and_clear();

        println!("{}", render_link_result(&request, &reply?, &session.model));
        Ok(Step::Done)
    }
}
