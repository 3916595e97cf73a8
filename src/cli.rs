use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "major-compass")]
#[command(about = "기하-전공 연결고리 탐색 및 학과 추천 도구", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 상세 로그 출력
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Gemini API 키 (환경 변수/설정 파일보다 우선)
    #[arg(long, global = true)]
    pub api_key: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 기하 단원과 희망 학과의 연결고리 찾기
    Link {
        /// 대단원 (예: "II" 또는 "II. 평면벡터")
        #[arg(short, long)]
        unit: Option<String>,

        /// 소단원 (예: "평면벡터의 내적")
        #[arg(short, long)]
        topic: Option<String>,

        /// 희망 학과
        #[arg(short, long)]
        major: Option<String>,

        /// 사용할 모델 (생략 시 설정값 또는 목록 기본값)
        #[arg(long)]
        model: Option<String>,
    },

    /// 학생 정보로 학과 추천받기
    Recommend {
        /// 희망 직업
        #[arg(long)]
        job: Option<String>,

        /// 관심 분야
        #[arg(long)]
        interest: Option<String>,

        /// 취미
        #[arg(long)]
        hobby: Option<String>,

        /// 좋아하는 과목
        #[arg(long)]
        subject: Option<String>,

        /// 사용할 모델
        #[arg(long)]
        model: Option<String>,

        /// 추천 결과를 저장할 텍스트 파일
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 사용 가능한 모델 목록 (1시간 캐시)
    Models,

    /// 설정 보기/편집
    Config {
        /// API 키 저장
        #[arg(long)]
        set_api_key: Option<String>,

        /// 기본 모델 저장
        #[arg(long)]
        set_model: Option<String>,

        /// 설정 표시
        #[arg(long)]
        show: bool,
    },
}
