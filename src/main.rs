use clap::Parser;
use major_compass::{catalog, cli, config, error, gemini, pages};
use cli::{Cli, Commands};
use config::{mask_api_key, Config};
use error::{AppError, Result};
use major_compass_common::{default_model_index, GEOMETRY_UNITS};
use pages::link::LinkPage;
use pages::recommend::RecommendPage;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "major_compass={level},major_compass_common={level}",
                level = default_level
            ))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = Config::load()?;
    let config_dir = Config::config_dir()?;

    match cli.command {
        Commands::Link { unit, topic, major, model } => {
            println!("🔗 기하-전공 연결고리 탐색기\n");
            println!("고등학교 기하 단원이 대학교 전공에서 어떻게 활용되는지 확인해보세요!\n");

            let session =
                pages::open_session(&config, cli.api_key.as_deref(), model.as_deref(), &config_dir)
                    .await?;
            let mut page = LinkPage::new(unit, topic, major);
            pages::run_page(&session, &mut page).await?;
        }

        Commands::Recommend { job, interest, hobby, subject, model, output } => {
            println!("🎓 AI 학과 추천\n");

            let session =
                pages::open_session(&config, cli.api_key.as_deref(), model.as_deref(), &config_dir)
                    .await?;
            let mut page = RecommendPage { job, interest, hobby, subject, output };
            pages::run_page(&session, &mut page).await?;
        }

        Commands::Models => {
            let api_key = config
                .resolve_api_key(cli.api_key.as_deref())
                .ok_or(AppError::MissingApiKey)?;
            let client =
                gemini::GeminiClient::new(api_key, Duration::from_secs(config.timeout_seconds))?;
            let lookup = catalog::lookup_models(&client, &config_dir).await;

            if let Some(error) = &lookup.error {
                println!("⚠️ 모델 목록을 불러오는 중 오류 발생: {}", error);
            }
            if lookup.models.is_empty() {
                println!("사용 가능한 모델이 없습니다");
                return Ok(());
            }

            let default_index = default_model_index(&lookup.models);
            println!(
                "사용 가능한 모델 ({}개{}):",
                lookup.models.len(),
                if lookup.from_cache { ", 캐시" } else { "" }
            );
            for (i, name) in lookup.models.iter().enumerate() {
                let marker = if i == default_index { " (기본)" } else { "" };
                println!("  - {}{}", name, marker);
            }
        }

        Commands::Config { set_api_key, set_model, show } => {
            if let Some(key) = set_api_key {
                config.set_api_key(key)?;
                println!("✔ API 키를 저장했습니다");
            }

            if let Some(model) = set_model {
                config.set_model(model)?;
                println!("✔ 기본 모델을 저장했습니다");
            }

            if show {
                println!("설정:");
                println!("  파일: {}", Config::config_path()?.display());
                println!(
                    "  API 키: {}",
                    config.api_key.as_deref().map(mask_api_key).unwrap_or_else(|| "미설정".into())
                );
                println!("  모델: {}", config.model.as_deref().unwrap_or("자동 선택"));
                println!("  타임아웃: {}초", config.timeout_seconds);
                println!("  기하 단원: {}개", GEOMETRY_UNITS.len());
            }
        }
    }

    Ok(())
}
