//! Wiring & DI. Entry point: bootstrap adapters, inject into services, run UI.
//! No business logic here.

use dotenv::dotenv;
use quizforge::adapters::ai::{GeminiAdapter, MockAiAdapter};
use quizforge::adapters::ui::tui::TuiInputPort;
use quizforge::ports::{AiPort, InputPort};
use quizforge::shared::config::AppConfig;
use quizforge::usecases::GeneratorService;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Ok(path) = &env_loaded {
        info!(path = %path.display(), "loaded .env");
    }

    quizforge::adapters::ui::init_ui();

    let cfg = AppConfig::load().unwrap_or_default();

    let ai: Arc<dyn AiPort> = if cfg.is_ai_configured() {
        info!(
            model = %cfg.ai_model_or_default(),
            url = %cfg.ai_api_url_or_default(),
            "quiz generation enabled with Gemini adapter"
        );
        Arc::new(GeminiAdapter::new(
            cfg.ai_api_url_or_default(),
            cfg.ai_api_key().unwrap_or_default(),
            cfg.ai_model_or_default(),
            Duration::from_secs(cfg.request_timeout_secs_or_default()),
        ))
    } else {
        warn!("QUIZFORGE_AI_API_KEY not set, using mock AI adapter");
        Arc::new(MockAiAdapter::new())
    };

    let generator = Arc::new(GeneratorService::new(ai));
    let input_port: Arc<dyn InputPort> = Arc::new(TuiInputPort::new(generator));

    input_port
        .run()
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    Ok(())
}
