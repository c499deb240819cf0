//! Biaslens Web Server
//!
//! Run with: cargo run -p biaslens-web

use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use biaslens_llm::backend::{LlmBackend, LlmRequest, Message, OllamaBackend};
use biaslens_llm::secondary::OpenAiSecondary;
use biaslens_web::config::Config;
use biaslens_web::router::build_router;
use biaslens_web::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = Config::load()?;
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;

    let primary: Arc<dyn LlmBackend> =
        Arc::new(OllamaBackend::new(&config.llm.base_url, &config.llm.model));

    if config.llm.warm_up {
        info!(model = %config.llm.model, "probing primary analysis model");
        warm_up(primary.as_ref()).await?;
    }

    let secondary = Arc::new(OpenAiSecondary::new(
        &config.providers.openai.model,
        &config.providers.openai.api_key_env,
    ));

    let state = AppState::new(config, primary, secondary);
    let app = build_router(state);

    info!("biaslens listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Readiness probe against the primary model; fails process startup on error.
async fn warm_up(backend: &dyn LlmBackend) -> anyhow::Result<()> {
    let req = LlmRequest {
        messages: vec![Message::system("Checking model availability")],
        model: None,
        max_tokens: Some(1),
        temperature: Some(0.0),
    };
    backend
        .complete(req)
        .await
        .map_err(|e| anyhow::anyhow!("primary model probe failed: {e}"))?;
    Ok(())
}
