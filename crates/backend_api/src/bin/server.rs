use ai_client::{GeminiClient, GeminiClientConfig};
use backend_api::{init_tracing, run_server};
use planner::PlanService;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    // Settings file (optional) + HOST/PORT/GEMINI_* environment overrides
    let settings = match settings_loader::load_server_settings() {
        Ok(settings) => settings,
        Err(err) => {
            tracing::error!("[FATAL] Could not load settings: {err:#}");
            std::process::exit(1);
        }
    };

    // The API key is required up front; without it every request would fail.
    let config = match GeminiClientConfig::from_settings(&settings) {
        Ok(config) => config,
        Err(err) => {
            tracing::error!("[FATAL] {err:#}");
            tracing::error!("        Export the key before starting, e.g. GEMINI_API_KEY=... cargo run --bin server");
            std::process::exit(1);
        }
    };

    let client = match GeminiClient::new(config) {
        Ok(client) => client,
        Err(err) => {
            tracing::error!("[FATAL] Could not create the Gemini client: {err:#}");
            std::process::exit(1);
        }
    };

    tracing::info!(
        model = client.model(),
        timeout_secs = settings.request_timeout_secs,
        "Financial Plan API Server"
    );

    let service = Arc::new(PlanService::new(Arc::new(client)));

    run_server(service, &settings.host, settings.port).await?;

    Ok(())
}
