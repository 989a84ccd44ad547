use std::net::SocketAddr;
use std::sync::Arc;

use planner::PlanService;

use crate::router::create_router;

const DEFAULT_LOG_FILTER: &str = "backend_api=debug,planner=debug,ai_client=info,tower_http=debug";

/// Initialize tracing. `RUST_LOG` overrides the default filter.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .init();
}

/// Run the API server until Ctrl+C
pub async fn run_server(service: Arc<PlanService>, host: &str, port: u16) -> anyhow::Result<()> {
    let app = create_router(service);

    let addr = format!("{}:{}", host, port).parse::<SocketAddr>()?;
    tracing::info!("Starting server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl+C: {err}");
        std::future::pending::<()>().await;
    }
}
