use std::sync::Arc;

use anyhow::Context;
use intellitask::{app_state::AppState, data_access::data_context::DataContext, map_routes, settings::Settings};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.log_filter)),
        )
        .init();

    // ── Storage ────────────────────────────────────────────────
    let data_context = DataContext::new(&settings.database_path)
        .with_context(|| format!("cannot open database {}", settings.database_path))?;

    data_context.ensure_default_user(&settings)?;

    // ── Router ─────────────────────────────────────────────────
    let addr = settings.socket_address();
    let static_dir = settings.static_dir.clone();
    let state = Arc::new(AppState { data_context, settings });

    let mut app = map_routes(state);
    if let Some(dir) = static_dir {
        app = app.fallback_service(ServeDir::new(dir).append_index_html_on_directories(true));
    }
    let app = app.layer(
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
    );

    // ── Start ──────────────────────────────────────────────────
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("cannot bind {addr}"))?;
    info!(%addr, "server running");
    axum::serve(listener, app).await?;
    Ok(())
}
