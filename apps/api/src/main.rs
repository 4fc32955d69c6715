mod artifacts;
mod comparison;
mod config;
mod encoding;
mod errors;
mod inference;
mod lookup;
mod models;
mod prediction;
mod presentation;
mod routes;
mod state;
#[cfg(test)]
mod test_support;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::artifacts::ArtifactBundle;
use crate::config::Config;
use crate::prediction::service::PredictionService;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_CRATE_NAME"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting SalSat API v{}", env!("CARGO_PKG_VERSION"));

    // Tables, models and history are loaded exactly once and shared read-only.
    let bundle = ArtifactBundle::load(&config.artifact_dir).with_context(|| {
        format!(
            "failed to load artifacts from {}",
            config.artifact_dir.display()
        )
    })?;
    let predictor = Arc::new(PredictionService::from_bundle(bundle));
    info!("Prediction service ready");

    let state = AppState { predictor };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
