// Main entry point - Dependency injection and server setup
mod domain;
mod application;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use axum::{routing::get, Router};
use tower_http::services::ServeDir;

use crate::application::dashboard_service::DashboardService;
use crate::application::ingest_service::IngestService;
use crate::application::launch_service::LaunchService;
use crate::infrastructure::config::{load_chart_styles, load_launch_catalog, load_telemetry_config};
use crate::infrastructure::log_repository::repository_for_source;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{get_dashboard, health_check, list_launches};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let telemetry_config = load_telemetry_config()?;
    let catalog = load_launch_catalog()?;
    let styles = load_chart_styles()?;

    // Create repository (infrastructure layer)
    let repository = repository_for_source(&telemetry_config.log.source);

    // Load the log once; the store is frozen for the lifetime of the process.
    // A fetch failure here is the one fatal condition: refuse to start.
    let ingest_service = IngestService::new(repository);
    let store = Arc::new(
        ingest_service
            .load_store()
            .await
            .with_context(|| format!("loading telemetry log from {}", telemetry_config.log.source))?,
    );

    // Create services (application layer)
    let launch_service = LaunchService::new(catalog.clone());
    let dashboard_service = DashboardService::new(catalog, styles);

    // Create application state
    let state = Arc::new(AppState {
        store,
        launch_service,
        dashboard_service,
    });

    // Build router (presentation layer)
    // Note: We handle compression manually in our response builders,
    // so we don't use CompressionLayer to avoid double compression/decompression
    let router = Router::new()
        .route("/healthz", get(health_check))
        .route("/launches", get(list_launches))
        .route("/dashboards/:id", get(get_dashboard))
        .fallback_service(ServeDir::new("assets"))
        .with_state(state);

    // Start server
    let addr: SocketAddr = "0.0.0.0:8080".parse().unwrap();
    println!("Starting staticfire-telemetry service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
