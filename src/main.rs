//! Finance display server binary.
//!
//! Serves the data-entry form and kiosk chart as static files, and the
//! JSON API (records plus the pay engine) under `/api`.

use axum::Router;
use tower_http::services::{ServeDir, ServeFile};
use tracing::info;
use tracing_subscriber::EnvFilter;

use finance_display::api::{AppState, create_router};
use finance_display::config;
use finance_display::store::FinanceStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config_path =
        std::env::var("FINANCE_CONFIG").unwrap_or_else(|_| "config/server.yaml".to_string());
    let config = config::load_or_default(&config_path)?;

    let store = FinanceStore::load(&config.data_file)?;
    info!(
        data_file = %config.data_file,
        work_logs = store.work_logs().len(),
        snapshots = store.balance_snapshots().len(),
        "Loaded finance data"
    );

    let state = AppState::new(store, config.chart.clone());

    // Static frontend with SPA fallback to index.html.
    let index = format!("{}/index.html", config.static_dir);
    let serve_dir = ServeDir::new(&config.static_dir)
        .append_index_html_on_directories(true)
        .not_found_service(ServeFile::new(index));

    let app = Router::new()
        .nest("/api", create_router(state))
        .fallback_service(serve_dir);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    info!(port = config.port, "Finance display server listening");
    axum::serve(listener, app).await?;
    Ok(())
}
