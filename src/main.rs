use axum::{
    Json, Router,
    extract::Extension,
    routing::{get, post, put},
};
use paper_portal::catalog::handlers::{handle_create_paper, handle_list_papers, handle_search};
use paper_portal::catalog::store::PaperCatalog;
use paper_portal::logbook::handlers::{handle_delete_log, handle_list_logs, handle_review_log};
use paper_portal::logbook::store::LogBook;
use paper_portal::report::handlers::handle_report;
use paper_portal::trending::handlers::handle_trending;
use serde_json::{Value, json};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let bind_addr = std::env::var("PORTAL_BIND").unwrap_or_else(|_| "127.0.0.1:8005".to_string());

    // 1. Shared stores:
    let catalog = Arc::new(PaperCatalog::new());
    let logbook = Arc::new(LogBook::new());

    // 2. Optional catalog seed:
    if let Ok(seed_path) = std::env::var("PAPERS_SEED") {
        match catalog.load_seed(&seed_path) {
            Ok(count) => {
                tracing::info!("Seeded catalog with {} paper(s) from {}", count, seed_path)
            }
            Err(e) => tracing::warn!("Failed to load catalog seed {}: {:#}", seed_path, e),
        }
    }

    // 3. HTTP Router:
    let app = Router::new()
        .route("/", get(handle_root))
        .route("/search", post(handle_search))
        .route("/search/logs", get(handle_list_logs))
        .route(
            "/search/logs/:id",
            put(handle_review_log).delete(handle_delete_log),
        )
        .route("/trending", get(handle_trending))
        .route("/report", post(handle_report))
        .route("/papers", post(handle_create_paper).get(handle_list_papers))
        .route("/stats", get(handle_stats))
        .layer(Extension(catalog.clone()))
        .layer(Extension(logbook.clone()));

    // 4. Spawn stats reporter:
    let stats_catalog = catalog.clone();
    let stats_logbook = logbook.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(std::time::Duration::from_secs(60));

        loop {
            interval.tick().await;
            tracing::info!(
                "Portal stats: {} paper(s), {} search log entries",
                stats_catalog.len(),
                stats_logbook.len()
            );
        }
    });

    // 5. Start HTTP server:
    tracing::info!("Portal listening on {}", bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn handle_root() -> Json<Value> {
    Json(json!({
        "service": "paper-portal",
        "status": "ok",
    }))
}

async fn handle_stats(
    Extension(catalog): Extension<Arc<PaperCatalog>>,
    Extension(logbook): Extension<Arc<LogBook>>,
) -> Json<Value> {
    Json(json!({
        "papers": catalog.len(),
        "log_entries": logbook.len(),
    }))
}
