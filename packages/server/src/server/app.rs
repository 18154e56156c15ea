//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;
use tower_sessions::{MemoryStore, SessionManagerLayer};

use crate::kernel::ResearchDeps;
use crate::server::routes::{
    download_report, health_handler, index, new_research, research, select_history,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub deps: Arc<ResearchDeps>,
}

/// Build the Axum application router
///
/// Sessions live in an in-memory store and vanish with the process, so
/// research history never outlives a server restart.
pub fn build_app(deps: ResearchDeps) -> Router {
    let state = AppState {
        deps: Arc::new(deps),
    };

    // Plain HTTP is expected in development; cookies must not require TLS
    let session_layer = SessionManagerLayer::new(MemoryStore::default()).with_secure(false);

    Router::new()
        .route("/", get(index))
        .route("/research", post(research))
        .route("/history/select", post(select_history))
        .route("/new", post(new_research))
        .route("/reports/:company/download", get(download_report))
        .route("/health", get(health_handler))
        .layer(session_layer)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
