//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the JSON API under `/api` and serves the compiled client bundle as
//! static files for every other path. Report submission and the catalogs are
//! public (students do not authenticate); everything on the review side
//! requires a teacher session.

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, patch, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub mod auth;
pub mod catalog;
pub mod reports;

/// Build the application router.
#[must_use]
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/me", get(auth::me))
        .route("/api/catalog/symbols", get(catalog::list_symbols))
        .route("/api/catalog/locations", get(catalog::list_locations))
        .route("/api/reports", get(reports::list_reports).post(reports::create_report))
        .route("/api/reports/{id}", get(reports::get_report))
        .route("/api/reports/{id}/status", patch(reports::update_status))
        .route("/api/reports/{id}/notes", patch(reports::update_notes))
        .route(
            "/api/reports/{id}/recommendations",
            get(reports::get_recommendation).post(reports::generate_recommendation),
        )
        .route("/api/reports/{id}/export.md", get(reports::export_markdown))
        .route("/healthz", get(healthz))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state);

    let static_service = ServeDir::new(static_dir()).append_index_html_on_directories(true);
    api.fallback_service(static_service)
}

/// Resolve the directory holding the compiled client bundle.
fn static_dir() -> PathBuf {
    std::env::var("STATIC_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../client/dist"))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
