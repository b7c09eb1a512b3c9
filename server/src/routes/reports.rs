//! Report routes — submission, review, recommendations, export.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::response::{IntoResponse, Json, Response};
use serde::Deserialize;
use uuid::Uuid;

use reports::{Recommendation, Report, ReportDraft, ReportStatus};

use crate::routes::auth::AuthUser;
use crate::services::recommend::{self, RecommendError};
use crate::services::report::{self, ReportError};
use crate::services::export;
use crate::state::AppState;

pub(crate) fn report_error_to_status(err: &ReportError) -> StatusCode {
    match err {
        ReportError::Validation(_) => StatusCode::BAD_REQUEST,
        ReportError::NotFound(_) => StatusCode::NOT_FOUND,
        ReportError::Database(_) | ReportError::Corrupt { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub(crate) fn recommend_error_to_status(err: &RecommendError) -> StatusCode {
    match err {
        RecommendError::NotConfigured => StatusCode::SERVICE_UNAVAILABLE,
        RecommendError::Llm(_) | RecommendError::Parse(_) => StatusCode::BAD_GATEWAY,
    }
}

// =============================================================================
// SUBMISSION (public)
// =============================================================================

/// `POST /api/reports` — validate and create a report from a composer draft.
pub async fn create_report(
    State(state): State<AppState>,
    Json(draft): Json<ReportDraft>,
) -> Result<(StatusCode, Json<Report>), StatusCode> {
    let created = report::create_report(&state.pool, draft).await.map_err(|e| {
        tracing::warn!(error = %e, "report submission rejected");
        report_error_to_status(&e)
    })?;
    Ok((StatusCode::CREATED, Json(created)))
}

// =============================================================================
// REVIEW (teacher session)
// =============================================================================

/// `GET /api/reports` — all reports, newest first.
pub async fn list_reports(State(state): State<AppState>, _auth: AuthUser) -> Result<Json<Vec<Report>>, StatusCode> {
    let rows = report::list_reports(&state.pool)
        .await
        .map_err(|e| report_error_to_status(&e))?;
    Ok(Json(rows))
}

/// `GET /api/reports/:id` — one report.
pub async fn get_report(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Report>, StatusCode> {
    let row = report::get_report(&state.pool, id)
        .await
        .map_err(|e| report_error_to_status(&e))?;
    Ok(Json(row))
}

#[derive(Deserialize)]
pub struct UpdateStatusBody {
    pub status: String,
}

/// `PATCH /api/reports/:id/status` — change review status.
pub async fn update_status(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateStatusBody>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    let Some(status) = ReportStatus::parse(&body.status) else {
        return Err(StatusCode::BAD_REQUEST);
    };

    report::update_status(&state.pool, id, status)
        .await
        .map_err(|e| report_error_to_status(&e))?;
    Ok(Json(serde_json::json!({ "ok": true })))
}

#[derive(Deserialize)]
pub struct UpdateNotesBody {
    pub notes: String,
}

/// `PATCH /api/reports/:id/notes` — replace teacher notes.
pub async fn update_notes(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateNotesBody>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    report::update_notes(&state.pool, id, &body.notes)
        .await
        .map_err(|e| report_error_to_status(&e))?;
    Ok(Json(serde_json::json!({ "ok": true })))
}

// =============================================================================
// RECOMMENDATIONS (teacher session)
// =============================================================================

/// `POST /api/reports/:id/recommendations` — generate via the LLM, persist,
/// and return the recommendation.
pub async fn generate_recommendation(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Recommendation>, StatusCode> {
    let Some(llm) = state.llm.clone() else {
        return Err(recommend_error_to_status(&RecommendError::NotConfigured));
    };

    let row = report::get_report(&state.pool, id)
        .await
        .map_err(|e| report_error_to_status(&e))?;

    let recommendation = recommend::generate(&llm, &row).await.map_err(|e| {
        tracing::warn!(report_id = %id, error = %e, "recommendation generation failed");
        recommend_error_to_status(&e)
    })?;

    report::save_recommendation(&state.pool, id, &recommendation)
        .await
        .map_err(|e| report_error_to_status(&e))?;

    Ok(Json(recommendation))
}

/// `GET /api/reports/:id/recommendations` — stored recommendation or 404.
pub async fn get_recommendation(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Recommendation>, StatusCode> {
    let stored = report::get_recommendation(&state.pool, id)
        .await
        .map_err(|e| report_error_to_status(&e))?
        .ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(stored))
}

// =============================================================================
// EXPORT (teacher session)
// =============================================================================

/// `GET /api/reports/:id/export.md` — download the report (with any stored
/// recommendation) as a markdown document.
pub async fn export_markdown(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Response, StatusCode> {
    let row = report::get_report(&state.pool, id)
        .await
        .map_err(|e| report_error_to_status(&e))?;
    let recommendation = report::get_recommendation(&state.pool, id)
        .await
        .map_err(|e| report_error_to_status(&e))?;

    let body = export::render_markdown(&row, recommendation.as_ref());
    let filename = export::export_filename(&row);

    Ok((
        [
            (CONTENT_TYPE, "text/markdown; charset=utf-8".to_owned()),
            (CONTENT_DISPOSITION, format!("attachment; filename=\"{filename}\"")),
        ],
        body,
    )
        .into_response())
}

#[cfg(test)]
#[path = "reports_test.rs"]
mod tests;
