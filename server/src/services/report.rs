//! Report service — submission, listing, and review mutations.
//!
//! DESIGN
//! ======
//! Reports are immutable after creation except for the review fields
//! (status, teacher notes) and the stored recommendation. Selection payloads
//! are stored as JSONB in the shared wire shape so the client reads rows
//! back without translation.
//!
//! ERROR HANDLING
//! ==============
//! Step-gating on the client should prevent invalid drafts from ever
//! reaching `create_report`; validation here guards direct API callers.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use reports::{BodyMapPoint, Frequency, Recommendation, Report, ReportDraft, ReportStatus};

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("invalid report: {0}")]
    Validation(String),
    #[error("report not found: {0}")]
    NotFound(Uuid),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("corrupt report row {id}: {detail}")]
    Corrupt { id: Uuid, detail: String },
}

/// Row tuple matching [`REPORT_COLUMNS`].
type ReportRow = (
    Uuid,
    String,
    String,
    serde_json::Value,
    Option<serde_json::Value>,
    serde_json::Value,
    serde_json::Value,
    String,
    serde_json::Value,
    String,
    Option<String>,
    DateTime<Utc>,
);

const REPORT_COLUMNS: &str = "id, student_id, student_name, symbols, body_map, emotion, location, \
                              frequency, safety, status, teacher_notes, created_at";

// =============================================================================
// DRAFT PREPARATION
// =============================================================================

/// Normalize and validate an incoming draft: trim the student name and
/// re-derive every body-map point's region from its coordinate so the
/// classifier is authoritative regardless of what the client sent.
///
/// # Errors
///
/// Returns [`ReportError::Validation`] when the submittability invariant does
/// not hold.
pub fn prepare_draft(mut draft: ReportDraft) -> Result<ReportDraft, ReportError> {
    draft.student_name = draft.student_name.trim().to_owned();
    draft.body_map = draft
        .body_map
        .iter()
        .map(|p| BodyMapPoint::new(p.x, p.y))
        .collect();
    draft
        .validate()
        .map_err(|e| ReportError::Validation(e.to_string()))?;
    Ok(draft)
}

// =============================================================================
// CRUD
// =============================================================================

/// Validate a draft and persist it as a new pending report.
///
/// # Errors
///
/// Returns a validation error for an unsubmittable draft or a database error
/// if the insert fails.
pub async fn create_report(pool: &PgPool, draft: ReportDraft) -> Result<Report, ReportError> {
    let draft = prepare_draft(draft)?;

    let report = Report {
        id: Uuid::new_v4(),
        student_id: draft.student_id,
        student_name: draft.student_name,
        symbols: draft.symbols,
        body_map: draft.body_map,
        emotion: draft.emotion,
        location: draft.location,
        frequency: draft.frequency,
        safety: draft.safety,
        status: ReportStatus::Pending,
        teacher_notes: None,
        timestamp: Utc::now(),
    };

    let body_map_json = if report.body_map.is_empty() {
        None
    } else {
        Some(to_json(report.id, &report.body_map)?)
    };

    sqlx::query(
        "INSERT INTO reports (id, student_id, student_name, symbols, body_map, emotion, location, \
         frequency, safety, status, created_at) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)",
    )
    .bind(report.id)
    .bind(&report.student_id)
    .bind(&report.student_name)
    .bind(to_json(report.id, &report.symbols)?)
    .bind(body_map_json)
    .bind(to_json(report.id, &report.emotion)?)
    .bind(to_json(report.id, &report.location)?)
    .bind(report.frequency.as_str())
    .bind(to_json(report.id, &report.safety)?)
    .bind(report.status.as_str())
    .bind(report.timestamp)
    .execute(pool)
    .await?;

    info!(report_id = %report.id, student = %report.student_name, "report created");
    Ok(report)
}

/// List all reports, newest first.
///
/// # Errors
///
/// Returns a database error if the query fails or a corrupt-row error if a
/// stored payload no longer deserializes.
pub async fn list_reports(pool: &PgPool) -> Result<Vec<Report>, ReportError> {
    let rows = sqlx::query_as::<_, ReportRow>(&format!(
        "SELECT {REPORT_COLUMNS} FROM reports ORDER BY created_at DESC, id DESC"
    ))
    .fetch_all(pool)
    .await?;

    rows.into_iter().map(row_to_report).collect()
}

/// Fetch one report by id.
///
/// # Errors
///
/// Returns `NotFound` for an unknown id, otherwise database/corrupt-row
/// errors as for [`list_reports`].
pub async fn get_report(pool: &PgPool, id: Uuid) -> Result<Report, ReportError> {
    let row = sqlx::query_as::<_, ReportRow>(&format!("SELECT {REPORT_COLUMNS} FROM reports WHERE id = $1"))
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or(ReportError::NotFound(id))?;

    row_to_report(row)
}

/// Change the review status of a report.
///
/// # Errors
///
/// Returns `NotFound` for an unknown id or a database error.
pub async fn update_status(pool: &PgPool, id: Uuid, status: ReportStatus) -> Result<(), ReportError> {
    let result = sqlx::query("UPDATE reports SET status = $2 WHERE id = $1")
        .bind(id)
        .bind(status.as_str())
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(ReportError::NotFound(id));
    }
    info!(report_id = %id, status = status.as_str(), "report status updated");
    Ok(())
}

/// Replace the teacher notes on a report.
///
/// # Errors
///
/// Returns `NotFound` for an unknown id or a database error.
pub async fn update_notes(pool: &PgPool, id: Uuid, notes: &str) -> Result<(), ReportError> {
    let result = sqlx::query("UPDATE reports SET teacher_notes = $2 WHERE id = $1")
        .bind(id)
        .bind(notes)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(ReportError::NotFound(id));
    }
    Ok(())
}

// =============================================================================
// STORED RECOMMENDATIONS
// =============================================================================

/// Persist a generated recommendation on its report row.
///
/// # Errors
///
/// Returns `NotFound` for an unknown id or a database error.
pub async fn save_recommendation(pool: &PgPool, id: Uuid, recommendation: &Recommendation) -> Result<(), ReportError> {
    let result = sqlx::query("UPDATE reports SET recommendations = $2 WHERE id = $1")
        .bind(id)
        .bind(to_json(id, recommendation)?)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(ReportError::NotFound(id));
    }
    Ok(())
}

/// Load the stored recommendation for a report, if any.
///
/// # Errors
///
/// Returns `NotFound` for an unknown id, otherwise database/corrupt-row
/// errors.
pub async fn get_recommendation(pool: &PgPool, id: Uuid) -> Result<Option<Recommendation>, ReportError> {
    let row = sqlx::query_as::<_, (Option<serde_json::Value>,)>("SELECT recommendations FROM reports WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or(ReportError::NotFound(id))?;

    match row.0 {
        None => Ok(None),
        Some(value) => serde_json::from_value(value)
            .map(Some)
            .map_err(|e| ReportError::Corrupt { id, detail: e.to_string() }),
    }
}

// =============================================================================
// ROW MAPPING
// =============================================================================

fn to_json<T: serde::Serialize>(id: Uuid, value: &T) -> Result<serde_json::Value, ReportError> {
    serde_json::to_value(value).map_err(|e| ReportError::Corrupt { id, detail: e.to_string() })
}

pub(crate) fn row_to_report(row: ReportRow) -> Result<Report, ReportError> {
    let (id, student_id, student_name, symbols, body_map, emotion, location, frequency, safety, status, teacher_notes, created_at) =
        row;

    let corrupt = |detail: String| ReportError::Corrupt { id, detail };

    let symbols = serde_json::from_value(symbols).map_err(|e| corrupt(e.to_string()))?;
    let body_map = match body_map {
        None => Vec::new(),
        Some(value) => serde_json::from_value(value).map_err(|e| corrupt(e.to_string()))?,
    };
    let emotion = serde_json::from_value(emotion).map_err(|e| corrupt(e.to_string()))?;
    let location = serde_json::from_value(location).map_err(|e| corrupt(e.to_string()))?;
    let safety = serde_json::from_value(safety).map_err(|e| corrupt(e.to_string()))?;
    let frequency = Frequency::parse(&frequency).ok_or_else(|| corrupt(format!("unknown frequency '{frequency}'")))?;
    let status = ReportStatus::parse(&status).ok_or_else(|| corrupt(format!("unknown status '{status}'")))?;

    Ok(Report {
        id,
        student_id,
        student_name,
        symbols,
        body_map,
        emotion,
        location,
        frequency,
        safety,
        status,
        teacher_notes,
        timestamp: created_at,
    })
}

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;
