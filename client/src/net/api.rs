//! REST API helpers for communicating with the server.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Host-side: stubs returning [`ApiError::Unavailable`]/`None` so state
//! logic builds and tests without a browser.
//!
//! ERROR HANDLING
//! ==============
//! Failures come back as [`ApiError`] values that callers surface inline;
//! no call here retries automatically. Submission failures leave the
//! composer draft untouched so the user can resubmit.

#![allow(clippy::unused_async)]

use uuid::Uuid;

use reports::{Location, Recommendation, Report, ReportDraft, ReportStatus, Symbol};

use crate::state::auth::TeacherUser;

/// Client-side failure taxonomy for API calls.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApiError {
    /// Transport-level failure (offline, DNS, refused).
    Network(String),
    /// The server answered with a non-success status.
    Status(u16),
    /// The response body did not decode as the expected type.
    Decode(String),
    /// Not running in a browser (host-side stub).
    Unavailable,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Network(detail) => write!(f, "network error: {detail}"),
            Self::Status(404) => write!(f, "not found"),
            Self::Status(code) => write!(f, "server error ({code})"),
            Self::Decode(detail) => write!(f, "unexpected response: {detail}"),
            Self::Unavailable => write!(f, "not available outside the browser"),
        }
    }
}

// =============================================================================
// TRANSPORT (csr only)
// =============================================================================

#[cfg(feature = "csr")]
mod transport {
    use super::ApiError;

    pub async fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, ApiError> {
        let resp = gloo_net::http::Request::get(url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        resp.json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub async fn send_json<T: serde::de::DeserializeOwned, B: serde::Serialize>(
        method: &str,
        url: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let builder = match method {
            "PATCH" => gloo_net::http::Request::patch(url),
            _ => gloo_net::http::Request::post(url),
        };
        let resp = builder
            .json(body)
            .map_err(|e| ApiError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        resp.json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub async fn send_json_no_body<B: serde::Serialize>(method: &str, url: &str, body: &B) -> Result<(), ApiError> {
        let builder = match method {
            "PATCH" => gloo_net::http::Request::patch(url),
            _ => gloo_net::http::Request::post(url),
        };
        let resp = builder
            .json(body)
            .map_err(|e| ApiError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        Ok(())
    }
}

// =============================================================================
// CATALOGS
// =============================================================================

/// Fetch the ordered symbol catalog.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport or decode failure.
pub async fn fetch_symbols() -> Result<Vec<Symbol>, ApiError> {
    #[cfg(feature = "csr")]
    {
        transport::get_json("/api/catalog/symbols").await
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Fetch the ordered location catalog.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport or decode failure.
pub async fn fetch_locations() -> Result<Vec<Location>, ApiError> {
    #[cfg(feature = "csr")]
    {
        transport::get_json("/api/catalog/locations").await
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(ApiError::Unavailable)
    }
}

// =============================================================================
// REPORTS
// =============================================================================

/// Submit a finished draft; returns the created report.
///
/// # Errors
///
/// Returns an [`ApiError`] on rejection or transport failure; the caller's
/// draft is untouched either way.
pub async fn submit_report(draft: &ReportDraft) -> Result<Report, ApiError> {
    #[cfg(feature = "csr")]
    {
        transport::send_json("POST", "/api/reports", draft).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = draft;
        Err(ApiError::Unavailable)
    }
}

/// Fetch the full report collection, newest first.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport or decode failure.
pub async fn fetch_reports() -> Result<Vec<Report>, ApiError> {
    #[cfg(feature = "csr")]
    {
        transport::get_json("/api/reports").await
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Change a report's review status.
///
/// # Errors
///
/// Returns an [`ApiError`] on rejection or transport failure.
pub async fn update_report_status(id: Uuid, status: ReportStatus) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let url = format!("/api/reports/{id}/status");
        let body = serde_json::json!({ "status": status.as_str() });
        transport::send_json_no_body("PATCH", &url, &body).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (id, status);
        Err(ApiError::Unavailable)
    }
}

/// Replace a report's teacher notes.
///
/// # Errors
///
/// Returns an [`ApiError`] on rejection or transport failure.
pub async fn update_report_notes(id: Uuid, notes: &str) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let url = format!("/api/reports/{id}/notes");
        let body = serde_json::json!({ "notes": notes });
        transport::send_json_no_body("PATCH", &url, &body).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (id, notes);
        Err(ApiError::Unavailable)
    }
}

// =============================================================================
// RECOMMENDATIONS
// =============================================================================

/// Generate (or regenerate) the AI recommendation for a report.
///
/// # Errors
///
/// Returns an [`ApiError`]; retry is a manual user action.
pub async fn generate_recommendations(id: Uuid) -> Result<Recommendation, ApiError> {
    #[cfg(feature = "csr")]
    {
        let url = format!("/api/reports/{id}/recommendations");
        transport::send_json("POST", &url, &serde_json::json!({})).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = id;
        Err(ApiError::Unavailable)
    }
}

/// Fetch the stored recommendation, `None` when none was generated yet.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport or decode failure (404 is `None`).
pub async fn fetch_recommendations(id: Uuid) -> Result<Option<Recommendation>, ApiError> {
    #[cfg(feature = "csr")]
    {
        let url = format!("/api/reports/{id}/recommendations");
        match transport::get_json::<Recommendation>(&url).await {
            Ok(rec) => Ok(Some(rec)),
            Err(ApiError::Status(404)) => Ok(None),
            Err(e) => Err(e),
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = id;
        Err(ApiError::Unavailable)
    }
}

// =============================================================================
// AUTH
// =============================================================================

/// Fetch the currently authenticated teacher from `/api/auth/me`.
/// Returns `None` if not authenticated or on the host.
pub async fn fetch_current_user() -> Option<TeacherUser> {
    #[cfg(feature = "csr")]
    {
        transport::get_json("/api/auth/me").await.ok()
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Log in with email and password.
///
/// # Errors
///
/// Returns an [`ApiError`]; 401 means bad credentials.
pub async fn login(email: &str, password: &str) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let body = serde_json::json!({ "email": email, "password": password });
        transport::send_json_no_body("POST", "/api/auth/login", &body).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (email, password);
        Err(ApiError::Unavailable)
    }
}

/// Register a teacher account and start a session.
///
/// # Errors
///
/// Returns an [`ApiError`]; 409 means the email is taken.
pub async fn register(name: &str, email: &str, password: &str) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let body = serde_json::json!({ "name": name, "email": email, "password": password });
        transport::send_json_no_body("POST", "/api/auth/register", &body).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (name, email, password);
        Err(ApiError::Unavailable)
    }
}

/// Log out the current teacher.
pub async fn logout() {
    #[cfg(feature = "csr")]
    {
        let _ = transport::send_json_no_body("POST", "/api/auth/logout", &serde_json::json!({})).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_display_is_user_readable() {
        assert_eq!(ApiError::Status(404).to_string(), "not found");
        assert_eq!(ApiError::Status(502).to_string(), "server error (502)");
        assert!(ApiError::Network("offline".into()).to_string().contains("offline"));
    }

    #[tokio::test]
    async fn host_stubs_report_unavailable() {
        assert_eq!(fetch_symbols().await.unwrap_err(), ApiError::Unavailable);
        assert_eq!(fetch_reports().await.unwrap_err(), ApiError::Unavailable);
        assert!(fetch_current_user().await.is_none());
    }
}
