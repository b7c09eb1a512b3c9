use super::*;
use crate::llm::types::LlmError;

#[test]
fn report_error_status_mapping() {
    assert_eq!(
        report_error_to_status(&ReportError::Validation("empty".into())),
        StatusCode::BAD_REQUEST
    );
    assert_eq!(
        report_error_to_status(&ReportError::NotFound(Uuid::nil())),
        StatusCode::NOT_FOUND
    );
    assert_eq!(
        report_error_to_status(&ReportError::Corrupt { id: Uuid::nil(), detail: "bad".into() }),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}

#[test]
fn recommend_error_status_mapping() {
    assert_eq!(
        recommend_error_to_status(&RecommendError::NotConfigured),
        StatusCode::SERVICE_UNAVAILABLE
    );
    assert_eq!(
        recommend_error_to_status(&RecommendError::Parse("bad".into())),
        StatusCode::BAD_GATEWAY
    );
    assert_eq!(
        recommend_error_to_status(&RecommendError::Llm(LlmError::ApiRequest("timeout".into()))),
        StatusCode::BAD_GATEWAY
    );
}

#[test]
fn update_status_body_rejects_unknown_status() {
    // The handler gate is ReportStatus::parse; exercise it the way the
    // handler does.
    let body = UpdateStatusBody { status: "escalated".to_owned() };
    assert!(ReportStatus::parse(&body.status).is_none());

    let body = UpdateStatusBody { status: "reviewed".to_owned() };
    assert_eq!(ReportStatus::parse(&body.status), Some(ReportStatus::Reviewed));
}
