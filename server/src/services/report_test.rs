use super::*;
use reports::{BodyPart, EmotionRating, Location, SafetyRating, Symbol, SymbolCategory};

fn sample_draft() -> ReportDraft {
    ReportDraft {
        student_id: "student-1".to_owned(),
        student_name: "  Alex  ".to_owned(),
        symbols: vec![Symbol {
            id: "hit".to_owned(),
            label: "Hitting".to_owned(),
            category: SymbolCategory::Physical,
        }],
        body_map: vec![BodyMapPoint { x: 50.0, y: 60.0, body_part: BodyPart::Head }],
        emotion: EmotionRating::new(4),
        location: Location { id: "playground".to_owned(), name: "Playground".to_owned(), icon: "🛝".to_owned() },
        frequency: Frequency::Often,
        safety: SafetyRating::new(5),
    }
}

fn sample_row() -> ReportRow {
    let draft = sample_draft();
    (
        Uuid::new_v4(),
        draft.student_id,
        "Alex".to_owned(),
        serde_json::to_value(&draft.symbols).unwrap(),
        Some(serde_json::to_value(&draft.body_map).unwrap()),
        serde_json::to_value(draft.emotion).unwrap(),
        serde_json::to_value(&draft.location).unwrap(),
        "often".to_owned(),
        serde_json::to_value(draft.safety).unwrap(),
        "pending".to_owned(),
        None,
        Utc::now(),
    )
}

// =============================================================================
// DRAFT PREPARATION
// =============================================================================

#[test]
fn prepare_draft_trims_student_name() {
    let prepared = prepare_draft(sample_draft()).unwrap();
    assert_eq!(prepared.student_name, "Alex");
}

#[test]
fn prepare_draft_rederives_body_parts_from_y() {
    // Client claimed "head" for y=60; the classifier says arms.
    let prepared = prepare_draft(sample_draft()).unwrap();
    assert_eq!(prepared.body_map[0].body_part, BodyPart::Arms);
}

#[test]
fn prepare_draft_rejects_empty_symbols() {
    let mut draft = sample_draft();
    draft.symbols.clear();
    let err = prepare_draft(draft).unwrap_err();
    assert!(matches!(err, ReportError::Validation(_)));
}

#[test]
fn prepare_draft_rejects_whitespace_only_name() {
    let mut draft = sample_draft();
    draft.student_name = "\t \n".to_owned();
    assert!(matches!(prepare_draft(draft), Err(ReportError::Validation(_))));
}

#[test]
fn prepare_draft_accepts_empty_body_map_without_physical_symbol() {
    let mut draft = sample_draft();
    draft.symbols = vec![Symbol {
        id: "names".to_owned(),
        label: "Name-calling".to_owned(),
        category: SymbolCategory::Verbal,
    }];
    draft.body_map.clear();
    assert!(prepare_draft(draft).is_ok());
}

// =============================================================================
// ROW MAPPING
// =============================================================================

#[test]
fn row_to_report_maps_all_fields() {
    let row = sample_row();
    let id = row.0;
    let report = row_to_report(row).unwrap();
    assert_eq!(report.id, id);
    assert_eq!(report.student_name, "Alex");
    assert_eq!(report.symbols.len(), 1);
    assert_eq!(report.frequency, Frequency::Often);
    assert_eq!(report.status, ReportStatus::Pending);
    assert!(report.teacher_notes.is_none());
}

#[test]
fn row_to_report_null_body_map_becomes_empty_vec() {
    let mut row = sample_row();
    row.4 = None;
    let report = row_to_report(row).unwrap();
    assert!(report.body_map.is_empty());
}

#[test]
fn row_to_report_rejects_unknown_status() {
    let mut row = sample_row();
    row.9 = "archived".to_owned();
    assert!(matches!(row_to_report(row), Err(ReportError::Corrupt { .. })));
}

#[test]
fn row_to_report_rejects_unknown_frequency() {
    let mut row = sample_row();
    row.7 = "never".to_owned();
    assert!(matches!(row_to_report(row), Err(ReportError::Corrupt { .. })));
}

#[test]
fn row_to_report_rejects_malformed_symbols_payload() {
    let mut row = sample_row();
    row.3 = serde_json::json!({"not": "a list"});
    assert!(matches!(row_to_report(row), Err(ReportError::Corrupt { .. })));
}
