use super::*;
use chrono::Utc;
use uuid::Uuid;

use reports::{
    BodyMapPoint, EmotionRating, Frequency, Location, ReportStatus, SafetyRating, Symbol, SymbolCategory, Urgency,
};

fn sample_report() -> Report {
    Report {
        id: Uuid::new_v4(),
        student_id: "student-1".to_owned(),
        student_name: "Alex".to_owned(),
        symbols: vec![Symbol {
            id: "hit".to_owned(),
            label: "Hitting".to_owned(),
            category: SymbolCategory::Physical,
        }],
        body_map: vec![BodyMapPoint::new(50.0, 10.0), BodyMapPoint::new(40.0, 60.0)],
        emotion: EmotionRating::new(3),
        location: Location { id: "gym".to_owned(), name: "Gym".to_owned(), icon: "⚽".to_owned() },
        frequency: Frequency::Sometimes,
        safety: SafetyRating::new(4),
        status: ReportStatus::Reviewed,
        teacher_notes: Some("Follow-up scheduled.".to_owned()),
        timestamp: Utc::now(),
    }
}

fn sample_recommendation() -> Recommendation {
    Recommendation {
        summary: "Physical incidents in the gym.".to_owned(),
        urgency: Urgency::Medium,
        immediate_actions: vec!["Check in with Alex.".to_owned()],
        short_term_actions: vec![],
        long_term_actions: vec!["Review gym supervision.".to_owned()],
        resources: vec!["PE staff".to_owned()],
        notes: String::new(),
    }
}

#[test]
fn markdown_contains_header_and_facts() {
    let md = render_markdown(&sample_report(), None);
    assert!(md.starts_with("# Incident Report — Alex"));
    assert!(md.contains("Hitting (physical)"));
    assert!(md.contains("**Location:** ⚽ Gym"));
    assert!(md.contains("**Frequency:** Sometimes"));
    assert!(md.contains("**Status:** Reviewed"));
}

#[test]
fn markdown_lists_body_regions_in_click_order() {
    let md = render_markdown(&sample_report(), None);
    let head = md.find("1. head").expect("first region");
    let arms = md.find("2. arms").expect("second region");
    assert!(head < arms);
}

#[test]
fn markdown_omits_body_section_without_physical_symbols() {
    let mut report = sample_report();
    report.symbols[0].category = SymbolCategory::Verbal;
    let md = render_markdown(&report, None);
    assert!(!md.contains("## Body regions"));
}

#[test]
fn markdown_includes_teacher_notes() {
    let md = render_markdown(&sample_report(), None);
    assert!(md.contains("## Teacher notes"));
    assert!(md.contains("Follow-up scheduled."));
}

#[test]
fn markdown_without_recommendation_has_no_recommendation_section() {
    let md = render_markdown(&sample_report(), None);
    assert!(!md.contains("## Recommendations"));
}

#[test]
fn markdown_renders_recommendation_sections() {
    let md = render_markdown(&sample_report(), Some(&sample_recommendation()));
    assert!(md.contains("## Recommendations (medium urgency)"));
    assert!(md.contains("### Immediate actions"));
    assert!(md.contains("- Check in with Alex."));
    // Empty action groups and blank notes are skipped.
    assert!(!md.contains("### Short-term actions"));
    assert!(!md.contains("### Analysis notes"));
}

#[test]
fn export_filename_embeds_report_id() {
    let report = sample_report();
    let name = export_filename(&report);
    assert!(name.starts_with("report-"));
    assert!(name.ends_with(".md"));
    assert!(name.contains(&report.id.to_string()));
}
