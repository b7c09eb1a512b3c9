use super::*;
use chrono::Utc;
use uuid::Uuid;

use reports::{
    BodyMapPoint, EmotionRating, Frequency, Location, ReportStatus, SafetyRating, Symbol, SymbolCategory, Urgency,
};

use crate::llm::types::{ChatResponse, ContentBlock};

fn sample_report() -> Report {
    Report {
        id: Uuid::new_v4(),
        student_id: "student-1".to_owned(),
        student_name: "Alex".to_owned(),
        symbols: vec![
            Symbol { id: "hit".to_owned(), label: "Hitting".to_owned(), category: SymbolCategory::Physical },
            Symbol { id: "names".to_owned(), label: "Name-calling".to_owned(), category: SymbolCategory::Verbal },
        ],
        body_map: vec![BodyMapPoint::new(50.0, 30.0)],
        emotion: EmotionRating::new(4),
        location: Location { id: "playground".to_owned(), name: "Playground".to_owned(), icon: "🛝".to_owned() },
        frequency: Frequency::Often,
        safety: SafetyRating::new(5),
        status: ReportStatus::Pending,
        teacher_notes: None,
        timestamp: Utc::now(),
    }
}

fn recommendation_json() -> String {
    serde_json::json!({
        "summary": "Alex reports frequent physical and verbal harassment on the playground.",
        "urgency": "high",
        "immediateActions": ["Speak with Alex privately today."],
        "shortTermActions": ["Brief the playground supervisors."],
        "longTermActions": ["Plan a class session on bystander behavior."],
        "resources": ["School counselor"],
        "notes": "Safety level 5/5 with 'often' frequency suggests an established pattern."
    })
    .to_string()
}

// =============================================================================
// PROMPT CONSTRUCTION
// =============================================================================

#[test]
fn summary_includes_core_facts() {
    let report = sample_report();
    let summary = build_report_summary(&report);
    assert!(summary.contains("Alex"));
    assert!(summary.contains("Hitting (physical)"));
    assert!(summary.contains("Name-calling (verbal)"));
    assert!(summary.contains("Playground"));
    assert!(summary.contains("level 4/5"));
    assert!(summary.contains("level 5/5"));
    assert!(summary.contains("Often"));
}

#[test]
fn summary_includes_body_regions_for_physical_reports() {
    let summary = build_report_summary(&sample_report());
    assert!(summary.contains("body regions marked: chest"));
}

#[test]
fn summary_omits_body_regions_without_physical_symbols() {
    let mut report = sample_report();
    report.symbols.retain(|s| s.category != SymbolCategory::Physical);
    let summary = build_report_summary(&report);
    assert!(!summary.contains("body regions"));
}

#[test]
fn summary_includes_teacher_notes_when_present() {
    let mut report = sample_report();
    report.teacher_notes = Some("Spoke with Alex's parents.".to_owned());
    let summary = build_report_summary(&report);
    assert!(summary.contains("Spoke with Alex's parents."));
}

#[test]
fn system_prompt_demands_json_only() {
    let prompt = build_system_prompt();
    assert!(prompt.contains("single JSON object"));
    assert!(prompt.contains("immediateActions"));
}

// =============================================================================
// RESPONSE PARSING
// =============================================================================

#[test]
fn parse_accepts_bare_json() {
    let rec = parse_recommendation(&recommendation_json()).unwrap();
    assert_eq!(rec.urgency, Urgency::High);
    assert_eq!(rec.immediate_actions.len(), 1);
}

#[test]
fn parse_accepts_fenced_json() {
    let fenced = format!("Here you go:\n```json\n{}\n```\nHope that helps.", recommendation_json());
    let rec = parse_recommendation(&fenced).unwrap();
    assert_eq!(rec.urgency, Urgency::High);
}

#[test]
fn parse_rejects_prose_without_json() {
    let err = parse_recommendation("I cannot help with that.").unwrap_err();
    assert!(matches!(err, RecommendError::Parse(_)));
}

#[test]
fn parse_rejects_wrong_shape() {
    let err = parse_recommendation(r#"{"foo": 1}"#).unwrap_err();
    assert!(matches!(err, RecommendError::Parse(_)));
}

#[test]
fn parse_rejects_unknown_urgency() {
    let mut value: serde_json::Value = serde_json::from_str(&recommendation_json()).unwrap();
    value["urgency"] = serde_json::json!("extreme");
    let err = parse_recommendation(&value.to_string()).unwrap_err();
    assert!(matches!(err, RecommendError::Parse(_)));
}

// =============================================================================
// GENERATION (mock LLM)
// =============================================================================

struct MockLlm {
    reply: String,
}

#[async_trait::async_trait]
impl LlmChat for MockLlm {
    async fn chat(
        &self,
        _max_tokens: u32,
        _system: &str,
        _messages: &[crate::llm::types::Message],
    ) -> Result<ChatResponse, crate::llm::types::LlmError> {
        Ok(ChatResponse {
            content: vec![ContentBlock::Text { text: self.reply.clone() }],
            model: "mock".into(),
            stop_reason: "end_turn".into(),
            input_tokens: 1,
            output_tokens: 1,
        })
    }
}

#[tokio::test]
async fn generate_parses_mock_reply() {
    let llm: Arc<dyn LlmChat> = Arc::new(MockLlm { reply: recommendation_json() });
    let rec = generate(&llm, &sample_report()).await.unwrap();
    assert_eq!(rec.urgency, Urgency::High);
    assert!(rec.summary.contains("Alex"));
}

#[tokio::test]
async fn generate_surfaces_parse_failure() {
    let llm: Arc<dyn LlmChat> = Arc::new(MockLlm { reply: "no json here".to_owned() });
    let err = generate(&llm, &sample_report()).await.unwrap_err();
    assert!(matches!(err, RecommendError::Parse(_)));
}
