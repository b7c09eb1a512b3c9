use super::*;

fn sample_symbol(id: &str, category: SymbolCategory) -> Symbol {
    Symbol { id: id.to_owned(), label: format!("label-{id}"), category }
}

fn sample_draft() -> ReportDraft {
    ReportDraft {
        student_id: "student-1".to_owned(),
        student_name: "Alex".to_owned(),
        symbols: vec![sample_symbol("s1", SymbolCategory::Physical)],
        body_map: vec![BodyMapPoint::new(50.0, 10.0)],
        emotion: EmotionRating::new(4),
        location: Location { id: "loc1".to_owned(), name: "Playground".to_owned(), icon: "🏃".to_owned() },
        frequency: Frequency::Often,
        safety: SafetyRating::new(5),
    }
}

// =============================================================================
// BODY-PART CLASSIFIER
// =============================================================================

#[test]
fn classifier_band_boundaries_are_half_open() {
    assert_eq!(BodyPart::from_y(14.99), BodyPart::Head);
    assert_eq!(BodyPart::from_y(15.0), BodyPart::Neck);
    assert_eq!(BodyPart::from_y(24.99), BodyPart::Neck);
    assert_eq!(BodyPart::from_y(25.0), BodyPart::Chest);
    assert_eq!(BodyPart::from_y(40.0), BodyPart::Stomach);
    assert_eq!(BodyPart::from_y(55.0), BodyPart::Arms);
    assert_eq!(BodyPart::from_y(70.0), BodyPart::Legs);
    assert_eq!(BodyPart::from_y(85.0), BodyPart::Feet);
}

#[test]
fn classifier_covers_full_range_with_exactly_one_label() {
    let mut y = 0.0;
    while y < 100.0 {
        let part = BodyPart::from_y(y);
        let expected = if y < 15.0 {
            BodyPart::Head
        } else if y < 25.0 {
            BodyPart::Neck
        } else if y < 40.0 {
            BodyPart::Chest
        } else if y < 55.0 {
            BodyPart::Stomach
        } else if y < 70.0 {
            BodyPart::Arms
        } else if y < 85.0 {
            BodyPart::Legs
        } else {
            BodyPart::Feet
        };
        assert_eq!(part, expected, "y={y}");
        y += 0.25;
    }
}

#[test]
fn classifier_extremes() {
    assert_eq!(BodyPart::from_y(0.0), BodyPart::Head);
    assert_eq!(BodyPart::from_y(100.0), BodyPart::Feet);
}

#[test]
fn body_map_point_derives_part_from_y() {
    let point = BodyMapPoint::new(33.0, 60.0);
    assert_eq!(point.body_part, BodyPart::Arms);
    assert!((point.x - 33.0).abs() < f64::EPSILON);
}

#[test]
fn identical_coordinates_yield_identical_parts() {
    let a = BodyMapPoint::new(10.0, 42.0);
    let b = BodyMapPoint::new(10.0, 42.0);
    assert_eq!(a.body_part, b.body_part);
    assert_eq!(a, b);
}

// =============================================================================
// DERIVED RATINGS
// =============================================================================

#[test]
fn emotion_color_derivation() {
    assert_eq!(EmotionRating::new(1).color, EmotionColor::Green);
    assert_eq!(EmotionRating::new(2).color, EmotionColor::Yellow);
    assert_eq!(EmotionRating::new(3).color, EmotionColor::Orange);
    assert_eq!(EmotionRating::new(4).color, EmotionColor::Red);
    assert_eq!(EmotionRating::new(5).color, EmotionColor::DarkRed);
}

#[test]
fn emotion_level_is_clamped() {
    assert_eq!(EmotionRating::new(0).level, 1);
    assert_eq!(EmotionRating::new(9).level, 5);
    assert_eq!(EmotionRating::new(9).color, EmotionColor::DarkRed);
}

#[test]
fn safety_feeling_derivation() {
    assert_eq!(SafetyRating::new(1).feeling, SafetyFeeling::VerySafe);
    assert_eq!(SafetyRating::new(3).feeling, SafetyFeeling::Neutral);
    assert_eq!(SafetyRating::new(5).feeling, SafetyFeeling::VeryUnsafe);
}

#[test]
fn safety_level_is_clamped() {
    assert_eq!(SafetyRating::new(0).level, 1);
    assert_eq!(SafetyRating::new(200).level, 5);
}

#[test]
fn emotion_color_serializes_kebab_case() {
    let json = serde_json::to_string(&EmotionRating::new(5)).unwrap();
    assert!(json.contains("\"dark-red\""), "{json}");
}

#[test]
fn safety_feeling_serializes_snake_case() {
    let json = serde_json::to_string(&SafetyRating::new(1)).unwrap();
    assert!(json.contains("\"very_safe\""), "{json}");
}

// =============================================================================
// ENUM STRING FORMS
// =============================================================================

#[test]
fn frequency_round_trips_through_strings() {
    for freq in Frequency::ALL {
        assert_eq!(Frequency::parse(freq.as_str()), Some(freq));
    }
    assert_eq!(Frequency::parse("never"), None);
}

#[test]
fn status_round_trips_through_strings() {
    for status in ReportStatus::ALL {
        assert_eq!(ReportStatus::parse(status.as_str()), Some(status));
    }
    assert_eq!(ReportStatus::parse("archived"), None);
}

#[test]
fn has_physical_symbols_checks_category() {
    let verbal = vec![sample_symbol("v1", SymbolCategory::Verbal)];
    let mixed = vec![
        sample_symbol("v1", SymbolCategory::Verbal),
        sample_symbol("p1", SymbolCategory::Physical),
    ];
    assert!(!has_physical_symbols(&verbal));
    assert!(has_physical_symbols(&mixed));
    assert!(!has_physical_symbols(&[]));
}

// =============================================================================
// DRAFT VALIDATION
// =============================================================================

#[test]
fn valid_draft_passes() {
    assert!(sample_draft().validate().is_ok());
}

#[test]
fn draft_without_symbols_is_rejected() {
    let mut draft = sample_draft();
    draft.symbols.clear();
    assert!(matches!(draft.validate(), Err(DraftError::EmptySymbols)));
}

#[test]
fn draft_with_blank_name_is_rejected() {
    let mut draft = sample_draft();
    draft.student_name = "   ".to_owned();
    assert!(matches!(draft.validate(), Err(DraftError::BlankName)));
}

#[test]
fn draft_with_out_of_range_point_is_rejected() {
    let mut draft = sample_draft();
    draft.body_map.push(BodyMapPoint { x: 130.0, y: 10.0, body_part: BodyPart::Head });
    assert!(matches!(draft.validate(), Err(DraftError::PointOutOfRange { index: 1 })));
}

#[test]
fn draft_with_wire_level_out_of_range_is_rejected() {
    let mut draft = sample_draft();
    // Simulates a hand-crafted wire payload bypassing the constructor.
    draft.emotion.level = 9;
    assert!(matches!(
        draft.validate(),
        Err(DraftError::LevelOutOfRange { field: "emotion", .. })
    ));
}

#[test]
fn draft_without_body_map_is_valid() {
    let mut draft = sample_draft();
    draft.body_map.clear();
    assert!(draft.validate().is_ok());
}

// =============================================================================
// WIRE FORMAT
// =============================================================================

#[test]
fn draft_serializes_camel_case() {
    let json = serde_json::to_value(sample_draft()).unwrap();
    assert!(json.get("studentId").is_some());
    assert!(json.get("studentName").is_some());
    assert!(json.get("bodyMap").is_some());
    assert!(json.get("student_id").is_none());
}

#[test]
fn draft_body_map_defaults_to_empty_when_absent() {
    let json = serde_json::json!({
        "studentId": "student-1",
        "studentName": "Alex",
        "symbols": [{"id": "s1", "label": "Hitting", "category": "physical"}],
        "emotion": {"level": 2, "color": "yellow"},
        "location": {"id": "loc1", "name": "Playground", "icon": "🏃"},
        "frequency": "once",
        "safety": {"level": 1, "feeling": "very_safe"},
    });
    let draft: ReportDraft = serde_json::from_value(json).unwrap();
    assert!(draft.body_map.is_empty());
    assert!(draft.validate().is_ok());
}

#[test]
fn report_round_trips_through_json() {
    let draft = sample_draft();
    let report = Report {
        id: Uuid::new_v4(),
        student_id: draft.student_id.clone(),
        student_name: draft.student_name.clone(),
        symbols: draft.symbols.clone(),
        body_map: draft.body_map.clone(),
        emotion: draft.emotion,
        location: draft.location.clone(),
        frequency: draft.frequency,
        safety: draft.safety,
        status: ReportStatus::Pending,
        teacher_notes: None,
        timestamp: Utc::now(),
    };
    let json = serde_json::to_string(&report).unwrap();
    let restored: Report = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, report);
}

#[test]
fn recommendation_round_trips_through_json() {
    let rec = Recommendation {
        summary: "Repeated physical incidents on the playground.".to_owned(),
        urgency: Urgency::High,
        immediate_actions: vec!["Talk to the student today.".to_owned()],
        short_term_actions: vec!["Inform the playground supervisors.".to_owned()],
        long_term_actions: vec!["Schedule a class discussion.".to_owned()],
        resources: vec!["School counselor".to_owned()],
        notes: "Safety trend is worsening.".to_owned(),
    };
    let json = serde_json::to_value(&rec).unwrap();
    assert!(json.get("immediateActions").is_some());
    assert_eq!(json.get("urgency").and_then(|v| v.as_str()), Some("high"));
    let restored: Recommendation = serde_json::from_value(json).unwrap();
    assert_eq!(restored, rec);
}
