use super::*;

#[test]
fn content_block_text_round_trips() {
    let block = ContentBlock::Text { text: "hello".into() };
    let json = serde_json::to_string(&block).unwrap();
    assert!(json.contains("\"type\":\"text\""));
    let restored: ContentBlock = serde_json::from_str(&json).unwrap();
    assert!(matches!(restored, ContentBlock::Text { text } if text == "hello"));
}

#[test]
fn unknown_block_types_deserialize_to_unknown() {
    let json = r#"{"type":"server_tool_use","id":"x"}"#;
    let block: ContentBlock = serde_json::from_str(json).unwrap();
    assert!(matches!(block, ContentBlock::Unknown));
}

#[test]
fn content_text_serializes_as_bare_string() {
    let msg = Message::user("hi");
    let json = serde_json::to_string(&msg).unwrap();
    assert_eq!(json, r#"{"role":"user","content":"hi"}"#);
}

#[test]
fn chat_response_text_joins_text_blocks() {
    let resp = ChatResponse {
        content: vec![
            ContentBlock::Thinking { thinking: "hmm".into() },
            ContentBlock::Text { text: "first".into() },
            ContentBlock::Unknown,
            ContentBlock::Text { text: "second".into() },
        ],
        model: "m".into(),
        stop_reason: "end_turn".into(),
        input_tokens: 1,
        output_tokens: 2,
    };
    assert_eq!(resp.text(), "first\nsecond");
}

#[test]
fn chat_response_text_empty_when_no_text_blocks() {
    let resp = ChatResponse {
        content: vec![ContentBlock::Thinking { thinking: "only thinking".into() }],
        model: "m".into(),
        stop_reason: "end_turn".into(),
        input_tokens: 0,
        output_tokens: 0,
    };
    assert_eq!(resp.text(), "");
}

#[test]
fn llm_error_display_includes_status() {
    let err = LlmError::ApiResponse { status: 429, body: "rate limited".into() };
    assert!(err.to_string().contains("429"));
}
