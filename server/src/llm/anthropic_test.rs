use super::*;

#[test]
fn parse_response_extracts_text_and_usage() {
    let json = serde_json::json!({
        "content": [{ "type": "text", "text": "Here is the plan." }],
        "model": "claude-sonnet-4-5-20250929",
        "stop_reason": "end_turn",
        "usage": { "input_tokens": 120, "output_tokens": 45 }
    })
    .to_string();

    let resp = parse_response(&json).unwrap();
    assert_eq!(resp.content.len(), 1);
    assert!(matches!(&resp.content[0], ContentBlock::Text { text } if text == "Here is the plan."));
    assert_eq!(resp.stop_reason, "end_turn");
    assert_eq!(resp.input_tokens, 120);
    assert_eq!(resp.output_tokens, 45);
}

#[test]
fn parse_response_drops_unknown_blocks() {
    let json = serde_json::json!({
        "content": [
            { "type": "server_tool_use", "id": "x" },
            { "type": "text", "text": "kept" }
        ],
        "model": "claude-sonnet-4-5-20250929",
        "stop_reason": "end_turn",
        "usage": { "input_tokens": 1, "output_tokens": 1 }
    })
    .to_string();

    let resp = parse_response(&json).unwrap();
    assert_eq!(resp.content.len(), 1);
}

#[test]
fn parse_response_keeps_thinking_blocks() {
    let json = serde_json::json!({
        "content": [
            { "type": "thinking", "thinking": "reasoning..." },
            { "type": "text", "text": "answer" }
        ],
        "model": "claude-sonnet-4-5-20250929",
        "stop_reason": "end_turn",
        "usage": { "input_tokens": 1, "output_tokens": 1 }
    })
    .to_string();

    let resp = parse_response(&json).unwrap();
    assert_eq!(resp.content.len(), 2);
    assert_eq!(resp.text(), "answer");
}

#[test]
fn parse_response_rejects_malformed_json() {
    let err = parse_response("not json").unwrap_err();
    assert!(matches!(err, LlmError::ApiParse(_)));
}

#[test]
fn parse_response_rejects_missing_usage() {
    let json = serde_json::json!({
        "content": [],
        "model": "m",
        "stop_reason": "end_turn"
    })
    .to_string();
    assert!(parse_response(&json).is_err());
}
