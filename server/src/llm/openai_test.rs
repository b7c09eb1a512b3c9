use super::*;

// ===== chat completions =====

#[test]
fn cc_parse_text_response() {
    let json = serde_json::json!({
        "model": "gpt-4o",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": "Hello!" },
            "finish_reason": "stop"
        }],
        "usage": { "prompt_tokens": 10, "completion_tokens": 5 }
    })
    .to_string();
    let resp = parse_chat_completions_response(&json).unwrap();
    assert_eq!(resp.content.len(), 1);
    assert!(matches!(&resp.content[0], ContentBlock::Text { text } if text == "Hello!"));
    assert_eq!(resp.stop_reason, "end_turn");
    assert_eq!(resp.input_tokens, 10);
}

#[test]
fn cc_parse_length_finish_maps_to_max_tokens() {
    let json = serde_json::json!({
        "model": "gpt-4o",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": "truncated" },
            "finish_reason": "length"
        }],
        "usage": { "prompt_tokens": 1, "completion_tokens": 1 }
    })
    .to_string();
    let resp = parse_chat_completions_response(&json).unwrap();
    assert_eq!(resp.stop_reason, "max_tokens");
}

#[test]
fn cc_parse_missing_choices_is_error() {
    let json = serde_json::json!({ "model": "gpt-4o", "choices": [] }).to_string();
    assert!(parse_chat_completions_response(&json).is_err());
}

// ===== responses API =====

#[test]
fn resp_parse_text_response() {
    let json = serde_json::json!({
        "model": "gpt-4o",
        "output": [{
            "type": "message",
            "content": [{ "type": "output_text", "text": "Done!" }]
        }],
        "usage": { "input_tokens": 15, "output_tokens": 8 }
    })
    .to_string();
    let resp = parse_responses_response(&json).unwrap();
    assert_eq!(resp.content.len(), 1);
    assert!(matches!(&resp.content[0], ContentBlock::Text { text } if text == "Done!"));
    assert_eq!(resp.stop_reason, "end_turn");
}

#[test]
fn resp_parse_output_text_fallback() {
    let json = serde_json::json!({
        "model": "gpt-4o",
        "output_text": "Fallback text",
        "usage": { "input_tokens": 5, "output_tokens": 3 }
    })
    .to_string();
    let resp = parse_responses_response(&json).unwrap();
    assert_eq!(resp.content.len(), 1);
    assert!(matches!(&resp.content[0], ContentBlock::Text { text } if text == "Fallback text"));
}

#[test]
fn resp_parse_skips_non_message_items() {
    let json = serde_json::json!({
        "model": "gpt-4o",
        "output": [
            { "type": "reasoning", "summary": [] },
            { "type": "message", "content": [{ "type": "output_text", "text": "kept" }] }
        ],
        "usage": { "input_tokens": 1, "output_tokens": 1 }
    })
    .to_string();
    let resp = parse_responses_response(&json).unwrap();
    assert_eq!(resp.content.len(), 1);
}

// ===== request building =====

#[test]
fn cc_messages_include_system_first() {
    let messages = vec![Message::user("report facts")];
    let built = build_chat_completions_messages("system prompt", &messages);
    assert_eq!(built.len(), 2);
    assert_eq!(built[0].role, "system");
    assert_eq!(built[1].role, "user");
}

#[test]
fn cc_messages_skip_empty_system() {
    let messages = vec![Message::user("hi")];
    let built = build_chat_completions_messages("  ", &messages);
    assert_eq!(built.len(), 1);
}

#[test]
fn responses_input_flattens_blocks() {
    let messages = vec![Message {
        role: "user".into(),
        content: Content::Blocks(vec![
            ContentBlock::Text { text: "a".into() },
            ContentBlock::Thinking { thinking: "skip".into() },
            ContentBlock::Text { text: "b".into() },
        ]),
    }];
    let input = build_responses_input(&messages);
    assert_eq!(input.len(), 1);
    assert_eq!(input[0].content[0].text, "ab");
}
