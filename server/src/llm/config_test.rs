use super::*;

#[test]
fn parse_provider_defaults_to_anthropic() {
    assert_eq!(parse_provider(None).unwrap(), LlmProviderKind::Anthropic);
}

#[test]
fn parse_provider_accepts_openai() {
    assert_eq!(parse_provider(Some("openai")).unwrap(), LlmProviderKind::OpenAi);
}

#[test]
fn parse_provider_rejects_unknown() {
    let err = parse_provider(Some("mistral")).unwrap_err();
    assert!(matches!(err, LlmError::ConfigParse(_)));
}

#[test]
fn parse_openai_mode_defaults_to_responses() {
    assert_eq!(parse_openai_mode(None).unwrap(), OpenAiApiMode::Responses);
}

#[test]
fn parse_openai_mode_accepts_chat_completions() {
    assert_eq!(
        parse_openai_mode(Some("chat_completions")).unwrap(),
        OpenAiApiMode::ChatCompletions
    );
}

#[test]
fn parse_openai_mode_rejects_unknown() {
    assert!(parse_openai_mode(Some("assistants")).is_err());
}

#[test]
fn default_models_per_provider() {
    assert!(default_model(LlmProviderKind::Anthropic).starts_with("claude"));
    assert!(default_model(LlmProviderKind::OpenAi).starts_with("gpt"));
}
