use super::*;

#[test]
fn bytes_to_hex_formats_lowercase_pairs() {
    assert_eq!(bytes_to_hex(&[0x00, 0xff, 0x0a]), "00ff0a");
}

#[test]
fn generate_token_is_64_hex_chars() {
    let token = generate_token();
    assert_eq!(token.len(), 64);
    assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn generate_token_is_unique_across_calls() {
    let a = generate_token();
    let b = generate_token();
    assert_ne!(a, b);
}

#[test]
fn session_user_serializes_plain_fields() {
    let user = SessionUser {
        id: Uuid::nil(),
        name: "Ms. Rivera".to_owned(),
        email: "rivera@school.example".to_owned(),
    };
    let json = serde_json::to_value(&user).unwrap();
    assert_eq!(json.get("name").and_then(|v| v.as_str()), Some("Ms. Rivera"));
    assert!(json.get("email").is_some());
}
