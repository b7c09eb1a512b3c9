use super::*;

// =============================================================================
// EMAIL NORMALIZATION
// =============================================================================

#[test]
fn normalize_email_lowercases_and_trims() {
    assert_eq!(
        normalize_email("  Rivera@School.Example  ").as_deref(),
        Some("rivera@school.example")
    );
}

#[test]
fn normalize_email_rejects_missing_at() {
    assert!(normalize_email("not-an-email").is_none());
}

#[test]
fn normalize_email_rejects_empty_sides() {
    assert!(normalize_email("@school.example").is_none());
    assert!(normalize_email("rivera@").is_none());
    assert!(normalize_email("a@b@c").is_none());
}

#[test]
fn normalize_email_rejects_blank() {
    assert!(normalize_email("   ").is_none());
}

// =============================================================================
// PASSWORD HASHING
// =============================================================================

#[test]
fn hash_password_is_deterministic_per_salt() {
    let a = hash_password("salt1", "correct horse");
    let b = hash_password("salt1", "correct horse");
    assert_eq!(a, b);
}

#[test]
fn hash_password_differs_across_salts() {
    let a = hash_password("salt1", "correct horse");
    let b = hash_password("salt2", "correct horse");
    assert_ne!(a, b);
}

#[test]
fn hash_password_differs_across_passwords() {
    let a = hash_password("salt1", "correct horse");
    let b = hash_password("salt1", "battery staple");
    assert_ne!(a, b);
}

#[test]
fn hash_is_64_hex_chars() {
    let hash = hash_password("salt", "password");
    assert_eq!(hash.len(), 64);
    assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn generate_salt_is_32_hex_chars_and_unique() {
    let a = generate_salt();
    let b = generate_salt();
    assert_eq!(a.len(), 32);
    assert_ne!(a, b);
}
