use super::*;

#[test]
fn default_auth_state_is_loading_without_user() {
    let state = AuthState::default();
    assert!(state.loading);
    assert!(state.user.is_none());
}

#[test]
fn signed_in_carries_the_user_and_stops_loading() {
    let user = TeacherUser {
        id: "u1".to_owned(),
        name: "Ms. Rivera".to_owned(),
        email: "rivera@school.example".to_owned(),
    };
    let state = AuthState::signed_in(user.clone());
    assert!(!state.loading);
    assert_eq!(state.user, Some(user));
}

#[test]
fn signed_out_clears_the_user_and_stops_loading() {
    let state = AuthState::signed_out();
    assert!(!state.loading);
    assert!(state.user.is_none());
}

#[test]
fn teacher_user_deserializes_from_me_payload() {
    let json = r#"{"id":"3e9","name":"Ms. Rivera","email":"rivera@school.example"}"#;
    let user: TeacherUser = serde_json::from_str(json).unwrap();
    assert_eq!(user.name, "Ms. Rivera");
}
