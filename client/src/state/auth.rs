#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use serde::Deserialize;

/// The signed-in teacher, as returned by `/api/auth/me`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TeacherUser {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// Auth context shared through the component tree.
#[derive(Clone, Debug)]
pub struct AuthState {
    pub user: Option<TeacherUser>,
    /// True until the initial `/api/auth/me` probe resolves; pages must not
    /// redirect to login while this holds.
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

impl AuthState {
    #[must_use]
    pub fn signed_in(user: TeacherUser) -> Self {
        Self { user: Some(user), loading: false }
    }

    #[must_use]
    pub fn signed_out() -> Self {
        Self { user: None, loading: false }
    }
}
