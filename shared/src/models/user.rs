//! User Model

use serde::{Deserialize, Serialize};

/// User role as served by `/api/auth/me`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    #[default]
    User,
    Admin,
}

/// Authenticated user identity
///
/// Populated on a successful identity check at app start or login,
/// cleared on logout or a failed session check.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub role: UserRole,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}
