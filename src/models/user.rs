use serde::{Deserialize, Serialize};
use crate::errors::{AppError, AppResult};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Administrator,
    Guest,
}

impl Role {
    // Label shown in the sidebar, matching the page language
    pub fn label(&self) -> &'static str {
        match self {
            Role::Administrator => "Administrador",
            Role::Guest => "Invitado",
        }
    }
}

pub struct User {
    pub username: &'static str,
    pub password: &'static str,  // Plaintext by design of this single-tenant tool; do not mistake for a secure credential store
    pub role: Role,
}

// Fixed credential table, defined at compile time. No hashing, no lockout,
// no expiry. Known limitation of the tool, not something to harden here.
const USERS: [User; 2] = [
    User { username: "admin", password: "decu1232", role: Role::Administrator },
    User { username: "usuario", password: "1234", role: Role::Guest },
];

// What the session cookie carries between requests
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AuthSession {
    pub username: String,
    pub role: Role,
}

impl User {
    /// Exact, case-sensitive comparison against the fixed table. Unknown
    /// user and wrong password are indistinguishable to the caller.
    pub fn authenticate(username: &str, password: &str) -> AppResult<AuthSession> {
        USERS
            .iter()
            .find(|u| u.username == username && u.password == password)
            .map(|u| AuthSession { username: u.username.to_string(), role: u.role })
            .ok_or(AppError::InvalidCredentials)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authenticate_admin() {
        let session = User::authenticate("admin", "decu1232").unwrap();
        assert_eq!(session.username, "admin");
        assert_eq!(session.role, Role::Administrator);
    }

    #[test]
    fn test_authenticate_guest() {
        let session = User::authenticate("usuario", "1234").unwrap();
        assert_eq!(session.role, Role::Guest);
    }

    #[test]
    fn test_wrong_password_and_unknown_user_fail_the_same_way() {
        let wrong_password = User::authenticate("admin", "wrong").unwrap_err();
        let unknown_user = User::authenticate("nouser", "x").unwrap_err();
        assert!(matches!(wrong_password, AppError::InvalidCredentials));
        assert!(matches!(unknown_user, AppError::InvalidCredentials));
    }

    #[test]
    fn test_password_compare_is_case_sensitive() {
        assert!(User::authenticate("admin", "DECU1232").is_err());
    }
}
