//! Session identity and authentication payloads.

use ledgerline_core::{BranchId, UserId, UserRole};
use rust_decimal::Decimal;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use super::BranchRef;

/// The authenticated identity returned by the auth endpoints.
///
/// Persisted verbatim in the session vault and restored at start-up, so the
/// serialized form must round-trip exactly.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    #[serde(rename = "_id")]
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    /// Bearer token for subsequent API calls.
    pub token: String,
    #[serde(rename = "branchId", default, skip_serializing_if = "Option::is_none")]
    pub branch: Option<BranchRef>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::float_option"
    )]
    pub profit_rate: Option<Decimal>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::float_option"
    )]
    pub commission_rate: Option<Decimal>,
}

impl std::fmt::Debug for SessionUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionUser")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("role", &self.role)
            .field("token", &"[REDACTED]")
            .field("branch", &self.branch)
            .finish_non_exhaustive()
    }
}

/// Login form payload.
#[derive(Clone)]
pub struct LoginCredentials {
    pub email: String,
    pub password: SecretString,
}

impl LoginCredentials {
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: SecretString::from(password.into()),
        }
    }
}

impl std::fmt::Debug for LoginCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginCredentials")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Registration form payload.
#[derive(Clone)]
pub struct RegisterCredentials {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: Option<SecretString>,
    pub role: Option<UserRole>,
    pub branch: Option<BranchId>,
}

impl std::fmt::Debug for RegisterCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisterCredentials")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("role", &self.role)
            .field("branch", &self.branch)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_user_round_trips() {
        let json = r#"{
            "_id": "u-1",
            "name": "Sana Tariq",
            "email": "sana@example.com",
            "role": "sales_rep",
            "token": "jwt-token",
            "branchId": "b-1",
            "commissionRate": 0.05
        }"#;
        let user: SessionUser = serde_json::from_str(json).expect("deserialize");
        let serialized = serde_json::to_string(&user).expect("serialize");
        let back: SessionUser = serde_json::from_str(&serialized).expect("round trip");
        assert_eq!(back, user);
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let credentials = LoginCredentials::new("a@b.com", "secret123");
        let rendered = format!("{credentials:?}");
        assert!(rendered.contains("[REDACTED]"));
        assert!(!rendered.contains("secret123"));
    }
}
