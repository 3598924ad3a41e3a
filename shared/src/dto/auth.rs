use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Registration request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

/// Session issued on successful login/register: bearer token, refresh token
/// and the authenticated user's profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AuthSession {
    pub token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    pub user: User,
}

/// User profile (public, safe to cache client-side)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl User {
    /// Display name used across the dashboard.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_session_deserializes_backend_payload() {
        let json = r#"{
            "token": "jwt-token",
            "refreshToken": "refresh-token",
            "user": {
                "id": "u-1",
                "firstName": "Ada",
                "lastName": "Lovelace",
                "email": "ada@example.com",
                "role": "analyst"
            }
        }"#;
        let session: AuthSession = serde_json::from_str(json).unwrap();
        assert_eq!(session.token, "jwt-token");
        assert_eq!(session.refresh_token.as_deref(), Some("refresh-token"));
        assert_eq!(session.user.full_name(), "Ada Lovelace");
    }

    #[test]
    fn test_refresh_token_optional() {
        let json = r#"{
            "token": "jwt-token",
            "user": {"id": "u-1", "firstName": "A", "lastName": "B", "email": "a@b.c"}
        }"#;
        let session: AuthSession = serde_json::from_str(json).unwrap();
        assert!(session.refresh_token.is_none());
    }
}
