use serde::{Deserialize, Serialize};

use crate::utils::flexible_id;

/// Role carried by every backend user.
///
/// Roles the client does not know about deserialize to [`Role::Unknown`] so that
/// route guards can log such sessions out instead of failing to parse them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Customer,
    #[serde(other)]
    Unknown,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Customer => "customer",
            Role::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User as returned by the auth and user endpoints
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    #[serde(with = "flexible_id")]
    pub id: i64,
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_seen: Option<String>,
}

impl User {
    pub fn full_name(&self) -> String {
        crate::utils::full_name(&self.first_name, &self.last_name)
    }

    /// Users without an explicit flag are treated as inactive, matching the admin filter.
    pub fn active(&self) -> bool {
        self.is_active.unwrap_or(false)
    }
}

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Self-registration request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

/// Token and user pair issued on login
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionPayload {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
}

/// Login response.
///
/// The backend answers either `{ token, user }` or
/// `{ success, message, data: { token, user } }`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum LoginResponse {
    Wrapped {
        #[serde(default)]
        success: bool,
        #[serde(default)]
        message: Option<String>,
        data: SessionPayload,
    },
    Direct(SessionPayload),
}

impl LoginResponse {
    fn payload(&self) -> &SessionPayload {
        match self {
            LoginResponse::Wrapped { data, .. } => data,
            LoginResponse::Direct(payload) => payload,
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.payload().token.as_deref()
    }

    pub fn user(&self) -> Option<&User> {
        self.payload().user.as_ref()
    }

    /// Returns the session only when both token and user are present.
    pub fn into_session(self) -> Option<(String, User)> {
        let payload = match self {
            LoginResponse::Wrapped { data, .. } => data,
            LoginResponse::Direct(payload) => payload,
        };
        match (payload.token, payload.user) {
            (Some(token), Some(user)) => Some((token, user)),
            _ => None,
        }
    }
}

/// Response of `GET /api/auth/me`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MeResponse {
    #[serde(default)]
    pub user: Option<User>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecoveryPasswordRequest {
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecoveryPasswordResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_response_direct_shape() {
        let body = r#"{"token":"abc","user":{"id":"7","email":"a@b.co","first_name":"Ana","last_name":"Paz","role":"admin"}}"#;
        let response: LoginResponse = serde_json::from_str(body).unwrap();

        assert_eq!(response.token(), Some("abc"));
        let (token, user) = response.into_session().unwrap();
        assert_eq!(token, "abc");
        assert_eq!(user.id, 7);
        assert_eq!(user.role, Role::Admin);
    }

    #[test]
    fn test_login_response_wrapped_shape() {
        let body = r#"{"success":true,"message":"ok","data":{"token":"t","user":{"id":3,"email":"c@d.co","role":"customer"}}}"#;
        let response: LoginResponse = serde_json::from_str(body).unwrap();

        assert!(matches!(response, LoginResponse::Wrapped { success: true, .. }));
        assert_eq!(response.user().map(|u| u.role), Some(Role::Customer));
    }

    #[test]
    fn test_login_response_without_token_has_no_session() {
        let body = r#"{"success":false,"message":"bad"}"#;
        let response: LoginResponse = serde_json::from_str(body).unwrap();
        assert!(response.into_session().is_none());
    }

    #[test]
    fn test_unknown_role_is_tolerated() {
        let body = r#"{"id":1,"email":"x@y.co","role":"baker"}"#;
        let user: User = serde_json::from_str(body).unwrap();
        assert_eq!(user.role, Role::Unknown);
    }

    #[test]
    fn test_full_name_trims_missing_parts() {
        let user: User = serde_json::from_str(r#"{"id":1,"email":"x@y.co","first_name":"Luz","role":"customer"}"#).unwrap();
        assert_eq!(user.full_name(), "Luz");
    }
}
