//! User administration DTOs.

use serde::{Deserialize, Serialize};

use crate::dto::auth::Role;
use crate::utils::flexible_id;

/// Admin-side creation payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserDraft {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    pub password: String,
    pub role: Role,
}

/// Partial update sent with `PATCH /api/users/{id}`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateUserDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// Online presence of a user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserStatus {
    #[serde(with = "flexible_id")]
    pub id: i64,
    #[serde(default)]
    pub is_online: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_seen: Option<String>,
}

/// Query parameters of `GET /api/users`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserQuery {
    pub page: u32,
    pub limit: u32,
    pub role: Option<Role>,
    pub is_active: Option<bool>,
}

impl Default for UserQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: 10,
            role: None,
            is_active: None,
        }
    }
}

impl UserQuery {
    /// Query-string pairs in the order the backend documents them.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("page", self.page.to_string()), ("limit", self.limit.to_string())];
        if let Some(role) = self.role {
            pairs.push(("role", role.as_str().to_string()));
        }
        if let Some(active) = self.is_active {
            pairs.push(("is_active", active.to_string()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_query_pairs() {
        let pairs = UserQuery::default().to_pairs();
        assert_eq!(pairs, vec![("page", "1".to_string()), ("limit", "10".to_string())]);
    }

    #[test]
    fn test_query_pairs_with_filters() {
        let query = UserQuery {
            role: Some(Role::Customer),
            is_active: Some(false),
            ..Default::default()
        };
        let pairs = query.to_pairs();
        assert!(pairs.contains(&("role", "customer".to_string())));
        assert!(pairs.contains(&("is_active", "false".to_string())));
    }

    #[test]
    fn test_update_dto_sends_phone_number_key() {
        let dto = UpdateUserDto {
            phone_number: Some("555-1234".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["phone_number"], "555-1234");
        assert!(json.get("phone").is_none());
    }
}
