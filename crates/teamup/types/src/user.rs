//! User account shapes

use serde::{Deserialize, Serialize};

/// Sanitized user profile as returned by the backend.
///
/// Credentials never appear here; `gender` is 0 = undisclosed, 1 = male,
/// 2 = female, the backend's encoding.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u64,
    pub username: String,
    pub user_account: String,
    pub avatar_url: Option<String>,
    pub gender: Option<i32>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub user_status: Option<i32>,
    pub user_role: Option<i32>,
    pub planet_code: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub bio: Option<String>,
    pub create_time: Option<String>,
}

/// Profile update request body. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl UserUpdate {
    /// True when no field is set; the backend rejects empty updates.
    pub fn is_empty(&self) -> bool {
        self.username.is_none()
            && self.bio.is_none()
            && self.email.is_none()
            && self.gender.is_none()
            && self.avatar_url.is_none()
    }
}

/// Standalone avatar update, kept as a shortcut next to the full update.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvatarUpdate {
    pub user_id: u64,
    pub avatar_url: String,
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub user_account: String,
    pub user_password: String,
}

/// Registration request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub user_account: String,
    pub user_password: String,
    pub check_password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub planet_code: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_deserializes_camel_case() {
        let body = r#"{
            "id": 7,
            "username": "Alice",
            "userAccount": "alice",
            "avatarUrl": "https://cdn.example.com/a.png",
            "tags": ["rust", "tennis"]
        }"#;
        let user: User = serde_json::from_str(body).unwrap();
        assert_eq!(user.id, 7);
        assert_eq!(user.user_account, "alice");
        assert_eq!(user.tags, vec!["rust", "tennis"]);
        assert!(user.gender.is_none());
    }

    #[test]
    fn user_update_skips_unset_fields() {
        let update = UserUpdate {
            bio: Some("hello".to_string()),
            ..Default::default()
        };
        let body = serde_json::to_string(&update).unwrap();
        assert_eq!(body, r#"{"bio":"hello"}"#);
        assert!(!update.is_empty());
        assert!(UserUpdate::default().is_empty());
    }
}
