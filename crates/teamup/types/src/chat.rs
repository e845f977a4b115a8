//! Chat message shapes

use serde::{Deserialize, Serialize};

/// A single team chat message as returned by the history endpoint.
///
/// `is_mine` is resolved by the backend against the calling session, so the
/// client never compares user ids itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: u64,
    pub user_id: u64,
    pub username: String,
    pub user_avatar: Option<String>,
    pub content: String,
    #[serde(default)]
    pub create_time: String,
    #[serde(default)]
    pub is_mine: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_deserializes() {
        let body = r#"{
            "id": 1,
            "userId": 7,
            "username": "Alice",
            "content": "anyone up for doubles?",
            "createTime": "2026-08-01 10:15:00",
            "isMine": true
        }"#;
        let message: ChatMessage = serde_json::from_str(body).unwrap();
        assert!(message.is_mine);
        assert_eq!(message.username, "Alice");
    }
}
