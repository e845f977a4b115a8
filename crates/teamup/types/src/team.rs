//! Team shapes
//!
//! Team `status` follows the backend's encoding: 0 = public, 1 = private,
//! 2 = secret (password protected).

use crate::user::User;
use serde::{Deserialize, Serialize};

/// Aggregated team view with captain and member profiles resolved.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub max_num: u32,
    pub expire_time: Option<String>,
    pub create_time: Option<String>,
    pub user_id: u64,
    pub status: i32,
    #[serde(default)]
    pub tags: Vec<String>,
    pub team_captain: Option<User>,
    #[serde(default)]
    pub members: Vec<User>,
}

/// One page of team search results.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamPage {
    pub records: Vec<Team>,
    pub total: u64,
}

/// Team creation request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamCreate {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub max_num: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expire_time: Option<String>,
    pub status: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// Team update request body. `password` is required by the backend when
/// switching `status` to secret.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamUpdate {
    pub id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// Join request body; `password` only matters for secret teams.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamJoin {
    pub team_id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// Quit request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamQuit {
    pub team_id: u64,
}

/// Invitation request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamInvite {
    pub team_id: u64,
    pub target_user_account: String,
}

/// Paged team search request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamSearch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_names: Option<Vec<String>>,
    pub current: u64,
    pub page_size: u64,
}

impl Default for TeamSearch {
    fn default() -> Self {
        Self {
            search_text: None,
            tag_names: None,
            current: 1,
            page_size: 10,
        }
    }
}
