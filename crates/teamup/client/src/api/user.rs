//! User account calls

use crate::error::ApiResult;
use crate::notify::NotifyingClient;
use teamup_types::{AvatarUpdate, LoginRequest, RegisterRequest, User, UserUpdate};

/// Fetch the currently logged-in user.
pub async fn current_user(client: &NotifyingClient) -> ApiResult<User> {
    client.get("/user/current").await
}

/// Fetch a user profile by id.
pub async fn user_by_id(client: &NotifyingClient, id: u64) -> ApiResult<User> {
    client.get(&format!("/user/{id}")).await
}

/// Update the caller's profile.
pub async fn update_user(client: &NotifyingClient, update: &UserUpdate) -> ApiResult<bool> {
    client.put("/user/updateinfo", update).await
}

/// Shortcut for changing only the avatar.
pub async fn update_avatar(client: &NotifyingClient, update: &AvatarUpdate) -> ApiResult<bool> {
    client.put("/user/update/avatar", update).await
}

/// Sign in; the backend returns the sanitized user on success.
pub async fn login(client: &NotifyingClient, request: &LoginRequest) -> ApiResult<User> {
    client.post("/user/login", request).await
}

/// Create an account; returns the new user id.
pub async fn register(client: &NotifyingClient, request: &RegisterRequest) -> ApiResult<u64> {
    client.post("/user/register", request).await
}

/// Tear down the backend session.
pub async fn logout(client: &NotifyingClient) -> ApiResult<i64> {
    client.post("/user/logout", &serde_json::json!({})).await
}
