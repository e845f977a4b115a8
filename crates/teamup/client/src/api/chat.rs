//! Team chat calls

use crate::error::ApiResult;
use crate::notify::NotifyingClient;
use teamup_types::ChatMessage;

/// Fetch the message history of a team's chat room.
pub async fn history(client: &NotifyingClient, team_id: u64) -> ApiResult<Vec<ChatMessage>> {
    client
        .get_query("/chat/history", &[("teamId", team_id)])
        .await
}
