//! Team calls

use crate::error::ApiResult;
use crate::notify::NotifyingClient;
use teamup_types::{Team, TeamCreate, TeamInvite, TeamJoin, TeamPage, TeamQuit, TeamSearch, TeamUpdate};

/// Fetch team details by id.
pub async fn team_by_id(client: &NotifyingClient, team_id: u64) -> ApiResult<Team> {
    client.get(&format!("/team/get/{team_id}")).await
}

/// Paged search over teams by keyword and tags.
pub async fn search_teams(client: &NotifyingClient, search: &TeamSearch) -> ApiResult<TeamPage> {
    client.post("/team/search", search).await
}

/// Create a team; returns the new team id.
pub async fn create_team(client: &NotifyingClient, create: &TeamCreate) -> ApiResult<u64> {
    client.post("/team/add", create).await
}

/// Update a team the caller captains.
pub async fn update_team(client: &NotifyingClient, update: &TeamUpdate) -> ApiResult<bool> {
    client.post("/team/update", update).await
}

/// Join a team, with a password for secret teams.
pub async fn join_team(client: &NotifyingClient, join: &TeamJoin) -> ApiResult<bool> {
    client.post("/team/join", join).await
}

/// Leave a team.
pub async fn quit_team(client: &NotifyingClient, quit: &TeamQuit) -> ApiResult<bool> {
    client.post("/team/quit", quit).await
}

/// Invite another account into a team.
pub async fn invite_to_team(client: &NotifyingClient, invite: &TeamInvite) -> ApiResult<bool> {
    client.post("/team/invite", invite).await
}
