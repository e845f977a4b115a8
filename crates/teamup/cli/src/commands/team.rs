//! Team commands

use crate::error::CliResult;
use crate::output::{self, print_info, print_success, OutputFormat};
use clap::Subcommand;
use serde::Serialize;
use tabled::Tabled;
use teamup_client::{api, NotifyingClient};
use teamup_types::{Team, TeamCreate, TeamInvite, TeamJoin, TeamPage, TeamQuit, TeamSearch, TeamUpdate};

/// Team subcommands
#[derive(Subcommand)]
pub enum TeamCommands {
    /// Show team details
    Get {
        /// Team id
        team_id: u64,
    },

    /// Search teams by keyword and tags
    Search {
        /// Keyword matched against name and description
        #[arg(short, long)]
        text: Option<String>,

        /// Filter tag (repeatable)
        #[arg(short = 'g', long = "tag")]
        tags: Vec<String>,

        /// Result page, 1-based
        #[arg(long, default_value = "1")]
        page: u64,

        /// Page size
        #[arg(long, default_value = "10")]
        page_size: u64,
    },

    /// Create a team
    Create {
        /// Team name
        name: String,

        /// Description
        #[arg(short, long)]
        description: Option<String>,

        /// Maximum member count
        #[arg(short, long, default_value = "5")]
        max_num: u32,

        /// 0 = public, 1 = private, 2 = secret
        #[arg(short, long, default_value = "0")]
        status: i32,

        /// Join password, required for secret teams
        #[arg(short, long)]
        password: Option<String>,

        /// Expiry, e.g. "2026-12-31 00:00:00"
        #[arg(short, long)]
        expire: Option<String>,
    },

    /// Join a team
    Join {
        /// Team id
        team_id: u64,

        /// Password for secret teams
        #[arg(short, long)]
        password: Option<String>,
    },

    /// Leave a team
    Quit {
        /// Team id
        team_id: u64,
    },

    /// Invite an account into a team
    Invite {
        /// Team id
        team_id: u64,

        /// Target account name
        account: String,
    },

    /// Update a team you captain
    Update {
        /// Team id
        team_id: u64,

        /// New name
        #[arg(long)]
        name: Option<String>,

        /// New description
        #[arg(long)]
        description: Option<String>,

        /// New status: 0 = public, 1 = private, 2 = secret
        #[arg(long)]
        status: Option<i32>,

        /// New join password
        #[arg(long)]
        password: Option<String>,
    },
}

/// Table row for team display
#[derive(Debug, Serialize, Tabled)]
pub struct TeamRow {
    /// Team id
    id: u64,
    /// Team name
    name: String,
    /// Joined/capacity
    members: String,
    /// Visibility
    status: String,
    /// Captain display name
    captain: String,
    /// Time until expiry
    expires: String,
}

impl From<&Team> for TeamRow {
    fn from(team: &Team) -> Self {
        Self {
            id: team.id,
            name: team.name.clone(),
            members: format!("{}/{}", team.members.len(), team.max_num),
            status: format_status(team.status),
            captain: team
                .team_captain
                .as_ref()
                .map(|c| c.username.clone())
                .unwrap_or_else(|| "-".to_string()),
            expires: format_expiry(team.expire_time.as_deref()),
        }
    }
}

fn format_status(status: i32) -> String {
    match status {
        0 => "public",
        1 => "private",
        2 => "secret",
        _ => "unknown",
    }
    .to_string()
}

fn format_expiry(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return "-".to_string();
    };
    match parse_time(raw) {
        Some(expiry) => {
            let left = expiry.and_utc().signed_duration_since(chrono::Utc::now());
            if left.num_seconds() <= 0 {
                "expired".to_string()
            } else {
                format!("in {}", humanize_duration(left))
            }
        }
        None => raw.to_string(),
    }
}

// The backend emits "yyyy-MM-dd HH:mm:ss"; tolerate ISO-8601 too.
fn parse_time(raw: &str) -> Option<chrono::NaiveDateTime> {
    chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
        .or_else(|_| chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f"))
        .ok()
}

fn humanize_duration(duration: chrono::Duration) -> String {
    if duration.num_days() > 0 {
        format!("{}d", duration.num_days())
    } else if duration.num_hours() > 0 {
        format!("{}h", duration.num_hours())
    } else if duration.num_minutes() > 0 {
        format!("{}m", duration.num_minutes())
    } else {
        format!("{}s", duration.num_seconds())
    }
}

/// Print one page of search results.
pub fn print_page(page: &TeamPage, format: OutputFormat) {
    let rows: Vec<TeamRow> = page.records.iter().map(TeamRow::from).collect();
    output::print_output(rows, format);
    print_info(&format!("{} teams total", page.total));
}

/// Execute a team command
pub async fn execute(
    command: TeamCommands,
    client: &NotifyingClient,
    format: OutputFormat,
) -> CliResult<()> {
    match command {
        TeamCommands::Get { team_id } => {
            let team = api::team::team_by_id(client, team_id).await?;
            output::print_single(&team, format);
            Ok(())
        }

        TeamCommands::Search {
            text,
            tags,
            page,
            page_size,
        } => {
            let search = TeamSearch {
                search_text: text,
                tag_names: if tags.is_empty() { None } else { Some(tags) },
                current: page,
                page_size,
            };
            let results = api::team::search_teams(client, &search).await?;
            print_page(&results, format);
            Ok(())
        }

        TeamCommands::Create {
            name,
            description,
            max_num,
            status,
            password,
            expire,
        } => {
            let create = TeamCreate {
                name,
                description,
                max_num,
                expire_time: expire,
                status,
                password,
            };
            let team_id = api::team::create_team(client, &create).await?;
            print_success(&format!("Created team {team_id}"));
            Ok(())
        }

        TeamCommands::Join { team_id, password } => {
            api::team::join_team(client, &TeamJoin { team_id, password }).await?;
            print_success(&format!("Joined team {team_id}"));
            Ok(())
        }

        TeamCommands::Quit { team_id } => {
            api::team::quit_team(client, &TeamQuit { team_id }).await?;
            print_success(&format!("Left team {team_id}"));
            Ok(())
        }

        TeamCommands::Invite { team_id, account } => {
            api::team::invite_to_team(
                client,
                &TeamInvite {
                    team_id,
                    target_user_account: account.clone(),
                },
            )
            .await?;
            print_success(&format!("Invited {account} to team {team_id}"));
            Ok(())
        }

        TeamCommands::Update {
            team_id,
            name,
            description,
            status,
            password,
        } => {
            let update = TeamUpdate {
                id: team_id,
                name,
                description,
                status,
                password,
            };
            api::team::update_team(client, &update).await?;
            print_success(&format!("Updated team {team_id}"));
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_labels() {
        assert_eq!(format_status(0), "public");
        assert_eq!(format_status(2), "secret");
        assert_eq!(format_status(42), "unknown");
    }

    #[test]
    fn expiry_of_unparsable_value_is_shown_raw() {
        assert_eq!(format_expiry(Some("soon")), "soon");
        assert_eq!(format_expiry(None), "-");
    }

    #[test]
    fn past_expiry_reads_expired() {
        assert_eq!(format_expiry(Some("2000-01-01 00:00:00")), "expired");
    }

    #[test]
    fn row_from_sparse_team() {
        let team: Team = serde_json::from_str(
            r#"{"id":5,"name":"Morning crew","maxNum":6,"userId":7,"status":0}"#,
        )
        .unwrap();
        let row = TeamRow::from(&team);
        assert_eq!(row.members, "0/6");
        assert_eq!(row.captain, "-");
    }
}
