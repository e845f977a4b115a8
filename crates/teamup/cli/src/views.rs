//! View routing for the `open` command
//!
//! Mirrors a browser session: every `open` runs the requested path through
//! the navigation guard before rendering, and the last rendered path is
//! persisted so a later bounce-back has somewhere to return to.

use crate::commands::{session, team};
use crate::error::{CliError, CliResult};
use crate::output::{self, print_info, OutputFormat};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use teamup_client::{api, NotifyingClient};
use teamup_guard::{GuardDecision, NavigationGuard};
use teamup_session::SessionStore;
use teamup_types::TeamSearch;
use tracing::warn;

/// The views a path can resolve to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Login,
    Register,
    Match,
    Profile,
    UserProfile(u64),
    TeamCreate,
    TeamDetail(u64),
}

/// Resolve a path to its view. Dynamic segments are numeric ids.
pub fn resolve(path: &str) -> Option<View> {
    match path {
        "/login" => Some(View::Login),
        "/register" => Some(View::Register),
        "/match" => Some(View::Match),
        "/profile" => Some(View::Profile),
        "/team/create" => Some(View::TeamCreate),
        _ => {
            if let Some(id) = path.strip_prefix("/user/") {
                id.parse().ok().map(View::UserProfile)
            } else if let Some(id) = path.strip_prefix("/team/") {
                id.parse().ok().map(View::TeamDetail)
            } else {
                None
            }
        }
    }
}

/// Navigate to a path, passing the guard, and render where we land.
pub async fn open(
    raw: &str,
    client: &NotifyingClient,
    guard: &NavigationGuard,
    store: &dyn SessionStore,
    format: OutputFormat,
) -> CliResult<()> {
    // The root forwards to the landing view before the guard runs.
    let target = if raw == guard.routes().root() {
        guard.routes().default_landing().to_string()
    } else {
        raw.to_string()
    };

    let from = load_last_path();
    let destination = match guard.check(&target, &from) {
        GuardDecision::Proceed => target,
        GuardDecision::Redirect(destination) => {
            print_info(&format!("redirected to {destination}"));
            destination
        }
    };

    let view = resolve(&destination)
        .ok_or_else(|| CliError::InvalidInput(format!("no view at {destination}")))?;
    render(view, client, store, format).await?;
    save_last_path(&destination);
    Ok(())
}

async fn render(
    view: View,
    client: &NotifyingClient,
    store: &dyn SessionStore,
    format: OutputFormat,
) -> CliResult<()> {
    match view {
        View::Login => session::login(client, store, None).await,
        View::Register => session::register(client, None).await,
        View::Match => {
            let page = api::team::search_teams(client, &TeamSearch::default()).await?;
            team::print_page(&page, format);
            Ok(())
        }
        View::Profile => {
            let user = api::user::current_user(client).await?;
            output::print_single(&user, format);
            Ok(())
        }
        View::UserProfile(id) => {
            let user = api::user::user_by_id(client, id).await?;
            output::print_single(&user, format);
            Ok(())
        }
        View::TeamCreate => {
            print_info("create a team with `teamup team create <name>`");
            Ok(())
        }
        View::TeamDetail(id) => {
            let detail = api::team::team_by_id(client, id).await?;
            output::print_single(&detail, format);
            Ok(())
        }
    }
}

/// Where the last rendered path is remembered between invocations.
#[derive(Debug, Default, Serialize, Deserialize)]
struct NavState {
    last_path: Option<String>,
}

fn state_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("teamup").join("state.toml"))
}

fn load_last_path() -> String {
    let Some(path) = state_path() else {
        return "/".to_string();
    };
    std::fs::read_to_string(&path)
        .ok()
        .and_then(|contents| toml::from_str::<NavState>(&contents).ok())
        .and_then(|state| state.last_path)
        .unwrap_or_else(|| "/".to_string())
}

fn save_last_path(last_path: &str) {
    let Some(path) = state_path() else {
        return;
    };
    let state = NavState {
        last_path: Some(last_path.to_string()),
    };
    let write = || -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string(&state)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        std::fs::write(&path, contents)
    };
    if let Err(e) = write() {
        warn!(path = %path.display(), error = %e, "cannot persist navigation state");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_paths_resolve() {
        assert_eq!(resolve("/login"), Some(View::Login));
        assert_eq!(resolve("/match"), Some(View::Match));
        assert_eq!(resolve("/team/create"), Some(View::TeamCreate));
    }

    #[test]
    fn dynamic_segments_parse_ids() {
        assert_eq!(resolve("/user/3"), Some(View::UserProfile(3)));
        assert_eq!(resolve("/team/5"), Some(View::TeamDetail(5)));
    }

    #[test]
    fn junk_paths_do_not_resolve() {
        assert_eq!(resolve("/team/five"), None);
        assert_eq!(resolve("/nowhere"), None);
        assert_eq!(resolve("login"), None);
    }
}
