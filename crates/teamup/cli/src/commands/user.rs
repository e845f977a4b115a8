//! User profile commands

use crate::error::CliResult;
use crate::output::{self, print_success, print_warning, OutputFormat};
use clap::Subcommand;
use std::path::PathBuf;
use teamup_client::{api, NotifyingClient};
use teamup_types::{AvatarUpdate, UserUpdate};

/// User subcommands
#[derive(Subcommand)]
pub enum UserCommands {
    /// Show the logged-in user
    Current,

    /// Show a user by id
    Get {
        /// User id
        user_id: u64,
    },

    /// Update profile fields
    Update {
        /// Display name
        #[arg(long)]
        username: Option<String>,

        /// Short bio
        #[arg(long)]
        bio: Option<String>,

        /// Contact email
        #[arg(long)]
        email: Option<String>,

        /// 0 = undisclosed, 1 = male, 2 = female
        #[arg(long)]
        gender: Option<i32>,

        /// Avatar URL
        #[arg(long)]
        avatar: Option<String>,
    },

    /// Upload an image and set it as the avatar
    Avatar {
        /// Local image file
        file: PathBuf,
    },
}

/// Execute a user command
pub async fn execute(
    command: UserCommands,
    client: &NotifyingClient,
    format: OutputFormat,
) -> CliResult<()> {
    match command {
        UserCommands::Current => {
            let user = api::user::current_user(client).await?;
            output::print_single(&user, format);
            Ok(())
        }

        UserCommands::Get { user_id } => {
            let user = api::user::user_by_id(client, user_id).await?;
            output::print_single(&user, format);
            Ok(())
        }

        UserCommands::Update {
            username,
            bio,
            email,
            gender,
            avatar,
        } => {
            let update = UserUpdate {
                username,
                bio,
                email,
                gender,
                avatar_url: avatar,
            };
            if update.is_empty() {
                print_warning("nothing to update");
                return Ok(());
            }
            api::user::update_user(client, &update).await?;
            print_success("Profile updated");
            Ok(())
        }

        UserCommands::Avatar { file } => {
            let bytes = tokio::fs::read(&file).await?;
            let name = file
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("avatar")
                .to_string();
            let url = api::file::upload_file(client, &name, bytes).await?;
            let me = api::user::current_user(client).await?;
            api::user::update_avatar(
                client,
                &AvatarUpdate {
                    user_id: me.id,
                    avatar_url: url.clone(),
                },
            )
            .await?;
            print_success(&format!("Avatar updated: {url}"));
            Ok(())
        }
    }
}
