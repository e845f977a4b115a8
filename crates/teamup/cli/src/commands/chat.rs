//! Team chat commands

use crate::error::CliResult;
use crate::output::print_info;
use clap::Subcommand;
use colored::*;
use teamup_client::{api, NotifyingClient};

/// Chat subcommands
#[derive(Subcommand)]
pub enum ChatCommands {
    /// Show a team's message history
    History {
        /// Team id
        team_id: u64,
    },
}

/// Execute a chat command
pub async fn execute(command: ChatCommands, client: &NotifyingClient) -> CliResult<()> {
    match command {
        ChatCommands::History { team_id } => {
            let messages = api::chat::history(client, team_id).await?;
            if messages.is_empty() {
                print_info("no messages yet");
                return Ok(());
            }
            for message in messages {
                let name = if message.is_mine {
                    message.username.as_str().green()
                } else {
                    message.username.as_str().cyan()
                };
                println!(
                    "{} {} {}",
                    message.create_time.as_str().dimmed(),
                    name,
                    message.content
                );
            }
            Ok(())
        }
    }
}
