//! TeamUp CLI - terminal client for the partner-matching service
//!
//! This CLI gives the TeamUp backend a terminal front end:
//! - Sign in/out and keep the login state on disk
//! - Browse and manage teams, profiles, and chat history
//! - Upload files
//! - Navigate views by path, gated by the navigation guard

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use teamup_client::{ApiClient, ClientConfig, FailureKind, NotifyingClient, SessionAuth};
use teamup_guard::{NavigationGuard, RouteTable};
use teamup_session::{FileSessionStore, SessionStore};
use teamup_types::User;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;
mod output;
mod views;

use commands::{chat, file, session, team, user};
use config::CliConfig;
use error::CliResult;

/// Default backend endpoint.
const DEFAULT_ENDPOINT: &str = "http://localhost:8080/api";

/// TeamUp CLI application
#[derive(Parser)]
#[command(name = "teamup")]
#[command(about = "TeamUp - terminal client for the partner-matching service", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "TEAMUP_CONFIG")]
    config: Option<String>,

    /// Backend API endpoint
    #[arg(short, long, env = "TEAMUP_ENDPOINT")]
    endpoint: Option<String>,

    /// Output format (table, json, yaml)
    #[arg(short, long, default_value = "table")]
    output: output::OutputFormat,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand)]
enum Commands {
    /// Sign in and persist the session
    Login {
        /// Account name (prompted when omitted)
        #[arg(short, long)]
        account: Option<String>,
    },

    /// Create an account
    Register {
        /// Account name (prompted when omitted)
        #[arg(short, long)]
        account: Option<String>,
    },

    /// Sign out and clear the persisted session
    Logout,

    /// Navigate to a view by path, e.g. /match or /team/5
    Open {
        /// Route path
        path: String,
    },

    /// User profile commands
    User {
        #[command(subcommand)]
        command: user::UserCommands,
    },

    /// Team commands
    Team {
        #[command(subcommand)]
        command: team::TeamCommands,
    },

    /// Team chat commands
    Chat {
        #[command(subcommand)]
        command: chat::ChatCommands,
    },

    /// Upload a file and print its public URL
    Upload {
        /// Local file path
        file: PathBuf,
    },

    /// Show configuration
    Config,

    /// Check backend connectivity
    Status,
}

#[tokio::main]
async fn main() -> CliResult<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    // Load config
    let config = CliConfig::load(cli.config.as_deref())?;
    let endpoint = cli
        .endpoint
        .clone()
        .or_else(|| config.endpoint.clone())
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
    let timeout = Duration::from_secs(config.timeout_seconds.unwrap_or(10));

    // Session store, client, and guard share one view of the login state
    let store: Arc<dyn SessionStore> = Arc::new(FileSessionStore::open_default()?);
    let api = ApiClient::new(&ClientConfig {
        base_url: endpoint.clone(),
        timeout,
    })?
    .with_interceptor(Arc::new(SessionAuth::new(store.clone())));
    let probe = api.clone();
    let client = NotifyingClient::new(api, Arc::new(output::TerminalNotifier));
    let guard = NavigationGuard::new(RouteTable::default(), store.clone());

    // Execute command
    match cli.command {
        Commands::Login { account } => session::login(&client, store.as_ref(), account).await,
        Commands::Register { account } => session::register(&client, account).await,
        Commands::Logout => session::logout(&client, store.as_ref()).await,
        Commands::Open { path } => {
            views::open(&path, &client, &guard, store.as_ref(), cli.output).await
        }
        Commands::User { command } => user::execute(command, &client, cli.output).await,
        Commands::Team { command } => team::execute(command, &client, cli.output).await,
        Commands::Chat { command } => chat::execute(command, &client).await,
        Commands::Upload { file: path } => file::upload(&client, &path).await,
        Commands::Config => {
            println!("Endpoint: {}", endpoint);
            println!("Timeout: {}s", timeout.as_secs());
            println!("Config: {:?}", config);
            Ok(())
        }
        Commands::Status => match probe.get::<User>("/user/current").await {
            Ok(me) => {
                println!("✓ backend is reachable");
                println!("  Logged in as: {}", me.username);
                Ok(())
            }
            Err(e) if e.kind() == FailureKind::Business => {
                println!("✓ backend is reachable (not logged in)");
                Ok(())
            }
            Err(e) => {
                eprintln!("✗ cannot reach backend: {}", e);
                std::process::exit(1);
            }
        },
    }
}
