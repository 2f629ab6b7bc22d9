//! PitchHub CLI - Command-line interface for the PitchHub API.

use anyhow::Context;
use clap::{Parser, Subcommand};
use pitchhub_client::{ClientConfig, CredentialStore, FileStorage, PitchHubClient};
use pitchhub_types::Role;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

/// PitchHub - where startups meet investors
#[derive(Parser, Debug)]
#[command(name = "pitchhub")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// API base URL
    #[arg(long, env = "PITCHHUB_API_URL", global = true)]
    api_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, env = "PITCHHUB_TIMEOUT_SECS", global = true)]
    timeout: Option<u64>,

    /// Session file (default: <config dir>/pitchhub/session.json)
    #[arg(long, env = "PITCHHUB_SESSION", global = true, conflicts_with = "ephemeral")]
    session: Option<PathBuf>,

    /// Keep the session in memory only
    #[arg(long, global = true)]
    ephemeral: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Sign in with email and password
    Login {
        /// Account email
        #[arg(short, long)]
        email: String,
        /// Account password
        #[arg(short, long)]
        password: String,
    },

    /// Create an account
    Signup {
        /// Account email
        #[arg(short, long)]
        email: String,
        /// Account password
        #[arg(short, long)]
        password: String,
        /// Display name
        #[arg(long)]
        full_name: String,
        /// Role (viewer, startup, investor, incubator)
        #[arg(long)]
        role: Option<Role>,
    },

    /// Request a password reset code
    ForgotPassword {
        /// Account email
        #[arg(short, long)]
        email: String,
    },

    /// Clear the local session
    Logout,

    /// Show the local session
    Status,

    /// Fetch the current user's profile from the server
    Whoami,

    /// Show a page of the reel feed
    Feed {
        /// Feed type
        #[arg(short = 't', long = "type", default_value = "all")]
        feed_type: String,
        /// Page size
        #[arg(short, long, default_value_t = 10)]
        limit: u32,
        /// Cursor from a previous page
        #[arg(short, long)]
        cursor: Option<String>,
    },

    /// Search startups, investors and reels
    Search {
        /// Search text
        query: String,
        /// Restrict to one entity type
        #[arg(short = 't', long = "type")]
        kind: Option<String>,
    },

    /// Show trending hashtags
    Trending,

    /// List notifications
    Notifications {
        /// Filter by notification type
        #[arg(short = 't', long = "type")]
        kind: Option<String>,
    },

    /// Mark every notification as read
    NotificationsReadAll,

    /// List meetings
    Meetings,
}

fn main() {
    let cli = Cli::parse();

    // Initialize tracing
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("pitchhub={log_level}").into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let result = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")
        .and_then(|runtime| runtime.block_on(run(cli)));

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let client = build_client(&cli)?;

    match cli.command {
        Commands::Login { email, password } => commands::login(&client, &email, &password).await?,
        Commands::Signup {
            email,
            password,
            full_name,
            role,
        } => commands::signup(&client, email, password, full_name, role).await?,
        Commands::ForgotPassword { email } => commands::forgot_password(&client, &email).await?,
        Commands::Logout => commands::logout(&client)?,
        Commands::Status => commands::status(&client)?,
        Commands::Whoami => commands::whoami(&client).await?,
        Commands::Feed {
            feed_type,
            limit,
            cursor,
        } => commands::feed(&client, &feed_type, limit, cursor).await?,
        Commands::Search { query, kind } => commands::search(&client, &query, kind).await?,
        Commands::Trending => commands::trending(&client).await?,
        Commands::Notifications { kind } => {
            commands::notifications(&client, kind.as_deref()).await?;
        }
        Commands::NotificationsReadAll => commands::notifications_read_all(&client).await?,
        Commands::Meetings => commands::meetings(&client).await?,
    }

    Ok(())
}

fn build_client(cli: &Cli) -> anyhow::Result<PitchHubClient> {
    let mut config = ClientConfig::default();
    if let Some(url) = &cli.api_url {
        config = config.with_base_url(url.as_str());
    }
    if let Some(secs) = cli.timeout.filter(|s| *s > 0) {
        config = config.with_timeout(Duration::from_secs(secs));
    }

    let credentials = if cli.ephemeral {
        CredentialStore::in_memory()
    } else {
        let path = match &cli.session {
            Some(path) => path.clone(),
            None => FileStorage::default_path().context("could not locate the session file")?,
        };
        tracing::debug!(path = %path.display(), "Using session file");
        CredentialStore::file(path)
    };

    PitchHubClient::new(config, credentials).context("invalid client configuration")
}
