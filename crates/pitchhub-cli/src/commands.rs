//! CLI command implementations.

use pitchhub_client::{PitchHubClient, RequestError, StorageError};
use pitchhub_types::{FeedQuery, ForgotPasswordRequest, LoginRequest, Role, SearchQuery, SignupRequest};
use serde::Serialize;
use thiserror::Error;

/// CLI errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{}", .0.user_message())]
    Request(#[from] RequestError),

    #[error("Session error: {0}")]
    Storage(#[from] StorageError),

    #[error("Output error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CliError>;

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Sign in and persist the session.
pub async fn login(client: &PitchHubClient, email: &str, password: &str) -> Result<()> {
    tracing::info!(email = %email, "Logging in");

    let response = client
        .auth()
        .login(&LoginRequest::new(email, password))
        .await?;

    match response.data.user.as_ref().and_then(|u| u.role.as_ref()) {
        Some(role) => println!("Logged in as {email} ({role})"),
        None => println!("Logged in as {email}"),
    }
    Ok(())
}

/// Create an account and persist the session.
pub async fn signup(
    client: &PitchHubClient,
    email: String,
    password: String,
    full_name: String,
    role: Option<Role>,
) -> Result<()> {
    tracing::info!(email = %email, role = ?role, "Signing up");

    let request = SignupRequest {
        email,
        password,
        full_name,
        role,
        ..SignupRequest::default()
    };
    let response = client.auth().signup(&request).await?;

    if response.data.token.is_some() {
        println!("Account created for {}. You are now signed in.", request.email);
    } else {
        println!("Account created for {}.", request.email);
    }
    Ok(())
}

/// Request a password reset code.
pub async fn forgot_password(client: &PitchHubClient, email: &str) -> Result<()> {
    let response = client
        .auth()
        .forgot_password(&ForgotPasswordRequest {
            email: email.to_string(),
        })
        .await?;

    println!(
        "{}",
        response
            .data
            .message
            .unwrap_or_else(|| format!("A reset code was sent to {email}"))
    );
    Ok(())
}

/// Clear the local session.
pub fn logout(client: &PitchHubClient) -> Result<()> {
    client.auth().logout()?;
    println!("Logged out.");
    Ok(())
}

/// Show the local session without contacting the server.
pub fn status(client: &PitchHubClient) -> Result<()> {
    let credentials = client.credentials();
    let profile = credentials.user_data()?;

    println!("PitchHub Status");
    println!("===============");
    println!("Version:       {}", env!("CARGO_PKG_VERSION"));
    println!(
        "API:           {}",
        client.gateway().base_url().unwrap_or("(not configured)")
    );
    println!(
        "Authenticated: {}",
        if credentials.is_authenticated() { "yes" } else { "no" }
    );

    if let Some(profile) = profile {
        if let Some(email) = &profile.email {
            println!("Email:         {email}");
        }
        if let Some(role) = &profile.role {
            println!("Role:          {role}");
        }
    }
    Ok(())
}

/// Fetch the current user's profile.
pub async fn whoami(client: &PitchHubClient) -> Result<()> {
    let response = client.users().me().await?;
    print_json(&response.data)
}

/// Show one page of the feed.
pub async fn feed(
    client: &PitchHubClient,
    feed_type: &str,
    limit: u32,
    cursor: Option<String>,
) -> Result<()> {
    let mut query = FeedQuery::new(feed_type).with_limit(limit);
    query.cursor = cursor;

    let page = client.reels().feed(&query).await?.into_data();
    print_json(&page)?;

    if let Some(next) = &page.next_cursor {
        eprintln!("More results: --cursor {next}");
    }
    Ok(())
}

/// Search across entity types.
pub async fn search(client: &PitchHubClient, query: &str, kind: Option<String>) -> Result<()> {
    let mut search = SearchQuery::new(query);
    search.kind = kind;

    let results = client.explore().search(&search).await?.into_data();
    tracing::info!(total = results.total(), "Search complete");
    print_json(&results)
}

/// Show trending hashtags.
pub async fn trending(client: &PitchHubClient) -> Result<()> {
    let tags = client.explore().trending_hashtags().await?.into_data();
    for tag in tags {
        println!("{:<24} {}", tag.tag, tag.count);
    }
    Ok(())
}

/// List notifications.
pub async fn notifications(client: &PitchHubClient, kind: Option<&str>) -> Result<()> {
    let list = client.notifications().list(kind).await?.into_data();
    if list.is_empty() {
        println!("No notifications.");
        return Ok(());
    }

    for n in list {
        let marker = if n.read { ' ' } else { '*' };
        println!("{marker} [{}] {}", n.kind.as_deref().unwrap_or("general"), n.message);
    }
    Ok(())
}

/// Mark every notification as read.
pub async fn notifications_read_all(client: &PitchHubClient) -> Result<()> {
    let ack = client.notifications().mark_all_read().await?.into_data();
    println!(
        "{}",
        ack.message
            .unwrap_or_else(|| "All notifications marked as read.".to_string())
    );
    Ok(())
}

/// List meetings.
pub async fn meetings(client: &PitchHubClient) -> Result<()> {
    let list = client.meetings().list().await?.into_data();
    print_json(&list)
}
