//! Configuration management.
//!
//! Configuration values come from environment variables, optionally seeded by
//! a `.env` file in the local data directory:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (where applicable)
//!
//! Getters for required values return [`AuthError::Config`] instead of
//! panicking, so a missing credential fails the flow before any socket is
//! opened or any request is sent.

use std::{env, path::PathBuf, time::Duration};

use crate::{
    error::AuthError,
    scopes::ScopeSet,
    types::{AppRegistration, ClientCredentials, QuotaMode},
};

pub const DEFAULT_AUTH_URL: &str = "https://accounts.spotify.com/authorize";
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";

/// Loads environment variables from a `.env` file in the local data directory.
///
/// The file is looked up at:
/// - Linux: `~/.local/share/spotlibfy/.env`
/// - macOS: `~/Library/Application Support/spotlibfy/.env`
/// - Windows: `%LOCALAPPDATA%/spotlibfy/.env`
///
/// A missing file is not an error: the variables may already be exported in
/// the process environment. Variables already set are not overridden.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the file exists but
/// cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    let path = env_file_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

pub fn env_file_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("spotlibfy/.env");
    path
}

/// Returns the Spotify API client ID (`SPOTIFY_API_AUTH_CLIENT_ID`).
pub fn spotify_client_id() -> Result<String, AuthError> {
    required("SPOTIFY_API_AUTH_CLIENT_ID")
}

/// Returns the Spotify API client secret (`SPOTIFY_API_AUTH_CLIENT_SECRET`).
///
/// The secret should be kept confidential and never exposed in logs.
pub fn spotify_client_secret() -> Result<String, AuthError> {
    required("SPOTIFY_API_AUTH_CLIENT_SECRET")
}

/// Returns the registered redirect URIs (`SPOTIFY_API_REDIRECT_URI`).
///
/// Several URIs may be given separated by commas; the flow uses the first one.
///
/// ```
/// let uris = spotify_redirect_uris()?; // e.g. ["http://localhost:8080/callback"]
/// ```
pub fn spotify_redirect_uris() -> Result<Vec<String>, AuthError> {
    let raw = required("SPOTIFY_API_REDIRECT_URI")?;
    Ok(raw
        .split(',')
        .map(str::trim)
        .filter(|uri| !uri.is_empty())
        .map(str::to_string)
        .collect())
}

/// Returns the quota mode of the app (`SPOTIFY_APP_QUOTA_MODE`), development by default.
pub fn spotify_quota_mode() -> Result<QuotaMode, AuthError> {
    match optional("SPOTIFY_APP_QUOTA_MODE") {
        Some(mode) => mode.parse(),
        None => Ok(QuotaMode::default()),
    }
}

/// Returns the scopes requested by default (`SPOTIFY_API_AUTH_SCOPE`).
///
/// ```
/// let scope = spotify_scope(); // e.g. Some("user-follow-read playlist-modify-public")
/// ```
pub fn spotify_scope() -> Option<String> {
    optional("SPOTIFY_API_AUTH_SCOPE")
}

/// Returns the Spotify OAuth authorization URL (`SPOTIFY_API_AUTH_URL`).
pub fn spotify_apiauth_url() -> String {
    optional("SPOTIFY_API_AUTH_URL").unwrap_or_else(|| DEFAULT_AUTH_URL.to_string())
}

/// Returns the Spotify OAuth token exchange URL (`SPOTIFY_API_TOKEN_URL`).
pub fn spotify_apitoken_url() -> String {
    optional("SPOTIFY_API_TOKEN_URL").unwrap_or_else(|| DEFAULT_TOKEN_URL.to_string())
}

/// Returns how long to wait for the authorization redirect
/// (`SPOTIFY_CALLBACK_TIMEOUT_SECS`). `None` waits without limit.
pub fn callback_timeout() -> Result<Option<Duration>, AuthError> {
    match optional("SPOTIFY_CALLBACK_TIMEOUT_SECS") {
        Some(secs) => secs
            .parse::<u64>()
            .map(|s| Some(Duration::from_secs(s)))
            .map_err(|e| {
                AuthError::Config(format!(
                    "SPOTIFY_CALLBACK_TIMEOUT_SECS must be a number of seconds: {}",
                    e
                ))
            }),
        None => Ok(None),
    }
}

/// Builds the application registration from the environment.
///
/// # Errors
///
/// Fails when the client id, client secret or redirect URI is missing, or the
/// quota mode is not recognized.
pub fn registration() -> Result<AppRegistration, AuthError> {
    let credentials = ClientCredentials::new(
        spotify_client_id()?,
        spotify_client_secret()?,
        spotify_quota_mode()?,
    )?;

    AppRegistration::new(
        optional("SPOTIFY_APP_NAME").unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string()),
        optional("SPOTIFY_APP_DESCRIPTION").unwrap_or_default(),
        optional("SPOTIFY_APP_WEBSITE").unwrap_or_default(),
        spotify_redirect_uris()?,
        credentials,
    )
}

/// Parses the configured default scopes; empty when none are configured.
pub fn scopes() -> Result<ScopeSet, AuthError> {
    match spotify_scope() {
        Some(scope) => ScopeSet::parse(&scope),
        None => Ok(ScopeSet::new()),
    }
}

fn required(key: &str) -> Result<String, AuthError> {
    optional(key).ok_or_else(|| AuthError::Config(format!("{} must be set", key)))
}

fn optional(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
