//! Configuration management for spotop.
//!
//! Values come from environment variables, optionally seeded from a `.env` file
//! in the local data directory. The lookup order is:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (where applicable)

use std::{env, path::PathBuf};

use crate::Res;

/// Default number of records requested per page.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Largest `limit` the top-items endpoints accept.
pub const MAX_PAGE_SIZE: u32 = 50;

/// Loads environment variables from `spotop/.env` in the local data directory.
///
/// Creates the directory if it does not exist yet. A missing `.env` file is not an
/// error: every key can also come from the process environment.
///
/// # Directory Structure
///
/// - Linux: `~/.local/share/spotop/.env`
/// - macOS: `~/Library/Application Support/spotop/.env`
/// - Windows: `%LOCALAPPDATA%/spotop/.env`
///
/// # Errors
///
/// Returns an error if the directory cannot be created or an existing `.env`
/// file cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    let path = env_path();
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

/// Location of the `.env` file read by [`load_env`].
pub fn env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("spotop/.env");
    path
}

/// Address the local OAuth callback server binds to.
pub fn server_addr() -> String {
    optional("SERVER_ADDRESS", "127.0.0.1:8888")
}

/// Client id of the registered Spotify application.
///
/// # Errors
///
/// Fails if `SPOTIFY_API_AUTH_CLIENT_ID` is not set.
pub fn spotify_client_id() -> Res<String> {
    required("SPOTIFY_API_AUTH_CLIENT_ID")
}

/// Redirect URI registered for the application; must point at [`server_addr`].
pub fn spotify_redirect_uri() -> String {
    optional("SPOTIFY_API_REDIRECT_URI", "http://127.0.0.1:8888/callback")
}

/// Scopes requested during authorization.
pub fn spotify_scope() -> String {
    optional("SPOTIFY_API_AUTH_SCOPE", "user-top-read")
}

pub fn spotify_apiauth_url() -> String {
    optional(
        "SPOTIFY_API_AUTH_URL",
        "https://accounts.spotify.com/authorize",
    )
}

pub fn spotify_apiurl() -> String {
    optional("SPOTIFY_API_URL", "https://api.spotify.com/v1")
}

pub fn spotify_apitoken_url() -> String {
    optional(
        "SPOTIFY_API_TOKEN_URL",
        "https://accounts.spotify.com/api/token",
    )
}

/// Records requested per page, from `SPOTOP_PAGE_SIZE`.
///
/// Falls back to [`DEFAULT_PAGE_SIZE`] when unset or unparsable.
pub fn page_size() -> u32 {
    parse_page_size(env::var("SPOTOP_PAGE_SIZE").ok().as_deref())
}

/// Parses a page size, clamping it to `1..=MAX_PAGE_SIZE`.
pub fn parse_page_size(raw: Option<&str>) -> u32 {
    raw.and_then(|v| v.trim().parse::<u32>().ok())
        .map(|v| v.clamp(1, MAX_PAGE_SIZE))
        .unwrap_or(DEFAULT_PAGE_SIZE)
}

fn required(key: &str) -> Res<String> {
    match env::var(key) {
        Ok(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(format!("{} must be set (see {})", key, env_path().display()).into()),
    }
}

fn optional(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}
