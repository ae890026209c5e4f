//! Configuration management for the Aura CLI.
//!
//! Loads configuration from environment variables and a `.env` file in the
//! local data directory. Two kinds of values exist:
//!
//! 1. Secrets (catalog credentials, AI key) are optional: missing values
//!    make the corresponding integration degrade to its offline behavior,
//!    they never abort the program.
//! 2. Endpoint URLs and model names carry production defaults and only need
//!    to be set to point the client at a different service.

use dotenv;
use std::{env, path::PathBuf};

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Looks for `<data dir>/aura/.env`, creating the directory first so a user
/// can drop a file there later. A missing `.env` is perfectly fine: the
/// application then runs on process environment variables alone (possibly
/// none, which means local-only mode).
///
/// # Directory Structure
///
/// - Linux: `~/.local/share/aura/.env`
/// - macOS: `~/Library/Application Support/aura/.env`
/// - Windows: `%LOCALAPPDATA%/aura/.env`
///
/// # Errors
///
/// Returns an error only if the parent directory cannot be created.
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("aura/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    // No .env file is a supported configuration (zero-config demo mode)
    if path.is_file() {
        dotenv::from_path(path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

/// Reads an environment variable, treating empty values as unset.
fn optional(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Returns the Spotify client ID, if configured.
///
/// `None` short-circuits catalog authentication: no network call is made
/// and every catalog feature falls back to the local record store.
pub fn catalog_client_id() -> Option<String> {
    optional("SPOTIFY_CLIENT_ID")
}

/// Returns the Spotify client secret, if configured.
pub fn catalog_client_secret() -> Option<String> {
    optional("SPOTIFY_CLIENT_SECRET")
}

/// Returns the Spotify Web API base URL.
///
/// Defaults to the public production endpoint; override with
/// `SPOTIFY_API_URL` (useful for pointing tests at a stub server).
pub fn catalog_api_url() -> String {
    optional("SPOTIFY_API_URL").unwrap_or_else(|| "https://api.spotify.com/v1".to_string())
}

/// Returns the OAuth token endpoint for the client-credentials exchange.
///
/// Defaults to the public accounts endpoint; override with
/// `SPOTIFY_TOKEN_URL`.
pub fn catalog_token_url() -> String {
    optional("SPOTIFY_TOKEN_URL")
        .unwrap_or_else(|| "https://accounts.spotify.com/api/token".to_string())
}

/// Returns the Gemini API key, if configured.
///
/// `None` keeps the support oracle in its fixed offline mode.
pub fn ai_api_key() -> Option<String> {
    optional("GEMINI_API_KEY")
}

/// Returns the Gemini API base URL (`GEMINI_API_URL`, with default).
pub fn ai_api_url() -> String {
    optional("GEMINI_API_URL")
        .unwrap_or_else(|| "https://generativelanguage.googleapis.com/v1beta".to_string())
}

/// Returns the completion model name (`GEMINI_MODEL`, with default).
pub fn ai_model() -> String {
    optional("GEMINI_MODEL").unwrap_or_else(|| "gemini-2.0-flash".to_string())
}
