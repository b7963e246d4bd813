//! Configuration for the link resolver.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and `.env` files. Every setting is optional: without
//! Spotify credentials the resolver still works, expanding albums and
//! playlists by scraping the public web page instead of calling the Web API.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults

use std::{env, path::PathBuf};

use dotenv;

/// File extensions treated as directly playable when they terminate a link.
pub const DEFAULT_EXTENSIONS: &[&str] = &[
    ".webm", ".mp3", ".mp4", ".avi", ".wav", ".flv", ".ogg", ".mov",
];

const SPOTIFY_API_URL: &str = "https://api.spotify.com/v1";
const SPOTIFY_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";

/// Runtime configuration of a [`crate::resolver::LinkResolver`].
///
/// The endpoint URLs default to the production Spotify endpoints and are only
/// overridden in tests or unusual deployments.
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    pub spotify_client_id: Option<String>,
    pub spotify_client_secret: Option<String>,
    /// Lowercased, dot-prefixed suffixes recognized as direct file links.
    pub custom_extensions: Vec<String>,
    pub spotify_api_url: String,
    pub spotify_token_url: String,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        ResolverConfig {
            spotify_client_id: None,
            spotify_client_secret: None,
            custom_extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            spotify_api_url: SPOTIFY_API_URL.to_string(),
            spotify_token_url: SPOTIFY_TOKEN_URL.to_string(),
        }
    }
}

impl ResolverConfig {
    /// Builds a configuration from environment variables.
    ///
    /// Reads `SPOTIFY_CLIENT_ID`, `SPOTIFY_CLIENT_SECRET`,
    /// `SUPPORTED_EXTENSIONS` (comma-separated), `SPOTIFY_API_URL` and
    /// `SPOTIFY_TOKEN_URL`. Empty variables count as unset; anything absent
    /// falls back to the defaults.
    pub fn from_env() -> Self {
        let custom_extensions = match env::var("SUPPORTED_EXTENSIONS") {
            Ok(raw) if !raw.trim().is_empty() => parse_extensions(&raw),
            _ => DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
        };

        ResolverConfig {
            spotify_client_id: env::var("SPOTIFY_CLIENT_ID").ok().filter(|v| !v.is_empty()),
            spotify_client_secret: env::var("SPOTIFY_CLIENT_SECRET")
                .ok()
                .filter(|v| !v.is_empty()),
            custom_extensions,
            spotify_api_url: env::var("SPOTIFY_API_URL")
                .unwrap_or_else(|_| SPOTIFY_API_URL.to_string()),
            spotify_token_url: env::var("SPOTIFY_TOKEN_URL")
                .unwrap_or_else(|_| SPOTIFY_TOKEN_URL.to_string()),
        }
    }

    /// True when both halves of the Spotify credentials are present.
    pub fn has_spotify_credentials(&self) -> bool {
        self.spotify_client_id.is_some() && self.spotify_client_secret.is_some()
    }
}

/// Normalizes a comma-separated extension list: trimmed, lowercased, and
/// dot-prefixed, so `"MP3, .Ogg"` becomes `[".mp3", ".ogg"]`.
pub fn parse_extensions(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            let lower = s.to_ascii_lowercase();
            if lower.starts_with('.') {
                lower
            } else {
                format!(".{}", lower)
            }
        })
        .collect()
}

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the necessary directory structure if it doesn't exist and loads
/// environment variables from `tracklink/.env` under the platform-specific
/// local data directory. A missing `.env` file is not an error: all settings
/// are optional and may be provided through the process environment directly.
///
/// # Directory Structure
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/tracklink/.env`
/// - macOS: `~/Library/Application Support/tracklink/.env`
/// - Windows: `%LOCALAPPDATA%/tracklink/.env`
///
/// # Errors
///
/// Returns an error string if the parent directory cannot be created.
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("tracklink/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    // Absent or unreadable .env just means the process environment wins.
    let _ = dotenv::from_path(path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extensions_are_normalized() {
        let exts = parse_extensions("MP3, .Ogg , webm");
        assert_eq!(exts, vec![".mp3", ".ogg", ".webm"]);
    }

    #[test]
    fn empty_segments_are_dropped() {
        let exts = parse_extensions(".mp3,,  ,.wav");
        assert_eq!(exts, vec![".mp3", ".wav"]);
    }

    #[test]
    fn default_config_has_no_credentials() {
        let config = ResolverConfig::default();
        assert!(!config.has_spotify_credentials());
        assert!(config.custom_extensions.contains(&".mp3".to_string()));
        assert_eq!(config.spotify_api_url, "https://api.spotify.com/v1");
    }
}
