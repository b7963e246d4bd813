use std::fmt;

use serde::{Deserialize, Serialize};

/// Source platform of a single music link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Spotify,
    SpotifyPlaylist,
    YouTube,
    Twitter,
    SoundCloud,
    Bandcamp,
    Custom,
    Unknown,
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Platform::Spotify => "Spotify",
            Platform::SpotifyPlaylist => "Spotify Playlist",
            Platform::YouTube => "YouTube",
            Platform::Twitter => "Twitter",
            Platform::SoundCloud => "SoundCloud",
            Platform::Bandcamp => "Bandcamp",
            Platform::Custom => "Custom",
            Platform::Unknown => "Unknown",
        };
        write!(f, "{}", label)
    }
}

/// Kind of collection a link points at, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaylistKind {
    Spotify,
    YouTube,
    Bandcamp,
    Unknown,
}

impl fmt::Display for PlaylistKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PlaylistKind::Spotify => "Spotify Playlist",
            PlaylistKind::YouTube => "YouTube Playlist",
            PlaylistKind::Bandcamp => "BandCamp Playlist",
            PlaylistKind::Unknown => "Unknown",
        };
        write!(f, "{}", label)
    }
}

/// Whether a queue entry was added directly or through playlist expansion.
/// Consumed by the calling bot's queueing logic, not by the resolver itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Origin {
    Default,
    Playlist,
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Origin::Default => "Default",
            Origin::Playlist => "Playlist",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub expires_in: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExternalUrls {
    pub spotify: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumTrack {
    #[serde(default)]
    pub external_urls: Option<ExternalUrls>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumTracksResponse {
    pub items: Vec<AlbumTrack>,
    pub next: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistTrack {
    #[serde(default)]
    pub external_urls: Option<ExternalUrls>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistEntry {
    #[serde(default)]
    pub track: Option<PlaylistTrack>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistItemsResponse {
    pub items: Vec<PlaylistEntry>,
    pub next: Option<String>,
}
