//! Music Link Resolution Library
//!
//! This library resolves user-supplied music links into a normalized set of
//! playable track URLs. It classifies each link by source platform and expands
//! Spotify playlist and album links into individual track links, either through
//! the Spotify Web API (when credentials are configured) or by scraping the
//! public web page.
//!
//! # Modules
//!
//! - `config` - Configuration management and environment variables
//! - `error` - The structured error type for resolution failures
//! - `links` - Pure link analysis: URL extraction and platform classification
//! - `resolver` - The owning resolver component and its public surface
//! - `session` - Shared HTTP session lifecycle
//! - `spotify` - Spotify Web API client and page-scraping fallback
//! - `types` - Data structures and type definitions
//!
//! # Example
//!
//! ```
//! use tracklink::resolver::LinkResolver;
//! use tracklink::types::Platform;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), tracklink::error::ResolveError> {
//!     tracklink::config::load_env().await.ok();
//!     let resolver = LinkResolver::from_env();
//!
//!     let url = tracklink::links::extract_url("play https://open.spotify.com/album/abc?si=x");
//!     if resolver.classify_platform(url) == Platform::SpotifyPlaylist {
//!         let tracks = resolver.resolve_spotify_collection(url.unwrap()).await?;
//!         println!("{} tracks", tracks.len());
//!     }
//!     resolver.close().await;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod links;
pub mod resolver;
pub mod session;
pub mod spotify;
pub mod types;

/// Prints an informational message with a blue bullet point.
///
/// Creates a formatted output line with a distinctive blue "o" indicator
/// followed by the provided message. Used for general information and
/// status updates.
///
/// # Example
///
/// ```
/// info!("Spotify API client enabled");
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Creates a formatted output line with a yellow "!" indicator to highlight
/// recoverable issues or important information that callers should notice,
/// such as the resolver falling back from the Web API to page scraping.
///
/// # Example
///
/// ```
/// warning!("Spotify API request failed ({}), falling back to page scrape", err);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
