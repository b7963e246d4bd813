//! # Spotify Integration Module
//!
//! This module talks to Spotify for the two resolution paths the library
//! offers: reading a single track's display title from its public page, and
//! expanding an album or playlist into the list of its tracks' canonical URLs.
//!
//! ## Submodules
//!
//! - [`auth`] - Client-credentials token management for the Web API
//! - [`track`] - Single-track title resolution from the public page
//! - [`collection`] - Album/playlist expansion: paginated Web API listing
//!   with a page-scraping fallback
//!
//! ## API vs. scraping
//!
//! The Web API path needs configured client credentials and pages through the
//! album/playlist track listings by following the `next` continuation URL
//! until exhausted. The scraping path needs nothing: it fetches the public
//! page and collects the `music:song` meta properties. The resolver tries the
//! API first when it can and falls back to scraping on failure; see
//! [`crate::resolver::LinkResolver::resolve_spotify_collection`].
//!
//! ## Error Types
//!
//! Everything here returns [`crate::error::ResolveError`], with auth
//! rejections (400/401/403) and missing collections (404) mapped to their own
//! variants so the caller can log the fallback reason precisely.

pub mod auth;
pub mod collection;
pub mod track;

pub use auth::TokenManager;
