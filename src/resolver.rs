use tokio::sync::Mutex;

use crate::{
    config::ResolverConfig,
    error::ResolveError,
    info, links,
    session::SessionManager,
    spotify::{self, TokenManager, collection},
    types::{Platform, PlaylistKind},
    warning,
};

/// The resolver component: owns the configuration, the shared HTTP session,
/// and - when credentials are configured - the Spotify Web API token manager.
///
/// All resolution calls are independent and may run concurrently; the only
/// shared state is the lazily-created HTTP session and the cached API token,
/// both behind async locks. [`LinkResolver::close`] tears the session down;
/// the next resolution call transparently creates a fresh one.
pub struct LinkResolver {
    config: ResolverConfig,
    session: SessionManager,
    spotify: Option<Mutex<TokenManager>>,
}

impl LinkResolver {
    pub fn new(config: ResolverConfig) -> Self {
        let spotify = match (&config.spotify_client_id, &config.spotify_client_secret) {
            (Some(id), Some(secret)) => {
                info!("Spotify API credentials found; album and playlist expansion will use the Web API");
                Some(Mutex::new(TokenManager::new(
                    id.clone(),
                    secret.clone(),
                    config.spotify_token_url.clone(),
                )))
            }
            (None, None) => None,
            _ => {
                warning!(
                    "Only one of SPOTIFY_CLIENT_ID and SPOTIFY_CLIENT_SECRET is set; albums and playlists will be expanded by page scrape"
                );
                None
            }
        };

        LinkResolver {
            config,
            session: SessionManager::new(),
            spotify,
        }
    }

    /// Builds a resolver from the process environment. See
    /// [`ResolverConfig::from_env`] for the variables read.
    pub fn from_env() -> Self {
        LinkResolver::new(ResolverConfig::from_env())
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Classifies a link by source platform, using the configured custom
    /// file extensions.
    pub fn classify_platform(&self, url: Option<&str>) -> Platform {
        links::classify_platform(url, &self.config.custom_extensions)
    }

    pub fn classify_playlist(&self, url: Option<&str>) -> PlaylistKind {
        links::classify_playlist(url)
    }

    /// Resolves a Spotify track link to its display title.
    pub async fn resolve_spotify_title(&self, url: &str) -> Result<String, ResolveError> {
        let client = self.session.get().await?;
        spotify::track::resolve_title(&client, url).await
    }

    /// Expands a Spotify album or playlist link into the ordered list of its
    /// tracks' canonical URLs.
    ///
    /// With credentials configured the Web API is tried first; on failure the
    /// reason is logged and the public page is scraped instead. Without
    /// credentials the page scrape is the only path.
    ///
    /// # Errors
    ///
    /// [`ResolveError::MalformedUrl`] when the URL carries no collection id;
    /// otherwise whatever the scraping path propagates.
    pub async fn resolve_spotify_collection(
        &self,
        url: &str,
    ) -> Result<Vec<String>, ResolveError> {
        let client = self.session.get().await?;
        let id = collection::collection_id(url)?;

        if let Some(manager) = &self.spotify
            && let Some(kind) = collection::collection_kind(url)
        {
            let mut manager = manager.lock().await;
            match collection::api_collection_tracks(
                &client,
                &mut manager,
                &self.config.spotify_api_url,
                kind,
                id,
            )
            .await
            {
                Ok(tracks) => return Ok(tracks),
                Err(ResolveError::Auth(reason)) => warning!(
                    "Spotify rejected the API credentials ({}); check SPOTIFY_CLIENT_ID and SPOTIFY_CLIENT_SECRET. Falling back to page scrape",
                    reason
                ),
                Err(ResolveError::NotFound(what)) => warning!(
                    "Spotify API has no such collection ({}); falling back to page scrape",
                    what
                ),
                Err(e) => {
                    warning!("Spotify API request failed ({}); falling back to page scrape", e)
                }
            }
        }

        collection::scrape_collection_tracks(&client, url).await
    }

    /// Closes the shared HTTP session. Safe to call repeatedly; a later
    /// resolution call creates a new session.
    pub async fn close(&self) {
        self.session.close().await;
    }

    pub async fn is_open(&self) -> bool {
        self.session.is_open().await
    }
}
