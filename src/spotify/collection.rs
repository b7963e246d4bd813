use reqwest::{Client, Response, StatusCode};
use scraper::{Html, Selector};

use crate::{
    error::ResolveError,
    spotify::TokenManager,
    types::{AlbumTracksResponse, PlaylistItemsResponse},
};

/// Which Web API listing a collection link maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionKind {
    Album,
    Playlist,
}

/// Reads the collection kind off the URL path, if it names one.
pub fn collection_kind(url: &str) -> Option<CollectionKind> {
    if url.contains("/album/") {
        Some(CollectionKind::Album)
    } else if url.contains("/playlist/") {
        Some(CollectionKind::Playlist)
    } else {
        None
    }
}

/// Extracts the collection id: the fifth `/`-separated segment of the share
/// URL, with any query suffix stripped.
pub fn collection_id(url: &str) -> Result<&str, ResolveError> {
    let segment = url
        .split('/')
        .nth(4)
        .ok_or_else(|| ResolveError::MalformedUrl(url.to_string()))?;
    let id = segment.split('?').next().unwrap_or(segment);
    if id.is_empty() {
        return Err(ResolveError::MalformedUrl(url.to_string()));
    }
    Ok(id)
}

/// Lists a collection's track URLs through the Web API, paging until the
/// listing is exhausted.
pub async fn api_collection_tracks(
    client: &Client,
    manager: &mut TokenManager,
    api_url: &str,
    kind: CollectionKind,
    id: &str,
) -> Result<Vec<String>, ResolveError> {
    let token = manager.get_valid_token(client).await?;
    match kind {
        CollectionKind::Album => album_tracks(client, &token, api_url, id).await,
        CollectionKind::Playlist => playlist_tracks(client, &token, api_url, id).await,
    }
}

async fn album_tracks(
    client: &Client,
    token: &str,
    api_url: &str,
    id: &str,
) -> Result<Vec<String>, ResolveError> {
    let mut tracks = Vec::new();
    let mut next = Some(format!("{}/albums/{}/tracks?limit=50", api_url, id));

    while let Some(page_url) = next {
        let response = checked_get(client, &page_url, token).await?;
        let page = response.json::<AlbumTracksResponse>().await?;
        // tracks without a public Spotify link (local or market-restricted
        // entries) are skipped; the caller cannot queue them anyway
        tracks.extend(
            page.items
                .into_iter()
                .filter_map(|item| item.external_urls.and_then(|urls| urls.spotify)),
        );
        next = page.next;
    }

    Ok(tracks)
}

async fn playlist_tracks(
    client: &Client,
    token: &str,
    api_url: &str,
    id: &str,
) -> Result<Vec<String>, ResolveError> {
    let mut tracks = Vec::new();
    let mut next = Some(format!("{}/playlists/{}/tracks?limit=50", api_url, id));

    while let Some(page_url) = next {
        let response = checked_get(client, &page_url, token).await?;
        let page = response.json::<PlaylistItemsResponse>().await?;
        // same filtering as for albums, one nesting level down
        tracks.extend(page.items.into_iter().filter_map(|entry| {
            entry
                .track
                .and_then(|track| track.external_urls)
                .and_then(|urls| urls.spotify)
        }));
        next = page.next;
    }

    Ok(tracks)
}

async fn checked_get(client: &Client, url: &str, token: &str) -> Result<Response, ResolveError> {
    let response = client.get(url).bearer_auth(token).send().await?;

    let status = response.status();
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return Err(ResolveError::Auth(format!("api returned {}", status)));
    }
    if status == StatusCode::NOT_FOUND {
        return Err(ResolveError::NotFound(url.to_string()));
    }

    Ok(response.error_for_status()?)
}

/// Lists a collection's track URLs by scraping the public page: every element
/// carrying `property="music:song"` contributes its `content` attribute, in
/// document order.
pub async fn scrape_collection_tracks(
    client: &Client,
    url: &str,
) -> Result<Vec<String>, ResolveError> {
    let flagged = if url.contains('?') {
        format!("{}&nd=1", url)
    } else {
        format!("{}?nd=1", url)
    };

    let page = client.get(&flagged).send().await?.text().await?;
    Ok(song_meta_urls(&page))
}

fn song_meta_urls(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let Ok(selector) = Selector::parse(r#"[property="music:song"][content]"#) else {
        return Vec::new();
    };

    document
        .select(&selector)
        .filter_map(|element| element.value().attr("content"))
        .map(str::to_string)
        .collect()
}
