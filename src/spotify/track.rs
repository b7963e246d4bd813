use reqwest::Client;
use scraper::{Html, Selector};

use crate::{error::ResolveError, links};

/// Resolves a Spotify track link to its display title.
///
/// Fetches the public track page and reads its `<title>` element, stripping
/// the `"- song by"` / `"| Spotify"` decorations Spotify puts around the
/// track and artist names. Links carrying a `?si=` tracking marker are
/// rewritten to the canonical form with `nd=1` appended before the fetch.
///
/// # Errors
///
/// Propagates the fetch error on network failure and returns
/// [`ResolveError::MissingTitle`] when the page has no `<title>` element.
pub async fn resolve_title(client: &Client, url: &str) -> Result<String, ResolveError> {
    let target = rewrite_tracking_url(url);
    let page = client.get(&target).send().await?.text().await?;
    let title = page_title(&page).ok_or(ResolveError::MissingTitle)?;
    Ok(clean_title(&title))
}

/// Canonicalizes a share link that carries the `?si=` tracking marker by
/// appending the `nd=1` flag to the embedded URL. Anything else passes
/// through unchanged.
pub fn rewrite_tracking_url(url: &str) -> String {
    if url.contains("?si=")
        && let Some(found) = links::extract_url(url)
    {
        return format!("{}&nd=1", found);
    }
    url.to_string()
}

fn page_title(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("title").ok()?;
    let element = document.select(&selector).next()?;
    let title = element.text().collect::<String>();
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_string())
}

fn clean_title(title: &str) -> String {
    let stripped = title.replace("- song by", "").replace("| Spotify", "");
    // stripping leaves doubled interior spaces behind
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}
