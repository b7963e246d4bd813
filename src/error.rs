use thiserror::Error;

/// Failure modes of a resolution call.
///
/// The variants are deliberately narrow so callers (and the resolver's own
/// API-to-scrape fallback) can tell a credentials problem from a transient
/// network failure or a missing resource.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// Network or transport failure, or a non-success API status that is
    /// neither an auth rejection nor a missing resource.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Spotify rejected the configured client credentials.
    #[error("spotify rejected the api credentials: {0}")]
    Auth(String),

    /// The requested album or playlist does not exist or is not visible.
    #[error("no such collection: {0}")]
    NotFound(String),

    /// The fetched page carries no `<title>` element.
    #[error("page has no title element")]
    MissingTitle,

    /// The URL does not carry a collection id where one was expected.
    #[error("malformed collection url: {0}")]
    MalformedUrl(String),
}
