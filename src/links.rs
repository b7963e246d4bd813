use crate::types::{Platform, PlaylistKind};

/// Scans free text for the first `http(s)://` URL and returns exactly that
/// substring, or `None` when the text contains no URL.
pub fn extract_url(text: &str) -> Option<&str> {
    for (idx, _) in text.match_indices("http") {
        let rest = &text[idx..];
        let scheme_len = if rest.starts_with("https://") {
            8
        } else if rest.starts_with("http://") {
            7
        } else {
            continue;
        };

        let tail = &rest[scheme_len..];
        let run = tail
            .find(|c: char| !is_url_char(c))
            .unwrap_or(tail.len());
        if run == 0 {
            continue;
        }
        return Some(&rest[..scheme_len + run]);
    }
    None
}

// Unreserved/percent-encoded URL characters. The `$`..`_` range covers the
// ASCII punctuation a shared link actually carries ($ % & ' ( ) * + , - . /
// digits : ; < = > ? @ uppercase [ \ ] ^ _) and deliberately excludes `#`,
// so fragments terminate the match.
fn is_url_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || ('$'..='_').contains(&c) || c == '!'
}

/// Rewrites a mobile SoundCloud link to its canonical non-mobile form.
/// Any other input is returned unchanged; the transform is idempotent.
pub fn normalize_soundcloud(url: &str) -> String {
    if let Some(rest) = url.strip_prefix("https://m.") {
        return format!("https://{}", rest);
    }
    if let Some(rest) = url.strip_prefix("http://m.") {
        return format!("https://{}", rest);
    }
    url.to_string()
}

/// Classifies a link by source platform. First match wins; `None` and
/// anything unrecognized yield [`Platform::Unknown`].
pub fn classify_platform(url: Option<&str>, custom_extensions: &[String]) -> Platform {
    let Some(url) = url else {
        return Platform::Unknown;
    };

    if url.contains("https://www.youtu") || url.contains("https://youtu.be") {
        return Platform::YouTube;
    }
    if url.contains("https://open.spotify.com/track") {
        return Platform::Spotify;
    }
    if url.contains("https://open.spotify.com/playlist")
        || url.contains("https://open.spotify.com/album")
    {
        return Platform::SpotifyPlaylist;
    }
    if url.contains("bandcamp.com/track/") {
        return Platform::Bandcamp;
    }
    if url.contains("https://twitter.com/") {
        return Platform::Twitter;
    }

    let lower = url.to_ascii_lowercase();
    if custom_extensions.iter().any(|ext| lower.ends_with(ext)) {
        return Platform::Custom;
    }

    if url.contains("soundcloud.com/") {
        return Platform::SoundCloud;
    }

    Platform::Unknown
}

/// Classifies a link by collection kind. First match wins; `None` and
/// anything unrecognized yield [`PlaylistKind::Unknown`].
pub fn classify_playlist(url: Option<&str>) -> PlaylistKind {
    let Some(url) = url else {
        return PlaylistKind::Unknown;
    };

    if url.contains("playlist?list=") {
        return PlaylistKind::YouTube;
    }
    if url.contains("https://open.spotify.com/playlist")
        || url.contains("https://open.spotify.com/album")
    {
        return PlaylistKind::Spotify;
    }
    if url.contains("bandcamp.com/album/") {
        return PlaylistKind::Bandcamp;
    }

    PlaylistKind::Unknown
}
