use tracklink::config::ResolverConfig;
use tracklink::links::*;
use tracklink::types::{Origin, Platform, PlaylistKind};

// Helper: the default custom-extension set used across classification tests
fn default_extensions() -> Vec<String> {
    ResolverConfig::default().custom_extensions
}

#[test]
fn test_extract_url_returns_exact_substring() {
    let text = "hey, play https://open.spotify.com/track/abc123 for me";
    assert_eq!(
        extract_url(text),
        Some("https://open.spotify.com/track/abc123")
    );

    // Query strings and percent escapes are part of the match
    let text = "queue https://example.com/a%20b?x=1&y=2 next";
    assert_eq!(extract_url(text), Some("https://example.com/a%20b?x=1&y=2"));

    // Plain http works too
    let text = "http://soundcloud.com/artist/song";
    assert_eq!(extract_url(text), Some("http://soundcloud.com/artist/song"));
}

#[test]
fn test_extract_url_picks_the_first_of_several() {
    let text = "https://a.com/x then https://b.com/y";
    assert_eq!(extract_url(text), Some("https://a.com/x"));
}

#[test]
fn test_extract_url_stops_at_fragment_and_whitespace() {
    assert_eq!(
        extract_url("see https://example.com/page#section"),
        Some("https://example.com/page")
    );
    assert_eq!(
        extract_url("https://example.com/page more words"),
        Some("https://example.com/page")
    );
}

#[test]
fn test_extract_url_none_without_a_url() {
    assert_eq!(extract_url("just some regular text"), None);
    assert_eq!(extract_url(""), None);

    // A scheme with nothing after it is not a URL
    assert_eq!(extract_url("broken https:// end"), None);

    // "http" embedded in a word is not a scheme
    assert_eq!(extract_url("httpx://example.com"), None);
}

#[test]
fn test_classify_platform_known_domains() {
    let exts = default_extensions();

    assert_eq!(
        classify_platform(Some("https://www.youtube.com/watch?v=dQw4w9WgXcQ"), &exts),
        Platform::YouTube
    );
    assert_eq!(
        classify_platform(Some("https://youtu.be/dQw4w9WgXcQ"), &exts),
        Platform::YouTube
    );
    assert_eq!(
        classify_platform(Some("https://open.spotify.com/track/abc"), &exts),
        Platform::Spotify
    );
    assert_eq!(
        classify_platform(Some("https://open.spotify.com/playlist/def"), &exts),
        Platform::SpotifyPlaylist
    );
    assert_eq!(
        classify_platform(Some("https://open.spotify.com/album/ghi"), &exts),
        Platform::SpotifyPlaylist
    );
    assert_eq!(
        classify_platform(Some("https://artist.bandcamp.com/track/song-name"), &exts),
        Platform::Bandcamp
    );
    assert_eq!(
        classify_platform(Some("https://twitter.com/user/status/1"), &exts),
        Platform::Twitter
    );
    assert_eq!(
        classify_platform(Some("https://soundcloud.com/artist/song"), &exts),
        Platform::SoundCloud
    );
}

#[test]
fn test_classify_platform_custom_extension_is_case_insensitive() {
    let exts = default_extensions();

    assert_eq!(
        classify_platform(Some("https://files.example.com/song.mp3"), &exts),
        Platform::Custom
    );
    assert_eq!(
        classify_platform(Some("https://files.example.com/SONG.MP3"), &exts),
        Platform::Custom
    );
    assert_eq!(
        classify_platform(Some("https://files.example.com/song.txt"), &exts),
        Platform::Unknown
    );
}

#[test]
fn test_classify_platform_unknown_and_none() {
    let exts = default_extensions();

    assert_eq!(
        classify_platform(Some("https://example.com/whatever"), &exts),
        Platform::Unknown
    );
    assert_eq!(classify_platform(None, &exts), Platform::Unknown);
}

#[test]
fn test_classify_platform_is_idempotent() {
    let exts = default_extensions();
    let url = Some("https://open.spotify.com/track/abc");

    assert_eq!(
        classify_platform(url, &exts),
        classify_platform(url, &exts)
    );
}

#[test]
fn test_classify_playlist_known_kinds() {
    assert_eq!(
        classify_playlist(Some("https://www.youtube.com/playlist?list=PL123")),
        PlaylistKind::YouTube
    );
    assert_eq!(
        classify_playlist(Some("https://open.spotify.com/album/abc")),
        PlaylistKind::Spotify
    );
    assert_eq!(
        classify_playlist(Some("https://open.spotify.com/playlist/def?si=x")),
        PlaylistKind::Spotify
    );
    assert_eq!(
        classify_playlist(Some("https://artist.bandcamp.com/album/record")),
        PlaylistKind::Bandcamp
    );
}

#[test]
fn test_classify_playlist_unknown_and_none() {
    assert_eq!(
        classify_playlist(Some("https://example.com")),
        PlaylistKind::Unknown
    );
    // A plain watch link is not a playlist
    assert_eq!(
        classify_playlist(Some("https://www.youtube.com/watch?v=abc")),
        PlaylistKind::Unknown
    );
    assert_eq!(classify_playlist(None), PlaylistKind::Unknown);
}

#[test]
fn test_normalize_soundcloud_rewrites_mobile_prefix() {
    assert_eq!(
        normalize_soundcloud("https://m.soundcloud.com/x"),
        "https://soundcloud.com/x"
    );
    assert_eq!(
        normalize_soundcloud("http://m.soundcloud.com/x"),
        "https://soundcloud.com/x"
    );
}

#[test]
fn test_normalize_soundcloud_is_idempotent() {
    let once = normalize_soundcloud("https://m.soundcloud.com/x");
    assert_eq!(normalize_soundcloud(&once), once);

    // Non-mobile links pass through untouched
    let url = "https://soundcloud.com/artist/song";
    assert_eq!(normalize_soundcloud(url), url);
}

#[test]
fn test_display_labels() {
    assert_eq!(Platform::Spotify.to_string(), "Spotify");
    assert_eq!(Platform::SpotifyPlaylist.to_string(), "Spotify Playlist");
    assert_eq!(Platform::SoundCloud.to_string(), "SoundCloud");
    assert_eq!(Platform::Unknown.to_string(), "Unknown");

    assert_eq!(PlaylistKind::Spotify.to_string(), "Spotify Playlist");
    assert_eq!(PlaylistKind::YouTube.to_string(), "YouTube Playlist");
    assert_eq!(PlaylistKind::Bandcamp.to_string(), "BandCamp Playlist");

    assert_eq!(Origin::Default.to_string(), "Default");
    assert_eq!(Origin::Playlist.to_string(), "Playlist");
}
