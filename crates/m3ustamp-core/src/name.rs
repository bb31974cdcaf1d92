//! Playlist name resolution.
//!
//! Derives the output filename stem from a source locator's last path
//! segment, percent-decoded and trimmed.

use percent_encoding::percent_decode_str;

/// Default name when the source path yields nothing usable.
const DEFAULT_NAME: &str = "playlist";

/// Derives the playlist name from a source locator.
///
/// Parses the locator as a URL when possible and takes the last segment of
/// the (percent-decoded) path; a bare path like `lists/local.m3u` works too.
/// Always returns a non-empty name.
///
/// # Examples
///
/// - `http://h/output/m3u/FTA%20IPTV?cachedlogos=false` → `"FTA IPTV"`
/// - `http://h/output/m3u/Sky` → `"Sky"`
/// - `http://h/` → `"playlist"`
pub fn resolve_playlist_name(source: &str) -> String {
    let path = match url::Url::parse(source) {
        Ok(parsed) => parsed.path().to_string(),
        // Not an absolute URL: treat the whole string as a path, minus any
        // query or fragment.
        Err(_) => {
            let stripped = source.split(['?', '#']).next().unwrap_or(source);
            stripped.to_string()
        }
    };

    let decoded = percent_decode_str(&path).decode_utf8_lossy();
    let name = decoded.rsplit('/').next().unwrap_or("").trim();

    if name.is_empty() {
        DEFAULT_NAME.to_string()
    } else {
        name.to_string()
    }
}
