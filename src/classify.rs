//! Payload classification for logo selection and history display.

use std::fmt;

use url::Url;

/// Coarse category assigned to a payload, derived from its host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassificationLabel {
    YouTube,
    Spotify,
    Instagram,
    TikTok,
    Web,
}

impl ClassificationLabel {
    /// Returns the display name recorded in history entries.
    pub fn as_str(self) -> &'static str {
        match self {
            ClassificationLabel::YouTube => "YouTube",
            ClassificationLabel::Spotify => "Spotify",
            ClassificationLabel::Instagram => "Instagram",
            ClassificationLabel::TikTok => "TikTok",
            ClassificationLabel::Web => "Web",
        }
    }

    /// Returns the raster logo asset fetched for this label.
    ///
    /// Each label maps to one known-good PNG; SVG originals are served
    /// as pre-rendered PNG thumbnails so the decoder can handle them.
    pub fn logo_url(self) -> &'static str {
        match self {
            ClassificationLabel::YouTube =>
                "https://upload.wikimedia.org/wikipedia/commons/thumb/0/09/YouTube_full-color_icon_%282017%29.svg/159px-YouTube_full-color_icon_%282017%29.svg.png",
            ClassificationLabel::Spotify =>
                "https://upload.wikimedia.org/wikipedia/commons/thumb/1/19/Spotify_logo_without_text.svg/168px-Spotify_logo_without_text.svg.png",
            ClassificationLabel::Instagram =>
                "https://upload.wikimedia.org/wikipedia/commons/a/a5/Instagram_icon.png",
            ClassificationLabel::TikTok =>
                "https://upload.wikimedia.org/wikipedia/commons/thumb/3/34/Ionicons_logo-tiktok.svg/512px-Ionicons_logo-tiktok.svg.png",
            ClassificationLabel::Web =>
                "https://upload.wikimedia.org/wikipedia/commons/6/6b/Internet_Web_Browser_Icon.png",
        }
    }
}

impl fmt::Display for ClassificationLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies a payload by its URL host.
///
/// The host is lower-cased and matched against known substrings in
/// fixed priority order; the first match wins. Payloads that do not
/// parse as a URL, or whose host matches nothing, classify as `Web`.
///
/// # Example
///
/// ```rust
/// use qrbrand::classify::{classify, ClassificationLabel};
///
/// assert_eq!(classify("https://m.youtube.com/x"), ClassificationLabel::YouTube);
/// assert_eq!(classify("not a url"), ClassificationLabel::Web);
/// ```
pub fn classify(payload: &str) -> ClassificationLabel {
    let host = match Url::parse(payload) {
        Ok(url) => url.host_str().unwrap_or("").to_lowercase(),
        Err(_) => return ClassificationLabel::Web,
    };

    if host.contains("youtube") {
        ClassificationLabel::YouTube
    } else if host.contains("spotify") {
        ClassificationLabel::Spotify
    } else if host.contains("instagram") {
        ClassificationLabel::Instagram
    } else if host.contains("tiktok") {
        ClassificationLabel::TikTok
    } else {
        ClassificationLabel::Web
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_hosts_classify() {
        assert_eq!(classify("https://youtube.com/watch?v=abc"), ClassificationLabel::YouTube);
        assert_eq!(classify("https://open.spotify.com/track/x"), ClassificationLabel::Spotify);
        assert_eq!(classify("https://instagram.com/someone"), ClassificationLabel::Instagram);
        assert_eq!(classify("https://www.tiktok.com/@someone"), ClassificationLabel::TikTok);
    }

    #[test]
    fn test_host_match_is_case_insensitive() {
        assert_eq!(classify("https://M.YouTube.COM/x"), ClassificationLabel::YouTube);
    }

    #[test]
    fn test_first_matching_rule_wins() {
        assert_eq!(classify("https://youtube.spotify.com/x"), ClassificationLabel::YouTube);
    }

    #[test]
    fn test_unmatched_hosts_classify_as_web() {
        assert_eq!(classify("https://example.com/page"), ClassificationLabel::Web);
    }

    #[test]
    fn test_malformed_payloads_classify_as_web() {
        assert_eq!(classify("not a url"), ClassificationLabel::Web);
        assert_eq!(classify(""), ClassificationLabel::Web);
        assert_eq!(classify("youtube.com/x"), ClassificationLabel::Web);
        assert_eq!(classify("hello"), ClassificationLabel::Web);
    }

    #[test]
    fn test_path_substring_does_not_classify() {
        // Only the host is inspected, not the path or query.
        assert_eq!(classify("https://example.com/youtube"), ClassificationLabel::Web);
    }

    #[test]
    fn test_every_label_has_a_raster_logo() {
        for label in [
            ClassificationLabel::YouTube,
            ClassificationLabel::Spotify,
            ClassificationLabel::Instagram,
            ClassificationLabel::TikTok,
            ClassificationLabel::Web,
        ] {
            assert!(label.logo_url().starts_with("https://"));
            assert!(label.logo_url().ends_with(".png"));
        }
    }
}
