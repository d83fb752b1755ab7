//! YouTube URL resolution.
//!
//! Turns the URL forms users actually paste (watch pages, youtu.be short
//! links, shorts) into a canonical video ID. Pure pattern matching; whether
//! the ID refers to a real video is only discovered by the transcript listing
//! call that follows.

use regex::Regex;
use std::sync::OnceLock;

/// Canonical identifier of a hosted video. Extracted, never constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoId(String);

impl VideoId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Canonical watch-page URL for this video.
    pub fn watch_url(&self) -> String {
        format!("https://www.youtube.com/watch?v={}", self.0)
    }
}

impl std::fmt::Display for VideoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn watch_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Covers watch?v=<id> and youtu.be/<id>; the ID runs to the next & or ?.
    RE.get_or_init(|| Regex::new(r"(?:v=|youtu\.be/)([^&?]+)").expect("Invalid regex"))
}

fn shorts_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"shorts/([^?]+)").expect("Invalid regex"))
}

/// Extract the video ID from a YouTube URL.
///
/// Recognizes, in order: watch-page URLs carrying a `v=` parameter, short
/// links (`youtu.be/<id>`), and shorts URLs (`shorts/<id>`). A scheme is not
/// required. Returns `None` when nothing matches; this is the only failure
/// mode, malformed input never panics.
pub fn resolve_video_id(url: &str) -> Option<VideoId> {
    let url = url.trim();

    if let Some(caps) = watch_regex().captures(url) {
        return Some(VideoId(caps[1].to_string()));
    }

    if let Some(caps) = shorts_regex().captures(url) {
        return Some(VideoId(caps[1].to_string()));
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(url: &str) -> Option<String> {
        resolve_video_id(url).map(|id| id.as_str().to_string())
    }

    #[test]
    fn test_watch_url() {
        assert_eq!(
            resolve("https://www.youtube.com/watch?v=dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_watch_url_with_extra_params() {
        assert_eq!(
            resolve("https://www.youtube.com/watch?v=ABC123&t=10"),
            Some("ABC123".to_string())
        );
        assert_eq!(
            resolve("https://www.youtube.com/watch?v=ABC123&list=PLx&index=4"),
            Some("ABC123".to_string())
        );
    }

    #[test]
    fn test_short_link() {
        assert_eq!(
            resolve("https://youtu.be/dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
        assert_eq!(
            resolve("https://youtu.be/ABC123?si=xyz"),
            Some("ABC123".to_string())
        );
    }

    #[test]
    fn test_shorts_url() {
        assert_eq!(
            resolve("https://www.youtube.com/shorts/dQw4w9WgXcQ?feature=share"),
            Some("dQw4w9WgXcQ".to_string())
        );
        assert_eq!(
            resolve("https://www.youtube.com/shorts/ABC123"),
            Some("ABC123".to_string())
        );
    }

    #[test]
    fn test_no_scheme() {
        assert_eq!(
            resolve("www.youtube.com/watch?v=ABC123&t=10"),
            Some("ABC123".to_string())
        );
        assert_eq!(resolve("youtu.be/ABC123"), Some("ABC123".to_string()));
    }

    #[test]
    fn test_no_match() {
        assert_eq!(resolve("https://example.com/video/123"), None);
        assert_eq!(resolve("not a url at all"), None);
        assert_eq!(resolve(""), None);
        assert_eq!(resolve("https://www.youtube.com/"), None);
    }

    #[test]
    fn test_watch_url_display() {
        let id = resolve_video_id("https://youtu.be/ABC123").unwrap();
        assert_eq!(id.watch_url(), "https://www.youtube.com/watch?v=ABC123");
        assert_eq!(format!("{}", id), "ABC123");
    }
}
