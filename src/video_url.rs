/*!
 * Video identifier extraction from YouTube URLs.
 *
 * Supported shapes:
 * - `https://youtu.be/<id>`
 * - `https://(www.)youtube.com/watch?v=<id>`
 * - `https://(www.)youtube.com/embed/<id>`
 * - `https://(www.)youtube.com/v/<id>`
 */

use std::fmt;
use url::Url;

use crate::errors::UrlError;

const SHORT_LINK_HOST: &str = "youtu.be";
const SITE_HOSTS: [&str; 2] = ["youtube.com", "www.youtube.com"];

/// Identifier of a single video, as understood by the transcript service
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VideoId(String);

impl VideoId {
    /// Wrap an identifier; empty strings are rejected
    pub fn new(id: impl Into<String>) -> Option<Self> {
        let id = id.into();
        if id.is_empty() {
            None
        } else {
            Some(Self(id))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for VideoId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Extract the video identifier from a YouTube URL.
///
/// Returns `None` for other hosts, unknown path shapes, a `/watch` URL
/// without a `v` parameter, and anything that does not parse as a URL.
pub fn extract_video_id(input: &str) -> Option<VideoId> {
    let url = Url::parse(input).ok()?;
    let host = url.host_str()?;

    if host == SHORT_LINK_HOST {
        // Everything after the leading slash, unvalidated
        let id = url.path().strip_prefix('/').unwrap_or(url.path());
        return VideoId::new(id);
    }

    if !SITE_HOSTS.contains(&host) {
        return None;
    }

    if url.path() == "/watch" {
        // Blank values are skipped, so `v=&v=abc` yields `abc`
        return url.query_pairs()
            .filter(|(key, value)| key == "v" && !value.is_empty())
            .map(|(_, value)| value.into_owned())
            .next()
            .and_then(VideoId::new);
    }

    let mut segments = url.path_segments()?;
    match (segments.next(), segments.next()) {
        (Some("embed"), Some(id)) | (Some("v"), Some(id)) => VideoId::new(id),
        _ => None,
    }
}

/// Like [`extract_video_id`], but with an error suitable for showing to the user
pub fn parse_video_url(input: &str) -> Result<VideoId, UrlError> {
    extract_video_id(input).ok_or_else(|| UrlError::Unsupported(input.to_string()))
}
