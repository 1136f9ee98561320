/*!
 * Transcript retrieval.
 *
 * `TranscriptSource` is the seam the pipeline depends on; the production
 * implementation wraps the `yt-transcript-rs` client.
 */

use async_trait::async_trait;
use log::{debug, info};
use yt_transcript_rs::api::YouTubeTranscriptApi;

use crate::app_config::TranscriptConfig;
use crate::errors::TranscriptError;
use crate::video_url::VideoId;

/// Anything that can turn a video identifier into ordered transcript lines
#[async_trait]
pub trait TranscriptSource: Send + Sync {
    /// Fetch the utterances of a video, in order
    async fn fetch(&self, video_id: &VideoId) -> Result<Vec<String>, TranscriptError>;
}

/// Transcript source backed by YouTube's caption tracks
pub struct YouTubeTranscripts {
    api: YouTubeTranscriptApi,
    languages: Vec<String>,
    preserve_formatting: bool,
}

impl YouTubeTranscripts {
    /// Create a client for the configured language preferences
    pub fn new(config: &TranscriptConfig) -> Result<Self, TranscriptError> {
        let api = YouTubeTranscriptApi::new(None, None, None)
            .map_err(|e| TranscriptError::ClientInit(e.to_string()))?;
        let languages = config.languages.iter()
            .map(|l| l.trim().to_string())
            .filter(|l| !l.is_empty())
            .collect();

        Ok(Self {
            api,
            languages,
            preserve_formatting: config.preserve_formatting,
        })
    }
}

#[async_trait]
impl TranscriptSource for YouTubeTranscripts {
    async fn fetch(&self, video_id: &VideoId) -> Result<Vec<String>, TranscriptError> {
        let languages: Vec<&str> = self.languages.iter().map(String::as_str).collect();
        debug!("Fetching transcript for {} (languages: {:?})", video_id, languages);

        let transcript = self.api
            .fetch_transcript(video_id.as_str(), &languages, self.preserve_formatting)
            .await
            .map_err(|e| TranscriptError::Fetch(e.to_string()))?;

        let lines: Vec<String> = transcript.snippets
            .into_iter()
            .map(|snippet| snippet.text)
            .collect();

        info!("Fetched {} transcript lines for {}", lines.len(), video_id);
        Ok(lines)
    }
}
