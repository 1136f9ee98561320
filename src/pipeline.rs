/*!
 * The URL → transcript → summary pipeline.
 *
 * Stages run sequentially. A rejected URL stops everything before any
 * external call. A failed transcript is still rendered (as a single
 * `Error: ...` line) but skips the summary. A failed summary is rendered
 * as `Error during summary: ...`.
 */

use log::{error, info, warn};
use std::sync::Arc;

use crate::errors::{AppError, SummaryError, TranscriptError};
use crate::render::{self, RenderedDocument};
use crate::summary::Summarizer;
use crate::transcript::TranscriptSource;
use crate::video_url::{self, VideoId};

/// Text rendered in place of a transcript that could not be fetched
pub fn transcript_error_line(error: &TranscriptError) -> String {
    format!("Error: {}", error)
}

/// Text rendered in place of a summary that could not be produced
pub fn summary_error_text(error: &SummaryError) -> String {
    format!("Error during summary: {}", error)
}

/// Everything one pipeline run produced
#[derive(Debug)]
pub struct PipelineOutput {
    pub video_id: VideoId,
    pub transcript: Result<Vec<String>, TranscriptError>,
    pub transcript_pdf: RenderedDocument,
    /// `None` when no summary was attempted
    pub summary: Option<Result<String, SummaryError>>,
    pub summary_pdf: Option<RenderedDocument>,
}

impl PipelineOutput {
    pub fn transcript_succeeded(&self) -> bool {
        self.transcript.is_ok()
    }

    /// The summary as displayed: the text itself or its error message
    pub fn summary_text(&self) -> Option<String> {
        self.summary.as_ref().map(|summary| match summary {
            Ok(text) => text.clone(),
            Err(e) => summary_error_text(e),
        })
    }
}

/// Wires the collaborators together; cheap to clone and share between requests
#[derive(Clone)]
pub struct Pipeline {
    transcripts: Arc<dyn TranscriptSource>,
    summarizer: Arc<Summarizer>,
}

impl Pipeline {
    pub fn new(transcripts: Arc<dyn TranscriptSource>, summarizer: Summarizer) -> Self {
        Self {
            transcripts,
            summarizer: Arc::new(summarizer),
        }
    }

    /// Run every stage for `url`
    pub async fn run(&self, url: &str) -> Result<PipelineOutput, AppError> {
        let video_id = video_url::parse_video_url(url)?;
        info!("Processing video {}", video_id);

        let transcript = self.transcripts.fetch(&video_id).await;
        let transcript_pdf = match &transcript {
            Ok(lines) => render::render_transcript(lines)?,
            Err(e) => {
                warn!("Transcript unavailable for {}: {}", video_id, e);
                render::render_transcript(&[transcript_error_line(e)])?
            }
        };
        info!(
            "Transcript PDF ready ({} page(s), {} bytes)",
            transcript_pdf.page_count(),
            transcript_pdf.len()
        );

        let summary = match &transcript {
            Ok(lines) if !lines.is_empty() => self.summarizer.summarize(lines).await,
            Ok(_) => {
                info!("Transcript for {} is empty, skipping summary", video_id);
                None
            }
            Err(_) => None,
        };

        let summary_pdf = match &summary {
            Some(result) => {
                let text = match result {
                    Ok(text) => text.clone(),
                    Err(e) => {
                        error!("Summary failed for {}: {}", video_id, e);
                        summary_error_text(e)
                    }
                };
                let doc = render::render_summary(&text)?;
                info!("Summary PDF ready ({} page(s), {} bytes)", doc.page_count(), doc.len());
                Some(doc)
            }
            None => None,
        };

        Ok(PipelineOutput {
            video_id,
            transcript,
            transcript_pdf,
            summary,
            summary_pdf,
        })
    }
}
