/*!
 * End-to-end pipeline tests with mocked collaborators
 */

use std::sync::Arc;
use yt2pdf::errors::{AppError, SummaryError};
use yt2pdf::pipeline::Pipeline;
use yt2pdf::providers::mock::MockProvider;
use yt2pdf::render::{layout_lines, RenderMode};
use yt2pdf::summary::Summarizer;

use crate::common::{mock_pipeline, numbered_lines, MockTranscripts};

#[tokio::test]
async fn test_pipeline_withLongTranscript_shouldPaginateAndSummarize() {
    let lines = numbered_lines(120);
    let line_refs: Vec<&str> = lines.iter().map(String::as_str).collect();
    let provider = MockProvider::working();
    let pipeline = mock_pipeline(MockTranscripts::with_lines(&line_refs), provider.clone());

    let output = pipeline.run("https://www.youtube.com/watch?v=abc123&t=5").await.unwrap();

    assert_eq!(output.video_id.as_str(), "abc123");
    assert_eq!(output.transcript.as_ref().unwrap().len(), 120);
    assert_eq!(output.transcript_pdf.page_count(), 3);
    assert_eq!(output.transcript_pdf.file_name(), "transcript.pdf");
    assert_eq!(provider.request_count(), 1);

    let summary_pdf = output.summary_pdf.as_ref().unwrap();
    assert_eq!(summary_pdf.file_name(), "summary.pdf");
    assert!(summary_pdf.as_bytes().starts_with(b"%PDF"));
}

#[tokio::test]
async fn test_pipeline_withInvalidUrl_shouldStopBeforeFetching() {
    let transcripts = MockTranscripts::with_lines(&["x"]);
    let provider = MockProvider::working();
    let pipeline = mock_pipeline(transcripts.clone(), provider.clone());

    let result = pipeline.run("https://vimeo.com/12345").await;

    assert!(matches!(result, Err(AppError::Url(_))));
    assert_eq!(transcripts.call_count(), 0);
    assert_eq!(provider.request_count(), 0);
}

#[tokio::test]
async fn test_pipeline_withTranscriptFailure_shouldRenderErrorLineOnly() {
    let provider = MockProvider::working();
    let pipeline = mock_pipeline(MockTranscripts::failing("No transcripts were found"), provider.clone());

    let output = pipeline.run("https://youtu.be/abc123").await.unwrap();

    assert!(output.transcript.is_err());
    assert!(output.summary.is_none());
    assert!(output.summary_pdf.is_none());
    assert_eq!(output.transcript_pdf.page_count(), 1);
    assert_eq!(provider.request_count(), 0);
}

#[tokio::test]
async fn test_pipeline_withEmptyTranscript_shouldSkipSummary() {
    let provider = MockProvider::working();
    let pipeline = mock_pipeline(MockTranscripts::with_lines(&[]), provider.clone());

    let output = pipeline.run("https://youtu.be/abc123").await.unwrap();

    assert!(output.transcript.as_ref().unwrap().is_empty());
    assert_eq!(output.transcript_pdf.page_count(), 1);
    assert!(output.summary.is_none());
    assert_eq!(provider.request_count(), 0);
}

#[tokio::test]
async fn test_pipeline_withMissingCredential_shouldRenderSummaryError() {
    let config = yt2pdf::app_config::SummaryConfig::default();
    let pipeline = Pipeline::new(
        Arc::new(MockTranscripts::with_lines(&["hello"])),
        Summarizer::from_config_with_key(&config, None),
    );

    let output = pipeline.run("https://youtu.be/abc123").await.unwrap();

    assert!(matches!(output.summary, Some(Err(SummaryError::MissingCredential { .. }))));
    let text = output.summary_text().unwrap();
    assert!(text.starts_with("Error during summary: "));
    assert!(output.summary_pdf.is_some());
}

#[tokio::test]
async fn test_pipeline_withDisabledSummaries_shouldOnlyRenderTranscript() {
    let pipeline = Pipeline::new(Arc::new(MockTranscripts::with_lines(&["hello"])), Summarizer::Disabled);

    let output = pipeline.run("https://youtu.be/abc123").await.unwrap();

    assert!(output.transcript.is_ok());
    assert!(output.summary.is_none());
    assert!(output.summary_pdf.is_none());
}

#[tokio::test]
async fn test_pipeline_summaryLayout_shouldFollowMarkdownRules() {
    let pipeline = mock_pipeline(MockTranscripts::with_lines(&["hello"]), MockProvider::working());

    let output = pipeline.run("https://youtu.be/abc123").await.unwrap();
    let summary = output.summary_text().unwrap();
    let lines: Vec<&str> = summary.split('\n').collect();
    let layout = layout_lines(&lines, RenderMode::Structured);

    // Heading, paragraph, heading, two bullets
    assert_eq!(layout.line_count(), 5);
}
