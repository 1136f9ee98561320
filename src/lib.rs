/*!
 * # yt2pdf - YouTube transcripts and summaries as PDF
 *
 * A small utility that takes a YouTube link, fetches the video's transcript,
 * renders it to a PDF, asks a language model for a structured summary and
 * renders that summary to a second PDF.
 *
 * ## Features
 *
 * - Video identifier extraction from `youtube.com/watch`, `/embed/`, `/v/`
 *   and `youtu.be` links
 * - Transcript retrieval with language preferences
 * - Summaries through various AI providers:
 *   - OpenAI API
 *   - Anthropic API
 *   - LM Studio (OpenAI-compatible local server)
 * - Paginated PDF output with bold headings and indented bullets
 * - A web form and a one-shot command line mode
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `video_url`: URL → video identifier
 * - `transcript`: Transcript collaborator and its `yt-transcript-rs` implementation
 * - `summary`: Prompt assembly and provider calls
 * - `render`: Pure layout pass and PDF drawing pass
 * - `pipeline`: The stages wired together
 * - `web`: axum form surface
 * - `providers`: Client implementations for LLM providers
 * - `app_config`: Configuration management
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod errors;
pub mod pipeline;
pub mod providers;
pub mod render;
pub mod summary;
pub mod transcript;
pub mod video_url;
pub mod web;

// Re-export main types for easier usage
pub use app_config::Config;
pub use errors::{AppError, ProviderError, RenderError, SummaryError, TranscriptError, UrlError};
pub use pipeline::{Pipeline, PipelineOutput};
pub use render::{RenderMode, RenderedDocument};
pub use summary::{SummaryService, Summarizer};
pub use transcript::{TranscriptSource, YouTubeTranscripts};
pub use video_url::{extract_video_id, VideoId};
