/*!
 * Error types for the yt2pdf application.
 *
 * Each stage of the transcript pipeline has its own error enum, defined with
 * the thiserror crate, so callers can tell an unsupported URL from a missing
 * transcript or a missing summarization credential without inspecting
 * message strings.
 */

use thiserror::Error;

/// Errors that can occur when working with provider APIs
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Error when making an API request fails
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// Error when parsing an API response fails
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// Error returned by the API itself
    #[error("API responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the API
        message: String,
    },

    /// Error establishing or maintaining a connection
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Error related to rate limiting
    #[error("Rate limit exceeded: {0}")]
    RateLimitExceeded(String),

    /// Error with authentication
    #[error("Authentication error: {0}")]
    AuthenticationError(String),
}

impl ProviderError {
    /// Map a non-success HTTP status and its body to the matching variant
    pub fn from_status(status_code: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        match status_code {
            401 | 403 => Self::AuthenticationError(message),
            429 => Self::RateLimitExceeded(message),
            _ => Self::ApiError { status_code, message },
        }
    }

    /// Classify a transport-level reqwest failure
    pub fn from_reqwest(error: reqwest::Error) -> Self {
        if error.is_connect() || error.is_timeout() {
            Self::ConnectionError(error.to_string())
        } else if error.is_decode() {
            Self::ParseError(error.to_string())
        } else {
            Self::RequestFailed(error.to_string())
        }
    }
}

/// The input could not be turned into a video identifier
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UrlError {
    #[error("Invalid YouTube URL: {0}")]
    Unsupported(String),
}

/// Errors from the transcript collaborator
#[derive(Error, Debug)]
pub enum TranscriptError {
    /// The transcript client could not be constructed
    #[error("failed to initialize transcript client: {0}")]
    ClientInit(String),

    /// The service refused or failed to return a transcript
    #[error("{0}")]
    Fetch(String),
}

/// Errors from the summarization collaborator
#[derive(Error, Debug)]
pub enum SummaryError {
    /// No API key in the configuration or the environment
    #[error("no API key configured for {provider} (set it in the config file or {env_var})")]
    MissingCredential {
        provider: String,
        env_var: String,
    },

    /// The provider call failed
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// The provider answered without any text
    #[error("provider returned an empty summary")]
    EmptyResponse,
}

/// Errors while producing a PDF
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("PDF generation failed: {0}")]
    Pdf(String),

    #[error("Failed to write document: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that stop a pipeline run.
///
/// Transcript and summary failures do not appear here: they are rendered
/// into the output documents and kept on `PipelineOutput`.
#[derive(Error, Debug)]
pub enum AppError {
    /// Rejected input URL
    #[error(transparent)]
    Url(#[from] UrlError),

    /// Error while rendering a document
    #[error("Render error: {0}")]
    Render(#[from] RenderError),
}
