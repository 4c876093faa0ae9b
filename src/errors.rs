/*!
 * Error types for the ytsubtrans application.
 *
 * This module contains custom error types for the upstream services and for
 * the subtitle pipeline, using the thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

/// Errors that can occur when talking to an upstream service
#[derive(Error, Debug, Clone)]
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
}

impl From<reqwest::Error> for ProviderError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_connect() || error.is_timeout() {
            Self::ConnectionError(error.to_string())
        } else if error.is_decode() {
            Self::ParseError(error.to_string())
        } else {
            Self::RequestFailed(error.to_string())
        }
    }
}

/// Reasons a transcript lookup can fail
#[derive(Error, Debug, Clone)]
pub enum TranscriptError {
    /// The uploader disabled subtitles for this video
    #[error("Subtitles are disabled for video {0}")]
    TranscriptsDisabled(String),

    /// The video is private, removed or otherwise unplayable
    #[error("Video {0} is unavailable")]
    VideoUnavailable(String),

    /// No auto-generated transcript in the requested language
    #[error("No auto-generated transcript in '{language}' for video {video_id}")]
    NoTranscriptFound {
        video_id: String,
        language: String,
    },

    /// Anything else the transcript service threw at us
    #[error("Unexpected transcript error: {0}")]
    Unexpected(String),
}

impl From<ProviderError> for TranscriptError {
    fn from(error: ProviderError) -> Self {
        Self::Unexpected(error.to_string())
    }
}

impl TranscriptError {
    /// Whether this is one of the three well-known unavailability conditions
    pub fn is_transient(&self) -> bool {
        !matches!(self, Self::Unexpected(_))
    }
}

/// Failures of a single pipeline run, one variant per stage
#[derive(Error, Debug)]
pub enum PipelineError {
    /// The URL did not contain a recognizable video identifier
    #[error("Invalid YouTube URL: {0}")]
    InvalidUrl(String),

    /// Duration lookup failed; the run stops here
    #[error("Could not retrieve video details for {video_id}: {source}")]
    MetadataUnavailable {
        video_id: String,
        #[source]
        source: ProviderError,
    },

    /// One failed transcript attempt, eligible for retry
    #[error("Transcript attempt failed: {0}")]
    TranscriptTransientFailure(#[from] TranscriptError),

    /// Every transcript attempt failed
    #[error("Could not retrieve subtitles for video ID {video_id} after {attempts} attempts. Subtitles might be disabled or unavailable. Last error: {last_error}")]
    TranscriptExhausted {
        video_id: String,
        attempts: u32,
        last_error: TranscriptError,
    },

    /// A chunk ran out of translation attempts, so the whole translation is dropped
    #[error("Failed to translate chunk {chunk_index} after {attempts} attempts: {last_error}")]
    ChunkTranslationFailure {
        chunk_index: usize,
        attempts: u32,
        last_error: ProviderError,
    },

    /// All chunks came back but the result is blank
    #[error("Translation resulted in empty text. Please check the translation API or input.")]
    EmptyTranslationResult,

    /// A language code outside the supported menu
    #[error("Unsupported language selection: {0}")]
    UnsupportedLanguage(String),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from the subtitle pipeline
    #[error("Pipeline error: {0}")]
    Pipeline(#[from] PipelineError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}

impl PipelineError {
    /// Message shown to the user in an error banner
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidUrl(_) => "Invalid YouTube URL. Please enter a valid URL.".to_string(),
            Self::MetadataUnavailable { source, .. } => {
                format!("Could not retrieve video details. The video may be private or restricted. ({})", source)
            }
            Self::ChunkTranslationFailure { .. } => {
                "Failed to translate some parts of the subtitles after multiple retries.".to_string()
            }
            other => other.to_string(),
        }
    }
}
