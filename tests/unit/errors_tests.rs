/*!
 * Tests for error types and user-facing messages
 */

use ytsubtrans::errors::{AppError, PipelineError, ProviderError, TranscriptError};

#[test]
fn test_transcriptError_transientClassification() {
    assert!(TranscriptError::TranscriptsDisabled("x".to_string()).is_transient());
    assert!(TranscriptError::VideoUnavailable("x".to_string()).is_transient());
    assert!(TranscriptError::NoTranscriptFound {
        video_id: "x".to_string(),
        language: "ml".to_string(),
    }
    .is_transient());
    assert!(!TranscriptError::Unexpected("boom".to_string()).is_transient());
}

#[test]
fn test_providerError_convertsToUnexpectedTranscriptError() {
    let err: TranscriptError = ProviderError::ConnectionError("reset".to_string()).into();
    assert!(matches!(err, TranscriptError::Unexpected(ref m) if m.contains("reset")));
}

#[test]
fn test_userMessage_shouldMatchBannerTexts() {
    assert_eq!(
        PipelineError::InvalidUrl("https://example.com/".to_string()).user_message(),
        "Invalid YouTube URL. Please enter a valid URL."
    );
    assert_eq!(
        PipelineError::ChunkTranslationFailure {
            chunk_index: 2,
            attempts: 3,
            last_error: ProviderError::RateLimitExceeded("slow down".to_string()),
        }
        .user_message(),
        "Failed to translate some parts of the subtitles after multiple retries."
    );
    assert_eq!(
        PipelineError::EmptyTranslationResult.user_message(),
        "Translation resulted in empty text. Please check the translation API or input."
    );

    let exhausted = PipelineError::TranscriptExhausted {
        video_id: "abc12345678".to_string(),
        attempts: 5,
        last_error: TranscriptError::TranscriptsDisabled("abc12345678".to_string()),
    };
    assert!(exhausted.user_message().starts_with("Could not retrieve subtitles for video ID abc12345678"));
}

#[test]
fn test_appError_conversions() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    assert!(matches!(AppError::from(io), AppError::File(_)));
    assert!(matches!(AppError::from(anyhow::anyhow!("odd")), AppError::Unknown(_)));
    assert!(matches!(
        AppError::from(PipelineError::EmptyTranslationResult),
        AppError::Pipeline(PipelineError::EmptyTranslationResult)
    ));
}
