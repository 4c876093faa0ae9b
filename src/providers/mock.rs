/*!
 * Mock upstream services for testing.
 *
 * These mocks simulate the three upstream services without network access:
 * - `MockTranslator::working()` - Always succeeds with a tagged translation
 * - `MockTranslator::failing_first(n)` - Fails the first n requests, then succeeds
 * - `MockTranslator::failing_after(n)` - Succeeds n times, then always fails
 * - `MockTranslator::failing()` - Always fails with an error
 * - `MockTranscriptSource` - Serves fixed tracks, optionally failing the first listings
 * - `MockMetadataSource` - Reports a fixed duration or fails
 *
 * Every mock counts its calls; clones share the counters.
 */

use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::errors::{ProviderError, TranscriptError};
use crate::providers::{MetadataSource, TranscriptDescriptor, TranscriptEntry, TranscriptSource, Translator};
use crate::video_id::VideoId;

/// Mock request as seen by a custom response generator
#[derive(Debug, Clone)]
pub struct MockRequest {
    /// The text to translate
    pub text: String,
    /// Source language
    pub source_language: String,
    /// Target language
    pub target_language: String,
}

/// Behavior mode for the mock translator
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MockBehavior {
    /// Always succeeds with a proper translation
    Working,
    /// Fails the first `failures` requests, then works
    FailFirst { failures: usize },
    /// Succeeds the first `successes` requests, then always fails
    FailAfter { successes: usize },
    /// Fails intermittently (every Nth request)
    Intermittent { fail_every: usize },
    /// Always fails with an error
    Failing,
    /// Returns whitespace only
    Empty,
}

/// Mock translator for testing translation behavior
#[derive(Debug, Clone)]
pub struct MockTranslator {
    /// Behavior mode
    behavior: MockBehavior,
    /// Request counter shared between clones
    request_count: Arc<AtomicUsize>,
    /// Custom response generator (optional)
    custom_response: Option<fn(&MockRequest) -> String>,
}

impl MockTranslator {
    /// Create a new mock translator with the specified behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            request_count: Arc::new(AtomicUsize::new(0)),
            custom_response: None,
        }
    }

    /// Create a working mock translator that always succeeds
    pub fn working() -> Self {
        Self::new(MockBehavior::Working)
    }

    /// Create a mock that fails the first `failures` requests
    pub fn failing_first(failures: usize) -> Self {
        Self::new(MockBehavior::FailFirst { failures })
    }

    /// Create a mock that stops working after `successes` requests
    pub fn failing_after(successes: usize) -> Self {
        Self::new(MockBehavior::FailAfter { successes })
    }

    /// Create an intermittently failing mock translator
    pub fn intermittent(fail_every: usize) -> Self {
        Self::new(MockBehavior::Intermittent { fail_every })
    }

    /// Create a failing mock translator that always errors
    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing)
    }

    /// Create a mock that returns blank translations
    pub fn empty() -> Self {
        Self::new(MockBehavior::Empty)
    }

    /// Set a custom response generator
    pub fn with_custom_response(mut self, generator: fn(&MockRequest) -> String) -> Self {
        self.custom_response = Some(generator);
        self
    }

    /// Number of translate calls made so far
    pub fn request_count(&self) -> usize {
        self.request_count.load(Ordering::SeqCst)
    }

    fn respond(&self, request: &MockRequest) -> String {
        match self.custom_response {
            Some(generator) => generator(request),
            None => format!("[{}] {}", request.target_language, request.text),
        }
    }
}

#[async_trait]
impl Translator for MockTranslator {
    async fn translate(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
    ) -> Result<String, ProviderError> {
        let count = self.request_count.fetch_add(1, Ordering::SeqCst);
        let request = MockRequest {
            text: text.to_string(),
            source_language: source_language.to_string(),
            target_language: target_language.to_string(),
        };

        match self.behavior {
            MockBehavior::Working => Ok(self.respond(&request)),

            MockBehavior::FailFirst { failures } => {
                if count < failures {
                    Err(ProviderError::ConnectionError(format!(
                        "Simulated failure (request #{})",
                        count + 1
                    )))
                } else {
                    Ok(self.respond(&request))
                }
            }

            MockBehavior::FailAfter { successes } => {
                if count < successes {
                    Ok(self.respond(&request))
                } else {
                    Err(ProviderError::RateLimitExceeded(format!(
                        "Simulated quota exhaustion (request #{})",
                        count + 1
                    )))
                }
            }

            MockBehavior::Intermittent { fail_every } => {
                if fail_every > 0 && count % fail_every == fail_every - 1 {
                    Err(ProviderError::ApiError {
                        message: format!("Simulated intermittent failure (request #{})", count + 1),
                        status_code: 503,
                    })
                } else {
                    Ok(self.respond(&request))
                }
            }

            MockBehavior::Failing => Err(ProviderError::ApiError {
                message: "Simulated provider failure".to_string(),
                status_code: 500,
            }),

            MockBehavior::Empty => Ok("  ".to_string()),
        }
    }
}

/// Mock transcript service serving a fixed track list
#[derive(Debug, Clone)]
pub struct MockTranscriptSource {
    tracks: Vec<(TranscriptDescriptor, Vec<TranscriptEntry>)>,
    /// Error returned by the first `failures` listings
    failure: Option<TranscriptError>,
    failures: usize,
    list_count: Arc<AtomicUsize>,
    fetch_count: Arc<AtomicUsize>,
}

impl MockTranscriptSource {
    /// Serve the given tracks on every call
    pub fn with_tracks(tracks: Vec<(TranscriptDescriptor, Vec<TranscriptEntry>)>) -> Self {
        Self {
            tracks,
            failure: None,
            failures: 0,
            list_count: Arc::new(AtomicUsize::new(0)),
            fetch_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Fail the first `failures` listings with `error`
    pub fn failing_first(mut self, failures: usize, error: TranscriptError) -> Self {
        self.failure = Some(error);
        self.failures = failures;
        self
    }

    /// Fail every listing with `error`
    pub fn always_failing(error: TranscriptError) -> Self {
        Self::with_tracks(Vec::new()).failing_first(usize::MAX, error)
    }

    /// Number of list calls made so far
    pub fn list_count(&self) -> usize {
        self.list_count.load(Ordering::SeqCst)
    }

    /// Number of entry fetches made so far
    pub fn fetch_count(&self) -> usize {
        self.fetch_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TranscriptSource for MockTranscriptSource {
    async fn list_transcripts(&self, _video_id: &VideoId) -> Result<Vec<TranscriptDescriptor>, TranscriptError> {
        let count = self.list_count.fetch_add(1, Ordering::SeqCst);
        if let Some(error) = &self.failure {
            if count < self.failures {
                return Err(error.clone());
            }
        }

        Ok(self.tracks.iter().map(|(descriptor, _)| descriptor.clone()).collect())
    }

    async fn fetch_entries(
        &self,
        video_id: &VideoId,
        descriptor: &TranscriptDescriptor,
    ) -> Result<Vec<TranscriptEntry>, TranscriptError> {
        self.fetch_count.fetch_add(1, Ordering::SeqCst);
        self.tracks
            .iter()
            .find(|(d, _)| d == descriptor)
            .map(|(_, entries)| entries.clone())
            .ok_or_else(|| TranscriptError::Unexpected(format!("Unknown track for video {}", video_id)))
    }
}

/// Mock metadata service
#[derive(Debug, Clone)]
pub struct MockMetadataSource {
    duration: Option<u64>,
    call_count: Arc<AtomicUsize>,
}

impl MockMetadataSource {
    /// Report `seconds` for every video
    pub fn with_duration(seconds: u64) -> Self {
        Self {
            duration: Some(seconds),
            call_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Fail every lookup, as for a private video
    pub fn unavailable() -> Self {
        Self {
            duration: None,
            call_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of lookups made so far
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MetadataSource for MockMetadataSource {
    async fn fetch_duration(&self, video_id: &VideoId) -> Result<u64, ProviderError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        self.duration.ok_or_else(|| ProviderError::ApiError {
            status_code: 403,
            message: format!("Video {} is private", video_id),
        })
    }
}

/// Descriptor helper for tests
pub fn descriptor(language_code: &str, is_generated: bool) -> TranscriptDescriptor {
    TranscriptDescriptor {
        language_code: language_code.to_string(),
        language: language_code.to_string(),
        is_generated,
        base_url: format!(
            "mock://{}/{}",
            language_code,
            if is_generated { "asr" } else { "manual" }
        ),
    }
}

/// Entries helper for tests, one second apart
pub fn entries(texts: &[&str]) -> Vec<TranscriptEntry> {
    texts
        .iter()
        .enumerate()
        .map(|(i, text)| TranscriptEntry {
            start: i as f64,
            duration: 1.0,
            text: text.to_string(),
        })
        .collect()
}
