/*!
 * Bounded retry loop around transcript retrieval.
 */

use log::{error, info, warn};
use std::time::Duration;

use crate::errors::{PipelineError, TranscriptError};
use crate::transcript::TranscriptFetcher;
use crate::video_id::VideoId;

/// States of the transcript retry loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryState {
    /// Attempt number `attempt` (1-based) is in flight
    Attempting { attempt: u32 },
    /// Attempt `attempt` failed and the loop is waiting to try again
    Retrying { attempt: u32 },
    /// Terminal: transcript retrieved
    Succeeded { attempts: u32 },
    /// Terminal: budget spent
    Exhausted { attempts: u32 },
}

impl RetryState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Succeeded { .. } | Self::Exhausted { .. })
    }
}

/// Bounded retry loop around `TranscriptFetcher`
///
/// Every attempt rescans the full track list. The wait between attempts is
/// fixed and is not spent after the last attempt.
#[derive(Debug, Clone)]
pub struct TranscriptRetry {
    fetcher: TranscriptFetcher,
    max_attempts: u32,
    delay: Duration,
}

impl TranscriptRetry {
    pub fn new(fetcher: TranscriptFetcher, max_attempts: u32, delay: Duration) -> Self {
        Self {
            fetcher,
            max_attempts: max_attempts.max(1),
            delay,
        }
    }

    /// Fetch the source text, retrying transient failures
    pub async fn run(&self, video_id: &VideoId, language: &str) -> Result<String, PipelineError> {
        self.run_traced(video_id, language).await.0
    }

    /// Like `run`, also returning every state the loop went through
    pub async fn run_traced(&self, video_id: &VideoId, language: &str) -> (Result<String, PipelineError>, Vec<RetryState>) {
        let mut trace = Vec::new();
        let mut attempt = 0;

        loop {
            attempt += 1;
            trace.push(RetryState::Attempting { attempt });

            let last_error: TranscriptError = match self.fetcher.fetch_source_text(video_id, language).await {
                Ok(text) => {
                    info!("Transcript for {} retrieved on attempt {}/{}", video_id, attempt, self.max_attempts);
                    trace.push(RetryState::Succeeded { attempts: attempt });
                    return (Ok(text), trace);
                }
                Err(e) => e,
            };

            attempt_failure(attempt, self.max_attempts, &last_error);

            if attempt >= self.max_attempts {
                trace.push(RetryState::Exhausted { attempts: attempt });
                let err = PipelineError::TranscriptExhausted {
                    video_id: video_id.to_string(),
                    attempts: attempt,
                    last_error,
                };
                error!("{}", err);
                return (Err(err), trace);
            }

            trace.push(RetryState::Retrying { attempt });
            tokio::time::sleep(self.delay).await;
        }
    }
}

/// Log one failed attempt and wrap it as a retryable pipeline failure
pub fn attempt_failure(attempt: u32, max_attempts: u32, error: &TranscriptError) -> PipelineError {
    let failure = PipelineError::TranscriptTransientFailure(error.clone());
    if error.is_transient() {
        warn!("{} (attempt {}/{}). Subtitles might be disabled or unavailable.",
              failure, attempt, max_attempts);
    } else {
        warn!("Unexpected error while checking subtitles: {} (attempt {}/{})",
              failure, attempt, max_attempts);
    }
    failure
}
