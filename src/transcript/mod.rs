/*!
 * Transcript retrieval.
 *
 * - `TranscriptFetcher` selects the auto-generated track for a language and
 *   flattens it into plain source text.
 * - `retry::TranscriptRetry` wraps the fetcher in a bounded retry loop.
 */

use log::{debug, warn};
use std::sync::Arc;

use crate::errors::TranscriptError;
use crate::providers::{TranscriptDescriptor, TranscriptEntry, TranscriptSource};
use crate::video_id::VideoId;

pub mod retry;

pub use retry::{RetryState, TranscriptRetry};

/// Fetches the auto-generated transcript of a video as one string
#[derive(Debug, Clone)]
pub struct TranscriptFetcher {
    source: Arc<dyn TranscriptSource>,
}

impl TranscriptFetcher {
    pub fn new(source: Arc<dyn TranscriptSource>) -> Self {
        Self { source }
    }

    /// Full transcript text of the auto-generated track in `language`
    ///
    /// Manually authored tracks in the same language are skipped.
    pub async fn fetch_source_text(&self, video_id: &VideoId, language: &str) -> Result<String, TranscriptError> {
        debug!("Checking subtitles for video ID: {} and source language: {}", video_id, language);

        let tracks = self.source.list_transcripts(video_id).await?;
        let track = select_generated_track(&tracks, language).ok_or_else(|| {
            warn!("Subtitles are not available in the specified language: {}", language);
            TranscriptError::NoTranscriptFound {
                video_id: video_id.to_string(),
                language: language.to_string(),
            }
        })?;
        debug!("Subtitles are available: {} ({})", track.language, track.language_code);

        let entries = self.source.fetch_entries(video_id, track).await?;
        Ok(join_entries(&entries))
    }
}

/// First auto-generated track whose language code matches exactly
pub fn select_generated_track<'a>(tracks: &'a [TranscriptDescriptor], language: &str) -> Option<&'a TranscriptDescriptor> {
    tracks
        .iter()
        .find(|track| track.language_code == language && track.is_generated)
}

/// Entry texts joined with single spaces, in order
pub fn join_entries(entries: &[TranscriptEntry]) -> String {
    entries
        .iter()
        .map(|entry| entry.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
