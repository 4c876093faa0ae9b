/*!
 * Client implementations for the upstream services.
 *
 * The pipeline talks to three black boxes, each behind its own trait:
 * - `MetadataSource`: video duration lookup
 * - `TranscriptSource`: transcript listing and retrieval
 * - `Translator`: text translation
 *
 * Implementations:
 * - `youtube`: YouTube InnerTube client (metadata and transcripts)
 * - `google`: Google Translate web endpoint
 * - `mock`: scripted in-memory services for tests
 */

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::errors::{ProviderError, TranscriptError};
use crate::video_id::VideoId;

/// Metadata describing one available transcript track, without its text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptDescriptor {
    /// Language code of the track (e.g. "ml")
    pub language_code: String,
    /// Human-readable language name as reported by the service
    pub language: String,
    /// Produced by automatic speech recognition rather than uploaded
    pub is_generated: bool,
    /// Service-specific locator for the entries of this track
    pub base_url: String,
}

/// One timestamped fragment of a transcript
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    /// Start time in seconds
    pub start: f64,
    /// Duration in seconds
    pub duration: f64,
    pub text: String,
}

/// Source of video metadata
#[async_trait]
pub trait MetadataSource: Send + Sync + Debug {
    /// Duration of the video in seconds
    async fn fetch_duration(&self, video_id: &VideoId) -> Result<u64, ProviderError>;
}

/// Source of transcripts
#[async_trait]
pub trait TranscriptSource: Send + Sync + Debug {
    /// List every transcript track the video offers
    async fn list_transcripts(&self, video_id: &VideoId) -> Result<Vec<TranscriptDescriptor>, TranscriptError>;

    /// Fetch the timestamped entries of one track
    async fn fetch_entries(
        &self,
        video_id: &VideoId,
        descriptor: &TranscriptDescriptor,
    ) -> Result<Vec<TranscriptEntry>, TranscriptError>;
}

/// Text translation service
///
/// Callers keep each request within the service's size limit.
#[async_trait]
pub trait Translator: Send + Sync + Debug {
    async fn translate(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
    ) -> Result<String, ProviderError>;
}

pub mod google;
pub mod mock;
pub mod youtube;
