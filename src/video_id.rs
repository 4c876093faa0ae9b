/*!
 * YouTube video identifier extraction.
 */

use log::{debug, error};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::errors::PipelineError;

/// Either a `v=` query parameter or a path separator, followed by the 11-character id
static VIDEO_ID_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:v=|/)([0-9A-Za-z_-]{11})").expect("video id pattern is valid"));

/// An 11-character YouTube video identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VideoId(String);

impl VideoId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// File name of a downloadable artifact, e.g. `abc12345678_original.txt`
    pub fn file_name(&self, suffix: &str) -> String {
        format!("{}_{}.txt", self.0, suffix)
    }
}

impl std::fmt::Display for VideoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Extract the video identifier from a YouTube URL
///
/// The leftmost `v=<id>` or `/<id>` occurrence wins. Nothing is fetched.
pub fn extract_video_id(url: &str) -> Result<VideoId, PipelineError> {
    debug!("Extracting video ID from URL: {}", url);

    match VIDEO_ID_PATTERN.captures(url).and_then(|c| c.get(1)) {
        Some(m) => {
            let video_id = m.as_str().to_string();
            debug!("Extracted video ID: {}", video_id);
            Ok(VideoId(video_id))
        }
        None => {
            error!("Failed to extract video ID. Invalid URL format: {}", url);
            Err(PipelineError::InvalidUrl(url.to_string()))
        }
    }
}
