/*!
 * YouTube client for video metadata and auto-generated transcripts.
 */

use async_trait::async_trait;
use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::Client;
use reqwest::header::{ACCEPT_LANGUAGE, HeaderMap, HeaderValue};
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

use crate::errors::{ProviderError, TranscriptError};
use crate::providers::{MetadataSource, TranscriptDescriptor, TranscriptEntry, TranscriptSource};
use crate::video_id::VideoId;

static API_KEY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#""INNERTUBE_API_KEY":\s*"([a-zA-Z0-9_-]+)""#).expect("api key pattern is valid")
});

const INNERTUBE_CLIENT_NAME: &str = "ANDROID";
const INNERTUBE_CLIENT_VERSION: &str = "20.10.38";

/// YouTube client backed by the InnerTube player endpoint
///
/// Serves both the duration lookup and the transcript listing; every call
/// fetches a fresh player response.
#[derive(Debug, Clone)]
pub struct YouTubeClient {
    /// Base URL of the video platform
    base_url: String,
    /// HTTP client for making requests
    client: Client,
}

impl YouTubeClient {
    /// Create a new client for the given platform URL
    pub fn new(base_url: impl Into<String>, timeout_secs: u64) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US"));

        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .default_headers(headers)
                .build()
                .unwrap_or_default(),
        }
    }

    /// Fetch the raw player response for a video
    async fn fetch_player_response(&self, video_id: &VideoId) -> Result<Value, ProviderError> {
        let watch_url = format!("{}/watch?v={}", self.base_url, video_id);
        let html = self.get_text(&watch_url).await?;

        let api_key = API_KEY_PATTERN
            .captures(&html)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().to_string())
            .ok_or_else(|| {
                if html.contains("g-recaptcha") {
                    ProviderError::RateLimitExceeded(format!("Request for video {} was blocked", video_id))
                } else {
                    ProviderError::ParseError(format!("No InnerTube API key in watch page of {}", video_id))
                }
            })?;

        let player_url = format!("{}/youtubei/v1/player?key={}", self.base_url, api_key);
        let body = serde_json::json!({
            "context": {
                "client": {
                    "clientName": INNERTUBE_CLIENT_NAME,
                    "clientVersion": INNERTUBE_CLIENT_VERSION
                }
            },
            "videoId": video_id.as_str()
        });

        debug!("Requesting player data for video {}", video_id);
        let response = self.client.post(&player_url).json(&body).send().await?;
        let response = check_status(response).await?;

        response
            .json::<Value>()
            .await
            .map_err(|e| ProviderError::ParseError(format!("Failed to parse player response: {}", e)))
    }

    async fn get_text(&self, url: &str) -> Result<String, ProviderError> {
        let response = self.client.get(url).send().await?;
        let response = check_status(response).await?;
        Ok(response.text().await?)
    }
}

#[async_trait]
impl MetadataSource for YouTubeClient {
    async fn fetch_duration(&self, video_id: &VideoId) -> Result<u64, ProviderError> {
        let player = self.fetch_player_response(video_id).await?;
        parse_duration(&player)
    }
}

#[async_trait]
impl TranscriptSource for YouTubeClient {
    async fn list_transcripts(&self, video_id: &VideoId) -> Result<Vec<TranscriptDescriptor>, TranscriptError> {
        let player = self.fetch_player_response(video_id).await?;
        parse_caption_tracks(video_id, &player)
    }

    async fn fetch_entries(
        &self,
        video_id: &VideoId,
        descriptor: &TranscriptDescriptor,
    ) -> Result<Vec<TranscriptEntry>, TranscriptError> {
        let url = format!("{}&fmt=json3", descriptor.base_url.replace("&fmt=srv3", ""));
        if url.contains("&exp=xpe") {
            return Err(TranscriptError::Unexpected(format!(
                "Transcript of video {} requires a PO token",
                video_id
            )));
        }

        debug!("Fetching '{}' transcript entries for video {}", descriptor.language_code, video_id);
        let body = self.get_text(&url).await?;
        parse_json3(&body).map_err(TranscriptError::from)
    }
}

async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ProviderError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    if status.as_u16() == 429 {
        return Err(ProviderError::RateLimitExceeded(format!("HTTP {}", status)));
    }

    let message = response.text().await.unwrap_or_default();
    Err(ProviderError::ApiError {
        status_code: status.as_u16(),
        message: message.chars().take(200).collect(),
    })
}

fn playability(player: &Value) -> (&str, &str) {
    let status = player
        .pointer("/playabilityStatus/status")
        .and_then(Value::as_str)
        .unwrap_or("OK");
    let reason = player
        .pointer("/playabilityStatus/reason")
        .and_then(Value::as_str)
        .unwrap_or("");
    (status, reason)
}

/// Duration in seconds from `videoDetails.lengthSeconds`
pub fn parse_duration(player: &Value) -> Result<u64, ProviderError> {
    let length = player.pointer("/videoDetails/lengthSeconds");
    let seconds = match length {
        Some(Value::String(s)) => s.parse::<u64>().ok(),
        Some(Value::Number(n)) => n.as_u64(),
        _ => None,
    };

    seconds.ok_or_else(|| {
        let (status, reason) = playability(player);
        if status != "OK" {
            ProviderError::ApiError {
                status_code: 403,
                message: format!("{}: {}", status, reason),
            }
        } else {
            ProviderError::ParseError("Video platform reported no duration".to_string())
        }
    })
}

/// Transcript descriptors from `captions.playerCaptionsTracklistRenderer`
pub fn parse_caption_tracks(video_id: &VideoId, player: &Value) -> Result<Vec<TranscriptDescriptor>, TranscriptError> {
    let (status, reason) = playability(player);
    if status != "OK" {
        warn!("Video {} is not playable: {} {}", video_id, status, reason);
        return Err(TranscriptError::VideoUnavailable(video_id.to_string()));
    }

    let tracks = player
        .pointer("/captions/playerCaptionsTracklistRenderer/captionTracks")
        .and_then(Value::as_array)
        .ok_or_else(|| TranscriptError::TranscriptsDisabled(video_id.to_string()))?;

    let descriptors: Vec<TranscriptDescriptor> = tracks
        .iter()
        .filter_map(|track| {
            let language_code = track.get("languageCode")?.as_str()?.to_string();
            let base_url = track.get("baseUrl")?.as_str()?.to_string();
            let language = track
                .pointer("/name/runs/0/text")
                .or_else(|| track.pointer("/name/simpleText"))
                .and_then(Value::as_str)
                .unwrap_or(&language_code)
                .to_string();
            let is_generated = track.get("kind").and_then(Value::as_str) == Some("asr");

            Some(TranscriptDescriptor {
                language_code,
                language,
                is_generated,
                base_url,
            })
        })
        .collect();

    if descriptors.is_empty() {
        return Err(TranscriptError::TranscriptsDisabled(video_id.to_string()));
    }

    Ok(descriptors)
}

#[derive(Deserialize)]
struct Json3Transcript {
    #[serde(default)]
    events: Vec<Json3Event>,
}

#[derive(Deserialize)]
struct Json3Event {
    #[serde(rename = "tStartMs")]
    t_start_ms: Option<u64>,
    #[serde(rename = "dDurationMs")]
    d_duration_ms: Option<u64>,
    segs: Option<Vec<Json3Segment>>,
}

#[derive(Deserialize)]
struct Json3Segment {
    #[serde(default)]
    utf8: String,
}

/// Entries from a `fmt=json3` transcript body
///
/// Segments are joined per event, HTML entities decoded and line breaks
/// flattened; events carrying no visible text are dropped.
pub fn parse_json3(body: &str) -> Result<Vec<TranscriptEntry>, ProviderError> {
    let transcript: Json3Transcript = serde_json::from_str(body)
        .map_err(|e| ProviderError::ParseError(format!("Failed to parse transcript: {}", e)))?;

    let entries = transcript
        .events
        .into_iter()
        .filter_map(|event| {
            let segs = event.segs?;
            let raw: String = segs.iter().map(|s| s.utf8.as_str()).collect();
            let text = html_escape::decode_html_entities(&raw).replace('\n', " ");
            if text.trim().is_empty() {
                return None;
            }

            Some(TranscriptEntry {
                start: event.t_start_ms.unwrap_or(0) as f64 / 1000.0,
                duration: event.d_duration_ms.unwrap_or(0) as f64 / 1000.0,
                text,
            })
        })
        .collect();

    Ok(entries)
}
