use anyhow::Result;
use log::{error, info};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::app_config::Config;
use crate::errors::PipelineError;
use crate::language_utils::Language;
use crate::providers::google::GoogleTranslator;
use crate::providers::youtube::YouTubeClient;
use crate::providers::{MetadataSource, TranscriptSource, Translator};
use crate::transcript::{TranscriptFetcher, TranscriptRetry};
use crate::translation::ChunkedTranslator;
use crate::video_id::{VideoId, extract_video_id};

// @module: Application controller for one subtitle translation run

/// Video length, displayed as `minutes:seconds`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VideoDuration(pub u64);

impl VideoDuration {
    pub fn seconds(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for VideoDuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{:02}", self.0 / 60, self.0 % 60)
    }
}

/// Severity of a user-facing banner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Error,
    Success,
}

/// A banner shown above the results
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

/// A downloadable text artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    pub label: &'static str,
    pub file_name: String,
    pub content: String,
}

/// Everything one run produced, in display order
///
/// Fields stay `None` for stages that never ran. `translated_text` is only
/// set when every chunk translated.
#[derive(Debug, Default)]
pub struct RunReport {
    pub video_id: Option<VideoId>,
    pub duration: Option<VideoDuration>,
    pub original_text: Option<String>,
    pub translated_text: Option<String>,
    pub notices: Vec<Notice>,
    pub failure: Option<PipelineError>,
}

impl RunReport {
    /// Report for a submission refused before any work was done
    pub fn rejected(err: PipelineError) -> Self {
        let mut report = Self::default();
        report.fail(err);
        report
    }

    fn fail(&mut self, err: PipelineError) {
        self.notices.push(Notice {
            level: NoticeLevel::Error,
            message: err.user_message(),
        });
        self.failure = Some(err);
    }

    pub fn is_success(&self) -> bool {
        self.failure.is_none() && self.translated_text.is_some()
    }

    /// Original and translated files, offered only after a complete translation
    pub fn downloads(&self) -> Vec<Download> {
        let (Some(video_id), Some(original), Some(translated)) =
            (&self.video_id, &self.original_text, &self.translated_text)
        else {
            return Vec::new();
        };

        vec![
            Download {
                label: "Download Original Subtitles",
                file_name: video_id.file_name("original"),
                content: original.clone(),
            },
            Download {
                label: "Download Translated Subtitles",
                file_name: video_id.file_name("translated"),
                content: translated.clone(),
            },
        ]
    }
}

/// Main application controller for subtitle translation
#[derive(Debug)]
pub struct Controller {
    // @field: App configuration
    config: Config,
    metadata: Arc<dyn MetadataSource>,
    transcripts: TranscriptRetry,
    translator: ChunkedTranslator,
    /// Only one run at a time
    run_gate: Mutex<()>,
}

impl Controller {
    /// Create a controller talking to YouTube and Google Translate
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;

        let youtube = Arc::new(YouTubeClient::new(&config.youtube.endpoint, config.youtube.timeout_secs));
        let translator = Arc::new(GoogleTranslator::new(&config.translator.endpoint, config.translator.timeout_secs));

        Ok(Self::with_services(config, youtube.clone(), youtube, translator))
    }

    /// Create a controller over arbitrary upstream services
    pub fn with_services(
        config: Config,
        metadata: Arc<dyn MetadataSource>,
        transcripts: Arc<dyn TranscriptSource>,
        translator: Arc<dyn Translator>,
    ) -> Self {
        let transcripts = TranscriptRetry::new(
            TranscriptFetcher::new(transcripts),
            config.retry.transcript_max_attempts,
            config.retry.transcript_retry_delay(),
        );
        let translator = ChunkedTranslator::new(translator, &config.retry);

        Self {
            config,
            metadata,
            transcripts,
            translator,
            run_gate: Mutex::new(()),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run the whole pipeline for one submission
    pub async fn run(&self, url: &str, source: Language, target: Language) -> RunReport {
        self.run_with_progress(url, source, target, |_, _| {}).await
    }

    /// Run the pipeline, reporting translated chunks as `(done, total)`
    pub async fn run_with_progress(
        &self,
        url: &str,
        source: Language,
        target: Language,
        progress_callback: impl Fn(usize, usize),
    ) -> RunReport {
        let mut report = RunReport::default();

        let video_id = match extract_video_id(url) {
            Ok(video_id) => video_id,
            Err(e) => {
                report.fail(e);
                return report;
            }
        };
        report.video_id = Some(video_id.clone());

        let _guard = self.run_gate.lock().await;
        let start_time = std::time::Instant::now();
        info!("Fetching and translating subtitles for video ID: {} ({} -> {})", video_id, source, target);

        match self.metadata.fetch_duration(&video_id).await {
            Ok(seconds) => report.duration = Some(VideoDuration(seconds)),
            Err(e) => {
                let err = PipelineError::MetadataUnavailable {
                    video_id: video_id.to_string(),
                    source: e,
                };
                error!("{}", err);
                report.fail(err);
                return report;
            }
        }

        let source_text = match self.transcripts.run(&video_id, source.code()).await {
            Ok(text) => text,
            Err(e) => {
                report.fail(e);
                return report;
            }
        };
        report.original_text = Some(source_text.clone());

        match self
            .translator
            .translate_with_progress(&source_text, source.code(), target.code(), progress_callback)
            .await
        {
            Ok(translated) => {
                report.translated_text = Some(translated);
                report.notices.push(Notice {
                    level: NoticeLevel::Success,
                    message: "Translation completed successfully!".to_string(),
                });
                info!("Translation completed successfully in {:.1}s", start_time.elapsed().as_secs_f64());
            }
            Err(e) => report.fail(e),
        }

        report
    }
}
