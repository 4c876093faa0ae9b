use anyhow::{anyhow, Context, Result};
use log::warn;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Duration;

use crate::language_utils::Language;

/// Application configuration module
/// This module handles loading and validating configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Default source language for the form and the CLI
    #[serde(default = "default_source_language")]
    pub source_language: Language,

    /// Default target language for the form and the CLI
    #[serde(default = "default_target_language")]
    pub target_language: Language,

    /// Web server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Video platform settings
    #[serde(default)]
    pub youtube: YouTubeConfig,

    /// Translation service settings
    #[serde(default)]
    pub translator: TranslatorConfig,

    /// Retry budgets and chunking
    #[serde(default)]
    pub retry: RetryConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Web server configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ServerConfig {
    /// Address the form is served on
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
        }
    }
}

/// YouTube (metadata and transcripts) configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct YouTubeConfig {
    /// Base URL of the video platform
    #[serde(default = "default_youtube_endpoint")]
    pub endpoint: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for YouTubeConfig {
    fn default() -> Self {
        Self {
            endpoint: default_youtube_endpoint(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Translation service configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TranslatorConfig {
    /// Base URL of the translation endpoint
    #[serde(default = "default_translator_endpoint")]
    pub endpoint: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            endpoint: default_translator_endpoint(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Retry budgets for the transcript and translation stages
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RetryConfig {
    /// Outer transcript attempts before giving up
    #[serde(default = "default_transcript_max_attempts")]
    pub transcript_max_attempts: u32,

    /// Fixed wait between transcript attempts in milliseconds
    #[serde(default = "default_transcript_retry_delay_ms")]
    pub transcript_retry_delay_ms: u64,

    /// Attempts per chunk before the whole translation is abandoned
    #[serde(default = "default_translation_max_attempts")]
    pub translation_max_attempts: u32,

    /// Lower bound of the randomized per-chunk backoff in milliseconds
    #[serde(default = "default_translation_backoff_min_ms")]
    pub translation_backoff_min_ms: u64,

    /// Upper bound of the randomized per-chunk backoff in milliseconds
    #[serde(default = "default_translation_backoff_max_ms")]
    pub translation_backoff_max_ms: u64,

    /// Maximum characters per translation request
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            transcript_max_attempts: default_transcript_max_attempts(),
            transcript_retry_delay_ms: default_transcript_retry_delay_ms(),
            translation_max_attempts: default_translation_max_attempts(),
            translation_backoff_min_ms: default_translation_backoff_min_ms(),
            translation_backoff_max_ms: default_translation_backoff_max_ms(),
            chunk_size: default_chunk_size(),
        }
    }
}

impl RetryConfig {
    pub fn transcript_retry_delay(&self) -> Duration {
        Duration::from_millis(self.transcript_retry_delay_ms)
    }

    pub fn translation_backoff(&self) -> (Duration, Duration) {
        (
            Duration::from_millis(self.translation_backoff_min_ms),
            Duration::from_millis(self.translation_backoff_max_ms),
        )
    }

    /// No waiting at all, for tests and dry runs
    pub fn immediate() -> Self {
        Self {
            transcript_retry_delay_ms: 0,
            translation_backoff_min_ms: 0,
            translation_backoff_max_ms: 0,
            ..Self::default()
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    #[default]
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            Self::Error => log::LevelFilter::Error,
            Self::Warn => log::LevelFilter::Warn,
            Self::Info => log::LevelFilter::Info,
            Self::Debug => log::LevelFilter::Debug,
            Self::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_source_language() -> Language {
    Language::Malayalam
}

fn default_target_language() -> Language {
    Language::English
}

fn default_bind_address() -> String {
    "127.0.0.1:8501".to_string()
}

fn default_youtube_endpoint() -> String {
    "https://www.youtube.com".to_string()
}

fn default_translator_endpoint() -> String {
    "https://translate.googleapis.com".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_transcript_max_attempts() -> u32 {
    5
}

fn default_transcript_retry_delay_ms() -> u64 {
    2000
}

fn default_translation_max_attempts() -> u32 {
    3
}

fn default_translation_backoff_min_ms() -> u64 {
    5000
}

fn default_translation_backoff_max_ms() -> u64 {
    10000
}

fn default_chunk_size() -> usize {
    500
}

impl Config {
    /// Load configuration from a JSON file, falling back to defaults when it is missing
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            warn!("Config file not found at '{}', using defaults.", path.display());
            return Ok(Self::default());
        }

        let file = File::open(path)
            .context(format!("Failed to open config file: {}", path.display()))?;
        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if self.youtube.endpoint.trim().is_empty() {
            return Err(anyhow!("YouTube endpoint must not be empty"));
        }
        if self.translator.endpoint.trim().is_empty() {
            return Err(anyhow!("Translator endpoint must not be empty"));
        }
        if self.server.bind_address.trim().is_empty() {
            return Err(anyhow!("Server bind address must not be empty"));
        }

        let retry = &self.retry;
        if retry.transcript_max_attempts == 0 {
            return Err(anyhow!("transcript_max_attempts must be at least 1"));
        }
        if retry.translation_max_attempts == 0 {
            return Err(anyhow!("translation_max_attempts must be at least 1"));
        }
        if retry.chunk_size == 0 {
            return Err(anyhow!("chunk_size must be at least 1"));
        }
        if retry.translation_backoff_min_ms > retry.translation_backoff_max_ms {
            return Err(anyhow!(
                "translation_backoff_min_ms ({}) exceeds translation_backoff_max_ms ({})",
                retry.translation_backoff_min_ms,
                retry.translation_backoff_max_ms
            ));
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            source_language: default_source_language(),
            target_language: default_target_language(),
            server: ServerConfig::default(),
            youtube: YouTubeConfig::default(),
            translator: TranslatorConfig::default(),
            retry: RetryConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}
