/*!
 * Chunked translation with per-chunk retry.
 *
 * The source text is cut into fixed-size chunks which are translated one
 * after another. Each chunk gets a small attempt budget with a randomized
 * backoff between attempts; a chunk that runs out of attempts fails the
 * whole translation, and nothing translated so far is returned.
 */

use log::{debug, error, info, warn};
use rand::Rng;
use std::sync::Arc;
use std::time::Duration;

use crate::app_config::RetryConfig;
use crate::errors::{PipelineError, ProviderError};
use crate::providers::Translator;

use super::chunking::split_into_chunks;

/// Translates arbitrary-length text through a size-limited translator
#[derive(Debug, Clone)]
pub struct ChunkedTranslator {
    /// Translation backend
    translator: Arc<dyn Translator>,
    /// Maximum characters per request
    chunk_size: usize,
    /// Attempts per chunk
    max_attempts: u32,
    /// Bounds of the uniformly random wait after a failed attempt
    backoff_min: Duration,
    backoff_max: Duration,
}

impl ChunkedTranslator {
    /// Create a chunked translator with the given retry settings
    pub fn new(translator: Arc<dyn Translator>, retry: &RetryConfig) -> Self {
        let (backoff_min, backoff_max) = retry.translation_backoff();
        Self {
            translator,
            chunk_size: retry.chunk_size.max(1),
            max_attempts: retry.translation_max_attempts.max(1),
            backoff_min,
            backoff_max: backoff_max.max(backoff_min),
        }
    }

    /// Translate `text`, returning every chunk's translation followed by a line break
    pub async fn translate(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
    ) -> Result<String, PipelineError> {
        self.translate_with_progress(text, source_language, target_language, |_, _| {}).await
    }

    /// Same as `translate`, reporting `(chunks_done, chunks_total)` after each chunk
    pub async fn translate_with_progress(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
        progress_callback: impl Fn(usize, usize),
    ) -> Result<String, PipelineError> {
        let chunks = split_into_chunks(text, self.chunk_size);
        let total = chunks.len();
        debug!("Translating {} characters in {} chunk(s) of at most {}",
               text.chars().count(), total, self.chunk_size);

        let mut translated_text = String::new();
        for (chunk_index, chunk) in chunks.iter().enumerate() {
            let translated_chunk = self
                .translate_chunk(chunk_index, chunk, source_language, target_language)
                .await?;
            translated_text.push_str(&translated_chunk);
            translated_text.push('\n');
            progress_callback(chunk_index + 1, total);
        }

        if translated_text.trim().is_empty() {
            error!("Translation resulted in empty text. Please check the translation API or input.");
            return Err(PipelineError::EmptyTranslationResult);
        }

        info!("Translated {} chunk(s) {} -> {}", total, source_language, target_language);
        Ok(translated_text)
    }

    async fn translate_chunk(
        &self,
        chunk_index: usize,
        chunk: &str,
        source_language: &str,
        target_language: &str,
    ) -> Result<String, PipelineError> {
        let mut attempt = 0;
        let mut last_error: Option<ProviderError> = None;

        while attempt < self.max_attempts {
            attempt += 1;
            match self.translator.translate(chunk, source_language, target_language).await {
                Ok(translated) => return Ok(translated),
                Err(e) => {
                    warn!("Translation error on chunk {} (attempt {}/{}): {}. Retrying...",
                          chunk_index, attempt, self.max_attempts, e);
                    last_error = Some(e);

                    if attempt < self.max_attempts {
                        tokio::time::sleep(self.random_backoff()).await;
                    }
                }
            }
        }

        let err = PipelineError::ChunkTranslationFailure {
            chunk_index,
            attempts: attempt,
            last_error: last_error
                .unwrap_or_else(|| ProviderError::RequestFailed("no attempt was made".to_string())),
        };
        error!("Failed to translate some parts of the subtitles after multiple retries: {}", err);
        Err(err)
    }

    fn random_backoff(&self) -> Duration {
        if self.backoff_max <= self.backoff_min {
            return self.backoff_min;
        }
        let millis = rand::rng().random_range(self.backoff_min.as_millis()..=self.backoff_max.as_millis());
        Duration::from_millis(millis as u64)
    }
}
