/*!
 * # ytsubtrans - YouTube auto-subtitle translator
 *
 * A Rust library and web form that fetches the auto-generated subtitles of
 * a YouTube video and machine-translates them.
 *
 * ## Features
 *
 * - Extract the video identifier from common YouTube URL shapes
 * - Look up the video duration
 * - Fetch the auto-generated transcript of the source language, with a
 *   bounded retry loop
 * - Translate the transcript in size-limited chunks with per-chunk retry
 * - Serve a small HTML form with downloadable results, or run from the CLI
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `app_controller`: Pipeline orchestration for one run
 * - `video_id`: Video identifier extraction
 * - `transcript`: Transcript selection and the retry loop
 * - `translation`: Chunking and chunk-by-chunk translation
 * - `providers`: Upstream service traits and clients:
 *   - `providers::youtube`: YouTube metadata and transcripts
 *   - `providers::google`: Google Translate
 *   - `providers::mock`: Scripted services for tests
 * - `web`: axum routes and page rendering
 * - `language_utils`: The supported language menu
 * - `file_utils`: Writing results to disk
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod file_utils;
pub mod language_utils;
pub mod providers;
pub mod transcript;
pub mod translation;
pub mod video_id;
pub mod web;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::{Controller, RunReport};
pub use errors::{AppError, PipelineError, ProviderError, TranscriptError};
pub use language_utils::{Language, get_language_name};
pub use video_id::{VideoId, extract_video_id};
