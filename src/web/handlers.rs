//! HTTP request handlers for the translator form

use axum::{
    Form, Json,
    extract::State,
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
};
use log::{info, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::app_controller::RunReport;
use crate::errors::PipelineError;
use crate::language_utils::Language;

use super::AppState;
use super::page::{FormState, render_page};

/// Names of the only files `/download` will hand out
static DOWNLOAD_NAME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9A-Za-z_-]{11}_(original|translated)\.txt$").expect("download name pattern is valid")
});

/// Submitted translation form
#[derive(Debug, Deserialize)]
pub struct TranslateForm {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub source_language: String,
    #[serde(default)]
    pub target_language: String,
}

/// Text posted back by a download button
#[derive(Debug, Deserialize)]
pub struct DownloadForm {
    pub file_name: String,
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Empty form with the configured default languages
pub async fn index(State(state): State<AppState>) -> Html<String> {
    let config = state.controller.config();
    Html(render_page(
        &FormState::new(config.source_language, config.target_language),
        None,
    ))
}

/// Run the pipeline for a submitted form and render the results
pub async fn translate(State(state): State<AppState>, Form(form): Form<TranslateForm>) -> Html<String> {
    let config = state.controller.config();
    let source = Language::from_code(&form.source_language);
    let target = Language::from_code(&form.target_language);

    let mut page_form = FormState {
        url: form.url.trim().to_string(),
        source_language: source.unwrap_or(config.source_language),
        target_language: target.unwrap_or(config.target_language),
    };

    let (Some(source), Some(target)) = (source, target) else {
        warn!("Rejected unsupported language pair: {:?} -> {:?}", form.source_language, form.target_language);
        let report = RunReport::rejected(PipelineError::UnsupportedLanguage(format!(
            "{} -> {}",
            form.source_language, form.target_language
        )));
        return Html(render_page(&page_form, Some(&report)));
    };

    info!("Translation requested for {}", page_form.url);
    let report = state.controller.run(&page_form.url, source, target).await;
    page_form.source_language = source;
    page_form.target_language = target;

    Html(render_page(&page_form, Some(&report)))
}

/// Return posted text as an attachment
///
/// Browsers submit line breaks in form fields as CRLF; they are turned back
/// into the `\n` the page was rendered with.
pub async fn download(Form(form): Form<DownloadForm>) -> Response {
    if !DOWNLOAD_NAME_PATTERN.is_match(&form.file_name) {
        warn!("Rejected download with file name: {:?}", form.file_name);
        return (StatusCode::BAD_REQUEST, "Invalid download file name").into_response();
    }

    (
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", form.file_name),
            ),
        ],
        form.content.replace("\r\n", "\n"),
    )
        .into_response()
}
