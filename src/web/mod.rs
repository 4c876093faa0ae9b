/*!
 * Web form for the subtitle translator.
 *
 * - `handlers`: axum route handlers
 * - `page`: HTML rendering of the form and run results
 */

use anyhow::{Context, Result};
use axum::{
    Router,
    routing::{get, post},
};
use log::info;
use std::sync::Arc;

use crate::app_controller::Controller;

pub mod handlers;
pub mod page;

pub use handlers::*;

/// Server state shared across handlers
#[derive(Debug, Clone)]
pub struct AppState {
    pub controller: Arc<Controller>,
}

impl AppState {
    pub fn new(controller: Controller) -> Self {
        Self {
            controller: Arc::new(controller),
        }
    }
}

/// Build the router with every route of the form
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/translate", post(translate))
        .route("/download", post(download))
        .route("/health", get(health_check))
        .with_state(state)
}

/// Serve the form on `addr` until the process is stopped
pub async fn serve(addr: &str, state: AppState) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context(format!("Failed to bind {}", addr))?;
    info!("Serving YouTube Subtitle Translator on http://{}", listener.local_addr()?);

    axum::serve(listener, build_router(state))
        .await
        .context("Web server stopped unexpectedly")
}
