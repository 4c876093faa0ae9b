/*!
 * HTTP route tests driving the router in-process
 */

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use tower::ServiceExt;

use ytsubtrans::web::{AppState, HealthResponse, build_router};

use crate::common::{MockServices, init_logger, test_config};

fn router_for(services: &MockServices) -> axum::Router {
    build_router(AppState::new(services.controller(test_config())))
}

fn form_post(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn test_health_shouldReportOkAndVersion() {
    let services = MockServices::happy_path();
    let response = router_for(&services)
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let health: HealthResponse = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(health.status, "ok");
    assert_eq!(health.version, env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_index_shouldRenderFormWithDefaults() {
    let services = MockServices::happy_path();
    let response = router_for(&services)
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("<h1>YouTube Subtitle Translator</h1>"));
    assert!(html.contains("<option value=\"ml\" selected>Malayalam (ml)</option>"));
    assert!(html.contains("<option value=\"en\" selected>English (en)</option>"));
    assert_eq!(services.total_calls(), 0);
}

#[tokio::test]
async fn test_translate_validSubmission_shouldRenderResults() {
    init_logger();
    let services = MockServices::happy_path();
    let body = "url=https%3A%2F%2Fwww.youtube.com%2Fwatch%3Fv%3Dabc12345678&source_language=ml&target_language=en";
    let response = router_for(&services).oneshot(form_post("/translate", body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("Video Duration: 2:05"));
    assert!(html.contains("hello  world"));
    assert!(html.contains("[en] hello  world"));
    assert!(html.contains("abc12345678_translated.txt"));
    assert!(html.contains("Translation completed successfully!"));
}

#[tokio::test]
async fn test_translate_invalidUrl_shouldRenderBannerOnly() {
    init_logger();
    let services = MockServices::happy_path();
    let body = "url=https%3A%2F%2Fexample.com%2F&source_language=ta&target_language=hi";
    let response = router_for(&services).oneshot(form_post("/translate", body)).await.unwrap();

    let html = body_text(response).await;
    assert!(html.contains("Invalid YouTube URL. Please enter a valid URL."));
    assert!(html.contains("<option value=\"ta\" selected>"));
    assert!(html.contains("<option value=\"hi\" selected>"));
    assert!(!html.contains("Video Duration"));
    assert_eq!(services.total_calls(), 0);
}

#[tokio::test]
async fn test_translate_unknownLanguage_shouldNotRunPipeline() {
    init_logger();
    let services = MockServices::happy_path();
    let body = "url=https%3A%2F%2Fyoutu.be%2Fabc12345678&source_language=fr&target_language=en";
    let response = router_for(&services).oneshot(form_post("/translate", body)).await.unwrap();

    let html = body_text(response).await;
    assert!(html.contains("Unsupported language selection"));
    assert_eq!(services.total_calls(), 0);
}

#[tokio::test]
async fn test_download_validName_shouldReturnAttachment() {
    let services = MockServices::happy_path();
    let body = "file_name=abc12345678_translated.txt&content=%5Ben%5D+hello++world%0A";
    let response = router_for(&services).oneshot(form_post("/download", body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_DISPOSITION).unwrap(),
        "attachment; filename=\"abc12345678_translated.txt\""
    );
    assert_eq!(body_text(response).await, "[en] hello  world\n");
}

#[tokio::test]
async fn test_download_browserLineBreaks_shouldMatchRenderedText() {
    let services = MockServices::happy_path();
    let body = "file_name=abc12345678_translated.txt&content=%5Ben%5D+a%0D%0A%5Ben%5D+b%0D%0A";
    let response = router_for(&services).oneshot(form_post("/download", body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "[en] a\n[en] b\n");
}

#[tokio::test]
async fn test_download_invalidName_shouldBeRejected() {
    let services = MockServices::happy_path();
    let body = "file_name=..%2Fconf.json&content=secret";
    let response = router_for(&services).oneshot(form_post("/download", body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
