/*!
 * End-to-end pipeline scenarios over scripted upstream services
 */

use std::sync::Mutex;

use ytsubtrans::app_controller::{NoticeLevel, VideoDuration};
use ytsubtrans::errors::{PipelineError, TranscriptError};
use ytsubtrans::language_utils::Language;
use ytsubtrans::providers::mock::{MockMetadataSource, MockTranscriptSource, MockTranslator};

use crate::common::{MockServices, init_logger, test_config};

const WATCH_URL: &str = "https://www.youtube.com/watch?v=abc12345678";

#[tokio::test]
async fn test_run_autoGeneratedTrack_shouldTranslateAndOfferDownloads() {
    init_logger();
    let services = MockServices::happy_path();
    let controller = services.controller(test_config());

    let report = controller.run(WATCH_URL, Language::Malayalam, Language::English).await;

    assert!(report.is_success());
    assert_eq!(report.video_id.as_ref().map(|v| v.as_str()), Some("abc12345678"));
    assert_eq!(report.duration, Some(VideoDuration(125)));
    // The manual track is skipped
    assert_eq!(report.original_text.as_deref(), Some("hello  world"));
    assert_eq!(report.translated_text.as_deref(), Some("[en] hello  world\n"));
    assert_eq!(services.translator.request_count(), 1);

    assert_eq!(report.notices.len(), 1);
    assert_eq!(report.notices[0].level, NoticeLevel::Success);
    assert_eq!(report.notices[0].message, "Translation completed successfully!");

    let downloads = report.downloads();
    assert_eq!(downloads[0].file_name, "abc12345678_original.txt");
    assert_eq!(downloads[0].content, "hello  world");
    assert_eq!(downloads[1].file_name, "abc12345678_translated.txt");
    assert_eq!(downloads[1].content, "[en] hello  world\n");
}

#[tokio::test]
async fn test_run_noTranscriptFiveTimes_shouldReportExhaustionWithDurationOnly() {
    init_logger();
    let services = MockServices {
        transcripts: MockTranscriptSource::always_failing(TranscriptError::NoTranscriptFound {
            video_id: "abc12345678".to_string(),
            language: "ml".to_string(),
        }),
        ..MockServices::happy_path()
    };
    let controller = services.controller(test_config());

    let report = controller.run(WATCH_URL, Language::Malayalam, Language::English).await;

    assert!(matches!(
        report.failure,
        Some(PipelineError::TranscriptExhausted { attempts: 5, .. })
    ));
    assert_eq!(services.transcripts.list_count(), 5);
    assert_eq!(report.duration, Some(VideoDuration(125)));
    assert!(report.original_text.is_none());
    assert!(report.translated_text.is_none());
    assert!(report.downloads().is_empty());
    assert_eq!(services.translator.request_count(), 0);

    assert_eq!(report.notices.len(), 1);
    assert_eq!(report.notices[0].level, NoticeLevel::Error);
}

#[tokio::test]
async fn test_run_nonYouTubeUrl_shouldFailWithoutUpstreamCalls() {
    init_logger();
    let services = MockServices::happy_path();
    let controller = services.controller(test_config());

    let report = controller.run("https://example.com/", Language::Malayalam, Language::English).await;

    assert!(matches!(report.failure, Some(PipelineError::InvalidUrl(_))));
    assert!(report.video_id.is_none());
    assert!(report.duration.is_none());
    assert_eq!(report.notices[0].message, "Invalid YouTube URL. Please enter a valid URL.");
    assert_eq!(services.total_calls(), 0);
}

#[tokio::test]
async fn test_run_privateVideo_shouldStopAfterMetadata() {
    init_logger();
    let services = MockServices {
        metadata: MockMetadataSource::unavailable(),
        ..MockServices::happy_path()
    };
    let controller = services.controller(test_config());

    let report = controller.run("https://youtu.be/abc12345678", Language::Malayalam, Language::English).await;

    assert!(matches!(report.failure, Some(PipelineError::MetadataUnavailable { .. })));
    assert!(report.duration.is_none());
    assert_eq!(services.transcripts.list_count(), 0);
    assert!(report.notices[0].message.starts_with("Could not retrieve video details."));
}

#[tokio::test]
async fn test_run_chunkExhausted_shouldShowOriginalButNoTranslation() {
    init_logger();
    let services = MockServices {
        translator: MockTranslator::failing(),
        ..MockServices::happy_path()
    };
    let controller = services.controller(test_config());

    let report = controller.run(WATCH_URL, Language::Malayalam, Language::English).await;

    assert!(matches!(
        report.failure,
        Some(PipelineError::ChunkTranslationFailure { chunk_index: 0, attempts: 3, .. })
    ));
    assert_eq!(report.original_text.as_deref(), Some("hello  world"));
    assert!(report.translated_text.is_none());
    assert!(report.downloads().is_empty());
    assert_eq!(services.translator.request_count(), 3);
    assert_eq!(
        report.notices[0].message,
        "Failed to translate some parts of the subtitles after multiple retries."
    );
}

#[tokio::test]
async fn test_run_transcriptRecovers_shouldRescanAndTranslate() {
    init_logger();
    let services = MockServices {
        transcripts: MockServices::happy_path()
            .transcripts
            .failing_first(2, TranscriptError::TranscriptsDisabled("abc12345678".to_string())),
        ..MockServices::happy_path()
    };
    let controller = services.controller(test_config());

    let report = controller.run(WATCH_URL, Language::Malayalam, Language::English).await;

    assert!(report.is_success());
    assert_eq!(services.transcripts.list_count(), 3);
    assert_eq!(services.transcripts.fetch_count(), 1);
}

#[tokio::test]
async fn test_run_blankTranslation_shouldReportEmptyResult() {
    init_logger();
    let services = MockServices {
        translator: MockTranslator::empty(),
        ..MockServices::happy_path()
    };
    let controller = services.controller(test_config());

    let report = controller.run(WATCH_URL, Language::Malayalam, Language::Tamil).await;

    assert!(matches!(report.failure, Some(PipelineError::EmptyTranslationResult)));
    assert!(report.translated_text.is_none());
}

#[tokio::test]
async fn test_runWithProgress_longTranscript_shouldReportEachChunk() {
    init_logger();
    let long_line = "x".repeat(600);
    let services = MockServices {
        transcripts: MockTranscriptSource::with_tracks(vec![(
            ytsubtrans::providers::mock::descriptor("te", true),
            ytsubtrans::providers::mock::entries(&[long_line.as_str(), "tail"]),
        )]),
        ..MockServices::happy_path()
    };
    let controller = services.controller(test_config());
    let seen = Mutex::new(Vec::new());

    let report = controller
        .run_with_progress(WATCH_URL, Language::Telugu, Language::English, |done, total| {
            seen.lock().unwrap().push((done, total))
        })
        .await;

    assert!(report.is_success());
    // 600 + 1 + 4 characters
    assert_eq!(*seen.lock().unwrap(), vec![(1, 2), (2, 2)]);
    assert_eq!(report.translated_text.unwrap().lines().count(), 2);
}
