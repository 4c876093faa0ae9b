/*!
 * Common test utilities for the ytsubtrans test suite
 */

use std::sync::Arc;

use ytsubtrans::app_config::{Config, RetryConfig};
use ytsubtrans::app_controller::Controller;
use ytsubtrans::providers::mock::{MockMetadataSource, MockTranscriptSource, MockTranslator, descriptor, entries};

/// Install a test logger once; repeated calls are ignored
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Default configuration without any retry waits
pub fn test_config() -> Config {
    Config {
        retry: RetryConfig::immediate(),
        ..Config::default()
    }
}

/// Mock services shared with the controller, so tests can inspect call counts
pub struct MockServices {
    pub metadata: MockMetadataSource,
    pub transcripts: MockTranscriptSource,
    pub translator: MockTranslator,
}

impl MockServices {
    /// A 2:05 video with an auto-generated Malayalam track `["hello ", "world"]`
    pub fn happy_path() -> Self {
        Self {
            metadata: MockMetadataSource::with_duration(125),
            transcripts: MockTranscriptSource::with_tracks(vec![
                (descriptor("ml", false), entries(&["manual track"])),
                (descriptor("ml", true), entries(&["hello ", "world"])),
            ]),
            translator: MockTranslator::working(),
        }
    }

    /// Build a controller over clones of these mocks
    pub fn controller(&self, config: Config) -> Controller {
        Controller::with_services(
            config,
            Arc::new(self.metadata.clone()),
            Arc::new(self.transcripts.clone()),
            Arc::new(self.translator.clone()),
        )
    }

    /// Total number of upstream calls made so far
    pub fn total_calls(&self) -> usize {
        self.metadata.call_count()
            + self.transcripts.list_count()
            + self.transcripts.fetch_count()
            + self.translator.request_count()
    }
}
