use config::Config;
use meeting_nlp::{annotation, media, transcription};
use std::sync::Arc;

pub mod config;
pub mod logging;

// Service-level state containing only infrastructure concerns: configuration
// plus the capability providers the extraction pipeline calls into.
// Needs to implement Clone to be able to be passed into Router as State
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    transcriber: Arc<dyn transcription::Provider>,
    media_extractor: Arc<dyn media::Extractor>,
    annotator: Arc<dyn annotation::Provider>,
}

impl AppState {
    pub fn new(
        app_config: Config,
        transcriber: Arc<dyn transcription::Provider>,
        media_extractor: Arc<dyn media::Extractor>,
        annotator: Arc<dyn annotation::Provider>,
    ) -> Self {
        Self {
            config: app_config,
            transcriber,
            media_extractor,
            annotator,
        }
    }

    pub fn transcriber(&self) -> &dyn transcription::Provider {
        self.transcriber.as_ref()
    }

    pub fn media_extractor(&self) -> &dyn media::Extractor {
        self.media_extractor.as_ref()
    }

    pub fn annotator(&self) -> &dyn annotation::Provider {
        self.annotator.as_ref()
    }
}
