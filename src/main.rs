use log::*;
use meeting_nlp::providers::ffmpeg::FfmpegExtractor;
use meeting_nlp::providers::rule_based::RuleBased;
use meeting_nlp::providers::whisper::WhisperCli;
use service::{config::Config, logging::Logger, AppState};
use std::sync::Arc;

#[tokio::main]
async fn main() {
    let config = Config::new();
    Logger::init_logger(&config as &Config);

    info!(
        "Starting action tracker API (env: {}, api version: {})",
        config.runtime_env(),
        config.api_version()
    );

    let transcriber = Arc::new(
        WhisperCli::new(config.whisper_bin(), config.whisper_model())
            .with_language(config.whisper_language()),
    );
    let media_extractor = Arc::new(FfmpegExtractor::new(config.ffmpeg_bin()));
    let annotator = Arc::new(RuleBased::new());

    let app_state = AppState::new(config, transcriber, media_extractor, annotator);

    if let Err(e) = web::init_server(app_state).await {
        error!("Server failed to start: {e}");
        std::process::exit(1);
    }
}
