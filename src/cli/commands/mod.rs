//! CLI command implementations.

mod chat;
mod config;
mod doctor;
mod extract;
mod init;
mod languages;
mod organize;

pub use chat::run_chat;
pub use config::run_config;
pub use doctor::run_doctor;
pub use extract::run_extract;
pub use init::run_init;
pub use languages::run_languages;
pub use organize::run_organize;

use crate::config::Settings;
use crate::llm::GeminiClient;
use crate::transcript::YoutubeTranscripts;

/// Build the YouTube transcript source from settings.
pub(crate) fn transcript_source(settings: &Settings) -> YoutubeTranscripts {
    if settings.youtube.client_version.is_empty() {
        YoutubeTranscripts::new(settings.youtube_timeout())
    } else {
        YoutubeTranscripts::with_client_version(
            settings.youtube_timeout(),
            &settings.youtube.client_version,
        )
    }
}

/// Build the Gemini client, with an optional model override.
///
/// Callers run the credential pre-flight first; a missing key here is a
/// configuration error, not a panic.
pub(crate) fn gemini_client(
    settings: &Settings,
    model: Option<String>,
) -> crate::error::Result<GeminiClient> {
    let api_key = settings.api_key().ok_or_else(|| {
        crate::error::TekstError::Config(format!("{} not set", settings.llm.api_key_env))
    })?;
    let model = model.unwrap_or_else(|| settings.llm.model.clone());
    Ok(GeminiClient::new(api_key, model, settings.llm_timeout()))
}
