//! Error types for Tekst.

use thiserror::Error;

/// Library-level error type for Tekst operations.
#[derive(Error, Debug)]
pub enum TekstError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid YouTube URL: {0}")]
    InvalidUrl(String),

    #[error("No transcript found for video {0}")]
    NoTranscriptFound(String),

    #[error("Subtitles are disabled for video {0}")]
    TranscriptsDisabled(String),

    #[error("No subtitles are available for video {0}")]
    NoSubtitlesAvailable(String),

    #[error("No transcript in language '{language}' for video {video_id}")]
    LanguageNotAvailable { video_id: String, language: String },

    #[error("Gemini API error: {0}")]
    Provider(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl TekstError {
    /// Whether the failure leaves the current language selection usable.
    ///
    /// A fetch-time miss for one language does not invalidate the video or
    /// the language list; the caller may pick another language.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, TekstError::LanguageNotAvailable { .. })
    }

    /// Whether the failure is an empty-result condition rather than a fault.
    ///
    /// These are surfaced to the user as warnings, not errors.
    pub fn is_empty_result(&self) -> bool {
        matches!(
            self,
            TekstError::NoTranscriptFound(_)
                | TekstError::TranscriptsDisabled(_)
                | TekstError::NoSubtitlesAvailable(_)
        )
    }
}

/// Result type alias for Tekst operations.
pub type Result<T> = std::result::Result<T, TekstError>;
