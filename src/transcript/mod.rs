//! Transcript retrieval abstraction.
//!
//! Provides a trait-based interface for transcript sources, plus the plain
//! data types that cross that seam: the language options a video offers and
//! the timed caption lines a fetch returns.

mod youtube;

pub use youtube::YoutubeTranscripts;

use crate::error::Result;
use crate::video::VideoId;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One subtitle language offered for a video.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageOption {
    /// BCP-47-ish language code as reported by the source (e.g. "en", "pt-BR").
    pub language_code: String,
    /// Human-readable language name.
    pub display_name: String,
    /// True for machine-generated (ASR) tracks.
    pub is_auto_generated: bool,
    /// True if the source can translate this track to other languages.
    pub is_translatable: bool,
}

impl LanguageOption {
    /// One-line label for selection lists.
    pub fn label(&self) -> String {
        let mut label = format!("{} - {}", self.language_code, self.display_name);
        if self.is_auto_generated {
            label.push_str(" (auto-generated)");
        }
        label
    }
}

/// A single timed caption line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaptionLine {
    pub text: String,
    pub start_seconds: f64,
    pub duration_seconds: f64,
}

/// Trait for transcript providers.
#[async_trait]
pub trait TranscriptSource: Send + Sync {
    /// List the subtitle languages available for a video.
    ///
    /// Fails with `NoTranscriptFound` when the video has no transcripts and
    /// `TranscriptsDisabled` when the uploader turned them off.
    async fn list_languages(&self, video: &VideoId) -> Result<Vec<LanguageOption>>;

    /// Fetch the caption lines for one language, in chronological order.
    ///
    /// Fails with `LanguageNotAvailable` when the advertised language turns
    /// out not to be retrievable.
    async fn fetch(&self, video: &VideoId, language_code: &str) -> Result<Vec<CaptionLine>>;
}

/// Deduplicate language options by code and sort them for display.
///
/// Duplicate codes keep the last occurrence. Display order is ascending by
/// language code regardless of the order the source returned.
pub fn dedup_and_sort(options: Vec<LanguageOption>) -> Vec<LanguageOption> {
    let mut by_code: BTreeMap<String, LanguageOption> = BTreeMap::new();
    for option in options {
        by_code.insert(option.language_code.clone(), option);
    }
    by_code.into_values().collect()
}

/// Join caption lines into plain text, one caption per line.
///
/// Keeps the order the source returned; timing data is dropped.
pub fn join_caption_text(lines: &[CaptionLine]) -> String {
    lines
        .iter()
        .map(|line| line.text.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn option(code: &str, name: &str) -> LanguageOption {
        LanguageOption {
            language_code: code.to_string(),
            display_name: name.to_string(),
            is_auto_generated: false,
            is_translatable: true,
        }
    }

    #[test]
    fn test_sorted_by_language_code() {
        let options = vec![option("pt", "Portuguese"), option("de", "German"), option("en", "English")];
        let sorted = dedup_and_sort(options);
        let codes: Vec<&str> = sorted.iter().map(|o| o.language_code.as_str()).collect();
        assert_eq!(codes, vec!["de", "en", "pt"]);
    }

    #[test]
    fn test_duplicate_codes_last_wins() {
        let options = vec![option("en", "English (first)"), option("en", "English (second)")];
        let sorted = dedup_and_sort(options);
        assert_eq!(sorted.len(), 1);
        assert_eq!(sorted[0].display_name, "English (second)");
    }

    #[test]
    fn test_join_keeps_order_and_drops_timing() {
        let lines = vec![
            CaptionLine {
                text: "hello".to_string(),
                start_seconds: 0.0,
                duration_seconds: 1.5,
            },
            CaptionLine {
                text: "world".to_string(),
                start_seconds: 1.5,
                duration_seconds: 2.0,
            },
        ];
        assert_eq!(join_caption_text(&lines), "hello\nworld");
    }

    #[test]
    fn test_join_empty() {
        assert_eq!(join_caption_text(&[]), "");
    }

    #[test]
    fn test_label() {
        let mut opt = option("en", "English");
        assert_eq!(opt.label(), "en - English");
        opt.is_auto_generated = true;
        assert_eq!(opt.label(), "en - English (auto-generated)");
    }
}
