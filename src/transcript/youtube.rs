//! YouTube transcript source.
//!
//! Talks to the innertube player endpoint for the caption track list, then
//! to the per-track timedtext URL (`fmt=json3`) for the caption payload.
//! Both responses are navigated as loose JSON; YouTube does not publish a
//! schema for them.

use super::{CaptionLine, LanguageOption, TranscriptSource};
use crate::error::{Result, TekstError};
use crate::video::VideoId;
use async_trait::async_trait;
use serde_json::{json, Value};
use std::time::Duration;
use tracing::debug;

const PLAYER_ENDPOINT: &str = "https://www.youtube.com/youtubei/v1/player";

/// Client identity sent in the innertube context. The Android client returns
/// caption metadata without a consent or login round trip.
const CLIENT_NAME: &str = "ANDROID";
const DEFAULT_CLIENT_VERSION: &str = "20.10.38";

/// Transcript source backed by YouTube's internal API.
pub struct YoutubeTranscripts {
    client: reqwest::Client,
    client_version: String,
}

impl YoutubeTranscripts {
    pub fn new(timeout: Duration) -> Self {
        Self::with_client_version(timeout, DEFAULT_CLIENT_VERSION)
    }

    /// Override the innertube client version, for when YouTube retires one.
    pub fn with_client_version(timeout: Duration, client_version: &str) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            client_version: client_version.to_string(),
        }
    }

    /// Fetch the player response for a video.
    async fn player_response(&self, video: &VideoId) -> Result<Value> {
        let body = json!({
            "context": {
                "client": {
                    "clientName": CLIENT_NAME,
                    "clientVersion": self.client_version,
                }
            },
            "videoId": video.as_str(),
        });

        debug!("Requesting player response for {}", video);

        let response = self
            .client
            .post(PLAYER_ENDPOINT)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json().await?)
    }
}

#[async_trait]
impl TranscriptSource for YoutubeTranscripts {
    async fn list_languages(&self, video: &VideoId) -> Result<Vec<LanguageOption>> {
        let player = self.player_response(video).await?;
        parse_caption_tracks(&player, video)
    }

    async fn fetch(&self, video: &VideoId, language_code: &str) -> Result<Vec<CaptionLine>> {
        let player = self.player_response(video).await?;

        let base_url = caption_track_url(&player, language_code).ok_or_else(|| {
            TekstError::LanguageNotAvailable {
                video_id: video.to_string(),
                language: language_code.to_string(),
            }
        })?;

        let url = timedtext_url(&base_url)?;

        debug!("Fetching captions for {} ({})", video, language_code);

        let response = self.client.get(url).send().await?.error_for_status()?;
        let payload: Value = response.json().await?;

        Ok(parse_caption_events(&payload))
    }
}

/// Extract the language options from a player response.
///
/// A missing `captions` object means the uploader disabled subtitles; a
/// present object with no track list means the video has none.
fn parse_caption_tracks(player: &Value, video: &VideoId) -> Result<Vec<LanguageOption>> {
    let status = player["playabilityStatus"]["status"].as_str().unwrap_or("OK");
    if status != "OK" {
        let reason = player["playabilityStatus"]["reason"]
            .as_str()
            .unwrap_or(status);
        return Err(TekstError::NoTranscriptFound(format!(
            "{} ({})",
            video, reason
        )));
    }

    let captions = &player["captions"];
    if captions.is_null() {
        return Err(TekstError::TranscriptsDisabled(video.to_string()));
    }

    let tracks = match captions["playerCaptionsTracklistRenderer"]["captionTracks"].as_array() {
        Some(tracks) => tracks,
        None => return Err(TekstError::NoTranscriptFound(video.to_string())),
    };

    let mut options = Vec::new();
    for track in tracks {
        let Some(language_code) = track["languageCode"].as_str() else {
            continue;
        };

        let display_name = track["name"]["simpleText"]
            .as_str()
            .or_else(|| track["name"]["runs"][0]["text"].as_str())
            .unwrap_or(language_code)
            .to_string();

        options.push(LanguageOption {
            language_code: language_code.to_string(),
            display_name,
            is_auto_generated: track["kind"].as_str() == Some("asr"),
            is_translatable: track["isTranslatable"].as_bool().unwrap_or(false),
        });
    }

    Ok(options)
}

/// Find the timedtext base URL for a language in a player response.
fn caption_track_url(player: &Value, language_code: &str) -> Option<String> {
    let tracks =
        player["captions"]["playerCaptionsTracklistRenderer"]["captionTracks"].as_array()?;

    tracks
        .iter()
        .find(|track| track["languageCode"].as_str() == Some(language_code))
        .and_then(|track| track["baseUrl"].as_str())
        .map(|s| s.to_string())
}

/// Rewrite a caption track URL to request the json3 format.
fn timedtext_url(base_url: &str) -> Result<url::Url> {
    let mut url = url::Url::parse(base_url)
        .map_err(|e| TekstError::InvalidInput(format!("Bad caption track URL: {}", e)))?;
    url.query_pairs_mut().append_pair("fmt", "json3");
    Ok(url)
}

/// Parse a json3 timedtext payload into caption lines.
///
/// Events without segments (window definitions) and whitespace-only segments
/// are skipped; order is preserved as returned.
fn parse_caption_events(payload: &Value) -> Vec<CaptionLine> {
    let Some(events) = payload["events"].as_array() else {
        return Vec::new();
    };

    let mut lines = Vec::new();
    for event in events {
        let Some(segs) = event["segs"].as_array() else {
            continue;
        };

        let text = segs
            .iter()
            .filter_map(|seg| seg["utf8"].as_str())
            .collect::<String>();
        let text = text.trim();
        if text.is_empty() {
            continue;
        }

        lines.push(CaptionLine {
            text: text.to_string(),
            start_seconds: event["tStartMs"].as_f64().unwrap_or(0.0) / 1000.0,
            duration_seconds: event["dDurationMs"].as_f64().unwrap_or(0.0) / 1000.0,
        });
    }

    lines
}
