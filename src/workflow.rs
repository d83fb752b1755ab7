//! Transcript extraction workflow.
//!
//! Owns the current (video, language list, transcript) triple and moves it
//! through explicit transitions: submit a URL, then fetch the transcript for
//! a selected language. Each transition is one blocking round trip; the
//! triple is only ever replaced wholesale, never patched in place.

use crate::error::{Result, TekstError};
use crate::transcript::{dedup_and_sort, join_caption_text, LanguageOption, TranscriptSource};
use crate::video::{resolve_video_id, VideoId};
use tracing::{debug, info};

/// Observable workflow state between user actions.
#[derive(Debug)]
pub enum WorkflowState {
    /// Nothing loaded yet.
    Idle,
    /// Languages listed, waiting for the user to pick one.
    AwaitingSelection(Selection),
    /// Transcript fetched and held as the current working document.
    Ready(Document),
    /// A submit failed; holds the user-facing message.
    Failed(String),
}

/// Language options listed for a resolved video.
#[derive(Debug)]
pub struct Selection {
    pub video_id: VideoId,
    pub languages: Vec<LanguageOption>,
}

/// The current working document.
#[derive(Debug)]
pub struct Document {
    pub video_id: VideoId,
    pub languages: Vec<LanguageOption>,
    pub language_code: String,
    pub transcript: String,
}

/// Workflow over a transcript source.
pub struct Workflow<S> {
    source: S,
    state: WorkflowState,
}

impl<S: TranscriptSource> Workflow<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            state: WorkflowState::Idle,
        }
    }

    pub fn state(&self) -> &WorkflowState {
        &self.state
    }

    /// The currently loaded video, if any.
    pub fn video_id(&self) -> Option<&VideoId> {
        match &self.state {
            WorkflowState::AwaitingSelection(sel) => Some(&sel.video_id),
            WorkflowState::Ready(doc) => Some(&doc.video_id),
            _ => None,
        }
    }

    /// The listed language options, sorted by code.
    pub fn languages(&self) -> Option<&[LanguageOption]> {
        match &self.state {
            WorkflowState::AwaitingSelection(sel) => Some(&sel.languages),
            WorkflowState::Ready(doc) => Some(&doc.languages),
            _ => None,
        }
    }

    /// The current working document text, if a fetch has completed.
    pub fn transcript(&self) -> Option<&str> {
        match &self.state {
            WorkflowState::Ready(doc) => Some(&doc.transcript),
            _ => None,
        }
    }

    /// Resolve a URL and list its subtitle languages.
    ///
    /// Discards any previously loaded document. On success the workflow is
    /// left awaiting a language selection; on failure it is left in `Failed`
    /// with the error also returned to the caller.
    pub async fn submit_url(&mut self, url: &str) -> Result<&[LanguageOption]> {
        let url = url.trim();
        if url.is_empty() {
            return Err(TekstError::InvalidInput("URL must not be empty".to_string()));
        }

        // Whatever happens next, the previous working document is gone.
        self.state = WorkflowState::Idle;

        let video_id = match resolve_video_id(url) {
            Some(id) => id,
            None => return Err(self.fail(TekstError::InvalidUrl(url.to_string()))),
        };

        debug!("Resolved {} from {}", video_id, url);

        let listed = match self.source.list_languages(&video_id).await {
            Ok(options) => options,
            Err(e) => return Err(self.fail(e)),
        };

        let languages = dedup_and_sort(listed);
        if languages.is_empty() {
            return Err(self.fail(TekstError::NoSubtitlesAvailable(video_id.to_string())));
        }

        info!("Listed {} subtitle languages for {}", languages.len(), video_id);

        self.state = WorkflowState::AwaitingSelection(Selection { video_id, languages });
        match &self.state {
            WorkflowState::AwaitingSelection(sel) => Ok(&sel.languages),
            _ => unreachable!(),
        }
    }

    /// Fetch the transcript for one of the listed languages.
    ///
    /// Explicit user action; never triggered by `submit_url`. A miss (the
    /// language was advertised but is not retrievable, or the code is not in
    /// the list) leaves the video and language list intact so another
    /// language can be picked without re-resolving the URL. Success replaces
    /// the working document wholesale.
    pub async fn fetch_transcript(&mut self, language_code: &str) -> Result<&str> {
        let (video_id, languages) = match &self.state {
            WorkflowState::AwaitingSelection(sel) => {
                (sel.video_id.clone(), sel.languages.clone())
            }
            WorkflowState::Ready(doc) => (doc.video_id.clone(), doc.languages.clone()),
            _ => {
                return Err(TekstError::InvalidInput(
                    "No video loaded; submit a URL first".to_string(),
                ))
            }
        };

        if !languages.iter().any(|o| o.language_code == language_code) {
            return Err(TekstError::LanguageNotAvailable {
                video_id: video_id.to_string(),
                language: language_code.to_string(),
            });
        }

        // On failure the selection state is untouched.
        let lines = self.source.fetch(&video_id, language_code).await?;
        let transcript = join_caption_text(&lines);

        info!(
            "Fetched {} caption lines for {} ({})",
            lines.len(),
            video_id,
            language_code
        );

        self.state = WorkflowState::Ready(Document {
            video_id,
            languages,
            language_code: language_code.to_string(),
            transcript,
        });
        match &self.state {
            WorkflowState::Ready(doc) => Ok(&doc.transcript),
            _ => unreachable!(),
        }
    }

    fn fail(&mut self, error: TekstError) -> TekstError {
        self.state = WorkflowState::Failed(error.to_string());
        error
    }
}
