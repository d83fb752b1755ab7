//! Tekst - YouTube Transcript Extraction
//!
//! A CLI tool for fetching YouTube subtitle transcripts and exploring them
//! with Gemini.
//!
//! The name "Tekst" comes from the Norwegian word for "text."
//!
//! # Overview
//!
//! Tekst allows you to:
//! - List the subtitle languages a YouTube video offers
//! - Fetch a transcript as plain text, one caption per line
//! - Organize a transcript into structured notes with Gemini
//! - Chat about a video's content, grounded in its transcript
//!
//! # Architecture
//!
//! The library is organized into several modules:
//!
//! - `video` - YouTube URL resolution
//! - `transcript` - Transcript source abstraction and the YouTube client
//! - `workflow` - The URL → languages → selection → fetch state machine
//! - `llm` - Gemini client, organize and chat operations
//! - `config` - Configuration management
//!
//! # Example
//!
//! ```rust,no_run
//! use tekst::config::Settings;
//! use tekst::transcript::YoutubeTranscripts;
//! use tekst::workflow::Workflow;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let settings = Settings::load()?;
//!     let source = YoutubeTranscripts::new(settings.youtube_timeout());
//!     let mut workflow = Workflow::new(source);
//!
//!     let languages = workflow.submit_url("https://youtu.be/dQw4w9WgXcQ").await?;
//!     let code = languages[0].language_code.clone();
//!     let transcript = workflow.fetch_transcript(&code).await?;
//!     println!("{}", transcript);
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod llm;
pub mod transcript;
pub mod video;
pub mod workflow;

pub use error::{Result, TekstError};
