//! Configuration module for Tekst.
//!
//! Handles loading and managing application settings and prompt templates.

mod prompts;
mod settings;

pub use prompts::Prompts;
pub use settings::{GeneralSettings, LlmSettings, PromptSettings, Settings, YoutubeSettings};
