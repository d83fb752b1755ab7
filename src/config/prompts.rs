//! Prompt templates for Tekst.
//!
//! Templates carry a `{{transcript}}` placeholder and can be overridden from
//! the configuration file.

use crate::config::PromptSettings;

/// Collection of prompt templates.
#[derive(Debug, Clone)]
pub struct Prompts {
    /// Prompt for the organize operation.
    pub organize: String,
    /// Context preamble prepended to every chat request.
    pub chat: String,
}

impl Default for Prompts {
    fn default() -> Self {
        Self {
            organize: r#"Please analyze the following video transcript and provide a piece of organized content with the following structure:

1.  **Title:** (A concise and descriptive title for the video)
2.  **Executive Summary:** (2-3 sentences providing a high-level overview of the video's purpose and key takeaways)
3.  **Detailed Breakdown:** Organize the transcript into coherent paragraphs, elaborating on the key points. Remove any filler words, greetings, or repetitive phrases that do not contribute to a clear understanding of the video's core message.

Transcript content:
{{transcript}}"#
                .to_string(),

            chat: r#"You are answering questions about a video based on its transcript. Answer from the transcript content; say so when it does not contain the answer.

Transcript:
{{transcript}}"#
                .to_string(),
        }
    }
}

impl Prompts {
    /// Build prompts, applying any overrides from the configuration.
    pub fn from_settings(settings: &PromptSettings) -> Self {
        let defaults = Self::default();
        Self {
            organize: settings.organize.clone().unwrap_or(defaults.organize),
            chat: settings.chat.clone().unwrap_or(defaults.chat),
        }
    }

    /// Render the organize prompt for a transcript.
    pub fn render_organize(&self, transcript: &str) -> String {
        render(&self.organize, transcript)
    }

    /// Render the chat context preamble for a transcript.
    pub fn render_chat_context(&self, transcript: &str) -> String {
        render(&self.chat, transcript)
    }
}

fn render(template: &str, transcript: &str) -> String {
    template.replace("{{transcript}}", transcript)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_replaces_placeholder() {
        let prompts = Prompts::default();
        let rendered = prompts.render_organize("hello world");
        assert!(rendered.contains("hello world"));
        assert!(!rendered.contains("{{transcript}}"));
    }

    #[test]
    fn test_overrides_apply() {
        let settings = PromptSettings {
            organize: Some("Summarize: {{transcript}}".to_string()),
            chat: None,
        };

        let prompts = Prompts::from_settings(&settings);
        assert_eq!(prompts.render_organize("abc"), "Summarize: abc");
        // Chat keeps the default.
        assert!(prompts.render_chat_context("abc").contains("Transcript:"));
    }
}
