//! Conversational session over a transcript.

use super::gemini::{Content, GeminiClient};
use crate::error::Result;
use tracing::debug;

/// Who produced a chat turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

/// One turn of the conversation.
#[derive(Debug, Clone)]
pub struct ChatTurn {
    pub role: Role,
    pub text: String,
}

/// Chat session grounded in a transcript.
///
/// The collaborator is stateless per call: every turn resends the rendered
/// transcript context plus the entire ordered history. All conversation
/// state lives here.
pub struct ChatSession {
    client: GeminiClient,
    context: String,
    history: Vec<ChatTurn>,
}

impl ChatSession {
    /// Create a session. `context` is the rendered preamble carrying the
    /// transcript text.
    pub fn new(client: GeminiClient, context: String) -> Self {
        Self {
            client,
            context,
            history: Vec::new(),
        }
    }

    /// Send one user turn and append the assistant's reply to the history.
    pub async fn send(&mut self, user_input: &str) -> Result<String> {
        self.history.push(ChatTurn {
            role: Role::User,
            text: user_input.to_string(),
        });

        debug!("Chat turn {} ({} history entries)", user_input, self.history.len());

        let contents = build_contents(&self.context, &self.history);
        let reply = self.client.generate(&contents).await?;

        self.history.push(ChatTurn {
            role: Role::Assistant,
            text: reply.clone(),
        });

        Ok(reply)
    }

    /// Reset the conversation, keeping the transcript context.
    pub fn clear(&mut self) {
        self.history.clear();
    }

    pub fn history(&self) -> &[ChatTurn] {
        &self.history
    }
}

/// Assemble the full request content: context first, then every turn in order.
fn build_contents(context: &str, history: &[ChatTurn]) -> Vec<Content> {
    let mut contents = Vec::with_capacity(history.len() + 1);
    contents.push(Content::user(context));
    for turn in history {
        contents.push(match turn.role {
            Role::User => Content::user(turn.text.as_str()),
            Role::Assistant => Content::model(turn.text.as_str()),
        });
    }
    contents
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_precedes_history() {
        let history = vec![
            ChatTurn {
                role: Role::User,
                text: "what is this about?".to_string(),
            },
            ChatTurn {
                role: Role::Assistant,
                text: "a song".to_string(),
            },
            ChatTurn {
                role: Role::User,
                text: "which one?".to_string(),
            },
        ];

        let contents = build_contents("Transcript:\nlyrics here", &history);

        assert_eq!(contents.len(), 4);
        assert_eq!(contents[0].role, "user");
        assert_eq!(contents[0].parts[0].text, "Transcript:\nlyrics here");
        assert_eq!(contents[1].parts[0].text, "what is this about?");
        assert_eq!(contents[2].role, "model");
        assert_eq!(contents[3].role, "user");
    }

    #[test]
    fn test_empty_history_still_carries_context() {
        let contents = build_contents("ctx", &[]);
        assert_eq!(contents.len(), 1);
        assert_eq!(contents[0].parts[0].text, "ctx");
    }
}
