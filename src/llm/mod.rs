//! Gemini collaborators for organizing and discussing transcripts.
//!
//! Both operations are plain request/response calls; the chat keeps all
//! conversation state locally and resends it each turn.

mod chat;
mod gemini;

pub use chat::{ChatSession, ChatTurn, Role};
pub use gemini::{Content, GeminiClient};
