//! # Tutor Chat Session
//!
//! Append-only message log for the lifetime of the chat view. A submission
//! appends the user's message immediately and hands back the [`ChatTurn`] to
//! send; the reply (or fallback text) is appended when the request settles.
//! One request is pending at a time.

use log::debug;
use shared::{ChatMessage, ChatRole, Content};

/// Everything needed to ask the tutor for the next reply
#[derive(Debug, Clone, PartialEq)]
pub struct ChatTurn {
    /// Earlier messages, oldest first
    pub history: Vec<Content>,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    pending: bool,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Record a user message. Blank input, or input while a reply is still
    /// pending, is ignored.
    pub fn submit(&mut self, input: &str) -> Option<ChatTurn> {
        let text = input.trim();
        if text.is_empty() || self.pending {
            return None;
        }

        let history = self.messages.iter().map(Content::from).collect();
        self.messages.push(ChatMessage::user(text));
        self.pending = true;
        debug!("Chat message submitted ({} in log)", self.messages.len());

        Some(ChatTurn {
            history,
            message: text.to_string(),
        })
    }

    /// Append the tutor's reply and clear the pending flag
    pub fn receive_reply(&mut self, text: impl Into<String>) {
        if !self.pending {
            debug!("Dropping chat reply with no pending request");
            return;
        }
        self.messages.push(ChatMessage::new(ChatRole::Model, text));
        self.pending = false;
    }
}
