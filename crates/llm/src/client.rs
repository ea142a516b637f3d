//! The [`ChatClient`] seam and the request types passed through it.
//!
//! Handlers and the batch runner only see `dyn ChatClient`, so tests can swap
//! the hosted model for a stub.

use async_trait::async_trait;
use serde::Serialize;

use crate::error::LlmError;

/// Role of a message in a chat exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
}

/// A single message in a chat exchange.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: ChatRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

/// A chat-completion request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatRequest {
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
}

impl ChatRequest {
    /// The fixed two-message exchange used for prompt runs:
    /// system role carries the prompt text, user role carries the test case.
    pub fn system_and_user(system: &str, user: &str, temperature: f32) -> Self {
        Self {
            messages: vec![
                ChatMessage::new(ChatRole::System, system),
                ChatMessage::new(ChatRole::User, user),
            ],
            temperature,
        }
    }
}

/// Something that can turn a [`ChatRequest`] into completion text.
#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Send one request and return the completion text.
    async fn complete(&self, request: &ChatRequest) -> Result<String, LlmError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_and_user_builds_two_messages_in_order() {
        let request = ChatRequest::system_and_user("Be nice", "Hi", 0.7);
        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.messages[0].role, ChatRole::System);
        assert_eq!(request.messages[0].content, "Be nice");
        assert_eq!(request.messages[1].role, ChatRole::User);
        assert_eq!(request.messages[1].content, "Hi");
    }

    #[test]
    fn request_serializes_roles_lowercase() {
        let request = ChatRequest::system_and_user("sys", "usr", 0.5);
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["role"], "user");
        assert_eq!(json["temperature"], 0.5);
    }
}
