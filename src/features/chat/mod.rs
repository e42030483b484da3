//! # Feature: Chat Simulation
//!
//! Two-party chat routed through a shared server value. Messages are printed,
//! not delivered anywhere; group sends reuse the single-recipient path in
//! list order.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.3.0

use chrono::{DateTime, Utc};
use log::debug;
use std::sync::Arc;

pub const VERSION: &str = "1.0.0";

/// Meeting link handed out when a client starts a video call
pub const VIDEO_CALL_URL: &str = "https://meet.google.com/xyz-abc-def";

/// One routed chat message
#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub from: String,
    pub to: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

/// Transcript line printed for a routed message
pub fn format_chat_line(message: &ChatMessage) -> String {
    format!(
        "[ChatServer {}] {} -> {}: {}",
        message.timestamp.format("%H:%M:%S"),
        message.from,
        message.to,
        message.content
    )
}

/// Shared router. Printing the transcript line is the delivery.
#[derive(Debug, Default)]
pub struct ChatServer;

impl ChatServer {
    pub fn new() -> Self {
        ChatServer
    }

    /// Route one message and return the routed record
    pub fn send_message(&self, message: &str, from: &str, to: &str) -> ChatMessage {
        let routed = ChatMessage {
            from: from.to_string(),
            to: to.to_string(),
            content: message.to_string(),
            timestamp: Utc::now(),
        };

        println!("{}", format_chat_line(&routed));
        debug!("Routed chat message from {from} to {to}");
        routed
    }

    /// Route the same message to each group member, in list order
    pub fn send_group_message(
        &self,
        message: &str,
        from: &str,
        group: &[String],
    ) -> Vec<ChatMessage> {
        group
            .iter()
            .map(|to| self.send_message(message, from, to))
            .collect()
    }
}

/// Named participant bound to a server
pub struct ChatClient {
    name: String,
    server: Arc<ChatServer>,
}

impl ChatClient {
    pub fn new(name: impl Into<String>, server: Arc<ChatServer>) -> Self {
        ChatClient {
            name: name.into(),
            server,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Send a message from this client through the shared server
    pub fn send_chat(&self, message: &str, to: &str) -> ChatMessage {
        self.server.send_message(message, &self.name, to)
    }

    /// Render an incoming message on this client's console
    pub fn receive_chat(&self, message: &str, from: &str) {
        println!("[{}] Received from {}: {}", self.name, from, message);
    }

    /// Start a video call by printing the meeting link
    pub fn start_video_call(&self) {
        println!("Starting video call: {VIDEO_CALL_URL}");
    }
}
