//! # Feature: Reminders
//!
//! Reminder delivery over the channels enabled for the session. Each send
//! fans out to every enabled notifier; a failed channel is logged and the
//! remaining channels still run.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.4.0
//! - **Toggleable**: true

use log::warn;
use std::sync::Arc;

use crate::features::notifications::Notifier;

pub const VERSION: &str = "1.0.0";

/// Fan-out of one reminder over the session's enabled channels
#[derive(Default)]
pub struct ReminderService {
    notifiers: Vec<Arc<dyn Notifier>>,
}

impl ReminderService {
    pub fn new() -> Self {
        ReminderService::default()
    }

    /// Enable a channel for this session
    pub fn add_notifier(&mut self, notifier: Arc<dyn Notifier>) {
        self.notifiers.push(notifier);
    }

    pub fn channel_count(&self) -> usize {
        self.notifiers.len()
    }

    /// Send one reminder over every enabled channel; returns how many
    /// channels delivered.
    pub async fn send_reminder(&self, message: &str, recipient: &str) -> usize {
        let mut delivered = 0;

        for notifier in &self.notifiers {
            match notifier.send(message, recipient).await {
                Ok(()) => delivered += 1,
                Err(e) => {
                    warn!("{} reminder to {recipient} failed: {e}", notifier.channel());
                }
            }
        }

        delivered
    }
}
