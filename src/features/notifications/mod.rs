//! # Feature: Notifications
//!
//! Emergency notification fan-out over pluggable channels. Email is a real
//! authenticated SMTP submission; SMS is simulated on the console. Both sit
//! behind the same `Notifier` seam so the broadcast and reminder paths do not
//! care which channels are wired in.
//!
//! - **Version**: 1.2.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.2.0: Optional YAML contact roster with built-in defaults
//! - 1.1.0: Broadcast returns a delivered/failed tally
//! - 1.0.0: Initial release with email and simulated SMS channels

pub mod email;
pub mod roster;
pub mod service;
pub mod sms;

pub use email::EmailNotifier;
pub use roster::ContactRoster;
pub use service::{BroadcastOutcome, NotificationService};
pub use sms::SmsNotifier;

use async_trait::async_trait;
use thiserror::Error;

pub const VERSION: &str = "1.2.0";

/// Delivery failure at the notifier seam
#[derive(Debug, Error)]
pub enum NotificationError {
    #[error("{channel} recipient is empty")]
    EmptyRecipient { channel: &'static str },
    #[error("invalid email address: {0}")]
    Address(#[from] lettre::address::AddressError),
    #[error("could not assemble email: {0}")]
    Message(#[from] lettre::error::Error),
    #[error("mail submission failed: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),
}

/// Anything able to deliver one message to one recipient.
///
/// Implementations reject an empty recipient with
/// [`NotificationError::EmptyRecipient`] before touching any transport.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Channel name used in logs and opt-in prompts
    fn channel(&self) -> &'static str;

    /// Deliver one message to one recipient
    async fn send(&self, message: &str, recipient: &str) -> Result<(), NotificationError>;
}
