//! # Features Module
//!
//! Every feature of the ward console lives in its own submodule and carries
//! its own version, surfaced in the startup banner.

pub mod chat;
pub mod notifications;
pub mod reminders;
pub mod vitals;

// Re-export the items callers actually use
pub use chat::{ChatClient, ChatMessage, ChatServer};
pub use notifications::{
    BroadcastOutcome, ContactRoster, EmailNotifier, NotificationError, NotificationService,
    Notifier, SmsNotifier,
};
pub use reminders::ReminderService;
pub use vitals::{PanicButton, Vitals, VitalsAlert};

/// Static name/version record for one feature
#[derive(Debug, Clone, Copy)]
pub struct FeatureInfo {
    pub name: &'static str,
    pub version: &'static str,
}

/// Application version from Cargo metadata
pub fn get_app_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// All registered features, in banner order
pub fn get_features() -> Vec<FeatureInfo> {
    vec![
        FeatureInfo {
            name: "vitals",
            version: vitals::VERSION,
        },
        FeatureInfo {
            name: "notifications",
            version: notifications::VERSION,
        },
        FeatureInfo {
            name: "chat",
            version: chat::VERSION,
        },
        FeatureInfo {
            name: "reminders",
            version: reminders::VERSION,
        },
    ]
}
