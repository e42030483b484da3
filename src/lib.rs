// Core layer - configuration and console plumbing
pub mod core;

// Features layer - all feature modules
pub mod features;

// Re-export core config for convenience
pub use core::Config;

// Re-export feature items for convenience
pub use features::{
    // Chat
    ChatClient, ChatServer,
    // Notifications
    ContactRoster, EmailNotifier, NotificationError, NotificationService, Notifier, SmsNotifier,
    // Reminders
    ReminderService,
    // Vitals
    PanicButton, Vitals, VitalsAlert,
};
