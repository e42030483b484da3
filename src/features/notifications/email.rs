//! SMTP-backed email notifier.
//!
//! The one real outbound path in the program: an authenticated STARTTLS
//! submission to the configured relay. Failures surface as
//! [`NotificationError`] and are downgraded to log lines by the callers.

use async_trait::async_trait;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use log::info;

use super::{NotificationError, Notifier};
use crate::core::Config;

pub struct EmailNotifier {
    sender_name: String,
    from: Mailbox,
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl EmailNotifier {
    /// Build the relay transport from configuration. The connection is lazy;
    /// nothing is dialed until the first send.
    pub fn new(config: &Config) -> Result<Self, NotificationError> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)?
            .port(config.smtp_port)
            .credentials(Credentials::new(
                config.smtp_username.clone(),
                config.smtp_password.clone(),
            ))
            .build();

        let from = Mailbox::new(
            Some(config.sender_name.clone()),
            config.smtp_username.parse()?,
        );

        Ok(EmailNotifier {
            sender_name: config.sender_name.clone(),
            from,
            transport,
        })
    }

    /// Subject line carried by every notification email
    fn subject(&self) -> String {
        format!("Notification from {}", self.sender_name)
    }
}

#[async_trait]
impl Notifier for EmailNotifier {
    fn channel(&self) -> &'static str {
        "email"
    }

    async fn send(&self, message: &str, recipient: &str) -> Result<(), NotificationError> {
        if recipient.trim().is_empty() {
            return Err(NotificationError::EmptyRecipient {
                channel: self.channel(),
            });
        }

        let email = Message::builder()
            .from(self.from.clone())
            .to(recipient.parse::<Mailbox>()?)
            .subject(self.subject())
            .body(message.to_string())?;

        self.transport.send(email).await?;
        info!("Email sent to {recipient}");
        Ok(())
    }
}
