//! Simulated SMS notifier.
//!
//! There is no SMS gateway; "delivery" is a line on the console naming
//! sender, recipient, and message body.

use async_trait::async_trait;
use log::info;

use super::{NotificationError, Notifier};

pub struct SmsNotifier {
    sender_name: String,
}

impl SmsNotifier {
    pub fn new(sender_name: impl Into<String>) -> Self {
        SmsNotifier {
            sender_name: sender_name.into(),
        }
    }

    /// The exact line a simulated delivery prints
    fn delivery_line(&self, message: &str, recipient: &str) -> String {
        format!(
            "[SMS] From: {}, To: {}, Message: {}",
            self.sender_name, recipient, message
        )
    }
}

#[async_trait]
impl Notifier for SmsNotifier {
    fn channel(&self) -> &'static str {
        "sms"
    }

    async fn send(&self, message: &str, recipient: &str) -> Result<(), NotificationError> {
        if recipient.trim().is_empty() {
            return Err(NotificationError::EmptyRecipient {
                channel: self.channel(),
            });
        }

        println!("{}", self.delivery_line(message, recipient));
        info!("SMS simulated for {recipient}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delivery_line_format() {
        let notifier = SmsNotifier::new("Hospital System");
        let line = notifier.delivery_line("take your medication", "+15551234567");

        assert_eq!(
            line,
            "[SMS] From: Hospital System, To: +15551234567, Message: take your medication"
        );
    }

    #[tokio::test]
    async fn test_empty_recipient_is_rejected() {
        let notifier = SmsNotifier::new("Hospital System");
        let result = notifier.send("hello", "   ").await;

        assert!(matches!(
            result,
            Err(NotificationError::EmptyRecipient { channel: "sms" })
        ));
    }

    #[tokio::test]
    async fn test_send_succeeds_with_recipient() {
        let notifier = SmsNotifier::new("Hospital System");
        assert!(notifier.send("hello", "+15551234567").await.is_ok());
    }
}
