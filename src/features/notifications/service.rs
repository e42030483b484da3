//! Notification fan-out service.
//!
//! Broadcasts one message to every (contact, notifier) pair in contact-major
//! order. A failed delivery is logged and skipped; the sweep always finishes.
//! No confirmation, no retry, no deduplication.

use log::warn;
use std::sync::Arc;

use super::Notifier;

/// Tally of one broadcast sweep
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BroadcastOutcome {
    pub delivered: usize,
    pub failed: usize,
}

/// Ordered contacts and channels for emergency broadcasts. Both lists are
/// append-only.
#[derive(Default)]
pub struct NotificationService {
    notifiers: Vec<Arc<dyn Notifier>>,
    contacts: Vec<String>,
}

impl NotificationService {
    pub fn new() -> Self {
        NotificationService::default()
    }

    pub fn add_notifier(&mut self, notifier: Arc<dyn Notifier>) {
        self.notifiers.push(notifier);
    }

    pub fn add_contact(&mut self, contact: impl Into<String>) {
        self.contacts.push(contact.into());
    }

    pub fn contacts(&self) -> &[String] {
        &self.contacts
    }

    /// Send `message` to every contact over every channel, contact-major.
    /// Failures are logged and do not stop the sweep.
    pub async fn broadcast(&self, message: &str) -> BroadcastOutcome {
        let mut outcome = BroadcastOutcome::default();

        for recipient in &self.contacts {
            for notifier in &self.notifiers {
                match notifier.send(message, recipient).await {
                    Ok(()) => outcome.delivered += 1,
                    Err(e) => {
                        warn!("{} delivery to {recipient} failed: {e}", notifier.channel());
                        outcome.failed += 1;
                    }
                }
            }
        }

        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::notifications::NotificationError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Records every delivery into a log shared across notifiers so tests
    /// can assert the global sweep order.
    struct RecordingNotifier {
        name: &'static str,
        fail: bool,
        deliveries: Arc<Mutex<Vec<(String, String)>>>,
    }

    #[async_trait]
    impl Notifier for RecordingNotifier {
        fn channel(&self) -> &'static str {
            self.name
        }

        async fn send(&self, _message: &str, recipient: &str) -> Result<(), NotificationError> {
            self.deliveries
                .lock()
                .unwrap()
                .push((self.name.to_string(), recipient.to_string()));
            if self.fail {
                return Err(NotificationError::EmptyRecipient { channel: self.name });
            }
            Ok(())
        }
    }

    fn recording_service(
        channels: &[(&'static str, bool)],
        contacts: &[&str],
    ) -> (NotificationService, Arc<Mutex<Vec<(String, String)>>>) {
        let deliveries = Arc::new(Mutex::new(Vec::new()));
        let mut service = NotificationService::new();
        for &(name, fail) in channels {
            service.add_notifier(Arc::new(RecordingNotifier {
                name,
                fail,
                deliveries: deliveries.clone(),
            }));
        }
        for contact in contacts {
            service.add_contact(*contact);
        }
        (service, deliveries)
    }

    #[tokio::test]
    async fn test_broadcast_is_contact_major() {
        let (service, deliveries) = recording_service(
            &[("email", false), ("sms", false)],
            &["doctor@hospital.com", "emergency@hospital.com"],
        );

        let outcome = service.broadcast("alert").await;

        assert_eq!(outcome.delivered, 4);
        assert_eq!(outcome.failed, 0);
        assert_eq!(
            *deliveries.lock().unwrap(),
            vec![
                ("email".to_string(), "doctor@hospital.com".to_string()),
                ("sms".to_string(), "doctor@hospital.com".to_string()),
                ("email".to_string(), "emergency@hospital.com".to_string()),
                ("sms".to_string(), "emergency@hospital.com".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_failure_does_not_stop_the_sweep() {
        let (service, deliveries) = recording_service(
            &[("email", true), ("sms", false)],
            &["doctor@hospital.com", "emergency@hospital.com"],
        );

        let outcome = service.broadcast("alert").await;

        assert_eq!(outcome.delivered, 2);
        assert_eq!(outcome.failed, 2);
        // All four pairs were still attempted
        assert_eq!(deliveries.lock().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_broadcast_with_no_contacts_sends_nothing() {
        let (service, deliveries) = recording_service(&[("email", false)], &[]);

        let outcome = service.broadcast("alert").await;

        assert_eq!(outcome, BroadcastOutcome::default());
        assert!(deliveries.lock().unwrap().is_empty());
    }

    #[test]
    fn test_contacts_are_append_only_in_order() {
        let mut service = NotificationService::new();
        service.add_contact("doctor@hospital.com");
        service.add_contact("emergency@hospital.com");

        assert_eq!(
            service.contacts(),
            ["doctor@hospital.com", "emergency@hospital.com"]
        );
    }
}
