use anyhow::{Context, Result};
use dotenvy::dotenv;
use log::{error, info, warn};
use std::sync::Arc;

use wardlink::core::console::{confirm, prompt_line, prompt_reading};
use wardlink::core::Config;
use wardlink::features::chat::{ChatClient, ChatServer};
use wardlink::features::notifications::{
    ContactRoster, EmailNotifier, NotificationService, Notifier, SmsNotifier,
};
use wardlink::features::reminders::ReminderService;
use wardlink::features::vitals::{PanicButton, Vitals};
use wardlink::features::{get_app_version, get_features};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    let config = Config::from_env()?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    info!("🏥 Starting Wardlink v{}...", get_app_version());
    for feature in get_features() {
        info!("   - {} ({})", feature.name, feature.version);
    }

    // Notification channels: one real email path, one simulated SMS path
    let email: Arc<dyn Notifier> =
        Arc::new(EmailNotifier::new(&config).context("invalid mail configuration")?);
    let sms: Arc<dyn Notifier> = Arc::new(SmsNotifier::new(&config.sender_name));

    // Emergency contacts: roster file if present, ward defaults otherwise
    let roster = match ContactRoster::load(&config.contacts_path) {
        Ok(roster) => {
            info!(
                "📇 Loaded {} contacts from {}",
                roster.contacts.len(),
                config.contacts_path
            );
            roster
        }
        Err(e) => {
            if ContactRoster::exists(&config.contacts_path) {
                error!("❌ Failed to load roster from {}: {e}", config.contacts_path);
                warn!("Falling back to built-in ward contacts");
            } else {
                info!(
                    "📇 No roster at {} - using built-in ward contacts",
                    config.contacts_path
                );
            }
            ContactRoster::defaults()
        }
    };

    let mut service = NotificationService::new();
    service.add_notifier(email.clone());
    service.add_notifier(sms.clone());
    for contact in &roster.contacts {
        service.add_contact(contact.clone());
    }
    let service = Arc::new(service);

    info!(
        "📟 Emergency broadcast ready: {} contacts over 2 channels",
        service.contacts().len()
    );

    run_vitals_intake(service.clone()).await?;
    run_chat_simulation()?;
    run_reminder_loop(email, sms).await?;

    info!("Session complete. Goodbye.");
    Ok(())
}

/// Prompt for the four readings and press the panic button.
async fn run_vitals_intake(service: Arc<NotificationService>) -> Result<()> {
    println!("Enter patient vitals:");
    let heart_rate = prompt_reading("Heart rate (bpm)")?;
    let blood_pressure = prompt_reading("Blood pressure (systolic, mmHg)")?;
    let temperature = prompt_reading("Temperature (C)")?;
    let oxygen_level = prompt_reading("Oxygen level (%)")?;

    let panic_button = PanicButton::new(service);
    panic_button
        .press(Vitals::new(
            heart_rate,
            blood_pressure,
            temperature,
            oxygen_level,
        ))
        .await;

    Ok(())
}

/// Simulate a short doctor/patient exchange and a video call.
fn run_chat_simulation() -> Result<()> {
    let server = Arc::new(ChatServer::new());
    let doctor = ChatClient::new("Doctor", server.clone());
    let patient = ChatClient::new("Patient", server);

    let doctor_msg = prompt_line("Doctor, enter your message to Patient")?;
    doctor.send_chat(&doctor_msg, patient.name());
    patient.receive_chat(&doctor_msg, doctor.name());

    let patient_msg = prompt_line("Patient, enter your reply to Doctor")?;
    patient.send_chat(&patient_msg, doctor.name());
    doctor.receive_chat(&patient_msg, patient.name());

    patient.start_video_call();
    Ok(())
}

/// Per-session channel opt-in, then send reminders until the operator
/// declines to continue. The loop body always runs at least once.
async fn run_reminder_loop(email: Arc<dyn Notifier>, sms: Arc<dyn Notifier>) -> Result<()> {
    let mut reminders = ReminderService::new();

    if confirm("Would you like to send email reminders?")? {
        reminders.add_notifier(email);
    }
    if confirm("Would you like to send SMS reminders?")? {
        reminders.add_notifier(sms);
    }

    if reminders.channel_count() == 0 {
        info!("No reminder channels enabled for this session");
    }

    loop {
        let message = prompt_line("Enter the reminder message")?;
        let recipient = prompt_line("Enter the recipient's contact (email/phone)")?;

        let delivered = reminders.send_reminder(&message, &recipient).await;
        info!(
            "Reminder delivered over {delivered} of {} channel(s)",
            reminders.channel_count()
        );

        if !confirm("Would you like to send another reminder?")? {
            break;
        }
    }

    Ok(())
}
