//! Environment-backed configuration
//!
//! All settings are resolved once at startup from environment variables (a
//! local `.env` file is honored via dotenvy in the binary). Mail credentials
//! come only from the environment, never from source.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use anyhow::{Context, Result};
use std::env;

/// Default SMTP relay when `SMTP_HOST` is unset
const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";
/// Default submission port (STARTTLS)
const DEFAULT_SMTP_PORT: u16 = 587;
/// Default display name used in notification subjects
const DEFAULT_SENDER_NAME: &str = "Hospital System";
/// Default path of the optional contact roster file
const DEFAULT_CONTACTS_PATH: &str = "contacts.yaml";

/// Runtime configuration for the ward console
#[derive(Debug, Clone)]
pub struct Config {
    /// SMTP relay host for the email channel
    pub smtp_host: String,
    /// SMTP submission port
    pub smtp_port: u16,
    /// Mail account the alerts are sent from
    pub smtp_username: String,
    /// App password for the mail account
    pub smtp_password: String,
    /// Display name shown as the notification sender
    pub sender_name: String,
    /// Path of the optional YAML contact roster
    pub contacts_path: String,
    /// Default log filter for env_logger
    pub log_level: String,
}

impl Config {
    /// Resolve configuration from the environment.
    ///
    /// `SMTP_USERNAME` and `SMTP_PASSWORD` are required; everything else has
    /// a working default.
    pub fn from_env() -> Result<Self> {
        let smtp_username = env::var("SMTP_USERNAME")
            .context("SMTP_USERNAME must be set (mail account used for alert email)")?;
        let smtp_password = env::var("SMTP_PASSWORD")
            .context("SMTP_PASSWORD must be set (app password for the mail account)")?;

        let smtp_host = env::var("SMTP_HOST").unwrap_or_else(|_| DEFAULT_SMTP_HOST.to_string());
        let smtp_port = match env::var("SMTP_PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("SMTP_PORT is not a valid port number: {raw}"))?,
            Err(_) => DEFAULT_SMTP_PORT,
        };

        let sender_name =
            env::var("SENDER_NAME").unwrap_or_else(|_| DEFAULT_SENDER_NAME.to_string());
        let contacts_path =
            env::var("CONTACTS_PATH").unwrap_or_else(|_| DEFAULT_CONTACTS_PATH.to_string());
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Config {
            smtp_host,
            smtp_port,
            smtp_username,
            smtp_password,
            sender_name,
            contacts_path,
            log_level,
        })
    }
}
