//! Emergency contact roster.
//!
//! Optional YAML file listing the emergency contacts. A missing file is
//! normal and falls back to the built-in ward defaults; a file that exists
//! but does not parse is an error worth surfacing.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// Contacts used when no roster file exists
const DEFAULT_CONTACTS: [&str; 2] = ["doctor@hospital.com", "emergency@hospital.com"];

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ContactRoster {
    pub contacts: Vec<String>,
}

impl ContactRoster {
    /// Load the roster from a YAML file
    pub fn load(path: &str) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read contact roster at {path}"))?;
        let roster: ContactRoster = serde_yaml::from_str(&raw)
            .with_context(|| format!("failed to parse contact roster at {path}"))?;
        Ok(roster)
    }

    /// Built-in ward defaults
    pub fn defaults() -> Self {
        ContactRoster {
            contacts: DEFAULT_CONTACTS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Whether a roster file is present at `path`
    pub fn exists(path: &str) -> bool {
        Path::new(path).exists()
    }
}
