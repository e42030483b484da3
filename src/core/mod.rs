//! # Core Module
//!
//! Configuration and console plumbing shared by every feature of the ward
//! console.
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.1.0: Add console module with prompt and consent helpers
//! - 1.0.0: Initial creation with config module

pub mod config;
pub mod console;

// Re-export commonly used items
pub use config::Config;
pub use console::{confirm, is_affirmative, prompt_line, prompt_reading};
