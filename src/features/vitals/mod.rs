//! # Feature: Vitals Triage
//!
//! Patient vitals snapshot and fixed-threshold triage check. Checks run in a
//! fixed order (heart rate, blood pressure, temperature, oxygen) and stop at
//! the first breach; the breach text is what gets broadcast to the emergency
//! contacts.
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.1.0: Include the measured value in the breach text
//! - 1.0.0: Initial release with the four standard readings

use log::{info, warn};
use std::sync::Arc;
use thiserror::Error;

use crate::features::notifications::NotificationService;

pub const VERSION: &str = "1.1.0";

/// Heart rate ceiling in beats per minute
pub const MAX_HEART_RATE: f64 = 100.0;
/// Systolic blood pressure ceiling in mmHg
pub const MAX_BLOOD_PRESSURE: f64 = 140.0;
/// Body temperature ceiling in degrees Celsius
pub const MAX_TEMPERATURE: f64 = 39.0;
/// Blood oxygen saturation floor in percent
pub const MIN_OXYGEN_LEVEL: f64 = 90.0;

/// One snapshot of the four standard readings. Immutable once constructed;
/// lives for a single panic-button press.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vitals {
    pub heart_rate: f64,
    pub blood_pressure: f64,
    pub temperature: f64,
    pub oxygen_level: f64,
}

/// First threshold breach found in a reading
#[derive(Debug, Clone, PartialEq, Error)]
pub enum VitalsAlert {
    #[error("Critical heart rate detected: {0} bpm")]
    HeartRate(f64),
    #[error("Critical blood pressure detected: {0} mmHg")]
    BloodPressure(f64),
    #[error("Critical temperature detected: {0} C")]
    Temperature(f64),
    #[error("Critical oxygen level detected: {0}%")]
    OxygenLevel(f64),
}

impl Vitals {
    pub fn new(heart_rate: f64, blood_pressure: f64, temperature: f64, oxygen_level: f64) -> Self {
        Vitals {
            heart_rate,
            blood_pressure,
            temperature,
            oxygen_level,
        }
    }

    /// Triage check in fixed order. Reports only the first breach; a reading
    /// exactly at a limit is in range.
    pub fn check(&self) -> Result<(), VitalsAlert> {
        if self.heart_rate > MAX_HEART_RATE {
            return Err(VitalsAlert::HeartRate(self.heart_rate));
        }
        if self.blood_pressure > MAX_BLOOD_PRESSURE {
            return Err(VitalsAlert::BloodPressure(self.blood_pressure));
        }
        if self.temperature > MAX_TEMPERATURE {
            return Err(VitalsAlert::Temperature(self.temperature));
        }
        if self.oxygen_level < MIN_OXYGEN_LEVEL {
            return Err(VitalsAlert::OxygenLevel(self.oxygen_level));
        }
        Ok(())
    }
}

/// Ties a vitals reading to the emergency broadcast path
pub struct PanicButton {
    service: Arc<NotificationService>,
}

impl PanicButton {
    pub fn new(service: Arc<NotificationService>) -> Self {
        PanicButton { service }
    }

    /// Run the triage check and, on breach, broadcast the reason to every
    /// emergency contact over every channel. A clean reading sends nothing.
    pub async fn press(&self, vitals: Vitals) {
        match vitals.check() {
            Ok(()) => {
                info!("All vitals within normal range, no alert raised");
            }
            Err(alert) => {
                warn!("Vitals breach: {alert}");
                let outcome = self.service.broadcast(&alert.to_string()).await;
                info!(
                    "Alert broadcast finished: {} delivered, {} failed",
                    outcome.delivered, outcome.failed
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normal_vitals() -> Vitals {
        Vitals::new(72.0, 120.0, 36.6, 98.0)
    }

    #[test]
    fn test_normal_reading_raises_no_alert() {
        assert_eq!(normal_vitals().check(), Ok(()));
    }

    #[test]
    fn test_readings_exactly_at_limits_are_in_range() {
        let vitals = Vitals::new(100.0, 140.0, 39.0, 90.0);
        assert_eq!(vitals.check(), Ok(()));
    }

    #[test]
    fn test_heart_rate_breach() {
        let vitals = Vitals::new(120.0, 120.0, 36.6, 98.0);
        assert_eq!(vitals.check(), Err(VitalsAlert::HeartRate(120.0)));
    }

    #[test]
    fn test_blood_pressure_breach() {
        let vitals = Vitals::new(72.0, 150.0, 36.6, 98.0);
        assert_eq!(vitals.check(), Err(VitalsAlert::BloodPressure(150.0)));
    }

    #[test]
    fn test_temperature_breach() {
        let vitals = Vitals::new(72.0, 120.0, 40.1, 98.0);
        assert_eq!(vitals.check(), Err(VitalsAlert::Temperature(40.1)));
    }

    #[test]
    fn test_oxygen_breach() {
        let vitals = Vitals::new(72.0, 120.0, 36.6, 85.0);
        assert_eq!(vitals.check(), Err(VitalsAlert::OxygenLevel(85.0)));
    }

    #[test]
    fn test_first_breach_wins() {
        // Heart rate and oxygen both out of range; only heart rate reports
        let vitals = Vitals::new(150.0, 120.0, 36.6, 80.0);
        assert_eq!(vitals.check(), Err(VitalsAlert::HeartRate(150.0)));
    }

    #[test]
    fn test_alert_text_names_the_reading() {
        let alert = Vitals::new(187.0, 120.0, 36.6, 98.0).check().unwrap_err();
        let text = alert.to_string();

        assert!(text.contains("heart rate"));
        assert!(text.contains("187"));
    }
}
