//! Console prompt helpers for the interactive session.
//!
//! Thin wrappers over dialoguer so the session code reads as a script.
//! Numeric prompts re-prompt on unparsable input instead of crashing.

use anyhow::Result;
use dialoguer::Input;

/// Prompt for one numeric vitals reading.
pub fn prompt_reading(label: &str) -> Result<f64> {
    let value: f64 = Input::new().with_prompt(label).interact_text()?;
    Ok(value)
}

/// Prompt for a free-form line. Empty input is allowed; an empty recipient
/// is rejected later at the notifier seam, not at the prompt.
pub fn prompt_line(label: &str) -> Result<String> {
    let value: String = Input::new()
        .with_prompt(label)
        .allow_empty(true)
        .interact_text()?;
    Ok(value)
}

/// Ask a yes/no question. Only an explicit "yes" consents.
pub fn confirm(label: &str) -> Result<bool> {
    let answer: String = Input::new()
        .with_prompt(format!("{label} (yes/no)"))
        .allow_empty(true)
        .interact_text()?;
    Ok(is_affirmative(&answer))
}

/// Consent check used by channel opt-ins and the reminder loop: trimmed,
/// case-insensitive "yes". Anything else declines.
pub fn is_affirmative(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_affirmative_accepts_yes_variants() {
        assert!(is_affirmative("yes"));
        assert!(is_affirmative("YES"));
        assert!(is_affirmative("Yes"));
        assert!(is_affirmative("  yes  "));
    }

    #[test]
    fn test_affirmative_rejects_everything_else() {
        assert!(!is_affirmative("no"));
        assert!(!is_affirmative("y"));
        assert!(!is_affirmative("yeah"));
        assert!(!is_affirmative("yes please"));
        assert!(!is_affirmative(""));
        assert!(!is_affirmative("   "));
    }
}
