//! Pre-flight checks before commands that need external access.
//!
//! Transcript extraction has no requirements; only the Gemini-backed
//! operations need a credential. A missing key never blocks the
//! transcript-only path.

use crate::config::Settings;
use crate::error::{Result, TekstError};

/// Requirements for different operations.
#[derive(Debug, Clone, Copy)]
pub enum Operation {
    /// Listing languages and fetching transcripts.
    Extract,
    /// Organizing a transcript with Gemini.
    Organize,
    /// Chatting about a transcript with Gemini.
    Chat,
}

/// Run pre-flight checks for the given operation.
pub fn check(operation: Operation, settings: &Settings) -> Result<()> {
    match operation {
        Operation::Extract => {
            // No external requirements.
        }
        Operation::Organize | Operation::Chat => {
            check_api_key(settings)?;
        }
    }
    Ok(())
}

/// Soft warning for the transcript-only path when the credential is absent.
pub fn credential_warning(settings: &Settings) -> Option<String> {
    if settings.api_key().is_none() {
        Some(format!(
            "{} is not set; 'organize' and 'chat' are unavailable until it is.",
            settings.llm.api_key_env
        ))
    } else {
        None
    }
}

/// Check that the Gemini API key is configured.
fn check_api_key(settings: &Settings) -> Result<()> {
    match settings.api_key() {
        Some(_) => Ok(()),
        None => Err(TekstError::Config(format!(
            "{} not set. Get a key from Google AI Studio and set it with: export {}='...'",
            settings.llm.api_key_env, settings.llm.api_key_env
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings_with_env(var: &str) -> Settings {
        let mut settings = Settings::default();
        settings.llm.api_key_env = var.to_string();
        settings
    }

    #[test]
    fn test_extract_needs_no_credential() {
        let settings = settings_with_env("TEKST_TEST_UNSET_KEY");
        assert!(check(Operation::Extract, &settings).is_ok());
        assert!(credential_warning(&settings).is_some());
    }

    #[test]
    fn test_organize_requires_credential() {
        let settings = settings_with_env("TEKST_TEST_UNSET_KEY");
        let err = check(Operation::Organize, &settings).unwrap_err();
        assert!(matches!(err, TekstError::Config(_)));
    }

    #[test]
    fn test_credential_present() {
        std::env::set_var("TEKST_TEST_PRESENT_KEY", "abc123");
        let settings = settings_with_env("TEKST_TEST_PRESENT_KEY");
        assert!(check(Operation::Chat, &settings).is_ok());
        assert!(credential_warning(&settings).is_none());
    }
}
