//! Configuration settings for Tekst.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct Settings {
    pub general: GeneralSettings,
    pub youtube: YoutubeSettings,
    pub llm: LlmSettings,
    pub prompts: PromptSettings,
}


/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
        }
    }
}

/// YouTube transcript source settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct YoutubeSettings {
    /// Timeout for transcript requests, in seconds.
    pub request_timeout_seconds: u64,
    /// Innertube client version override; empty uses the built-in default.
    pub client_version: String,
}

impl Default for YoutubeSettings {
    fn default() -> Self {
        Self {
            request_timeout_seconds: 30,
            client_version: String::new(),
        }
    }
}

/// Gemini settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmSettings {
    /// Model used for organization and chat.
    pub model: String,
    /// Environment variable holding the API key.
    pub api_key_env: String,
    /// Timeout for Gemini requests, in seconds.
    pub request_timeout_seconds: u64,
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            model: "gemini-2.0-flash-lite".to_string(),
            api_key_env: "GEMINI_API_KEY".to_string(),
            request_timeout_seconds: 120,
        }
    }
}

/// Prompt template overrides.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct PromptSettings {
    /// Override for the organize prompt ({{transcript}} placeholder).
    pub organize: Option<String>,
    /// Override for the chat context preamble ({{transcript}} placeholder).
    pub chat: Option<String>,
}


impl Settings {
    /// Load settings from the default configuration file.
    pub fn load() -> crate::error::Result<Self> {
        Self::load_from(None)
    }

    /// Load settings from a specific path, or default location if None.
    pub fn load_from(path: Option<&PathBuf>) -> crate::error::Result<Self> {
        let config_path = match path {
            Some(p) => p.clone(),
            None => Self::default_config_path(),
        };

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let settings: Settings = toml::from_str(&content)?;
            Ok(settings)
        } else {
            Ok(Settings::default())
        }
    }

    /// Save settings to the default configuration file.
    pub fn save(&self) -> crate::error::Result<()> {
        self.save_to(&Self::default_config_path())
    }

    /// Save settings to a specific path.
    pub fn save_to(&self, path: &PathBuf) -> crate::error::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| crate::error::TekstError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get the default configuration file path.
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("tekst")
            .join("config.toml")
    }

    /// Read the Gemini API key from the configured environment variable.
    ///
    /// Returns None when unset or blank; callers decide whether that is a
    /// warning (transcript-only path) or an error (organize/chat).
    pub fn api_key(&self) -> Option<String> {
        std::env::var(&self.llm.api_key_env)
            .ok()
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
    }

    /// Timeout for transcript requests.
    pub fn youtube_timeout(&self) -> Duration {
        Duration::from_secs(self.youtube.request_timeout_seconds)
    }

    /// Timeout for Gemini requests.
    pub fn llm_timeout(&self) -> Duration {
        Duration::from_secs(self.llm.request_timeout_seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.general.log_level, "warn");
        assert_eq!(settings.llm.model, "gemini-2.0-flash-lite");
        assert_eq!(settings.llm.api_key_env, "GEMINI_API_KEY");
        assert_eq!(settings.youtube.request_timeout_seconds, 30);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let settings: Settings = toml::from_str(
            r#"
            [llm]
            model = "gemini-2.5-pro"
            "#,
        )
        .unwrap();

        assert_eq!(settings.llm.model, "gemini-2.5-pro");
        assert_eq!(settings.llm.api_key_env, "GEMINI_API_KEY");
        assert_eq!(settings.general.log_level, "warn");
    }

    #[test]
    fn test_roundtrip() {
        let mut settings = Settings::default();
        settings.llm.model = "gemini-2.5-flash".to_string();
        settings.youtube.request_timeout_seconds = 10;

        let serialized = toml::to_string_pretty(&settings).unwrap();
        let parsed: Settings = toml::from_str(&serialized).unwrap();

        assert_eq!(parsed.llm.model, "gemini-2.5-flash");
        assert_eq!(parsed.youtube.request_timeout_seconds, 10);
    }
}
