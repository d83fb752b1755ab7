//! Config command implementation.

use crate::cli::{ConfigAction, Output};
use crate::config::Settings;
use anyhow::Result;

/// Run the config command.
pub fn run_config(action: &ConfigAction, mut settings: Settings) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let toml_str = toml::to_string_pretty(&settings)
                .map_err(|e| anyhow::anyhow!("Failed to serialize config: {}", e))?;
            println!("{}", toml_str);
        }

        ConfigAction::Set { key, value } => {
            apply_set(&mut settings, key, value)?;
            settings.save()?;
            Output::success(&format!("Set {} = {}", key, value));
            Output::info(&format!(
                "Saved to {}",
                Settings::default_config_path().display()
            ));
        }

        ConfigAction::Edit => {
            let config_path = Settings::default_config_path();

            // Create default config if it doesn't exist
            if !config_path.exists() {
                settings.save()?;
                Output::info(&format!("Created default config at {:?}", config_path));
            }

            // Try to open in editor
            let editor = std::env::var("EDITOR").unwrap_or_else(|_| "vim".to_string());

            Output::info(&format!("Opening config in {}...", editor));

            let status = std::process::Command::new(&editor)
                .arg(&config_path)
                .status();

            match status {
                Ok(s) if s.success() => match Settings::load_from(Some(&config_path)) {
                    Ok(_) => Output::success("Config saved."),
                    Err(e) => {
                        Output::warning(&format!("Config saved but does not parse: {}", e));
                        Output::info("Run 'tekst doctor' to re-check it.");
                    }
                },
                Ok(_) => {
                    Output::warning("Editor exited with non-zero status.");
                }
                Err(e) => {
                    Output::error(&format!("Failed to open editor: {}", e));
                    Output::info(&format!("Config file is at: {:?}", config_path));
                }
            }
        }

        ConfigAction::Path => {
            let config_path = Settings::default_config_path();
            println!("{}", config_path.display());
        }
    }

    Ok(())
}

/// Apply a dotted-key assignment to the settings.
fn apply_set(settings: &mut Settings, key: &str, value: &str) -> Result<()> {
    match key {
        "general.log_level" => settings.general.log_level = value.to_string(),
        "youtube.request_timeout_seconds" => {
            settings.youtube.request_timeout_seconds = parse_seconds(key, value)?
        }
        "youtube.client_version" => settings.youtube.client_version = value.to_string(),
        "llm.model" => settings.llm.model = value.to_string(),
        "llm.api_key_env" => settings.llm.api_key_env = value.to_string(),
        "llm.request_timeout_seconds" => {
            settings.llm.request_timeout_seconds = parse_seconds(key, value)?
        }
        "prompts.organize" => settings.prompts.organize = Some(value.to_string()),
        "prompts.chat" => settings.prompts.chat = Some(value.to_string()),
        _ => anyhow::bail!(
            "Unknown configuration key: {} (see 'tekst config show' for available keys)",
            key
        ),
    }
    Ok(())
}

fn parse_seconds(key: &str, value: &str) -> Result<u64> {
    value
        .parse()
        .map_err(|_| anyhow::anyhow!("{} expects a number of seconds, got '{}'", key, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_model() {
        let mut settings = Settings::default();
        apply_set(&mut settings, "llm.model", "gemini-2.5-pro").unwrap();
        assert_eq!(settings.llm.model, "gemini-2.5-pro");
    }

    #[test]
    fn test_set_timeout_parses_seconds() {
        let mut settings = Settings::default();
        apply_set(&mut settings, "youtube.request_timeout_seconds", "10").unwrap();
        assert_eq!(settings.youtube.request_timeout_seconds, 10);

        let err = apply_set(&mut settings, "youtube.request_timeout_seconds", "soon").unwrap_err();
        assert!(err.to_string().contains("number of seconds"));
    }

    #[test]
    fn test_set_prompt_override() {
        let mut settings = Settings::default();
        apply_set(&mut settings, "prompts.chat", "Answer tersely. {{transcript}}").unwrap();
        assert_eq!(
            settings.prompts.chat.as_deref(),
            Some("Answer tersely. {{transcript}}")
        );
    }

    #[test]
    fn test_set_unknown_key_rejected() {
        let mut settings = Settings::default();
        let err = apply_set(&mut settings, "llm.temperature", "0.7").unwrap_err();
        assert!(err.to_string().contains("Unknown configuration key"));
    }
}
