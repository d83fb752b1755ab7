//! Doctor command - verify configuration and API access.

use crate::cli::Output;
use crate::config::Settings;
use console::style;

/// Check result for a single item.
#[derive(Debug)]
pub struct CheckResult {
    pub name: String,
    pub status: CheckStatus,
    pub message: String,
    pub hint: Option<String>,
}

#[derive(Debug, PartialEq)]
pub enum CheckStatus {
    Ok,
    Warning,
    Error,
}

impl CheckResult {
    fn ok(name: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            status: CheckStatus::Ok,
            message: message.to_string(),
            hint: None,
        }
    }

    fn warning(name: &str, message: &str, hint: &str) -> Self {
        Self {
            name: name.to_string(),
            status: CheckStatus::Warning,
            message: message.to_string(),
            hint: Some(hint.to_string()),
        }
    }

    fn error(name: &str, message: &str, hint: &str) -> Self {
        Self {
            name: name.to_string(),
            status: CheckStatus::Error,
            message: message.to_string(),
            hint: Some(hint.to_string()),
        }
    }

    fn print(&self) {
        let icon = match self.status {
            CheckStatus::Ok => style("✓").green(),
            CheckStatus::Warning => style("!").yellow(),
            CheckStatus::Error => style("✗").red(),
        };

        println!("  {} {} - {}", icon, style(&self.name).bold(), self.message);

        if let Some(hint) = &self.hint {
            println!("    {} {}", style("→").dim(), style(hint).dim());
        }
    }
}

/// Run all diagnostic checks.
pub fn run_doctor(settings: &Settings) -> anyhow::Result<()> {
    Output::header("Tekst Doctor");
    println!();
    println!("Checking configuration...\n");

    let mut checks = Vec::new();

    println!("{}", style("Configuration").bold());
    let config_check = check_config_file();
    config_check.print();
    checks.push(config_check);

    let model_check = check_model(settings);
    model_check.print();
    checks.push(model_check);

    println!();

    println!("{}", style("API Configuration").bold());
    let api_check = check_api_key(settings);
    api_check.print();
    checks.push(api_check);

    println!();

    // Summary
    let errors = checks.iter().filter(|c| c.status == CheckStatus::Error).count();
    let warnings = checks.iter().filter(|c| c.status == CheckStatus::Warning).count();

    if errors > 0 {
        Output::error(&format!(
            "{} error(s) found. Please fix them before using Tekst.",
            errors
        ));
        std::process::exit(1);
    } else if warnings > 0 {
        Output::warning(&format!("All checks passed with {} warning(s).", warnings));
    } else {
        Output::success("All checks passed! Tekst is ready to use.");
    }

    Ok(())
}

/// Check whether the Gemini API key is configured.
///
/// Absence is a warning, not an error: transcript extraction works without
/// it, only organize and chat are disabled.
fn check_api_key(settings: &Settings) -> CheckResult {
    let env = &settings.llm.api_key_env;
    match settings.api_key() {
        Some(key) if key.len() > 12 => {
            let masked = format!("{}...{}", &key[..4], &key[key.len() - 4..]);
            CheckResult::ok(env, &format!("configured ({})", masked))
        }
        Some(_) => CheckResult::warning(
            env,
            "set but looks unusually short",
            "Expected a Google AI Studio API key",
        ),
        None => CheckResult::warning(
            env,
            "not set",
            "Transcript extraction works without it; 'organize' and 'chat' are disabled. Set with: export GEMINI_API_KEY='...'",
        ),
    }
}

/// Check the configured Gemini model.
fn check_model(settings: &Settings) -> CheckResult {
    if settings.llm.model.is_empty() {
        CheckResult::warning(
            "Model",
            "not configured",
            "Set llm.model in the config file, e.g. gemini-2.0-flash-lite",
        )
    } else {
        CheckResult::ok("Model", &settings.llm.model)
    }
}

/// Check the configuration file.
///
/// Missing is fine (defaults apply); present but unparseable is an error,
/// since every command would fail loading it.
fn check_config_file() -> CheckResult {
    let config_path = Settings::default_config_path();
    if !config_path.exists() {
        return CheckResult::warning(
            "Config file",
            "not found (using defaults)",
            "Create one with: tekst init",
        );
    }

    match Settings::load_from(Some(&config_path)) {
        Ok(_) => CheckResult::ok("Config file", &format!("{}", config_path.display())),
        Err(e) => CheckResult::error(
            "Config file",
            &format!("failed to parse: {}", e),
            "Fix it with: tekst config edit",
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_is_a_warning_not_an_error() {
        let mut settings = Settings::default();
        settings.llm.api_key_env = "TEKST_DOCTOR_TEST_UNSET".to_string();

        let check = check_api_key(&settings);
        assert_eq!(check.status, CheckStatus::Warning);
    }

    #[test]
    fn test_configured_key_is_masked() {
        std::env::set_var("TEKST_DOCTOR_TEST_KEY", "AIzaSyExampleExample123");
        let mut settings = Settings::default();
        settings.llm.api_key_env = "TEKST_DOCTOR_TEST_KEY".to_string();

        let check = check_api_key(&settings);
        assert_eq!(check.status, CheckStatus::Ok);
        assert!(!check.message.contains("AIzaSyExampleExample123"));
    }

    #[test]
    fn test_model_check() {
        let settings = Settings::default();
        assert_eq!(check_model(&settings).status, CheckStatus::Ok);

        let mut settings = Settings::default();
        settings.llm.model = String::new();
        assert_eq!(check_model(&settings).status, CheckStatus::Warning);
    }
}
