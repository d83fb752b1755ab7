//! Organize command implementation.

use super::extract::extract_transcript;
use super::gemini_client;
use crate::cli::preflight::{self, Operation};
use crate::cli::Output;
use crate::config::{Prompts, Settings};
use anyhow::Result;

/// Run the organize command.
pub async fn run_organize(
    url: &str,
    language: Option<String>,
    model: Option<String>,
    settings: Settings,
) -> Result<()> {
    // Pre-flight checks
    if let Err(e) = preflight::check(Operation::Organize, &settings) {
        Output::error(&format!("{}", e));
        Output::info("Run 'tekst doctor' for detailed diagnostics.");
        return Err(e.into());
    }

    let Some(transcript) = extract_transcript(url, language.as_deref(), &settings).await? else {
        return Ok(());
    };

    let client = gemini_client(&settings, model)?;
    let prompts = Prompts::from_settings(&settings.prompts);

    let spinner = Output::spinner(&format!("Organizing with {}...", client.model()));

    match client.generate_text(&prompts.render_organize(&transcript)).await {
        Ok(organized) => {
            spinner.finish_and_clear();
            println!("\n{}", organized);
        }
        Err(e) => {
            spinner.finish_and_clear();
            Output::error(&format!("Failed to organize transcript: {}", e));
            return Err(e.into());
        }
    }

    Ok(())
}
