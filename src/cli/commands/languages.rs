//! Languages command implementation.

use super::transcript_source;
use crate::cli::Output;
use crate::config::Settings;
use crate::workflow::Workflow;
use anyhow::Result;

/// Run the languages command.
pub async fn run_languages(url: &str, settings: Settings) -> Result<()> {
    let mut workflow = Workflow::new(transcript_source(&settings));

    let spinner = Output::spinner("Listing subtitle languages...");

    match workflow.submit_url(url).await {
        Ok(languages) => {
            spinner.finish_and_clear();
            Output::header("Available subtitle languages");
            for (index, option) in languages.iter().enumerate() {
                Output::language_option(index + 1, &option.label());
            }
            println!();
        }
        Err(e) if e.is_empty_result() => {
            // The video exists but has nothing to offer; not a fault.
            spinner.finish_and_clear();
            Output::warning(&e.to_string());
        }
        Err(e) => {
            spinner.finish_and_clear();
            Output::error(&format!("Failed to list languages: {}", e));
            return Err(e.into());
        }
    }

    Ok(())
}
