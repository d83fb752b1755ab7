//! Extract command implementation.

use super::transcript_source;
use crate::cli::{preflight, Output};
use crate::config::Settings;
use crate::transcript::LanguageOption;
use crate::workflow::Workflow;
use anyhow::Result;
use std::io::{self, BufRead, Write};

/// Run the extract command.
pub async fn run_extract(
    url: &str,
    language: Option<String>,
    output: Option<String>,
    settings: Settings,
) -> Result<()> {
    if let Some(warning) = preflight::credential_warning(&settings) {
        Output::warning(&warning);
    }

    let Some(transcript) = extract_transcript(url, language.as_deref(), &settings).await? else {
        return Ok(());
    };

    match output {
        Some(path) => {
            std::fs::write(&path, &transcript)?;
            Output::success(&format!(
                "Wrote {} lines to {}",
                transcript.lines().count(),
                path
            ));
        }
        None => println!("{}", transcript),
    }

    Ok(())
}

/// Run the full URL, listing, selection, fetch cycle.
///
/// Returns Ok(None) when the video has no usable subtitles; the warning has
/// already been printed. Without a `--language` flag the user picks from a
/// numbered list, and a language that turns out not to be retrievable
/// re-prompts against the same list instead of starting over.
pub(crate) async fn extract_transcript(
    url: &str,
    language: Option<&str>,
    settings: &Settings,
) -> Result<Option<String>> {
    let mut workflow = Workflow::new(transcript_source(settings));

    let spinner = Output::spinner("Listing subtitle languages...");
    let options: Vec<LanguageOption> = match workflow.submit_url(url).await {
        Ok(languages) => {
            let options = languages.to_vec();
            spinner.finish_and_clear();
            options
        }
        Err(e) if e.is_empty_result() => {
            spinner.finish_and_clear();
            Output::warning(&e.to_string());
            return Ok(None);
        }
        Err(e) => {
            spinner.finish_and_clear();
            Output::error(&format!("Failed to list languages: {}", e));
            return Err(e.into());
        }
    };

    let interactive = language.is_none();
    let mut code = match language {
        Some(code) => code.to_string(),
        None => select_language(&options)?,
    };

    loop {
        let spinner = Output::spinner("Extracting transcript...");
        match workflow.fetch_transcript(&code).await {
            Ok(_) => {
                spinner.finish_and_clear();
                break;
            }
            Err(e) if e.is_recoverable() && interactive => {
                // Listed but not retrievable; the list is still valid.
                spinner.finish_and_clear();
                Output::warning(&e.to_string());
                code = select_language(&options)?;
            }
            Err(e) => {
                spinner.finish_and_clear();
                Output::error(&format!("Failed to fetch transcript: {}", e));
                return Err(e.into());
            }
        }
    }

    Ok(workflow.transcript().map(|t| t.to_string()))
}

/// Prompt for a language from the numbered list.
fn select_language(options: &[LanguageOption]) -> Result<String> {
    Output::header("Available subtitle languages");
    for (index, option) in options.iter().enumerate() {
        Output::language_option(index + 1, &option.label());
    }
    println!();

    let stdin = io::stdin();
    loop {
        print!("Select language [1-{} or code]: ", options.len());
        io::stdout().flush()?;

        let mut input = String::new();
        if stdin.lock().read_line(&mut input)? == 0 {
            anyhow::bail!("No language selected");
        }
        let input = input.trim();

        if let Ok(index) = input.parse::<usize>() {
            if index >= 1 && index <= options.len() {
                return Ok(options[index - 1].language_code.clone());
            }
        }

        if let Some(option) = options.iter().find(|o| o.language_code == input) {
            return Ok(option.language_code.clone());
        }

        Output::warning("Not a listed language; try again.");
    }
}
