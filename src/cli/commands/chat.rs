//! Interactive chat command.

use super::extract::extract_transcript;
use super::gemini_client;
use crate::cli::preflight::{self, Operation};
use crate::cli::Output;
use crate::config::{Prompts, Settings};
use crate::llm::ChatSession;
use anyhow::Result;
use console::style;
use std::io::{self, BufRead, Write};

/// Run the interactive chat command.
pub async fn run_chat(
    url: &str,
    language: Option<String>,
    model: Option<String>,
    settings: Settings,
) -> Result<()> {
    // Pre-flight checks
    if let Err(e) = preflight::check(Operation::Chat, &settings) {
        Output::error(&format!("{}", e));
        Output::info("Run 'tekst doctor' for detailed diagnostics.");
        return Err(e.into());
    }

    let Some(transcript) = extract_transcript(url, language.as_deref(), &settings).await? else {
        return Ok(());
    };

    let client = gemini_client(&settings, model)?;
    let prompts = Prompts::from_settings(&settings.prompts);
    let mut session = ChatSession::new(client, prompts.render_chat_context(&transcript));

    println!("\n{}", style("Tekst Chat").bold().cyan());
    println!(
        "{}",
        style("Ask about the video, or 'exit' to quit. Use 'clear' to reset the conversation.")
            .dim()
    );
    Output::kv(
        "Transcript",
        &format!(
            "{} lines, {} characters",
            transcript.lines().count(),
            transcript.chars().count()
        ),
    );
    println!();

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("{} ", style("You:").green().bold());
        stdout.flush()?;

        let mut input = String::new();
        if stdin.lock().read_line(&mut input)? == 0 {
            break;
        }

        let input = input.trim();

        if input.is_empty() {
            continue;
        }

        if input.eq_ignore_ascii_case("exit") || input.eq_ignore_ascii_case("quit") {
            Output::info("Goodbye!");
            break;
        }

        if input.eq_ignore_ascii_case("clear") {
            session.clear();
            Output::info("Conversation history cleared.");
            continue;
        }

        match session.send(input).await {
            Ok(response) => {
                println!("\n{} {}\n", style("Tekst:").cyan().bold(), response);
            }
            Err(e) => {
                Output::error(&format!("Error: {}", e));
            }
        }
    }

    Ok(())
}
