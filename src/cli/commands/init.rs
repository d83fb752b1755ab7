//! Init command - first-run setup.

use crate::cli::Output;
use crate::config::Settings;
use console::style;
use std::io::{self, Write};

/// Run the init command for first-time setup.
pub fn run_init(settings: &Settings) -> anyhow::Result<()> {
    Output::header("Tekst Setup");
    println!();
    println!("Welcome to Tekst! Let's make sure everything is configured correctly.\n");

    // Step 1: Check API key
    println!("{}", style("Step 1: Checking API configuration").bold().cyan());
    println!();

    if settings.api_key().is_none() {
        Output::warning(&format!(
            "{} environment variable is not set.",
            settings.llm.api_key_env
        ));
        println!();
        println!("  Transcript extraction works without it, but the 'organize' and");
        println!("  'chat' commands need a Gemini API key.");
        println!(
            "  Get one from: {}",
            style("https://aistudio.google.com/apikey").underlined()
        );
        println!();
        println!("  Set it in your shell configuration (~/.bashrc, ~/.zshrc, etc.):");
        println!(
            "  {}",
            style(format!("export {}='...'", settings.llm.api_key_env)).green()
        );
        println!();
    } else {
        Output::success("Gemini API key is configured!");
    }

    println!();

    // Step 2: Create config file
    println!("{}", style("Step 2: Configuration file").bold().cyan());
    println!();

    let config_path = Settings::default_config_path();
    if config_path.exists() {
        Output::info(&format!("Config file exists: {}", config_path.display()));
    } else if prompt_continue("Create default configuration file?")? {
        settings.save_to(&config_path)?;
        Output::success(&format!("Created config file: {}", config_path.display()));
        println!();
        println!("  Edit your config with: {}", style("tekst config edit").green());
    } else {
        Output::info("Skipped config file creation. Using defaults.");
    }

    println!();

    // Summary
    println!("{}", style("Setup Complete!").bold().green());
    println!();
    println!("Next steps:");
    println!(
        "  {} List a video's subtitle languages",
        style("tekst languages <url>").cyan()
    );
    println!(
        "  {} Fetch a transcript",
        style("tekst extract <url>").cyan()
    );
    println!(
        "  {} Chat about a video",
        style("tekst chat <url>").cyan()
    );
    println!();
    println!("For more help: {}", style("tekst --help").cyan());

    Ok(())
}

/// Prompt user for yes/no confirmation.
fn prompt_continue(message: &str) -> io::Result<bool> {
    print!("{} {} ", style("?").cyan(), message);
    print!("{} ", style("[y/N]").dim());
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(input.trim().to_lowercase() == "y" || input.trim().to_lowercase() == "yes")
}
