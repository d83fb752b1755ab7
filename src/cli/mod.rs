//! CLI module for Tekst.

pub mod commands;
mod output;
pub mod preflight;

pub use output::Output;

use clap::{Parser, Subcommand};

/// Tekst - YouTube Transcript Extraction
///
/// A CLI tool for fetching YouTube subtitle transcripts and exploring them
/// with Gemini. The name "Tekst" comes from the Norwegian word for "text."
#[derive(Parser, Debug)]
#[command(name = "tekst")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the configuration file and check the setup
    Init,

    /// Check configuration and API access
    Doctor,

    /// List the subtitle languages available for a video
    Languages {
        /// YouTube URL (watch page, youtu.be link, or shorts)
        url: String,
    },

    /// Fetch a video's transcript as plain text
    Extract {
        /// YouTube URL (watch page, youtu.be link, or shorts)
        url: String,

        /// Subtitle language code; prompts interactively when omitted
        #[arg(short, long)]
        language: Option<String>,

        /// Write the transcript to a file instead of stdout
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Fetch a transcript and organize it into structured notes with Gemini
    Organize {
        /// YouTube URL (watch page, youtu.be link, or shorts)
        url: String,

        /// Subtitle language code; prompts interactively when omitted
        #[arg(short, long)]
        language: Option<String>,

        /// Gemini model to use
        #[arg(short, long)]
        model: Option<String>,
    },

    /// Fetch a transcript and chat about the video with Gemini
    Chat {
        /// YouTube URL (watch page, youtu.be link, or shorts)
        url: String,

        /// Subtitle language code; prompts interactively when omitted
        #[arg(short, long)]
        language: Option<String>,

        /// Gemini model to use
        #[arg(short, long)]
        model: Option<String>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key (e.g., "llm.model")
        key: String,
        /// Configuration value
        value: String,
    },

    /// Open configuration file in editor
    Edit,

    /// Show configuration file path
    Path,
}
