//! Chordshell CLI — Command-line shell around the ChordPro toolchain.
//!
//! Usage:
//!   chordshell export <FILE>     Export a song to PDF
//!   chordshell new <FILE>        Create a song from the template
//!   chordshell sample [FILE]     Emit the bundled example song
//!   chordshell info <FILE>       Show song and settings information
//!   chordshell settings ...      Show or change the stored settings
//!   chordshell check             Check that the chordpro tool is usable
//!   chordshell docs              Print ChordPro documentation links

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "chordshell",
    about = "Chord sheet editing shell for the ChordPro toolchain",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Export a song to PDF with the external chordpro tool
    Export {
        /// Path to the ChordPro source file
        file: PathBuf,

        /// Output PDF path (defaults to the song file name with .pdf)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Show the tool's message log after the run
        #[arg(long)]
        log: bool,

        /// Run the song through an extra config file
        #[arg(long, value_name = "FILE")]
        task_config: Option<PathBuf>,
    },

    /// Create a new song from the configured template
    New {
        /// Path for the new ChordPro file
        file: PathBuf,
    },

    /// Write the bundled example song to a file, or stdout
    Sample {
        /// Destination file (overwritten when it exists)
        file: Option<PathBuf>,
    },

    /// Show song metadata and the settings that would apply to it
    Info {
        /// Path to the ChordPro source file
        file: PathBuf,
    },

    /// Show or change the stored application settings
    Settings {
        #[command(subcommand)]
        action: commands::settings::SettingsAction,
    },

    /// Check that the chordpro executable is available
    Check,

    /// Print links to the ChordPro documentation and community
    Docs,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    chordshell_common::logging::init_logging(&chordshell_common::logging::LoggingConfig {
        level: log_level.to_string(),
        json: false,
        file: None,
    });

    match cli.command {
        Commands::Export {
            file,
            output,
            log,
            task_config,
        } => commands::export::run(file, output, log, task_config).await,
        Commands::New { file } => commands::new::run(file),
        Commands::Sample { file } => commands::sample::run(file),
        Commands::Info { file } => commands::info::run(file),
        Commands::Settings { action } => commands::settings::run(action),
        Commands::Check => commands::check::run(),
        Commands::Docs => commands::docs::run(),
    }
}
