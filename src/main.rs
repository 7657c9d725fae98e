//! palette-pad CLI
//!
//! Collect named colors in a terminal list, each shown in its own color.

use std::process::ExitCode;

use clap::{Parser, Subcommand};

use palette_pad::report::format_palette;
use palette_pad::tui;
use palette_pad::types::{OutputFormat, Palette};

#[derive(Parser)]
#[command(name = "palette-pad")]
#[command(about = "Collect named colors, each shown in its own color")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the starting palette without entering the TUI
    List {
        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormatArg,

        /// Replace the default seed colors
        #[arg(long, value_name = "COLOR")]
        seed: Vec<String>,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormatArg {
    Human,
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        None => cmd_tui(),
        Some(Commands::List { format, seed }) => cmd_list(format.into(), seed),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

// ============================================================================
// COMMAND HANDLERS
// ============================================================================

fn cmd_tui() -> Result<(), String> {
    tui::run::run().map_err(|e| e.to_string())
}

fn cmd_list(format: OutputFormat, seed: Vec<String>) -> Result<(), String> {
    let palette = if seed.is_empty() {
        Palette::seeded()
    } else {
        Palette::from_names(seed)
    };

    print!("{}", format_palette(&palette, format));
    Ok(())
}
