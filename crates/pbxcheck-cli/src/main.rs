//! pbxcheck CLI - audit an Xcode project for ghost file references
//!
//! Locates the `.xcodeproj` bundle under `--path`, cross-references the
//! manifest's declared filenames against the directory tree, and prints
//! the result as text or JSON.

use clap::{Parser, ValueEnum};
use pbxcheck_core::report::{json, text};
use pbxcheck_core::{AuditConfig, Auditor, DEFAULT_PATH};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pbxcheck")]
#[command(about = "Audit an Xcode project for ghost file references")]
#[command(version)]
struct Cli {
    /// Directory containing the .xcodeproj bundle
    #[arg(long, default_value = DEFAULT_PATH, value_name = "DIR")]
    path: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Filename to exclude from ghost detection (repeatable)
    #[arg(long, value_name = "NAME")]
    exclude: Vec<String>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum OutputFormat {
    Text,
    Json,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = AuditConfig {
        path: cli.path.clone(),
        exclude: cli.exclude.clone(),
    };

    let report = Auditor::new().run(&config)?;

    match cli.format {
        OutputFormat::Text => print!("{}", text::render(&report)),
        OutputFormat::Json => println!("{}", json::to_json(&report)?),
    }

    Ok(())
}
