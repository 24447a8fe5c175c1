// TextLens CLI entry point

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

use textlens_core::analysis::{classify_intent, readability_ease, readability_grade, TextAnalyzer};
use textlens_core::config::AppConfig;
use textlens_core::diagnostics::{self, DiagnosticReport};
use textlens_core::{input, logging};

#[derive(Parser)]
#[command(name = "textlens")]
#[command(about = "Readability scoring and intent classification for short texts", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Full analysis: counts, grade, ease, reading band and intent
    Analyze {
        /// Text to analyze (reads stdin when neither TEXT nor --file is given)
        text: Vec<String>,
        /// Read the text from a file
        #[arg(short, long, conflicts_with = "text")]
        file: Option<PathBuf>,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Flesch-Kincaid grade level
    Grade {
        #[arg(required = true)]
        text: Vec<String>,
    },
    /// Flesch reading ease (0-100)
    Ease {
        #[arg(required = true)]
        text: Vec<String>,
    },
    /// Intent category label
    Classify {
        #[arg(required = true)]
        text: Vec<String>,
    },
    /// Run the built-in reference checks
    Diagnose {
        /// Only run one category (readability, intent)
        #[arg(short, long)]
        category: Option<String>,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

fn load_text(words: Vec<String>, file: Option<PathBuf>) -> Result<String> {
    if let Some(path) = file {
        return input::read_text_from_path(&path)
            .with_context(|| format!("Failed to read {}", path.display()));
    }
    if !words.is_empty() {
        return Ok(words.join(" "));
    }
    input::read_text_from_reader(std::io::stdin().lock()).context("Failed to read stdin")
}

fn print_diagnostics(report: &DiagnosticReport) {
    for result in &report.results {
        let status = if result.passed { "PASS" } else { "FAIL" };
        println!("{} {} - {}", status, result.name, result.message);
        if let Some(details) = result.details.as_deref().filter(|_| !result.passed) {
            println!("     {}", details);
        }
    }
    for category in &report.categories {
        println!("{}: {} passed, {} failed", category.name, category.passed, category.failed);
    }
    println!(
        "{}/{} checks passed ({}µs)",
        report.passed, report.total_checks, report.total_duration_us
    );
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::from_env()?;
    logging::init_tracing(&config.log)?;

    match cli.command {
        Command::Analyze { text, file, json } => {
            let text = load_text(text, file)?;
            let report = TextAnalyzer::new().analyze(&text);
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", report.summary());
            }
        }
        Command::Grade { text } => {
            println!("{:.2}", readability_grade(&text.join(" ")));
        }
        Command::Ease { text } => {
            println!("{:.2}", readability_ease(&text.join(" ")));
        }
        Command::Classify { text } => {
            println!("{}", classify_intent(&text.join(" ")));
        }
        Command::Diagnose { category, json } => {
            let report = match category {
                Some(name) => diagnostics::run_category_report(&name, &config.thresholds)?,
                None => diagnostics::run_all_checks(&config.thresholds),
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_diagnostics(&report);
            }

            if !report.all_passed() {
                bail!("{} diagnostic check(s) failed", report.failed);
            }
            info!("All diagnostic checks passed");
        }
    }

    Ok(())
}
