//! Command-line runner for the condensation pipeline.
//!
//! Reads a business context and a scraped-document collection from JSON
//! files (the upstream scraper's output format), runs the pipeline, and
//! either prints the assembled generation request or produces and saves
//! the generated summary.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use condenser::{
    Analyst, BusinessContext, Condenser, MemoryStore, OpenAiGenerator, ScrapedDocument,
};

#[derive(Parser)]
#[command(name = "pestel", about = "Political-risk analysis pipeline")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the condensation stages and print the generation request as JSON
    Condense {
        /// Business context JSON file
        #[arg(long, default_value = "scraping_input.json")]
        input: PathBuf,

        /// Scraped results JSON file (default: <business>_scraped_results.json)
        #[arg(long)]
        documents: Option<PathBuf>,
    },

    /// Run the full pipeline and save the generated summary
    Analyze {
        /// Business context JSON file
        #[arg(long, default_value = "scraping_input.json")]
        input: PathBuf,

        /// Scraped results JSON file (default: <business>_scraped_results.json)
        #[arg(long)]
        documents: Option<PathBuf>,

        /// Output file (default: <business>_political_summary.json)
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn load_context(path: &Path) -> Result<BusinessContext> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read context from {}", path.display()))?;
    let context: BusinessContext =
        serde_json::from_str(&raw).context("failed to parse business context")?;
    Ok(context)
}

fn load_documents(context: &BusinessContext, path: Option<PathBuf>) -> Result<Vec<ScrapedDocument>> {
    let path = path.unwrap_or_else(|| {
        PathBuf::from(format!("{}_scraped_results.json", context.normalized_name()))
    });
    let raw = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read documents from {}", path.display()))?;
    let documents: Vec<ScrapedDocument> =
        serde_json::from_str(&raw).context("failed to parse scraped documents")?;
    Ok(documents)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,condenser=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Condense { input, documents } => {
            let context = load_context(&input)?;
            let documents = load_documents(&context, documents)?;

            tracing::info!(business = %context.business_name, documents = documents.len(), "condensing");

            let condenser = Condenser::new();
            let request = condenser
                .condense(&context, &documents)
                .await
                .context("condensation failed")?;

            println!("{}", serde_json::to_string_pretty(&request)?);
        }

        Command::Analyze {
            input,
            documents,
            output,
        } => {
            // Load .env if present (for OPENAI_API_KEY)
            let _ = dotenvy::dotenv();

            let context = load_context(&input)?;
            let documents = load_documents(&context, documents)?;
            let output = output.unwrap_or_else(|| {
                PathBuf::from(format!(
                    "{}_political_summary.json",
                    context.normalized_name()
                ))
            });

            tracing::info!(business = %context.business_name, documents = documents.len(), "analyzing");

            let generator =
                OpenAiGenerator::from_env().context("generation service unavailable")?;
            let analyst = Analyst::new(MemoryStore::new(), generator);

            let record = analyst
                .analyze(&context, &documents)
                .await
                .context("analysis failed")?;

            std::fs::write(&output, serde_json::to_string_pretty(&record)?)
                .with_context(|| format!("failed to write {}", output.display()))?;

            tracing::info!(output = %output.display(), "summary saved");
            println!("Summary saved to {}", output.display());
        }
    }

    Ok(())
}
