//! Command-line front-end: one-shot questions or an interactive read loop.

use anyhow::Context;
use clap::Parser;
use log::{debug, info};
use meridian_config::{ConfigStore, StoreOverrides};
use meridian_core::{AskOutcome, QueryOrchestrator, DEFAULT_TEMPERATURE};
use meridian_gemini::GeminiClient;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};

/// Commands that end the interactive loop.
const EXIT_COMMANDS: &[&str] = &["exit", "quit", "q"];

/// Search-grounded question answering from the terminal.
#[derive(Parser)]
#[command(name = "meridian", version)]
struct Cli {
    /// Question words; interactive mode starts when omitted
    question: Vec<String>,
    /// Path to the store file (relative paths anchor to the install dir)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Remote model name override
    #[arg(long)]
    model: Option<String>,
    /// API key override
    #[arg(long)]
    api_key: Option<String>,
    /// Sampling temperature in [0, 1]
    #[arg(long, default_value_t = DEFAULT_TEMPERATURE)]
    temperature: f32,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = env_logger::builder()
        .format_timestamp_millis()
        .parse_default_env()
        .try_init();

    let cli = Cli::parse();
    let overrides = StoreOverrides {
        api_key: cli.api_key.clone(),
        model_name: cli.model.clone(),
    };
    let store =
        ConfigStore::open(cli.config.as_deref(), overrides).context("failed to load store")?;
    info!(
        "store ready (path={}, model={})",
        store.path().display(),
        store.record().model_name
    );
    let provider =
        GeminiClient::new(store.record().api_key.clone()).context("failed to build client")?;
    let orchestrator = QueryOrchestrator::new(store, Arc::new(provider));

    if !cli.question.is_empty() {
        let question = cli.question.join(" ");
        let outcome = orchestrator.ask(&question, cli.temperature).await;
        report(&outcome);
        return Ok(());
    }

    run_interactive(&orchestrator, cli.temperature).await
}

/// Read questions line by line until an exit command or end-of-input.
/// Individual call failures are reported and never end the session.
async fn run_interactive(
    orchestrator: &QueryOrchestrator,
    temperature: f32,
) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let question = line.trim();
        if question.is_empty() {
            continue;
        }
        if EXIT_COMMANDS.contains(&question.to_lowercase().as_str()) {
            debug!("exit command received");
            break;
        }
        let outcome = orchestrator.ask(question, temperature).await;
        report(&outcome);
    }
    Ok(())
}

/// Print an outcome: answers to stdout, everything else to stderr.
fn report(outcome: &AskOutcome) {
    match outcome {
        AskOutcome::Answer(text) => println!("{text}"),
        AskOutcome::CooldownBlocked { remaining_secs } => {
            eprintln!("error: on cooldown ({remaining_secs}s remaining)");
        }
        AskOutcome::NoAnswer => eprintln!("error: no answer returned"),
        AskOutcome::Failed(failure) => {
            eprintln!("error: {}: {}", failure.category, failure.message);
        }
    }
}
