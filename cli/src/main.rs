//! CLI entrypoint for Movie Quiz
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use quiz_application::{QuestionFactory, deliver_events};
use quiz_infrastructure::{ConfigLoader, HttpMoviesLoader, HttpPostersLoader, Severity, http_client};
use quiz_presentation::{Cli, ConsoleFormatter, ConsoleQuiz};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    // === Configuration ===
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    if let Some(url) = cli.movies_url {
        config.api.movies_url = url;
    }
    if let Some(url) = cli.poster_url {
        config.api.poster_url = url;
    }

    let mut params = config.quiz.to_params();
    if let Some(rounds) = cli.rounds {
        params = params.with_rounds(rounds);
    }
    if cli.seed.is_some() {
        params = params.with_seed(cli.seed);
    }
    config.quiz.rounds = params.rounds;

    let issues = config.validate();
    for issue in &issues {
        match issue.severity {
            Severity::Error => error!("{}", issue.message),
            Severity::Warning => warn!("{}", issue.message),
        }
    }
    if issues.iter().any(|i| i.severity == Severity::Error) {
        bail!("Invalid configuration. Run with --show-config to see which files are used.");
    }

    info!("Starting Movie Quiz ({} rounds)", params.rounds);

    // === Dependency Injection ===
    let client = http_client(&config.api).context("Failed to build HTTP client")?;
    let movies_loader = Arc::new(HttpMoviesLoader::new(
        client.clone(),
        config.api.movies_url.clone(),
    ));
    let posters_loader = Arc::new(HttpPostersLoader::new(client, config.api.clone()));

    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut factory = QuestionFactory::new(movies_loader, posters_loader, tx);
    if let Some(seed) = params.seed {
        factory = factory.with_seed(seed);
    }
    let factory = factory.spawn();

    let mut quiz = ConsoleQuiz::stdio(factory.clone(), params.rounds);

    println!();
    print!("{}", ConsoleFormatter::header());
    println!();

    factory.load_data();
    drop(factory);

    // The listener only ever runs here
    let delivered = deliver_events(&mut rx, &mut quiz).await;
    info!("Quiz finished after {} events", delivered);

    Ok(())
}
