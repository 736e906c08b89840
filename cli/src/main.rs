//! CLI entrypoint for quizzer
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use quizzer_application::{QuizCommands, QuizStore};
use quizzer_infrastructure::{ConfigLoader, FileConfig, InMemoryQuizStore, JsonFileQuizStore};
use quizzer_presentation::{Cli, ConsolePresenter, QuizRepl, TerminalPrompt};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        for line in ConfigLoader::describe_config_sources(cli.config.as_ref()) {
            println!("{}", line);
        }
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("Failed to load configuration")?
    };

    // Keep the guard alive so buffered log lines are flushed on exit
    let log_file = cli
        .log_file
        .clone()
        .or_else(|| config.log.resolved_file());
    let _log_guard = init_logging(cli.verbose, log_file.as_deref())?;

    info!("Starting quizzer");
    for warning in config.validate() {
        warn!("Config {}: {}", warning.field, warning.message);
    }

    if cli.no_color || !config.output.color {
        colored::control::set_override(false);
    }

    // === Dependency Injection ===
    if cli.memory {
        let store = Arc::new(InMemoryQuizStore::seeded()?);
        return run(store, "en memoria (no se guardan cambios)", &config).await;
    }

    let Some(path) = cli.store.clone().or_else(|| config.store.resolved_path()) else {
        bail!("No quiz store location found. Use --store <PATH> or --memory.");
    };
    let store = Arc::new(
        JsonFileQuizStore::open(&path, config.store.seed)
            .await
            .with_context(|| format!("Failed to open quiz store {}", path.display()))?,
    );
    run(store, &path.display().to_string(), &config).await
}

async fn run<S: QuizStore + 'static>(
    store: Arc<S>,
    store_description: &str,
    config: &FileConfig,
) -> Result<()> {
    let mut prompt = TerminalPrompt::new()?;
    if let Some(history) = config.repl.resolved_history_file() {
        prompt = prompt.with_history(history);
    }
    let prompt = Arc::new(prompt);
    let presenter = Arc::new(ConsolePresenter::new());

    presenter.print_welcome(store_description);

    let commands = QuizCommands::new(store, prompt.clone(), presenter);
    let repl = QuizRepl::new(commands, prompt.clone()).with_prompt(config.repl.prompt.clone());
    let result = repl.run().await;

    if let Err(e) = prompt.save_history() {
        warn!("Could not save history: {}", e);
    }
    result?;

    info!("Bye");
    Ok(())
}

/// Initialize logging based on verbosity level, optionally into a file
fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let Some(path) = log_file else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
        return Ok(None);
    };

    let Some(file_name) = path.file_name() else {
        bail!("Invalid log file path: {}", path.display());
    };
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::never(dir, file_name));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer)
        .init();
    Ok(Some(guard))
}
