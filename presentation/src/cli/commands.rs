//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for quizzer
#[derive(Parser, Debug)]
#[command(name = "quizzer")]
#[command(author, version, about = "Interactive quiz trainer")]
#[command(long_about = r#"
Quizzer keeps a collection of question/answer pairs and quizzes you on them.

Inside the interactive prompt, type `help` to see every command:
list, show <id>, add, delete <id>, edit <id>, test <id>, play, credits, quit.

Configuration files are loaded from (in priority order):
1. QUIZZER_* environment variables (e.g. QUIZZER_STORE__PATH)
2. --config <path>     Explicit config file
3. ./quizzer.toml      Project-level config
4. ~/.config/quizzer/config.toml   Global config

Example:
  quizzer
  quizzer --store ./geography.json
  quizzer --memory -v
"#)]
pub struct Cli {
    /// Path of the JSON quiz store
    #[arg(long, value_name = "PATH", conflicts_with = "memory")]
    pub store: Option<PathBuf>,

    /// Keep quizzes in memory only (nothing is saved)
    #[arg(long)]
    pub memory: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Write logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
