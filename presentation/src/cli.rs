//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for ragview
#[derive(Parser, Debug)]
#[command(name = "ragview")]
#[command(author, version, about = "Terminal client for a document question-answering service")]
#[command(long_about = r#"
ragview talks to a RAG backend: upload documents, ask questions against
them, and inspect the source passages behind each answer.

Without a question it opens the interactive TUI (query, documents,
history and dashboard pages). With a question it runs one query and
prints the retrieved sources followed by the generated answer.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./ragview.toml      Project-level config
3. ~/.config/ragview/config.toml   Global config

Example:
  ragview
  ragview "What does chapter 3 say about error handling?"
  ragview --base-url http://rag.internal:8000 "Summarize the changelog"
"#)]
pub struct Cli {
    /// Question to ask (omit to open the TUI)
    pub question: Option<String>,

    /// Backend base URL (overrides config)
    #[arg(short, long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators in one-shot mode
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,
}
