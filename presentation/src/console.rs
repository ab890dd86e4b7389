//! One-shot console mode.
//!
//! Runs a single query to completion and prints sources then the answer,
//! with a spinner per phase while the backend works. Exit code 0 means
//! the answer phase loaded; anything else is 1.

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use ragview_application::{QueryApi, QueryOrchestrator, UiEvent};
use ragview_domain::SourcePassage;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

pub struct ConsoleRunner {
    api: Arc<dyn QueryApi>,
    quiet: bool,
}

impl ConsoleRunner {
    pub fn new(api: Arc<dyn QueryApi>) -> Self {
        Self { api, quiet: false }
    }

    /// Suppress spinners (for scripting and piped output)
    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    fn spinner(&self, message: &str) -> ProgressBar {
        if self.quiet {
            return ProgressBar::hidden();
        }
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap(),
        );
        pb.set_message(message.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    }

    /// Run one query to completion. Returns the process exit code.
    pub async fn run(&self, question: &str) -> i32 {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let orchestrator = QueryOrchestrator::new(Arc::clone(&self.api), tx);

        let ticket = match orchestrator.submit(question) {
            Ok(ticket) => ticket,
            Err(err) => {
                eprintln!("{} {}", "Error:".red().bold(), err);
                return 1;
            }
        };

        let mut spinner = self.spinner("Retrieving sources...");
        let mut answer_loaded = false;

        while let Some(event) = rx.recv().await {
            match event {
                UiEvent::SessionStarted { .. } => {}
                UiEvent::SourcesLoaded { passages, .. } => {
                    spinner.finish_and_clear();
                    print_sources(&passages);
                    spinner = self.spinner("Generating answer...");
                }
                UiEvent::SourcesFailed { message, .. } => {
                    spinner.finish_and_clear();
                    eprintln!("{} {}", "Sources:".red().bold(), message);
                    spinner = self.spinner("Generating answer...");
                }
                UiEvent::AnswerLoaded { result, .. } => {
                    spinner.finish_and_clear();
                    println!("{}", "Answer".bold().cyan());
                    println!("{}", "─".repeat(60).dimmed());
                    println!("{}", result.answer);
                    answer_loaded = true;
                }
                UiEvent::AnswerFailed { message, .. } => {
                    spinner.finish_and_clear();
                    eprintln!("{} {}", "Answer:".red().bold(), message);
                }
                UiEvent::SessionSettled { .. } => break,
                _ => {}
            }
        }

        // The session task has finished emitting by the time we see
        // SessionSettled, but join it to surface panics.
        let _ = ticket.task.await;

        if answer_loaded { 0 } else { 1 }
    }
}

fn print_sources(passages: &[SourcePassage]) {
    println!("{}", "Sources".bold().cyan());
    println!("{}", "─".repeat(60).dimmed());
    if passages.is_empty() {
        println!("{}", "No matching passages".dimmed());
    }
    for passage in passages {
        println!(
            "{} {}",
            passage.display_title().bold(),
            format!("({})", passage.display_score()).dimmed()
        );
        for line in passage.content.lines() {
            println!("  {line}");
        }
        println!();
    }
}
