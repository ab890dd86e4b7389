//! Presentation layer for ragview
//!
//! This crate contains the CLI definition, the ratatui TUI (pages,
//! widgets, presenter), and the one-shot console runner.

pub mod cli;
pub mod console;
pub mod tui;

// Re-export commonly used types
pub use cli::Cli;
pub use console::ConsoleRunner;
pub use tui::app::TuiApp;
