//! TUI mode system (vim-like mode switching)
//!
//! - Normal mode: navigation between pages, scrolling, reloads
//! - Insert mode: query text input
//! - Command mode: `:`-commands (quit, reload, upload)

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::page::Page;

/// Application mode (vim-like)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Normal mode - navigation and commands
    #[default]
    Normal,
    /// Insert mode - text input
    Insert,
    /// Command mode - execute commands (like `:` in vim)
    Command,
}

impl InputMode {
    /// Mode indicator string for the status line
    pub fn indicator(&self) -> &'static str {
        match self {
            Self::Normal => "NORMAL",
            Self::Insert => "INSERT",
            Self::Command => "COMMAND",
        }
    }

    /// Mode color for the status line
    pub fn color(&self) -> ratatui::style::Color {
        use ratatui::style::Color;
        match self {
            Self::Normal => Color::Blue,
            Self::Insert => Color::Green,
            Self::Command => Color::Yellow,
        }
    }
}

/// User action derived from key events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    /// Enter insert mode (query page only)
    EnterInsert,
    /// Enter command mode
    EnterCommand,
    /// Exit current mode to normal
    ExitToNormal,
    /// Submit current input (Enter in Insert/Command mode)
    Submit,
    /// Quit application
    Quit,
    /// Insert character (in Insert/Command mode)
    InsertChar(char),
    /// Delete character (Backspace)
    DeleteChar,
    /// Move cursor left
    CursorLeft,
    /// Move cursor right
    CursorRight,
    /// Move to start of line
    CursorHome,
    /// Move to end of line
    CursorEnd,
    /// Scroll / selection up
    ScrollUp,
    /// Scroll / selection down
    ScrollDown,
    /// Next page (Tab)
    NextPage,
    /// Previous page (Shift-Tab)
    PrevPage,
    /// Jump to a specific page (1-4)
    GotoPage(Page),
    /// Reload the current page's data
    Reload,
    /// No action
    None,
}

/// Key event handler - maps key events to actions based on current mode
pub struct KeyHandler;

impl KeyHandler {
    pub fn handle(mode: InputMode, key: KeyEvent) -> KeyAction {
        match mode {
            InputMode::Normal => Self::handle_normal(key),
            InputMode::Insert => Self::handle_insert(key),
            InputMode::Command => Self::handle_command(key),
        }
    }

    fn handle_normal(key: KeyEvent) -> KeyAction {
        match (key.code, key.modifiers) {
            // Mode switches
            (KeyCode::Char('i'), KeyModifiers::NONE) => KeyAction::EnterInsert,
            (KeyCode::Char(':'), KeyModifiers::NONE) => KeyAction::EnterCommand,

            // Quit
            (KeyCode::Char('q'), KeyModifiers::NONE) => KeyAction::Quit,
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => KeyAction::Quit,

            // Page navigation
            (KeyCode::Tab, _) => KeyAction::NextPage,
            (KeyCode::BackTab, _) => KeyAction::PrevPage,
            (KeyCode::Char('1'), KeyModifiers::NONE) => KeyAction::GotoPage(Page::Query),
            (KeyCode::Char('2'), KeyModifiers::NONE) => KeyAction::GotoPage(Page::Documents),
            (KeyCode::Char('3'), KeyModifiers::NONE) => KeyAction::GotoPage(Page::History),
            (KeyCode::Char('4'), KeyModifiers::NONE) => KeyAction::GotoPage(Page::Dashboard),

            // Scrolling / selection
            (KeyCode::Char('k'), KeyModifiers::NONE) | (KeyCode::Up, _) => KeyAction::ScrollUp,
            (KeyCode::Char('j'), KeyModifiers::NONE) | (KeyCode::Down, _) => {
                KeyAction::ScrollDown
            }

            // Refresh
            (KeyCode::Char('r'), KeyModifiers::NONE) => KeyAction::Reload,

            _ => KeyAction::None,
        }
    }

    fn handle_insert(key: KeyEvent) -> KeyAction {
        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => KeyAction::Quit,
            (KeyCode::Esc, _) => KeyAction::ExitToNormal,
            (KeyCode::Enter, _) => KeyAction::Submit,
            (KeyCode::Char(c), _) => KeyAction::InsertChar(c),
            (KeyCode::Backspace, _) => KeyAction::DeleteChar,
            (KeyCode::Left, _) => KeyAction::CursorLeft,
            (KeyCode::Right, _) => KeyAction::CursorRight,
            (KeyCode::Home, _) => KeyAction::CursorHome,
            (KeyCode::End, _) => KeyAction::CursorEnd,
            _ => KeyAction::None,
        }
    }

    fn handle_command(key: KeyEvent) -> KeyAction {
        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => KeyAction::Quit,
            (KeyCode::Esc, _) => KeyAction::ExitToNormal,
            (KeyCode::Enter, _) => KeyAction::Submit,
            (KeyCode::Char(c), _) => KeyAction::InsertChar(c),
            (KeyCode::Backspace, _) => KeyAction::DeleteChar,
            (KeyCode::Left, _) => KeyAction::CursorLeft,
            (KeyCode::Right, _) => KeyAction::CursorRight,
            (KeyCode::Home, _) => KeyAction::CursorHome,
            (KeyCode::End, _) => KeyAction::CursorEnd,
            _ => KeyAction::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_default() {
        assert_eq!(InputMode::default(), InputMode::Normal);
    }

    #[test]
    fn test_mode_indicator() {
        assert_eq!(InputMode::Normal.indicator(), "NORMAL");
        assert_eq!(InputMode::Insert.indicator(), "INSERT");
        assert_eq!(InputMode::Command.indicator(), "COMMAND");
    }

    #[test]
    fn test_normal_mode_keys() {
        let key = KeyEvent::new(KeyCode::Char('i'), KeyModifiers::NONE);
        assert_eq!(KeyHandler::handle(InputMode::Normal, key), KeyAction::EnterInsert);

        let key = KeyEvent::new(KeyCode::Char(':'), KeyModifiers::NONE);
        assert_eq!(KeyHandler::handle(InputMode::Normal, key), KeyAction::EnterCommand);

        let key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(KeyHandler::handle(InputMode::Normal, key), KeyAction::Quit);

        let key = KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE);
        assert_eq!(KeyHandler::handle(InputMode::Normal, key), KeyAction::NextPage);

        let key = KeyEvent::new(KeyCode::Char('3'), KeyModifiers::NONE);
        assert_eq!(
            KeyHandler::handle(InputMode::Normal, key),
            KeyAction::GotoPage(Page::History)
        );

        let key = KeyEvent::new(KeyCode::Char('r'), KeyModifiers::NONE);
        assert_eq!(KeyHandler::handle(InputMode::Normal, key), KeyAction::Reload);

        let key = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
        assert_eq!(KeyHandler::handle(InputMode::Normal, key), KeyAction::None);
    }

    #[test]
    fn test_insert_mode_keys() {
        let key = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        assert_eq!(
            KeyHandler::handle(InputMode::Insert, key),
            KeyAction::InsertChar('a')
        );

        let key = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(KeyHandler::handle(InputMode::Insert, key), KeyAction::Submit);

        let key = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(
            KeyHandler::handle(InputMode::Insert, key),
            KeyAction::ExitToNormal
        );

        // q must insert, not quit
        let key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(
            KeyHandler::handle(InputMode::Insert, key),
            KeyAction::InsertChar('q')
        );

        // Ctrl+C still quits
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(KeyHandler::handle(InputMode::Insert, key), KeyAction::Quit);
    }
}
