//! TUI application state
//!
//! Single source of truth for everything the TUI renders.
//! Updated by TuiPresenter (UiEvent → state) and the key-handling loop.

use ragview_domain::{
    DocumentRecord, HistoryEntry, PhaseStatus, QuerySession, SystemInfo,
};

use super::mode::InputMode;
use super::page::Page;

/// Central TUI state - owned by the TuiApp select! loop
pub struct TuiState {
    // -- Mode / routing --
    pub mode: InputMode,
    pub page: Page,

    // -- Query input buffer --
    pub input: String,
    pub cursor_pos: usize,

    // -- Command buffer (for : mode) --
    pub command_input: String,
    pub command_cursor: usize,

    // -- Query page --
    pub query: QueryPaneState,

    // -- Documents page --
    pub documents: PhaseStatus<Vec<DocumentRecord>>,
    pub documents_selected: usize,

    // -- History page --
    pub history: PhaseStatus<Vec<HistoryEntry>>,
    pub history_selected: usize,

    // -- Dashboard page --
    pub system: PhaseStatus<SystemInfo>,

    // -- Overlay --
    pub flash_message: Option<(String, std::time::Instant)>,

    // -- Config display --
    pub backend_url: String,
    pub max_input_height: u16,

    // -- Lifecycle --
    pub should_quit: bool,
}

/// State of the query page main pane
#[derive(Default)]
pub struct QueryPaneState {
    /// The session whose phases are currently shown, if any
    pub session: Option<QuerySession>,
    /// Validation message shown when an empty query was submitted
    pub validation_error: Option<String>,
    /// Scroll offset for the answer pane (lines from the top)
    pub answer_scroll: u16,
}

impl Default for TuiState {
    fn default() -> Self {
        Self {
            mode: InputMode::default(),
            page: Page::default(),
            input: String::new(),
            cursor_pos: 0,
            command_input: String::new(),
            command_cursor: 0,
            query: QueryPaneState::default(),
            documents: PhaseStatus::NotStarted,
            documents_selected: 0,
            history: PhaseStatus::NotStarted,
            history_selected: 0,
            system: PhaseStatus::NotStarted,
            flash_message: None,
            backend_url: String::new(),
            max_input_height: 5,
            should_quit: false,
        }
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self::default()
    }

    // -- Input editing --

    pub fn insert_char(&mut self, c: char) {
        let cursor = self.active_cursor();
        self.active_input_mut().insert(cursor, c);
        *self.active_cursor_mut() += c.len_utf8();
    }

    pub fn delete_char(&mut self) {
        let cursor = self.active_cursor();
        if cursor > 0 {
            let input = self.active_input_mut();
            let prev_char_len = input[..cursor]
                .chars()
                .next_back()
                .map(|c| c.len_utf8())
                .unwrap_or(0);
            input.remove(cursor - prev_char_len);
            *self.active_cursor_mut() -= prev_char_len;
        }
    }

    pub fn cursor_left(&mut self) {
        let cursor = self.active_cursor();
        if cursor > 0 {
            let input = self.active_input();
            let prev_char_len = input[..cursor]
                .chars()
                .next_back()
                .map(|c| c.len_utf8())
                .unwrap_or(0);
            *self.active_cursor_mut() -= prev_char_len;
        }
    }

    pub fn cursor_right(&mut self) {
        let cursor = self.active_cursor();
        let len = self.active_input().len();
        if cursor < len {
            let input = self.active_input();
            let next_char_len = input[cursor..]
                .chars()
                .next()
                .map(|c| c.len_utf8())
                .unwrap_or(0);
            *self.active_cursor_mut() += next_char_len;
        }
    }

    pub fn cursor_home(&mut self) {
        *self.active_cursor_mut() = 0;
    }

    pub fn cursor_end(&mut self) {
        let len = self.active_input().len();
        *self.active_cursor_mut() = len;
    }

    /// Take the query input buffer contents and clear it
    pub fn take_input(&mut self) -> String {
        self.cursor_pos = 0;
        std::mem::take(&mut self.input)
    }

    /// Take the command buffer contents and clear it
    pub fn take_command(&mut self) -> String {
        self.command_cursor = 0;
        std::mem::take(&mut self.command_input)
    }

    // -- Active buffer helpers (routes to input or command based on mode) --

    fn active_input(&self) -> &str {
        match self.mode {
            InputMode::Command => &self.command_input,
            _ => &self.input,
        }
    }

    fn active_input_mut(&mut self) -> &mut String {
        match self.mode {
            InputMode::Command => &mut self.command_input,
            _ => &mut self.input,
        }
    }

    fn active_cursor(&self) -> usize {
        match self.mode {
            InputMode::Command => self.command_cursor,
            _ => self.cursor_pos,
        }
    }

    fn active_cursor_mut(&mut self) -> &mut usize {
        match self.mode {
            InputMode::Command => &mut self.command_cursor,
            _ => &mut self.cursor_pos,
        }
    }

    // -- List selection --

    pub fn selection_up(&mut self) {
        match self.page {
            Page::Query => {
                self.query.answer_scroll = self.query.answer_scroll.saturating_sub(1);
            }
            Page::Documents => {
                self.documents_selected = self.documents_selected.saturating_sub(1);
            }
            Page::History => {
                self.history_selected = self.history_selected.saturating_sub(1);
            }
            Page::Dashboard => {}
        }
    }

    pub fn selection_down(&mut self) {
        match self.page {
            Page::Query => {
                self.query.answer_scroll = self.query.answer_scroll.saturating_add(1);
            }
            Page::Documents => {
                let len = self.documents_len();
                if len > 0 && self.documents_selected < len - 1 {
                    self.documents_selected += 1;
                }
            }
            Page::History => {
                let len = self.history_len();
                if len > 0 && self.history_selected < len - 1 {
                    self.history_selected += 1;
                }
            }
            Page::Dashboard => {}
        }
    }

    fn documents_len(&self) -> usize {
        match &self.documents {
            PhaseStatus::Loaded(docs) => docs.len(),
            _ => 0,
        }
    }

    fn history_len(&self) -> usize {
        match &self.history {
            PhaseStatus::Loaded(entries) => entries.len(),
            _ => 0,
        }
    }

    /// The history entry currently highlighted, if any
    pub fn selected_history_entry(&self) -> Option<&HistoryEntry> {
        match &self.history {
            PhaseStatus::Loaded(entries) => entries.get(self.history_selected),
            _ => None,
        }
    }

    // -- Flash messages --

    pub fn set_flash(&mut self, msg: impl Into<String>) {
        self.flash_message = Some((msg.into(), std::time::Instant::now()));
    }

    /// Clear flash if older than the given duration
    pub fn expire_flash(&mut self, max_age: std::time::Duration) {
        if let Some((_, created)) = &self.flash_message
            && created.elapsed() > max_age
        {
            self.flash_message = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ragview_domain::{QueryText, SessionId};

    fn docs(n: usize) -> Vec<DocumentRecord> {
        (0..n)
            .map(|i| DocumentRecord {
                id: i as i64,
                title: format!("doc {i}"),
                file_name: format!("doc{i}.pdf"),
                file_type: "pdf".into(),
                upload_date: "2026-01-01".into(),
                chunk_count: 4,
            })
            .collect()
    }

    #[test]
    fn test_input_editing() {
        let mut state = TuiState::new();
        state.mode = InputMode::Insert;

        state.insert_char('h');
        state.insert_char('i');
        assert_eq!(state.input, "hi");
        assert_eq!(state.cursor_pos, 2);

        state.delete_char();
        assert_eq!(state.input, "h");
        assert_eq!(state.cursor_pos, 1);
    }

    #[test]
    fn test_command_buffer_separate() {
        let mut state = TuiState::new();

        state.mode = InputMode::Insert;
        state.insert_char('a');
        assert_eq!(state.input, "a");

        // Switch to command mode - separate buffer
        state.mode = InputMode::Command;
        state.insert_char('q');
        assert_eq!(state.command_input, "q");
        assert_eq!(state.input, "a"); // Unchanged
    }

    #[test]
    fn test_take_input_clears() {
        let mut state = TuiState::new();
        state.input = "hello".into();
        state.cursor_pos = 5;

        let taken = state.take_input();
        assert_eq!(taken, "hello");
        assert!(state.input.is_empty());
        assert_eq!(state.cursor_pos, 0);
    }

    #[test]
    fn test_cursor_movement() {
        let mut state = TuiState::new();
        state.mode = InputMode::Insert;
        state.input = "abc".into();
        state.cursor_pos = 3;

        state.cursor_left();
        assert_eq!(state.cursor_pos, 2);

        state.cursor_home();
        assert_eq!(state.cursor_pos, 0);

        state.cursor_end();
        assert_eq!(state.cursor_pos, 3);

        state.cursor_right(); // Already at end
        assert_eq!(state.cursor_pos, 3);
    }

    #[test]
    fn test_multibyte_editing() {
        let mut state = TuiState::new();
        state.mode = InputMode::Insert;
        state.insert_char('é');
        state.insert_char('x');
        assert_eq!(state.input, "éx");
        assert_eq!(state.cursor_pos, 3); // é is 2 bytes

        state.cursor_left();
        state.cursor_left();
        assert_eq!(state.cursor_pos, 0);
    }

    #[test]
    fn test_document_selection_clamped() {
        let mut state = TuiState::new();
        state.page = Page::Documents;
        state.documents = PhaseStatus::Loaded(docs(3));

        state.selection_down();
        state.selection_down();
        state.selection_down(); // clamped at last index
        assert_eq!(state.documents_selected, 2);

        state.selection_up();
        assert_eq!(state.documents_selected, 1);
    }

    #[test]
    fn test_selection_noop_while_loading() {
        let mut state = TuiState::new();
        state.page = Page::Documents;
        state.documents = PhaseStatus::Loading;

        state.selection_down();
        assert_eq!(state.documents_selected, 0);
    }

    #[test]
    fn test_selected_history_entry() {
        let mut state = TuiState::new();
        assert!(state.selected_history_entry().is_none());

        state.history = PhaseStatus::Loaded(vec![HistoryEntry {
            id: 1,
            query_text: "q".into(),
            response_text: "a".into(),
            timestamp: "2026-01-01T00:00:00Z".into(),
            documents_retrieved: vec![],
        }]);
        assert_eq!(state.selected_history_entry().unwrap().id, 1);
    }

    #[test]
    fn test_flash_message() {
        let mut state = TuiState::new();
        state.set_flash("test");
        assert!(state.flash_message.is_some());

        // Should not expire immediately
        state.expire_flash(std::time::Duration::from_secs(5));
        assert!(state.flash_message.is_some());
    }

    #[test]
    fn test_query_pane_tracks_session() {
        let mut state = TuiState::new();
        let query = QueryText::parse("what is rust").unwrap();
        state.query.session = Some(QuerySession::start(SessionId(1), query));
        assert!(!state.query.session.as_ref().unwrap().is_settled());
    }
}
