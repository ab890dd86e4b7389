//! TUI application - main loop with Actor pattern
//!
//! Architecture:
//! ```text
//! TuiApp (select! loop)                 controller_task (tokio::spawn)
//!   ├─ crossterm EventStream              ├─ cmd_rx.recv()
//!   ├─ ui_rx (UiEvent from controller)    └─ controller.handle_command()
//!   └─ tick_interval
//!        └── cmd_tx ──────────────────>──┘
//! ```

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, EventStream},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::stream::StreamExt;
use ragview_application::{CatalogApi, ClientCommand, ClientController, HistoryApi, QueryApi, UiEvent};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

use super::mode::{InputMode, KeyAction, KeyHandler};
use super::page::Page;
use super::presenter::TuiPresenter;
use super::state::TuiState;
use super::widgets::{
    MainLayout, dashboard_page::DashboardPageWidget, documents_page::DocumentsPageWidget,
    header::HeaderWidget, history_page::HistoryPageWidget, input::InputWidget,
    query_page::QueryPageWidget, status_bar::StatusBarWidget,
};

/// Main TUI application
pub struct TuiApp {
    // -- Actor channels --
    cmd_tx: mpsc::UnboundedSender<ClientCommand>,
    ui_rx: mpsc::UnboundedReceiver<UiEvent>,

    // -- Controller task handle --
    _controller_handle: tokio::task::JoinHandle<()>,

    // -- Display config --
    backend_url: String,
    max_input_height: u16,
}

impl TuiApp {
    /// Create a new TUI application wired to the controller
    pub fn new(
        query_api: Arc<dyn QueryApi>,
        catalog: Arc<dyn CatalogApi>,
        history: Arc<dyn HistoryApi>,
        backend_url: impl Into<String>,
        max_input_height: u16,
    ) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel::<ClientCommand>();
        let (ui_tx, ui_rx) = mpsc::unbounded_channel::<UiEvent>();

        let controller = ClientController::new(query_api, catalog, history, ui_tx);
        let controller_handle = tokio::spawn(controller_task(controller, cmd_rx));

        Self {
            cmd_tx,
            ui_rx,
            _controller_handle: controller_handle,
            backend_url: backend_url.into(),
            max_input_height,
        }
    }

    /// Run the TUI main loop
    pub async fn run(&mut self) -> io::Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Panic hook to restore the terminal
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
            original_hook(info);
        }));

        let mut state = TuiState::new();
        state.backend_url = self.backend_url.clone();
        state.max_input_height = self.max_input_height;

        let mut event_stream = EventStream::new();
        let mut tick = tokio::time::interval(Duration::from_millis(250));

        loop {
            terminal.draw(|frame| {
                Self::render(frame, &state);
            })?;

            if state.should_quit {
                break;
            }

            tokio::select! {
                // Terminal events (keyboard, resize)
                Some(Ok(term_event)) = event_stream.next() => {
                    self.handle_terminal_event(&mut state, term_event);
                }

                // UiEvents from the controller
                Some(ui_event) = self.ui_rx.recv() => {
                    let reload_documents =
                        matches!(ui_event, UiEvent::DocumentUploaded(_));
                    TuiPresenter::apply(&mut state, ui_event);
                    if reload_documents {
                        let _ = self.cmd_tx.send(ClientCommand::LoadDocuments);
                    }
                }

                // Tick for flash expiry
                _ = tick.tick() => {
                    state.expire_flash(Duration::from_secs(5));
                }
            }
        }

        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        Ok(())
    }

    /// Render all widgets
    fn render(frame: &mut ratatui::Frame, state: &TuiState) {
        let show_input = state.page == Page::Query;
        let layout = MainLayout::compute(frame.area(), show_input, 1, state.max_input_height);

        frame.render_widget(HeaderWidget::new(state), layout.header);
        match state.page {
            Page::Query => frame.render_widget(QueryPageWidget::new(state), layout.body),
            Page::Documents => frame.render_widget(DocumentsPageWidget::new(state), layout.body),
            Page::History => frame.render_widget(HistoryPageWidget::new(state), layout.body),
            Page::Dashboard => frame.render_widget(DashboardPageWidget::new(state), layout.body),
        }
        if let Some(input_area) = layout.input {
            frame.render_widget(InputWidget::new(state), input_area);
        }
        frame.render_widget(StatusBarWidget::new(state), layout.status_bar);
    }

    fn handle_terminal_event(&self, state: &mut TuiState, event: crossterm::event::Event) {
        if let crossterm::event::Event::Key(key) = event {
            let action = KeyHandler::handle(state.mode, key);
            self.handle_action(state, action);
        }
        // Resize is picked up on the next draw
    }

    /// Handle a semantic key action
    fn handle_action(&self, state: &mut TuiState, action: KeyAction) {
        match action {
            KeyAction::None => {}

            // Mode transitions
            KeyAction::EnterInsert => {
                if state.page == Page::Query {
                    state.mode = InputMode::Insert;
                }
            }
            KeyAction::EnterCommand => {
                state.mode = InputMode::Command;
                state.command_input.clear();
                state.command_cursor = 0;
            }
            KeyAction::ExitToNormal => state.mode = InputMode::Normal,

            // Text editing
            KeyAction::InsertChar(c) => state.insert_char(c),
            KeyAction::DeleteChar => state.delete_char(),
            KeyAction::CursorLeft => state.cursor_left(),
            KeyAction::CursorRight => state.cursor_right(),
            KeyAction::CursorHome => state.cursor_home(),
            KeyAction::CursorEnd => state.cursor_end(),

            // Submit
            KeyAction::Submit => match state.mode {
                InputMode::Insert => {
                    let input = state.take_input();
                    state.mode = InputMode::Normal;
                    let _ = self.cmd_tx.send(ClientCommand::SubmitQuery(input));
                }
                InputMode::Command => {
                    let cmd = state.take_command();
                    state.mode = InputMode::Normal;
                    self.handle_command_input(state, &cmd);
                }
                InputMode::Normal => {}
            },

            // Page navigation
            KeyAction::NextPage => self.goto_page(state, state.page.next()),
            KeyAction::PrevPage => self.goto_page(state, state.page.prev()),
            KeyAction::GotoPage(page) => self.goto_page(state, page),

            // Scrolling / selection
            KeyAction::ScrollUp => state.selection_up(),
            KeyAction::ScrollDown => state.selection_down(),

            KeyAction::Reload => self.reload_page(state),
            KeyAction::Quit => state.should_quit = true,
        }
    }

    /// Switch pages, loading page data the first time it is shown
    fn goto_page(&self, state: &mut TuiState, page: Page) {
        state.page = page;
        let needs_load = match page {
            Page::Query => false,
            Page::Documents => matches!(
                state.documents,
                ragview_domain::PhaseStatus::NotStarted
            ),
            Page::History => matches!(state.history, ragview_domain::PhaseStatus::NotStarted),
            Page::Dashboard => matches!(state.system, ragview_domain::PhaseStatus::NotStarted),
        };
        if needs_load {
            self.reload_page(state);
        }
    }

    fn reload_page(&self, state: &mut TuiState) {
        let command = match state.page {
            Page::Query => return,
            Page::Documents => {
                state.documents = ragview_domain::PhaseStatus::Loading;
                ClientCommand::LoadDocuments
            }
            Page::History => {
                state.history = ragview_domain::PhaseStatus::Loading;
                ClientCommand::LoadHistory
            }
            Page::Dashboard => {
                state.system = ragview_domain::PhaseStatus::Loading;
                ClientCommand::LoadSystemInfo
            }
        };
        let _ = self.cmd_tx.send(command);
    }

    /// Execute a `:` command
    fn handle_command_input(&self, state: &mut TuiState, cmd: &str) {
        let cmd = cmd.trim();
        if cmd.is_empty() {
            return;
        }
        match parse_command(cmd) {
            Some(TuiCommand::Quit) => state.should_quit = true,
            Some(TuiCommand::Reload) => self.reload_page(state),
            Some(TuiCommand::Upload { title, path }) => {
                state.set_flash(format!("Uploading '{title}'..."));
                let _ = self
                    .cmd_tx
                    .send(ClientCommand::UploadDocument { title, path });
            }
            None => state.set_flash(format!("Unknown command: {cmd}")),
        }
    }
}

/// Parsed `:` commands
#[derive(Debug, PartialEq)]
enum TuiCommand {
    Quit,
    Reload,
    Upload { title: String, path: PathBuf },
}

fn parse_command(cmd: &str) -> Option<TuiCommand> {
    match cmd {
        "q" | "quit" | "exit" => return Some(TuiCommand::Quit),
        "reload" | "refresh" => return Some(TuiCommand::Reload),
        _ => {}
    }
    if let Some(rest) = cmd.strip_prefix("upload ") {
        // Last token is the path, everything before it the title
        let (title, path) = rest.trim().rsplit_once(' ')?;
        let title = title.trim();
        if title.is_empty() {
            return None;
        }
        return Some(TuiCommand::Upload {
            title: title.to_string(),
            path: PathBuf::from(path),
        });
    }
    None
}

/// Background controller task (Actor)
///
/// Owns the ClientController and processes commands from the TUI loop.
async fn controller_task(
    mut controller: ClientController,
    mut cmd_rx: mpsc::UnboundedReceiver<ClientCommand>,
) {
    while let Some(cmd) = cmd_rx.recv().await {
        controller.handle_command(cmd).await;
    }
}
