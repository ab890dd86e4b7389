//! Query page body - sources panel beside the answer panel
//!
//! Each panel tracks its own phase: a spinner-style "Loading..." notice
//! while in flight, the payload once loaded, the failure message in red
//! otherwise. One panel failing never blanks the other.

use ragview_domain::{PhaseStatus, QuerySession, SourcePassage};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::tui::markdown::render_markdown;
use crate::tui::state::TuiState;

pub struct QueryPageWidget<'a> {
    state: &'a TuiState,
}

impl<'a> QueryPageWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }
}

impl Widget for QueryPageWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let panes = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(area);

        render_sources_pane(self.state, panes[0], buf);
        render_answer_pane(self.state, panes[1], buf);
    }
}

fn render_sources_pane(state: &TuiState, area: Rect, buf: &mut Buffer) {
    let block = Block::default().borders(Borders::ALL).title(" Sources ");

    let lines = match session_sources(state) {
        None => vec![dimmed("Submit a query to retrieve sources")],
        Some(PhaseStatus::NotStarted) => vec![dimmed("Waiting...")],
        Some(PhaseStatus::Loading) => vec![loading("Retrieving sources...")],
        Some(PhaseStatus::Failed(msg)) => vec![failure(msg)],
        Some(PhaseStatus::Loaded(passages)) if passages.is_empty() => {
            vec![dimmed("No matching passages")]
        }
        Some(PhaseStatus::Loaded(passages)) => passage_lines(passages),
    };

    Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .render(area, buf);
}

fn render_answer_pane(state: &TuiState, area: Rect, buf: &mut Buffer) {
    let title = match &state.query.session {
        Some(session) => format!(" Answer {} ", session.id()),
        None => " Answer ".to_string(),
    };
    let block = Block::default().borders(Borders::ALL).title(title);

    // Validation errors surface here instead of an answer
    if let Some(msg) = &state.query.validation_error {
        Paragraph::new(vec![failure(msg)])
            .block(block)
            .render(area, buf);
        return;
    }

    let lines = match state.query.session.as_ref().map(QuerySession::answer) {
        None => vec![dimmed("Ask something with 'i', then Enter")],
        Some(PhaseStatus::NotStarted) => vec![dimmed("Waiting...")],
        Some(PhaseStatus::Loading) => vec![loading("Generating answer...")],
        Some(PhaseStatus::Failed(msg)) => vec![failure(msg)],
        Some(PhaseStatus::Loaded(result)) => render_markdown(&result.answer),
    };

    Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((state.query.answer_scroll, 0))
        .render(area, buf);
}

fn session_sources(state: &TuiState) -> Option<&PhaseStatus<Vec<SourcePassage>>> {
    state.query.session.as_ref().map(QuerySession::sources)
}

fn passage_lines(passages: &[SourcePassage]) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (i, passage) in passages.iter().enumerate() {
        if i > 0 {
            lines.push(Line::default());
        }
        lines.push(Line::from(vec![
            Span::styled(
                format!("{} ", passage.display_title()),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("({})", passage.display_score()),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
        for content_line in passage.content.lines() {
            lines.push(Line::from(format!("  {content_line}")));
        }
    }
    lines
}

fn dimmed(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(Color::DarkGray),
    ))
}

fn loading(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::ITALIC),
    ))
}

fn failure(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(Color::Red),
    ))
}
