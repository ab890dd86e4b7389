//! History page body - past queries with the stored response of the
//! selected one. The response is rendered from `response_text` as saved;
//! selecting an entry never re-runs the query.

use ragview_domain::PhaseStatus;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{
        Block, Borders, List, ListItem, ListState, Paragraph, StatefulWidget, Widget, Wrap,
    },
};

use crate::tui::markdown::render_markdown;
use crate::tui::state::TuiState;

const PREVIEW_LEN: usize = 48;

pub struct HistoryPageWidget<'a> {
    state: &'a TuiState,
}

impl<'a> HistoryPageWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }
}

impl Widget for HistoryPageWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let list_block = Block::default().borders(Borders::ALL).title(" History ");

        let entries = match &self.state.history {
            PhaseStatus::NotStarted | PhaseStatus::Loading => {
                Paragraph::new(Span::styled(
                    "Loading history...",
                    Style::default().fg(Color::Yellow),
                ))
                .block(list_block)
                .render(area, buf);
                return;
            }
            PhaseStatus::Failed(msg) => {
                Paragraph::new(Span::styled(msg.clone(), Style::default().fg(Color::Red)))
                    .block(list_block)
                    .render(area, buf);
                return;
            }
            PhaseStatus::Loaded(entries) => entries,
        };

        if entries.is_empty() {
            Paragraph::new(Span::styled(
                "No queries yet",
                Style::default().fg(Color::DarkGray),
            ))
            .block(list_block)
            .render(area, buf);
            return;
        }

        let panes = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(area);

        let items: Vec<ListItem> = entries
            .iter()
            .map(|entry| {
                ListItem::new(format!(
                    "{}  {}",
                    entry.timestamp,
                    entry.query_preview(PREVIEW_LEN)
                ))
            })
            .collect();

        let list = List::new(items)
            .block(list_block)
            .highlight_style(
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        let mut list_state = ListState::default();
        list_state.select(Some(self.state.history_selected));
        StatefulWidget::render(list, panes[0], buf, &mut list_state);

        // Stored response of the highlighted entry
        let detail_block = Block::default().borders(Borders::ALL).title(" Response ");
        match self.state.selected_history_entry() {
            Some(entry) => {
                Paragraph::new(render_markdown(&entry.response_text))
                    .block(detail_block)
                    .wrap(Wrap { trim: false })
                    .render(panes[1], buf);
            }
            None => {
                Paragraph::new(Span::styled(
                    "Select an entry",
                    Style::default().fg(Color::DarkGray),
                ))
                .block(detail_block)
                .render(panes[1], buf);
            }
        }
    }
}
