//! Dashboard page body - backend system information

use ragview_domain::PhaseStatus;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::tui::state::TuiState;

pub struct DashboardPageWidget<'a> {
    state: &'a TuiState,
}

impl<'a> DashboardPageWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }
}

impl Widget for DashboardPageWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().borders(Borders::ALL).title(" System ");

        let lines = match &self.state.system {
            PhaseStatus::NotStarted | PhaseStatus::Loading => vec![Line::from(Span::styled(
                "Loading system information...",
                Style::default().fg(Color::Yellow),
            ))],
            PhaseStatus::Failed(msg) => vec![Line::from(Span::styled(
                msg.clone(),
                Style::default().fg(Color::Red),
            ))],
            PhaseStatus::Loaded(info) => vec![
                entry("Documents indexed", info.document_count.to_string()),
                entry("Collection", info.collection_name.clone()),
                entry("Persist directory", info.persist_directory.clone()),
                entry("Chunk size", info.chunk_size.to_string()),
                entry("Chunk overlap", info.chunk_overlap.to_string()),
                entry("Top-k results", info.top_k_results.to_string()),
            ],
        };

        Paragraph::new(lines).block(block).render(area, buf);
    }
}

fn entry(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{label:<20}"),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(value),
    ])
}
