//! Documents page body - table of indexed documents

use ragview_domain::PhaseStatus;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Row, StatefulWidget, Table, TableState, Widget},
};

use crate::tui::state::TuiState;

pub struct DocumentsPageWidget<'a> {
    state: &'a TuiState,
}

impl<'a> DocumentsPageWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }
}

impl Widget for DocumentsPageWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Documents ")
            .title_bottom(Line::from(" :upload <title> <path> ").right_aligned());

        let documents = match &self.state.documents {
            PhaseStatus::NotStarted | PhaseStatus::Loading => {
                Paragraph::new(Span::styled(
                    "Loading documents...",
                    Style::default().fg(Color::Yellow),
                ))
                .block(block)
                .render(area, buf);
                return;
            }
            PhaseStatus::Failed(msg) => {
                Paragraph::new(Span::styled(msg.clone(), Style::default().fg(Color::Red)))
                    .block(block)
                    .render(area, buf);
                return;
            }
            PhaseStatus::Loaded(documents) => documents,
        };

        if documents.is_empty() {
            Paragraph::new(Span::styled(
                "No documents indexed yet",
                Style::default().fg(Color::DarkGray),
            ))
            .block(block)
            .render(area, buf);
            return;
        }

        let header = Row::new(["Title", "File", "Type", "Uploaded", "Chunks"])
            .style(Style::default().add_modifier(Modifier::BOLD));

        let rows: Vec<Row> = documents
            .iter()
            .map(|doc| {
                Row::new(vec![
                    doc.title.clone(),
                    doc.file_name.clone(),
                    doc.file_type.clone(),
                    doc.upload_date.clone(),
                    doc.chunk_count.to_string(),
                ])
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Percentage(35),
                Constraint::Percentage(25),
                Constraint::Length(6),
                Constraint::Length(20),
                Constraint::Length(6),
            ],
        )
        .header(header)
        .block(block)
        .row_highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("> ");

        let mut table_state = TableState::default();
        table_state.select(Some(self.state.documents_selected));
        StatefulWidget::render(table, area, buf, &mut table_state);
    }
}
