//! Input widget - query input with mode-aware prompt and block cursor

use crate::tui::mode::InputMode;
use crate::tui::state::TuiState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct InputWidget<'a> {
    state: &'a TuiState,
}

impl<'a> InputWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }
}

impl Widget for InputWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (prompt, text, cursor_pos, color, active) = match self.state.mode {
            InputMode::Insert => (
                "query> ",
                self.state.input.as_str(),
                self.state.cursor_pos,
                Color::Green,
                true,
            ),
            InputMode::Command => (
                ":",
                self.state.command_input.as_str(),
                self.state.command_cursor,
                Color::Yellow,
                true,
            ),
            InputMode::Normal => (
                "query> ",
                self.state.input.as_str(),
                self.state.cursor_pos,
                Color::DarkGray,
                false,
            ),
        };

        let prompt_span = Span::styled(
            prompt,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        );

        let border_style = if active {
            Style::default().fg(color)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Input ")
            .style(border_style);

        let line = if active {
            build_active_line(text, cursor_pos, color, prompt_span)
        } else {
            Line::from(vec![
                prompt_span,
                Span::styled(text.to_string(), Style::default().fg(color)),
            ])
        };

        Paragraph::new(line).block(block).render(area, buf);
    }
}

/// Line with a block cursor at the cursor position
fn build_active_line(
    text: &str,
    cursor_pos: usize,
    color: Color,
    prompt_span: Span<'static>,
) -> Line<'static> {
    let cursor_style = Style::default().fg(Color::Black).bg(color);
    let cursor_pos = cursor_pos.min(text.len());

    let before = &text[..cursor_pos];
    let after = &text[cursor_pos..];

    let mut spans = vec![prompt_span, Span::raw(before.to_string())];
    if after.is_empty() {
        // Cursor at end - block cursor on a space
        spans.push(Span::styled(" ", cursor_style));
    } else {
        let ch_len = after.chars().next().map(|c| c.len_utf8()).unwrap_or(1);
        spans.push(Span::styled(after[..ch_len].to_string(), cursor_style));
        if ch_len < after.len() {
            spans.push(Span::raw(after[ch_len..].to_string()));
        }
    }
    Line::from(spans)
}
