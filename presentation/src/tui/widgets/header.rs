//! Header widget - title, page tabs, backend URL

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols,
    text::Line,
    widgets::{Block, Borders, Tabs, Widget},
};

use crate::tui::page::Page;
use crate::tui::state::TuiState;

pub struct HeaderWidget<'a> {
    state: &'a TuiState,
}

impl<'a> HeaderWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }
}

impl Widget for HeaderWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let titles: Vec<Line> = Page::ALL
            .iter()
            .map(|p| Line::from(format!(" {} ", p.title())))
            .collect();

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" ragview ")
            .title_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .title_bottom(Line::from(format!(" {} ", self.state.backend_url)).right_aligned());

        Tabs::new(titles)
            .block(block)
            .select(self.state.page.index())
            .style(Style::default().fg(Color::DarkGray))
            .highlight_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .divider(symbols::line::VERTICAL)
            .render(area, buf);
    }
}
