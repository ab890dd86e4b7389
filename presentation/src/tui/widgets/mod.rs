//! TUI widgets - ratatui components for the main layout
//!
//! Layout:
//! ┌── Header (3, includes page tabs) ────────────────┐
//! ├── Page body (flex) ──────────────────────────────┤
//! ├── Input (3, Query page only) ────────────────────┤
//! └── StatusBar (1) ─────────────────────────────────┘

pub mod dashboard_page;
pub mod documents_page;
pub mod header;
pub mod history_page;
pub mod input;
pub mod query_page;
pub mod status_bar;

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Compute the main layout regions from a terminal area
pub struct MainLayout {
    pub header: Rect,
    pub body: Rect,
    /// None when the current page has no input area
    pub input: Option<Rect>,
    pub status_bar: Rect,
}

impl MainLayout {
    /// `input_lines` is the number of text lines in the input buffer;
    /// the input area grows from 3 (1 line + borders) up to
    /// `max_input_height` + 2, capped against the terminal height.
    pub fn compute(area: Rect, show_input: bool, input_lines: u16, max_input_height: u16) -> Self {
        let header_h: u16 = 3;
        let status_h: u16 = 1;

        if show_input {
            let max_for_input = area.height.saturating_sub(header_h + status_h);
            let desired_h = (input_lines + 2).clamp(3, max_input_height + 2);
            let input_h = desired_h.min(max_for_input).max(1);

            let vertical = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(header_h),
                    Constraint::Fill(1),
                    Constraint::Length(input_h),
                    Constraint::Length(status_h),
                ])
                .split(area);

            Self {
                header: vertical[0],
                body: vertical[1],
                input: Some(vertical[2]),
                status_bar: vertical[3],
            }
        } else {
            let vertical = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(header_h),
                    Constraint::Fill(1),
                    Constraint::Length(status_h),
                ])
                .split(area);

            Self {
                header: vertical[0],
                body: vertical[1],
                input: None,
                status_bar: vertical[2],
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_with_input() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = MainLayout::compute(area, true, 1, 5);
        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.input.unwrap().height, 3);
        assert_eq!(layout.status_bar.height, 1);
        assert_eq!(layout.body.height, 24 - 3 - 3 - 1);
    }

    #[test]
    fn test_layout_without_input() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = MainLayout::compute(area, false, 1, 5);
        assert!(layout.input.is_none());
        assert_eq!(layout.body.height, 24 - 3 - 1);
    }

    #[test]
    fn test_input_height_capped_by_config() {
        let area = Rect::new(0, 0, 80, 40);
        let layout = MainLayout::compute(area, true, 20, 5);
        assert_eq!(layout.input.unwrap().height, 7); // 5 lines + borders
    }
}
