//! Markdown rendering for the answer pane.
//!
//! Walks the pulldown-cmark event stream and produces styled ratatui
//! lines. Only the constructs the backend actually emits are handled:
//! headings, paragraphs, fenced code, lists, emphasis and inline code.

use pulldown_cmark::{CodeBlockKind, Event, Parser, Tag};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

/// Render markdown text into styled lines
pub fn render_markdown(text: &str) -> Vec<Line<'static>> {
    let mut renderer = Renderer::default();
    for event in Parser::new(text) {
        renderer.handle(event);
    }
    renderer.finish()
}

#[derive(Default)]
struct Renderer {
    lines: Vec<Line<'static>>,
    current: Vec<Span<'static>>,
    bold: bool,
    italic: bool,
    heading: bool,
    in_code_block: bool,
    list_depth: usize,
    /// Next ordinal per ordered-list level; None for bullet lists
    list_counters: Vec<Option<u64>>,
}

impl Renderer {
    fn handle(&mut self, event: Event) {
        match event {
            Event::Start(tag) => self.start_tag(tag),
            Event::End(tag) => self.end_tag(tag),
            Event::Text(text) => self.text(&text),
            Event::Code(code) => {
                self.current.push(Span::styled(
                    code.to_string(),
                    Style::default().fg(Color::Yellow),
                ));
            }
            Event::SoftBreak => self.current.push(Span::raw(" ")),
            Event::HardBreak => self.flush_line(),
            Event::Rule => {
                self.flush_line();
                self.lines.push(Line::from(Span::styled(
                    "─".repeat(40),
                    Style::default().fg(Color::DarkGray),
                )));
            }
            _ => {}
        }
    }

    fn start_tag(&mut self, tag: Tag) {
        match tag {
            Tag::Heading(..) => {
                self.blank_line();
                self.heading = true;
            }
            Tag::Paragraph => {
                if self.list_depth == 0 {
                    self.blank_line();
                }
            }
            Tag::CodeBlock(kind) => {
                self.blank_line();
                self.in_code_block = true;
                if let CodeBlockKind::Fenced(lang) = kind
                    && !lang.is_empty()
                {
                    self.lines.push(Line::from(Span::styled(
                        format!("  ({lang})"),
                        Style::default().fg(Color::DarkGray),
                    )));
                }
            }
            Tag::List(start) => {
                if self.list_depth == 0 {
                    self.blank_line();
                }
                self.list_depth += 1;
                self.list_counters.push(start);
            }
            Tag::Item => {
                let indent = "  ".repeat(self.list_depth);
                let marker = match self.list_counters.last_mut() {
                    Some(Some(n)) => {
                        let marker = format!("{indent}{n}. ");
                        *n += 1;
                        marker
                    }
                    _ => format!("{indent}- "),
                };
                self.current
                    .push(Span::styled(marker, Style::default().fg(Color::Cyan)));
            }
            Tag::Strong => self.bold = true,
            Tag::Emphasis => self.italic = true,
            _ => {}
        }
    }

    fn end_tag(&mut self, tag: Tag) {
        match tag {
            Tag::Heading(..) => {
                self.flush_line();
                self.heading = false;
            }
            Tag::Paragraph => self.flush_line(),
            Tag::CodeBlock(_) => {
                self.flush_line();
                self.in_code_block = false;
            }
            Tag::List(_) => {
                self.list_depth = self.list_depth.saturating_sub(1);
                self.list_counters.pop();
            }
            Tag::Item => self.flush_line(),
            Tag::Strong => self.bold = false,
            Tag::Emphasis => self.italic = false,
            _ => {}
        }
    }

    fn text(&mut self, text: &str) {
        if self.in_code_block {
            // Code blocks keep their own line structure
            for line in text.lines() {
                self.lines.push(Line::from(Span::styled(
                    format!("  {line}"),
                    Style::default().fg(Color::Green),
                )));
            }
            return;
        }
        self.current
            .push(Span::styled(text.to_string(), self.span_style()));
    }

    fn span_style(&self) -> Style {
        let mut style = Style::default();
        if self.heading {
            style = style.fg(Color::Cyan).add_modifier(Modifier::BOLD);
        }
        if self.bold {
            style = style.add_modifier(Modifier::BOLD);
        }
        if self.italic {
            style = style.add_modifier(Modifier::ITALIC);
        }
        style
    }

    fn flush_line(&mut self) {
        if !self.current.is_empty() {
            let spans = std::mem::take(&mut self.current);
            self.lines.push(Line::from(spans));
        }
    }

    /// Separator before a new block, skipped at the very top
    fn blank_line(&mut self) {
        self.flush_line();
        if !self.lines.is_empty() {
            self.lines.push(Line::default());
        }
    }

    fn finish(mut self) -> Vec<Line<'static>> {
        self.flush_line();
        self.lines
    }
}
