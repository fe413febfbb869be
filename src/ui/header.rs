use crate::page::NavBar;
use crate::ui::theme::{ACCENT, BACKGROUND, BODY_TEXT, FAINT_TEXT, GLOBAL_BORDER, HEADING_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Fixed navbar: brand on the left, in-page links with their shortcut.
pub struct Header<'a> {
    nav: &'a NavBar,
}

impl<'a> Header<'a> {
    pub fn new(nav: &'a NavBar) -> Self {
        Self { nav }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let mut spans = vec![
            Span::raw(" "),
            Span::styled(
                self.nav.brand.clone(),
                Style::default().fg(HEADING_TEXT).add_modifier(Modifier::BOLD),
            ),
            Span::styled(".", Style::default().fg(ACCENT)),
        ];
        for link in &self.nav.links {
            let key: String = link.label.chars().take(1).flat_map(char::to_lowercase).collect();
            spans.push(Span::styled("   ", Style::default().fg(BODY_TEXT)));
            spans.push(Span::styled(format!("[{key}] "), Style::default().fg(FAINT_TEXT)));
            spans.push(Span::styled(link.label, Style::default().fg(BODY_TEXT)));
        }

        Paragraph::new(Line::from(spans))
            .style(Style::default().bg(BACKGROUND))
            .block(
                Block::default()
                    .borders(Borders::BOTTOM)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
