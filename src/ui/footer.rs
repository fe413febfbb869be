use crate::ui::theme::{BACKGROUND, FAINT_TEXT, GLOBAL_BORDER};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Key hint bar with scroll progress.
pub struct Footer {
    percent: u16,
}

impl Footer {
    pub fn new(percent: u16) -> Self {
        Self {
            percent: percent.min(100),
        }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let hints = " j/k: Scroll │ Space/PgUp: Page │ g/G: Top/Bottom │ q: Quit";
        let status = format!("{:>3}%  v{} ", self.percent, VERSION);

        let padding = usize::from(area.width).saturating_sub(hints.width() + status.width());

        let text_style = Style::default().fg(FAINT_TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(status, text_style),
        ]);

        let border = Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(GLOBAL_BORDER));
        Paragraph::new(line)
            .style(text_style.bg(BACKGROUND))
            .block(border)
    }
}
