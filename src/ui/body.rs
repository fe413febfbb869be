//! Scrolling page body.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Widget;
use std::time::Instant;

use crate::reveal::RevealController;
use crate::ui::page_layout::PageLayout;
use crate::ui::theme::{fade, BACKGROUND, BODY_TEXT, FAINT_TEXT};

/// Below this opacity a block is not drawn at all.
const MIN_OPACITY: f32 = 0.01;

/// Draws the rows of the page visible at `offset`, each revealable block
/// with the style its reveal transition has at `now`.
pub struct PageBody<'a> {
    layout: &'a PageLayout,
    reveals: &'a RevealController,
    offset: i64,
    now: Instant,
    hint_opacity: f32,
}

impl<'a> PageBody<'a> {
    pub fn new(
        layout: &'a PageLayout,
        reveals: &'a RevealController,
        offset: i64,
        now: Instant,
    ) -> Self {
        Self {
            layout,
            reveals,
            offset,
            now,
            hint_opacity: 1.0,
        }
    }

    pub fn hint_opacity(mut self, opacity: f32) -> Self {
        self.hint_opacity = opacity;
        self
    }

    fn draw_line(
        &self,
        area: Rect,
        buf: &mut Buffer,
        page_row: i64,
        line: &Line<'_>,
        opacity: f32,
    ) {
        let row = page_row - self.offset;
        if row < 0 || row >= i64::from(area.height) {
            return;
        }
        let x = area.x + self.layout.inset.min(area.width);
        let width = area.width.saturating_sub(x - area.x).min(self.layout.content_width);
        let faded = fade_line(line, opacity);
        buf.set_line(x, area.y + row as u16, &faded, width);
    }
}

impl Widget for PageBody<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        buf.set_style(area, Style::default().bg(BACKGROUND));

        for block in &self.layout.blocks {
            let Some(style) = self.reveals.paint_style(block.id, self.now) else {
                continue;
            };
            if style.opacity < MIN_OPACITY {
                continue;
            }
            let top = block.top + style.offset.round() as i64;
            for (index, line) in block.lines.iter().enumerate() {
                self.draw_line(area, buf, top + index as i64, line, style.opacity);
            }
        }

        if let Some(row) = self.layout.scroll_hint_row {
            if self.hint_opacity >= MIN_OPACITY {
                let pad = usize::from(self.layout.content_width / 2);
                let hint = Line::from(vec![
                    Span::raw(" ".repeat(pad)),
                    Span::styled("⌄", Style::default().fg(FAINT_TEXT)),
                ]);
                self.draw_line(area, buf, row, &hint, self.hint_opacity);
            }
        }

        for (index, line) in self.layout.footer.iter().enumerate() {
            self.draw_line(area, buf, self.layout.footer_top + index as i64, line, 1.0);
        }
    }
}

/// Copies `line`, blending every foreground toward the background.
fn fade_line(line: &Line<'_>, opacity: f32) -> Line<'static> {
    let spans = line
        .spans
        .iter()
        .map(|span| {
            let style = line.style.patch(span.style);
            let fg = style.fg.unwrap_or(BODY_TEXT);
            Span::styled(span.content.to_string(), style.fg(fade(fg, opacity)))
        })
        .collect::<Vec<_>>();
    Line::from(spans)
}
