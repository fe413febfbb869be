//! Lays the page out as styled terminal rows.
//!
//! Rows are page coordinates for the reveal controller: a block's bounds
//! are its first content row and its line count.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::config::SocialLink;
use crate::page::html::icon_glyph;
use crate::page::{Block, BlockContent, ContactBlock, Footer, Hero, Page, SectionHeading};
use crate::reveal::{BlockId, Bounds};
use crate::ui::theme::{ACCENT, BODY_TEXT, FAINT_TEXT, GLOBAL_BORDER, HEADING_TEXT, MUTED_TEXT};

/// CSS pixels per terminal row, used to convert reveal settings.
pub const ROW_HEIGHT_PX: f32 = 16.0;
/// Blank rows above and below each section.
pub const SECTION_PADDING: u16 = 2;
const MAX_CONTENT_WIDTH: u16 = 88;
const SIDE_MARGIN: u16 = 2;

#[derive(Debug, Clone, PartialEq)]
pub struct BlockLayout {
    pub id: BlockId,
    pub anchor: Option<&'static str>,
    /// First content row on the page.
    pub top: i64,
    pub lines: Vec<Line<'static>>,
}

impl BlockLayout {
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.top, self.lines.len() as u32)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageLayout {
    /// Columns left of the content column.
    pub inset: u16,
    pub content_width: u16,
    pub blocks: Vec<BlockLayout>,
    /// Row of the hero's scroll hint.
    pub scroll_hint_row: Option<i64>,
    pub footer_top: i64,
    pub footer: Vec<Line<'static>>,
    height: u32,
}

impl PageLayout {
    /// Lays out `page` for a body of `width` x `viewport_height` cells.
    /// The hero fills at least one viewport.
    pub fn build(page: &Page, width: u16, viewport_height: u16) -> Self {
        let content_width = width
            .saturating_sub(SIDE_MARGIN * 2)
            .min(MAX_CONTENT_WIDTH)
            .max(1);
        let inset = width.saturating_sub(content_width) / 2;
        let cols = usize::from(content_width);

        let mut row: i64 = 0;
        let mut blocks = Vec::with_capacity(page.blocks.len());
        let mut scroll_hint_row = None;

        for block in &page.blocks {
            let lines = block_lines(block, cols);
            if let BlockContent::Hero(_) = block.content {
                // Center the hero in the first screen, hint on its last row.
                let screen = i64::from(viewport_height.max(1));
                let len = lines.len() as i64;
                let top = ((screen - len) / 2).max(1);
                let hero_end = (top + len + 1).max(screen);
                scroll_hint_row = Some(hero_end - 1);
                row = hero_end;
                blocks.push(BlockLayout {
                    id: block.id,
                    anchor: block.anchor,
                    top,
                    lines,
                });
            } else {
                row += i64::from(SECTION_PADDING);
                let top = row;
                row += lines.len() as i64 + i64::from(SECTION_PADDING);
                blocks.push(BlockLayout {
                    id: block.id,
                    anchor: block.anchor,
                    top,
                    lines,
                });
            }
        }

        let footer = footer_lines(&page.footer, cols);
        let footer_top = row;
        let height = (footer_top + footer.len() as i64).max(0) as u32;

        Self {
            inset,
            content_width,
            blocks,
            scroll_hint_row,
            footer_top,
            footer,
            height,
        }
    }

    /// Total page height in rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn block(&self, id: BlockId) -> Option<&BlockLayout> {
        self.blocks.iter().find(|block| block.id == id)
    }

    /// Scroll offset that brings the section `anchor` to the top.
    pub fn anchor_row(&self, anchor: &str) -> Option<i64> {
        self.blocks
            .iter()
            .find(|block| block.anchor == Some(anchor))
            .map(|block| (block.top - i64::from(SECTION_PADDING)).max(0))
    }
}

fn block_lines(block: &Block, cols: usize) -> Vec<Line<'static>> {
    match &block.content {
        BlockContent::Hero(hero) => hero_lines(hero, cols),
        BlockContent::Experience { heading, entries } => {
            let mut lines = heading_lines(heading, cols);
            let rail = Span::styled("│ ", Style::default().fg(GLOBAL_BORDER));
            for (index, job) in entries.iter().enumerate() {
                if index > 0 {
                    lines.push(Line::from(rail.clone()));
                }
                lines.push(Line::from(vec![
                    rail.clone(),
                    Span::styled(job.role.clone(), heading_style()),
                ]));
                lines.push(Line::from(vec![
                    rail.clone(),
                    Span::styled(
                        format!("{} • {}", job.company, job.period),
                        Style::default().fg(ACCENT),
                    ),
                ]));
                for text in wrap(&job.desc, cols.saturating_sub(2)) {
                    lines.push(Line::from(vec![
                        rail.clone(),
                        Span::styled(text, Style::default().fg(MUTED_TEXT)),
                    ]));
                }
            }
            lines
        }
        BlockContent::Projects { heading, projects } => {
            let mut lines = heading_lines(heading, cols);
            for (index, project) in projects.iter().enumerate() {
                if index > 0 {
                    lines.push(Line::default());
                }
                let inner = cols.saturating_sub(4);
                let mut card = vec![Line::from(vec![
                    Span::styled("</> ", Style::default().fg(ACCENT)),
                    Span::styled(project.title.clone(), heading_style()),
                ])];
                for text in wrap(&project.desc, inner) {
                    card.push(Line::styled(text, Style::default().fg(MUTED_TEXT)));
                }
                if !project.tags.is_empty() {
                    let tags = project
                        .tags
                        .iter()
                        .map(|tag| format!("[{tag}]"))
                        .collect::<Vec<_>>()
                        .join(" ");
                    for text in wrap(&tags, inner) {
                        card.push(Line::styled(text, Style::default().fg(ACCENT)));
                    }
                }
                card.push(Line::styled(
                    format!("↗ {}", project.link),
                    Style::default().fg(FAINT_TEXT),
                ));
                lines.extend(boxed(card, cols));
            }
            lines
        }
        BlockContent::Skills { heading, skills } => {
            let mut lines = heading_lines(heading, cols);
            let chips = skills
                .iter()
                .map(|skill| format!(">_ {skill}"))
                .collect::<Vec<_>>()
                .join("   ");
            for text in wrap(&chips, cols) {
                lines.push(Line::styled(text, Style::default().fg(BODY_TEXT)));
            }
            lines
        }
        BlockContent::Contact(contact) => contact_lines(contact, cols),
    }
}

fn heading_style() -> Style {
    Style::default().fg(HEADING_TEXT).add_modifier(Modifier::BOLD)
}

fn heading_lines(heading: &SectionHeading, cols: usize) -> Vec<Line<'static>> {
    let label = format!("{} {}", heading.number, heading.title);
    let rule = cols.saturating_sub(label.width() + 1).min(24);
    vec![
        Line::from(vec![
            Span::styled(format!("{} ", heading.number), Style::default().fg(ACCENT)),
            Span::styled(heading.title, heading_style()),
            Span::styled(
                format!(" {}", "─".repeat(rule)),
                Style::default().fg(GLOBAL_BORDER),
            ),
        ]),
        Line::default(),
    ]
}

fn hero_lines(hero: &Hero, cols: usize) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::styled(hero.greeting, Style::default().fg(ACCENT)),
        Line::default(),
        Line::styled(format!("{}.", hero.name), heading_style()),
        Line::styled(
            format!("{}.", hero.role),
            Style::default().fg(MUTED_TEXT).add_modifier(Modifier::BOLD),
        ),
        Line::default(),
    ];
    for text in wrap(&hero.bio, cols.min(60)) {
        lines.push(Line::styled(text, Style::default().fg(MUTED_TEXT)));
    }
    if !hero.socials.is_empty() {
        lines.push(Line::default());
        lines.push(social_line(&hero.socials));
    }
    lines
}

fn social_line(socials: &[SocialLink]) -> Line<'static> {
    let mut spans = Vec::with_capacity(socials.len() * 3);
    for (index, social) in socials.iter().enumerate() {
        if index > 0 {
            spans.push(Span::raw("   "));
        }
        spans.push(Span::styled(
            format!("{} ", icon_glyph(social.icon)),
            Style::default().fg(ACCENT),
        ));
        spans.push(Span::styled(
            social.label.clone(),
            Style::default().fg(MUTED_TEXT),
        ));
    }
    Line::from(spans)
}

fn contact_lines(contact: &ContactBlock, cols: usize) -> Vec<Line<'static>> {
    let mut lines = vec![
        centered(Line::styled(contact.heading.clone(), heading_style()), cols),
        Line::default(),
    ];
    for text in wrap(&contact.message, cols.min(56)) {
        lines.push(centered(
            Line::styled(text, Style::default().fg(MUTED_TEXT)),
            cols,
        ));
    }
    if let Some(cta) = &contact.cta {
        lines.push(Line::default());
        lines.push(centered(
            Line::styled(format!("[ {} ]", cta.label), Style::default().fg(ACCENT)),
            cols,
        ));
        lines.push(centered(
            Line::styled(cta.href.clone(), Style::default().fg(FAINT_TEXT)),
            cols,
        ));
    }
    lines
}

fn footer_lines(footer: &Footer, cols: usize) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::styled("─".repeat(cols), Style::default().fg(GLOBAL_BORDER)),
        Line::default(),
        Line::from(vec![
            Span::styled(
                footer.name.clone(),
                Style::default().fg(BODY_TEXT).add_modifier(Modifier::BOLD),
            ),
            Span::styled(".", Style::default().fg(ACCENT)),
        ]),
        Line::styled(footer.role.clone(), Style::default().fg(FAINT_TEXT)),
    ];
    if !footer.socials.is_empty() {
        lines.push(Line::default());
        lines.push(social_line(&footer.socials));
    }
    lines.push(Line::default());
    lines.push(Line::styled(
        footer.copyright.clone(),
        Style::default().fg(FAINT_TEXT),
    ));
    lines.push(Line::default());
    lines
}

fn centered(line: Line<'static>, cols: usize) -> Line<'static> {
    let pad = cols.saturating_sub(line.width()) / 2;
    if pad == 0 {
        return line;
    }
    let mut spans = vec![Span::raw(" ".repeat(pad))];
    spans.extend(line.spans);
    Line::from(spans).style(line.style)
}

/// Draws a rounded border around `lines`, `cols` wide in total.
fn boxed(lines: Vec<Line<'static>>, cols: usize) -> Vec<Line<'static>> {
    let border = Style::default().fg(GLOBAL_BORDER);
    let inner = cols.saturating_sub(4);
    let mut out = Vec::with_capacity(lines.len() + 2);
    out.push(Line::styled(
        format!("╭{}╮", "─".repeat(cols.saturating_sub(2))),
        border,
    ));
    for line in lines {
        let pad = inner.saturating_sub(line.width());
        let mut spans = vec![Span::styled("│ ", border)];
        spans.extend(line.spans.into_iter().map(|span| span.patch_style(line.style)));
        spans.push(Span::raw(" ".repeat(pad)));
        spans.push(Span::styled(" │", border));
        out.push(Line::from(spans));
    }
    out.push(Line::styled(
        format!("╰{}╯", "─".repeat(cols.saturating_sub(2))),
        border,
    ));
    out
}

/// Greedy word wrap by display width. Words wider than `width` are split.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let mut word = word.to_string();
        while word.width() > width {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            let mut head = String::new();
            let mut rest = String::new();
            for ch in word.chars() {
                if rest.is_empty() && head.width() + ch.width().unwrap_or(0) <= width {
                    head.push(ch);
                } else {
                    rest.push(ch);
                }
            }
            if head.is_empty() {
                // A single character wider than the column.
                let mut chars = rest.chars();
                head.extend(chars.next());
                rest = chars.collect();
            }
            lines.push(head);
            word = rest;
        }
        if word.is_empty() {
            continue;
        }

        let needed = if current.is_empty() {
            word.width()
        } else {
            current.width() + 1 + word.width()
        };
        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(&word);
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Portfolio;

    #[test]
    fn wrap_respects_width() {
        let lines = wrap("the quick brown fox jumps over the lazy dog", 10);
        assert!(lines.iter().all(|line| line.width() <= 10), "{lines:?}");
        assert_eq!(lines.join(" "), "the quick brown fox jumps over the lazy dog");
    }

    #[test]
    fn wrap_splits_long_words() {
        assert_eq!(wrap("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
        assert!(wrap("", 10).is_empty());
    }

    #[test]
    fn hero_fills_first_screen() {
        let page = Page::build(&Portfolio::default());
        let layout = PageLayout::build(&page, 100, 40);
        let about = layout.block(BlockId(1)).unwrap();
        assert!(about.top >= 40);
        assert!(layout.scroll_hint_row.unwrap() < 40);
    }

    #[test]
    fn blocks_do_not_overlap() {
        let page = Page::build(&Portfolio::default());
        let layout = PageLayout::build(&page, 80, 24);
        for pair in layout.blocks.windows(2) {
            assert!(pair[0].bounds().bottom() <= pair[1].top);
        }
        assert!(layout.footer_top >= layout.blocks.last().unwrap().bounds().bottom());
        assert_eq!(
            i64::from(layout.height()),
            layout.footer_top + layout.footer.len() as i64
        );
    }

    #[test]
    fn duplicate_project_titles_both_laid_out() {
        let page = Page::build(&Portfolio::default());
        let layout = PageLayout::build(&page, 80, 24);
        let projects = layout.block(BlockId(2)).unwrap();
        let titles = projects
            .lines
            .iter()
            .filter(|line| line.to_string().contains("Ecommerce Website"))
            .count();
        assert_eq!(titles, 2);
    }

    #[test]
    fn anchor_row_includes_padding() {
        let page = Page::build(&Portfolio::default());
        let layout = PageLayout::build(&page, 80, 24);
        let contact = layout.block(BlockId(4)).unwrap();
        assert_eq!(
            layout.anchor_row("contact"),
            Some(contact.top - i64::from(SECTION_PADDING))
        );
    }
}
