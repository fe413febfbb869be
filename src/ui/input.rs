use crate::ui::app::App;
use crate::ui::scroll::ScrollIntent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind};
use std::time::Instant;

pub fn handle_key(app: &mut App, key: KeyEvent, now: Instant) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    let intent = match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            app.request_quit();
            return;
        }
        KeyCode::Char('j') | KeyCode::Down => ScrollIntent::LineDown,
        KeyCode::Char('k') | KeyCode::Up => ScrollIntent::LineUp,
        KeyCode::PageDown | KeyCode::Char(' ') => ScrollIntent::PageDown,
        KeyCode::PageUp => ScrollIntent::PageUp,
        KeyCode::Char('g') | KeyCode::Home => ScrollIntent::Top,
        KeyCode::Char('G') | KeyCode::End => ScrollIntent::Bottom,
        KeyCode::Char(c) => {
            if let Some(anchor) = anchor_for_key(app, c) {
                app.jump_to_anchor(anchor, now);
            }
            return;
        }
        _ => return,
    };
    app.scroll(intent, now);
}

pub fn handle_mouse(app: &mut App, mouse: MouseEvent, now: Instant) {
    let intent = match mouse.kind {
        MouseEventKind::ScrollDown => ScrollIntent::LineDown,
        MouseEventKind::ScrollUp => ScrollIntent::LineUp,
        _ => return,
    };
    app.scroll(intent, now);
}

/// Navbar shortcut: the lowercase first letter of each link label.
fn anchor_for_key(app: &App, c: char) -> Option<&'static str> {
    app.page()
        .nav
        .links
        .iter()
        .find(|link| {
            link.label
                .chars()
                .next()
                .is_some_and(|first| first.to_ascii_lowercase() == c)
        })
        .map(|link| link.anchor)
}

fn is_ctrl_char(key: KeyEvent, ch: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char(c) if c.eq_ignore_ascii_case(&ch))
}
