use crate::config::Portfolio;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, handle_mouse};
use crate::ui::layout::body_rect;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use ratatui::layout::Rect;
use std::io;
use std::time::{Duration, Instant};

/// Redraw interval while transitions are running.
const ANIMATION_TICK: Duration = Duration::from_millis(33);

/// Opens the terminal viewer on `portfolio` until the user quits.
pub fn run(portfolio: &Portfolio) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new(ANIMATION_TICK);

    let (cols, rows) = crossterm::terminal::size().unwrap_or((80, 24));
    let body = body_rect(Rect::new(0, 0, cols, rows));
    let (body_cols, body_rows) = (body.width.max(1), body.height.max(1));
    let mut app = App::new(portfolio, body_cols, body_rows, Instant::now());
    tracing::info!(cols, rows, "viewer started");

    let mut dirty = true;
    loop {
        let now = Instant::now();
        if dirty || app.is_animating(now) {
            terminal.draw(|frame| draw(frame, &app, now))?;
            dirty = false;
        }
        if app.should_quit() {
            break;
        }

        match events.next(ANIMATION_TICK) {
            Ok(AppEvent::Key(key)) => {
                handle_key(&mut app, key, Instant::now());
                dirty = true;
            }
            Ok(AppEvent::Mouse(mouse)) => {
                handle_mouse(&mut app, mouse, Instant::now());
                dirty = true;
            }
            Ok(AppEvent::Tick) => {}
            Ok(AppEvent::Resize(cols, rows)) => {
                let body = body_rect(Rect::new(0, 0, cols, rows));
                app.on_resize(body.width.max(1), body.height.max(1), Instant::now());
                dirty = true;
            }
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    tracing::info!("viewer closed");
    Ok(())
}
