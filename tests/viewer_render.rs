use folio::config::Portfolio;
use folio::reveal::BlockId;
use folio::ui::app::App;
use folio::ui::layout::{FOOTER_HEIGHT, HEADER_HEIGHT};
use folio::ui::render::draw;
use folio::ui::scroll::ScrollIntent;
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::time::{Duration, Instant};

const COLS: u16 = 80;
const ROWS: u16 = 24;

fn body_rows() -> u16 {
    ROWS - HEADER_HEIGHT - FOOTER_HEIGHT
}

fn screen_text(app: &App, now: Instant) -> String {
    let mut terminal = Terminal::new(TestBackend::new(COLS, ROWS)).unwrap();
    terminal.draw(|frame| draw(frame, app, now)).unwrap();

    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

#[test]
fn hero_is_drawn_on_first_frame() {
    let now = Instant::now();
    let app = App::new(&Portfolio::default(), COLS, body_rows(), now);

    let text = screen_text(&app, now + Duration::from_secs(1));
    assert!(text.contains("Hi, my name is"), "screen was:\n{text}");
    assert!(text.contains("Chaimae Mardi."));
    assert!(text.contains("About"));
}

#[test]
fn hidden_section_is_not_drawn_until_revealed() {
    let now = Instant::now();
    let mut app = App::new(&Portfolio::default(), COLS, body_rows(), now);

    // Step down until the projects section sits inside the viewport.
    let projects_top = app.layout().anchor_row("projects").unwrap();
    for _ in 0..projects_top {
        app.scroll(ScrollIntent::LineDown, now);
        if app.reveals().state(BlockId(2)).unwrap().is_visible() {
            break;
        }
    }
    assert!(app.reveals().state(BlockId(2)).unwrap().is_visible());

    // Long after the reveal the block is fully settled.
    let settled = screen_text(&app, now + Duration::from_secs(5));
    assert!(settled.contains("Featured Projects") || settled.contains("Ecommerce Website"));

    // The contact section further down has not been revealed yet.
    assert!(!app.reveals().state(BlockId(4)).unwrap().is_visible());
    assert!(!settled.contains("Say Hello"));
}
