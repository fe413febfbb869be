use crate::ui::app::App;
use crate::ui::body::PageBody;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use ratatui::widgets::Clear;
use ratatui::Frame;
use std::time::Instant;

pub fn draw(frame: &mut Frame<'_>, app: &App, now: Instant) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let header_widget = Header::new(&app.page().nav);
    frame.render_widget(header_widget.widget(), header);

    frame.render_widget(Clear, body);
    let scroll = app.scroll_state();
    frame.render_widget(
        PageBody::new(app.layout(), app.reveals(), scroll.offset, now)
            .hint_opacity(app.scroll_hint_opacity(now)),
        body,
    );

    let percent = if scroll.max_offset() == 0 {
        100
    } else {
        (scroll.offset * 100 / scroll.max_offset()) as u16
    };
    let footer_widget = Footer::new(percent);
    frame.render_widget(footer_widget.widget(footer), footer);
}
