use ratatui::style::Color;

pub const BACKGROUND: Color = Color::Rgb(0x02, 0x06, 0x17);
pub const ACCENT: Color = Color::Rgb(0x22, 0xd3, 0xee);
pub const HEADING_TEXT: Color = Color::Rgb(0xf1, 0xf5, 0xf9);
pub const BODY_TEXT: Color = Color::Rgb(0xcb, 0xd5, 0xe1);
pub const MUTED_TEXT: Color = Color::Rgb(0x94, 0xa3, 0xb8);
pub const FAINT_TEXT: Color = Color::Rgb(0x64, 0x74, 0x8b);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x1e, 0x29, 0x3b);

/// Blends `color` toward the page background by `opacity` in [0, 1].
///
/// Only RGB colors are blended; named colors are returned unchanged.
pub fn fade(color: Color, opacity: f32) -> Color {
    let (Color::Rgb(r, g, b), Color::Rgb(br, bg, bb)) = (color, BACKGROUND) else {
        return color;
    };
    let t = opacity.clamp(0.0, 1.0);
    let mix = |from: u8, to: u8| {
        let (from, to) = (f32::from(from), f32::from(to));
        (from + (to - from) * t).round() as u8
    };
    Color::Rgb(mix(br, r), mix(bg, g), mix(bb, b))
}
