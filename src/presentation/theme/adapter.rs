//! Color space conversion for theme tints.

use coolor::{Hsl, Rgb};
use ratatui::style::Color;

/// The 16 standard ANSI colors in VGA palette order.
const ANSI_16: [(u8, u8, u8); 16] = [
    (0, 0, 0),
    (170, 0, 0),
    (0, 170, 0),
    (170, 85, 0),
    (0, 0, 170),
    (170, 0, 170),
    (0, 170, 170),
    (170, 170, 170),
    (85, 85, 85),
    (255, 85, 85),
    (85, 255, 85),
    (255, 255, 85),
    (85, 85, 255),
    (255, 85, 255),
    (85, 255, 255),
    (255, 255, 255),
];

/// Derives background tints from the configured accent color.
pub struct ColorConverter;

impl ColorConverter {
    /// Resolves any terminal color to RGB; `Reset` resolves to white.
    #[must_use]
    pub fn rgb(color: Color) -> (u8, u8, u8) {
        match color {
            Color::Rgb(r, g, b) => (r, g, b),
            Color::Indexed(i) => indexed_rgb(i),
            named => named_index(named).map_or((255, 255, 255), indexed_rgb),
        }
    }

    /// Returns `color` with its hue rotated by `degrees` and the given
    /// saturation and lightness.
    #[must_use]
    pub fn tint(color: Color, degrees: f32, saturation: f32, lightness: f32) -> Color {
        let (r, g, b) = Self::rgb(color);
        let mut hsl: Hsl = Rgb::new(r, g, b).to_hsl();
        hsl.h = (hsl.h + degrees).rem_euclid(360.0);
        hsl.s = saturation;
        hsl.l = lightness;
        let tinted: Rgb = hsl.to_rgb();
        Color::Rgb(tinted.r, tinted.g, tinted.b)
    }
}

const fn named_index(color: Color) -> Option<u8> {
    let index = match color {
        Color::Black => 0,
        Color::Red => 1,
        Color::Green => 2,
        Color::Yellow => 3,
        Color::Blue => 4,
        Color::Magenta => 5,
        Color::Cyan => 6,
        Color::Gray => 7,
        Color::DarkGray => 8,
        Color::LightRed => 9,
        Color::LightGreen => 10,
        Color::LightYellow => 11,
        Color::LightBlue => 12,
        Color::LightMagenta => 13,
        Color::LightCyan => 14,
        Color::White => 15,
        _ => return None,
    };
    Some(index)
}

fn indexed_rgb(i: u8) -> (u8, u8, u8) {
    match i {
        0..=15 => ANSI_16[usize::from(i)],
        16..=231 => {
            let cube = i - 16;
            let level = |c: u8| if c == 0 { 0 } else { c * 40 + 55 };
            (level(cube / 36), level((cube / 6) % 6), level(cube % 6))
        }
        _ => {
            let v = (i - 232) * 10 + 8;
            (v, v, v)
        }
    }
}
