//! Theme construction from the configured accent.

use super::adapter::ColorConverter;
use crate::domain::Route;
use crate::domain::entities::TemperatureBand;
use ratatui::style::{Color, Modifier, Style};
use std::str::FromStr;

const DEFAULT_ACCENT: Color = Color::Rgb(0x7c, 0x5c, 0xff);
const ROUTE_HUE_STEP: f32 = 90.0;
const BACKGROUND_SATURATION: f32 = 0.35;
const BACKGROUND_LIGHTNESS: f32 = 0.07;

/// Colors and styles shared by every screen.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Configured accent color.
    pub accent: Color,
    /// Highlighted list row.
    pub selection_style: Style,
    /// Secondary text.
    pub dimmed_style: Style,
    pub base_style: Style,
    /// Degraded-mode warnings.
    pub warning_style: Style,
    /// Live data badge.
    pub live_style: Style,
    /// Demo data badge.
    pub fallback_style: Style,
    backgrounds: [Color; 4],
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_color(DEFAULT_ACCENT)
    }
}

impl Theme {
    /// Builds a theme from a color name, hex code or ANSI index.
    ///
    /// Unparseable input falls back to the default accent.
    #[must_use]
    pub fn new(accent_color_str: &str) -> Self {
        Self::from_color(parse_color(accent_color_str))
    }

    /// Builds a theme around an already parsed accent color.
    #[must_use]
    pub fn from_color(accent: Color) -> Self {
        let selection_bg = ColorConverter::tint(accent, 0.0, 0.3, 0.2);

        // Each route rotates the accent hue by a quarter turn, so the four
        // backgrounds are pairwise distinct.
        let backgrounds = Route::ALL.map(|route| {
            #[allow(clippy::cast_precision_loss)]
            let shift = route.index() as f32 * ROUTE_HUE_STEP;
            ColorConverter::tint(accent, shift, BACKGROUND_SATURATION, BACKGROUND_LIGHTNESS)
        });

        Self {
            accent,
            selection_style: Style::default().bg(selection_bg).fg(Color::White),
            dimmed_style: Style::default().fg(Color::DarkGray),
            base_style: Style::default().fg(Color::Reset),
            warning_style: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            live_style: Style::default().fg(Color::Black).bg(Color::Green),
            fallback_style: Style::default().fg(Color::Black).bg(Color::Yellow),
            backgrounds,
        }
    }

    /// Returns the background color keyed by `route`.
    #[must_use]
    pub const fn route_background(&self, route: Route) -> Color {
        self.backgrounds[route.index()]
    }

    /// Returns the display color of a temperature band.
    #[must_use]
    pub const fn temperature_color(band: TemperatureBand) -> Color {
        let (r, g, b) = band.rgb();
        Color::Rgb(r, g, b)
    }
}

/// Parses a color name, `#rrggbb`, `#rgb` or ANSI index; anything else
/// falls back to the default accent.
fn parse_color(s: &str) -> Color {
    let s = s.trim();
    Color::from_str(s)
        .ok()
        .or_else(|| expand_short_hex(s).and_then(|hex| Color::from_str(&hex).ok()))
        .unwrap_or(DEFAULT_ACCENT)
}

fn expand_short_hex(s: &str) -> Option<String> {
    let digits = s.strip_prefix('#')?;
    (digits.len() == 3 && digits.chars().all(|c| c.is_ascii_hexdigit()))
        .then(|| std::iter::once('#').chain(digits.chars().flat_map(|c| [c, c])).collect())
}
