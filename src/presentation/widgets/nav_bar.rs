//! Route navigation bar.

use crate::domain::Route;
use crate::presentation::theme::Theme;
use crate::presentation::theme::adapter::ColorConverter;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

const ACTIVE_MARKER: &str = "▸";

/// Styles for the navigation bar.
pub struct NavBarStyle {
    /// Bar fill, tinted per route.
    pub background: Style,
    /// Application name on the left.
    pub app_name: Style,
    /// Inactive route controls.
    pub tab: Style,
    /// The current route control.
    pub active_tab: Style,
}

impl NavBarStyle {
    /// Derives the bar styles from the theme and the current route.
    #[must_use]
    pub fn from_theme(theme: &Theme, route: Route) -> Self {
        let tab_bg = ColorConverter::tint(theme.accent, 0.0, 0.4, 0.12);

        Self {
            background: Style::default().bg(theme.route_background(route)),
            app_name: Style::default()
                .bg(theme.accent)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            tab: Style::default().bg(tab_bg).fg(Color::Gray),
            active_tab: Style::default()
                .bg(theme.accent)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        }
    }
}

impl Default for NavBarStyle {
    fn default() -> Self {
        Self {
            background: Style::default(),
            app_name: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            tab: Style::default().fg(Color::DarkGray),
            active_tab: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        }
    }
}

/// Top navigation bar: one control per route, the current one marked active.
pub struct NavBar<'a> {
    app_name: &'a str,
    active: Route,
    style: NavBarStyle,
}

impl<'a> NavBar<'a> {
    /// Creates the bar with `active` marked as the current route.
    #[must_use]
    pub fn new(app_name: &'a str, active: Route) -> Self {
        Self {
            app_name,
            active,
            style: NavBarStyle::default(),
        }
    }

    /// Overrides the bar styles.
    #[must_use]
    pub const fn style(mut self, style: NavBarStyle) -> Self {
        self.style = style;
        self
    }

    fn tab_text(route: Route, active: bool) -> String {
        let marker = if active { ACTIVE_MARKER } else { " " };
        format!("{marker}{} {} ", route.index() + 1, route.nav_label())
    }

    fn build_spans(&self, width: u16) -> Vec<Span<'static>> {
        let mut spans = vec![
            Span::styled(
                format!(" {} ", self.app_name.to_uppercase()),
                self.style.app_name,
            ),
            Span::raw(" "),
        ];

        // Fall back to numbers only when the full labels do not fit.
        let full_width: usize = Route::ALL
            .iter()
            .map(|route| Self::tab_text(*route, false).width() + 1)
            .sum::<usize>()
            + self.app_name.width()
            + 3;
        let compact = full_width > usize::from(width);

        for route in Route::ALL {
            let active = route == self.active;
            let text = if compact {
                let marker = if active { ACTIVE_MARKER } else { " " };
                format!("{marker}{} ", route.index() + 1)
            } else {
                Self::tab_text(route, active)
            };
            let style = if active {
                self.style.active_tab
            } else {
                self.style.tab
            };
            spans.push(Span::styled(text, style));
            spans.push(Span::raw(" "));
        }

        spans
    }
}

impl Widget for NavBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        for x in area.left()..area.right() {
            buf[(x, area.y)]
                .set_char(' ')
                .set_style(self.style.background);
        }

        let line = Line::from(self.build_spans(area.width));
        Paragraph::new(line).render(Rect::new(area.x, area.y, area.width, 1), buf);
    }
}
