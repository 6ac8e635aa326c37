use crate::domain::keybinding::Keybind;
use crate::presentation::theme::Theme;
use crate::presentation::theme::adapter::ColorConverter;
use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

/// Static footer line.
pub const FOOTER_TEXT: &str = "Данная страница сделана в рамках курса по web разработке";

/// Styles for the footer bar.
pub struct FooterBarStyle {
    pub background: Style,
    /// Key hint descriptions.
    pub label_style: Style,
    /// Key names.
    pub key_style: Style,
    /// Right-aligned version text.
    pub info: Style,
}

impl FooterBarStyle {
    /// Derives the footer styles from the theme accent.
    #[must_use]
    pub fn from_theme(theme: &Theme) -> Self {
        let key_bg = ColorConverter::tint(theme.accent, 0.0, 0.5, 0.08);

        Self {
            label_style: Style::default()
                .bg(theme.accent)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            key_style: Style::default().bg(key_bg).fg(Color::White),
            info: theme.dimmed_style,
            ..Self::default()
        }
    }
}

impl Default for FooterBarStyle {
    fn default() -> Self {
        Self {
            background: Style::default(),
            label_style: Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            key_style: Style::default().fg(Color::White).bg(Color::DarkGray),
            info: Style::default().fg(Color::DarkGray),
        }
    }
}

/// Footer with key hints, the course line and version info.
pub struct FooterBar<'a> {
    keybindings: &'a [Keybind],
    right_info: Option<&'a str>,
    style: FooterBarStyle,
}

impl<'a> FooterBar<'a> {
    /// Creates the footer for the given key hints.
    #[must_use]
    pub fn new(keybindings: &'a [Keybind]) -> Self {
        Self {
            keybindings,
            right_info: None,
            style: FooterBarStyle::default(),
        }
    }

    /// Sets the right-aligned info text.
    #[must_use]
    pub const fn right_info(mut self, info: Option<&'a str>) -> Self {
        self.right_info = info;
        self
    }

    /// Overrides the footer styles.
    #[must_use]
    pub const fn style(mut self, style: FooterBarStyle) -> Self {
        self.style = style;
        self
    }

    fn format_key(key: &crossterm::event::KeyEvent) -> String {
        use std::fmt::Write;
        let mut s = String::new();
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            s.push_str("C-");
        }
        if key.modifiers.contains(KeyModifiers::SHIFT) && !matches!(key.code, KeyCode::Char(_)) {
            s.push_str("S-");
        }

        match key.code {
            KeyCode::Char(c) => s.push(c),
            KeyCode::Esc => s.push_str("Esc"),
            KeyCode::Tab => s.push_str("Tab"),
            KeyCode::BackTab => s.push_str("S-Tab"),
            KeyCode::Up => s.push('↑'),
            KeyCode::Down => s.push('↓'),
            KeyCode::F(n) => {
                let _ = write!(s, "F{n}");
            }
            _ => {
                let _ = write!(s, "{:?}", key.code);
            }
        }
        s
    }

    fn build_left_spans(&self) -> Vec<Span<'_>> {
        let mut spans = Vec::new();

        for (i, binding) in self
            .keybindings
            .iter()
            .filter(|k| k.visible_in_bar)
            .enumerate()
        {
            if i > 0 {
                spans.push(Span::raw(" "));
            }

            spans.push(Span::styled(
                format!(" {} ", binding.label),
                self.style.label_style,
            ));

            let key_text = binding
                .key_display
                .as_deref()
                .map_or_else(|| Self::format_key(&binding.key), ToString::to_string);

            spans.push(Span::styled(format!(" {key_text} "), self.style.key_style));
        }

        spans
    }
}

impl Widget for FooterBar<'_> {
    #[allow(clippy::cast_possible_truncation)]
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        for x in area.left()..area.right() {
            buf[(x, area.y)]
                .set_char(' ')
                .set_style(self.style.background);
        }

        let left_line = Line::from(self.build_left_spans());
        let right_width = self.right_info.map_or(0, |s| s.width() as u16);
        let left_width = area.width.saturating_sub(right_width + 1);

        Paragraph::new(left_line).render(Rect::new(area.x, area.y, left_width, 1), buf);

        if let Some(info) = self.right_info
            && right_width < area.width
        {
            let right_x = area.right().saturating_sub(right_width);
            let right_area = Rect::new(right_x, area.y, right_width, 1);
            Paragraph::new(Line::from(Span::styled(info, self.style.info))).render(right_area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Route;
    use crate::domain::keybinding::keybinds_for;
    use crossterm::event::KeyEvent;

    #[test]
    fn test_format_key() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(FooterBar::format_key(&ctrl_c), "C-c");
        assert_eq!(
            FooterBar::format_key(&KeyEvent::new(KeyCode::F(2), KeyModifiers::NONE)),
            "F2"
        );
    }

    #[test]
    fn test_hidden_bindings_are_not_listed() {
        let binds = keybinds_for(Route::Films);
        let footer = FooterBar::new(&binds);
        let text: String = footer
            .build_left_spans()
            .iter()
            .map(|span| span.content.to_string())
            .collect();

        assert!(text.contains("Фильм"));
        assert!(text.contains("↑/↓"));
        assert!(!text.contains("Вверх"));
        assert!(!text.contains("Назад"));
    }
}
