//! Panel status line: data provenance, degraded-mode warning and refresh state.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::domain::{PanelView, Provenance};
use crate::presentation::theme::Theme;

const REFRESHING_LABEL: &str = "Обновление...";

/// Status bar severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    /// Live data.
    Success,
    /// Fallback data.
    Warning,
}

impl StatusLevel {
    const fn from_provenance(provenance: Provenance) -> Self {
        match provenance {
            Provenance::Live => Self::Success,
            Provenance::Fallback => Self::Warning,
        }
    }
}

/// Status bar widget.
#[derive(Debug, Clone)]
pub struct StatusBar {
    badge: &'static str,
    warning: Option<String>,
    updated: Option<String>,
    refreshing: bool,
    level: StatusLevel,
}

impl StatusBar {
    /// Builds the status line for a panel view.
    #[must_use]
    pub fn from_view<T>(view: &PanelView<'_, T>) -> Self {
        let badge = match view.provenance {
            Provenance::Live => " АКТУАЛЬНО ",
            Provenance::Fallback => " ДЕМО ",
        };

        Self {
            badge,
            warning: view.warning.map(|w| format!("⚠️ {w}")),
            updated: None,
            refreshing: view.refreshing,
            level: StatusLevel::from_provenance(view.provenance),
        }
    }

    /// Sets the "last updated" label.
    #[must_use]
    pub fn updated(mut self, label: Option<String>) -> Self {
        self.updated = label;
        self
    }

    /// Returns rows the bar occupies.
    #[must_use]
    pub const fn height(&self) -> u16 {
        if self.warning.is_some() { 2 } else { 1 }
    }

    /// Renders with theme styles.
    pub fn render_themed(&self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        let badge_style = match self.level {
            StatusLevel::Success => theme.live_style,
            StatusLevel::Warning => theme.fallback_style,
        };

        let mut spans = vec![Span::styled(self.badge, badge_style)];
        if let Some(updated) = &self.updated {
            spans.push(Span::raw(" "));
            spans.push(Span::styled(updated.as_str(), theme.dimmed_style));
        }
        if self.refreshing {
            spans.push(Span::raw(" "));
            spans.push(Span::styled(
                REFRESHING_LABEL,
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::ITALIC),
            ));
        }

        let mut lines = vec![Line::from(spans)];
        if let Some(warning) = &self.warning {
            lines.push(Line::from(Span::styled(warning.as_str(), theme.warning_style)));
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}

impl Widget for &StatusBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.render_themed(area, buf, &Theme::default());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(bar: &StatusBar) -> String {
        let area = Rect::new(0, 0, 80, 2);
        let mut buf = Buffer::empty(area);
        bar.render(area, &mut buf);
        (0..area.height)
            .flat_map(|y| (0..area.width).map(move |x| (x, y)))
            .map(|pos| buf[pos].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_live_view_has_no_warning() {
        let view = PanelView {
            data: &1,
            provenance: Provenance::Live,
            warning: None,
            refreshing: false,
        };
        let bar = StatusBar::from_view(&view);

        assert_eq!(bar.level, StatusLevel::Success);
        assert_eq!(bar.height(), 1);
        assert!(rendered(&bar).contains("АКТУАЛЬНО"));
    }

    #[test]
    fn test_fallback_view_shows_warning_and_refresh_marker() {
        let view = PanelView {
            data: &1,
            provenance: Provenance::Fallback,
            warning: Some("нет сети"),
            refreshing: true,
        };
        let bar = StatusBar::from_view(&view).updated(Some("Демо-данные: 10:00".to_string()));
        let text = rendered(&bar);

        assert_eq!(bar.level, StatusLevel::Warning);
        assert!(text.contains("ДЕМО"));
        assert!(text.contains("Обновление..."));
        assert!(text.contains("нет сети"));
    }
}
