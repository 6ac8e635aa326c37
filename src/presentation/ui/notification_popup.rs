//! Toast notification overlay.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::domain::{Notification, NotificationLevel};
use crate::presentation::theme::Theme;

const MAX_WIDTH: u16 = 60;
const MAX_HEIGHT: u16 = 8;
const TOP_OFFSET: u16 = 2;

/// Toast drawn in the top-right corner of the panel area.
pub struct NotificationPopup<'a> {
    notification: &'a Notification,
    theme: &'a Theme,
}

impl<'a> NotificationPopup<'a> {
    /// Creates popup for `notification`.
    #[must_use]
    pub const fn new(notification: &'a Notification, theme: &'a Theme) -> Self {
        Self {
            notification,
            theme,
        }
    }

    const fn icon(level: NotificationLevel) -> &'static str {
        match level {
            NotificationLevel::Info => "ℹ",
            NotificationLevel::Warn => "⚠️",
        }
    }

    fn popup_area(&self, area: Rect, title_width: usize) -> Rect {
        let message_width = u16::try_from(self.notification.message.width()).unwrap_or(u16::MAX);
        let title_width = u16::try_from(title_width).unwrap_or(0);

        let width = message_width
            .max(title_width)
            .saturating_add(4)
            .min(MAX_WIDTH.min(area.width.saturating_sub(2)));

        let inner_width = width.saturating_sub(2).max(1);
        let lines = message_width.div_ceil(inner_width);
        let height = lines.saturating_add(2).clamp(3, MAX_HEIGHT);

        let x = area.right().saturating_sub(width).saturating_sub(2);
        let y = area.y.saturating_add(TOP_OFFSET);
        area.intersection(Rect::new(x, y, width, height))
    }
}

impl Widget for NotificationPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let level = self.notification.level;
        let title = format!(" {} {} ", Self::icon(level), self.notification.title);

        let popup = self.popup_area(area, title.width());
        if popup.area() == 0 {
            return;
        }

        let color = match level {
            NotificationLevel::Info => self.theme.accent,
            NotificationLevel::Warn => Color::Yellow,
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(title)
            .style(Style::default().fg(color));

        let para = Paragraph::new(self.notification.message.as_str())
            .block(block)
            .wrap(Wrap { trim: true })
            .style(Style::default().add_modifier(Modifier::BOLD));

        Clear.render(popup, buf);
        para.render(popup, buf);
    }
}
