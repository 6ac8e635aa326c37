//! Home route.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Text},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use crate::domain::Route;
use crate::presentation::theme::Theme;

const HEADING: &str = "Главное меню";
const WELCOME: &str = "Добро пожаловать!";
const HINT: &str = "Выберите раздел из меню навигации";

/// Static welcome panel.
pub struct HomeScreen<'a> {
    theme: &'a Theme,
}

impl<'a> HomeScreen<'a> {
    /// Creates the welcome panel.
    #[must_use]
    pub const fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    fn lines(&self) -> Text<'static> {
        let mut lines = vec![
            Line::styled(
                HEADING,
                Style::default()
                    .fg(self.theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Line::default(),
            Line::styled(WELCOME, Style::default().add_modifier(Modifier::BOLD)),
            Line::styled(HINT, self.theme.dimmed_style),
            Line::default(),
        ];

        lines.extend(
            Route::ALL
                .iter()
                .filter(|route| route.has_panel_data())
                .map(|route| {
                    Line::styled(
                        format!("F{}  {}", route.index() + 1, route.nav_label()),
                        self.theme.base_style,
                    )
                }),
        );

        Text::from(lines).centered()
    }
}

impl Widget for HomeScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text = self.lines();
        let height = u16::try_from(text.lines.len()).unwrap_or(u16::MAX) + 2;
        let width = u16::try_from(text.width()).unwrap_or(u16::MAX) + 8;

        let [_, row, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(height.min(area.height)),
            Constraint::Fill(1),
        ])
        .areas(area);
        let [_, card, _] = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Length(width.min(area.width)),
            Constraint::Fill(1),
        ])
        .areas(row);

        Paragraph::new(text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(self.theme.dimmed_style),
            )
            .render(card, buf);
    }
}
