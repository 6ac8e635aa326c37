//! Films route: popular titles with a detail card.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, BorderType, Borders, List, ListItem, ListState, Paragraph, StatefulWidget, Widget,
        Wrap,
    },
};

use super::panel::{render_heading, view_or_spinner};
use super::utils::{spinner_frame, truncate_to_width};
use crate::domain::PanelState;
use crate::domain::entities::{FilmCard, PosterStatus};
use crate::presentation::theme::Theme;

const TITLE: &str = "Топ российские фильмы";
const LOADING: &str = "Загрузка фильмов...";
const EMPTY: &str = "Фильмы не найдены";

/// Selection within the films list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilmsScreenState {
    selected: usize,
}

impl FilmsScreenState {
    /// Returns selected index.
    #[must_use]
    pub const fn selected(&self) -> usize {
        self.selected
    }

    /// Moves selection down, stopping at the last card.
    ///
    /// Returns whether the selection changed.
    pub fn select_next(&mut self, len: usize) -> bool {
        if self.selected + 1 >= len {
            return false;
        }
        self.selected += 1;
        true
    }

    /// Moves selection up, stopping at the first card.
    pub fn select_previous(&mut self) -> bool {
        if self.selected == 0 {
            return false;
        }
        self.selected -= 1;
        true
    }

    /// Keeps the selection inside a list of `len` cards.
    pub fn clamp(&mut self, len: usize) {
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    /// Resets to the first card.
    pub fn reset(&mut self) {
        self.selected = 0;
    }
}

/// Films list with a detail card for the selection.
pub struct FilmsScreen<'a> {
    state: &'a PanelState<Vec<FilmCard>>,
    selection: FilmsScreenState,
    theme: &'a Theme,
    tick: u64,
}

impl<'a> FilmsScreen<'a> {
    /// Creates the screen over the films panel and the current selection.
    #[must_use]
    pub const fn new(
        state: &'a PanelState<Vec<FilmCard>>,
        selection: FilmsScreenState,
        theme: &'a Theme,
    ) -> Self {
        Self {
            state,
            selection,
            theme,
            tick: 0,
        }
    }

    /// Sets the UI tick that drives the loading spinner.
    #[must_use]
    pub const fn tick(mut self, tick: u64) -> Self {
        self.tick = tick;
        self
    }

    fn list_item(card: &FilmCard, width: usize) -> ListItem<'static> {
        let year = card.year.map(|y| format!(" ({y})")).unwrap_or_default();
        let rating = format!("★ {}", card.rating);
        let title_width = width.saturating_sub(rating.chars().count() + year.chars().count() + 3);

        ListItem::new(Line::from(vec![
            Span::raw(truncate_to_width(&card.title, title_width)),
            Span::styled(year, Style::default().fg(Color::DarkGray)),
            Span::raw(" "),
            Span::styled(rating, Style::default().fg(Color::Yellow)),
        ]))
    }

    fn poster_line(&self, card: &FilmCard) -> Line<'static> {
        match card.poster.status() {
            PosterStatus::Loading => Line::from(vec![
                Span::styled(spinner_frame(self.tick), Style::default().fg(self.theme.accent)),
                Span::styled(" Загрузка постера...", self.theme.dimmed_style),
            ]),
            PosterStatus::Loaded => {
                Line::styled("✓ Постер загружен", Style::default().fg(Color::Green))
            }
            PosterStatus::Failed => Line::styled(
                "Постер недоступен, показана заглушка",
                Style::default().fg(Color::Yellow),
            ),
            PosterStatus::Pending if card.poster.is_placeholder() => {
                Line::styled("Постер отсутствует", self.theme.dimmed_style)
            }
            PosterStatus::Pending => Line::default(),
        }
    }

    fn render_detail(&self, card: &FilmCard, area: Rect, buf: &mut Buffer) {
        let label = Style::default().add_modifier(Modifier::BOLD);
        let year = card
            .year
            .map_or_else(|| "—".to_string(), |year| year.to_string());

        let lines = vec![
            Line::from(vec![Span::styled("Год: ", label), Span::raw(year)]),
            Line::from(vec![
                Span::styled("Рейтинг: ", label),
                Span::styled(format!("★ {}", card.rating), Style::default().fg(Color::Yellow)),
            ]),
            Line::from(vec![
                Span::styled("Страна: ", label),
                Span::raw(card.country.clone()),
            ]),
            Line::from(vec![
                Span::styled("Жанры: ", label),
                Span::raw(card.genres.join(", ")),
            ]),
            Line::default(),
            Line::raw(card.description.clone()),
            Line::default(),
            Line::from(vec![
                Span::styled("Постер: ", label),
                Span::styled(card.poster.url().to_string(), self.theme.dimmed_style),
            ]),
            self.poster_line(card),
        ];

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(self.theme.accent))
                    .title(format!(" {} ", card.title)),
            )
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}

impl Widget for FilmsScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(view) = view_or_spinner(self.state, LOADING, self.tick, area, buf, self.theme)
        else {
            return;
        };

        let body = render_heading(TITLE, Some(&view), None, area, buf, self.theme);
        let cards = view.data;

        if cards.is_empty() {
            Paragraph::new(Line::styled(EMPTY, self.theme.dimmed_style))
                .centered()
                .render(body, buf);
            return;
        }

        let [list_area, detail_area] =
            Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)])
                .areas(body);

        let item_width = usize::from(list_area.width.saturating_sub(4));
        let items: Vec<ListItem> = cards
            .iter()
            .map(|card| Self::list_item(card, item_width))
            .collect();

        let selected = self.selection.selected().min(cards.len() - 1);
        let mut list_state = ListState::default().with_selected(Some(selected));

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(self.theme.dimmed_style)
                    .title(format!(" Фильмы: {} ", cards.len())),
            )
            .highlight_style(self.theme.selection_style)
            .highlight_symbol("▸ ");
        StatefulWidget::render(list, list_area, buf, &mut list_state);

        self.render_detail(&cards[selected], detail_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FetchOutcome;
    use crate::domain::entities::{Film, NamedItem, Poster, Rating};
    use crate::presentation::ui::panel::buffer_text;

    fn card(name: &str) -> FilmCard {
        FilmCard::from_film(&Film {
            id: 1,
            name: Some(name.to_string()),
            alternative_name: None,
            year: Some(2013),
            rating: Some(Rating { kp: Some(7.8) }),
            description: Some("Хоккей".to_string()),
            poster: Some(Poster {
                preview_url: Some("https://img/1.jpg".to_string()),
                url: None,
            }),
            genres: vec![NamedItem::new("драма")],
            countries: vec![NamedItem::new("Россия")],
        })
    }

    fn render(state: &PanelState<Vec<FilmCard>>, selection: FilmsScreenState) -> String {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 100, 24);
        let mut buf = Buffer::empty(area);
        FilmsScreen::new(state, selection, &theme).render(area, &mut buf);
        buffer_text(&buf)
    }

    #[test]
    fn test_selection_stays_in_bounds() {
        let mut selection = FilmsScreenState::default();
        assert!(!selection.select_previous());
        assert!(selection.select_next(2));
        assert!(!selection.select_next(2));
        assert_eq!(selection.selected(), 1);

        selection.clamp(1);
        assert_eq!(selection.selected(), 0);
    }

    #[test]
    fn test_first_load_shows_spinner() {
        let mut state = PanelState::Idle;
        state.begin_loading();

        assert!(render(&state, FilmsScreenState::default()).contains(LOADING));
    }

    #[test]
    fn test_live_empty_list_is_empty_state() {
        let mut state = PanelState::Idle;
        state.settle(FetchOutcome::Live(Vec::new()));
        let text = render(&state, FilmsScreenState::default());

        assert!(text.contains(EMPTY));
        assert!(text.contains("АКТУАЛЬНО"));
    }

    #[test]
    fn test_selected_card_detail_is_rendered() {
        let mut state = PanelState::Idle;
        state.settle(FetchOutcome::Live(vec![card("Легенда №17"), card("Т-34")]));
        let mut selection = FilmsScreenState::default();
        selection.select_next(2);
        let text = render(&state, selection);

        assert!(text.contains(" Т-34 "));
        assert!(text.contains("Хоккей"));
        assert!(text.contains("https://img/1.jpg"));
    }
}
