//! Weather route for Nizhny Novgorod.

use chrono::{Local, NaiveDate};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Row, Table, Widget},
};

use super::panel::{render_heading, view_or_spinner};
use super::utils::{date_label, format_time_hhmm};
use crate::domain::PanelState;
use crate::domain::entities::{
    TemperatureBand, WeatherSnapshot, describe_weather_code, wind_direction_label,
};
use crate::infrastructure::api::weather::{LATITUDE, LONGITUDE, TIMEZONE};
use crate::presentation::theme::Theme;

const TITLE: &str = "Погода в Нижнем Новгороде";
const LOADING: &str = "Загрузка данных о погоде...";
const LOCATION: &str = "📍 Нижний Новгород";

const LEGEND: [(f64, &str); 5] = [
    (30.0, "Очень жарко (>30°C)"),
    (20.0, "Тепло (20-30°C)"),
    (10.0, "Прохладно (10-20°C)"),
    (0.0, "Холодно (0-10°C)"),
    (-10.0, "Мороз (<0°C)"),
];

/// Current conditions, weekly forecast and data source information.
pub struct WeatherScreen<'a> {
    state: &'a PanelState<WeatherSnapshot>,
    theme: &'a Theme,
    tick: u64,
    today: NaiveDate,
    updated: Option<String>,
}

impl<'a> WeatherScreen<'a> {
    /// Creates the screen over the weather panel; dates are labelled against today.
    #[must_use]
    pub fn new(state: &'a PanelState<WeatherSnapshot>, theme: &'a Theme) -> Self {
        Self {
            state,
            theme,
            tick: 0,
            today: Local::now().date_naive(),
            updated: None,
        }
    }

    /// Sets the UI tick that drives the loading spinner.
    #[must_use]
    pub const fn tick(mut self, tick: u64) -> Self {
        self.tick = tick;
        self
    }

    /// Sets the date that forecast rows are labelled against.
    #[must_use]
    pub const fn today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// Sets the "last updated" label shown in the status line.
    #[must_use]
    pub fn updated(mut self, label: Option<String>) -> Self {
        self.updated = label;
        self
    }

    fn temperature(celsius: i32) -> Span<'static> {
        let color = Theme::temperature_color(TemperatureBand::from_celsius(f64::from(celsius)));
        Span::styled(
            format!("{celsius}°"),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )
    }

    fn block(&self, title: &'static str) -> Block<'static> {
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.dimmed_style)
            .title(Span::styled(
                title,
                Style::default()
                    .fg(self.theme.accent)
                    .add_modifier(Modifier::BOLD),
            ))
    }

    fn current_lines(snapshot: &WeatherSnapshot) -> Vec<Line<'static>> {
        let current = &snapshot.current;
        let condition = describe_weather_code(current.weather_code);
        let direction = wind_direction_label(current.wind_direction);
        let label = Style::default().add_modifier(Modifier::BOLD);

        vec![
            Line::from(vec![
                Self::temperature(current.temperature),
                Span::raw(format!("  {}  {}", condition.icon, condition.description)),
            ]),
            Line::from(vec![
                Span::raw("Ощущается как: "),
                Self::temperature(current.apparent_temperature),
            ]),
            Line::raw(format!("Время обновления: {}", format_time_hhmm(&current.time))),
            Line::default(),
            Line::from(vec![
                Span::styled("💧 Влажность: ", label),
                Span::raw(format!("{}%", current.humidity)),
            ]),
            Line::from(vec![
                Span::styled("📊 Давление: ", label),
                Span::raw(format!("{} мм рт. ст.", current.pressure)),
            ]),
            Line::from(vec![
                Span::styled("💨 Ветер: ", label),
                Span::raw(format!("{} м/с, {direction}", current.wind_speed)),
            ]),
            Line::from(vec![
                Span::styled("🧭 Направление ветра: ", label),
                Span::raw(format!("{}° ({direction})", current.wind_direction)),
            ]),
        ]
    }

    fn forecast_table(&self, snapshot: &WeatherSnapshot) -> Table<'static> {
        let rows: Vec<Row> = snapshot
            .daily
            .iter()
            .map(|day| {
                let condition = describe_weather_code(day.weather_code);
                Row::new(vec![
                    Line::raw(date_label(&day.time, self.today)),
                    Line::raw(condition.icon),
                    Line::from(vec![
                        Self::temperature(day.temperature_max),
                        Span::styled(" / ", self.theme.dimmed_style),
                        Self::temperature(day.temperature_min),
                    ]),
                    Line::raw(condition.description),
                ])
            })
            .collect();

        Table::new(
            rows,
            [
                Constraint::Length(12),
                Constraint::Length(3),
                Constraint::Length(11),
                Constraint::Min(10),
            ],
        )
    }

    fn info_lines(&self) -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::styled("Данные предоставлены API Open-Meteo.com", self.theme.dimmed_style),
            Line::styled(
                format!("Координаты: {LATITUDE:.4}°N, {LONGITUDE:.4}°E"),
                self.theme.dimmed_style,
            ),
            Line::styled(format!("Часовой пояс: {TIMEZONE}"), self.theme.dimmed_style),
            Line::default(),
        ];

        lines.extend(LEGEND.iter().map(|(celsius, label)| {
            let color = Theme::temperature_color(TemperatureBand::from_celsius(*celsius));
            Line::from(vec![
                Span::styled("██", Style::default().fg(color)),
                Span::raw(format!(" {label}")),
            ])
        }));

        lines
    }
}

impl Widget for WeatherScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(view) = view_or_spinner(self.state, LOADING, self.tick, area, buf, self.theme)
        else {
            return;
        };

        let body = render_heading(TITLE, Some(&view), self.updated.clone(), area, buf, self.theme);
        let snapshot = view.data;

        let [location_area, top, info_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(10),
            Constraint::Length(11),
        ])
        .areas(body);

        Paragraph::new(Line::styled(LOCATION, Style::default().add_modifier(Modifier::BOLD)))
            .render(location_area, buf);

        let [current_area, forecast_area] =
            Layout::horizontal([Constraint::Percentage(45), Constraint::Percentage(55)])
                .areas(top);

        Paragraph::new(Self::current_lines(snapshot))
            .block(self.block(" Сейчас "))
            .render(current_area, buf);

        let forecast_block = self.block(" Прогноз на неделю ");
        let forecast_inner = forecast_block.inner(forecast_area);
        forecast_block.render(forecast_area, buf);
        Widget::render(self.forecast_table(snapshot), forecast_inner, buf);

        Paragraph::new(self.info_lines())
            .block(self.block(" Информация о данных "))
            .render(info_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FetchOutcome;
    use crate::presentation::ui::panel::buffer_text;

    fn render(state: &PanelState<WeatherSnapshot>) -> String {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 140, 40);
        let mut buf = Buffer::empty(area);
        let today = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        WeatherScreen::new(state, &theme)
            .today(today)
            .render(area, &mut buf);
        buffer_text(&buf)
    }

    #[test]
    fn test_fallback_snapshot_is_rendered_with_labels() {
        let mut state = PanelState::Idle;
        state.settle(FetchOutcome::Fallback {
            data: WeatherSnapshot::demo("2024-01-15T14:30"),
            reason: "Не удалось загрузить".to_string(),
        });
        let text = render(&state);

        assert!(text.contains("ДЕМО"));
        assert!(text.contains("-5°"));
        assert!(text.contains("Время обновления: 14:30"));
        assert!(text.contains("765 мм рт. ст."));
        assert!(text.contains("4 м/с, Ю"));
        assert!(text.contains("Сегодня"));
        assert!(text.contains("Завтра"));
        assert!(text.contains("Ср, 17 янв"));
        assert!(text.contains("Координаты: 56.3269°N, 44.0065°E"));
    }

    #[test]
    fn test_refresh_keeps_previous_view() {
        let mut state = PanelState::Idle;
        state.settle(FetchOutcome::Live(WeatherSnapshot::demo("2024-01-15T14:30")));
        state.begin_loading();
        let text = render(&state);

        assert!(text.contains("Обновление..."));
        assert!(text.contains("АКТУАЛЬНО"));
        assert!(!text.contains(LOADING));
    }
}
