//! Currency converter route.

use std::time::Duration;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Row, Table, Widget, Wrap},
};

use super::panel::{render_heading, view_or_spinner};
use super::utils::{format_money, format_rate};
use crate::application::services::{ConverterForm, parse_amount};
use crate::domain::PanelState;
use crate::domain::entities::{ExchangeRateTable, POPULAR_CURRENCIES};
use crate::presentation::theme::Theme;

const TITLE: &str = "Конвертер валют";
const LOADING: &str = "Загрузка курсов...";
const MISSING_RATE: &str = "—";
const DEMO_NOTE: &str = "Это демонстрационная версия. Актуальные курсы будут загружены, как только соединение восстановится.";

/// Converter form, current rates table and currency reference.
pub struct ConverterScreen<'a> {
    state: &'a PanelState<ExchangeRateTable>,
    form: &'a ConverterForm,
    theme: &'a Theme,
    tick: u64,
    updated: Option<String>,
    refresh_interval: Duration,
}

impl<'a> ConverterScreen<'a> {
    /// Creates the screen over the rates panel and the form state.
    #[must_use]
    pub const fn new(
        state: &'a PanelState<ExchangeRateTable>,
        form: &'a ConverterForm,
        theme: &'a Theme,
    ) -> Self {
        Self {
            state,
            form,
            theme,
            tick: 0,
            updated: None,
            refresh_interval: Duration::from_secs(600),
        }
    }

    /// Sets the UI tick that drives the loading spinner.
    #[must_use]
    pub const fn tick(mut self, tick: u64) -> Self {
        self.tick = tick;
        self
    }

    /// Sets the "last updated" label shown in the status line.
    #[must_use]
    pub fn updated(mut self, label: Option<String>) -> Self {
        self.updated = label;
        self
    }

    /// Sets the refresh period quoted in the source note.
    #[must_use]
    pub const fn refresh_interval(mut self, interval: Duration) -> Self {
        self.refresh_interval = interval;
        self
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

    fn form_lines(&self) -> Vec<Line<'static>> {
        let label = Style::default().add_modifier(Modifier::BOLD);
        let selector = Style::default()
            .fg(Color::Black)
            .bg(self.theme.accent)
            .add_modifier(Modifier::BOLD);

        let amount = if self.form.amount().is_empty() {
            Span::styled("Введите сумму", self.theme.dimmed_style)
        } else {
            Span::raw(self.form.amount().to_string())
        };

        let mut lines = vec![
            Line::from(vec![
                Span::styled("Сумма: ", label),
                amount,
                Span::styled("▏", Style::default().fg(self.theme.accent)),
            ]),
            Line::default(),
            Line::from(vec![
                Span::styled("Из валюты: ", label),
                Span::styled(format!(" ◂ {} ▸ ", self.form.from_code()), selector),
                Span::styled("  ⇄  ", Style::default().fg(self.theme.accent)),
                Span::styled("В валюту: ", label),
                Span::styled(format!(" ◂ {} ▸ ", self.form.to_code()), selector),
            ]),
            Line::default(),
        ];

        if let Some(result) = self.form.result() {
            let amount = parse_amount(self.form.amount()).unwrap_or(0.0);
            lines.push(Line::styled("Результат:", label));
            lines.push(Line::from(vec![
                Span::raw(format!("{} = ", format_money(amount, self.form.from_code()))),
                Span::styled(
                    format_money(result.converted_amount, self.form.to_code()),
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
            ]));
            lines.push(Line::styled(
                format!(
                    "1 {} = {} {}",
                    self.form.from_code(),
                    format_rate(result.from_to_rate),
                    self.form.to_code()
                ),
                self.theme.dimmed_style,
            ));
            lines.push(Line::styled(
                format!(
                    "1 {} = {} {}",
                    self.form.to_code(),
                    format_rate(result.to_from_rate),
                    self.form.from_code()
                ),
                self.theme.dimmed_style,
            ));
        }

        lines
    }

    fn rates_table(&self, rates: &ExchangeRateTable) -> Table<'static> {
        let cell = |rate: Option<f64>| rate.map_or_else(|| MISSING_RATE.to_string(), format_rate);
        let rows: Vec<Row> = rates
            .rate_rows()
            .into_iter()
            .map(|row| Row::new(vec![row.code.to_string(), cell(row.rate_to_usd), cell(row.rate_to_rub)]))
            .collect();

        Table::new(
            rows,
            [
                Constraint::Length(8),
                Constraint::Length(14),
                Constraint::Length(14),
            ],
        )
        .header(
            Row::new(vec!["Валюта", "Курс к USD", "Курс к RUB"])
                .style(Style::default().add_modifier(Modifier::BOLD)),
        )
    }

    fn info_lines(&self) -> Vec<Line<'static>> {
        let minutes = self.refresh_interval.as_secs().div_ceil(60);
        vec![
            Line::styled("Данные предоставлены Open Exchange Rates API", self.theme.dimmed_style),
            Line::styled(
                format!("Обновление курсов каждые {minutes} минут"),
                self.theme.dimmed_style,
            ),
            Line::styled(
                "Примечание: Все конвертации выполняются через USD как базовую валюту",
                self.theme.dimmed_style,
            ),
        ]
    }

    fn reference_lines(&self) -> Vec<Line<'static>> {
        POPULAR_CURRENCIES
            .iter()
            .map(|info| {
                Line::from(vec![
                    Span::styled(
                        info.code,
                        Style::default()
                            .fg(self.theme.accent)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(format!(" - {}", info.description)),
                ])
            })
            .collect()
    }
}

impl Widget for ConverterScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(view) = view_or_spinner(self.state, LOADING, self.tick, area, buf, self.theme)
        else {
            return;
        };

        let body = render_heading(TITLE, Some(&view), self.updated.clone(), area, buf, self.theme);

        let note_height = u16::from(view.warning.is_some());
        let [note_area, columns, reference_area] = Layout::vertical([
            Constraint::Length(note_height),
            Constraint::Min(12),
            Constraint::Length(8),
        ])
        .areas(body);

        if view.warning.is_some() {
            Paragraph::new(Line::styled(DEMO_NOTE, self.theme.dimmed_style))
                .wrap(Wrap { trim: true })
                .render(note_area, buf);
        }

        let [form_area, rates_area] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .areas(columns);

        Paragraph::new(self.form_lines())
            .block(self.block(" Конвертация "))
            .wrap(Wrap { trim: true })
            .render(form_area, buf);

        let rates_block = self.block(" Текущие курсы ");
        let rates_inner = rates_block.inner(rates_area);
        rates_block.render(rates_area, buf);

        let [table_area, info_area] =
            Layout::vertical([Constraint::Length(7), Constraint::Min(0)]).areas(rates_inner);
        Widget::render(self.rates_table(view.data), table_area, buf);
        Paragraph::new(self.info_lines())
            .wrap(Wrap { trim: true })
            .render(info_area, buf);

        Paragraph::new(self.reference_lines())
            .block(self.block(" Справка по валютам "))
            .render(reference_area, buf);
    }
}
