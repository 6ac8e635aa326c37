//! Layout shared by the data-driven panels.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::utils::spinner_frame;
use crate::domain::{PanelState, PanelView};
use crate::presentation::theme::Theme;
use crate::presentation::widgets::StatusBar;

/// Draws the panel heading and, when data is shown, its status line.
///
/// Returns the remaining body area.
pub fn render_heading<T>(
    title: &str,
    view: Option<&PanelView<'_, T>>,
    updated: Option<String>,
    area: Rect,
    buf: &mut Buffer,
    theme: &Theme,
) -> Rect {
    let status = view.map(|view| StatusBar::from_view(view).updated(updated));
    let status_height = status.as_ref().map_or(0, StatusBar::height);

    let [title_area, status_area, _, body] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(status_height),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(area);

    Paragraph::new(Line::from(Span::styled(
        title,
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD),
    )))
    .render(title_area, buf);

    if let Some(status) = status {
        status.render_themed(status_area, buf, theme);
    }

    body
}

/// Draws the blocking first-load spinner.
pub fn render_loading(message: &str, tick: u64, area: Rect, buf: &mut Buffer, theme: &Theme) {
    let [_, row, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .areas(area);

    Paragraph::new(Line::from(vec![
        Span::styled(spinner_frame(tick), Style::default().fg(theme.accent)),
        Span::raw(" "),
        Span::styled(message, theme.dimmed_style),
    ]))
    .centered()
    .render(row, buf);
}

/// Returns the render view of `state`, or draws the spinner when there is
/// nothing to show yet.
pub fn view_or_spinner<'s, T>(
    state: &'s PanelState<T>,
    loading_message: &str,
    tick: u64,
    area: Rect,
    buf: &mut Buffer,
    theme: &Theme,
) -> Option<PanelView<'s, T>> {
    let view = state.view();
    if view.is_none() {
        render_loading(loading_message, tick, area, buf, theme);
    }
    view
}

#[cfg(test)]
pub(crate) fn buffer_text(buf: &Buffer) -> String {
    let area = buf.area;
    (area.top()..area.bottom())
        .map(|y| {
            (area.left()..area.right())
                .map(|x| buf[(x, y)].symbol().to_string())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
