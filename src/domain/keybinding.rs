//! Keyboard bindings for the navigation shell and the panels.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::borrow::Cow;

use crate::domain::Route;

/// User intent resolved from a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Action {
    Quit,

    // Navigation
    Navigate(Route),
    NextRoute,
    PreviousRoute,

    // Panels
    Refresh,
    SelectNext,
    SelectPrevious,

    // Converter
    SwapCurrencies,
    NextFromCurrency,
    PreviousFromCurrency,
    NextToCurrency,
    PreviousToCurrency,
}

/// Key binding shown in the footer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keybind {
    /// Key that triggers the action.
    pub key: KeyEvent,
    /// Triggered action.
    pub action: Action,
    /// Footer label.
    pub label: Cow<'static, str>,
    /// Footer key text overriding the formatted key.
    pub key_display: Option<Cow<'static, str>>,
    /// Whether the binding is listed in the footer.
    pub visible_in_bar: bool,
}

impl Keybind {
    /// Creates visible binding.
    #[must_use]
    pub fn new(key: KeyEvent, action: Action, label: impl Into<Cow<'static, str>>) -> Self {
        Self {
            key,
            action,
            label: label.into(),
            key_display: None,
            visible_in_bar: true,
        }
    }

    /// Overrides the key text shown in the footer.
    #[must_use]
    pub fn display(mut self, text: impl Into<Cow<'static, str>>) -> Self {
        self.key_display = Some(text.into());
        self
    }

    /// Hides the binding from the footer.
    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.visible_in_bar = false;
        self
    }
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

/// Returns bindings active on `route`, in footer order.
#[must_use]
pub fn keybinds_for(route: Route) -> Vec<Keybind> {
    let mut binds = vec![
        Keybind::new(key(KeyCode::Tab), Action::NextRoute, "Раздел").display("Tab/1-4"),
        Keybind::new(key(KeyCode::BackTab), Action::PreviousRoute, "Назад").hidden(),
    ];

    match route {
        Route::Home => {}
        Route::Films => {
            binds.push(
                Keybind::new(key(KeyCode::Down), Action::SelectNext, "Фильм").display("↑/↓"),
            );
            binds.push(Keybind::new(key(KeyCode::Up), Action::SelectPrevious, "Вверх").hidden());
        }
        Route::Converter => {
            binds.push(
                Keybind::new(key(KeyCode::Char('f')), Action::NextFromCurrency, "Из").display("f/F"),
            );
            binds.push(
                Keybind::new(key(KeyCode::Char('t')), Action::NextToCurrency, "В").display("t/T"),
            );
            binds.push(Keybind::new(
                key(KeyCode::Char('s')),
                Action::SwapCurrencies,
                "Поменять",
            ));
        }
        Route::Weather => {}
    }

    if route.refreshes() {
        binds.push(Keybind::new(
            key(KeyCode::Char('r')),
            Action::Refresh,
            "Обновить",
        ));
    }

    binds.push(Keybind::new(key(KeyCode::Char('q')), Action::Quit, "Выход"));
    binds
}

/// Resolves a key press on `route` to an action.
///
/// Number keys select routes everywhere except the converter, where they are
/// amount input; F1-F4 work on every route.
#[must_use]
pub fn resolve(event: KeyEvent, route: Route) -> Option<Action> {
    if event.modifiers.contains(KeyModifiers::CONTROL) {
        return matches!(event.code, KeyCode::Char('c' | 'C')).then_some(Action::Quit);
    }

    let global = match event.code {
        KeyCode::Tab => Some(Action::NextRoute),
        KeyCode::BackTab => Some(Action::PreviousRoute),
        KeyCode::F(n @ 1..=4) => Route::from_index(usize::from(n - 1)).map(Action::Navigate),
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Esc if route == Route::Home => Some(Action::Quit),
        KeyCode::Esc => Some(Action::Navigate(Route::Home)),
        _ => None,
    };
    if global.is_some() {
        return global;
    }

    match (route, event.code) {
        (_, KeyCode::Char('r')) if route.refreshes() => Some(Action::Refresh),
        (Route::Converter, KeyCode::Char('s')) => Some(Action::SwapCurrencies),
        (Route::Converter, KeyCode::Char('f')) => Some(Action::NextFromCurrency),
        (Route::Converter, KeyCode::Char('F')) => Some(Action::PreviousFromCurrency),
        (Route::Converter, KeyCode::Char('t')) => Some(Action::NextToCurrency),
        (Route::Converter, KeyCode::Char('T')) => Some(Action::PreviousToCurrency),
        (Route::Converter, _) => None,
        (Route::Films, KeyCode::Down | KeyCode::Char('j')) => Some(Action::SelectNext),
        (Route::Films, KeyCode::Up | KeyCode::Char('k')) => Some(Action::SelectPrevious),
        (_, KeyCode::Char(c @ '1'..='4')) => {
            let index = c.to_digit(10).and_then(|d| usize::try_from(d).ok())?;
            Route::from_index(index - 1).map(Action::Navigate)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(KeyCode::Char('2'), Route::Home, Some(Action::Navigate(Route::Films)) ; "digit_selects_route")]
    #[test_case(KeyCode::Char('2'), Route::Converter, None ; "digit_is_amount_on_converter")]
    #[test_case(KeyCode::F(4), Route::Converter, Some(Action::Navigate(Route::Weather)) ; "function_key_everywhere")]
    #[test_case(KeyCode::Esc, Route::Home, Some(Action::Quit) ; "esc_quits_on_home")]
    #[test_case(KeyCode::Esc, Route::Films, Some(Action::Navigate(Route::Home)) ; "esc_goes_home")]
    #[test_case(KeyCode::Char('r'), Route::Weather, Some(Action::Refresh) ; "refresh_weather")]
    #[test_case(KeyCode::Char('r'), Route::Converter, Some(Action::Refresh) ; "refresh_rates")]
    #[test_case(KeyCode::Char('r'), Route::Films, None ; "films_do_not_refresh")]
    #[test_case(KeyCode::Char('j'), Route::Films, Some(Action::SelectNext) ; "vim_down")]
    #[test_case(KeyCode::Char('F'), Route::Converter, Some(Action::PreviousFromCurrency) ; "shift_cycles_back")]
    fn test_resolve(code: KeyCode, route: Route, expected: Option<Action>) {
        assert_eq!(resolve(key(code), route), expected);
    }

    #[test]
    fn test_ctrl_c_quits() {
        let event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(resolve(event, Route::Converter), Some(Action::Quit));
    }

    #[test]
    fn test_footer_lists_refresh_only_where_supported() {
        let has_refresh = |route| {
            keybinds_for(route)
                .iter()
                .any(|bind| bind.action == Action::Refresh)
        };
        assert!(has_refresh(Route::Converter));
        assert!(has_refresh(Route::Weather));
        assert!(!has_refresh(Route::Films));
        assert!(!has_refresh(Route::Home));
    }
}
