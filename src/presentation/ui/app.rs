//! Main application orchestrator.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Local};
use crossterm::event::{Event, EventStream, KeyCode, KeyEvent};
use futures_util::StreamExt;
use futures_util::future::Either;
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout, Margin},
    style::Style,
    widgets::{Block, Paragraph},
};
use tokio::sync::mpsc;
use tokio::time::{Instant, Interval, MissedTickBehavior, interval, interval_at};
use tracing::{debug, info};

use super::notification_popup::NotificationPopup;
use super::utils::last_updated_label;
use super::{ConverterScreen, FilmsScreen, FilmsScreenState, HomeScreen, WeatherScreen};
use crate::application::services::{ConverterForm, NotificationManager};
use crate::application::use_cases::{FetchPanelUseCase, LoadPosterUseCase};
use crate::domain::entities::{ExchangeRateTable, FilmCard, WeatherSnapshot};
use crate::domain::keybinding::{self, Action as Command};
use crate::domain::{FetchOutcome, HttpPort, PanelFeed, PanelState, Provenance, Route};
use crate::infrastructure::{AppConfig, CurrencyFeed, FilmsFeed, WeatherFeed};
use crate::presentation::events::{self, EventResult};
use crate::presentation::theme::Theme;
use crate::presentation::widgets::{FOOTER_TEXT, FooterBar, FooterBarStyle, NavBar, NavBarStyle};

const UI_TICK_RATE: Duration = Duration::from_millis(100);
const RECOVERED_MESSAGE: &str = "Соединение восстановлено, данные актуальны";

/// Completion of a spawned task, tagged with the mount it belongs to.
#[derive(Debug)]
enum Action {
    RatesLoaded {
        mount_id: u64,
        outcome: FetchOutcome<ExchangeRateTable>,
    },
    FilmsLoaded {
        mount_id: u64,
        outcome: FetchOutcome<Vec<FilmCard>>,
    },
    WeatherLoaded {
        mount_id: u64,
        outcome: FetchOutcome<WeatherSnapshot>,
    },
    PosterLoaded {
        mount_id: u64,
        index: usize,
        loaded: bool,
    },
}

impl Action {
    const fn mount_id(&self) -> u64 {
        match self {
            Self::RatesLoaded { mount_id, .. }
            | Self::FilmsLoaded { mount_id, .. }
            | Self::WeatherLoaded { mount_id, .. }
            | Self::PosterLoaded { mount_id, .. } => *mount_id,
        }
    }
}

/// Delivers a task result to the event loop; a closed loop only gets a debug line.
fn send_action(tx: &mpsc::UnboundedSender<Action>, action: Action) -> bool {
    let mount_id = action.mount_id();
    let sent = tx.send(action).is_ok();
    if !sent {
        debug!(mount_id, "Dashboard closed before task completed");
    }
    sent
}

fn refresh_timer(period: Duration) -> Interval {
    let mut timer = interval_at(Instant::now() + period, period);
    timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
    timer
}

/// Dashboard state and event loop.
pub struct App {
    running: bool,
    route: Route,
    mount_id: u64,
    theme: Theme,
    refresh_interval: Duration,
    refresh_timer: Option<Interval>,
    tick: u64,
    rates: PanelState<ExchangeRateTable>,
    rates_updated: Option<DateTime<Local>>,
    films: PanelState<Vec<FilmCard>>,
    weather: PanelState<WeatherSnapshot>,
    weather_updated: Option<DateTime<Local>>,
    converter: ConverterForm,
    film_selection: FilmsScreenState,
    notifications: NotificationManager,
    currency_use_case: FetchPanelUseCase<CurrencyFeed>,
    films_use_case: FetchPanelUseCase<FilmsFeed>,
    weather_use_case: FetchPanelUseCase<WeatherFeed>,
    load_poster_use_case: LoadPosterUseCase,
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,
}

impl App {
    /// Creates the dashboard on the configured start route.
    ///
    /// Nothing is fetched until [`App::run`] mounts the route.
    #[must_use]
    pub fn new(http: Arc<dyn HttpPort>, config: &AppConfig) -> Self {
        let currency_feed = Arc::new(CurrencyFeed::new(config.api.currency_url.clone()));
        let films_feed = Arc::new(FilmsFeed::new(
            config.api.films_url.clone(),
            config.films_api_key().map(ToString::to_string),
        ));
        let weather_feed = Arc::new(WeatherFeed::new(config.api.weather_url.clone()));
        let (action_tx, action_rx) = mpsc::unbounded_channel();

        Self {
            running: true,
            route: config.start_route(),
            mount_id: 0,
            theme: Theme::new(&config.theme.accent_color),
            refresh_interval: config.refresh_interval(),
            refresh_timer: None,
            tick: 0,
            rates: PanelState::default(),
            rates_updated: None,
            films: PanelState::default(),
            weather: PanelState::default(),
            weather_updated: None,
            converter: ConverterForm::default(),
            film_selection: FilmsScreenState::default(),
            notifications: NotificationManager::default(),
            currency_use_case: FetchPanelUseCase::new(Arc::clone(&http), currency_feed),
            films_use_case: FetchPanelUseCase::new(Arc::clone(&http), films_feed),
            weather_use_case: FetchPanelUseCase::new(Arc::clone(&http), weather_feed),
            load_poster_use_case: LoadPosterUseCase::new(http),
            action_tx,
            action_rx,
        }
    }

    /// Runs the event loop until the user quits.
    ///
    /// # Errors
    /// Returns error if drawing to the terminal fails.
    pub async fn run(mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        info!(route = %self.route, "Starting dashboard");
        self.mount(self.route);

        self.run_event_loop(terminal).await?;

        info!("Application exiting normally");
        Ok(())
    }

    async fn run_event_loop(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        let mut terminal_events = EventStream::new();
        let mut ui_interval = interval(UI_TICK_RATE);
        ui_interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        terminal.draw(|frame| self.render(frame))?;

        while self.running {
            let refresh_future = match &mut self.refresh_timer {
                Some(timer) => Either::Left(timer.tick()),
                None => Either::Right(std::future::pending()),
            };
            let terminal_event = terminal_events.next();

            tokio::select! {
                biased;

                Some(action) = self.action_rx.recv() => {
                    self.handle_action(action);
                }

                Some(Ok(event)) = terminal_event => {
                    if self.handle_terminal_event(&event) == EventResult::Exit {
                        self.running = false;
                    }
                }

                _ = refresh_future => {
                    debug!(route = %self.route, "Periodic refresh");
                    self.refresh();
                }

                _ = ui_interval.tick() => {
                    self.tick = self.tick.wrapping_add(1);
                    self.notifications.tick();
                }
            }

            if self.running {
                terminal.draw(|frame| self.render(frame))?;
            }
        }

        Ok(())
    }

    fn handle_terminal_event(&mut self, event: &Event) -> EventResult {
        match events::key_press(event) {
            Some(key) => self.handle_key(key),
            None => EventResult::from_changed(events::needs_redraw(event)),
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> EventResult {
        if let Some(command) = keybinding::resolve(key, self.route) {
            return self.apply_command(command);
        }

        if self.route == Route::Converter {
            let changed = match key.code {
                KeyCode::Char(c) => self.converter.input_char(c),
                KeyCode::Backspace => self.converter.backspace(),
                _ => false,
            };
            if changed {
                self.recompute_conversion();
            }
            return EventResult::from_changed(changed);
        }

        EventResult::Continue
    }

    fn apply_command(&mut self, command: Command) -> EventResult {
        match command {
            Command::Quit => return EventResult::Exit,
            Command::Navigate(route) => self.navigate(route),
            Command::NextRoute => self.navigate(self.route.next()),
            Command::PreviousRoute => self.navigate(self.route.previous()),
            Command::Refresh => return EventResult::from_changed(self.refresh()),
            Command::SelectNext => {
                let len = self.films.data().map_or(0, Vec::len);
                if self.film_selection.select_next(len) {
                    self.load_selected_poster();
                }
            }
            Command::SelectPrevious => {
                if self.film_selection.select_previous() {
                    self.load_selected_poster();
                }
            }
            Command::SwapCurrencies => self.converter.swap(),
            Command::NextFromCurrency => self.converter.cycle_from(true),
            Command::PreviousFromCurrency => self.converter.cycle_from(false),
            Command::NextToCurrency => self.converter.cycle_to(true),
            Command::PreviousToCurrency => self.converter.cycle_to(false),
        }

        if self.route == Route::Converter {
            self.recompute_conversion();
        }
        EventResult::Consumed
    }

    fn navigate(&mut self, route: Route) {
        if route == self.route {
            return;
        }
        self.unmount();
        self.mount(route);
    }

    fn mount(&mut self, route: Route) {
        self.route = route;
        self.mount_id += 1;
        info!(
            route = %route,
            background = route.background(),
            mount_id = self.mount_id,
            "Panel mounted"
        );

        match route {
            Route::Home => {}
            Route::Films => {
                self.start_films_fetch();
            }
            Route::Converter => {
                self.start_rates_fetch();
            }
            Route::Weather => {
                self.start_weather_fetch();
            }
        }

        self.refresh_timer = route
            .refreshes()
            .then(|| refresh_timer(self.refresh_interval));
    }

    /// Drops the leaving panel's state; late results are rejected by mount id.
    fn unmount(&mut self) {
        debug!(route = %self.route, mount_id = self.mount_id, "Panel unmounted");
        match self.route {
            Route::Home => {}
            Route::Films => {
                self.films = PanelState::default();
                self.film_selection.reset();
            }
            Route::Converter => {
                self.rates = PanelState::default();
                self.rates_updated = None;
                self.converter = ConverterForm::default();
            }
            Route::Weather => {
                self.weather = PanelState::default();
                self.weather_updated = None;
            }
        }
        self.refresh_timer = None;
    }

    /// Starts a fetch for the mounted panel if it refreshes.
    ///
    /// Returns `false` when the panel does not refresh or is already loading.
    fn refresh(&mut self) -> bool {
        match self.route {
            Route::Converter => self.start_rates_fetch(),
            Route::Weather => self.start_weather_fetch(),
            Route::Home | Route::Films => false,
        }
    }

    fn start_rates_fetch(&mut self) -> bool {
        if !self.rates.begin_loading() {
            debug!(route = %self.route, "Fetch already in flight, refresh ignored");
            return false;
        }
        self.spawn_fetch(self.currency_use_case.clone(), |mount_id, outcome| {
            Action::RatesLoaded { mount_id, outcome }
        });
        true
    }

    fn start_films_fetch(&mut self) -> bool {
        if !self.films.begin_loading() {
            return false;
        }
        self.spawn_fetch(self.films_use_case.clone(), |mount_id, outcome| {
            Action::FilmsLoaded { mount_id, outcome }
        });
        true
    }

    fn start_weather_fetch(&mut self) -> bool {
        if !self.weather.begin_loading() {
            debug!(route = %self.route, "Fetch already in flight, refresh ignored");
            return false;
        }
        self.spawn_fetch(self.weather_use_case.clone(), |mount_id, outcome| {
            Action::WeatherLoaded { mount_id, outcome }
        });
        true
    }

    fn spawn_fetch<F>(
        &self,
        use_case: FetchPanelUseCase<F>,
        wrap: fn(u64, FetchOutcome<F::ViewModel>) -> Action,
    ) where
        F: PanelFeed + 'static,
    {
        let tx = self.action_tx.clone();
        let mount_id = self.mount_id;

        tokio::spawn(async move {
            let outcome = use_case.execute().await;
            send_action(&tx, wrap(mount_id, outcome));
        });
    }

    fn load_selected_poster(&mut self) {
        let index = self.film_selection.selected();
        let Some(url) = self
            .films
            .data_mut()
            .and_then(|cards| cards.get_mut(index))
            .and_then(|card| card.poster.start_load())
        else {
            return;
        };

        let loader = self.load_poster_use_case.clone();
        let tx = self.action_tx.clone();
        let mount_id = self.mount_id;

        tokio::spawn(async move {
            let loaded = loader.execute(&url).await;
            send_action(
                &tx,
                Action::PosterLoaded {
                    mount_id,
                    index,
                    loaded,
                },
            );
        });
    }

    fn recompute_conversion(&mut self) {
        if let Some(rates) = self.rates.data() {
            self.converter.recompute(rates);
        }
    }

    /// Toasts a switch to fallback data, or a recovery from it.
    fn announce<T>(&mut self, route: Route, shown: Option<Provenance>, outcome: &FetchOutcome<T>) {
        match (outcome.warning(), shown) {
            (Some(reason), _) => self.notifications.warn(route.nav_label(), reason),
            (None, Some(Provenance::Fallback)) => {
                self.notifications.info(route.nav_label(), RECOVERED_MESSAGE);
            }
            (None, _) => {}
        }
    }

    fn handle_action(&mut self, action: Action) {
        let mount_id = action.mount_id();
        if mount_id != self.mount_id {
            debug!(
                mount_id,
                current = self.mount_id,
                "Discarding result for unmounted panel"
            );
            return;
        }

        match action {
            Action::RatesLoaded { outcome, .. } => {
                let shown = self.rates.view().map(|view| view.provenance);
                self.announce(Route::Converter, shown, &outcome);
                self.rates.settle(outcome);
                self.rates_updated = Some(Local::now());
                self.recompute_conversion();
            }
            Action::FilmsLoaded { outcome, .. } => {
                let shown = self.films.view().map(|view| view.provenance);
                self.announce(Route::Films, shown, &outcome);
                self.films.settle(outcome);
                let len = self.films.data().map_or(0, Vec::len);
                self.film_selection.clamp(len);
                self.load_selected_poster();
            }
            Action::WeatherLoaded { outcome, .. } => {
                let shown = self.weather.view().map(|view| view.provenance);
                self.announce(Route::Weather, shown, &outcome);
                self.weather.settle(outcome);
                self.weather_updated = Some(Local::now());
            }
            Action::PosterLoaded { index, loaded, .. } => {
                if let Some(card) = self.films.data_mut().and_then(|cards| cards.get_mut(index)) {
                    if loaded {
                        card.poster.mark_loaded();
                    } else {
                        card.poster.mark_failed();
                    }
                }
            }
        }
    }

    fn updated_label<T>(
        state: &PanelState<T>,
        updated: Option<DateTime<Local>>,
    ) -> Option<String> {
        let view = state.view()?;
        updated.map(|at| last_updated_label(view.provenance, at))
    }

    fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(
            Block::default().style(Style::default().bg(self.theme.route_background(self.route))),
            area,
        );

        let [nav_area, body, footer_area, keys_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);

        frame.render_widget(
            NavBar::new(crate::NAME, self.route)
                .style(NavBarStyle::from_theme(&self.theme, self.route)),
            nav_area,
        );

        let body = body.inner(Margin::new(2, 1));
        match self.route {
            Route::Home => frame.render_widget(HomeScreen::new(&self.theme), body),
            Route::Films => frame.render_widget(
                FilmsScreen::new(&self.films, self.film_selection, &self.theme).tick(self.tick),
                body,
            ),
            Route::Converter => frame.render_widget(
                ConverterScreen::new(&self.rates, &self.converter, &self.theme)
                    .tick(self.tick)
                    .updated(Self::updated_label(&self.rates, self.rates_updated))
                    .refresh_interval(self.refresh_interval),
                body,
            ),
            Route::Weather => frame.render_widget(
                WeatherScreen::new(&self.weather, &self.theme)
                    .tick(self.tick)
                    .updated(Self::updated_label(&self.weather, self.weather_updated)),
                body,
            ),
        }

        frame.render_widget(
            Paragraph::new(FOOTER_TEXT)
                .centered()
                .style(self.theme.dimmed_style),
            footer_area,
        );

        let keybinds = keybinding::keybinds_for(self.route);
        let version = format!("v{}", crate::VERSION);
        frame.render_widget(
            FooterBar::new(&keybinds)
                .right_info(Some(&version))
                .style(FooterBarStyle::from_theme(&self.theme)),
            keys_area,
        );

        if let Some(notification) = self.notifications.current_notification() {
            frame.render_widget(NotificationPopup::new(notification, &self.theme), body);
        }
    }
}
