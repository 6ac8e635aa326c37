//! Navigation routes of the dashboard shell.

/// One of the fixed navigation destinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Route {
    /// Welcome screen.
    #[default]
    Home,
    /// Top Russian films.
    Films,
    /// Currency converter.
    Converter,
    /// Local weather.
    Weather,
}

impl Route {
    /// All routes in navigation order.
    pub const ALL: [Self; 4] = [Self::Home, Self::Films, Self::Converter, Self::Weather];

    /// Returns the route path.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Films => "/films",
            Self::Converter => "/converter",
            Self::Weather => "/weather",
        }
    }

    /// Resolves a path; unknown paths land on home.
    #[must_use]
    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "/films" | "films" => Self::Films,
            "/converter" | "converter" => Self::Converter,
            "/weather" | "weather" => Self::Weather,
            _ => Self::Home,
        }
    }

    /// Returns the navigation control label.
    #[must_use]
    pub const fn nav_label(self) -> &'static str {
        match self {
            Self::Home => "ГЛАВНАЯ",
            Self::Films => "Топ российские фильмы",
            Self::Converter => "Конвертер валют",
            Self::Weather => "Погода в Нижнем Новгороде",
        }
    }

    /// Returns the background style key, one per route.
    #[must_use]
    pub const fn background(self) -> &'static str {
        match self {
            Self::Home => "bg-home",
            Self::Films => "bg-films",
            Self::Converter => "bg-converter",
            Self::Weather => "bg-weather",
        }
    }

    /// Returns position in navigation order.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Home => 0,
            Self::Films => 1,
            Self::Converter => 2,
            Self::Weather => 3,
        }
    }

    /// Returns the route at `index`, if any.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Returns the following route, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Returns the preceding route, wrapping around.
    #[must_use]
    pub const fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Returns whether the route's panel fetches remote data.
    #[must_use]
    pub const fn has_panel_data(self) -> bool {
        !matches!(self, Self::Home)
    }

    /// Returns whether the route's panel refreshes periodically.
    #[must_use]
    pub const fn refreshes(self) -> bool {
        matches!(self, Self::Converter | Self::Weather)
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_path_round_trip() {
        for route in Route::ALL {
            assert_eq!(Route::from_path(route.path()), route);
        }
        assert_eq!(Route::from_path("/weather/"), Route::Weather);
        assert_eq!(Route::from_path("/unknown"), Route::Home);
    }

    #[test]
    fn test_backgrounds_are_unique() {
        let backgrounds: HashSet<_> = Route::ALL.iter().map(|r| r.background()).collect();
        assert_eq!(backgrounds.len(), Route::ALL.len());
    }

    #[test]
    fn test_cycling_wraps() {
        assert_eq!(Route::Weather.next(), Route::Home);
        assert_eq!(Route::Home.previous(), Route::Weather);
        assert_eq!(Route::Films.next(), Route::Converter);
    }

    #[test]
    fn test_refreshing_routes() {
        assert!(Route::Converter.refreshes());
        assert!(Route::Weather.refreshes());
        assert!(!Route::Films.refreshes());
        assert!(!Route::Home.has_panel_data());
    }
}
