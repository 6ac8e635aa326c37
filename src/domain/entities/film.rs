//! Film entity and card view model.

use serde::{Deserialize, Serialize};

use crate::domain::serde_utils::{null_as_default, string_or_u64};

/// Image shown when a film has no usable poster.
pub const POSTER_PLACEHOLDER_URL: &str = "https://via.placeholder.com/300x450?text=No+Image";

const DESCRIPTION_LIMIT: usize = 150;
const GENRE_LIMIT: usize = 3;
const RATING_UNAVAILABLE: &str = "Н/Д";
const DESCRIPTION_MISSING: &str = "Описание отсутствует";
const DEFAULT_COUNTRY: &str = "Россия";
const UNTITLED: &str = "Без названия";

/// Film rating block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    /// Kinopoisk score.
    #[serde(default)]
    pub kp: Option<f64>,
}

/// Film poster URLs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Poster {
    /// Small preview image.
    #[serde(default)]
    pub preview_url: Option<String>,
    /// Full-size image.
    #[serde(default)]
    pub url: Option<String>,
}

/// Named item such as a genre or a country.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedItem {
    /// Display name.
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

impl NamedItem {
    /// Creates new item.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Film as returned by the movie metadata API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Film {
    /// Unique film ID.
    #[serde(deserialize_with = "string_or_u64::deserialize")]
    pub id: u64,
    /// Localised title.
    #[serde(default)]
    pub name: Option<String>,
    /// Original or alternative title.
    #[serde(default)]
    pub alternative_name: Option<String>,
    /// Release year.
    #[serde(default)]
    pub year: Option<i32>,
    /// Rating block.
    #[serde(default)]
    pub rating: Option<Rating>,
    /// Synopsis.
    #[serde(default)]
    pub description: Option<String>,
    /// Poster URLs.
    #[serde(default)]
    pub poster: Option<Poster>,
    /// Genres in API order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub genres: Vec<NamedItem>,
    /// Countries in API order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub countries: Vec<NamedItem>,
}

/// Loading status of a card's poster image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PosterStatus {
    /// Not loaded yet.
    #[default]
    Pending,
    /// Load in flight.
    Loading,
    /// Loaded successfully.
    Loaded,
    /// Load failed; the placeholder is shown instead.
    Failed,
}

/// Poster source with placeholder fallback on load error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PosterSource {
    candidate: Option<String>,
    status: PosterStatus,
}

impl PosterSource {
    /// Picks the preview URL, then the full URL.
    #[must_use]
    pub fn from_poster(poster: Option<&Poster>) -> Self {
        let candidate = poster.and_then(|poster| {
            non_empty(poster.preview_url.as_deref()).or_else(|| non_empty(poster.url.as_deref()))
        });

        Self {
            candidate: candidate.map(ToString::to_string),
            status: PosterStatus::Pending,
        }
    }

    /// Returns the URL to display.
    #[must_use]
    pub fn url(&self) -> &str {
        match (&self.candidate, self.status) {
            (Some(url), status) if status != PosterStatus::Failed => url.as_str(),
            _ => POSTER_PLACEHOLDER_URL,
        }
    }

    /// Returns current load status.
    #[must_use]
    pub const fn status(&self) -> PosterStatus {
        self.status
    }

    /// Returns whether the placeholder is shown.
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.url() == POSTER_PLACEHOLDER_URL
    }

    /// Returns URL still to be loaded, marking it as in flight.
    pub fn start_load(&mut self) -> Option<String> {
        if self.status != PosterStatus::Pending || self.is_placeholder() {
            return None;
        }
        self.status = PosterStatus::Loading;
        self.candidate.clone()
    }

    /// Records a successful load.
    pub fn mark_loaded(&mut self) {
        self.status = PosterStatus::Loaded;
    }

    /// Records a load error; the placeholder replaces the candidate.
    pub fn mark_failed(&mut self) {
        self.status = PosterStatus::Failed;
    }
}

/// Display-ready film card.
#[derive(Debug, Clone, PartialEq)]
pub struct FilmCard {
    /// Film ID.
    pub id: u64,
    /// Title, falling back to the alternative name.
    pub title: String,
    /// Release year.
    pub year: Option<i32>,
    /// Rating text or the "not available" marker.
    pub rating: String,
    /// Up to three genres.
    pub genres: Vec<String>,
    /// Possibly truncated description or a placeholder.
    pub description: String,
    /// First country.
    pub country: String,
    /// Poster image source.
    pub poster: PosterSource,
}

impl FilmCard {
    /// Derives card text defensively from a film.
    #[must_use]
    pub fn from_film(film: &Film) -> Self {
        let title = non_empty(film.name.as_deref())
            .or_else(|| non_empty(film.alternative_name.as_deref()))
            .unwrap_or(UNTITLED)
            .to_string();

        Self {
            id: film.id,
            title,
            year: film.year,
            rating: rating_text(film.rating.as_ref()),
            genres: film
                .genres
                .iter()
                .take(GENRE_LIMIT)
                .map(|genre| genre.name.clone())
                .collect(),
            description: description_text(film.description.as_deref()),
            country: film
                .countries
                .first()
                .and_then(|country| non_empty(Some(country.name.as_str())))
                .unwrap_or(DEFAULT_COUNTRY)
                .to_string(),
            poster: PosterSource::from_poster(film.poster.as_ref()),
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}

fn rating_text(rating: Option<&Rating>) -> String {
    match rating.and_then(|rating| rating.kp) {
        Some(kp) if kp.is_finite() && kp != 0.0 => format!("{kp:.1}"),
        _ => RATING_UNAVAILABLE.to_string(),
    }
}

fn description_text(description: Option<&str>) -> String {
    match non_empty(description) {
        Some(text) if text.chars().count() > DESCRIPTION_LIMIT => {
            let truncated: String = text.chars().take(DESCRIPTION_LIMIT).collect();
            format!("{truncated}...")
        }
        Some(text) => text.to_string(),
        None => DESCRIPTION_MISSING.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn film() -> Film {
        Film {
            id: 1,
            name: Some("Легенда №17".to_string()),
            alternative_name: None,
            year: Some(2013),
            rating: Some(Rating { kp: Some(7.97) }),
            description: Some("Хоккей".to_string()),
            poster: Some(Poster {
                preview_url: Some("https://img/preview.jpg".to_string()),
                url: Some("https://img/full.jpg".to_string()),
            }),
            genres: vec![
                NamedItem::new("драма"),
                NamedItem::new("спорт"),
                NamedItem::new("биография"),
                NamedItem::new("история"),
            ],
            countries: vec![NamedItem::new("Россия")],
        }
    }

    #[test]
    fn test_card_from_complete_film() {
        let card = FilmCard::from_film(&film());

        assert_eq!(card.title, "Легенда №17");
        assert_eq!(card.rating, "8.0");
        assert_eq!(card.genres.len(), 3);
        assert_eq!(card.poster.url(), "https://img/preview.jpg");
    }

    #[test]
    fn test_missing_rating_shows_marker() {
        let mut film = film();
        film.rating = Some(Rating { kp: None });
        assert_eq!(FilmCard::from_film(&film).rating, "Н/Д");

        film.rating = None;
        assert_eq!(FilmCard::from_film(&film).rating, "Н/Д");
    }

    #[test]
    fn test_name_falls_back_to_alternative_name() {
        let mut film = film();
        film.name = Some(String::new());
        film.alternative_name = Some("Legend No. 17".to_string());
        assert_eq!(FilmCard::from_film(&film).title, "Legend No. 17");
    }

    #[test]
    fn test_long_description_is_truncated_by_chars() {
        let mut film = film();
        film.description = Some("я".repeat(200));

        let card = FilmCard::from_film(&film);
        assert_eq!(card.description.chars().count(), 153);
        assert!(card.description.ends_with("..."));
    }

    #[test]
    fn test_description_of_exactly_limit_is_kept() {
        let mut film = film();
        film.description = Some("a".repeat(150));
        assert_eq!(FilmCard::from_film(&film).description, "a".repeat(150));
    }

    #[test]
    fn test_missing_description_and_country() {
        let mut film = film();
        film.description = None;
        film.countries.clear();

        let card = FilmCard::from_film(&film);
        assert_eq!(card.description, "Описание отсутствует");
        assert_eq!(card.country, "Россия");
    }

    #[test]
    fn test_poster_falls_back_to_full_url_then_placeholder() {
        let mut film = film();
        film.poster = Some(Poster {
            preview_url: None,
            url: Some("https://img/full.jpg".to_string()),
        });
        let mut card = FilmCard::from_film(&film);
        assert_eq!(card.poster.url(), "https://img/full.jpg");

        assert_eq!(
            card.poster.start_load().as_deref(),
            Some("https://img/full.jpg")
        );
        assert!(card.poster.start_load().is_none());

        card.poster.mark_failed();
        assert_eq!(card.poster.url(), POSTER_PLACEHOLDER_URL);
    }

    #[test]
    fn test_missing_poster_never_loads() {
        let mut film = film();
        film.poster = None;
        let mut card = FilmCard::from_film(&film);

        assert!(card.poster.is_placeholder());
        assert!(card.poster.start_load().is_none());
    }

    #[test]
    fn test_deserialize_sparse_film() {
        let json = r#"{"id": 42, "name": "Т-34", "rating": {"imdb": 6.6}, "genres": [{"name": "военный"}], "countries": null}"#;
        let film: Film = serde_json::from_str(json).unwrap();

        let card = FilmCard::from_film(&film);
        assert_eq!(card.rating, "Н/Д");
        assert_eq!(card.year, None);
        assert_eq!(card.genres, vec!["военный".to_string()]);
    }
}
