//! Curated films feed.

use crate::domain::entities::{Film, FilmCard, NamedItem, Rating};
use crate::domain::errors::FetchError;
use crate::domain::ports::{HttpRequest, PanelFeed};

use super::dto::FilmsResponse;

const QUERY: &str = "page=1&limit=20&lists=top250&year=2010-2023&countries.name=Россия";
const API_KEY_HEADER: &str = "X-API-KEY";

/// Feed for the films panel.
#[derive(Debug, Clone)]
pub struct FilmsFeed {
    url: String,
    api_key: Option<String>,
}

impl FilmsFeed {
    /// Creates feed for the given movie search endpoint.
    #[must_use]
    pub fn new(url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            url: url.into(),
            api_key,
        }
    }
}

impl PanelFeed for FilmsFeed {
    type Raw = FilmsResponse;
    type ViewModel = Vec<FilmCard>;

    fn name(&self) -> &'static str {
        "films"
    }

    fn request(&self) -> HttpRequest {
        let request = HttpRequest::get(format!("{}?{QUERY}", self.url));
        match &self.api_key {
            Some(key) => request.header(API_KEY_HEADER, key.as_str()),
            None => request,
        }
    }

    fn transform(&self, raw: FilmsResponse) -> Result<Vec<FilmCard>, FetchError> {
        let docs = raw
            .docs
            .ok_or_else(|| FetchError::shape("docs field is missing"))?;
        Ok(docs.iter().map(FilmCard::from_film).collect())
    }

    fn fallback(&self) -> Vec<FilmCard> {
        demo_films().iter().map(FilmCard::from_film).collect()
    }

    fn fallback_warning(&self, error: &FetchError) -> String {
        format!("Ошибка загрузки данных ({error}). Используются демонстрационные данные.")
    }
}

fn demo_film(id: u64, name: &str, year: i32, kp: f64, genres: &[&str], description: &str) -> Film {
    Film {
        id,
        name: Some(name.to_string()),
        alternative_name: None,
        year: Some(year),
        rating: Some(Rating { kp: Some(kp) }),
        description: Some(description.to_string()),
        poster: None,
        genres: genres.iter().copied().map(NamedItem::new).collect(),
        countries: vec![NamedItem::new("Россия")],
    }
}

fn demo_films() -> Vec<Film> {
    vec![
        demo_film(
            1,
            "Легенда №17",
            2013,
            8.0,
            &["драма", "спорт", "биография"],
            "Судьба хоккеиста Валерия Харламова от первых тренировок до легендарной суперсерии 1972 года.",
        ),
        demo_film(
            2,
            "Движение вверх",
            2017,
            7.5,
            &["драма", "спорт", "история"],
            "Сборная СССР по баскетболу бросает вызов непобедимой команде США на Олимпиаде 1972 года.",
        ),
        demo_film(
            3,
            "Брестская крепость",
            2010,
            7.9,
            &["военный", "драма", "история"],
            "Оборона Брестской крепости в первые дни Великой Отечественной войны глазами юного воспитанника полка.",
        ),
        demo_film(
            4,
            "Т-34",
            2018,
            6.9,
            &["военный", "боевик", "драма"],
            "Танкист Николай Ивушкин бежит из немецкого плена на легендарном танке.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_carries_query_and_key() {
        let feed = FilmsFeed::new("https://films.test/v1.4/movie", Some("KEY".to_string()));
        let request = feed.request();

        assert_eq!(
            request.url,
            "https://films.test/v1.4/movie?page=1&limit=20&lists=top250&year=2010-2023&countries.name=Россия"
        );
        assert_eq!(request.headers, vec![("X-API-KEY", "KEY".to_string())]);
    }

    #[test]
    fn test_request_without_key_is_still_issued() {
        let feed = FilmsFeed::new("https://films.test/v1.4/movie", None);
        assert!(feed.request().headers.is_empty());
    }

    #[test]
    fn test_transform_builds_cards_in_order() {
        let feed = FilmsFeed::new("https://films.test", None);
        let raw: FilmsResponse = serde_json::from_str(
            r#"{"docs": [{"id": 1, "name": "А"}, {"id": "2", "alternativeName": "B"}]}"#,
        )
        .unwrap();

        let cards = feed.transform(raw).unwrap();

        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].title, "А");
        assert_eq!(cards[1].title, "B");
        assert_eq!(cards[1].description, "Описание отсутствует");
    }

    #[test]
    fn test_empty_docs_is_live_empty_list() {
        let feed = FilmsFeed::new("https://films.test", None);
        let raw: FilmsResponse = serde_json::from_str(r#"{"docs": []}"#).unwrap();
        assert!(feed.transform(raw).unwrap().is_empty());
    }

    #[test]
    fn test_fallback_is_non_empty_and_warns() {
        let feed = FilmsFeed::new("https://films.test", None);

        assert!(!feed.fallback().is_empty());
        let warning = feed.fallback_warning(&FetchError::status(401));
        assert!(warning.contains("HTTP error! status: 401"));
        assert!(warning.ends_with("Используются демонстрационные данные."));
    }
}
