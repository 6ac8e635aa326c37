//! Exchange rates feed.

use crate::domain::entities::ExchangeRateTable;
use crate::domain::errors::FetchError;
use crate::domain::ports::{HttpRequest, PanelFeed};

use super::dto::RatesResponse;

const REQUIRED_CODE: &str = "RUB";
const MISSING_REQUIRED_RATE: &str = "rates.RUB is missing";

const WARNING_GENERIC: &str = "Не удалось загрузить актуальные курсы валют. Используются демо-данные.";
const WARNING_MISSING_RUB: &str = "API не вернул курс для RUB. Используются демо-данные.";

/// Feed for the currency converter panel.
#[derive(Debug, Clone)]
pub struct CurrencyFeed {
    url: String,
}

impl CurrencyFeed {
    /// Creates feed for the given rates endpoint.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl PanelFeed for CurrencyFeed {
    type Raw = RatesResponse;
    type ViewModel = ExchangeRateTable;

    fn name(&self) -> &'static str {
        "currency"
    }

    fn request(&self) -> HttpRequest {
        HttpRequest::get(&self.url).header("Accept", "application/json")
    }

    fn transform(&self, raw: RatesResponse) -> Result<ExchangeRateTable, FetchError> {
        if raw.result.as_deref() == Some("error") {
            return Err(FetchError::api(
                raw.error_type.unwrap_or_else(|| "unknown error".to_string()),
            ));
        }

        let rates = raw
            .rates
            .ok_or_else(|| FetchError::shape("rates field is missing"))?;
        let table = ExchangeRateTable::from_rates(rates);

        if table.get_str(REQUIRED_CODE).is_none() {
            return Err(FetchError::shape(MISSING_REQUIRED_RATE));
        }

        Ok(table)
    }

    fn fallback(&self) -> ExchangeRateTable {
        ExchangeRateTable::demo()
    }

    fn fallback_warning(&self, error: &FetchError) -> String {
        match error {
            FetchError::Shape { reason } if reason == MISSING_REQUIRED_RATE => {
                WARNING_MISSING_RUB.to_string()
            }
            _ => WARNING_GENERIC.to_string(),
        }
    }
}
