//! Exchange rates and currency conversion.

use std::collections::BTreeMap;

use crate::domain::rounding::round_half_up;

/// ISO-4217-like currency code, stored uppercase.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    /// Base currency of every rate table.
    pub const BASE: &'static str = "USD";

    /// Creates code, normalising to uppercase.
    ///
    /// Returns `None` for empty or non-alphabetic input.
    #[must_use]
    pub fn new(code: impl AsRef<str>) -> Option<Self> {
        let code = code.as_ref().trim();
        if code.is_empty() || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            return None;
        }
        Some(Self(code.to_ascii_uppercase()))
    }

    /// Returns code as string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns whether this is the base currency.
    #[must_use]
    pub fn is_base(&self) -> bool {
        self.0 == Self::BASE
    }
}

impl std::fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Currency offered in the converter's selectors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurrencyInfo {
    /// Currency code.
    pub code: &'static str,
    /// Reference description.
    pub description: &'static str,
    /// Rate to USD in the demonstration table.
    pub demo_rate: f64,
}

/// Currencies shown in the converter, in display order.
pub const POPULAR_CURRENCIES: [CurrencyInfo; 6] = [
    CurrencyInfo {
        code: "USD",
        description: "Доллар США (базовая валюта)",
        demo_rate: 1.0,
    },
    CurrencyInfo {
        code: "EUR",
        description: "Евро (Европейский союз)",
        demo_rate: 0.92,
    },
    CurrencyInfo {
        code: "GBP",
        description: "Фунт стерлингов (Великобритания)",
        demo_rate: 0.79,
    },
    CurrencyInfo {
        code: "JPY",
        description: "Иена (Япония)",
        demo_rate: 147.5,
    },
    CurrencyInfo {
        code: "CNY",
        description: "Юань (Китай)",
        demo_rate: 7.2,
    },
    CurrencyInfo {
        code: "RUB",
        description: "Российский рубль",
        demo_rate: 75.5,
    },
];

/// Amount and currency pair to convert.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRequest {
    /// Amount in `from` currency.
    pub amount: f64,
    /// Source currency.
    pub from: CurrencyCode,
    /// Target currency.
    pub to: CurrencyCode,
}

impl ConversionRequest {
    /// Creates new request.
    #[must_use]
    pub const fn new(amount: f64, from: CurrencyCode, to: CurrencyCode) -> Self {
        Self { amount, from, to }
    }
}

/// Derived conversion figures.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConversionResult {
    /// Converted amount, 2 decimal places.
    pub converted_amount: f64,
    /// Units of `to` per one `from`, 4 decimal places.
    pub from_to_rate: f64,
    /// Units of `from` per one `to`, 4 decimal places.
    pub to_from_rate: f64,
}

/// One row of the current rates table.
#[derive(Debug, Clone, PartialEq)]
pub struct RateRow {
    /// Currency code.
    pub code: &'static str,
    /// Rate to USD, if the table has it.
    pub rate_to_usd: Option<f64>,
    /// Rate expressed against RUB, if both rates are known.
    pub rate_to_rub: Option<f64>,
}

/// Rates relative to USD, replaced wholesale on every fetch.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExchangeRateTable {
    rates: BTreeMap<CurrencyCode, f64>,
}

impl ExchangeRateTable {
    /// Creates table from code/rate pairs.
    ///
    /// Invalid codes and rates that are not positive finite numbers are
    /// dropped.
    pub fn from_rates<I, S>(rates: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: AsRef<str>,
    {
        let rates = rates
            .into_iter()
            .filter(|(_, rate)| rate.is_finite() && *rate > 0.0)
            .filter_map(|(code, rate)| CurrencyCode::new(code).map(|code| (code, rate)))
            .collect();
        Self { rates }
    }

    /// Returns the fixed demonstration table.
    #[must_use]
    pub fn demo() -> Self {
        Self::from_rates(
            POPULAR_CURRENCIES
                .iter()
                .map(|info| (info.code, info.demo_rate)),
        )
    }

    /// Returns rate for `code`.
    #[must_use]
    pub fn get(&self, code: &CurrencyCode) -> Option<f64> {
        self.rates.get(code).copied()
    }

    /// Returns rate for a code given as text.
    #[must_use]
    pub fn get_str(&self, code: &str) -> Option<f64> {
        CurrencyCode::new(code).and_then(|code| self.get(&code))
    }

    /// Converts through USD.
    ///
    /// Returns `None` when the amount is negative or not finite, when either
    /// currency is missing from the table, or when the result overflows.
    #[must_use]
    pub fn convert(&self, request: &ConversionRequest) -> Option<ConversionResult> {
        if !request.amount.is_finite() || request.amount < 0.0 {
            return None;
        }

        let from_rate = self.get(&request.from)?;
        let to_rate = self.get(&request.to)?;

        let amount_in_usd = if request.from.is_base() {
            request.amount
        } else {
            request.amount / from_rate
        };

        let converted = if request.to.is_base() {
            amount_in_usd
        } else {
            amount_in_usd * to_rate
        };
        if !converted.is_finite() {
            return None;
        }

        Some(ConversionResult {
            converted_amount: round_half_up(converted, 2),
            from_to_rate: round_half_up(to_rate / from_rate, 4),
            to_from_rate: round_half_up(from_rate / to_rate, 4),
        })
    }

    /// Builds the rates table rows for every popular currency except USD.
    #[must_use]
    pub fn rate_rows(&self) -> Vec<RateRow> {
        let rub = self.get_str("RUB");

        POPULAR_CURRENCIES
            .iter()
            .filter(|info| info.code != CurrencyCode::BASE)
            .map(|info| {
                let rate_to_usd = self.get_str(info.code);
                let rate_to_rub = rate_to_usd.zip(rub).map(|(rate, rub)| rate / rub);
                RateRow {
                    code: info.code,
                    rate_to_usd,
                    rate_to_rub,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> CurrencyCode {
        CurrencyCode::new(s).unwrap()
    }

    fn table() -> ExchangeRateTable {
        ExchangeRateTable::from_rates([("USD", 1.0), ("RUB", 75.5)])
    }

    #[test]
    fn test_usd_to_rub_example() {
        let result = table()
            .convert(&ConversionRequest::new(100.0, code("USD"), code("RUB")))
            .unwrap();

        assert!((result.converted_amount - 7550.00).abs() < 1e-9);
        assert!((result.from_to_rate - 75.5).abs() < 1e-9);
        assert!((result.to_from_rate - 0.0132).abs() < 1e-9);
    }

    #[test]
    fn test_huge_amounts_stay_finite_or_are_rejected() {
        let rates = ExchangeRateTable::from_rates([("USD", 1.0), ("JPY", 150.0), ("RUB", 75.5)]);

        let result = rates
            .convert(&ConversionRequest::new(1e308, code("JPY"), code("RUB")))
            .unwrap();
        assert!(result.converted_amount.is_finite());
        assert!((result.converted_amount / 5.033e307 - 1.0).abs() < 1e-3);

        assert!(
            rates
                .convert(&ConversionRequest::new(1e308, code("USD"), code("RUB")))
                .is_none()
        );
    }

    #[test]
    fn test_cross_conversion_goes_through_usd() {
        let rates = ExchangeRateTable::demo();
        let result = rates
            .convert(&ConversionRequest::new(10.0, code("EUR"), code("RUB")))
            .unwrap();

        // 10 / 0.92 * 75.5 = 820.652...
        assert!((result.converted_amount - 820.65).abs() < 1e-9);
    }

    #[test]
    fn test_zero_amount_converts_to_zero() {
        let result = table()
            .convert(&ConversionRequest::new(0.0, code("RUB"), code("USD")))
            .unwrap();
        assert!(result.converted_amount.abs() < f64::EPSILON);
    }

    #[test]
    fn test_rejects_invalid_requests() {
        let rates = table();
        assert!(
            rates
                .convert(&ConversionRequest::new(-1.0, code("USD"), code("RUB")))
                .is_none()
        );
        assert!(
            rates
                .convert(&ConversionRequest::new(f64::NAN, code("USD"), code("RUB")))
                .is_none()
        );
        assert!(
            rates
                .convert(&ConversionRequest::new(1.0, code("USD"), code("EUR")))
                .is_none()
        );
    }

    #[test]
    fn test_from_rates_drops_invalid_entries() {
        let rates = ExchangeRateTable::from_rates([
            ("usd", 1.0),
            ("EUR", 0.0),
            ("GBP", -1.0),
            ("JPY", f64::INFINITY),
            ("1X", 3.0),
        ]);
        assert_eq!(rates.get_str("USD"), Some(1.0));
        for code in ["EUR", "GBP", "JPY", "1X"] {
            assert_eq!(rates.get_str(code), None, "{code} should be dropped");
        }
    }

    #[test]
    fn test_rate_rows_skip_base_and_leave_gaps_empty() {
        let rows = table().rate_rows();
        assert_eq!(rows.len(), POPULAR_CURRENCIES.len() - 1);
        assert!(rows.iter().all(|row| row.code != "USD"));

        let eur = rows.iter().find(|row| row.code == "EUR").unwrap();
        assert_eq!(eur.rate_to_usd, None);
        assert_eq!(eur.rate_to_rub, None);

        let rub = rows.iter().find(|row| row.code == "RUB").unwrap();
        assert!((rub.rate_to_rub.unwrap() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_currency_code_normalises() {
        assert_eq!(code("rub").as_str(), "RUB");
        assert!(CurrencyCode::new("").is_none());
        assert!(CurrencyCode::new("U$D").is_none());
    }

    #[test]
    fn test_popular_currencies_start_with_base() {
        assert_eq!(
            POPULAR_CURRENCIES[0],
            CurrencyInfo {
                code: "USD",
                description: "Доллар США (базовая валюта)",
                demo_rate: 1.0,
            }
        );
        assert!(POPULAR_CURRENCIES.iter().all(|info| info.demo_rate > 0.0));
    }
}
