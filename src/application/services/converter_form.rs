//! Currency converter form state.

use std::sync::OnceLock;

use regex::Regex;

use crate::domain::entities::{
    ConversionRequest, ConversionResult, CurrencyCode, ExchangeRateTable, POPULAR_CURRENCIES,
};
use crate::domain::errors::AmountError;

const INITIAL_AMOUNT: &str = "1";
const INITIAL_FROM: usize = 0;
const INITIAL_TO: usize = 5;

fn amount_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d*\.?\d*$").expect("Invalid regex"))
}

/// Parses the amount field.
///
/// # Errors
///
/// Returns [`AmountError`] when the text is empty, not a number, or not a
/// non-negative finite value.
pub fn parse_amount(text: &str) -> Result<f64, AmountError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(AmountError::Empty);
    }

    let amount: f64 = text.parse().map_err(|_| AmountError::NotANumber)?;
    if !amount.is_finite() || amount < 0.0 {
        return Err(AmountError::OutOfRange);
    }
    Ok(amount)
}

/// Converter form: amount text, currency selection and derived result.
///
/// The result is recomputed against the panel's current table after every
/// edit; a missing result means the inputs cannot be converted.
#[derive(Debug, Clone)]
pub struct ConverterForm {
    amount: String,
    from: usize,
    to: usize,
    result: Option<ConversionResult>,
}

impl Default for ConverterForm {
    fn default() -> Self {
        Self {
            amount: INITIAL_AMOUNT.to_string(),
            from: INITIAL_FROM,
            to: INITIAL_TO,
            result: None,
        }
    }
}

impl ConverterForm {
    /// Returns amount text.
    #[must_use]
    pub fn amount(&self) -> &str {
        &self.amount
    }

    /// Returns source currency code.
    #[must_use]
    pub const fn from_code(&self) -> &'static str {
        POPULAR_CURRENCIES[self.from].code
    }

    /// Returns target currency code.
    #[must_use]
    pub const fn to_code(&self) -> &'static str {
        POPULAR_CURRENCIES[self.to].code
    }

    /// Returns last computed result.
    #[must_use]
    pub const fn result(&self) -> Option<&ConversionResult> {
        self.result.as_ref()
    }

    /// Appends a character to the amount if the result still matches the
    /// amount pattern.
    ///
    /// Returns whether the text changed.
    pub fn input_char(&mut self, c: char) -> bool {
        let mut candidate = self.amount.clone();
        candidate.push(c);
        if !amount_pattern().is_match(&candidate) {
            return false;
        }
        self.amount = candidate;
        true
    }

    /// Removes the last character of the amount.
    pub fn backspace(&mut self) -> bool {
        self.amount.pop().is_some()
    }

    /// Selects the next (or previous) source currency.
    pub fn cycle_from(&mut self, forward: bool) {
        self.from = cycle(self.from, forward);
    }

    /// Selects the next (or previous) target currency.
    pub fn cycle_to(&mut self, forward: bool) {
        self.to = cycle(self.to, forward);
    }

    /// Exchanges source and target currencies.
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.from, &mut self.to);
    }

    /// Recomputes the result against `rates`.
    pub fn recompute(&mut self, rates: &ExchangeRateTable) {
        self.result = self.request().and_then(|request| rates.convert(&request));
    }

    fn request(&self) -> Option<ConversionRequest> {
        let amount = parse_amount(&self.amount).ok()?;
        let from = CurrencyCode::new(self.from_code())?;
        let to = CurrencyCode::new(self.to_code())?;
        Some(ConversionRequest::new(amount, from, to))
    }
}

const fn cycle(index: usize, forward: bool) -> usize {
    let len = POPULAR_CURRENCIES.len();
    if forward {
        (index + 1) % len
    } else {
        (index + len - 1) % len
    }
}
