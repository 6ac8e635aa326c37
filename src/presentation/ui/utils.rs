//! Text formatting helpers for the screens.

use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::domain::Provenance;

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const WEEKDAYS: [&str; 7] = ["Вс", "Пн", "Вт", "Ср", "Чт", "Пт", "Сб"];
const MONTHS: [&str; 12] = [
    "янв", "фев", "мар", "апр", "мая", "июн", "июл", "авг", "сен", "окт", "ноя", "дек",
];

/// Formats an amount `ru-RU` style with two decimals: `7 550,00 RUB`.
#[must_use]
pub fn format_money(amount: f64, code: &str) -> String {
    format!("{} {code}", format_grouped(amount, 2))
}

/// Formats a cross rate with four decimals and a comma separator.
#[must_use]
pub fn format_rate(rate: f64) -> String {
    format!("{rate:.4}").replace('.', ",")
}

fn format_grouped(value: f64, decimals: usize) -> String {
    let fixed = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));

    let len = int_part.len();
    let mut grouped = String::with_capacity(len + len / 3 + decimals + 2);
    if value.is_sign_negative() && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
        grouped.push('-');
    }
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(digit);
    }
    if !frac_part.is_empty() {
        grouped.push(',');
        grouped.push_str(frac_part);
    }
    grouped
}

/// Labels a forecast date relative to `today`.
///
/// Returns the input unchanged if it is not a `YYYY-MM-DD` date.
#[must_use]
pub fn date_label(date: &str, today: NaiveDate) -> String {
    let Ok(parsed) = NaiveDate::parse_from_str(date, "%Y-%m-%d") else {
        return date.to_string();
    };

    if parsed == today {
        return "Сегодня".to_string();
    }
    if today.succ_opt() == Some(parsed) {
        return "Завтра".to_string();
    }

    let weekday = WEEKDAYS[parsed.weekday().num_days_from_sunday() as usize];
    let month = MONTHS[parsed.month0() as usize];
    format!("{weekday}, {} {month}", parsed.day())
}

/// Formats an API observation time (`2024-01-15T14:30`) as `HH:MM`.
#[must_use]
pub fn format_time_hhmm(time: &str) -> String {
    if let Ok(dt) = NaiveDateTime::parse_from_str(time, "%Y-%m-%dT%H:%M") {
        return dt.format("%H:%M").to_string();
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(time) {
        let local: DateTime<Local> = dt.into();
        return local.format("%H:%M").to_string();
    }

    if let Some(time_part) = time.split('T').nth(1)
        && time_part.len() >= 5
        && time_part.is_char_boundary(5)
    {
        return time_part[..5].to_string();
    }

    time.to_string()
}

/// "Last updated" label; fallback data is marked as demonstration data.
#[must_use]
pub fn last_updated_label(provenance: Provenance, at: DateTime<Local>) -> String {
    let stamp = at.format("%d.%m.%Y, %H:%M:%S");
    match provenance {
        Provenance::Live => format!("Обновлено: {stamp}"),
        Provenance::Fallback => format!("Обновлено: Демо-данные: {stamp}"),
    }
}

/// Truncates text to `max_width` columns, appending an ellipsis when cut.
#[must_use]
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }

    let budget = max_width.saturating_sub(1);
    let mut width = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > budget {
            break;
        }
        width += w;
        out.push(c);
    }
    out.push('…');
    out
}

/// Returns the spinner glyph for a UI tick.
#[must_use]
pub const fn spinner_frame(tick: u64) -> &'static str {
    #[allow(clippy::cast_possible_truncation)]
    let index = (tick % SPINNER_FRAMES.len() as u64) as usize;
    SPINNER_FRAMES[index]
}
