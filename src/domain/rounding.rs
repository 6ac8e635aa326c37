//! Rounding helpers shared by the panels.

/// Rounds to `decimals` places, halves rounding towards positive infinity.
///
/// `round_half_up(-2.5, 0)` is `-2.0`, matching how the upstream APIs'
/// figures are usually presented. Values too large to scale are returned
/// unchanged; they have no fractional digits left to round.
#[must_use]
pub fn round_half_up(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    (scaled + 0.5).floor() / factor
}

/// Rounds to the nearest whole number, halves towards positive infinity.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn round_to_int(value: f64) -> i32 {
    (value + 0.5).floor() as i32
}
