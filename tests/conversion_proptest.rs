use infodeck::domain::entities::{
    ConversionRequest, CurrencyCode, ExchangeRateTable, describe_weather_code,
    wind_direction_label,
};
use proptest::prelude::*;

const KNOWN_CODES: [i32; 28] = [
    0, 1, 2, 3, 45, 48, 51, 53, 55, 56, 57, 61, 63, 65, 66, 67, 71, 73, 75, 77, 80, 81, 82, 85,
    86, 95, 96, 99,
];
const COMPASS: [&str; 8] = ["С", "СВ", "В", "ЮВ", "Ю", "ЮЗ", "З", "СЗ"];

fn table(eur: f64, rub: f64) -> ExchangeRateTable {
    ExchangeRateTable::from_rates([("USD", 1.0), ("EUR", eur), ("RUB", rub)])
}

fn request(amount: f64, from: &str, to: &str) -> ConversionRequest {
    ConversionRequest::new(
        amount,
        CurrencyCode::new(from).unwrap(),
        CurrencyCode::new(to).unwrap(),
    )
}

proptest! {
    #[test]
    fn converting_there_and_back_stays_close(
        amount in 0.0f64..1_000_000.0,
        eur in 0.1f64..10.0,
        rub in 10.0f64..200.0,
    ) {
        let rates = table(eur, rub);
        let there = rates.convert(&request(amount, "EUR", "RUB")).unwrap();
        let back = rates
            .convert(&request(there.converted_amount, "RUB", "EUR"))
            .unwrap();

        // Each leg rounds to cents; the first leg's error scales by the inverse rate.
        let tolerance = 0.005 * (eur / rub) + 0.005 + amount * 1e-12;
        prop_assert!((back.converted_amount - amount).abs() <= tolerance + 1e-9);
    }

    #[test]
    fn cross_rates_are_reciprocal(eur in 0.1f64..10.0, rub in 0.1f64..10.0) {
        let result = table(eur, rub)
            .convert(&request(1.0, "EUR", "RUB"))
            .unwrap();

        prop_assert!((result.from_to_rate * result.to_from_rate - 1.0).abs() < 0.01);
    }

    #[test]
    fn converted_amount_has_at_most_two_decimals(
        amount in 0.0f64..100_000.0,
        rub in 1.0f64..200.0,
    ) {
        let result = table(0.92, rub)
            .convert(&request(amount, "USD", "RUB"))
            .unwrap();
        let cents = result.converted_amount * 100.0;

        prop_assert!(result.converted_amount >= 0.0);
        prop_assert!((cents - cents.round()).abs() < 1e-6);
    }

    #[test]
    fn negative_amounts_are_rejected(amount in -1_000_000.0f64..-0.001) {
        prop_assert!(table(0.92, 75.5).convert(&request(amount, "USD", "RUB")).is_none());
    }

    #[test]
    fn every_weather_code_has_a_description(code in any::<i32>()) {
        let condition = describe_weather_code(code);

        prop_assert!(!condition.description.is_empty());
        prop_assert!(!condition.icon.is_empty());
        if !KNOWN_CODES.contains(&code) {
            prop_assert_eq!(condition.description, "Неизвестно");
            prop_assert_eq!(condition.icon, "❓");
        }
    }

    #[test]
    fn wind_label_is_total_and_periodic(degrees in -100_000i32..100_000) {
        let degrees = f64::from(degrees);
        let label = wind_direction_label(degrees);

        prop_assert!(COMPASS.contains(&label));
        prop_assert_eq!(label, wind_direction_label(degrees + 360.0));
    }
}
