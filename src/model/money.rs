//! Lenient money parsing and display shared by menu ingestion and order extraction.

use rust_decimal::Decimal;
use std::str::FromStr;

const CURRENCY_SYMBOLS: &[char] = &['$', '€', '£', '¥'];

/// Parse an amount such as `"$4.50"`, `"1,200.00"` or `" 3 "`.
///
/// Currency symbols, thousands separators and whitespace are stripped first.
/// Returns `None` for anything that still isn't a plain decimal number.
pub fn parse_amount(raw: &str) -> Option<Decimal> {
    let cleaned: String = raw
        .chars()
        .filter(|c| !CURRENCY_SYMBOLS.contains(c) && *c != ',' && !c.is_whitespace())
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    Decimal::from_str(&cleaned).ok()
}

/// Render a price with two decimal places and a dollar sign.
pub fn format_price(amount: Decimal) -> String {
    format!("${:.2}", amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_currency_and_separators() {
        assert_eq!(parse_amount("$4.50"), Some(Decimal::new(450, 2)));
        assert_eq!(parse_amount("€ 1,200.00"), Some(Decimal::new(120000, 2)));
        assert_eq!(parse_amount("  3 "), Some(Decimal::from(3)));
    }

    #[test]
    fn rejects_words() {
        assert_eq!(parse_amount("lots"), None);
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("$"), None);
        assert_eq!(parse_amount("4.50 each"), None);
    }

    #[test]
    fn formats_two_places() {
        assert_eq!(format_price(Decimal::new(45, 1)), "$4.50");
        assert_eq!(format_price(Decimal::from(3)), "$3.00");
    }
}
