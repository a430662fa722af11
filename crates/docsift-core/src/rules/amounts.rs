//! Monetary amount extraction.

use rust_decimal::Decimal;
use std::str::FromStr;

use super::patterns::AMOUNT;
use super::FieldExtractor;

/// Amount field extractor.
pub struct AmountExtractor;

impl AmountExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AmountExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for AmountExtractor {
    type Output = Decimal;

    fn extract(&self, text: &str) -> Option<Decimal> {
        AMOUNT
            .iter()
            .find_map(|pattern| pattern.find(text).and_then(|m| parse_amount(m.as_str())))
    }
}

/// Extract an amount (`$1,234.56`, `99.50 USD`, `Total: 12`).
///
/// Only the first match of each pattern is considered; when it does not parse,
/// the next pattern is tried.
pub fn extract_amount(text: &str) -> Option<Decimal> {
    AmountExtractor::new().extract(text)
}

/// Parse an amount by keeping only digits and the decimal point.
pub fn parse_amount(s: &str) -> Option<Decimal> {
    let cleaned: String = s
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    let cleaned = cleaned.strip_suffix('.').unwrap_or(&cleaned);
    if cleaned.is_empty() {
        return None;
    }

    Decimal::from_str(cleaned).ok()
}
