//! Document identifier extraction (invoice numbers, receipt numbers, SKUs).

use regex::Regex;

use super::patterns::{INVOICE_NUMBER, RECEIPT_NUMBER, SKU};
use super::FieldExtractor;

/// An ordered list of patterns whose first capture group is the value.
pub struct PatternList<'a> {
    patterns: &'a [Regex],
}

impl<'a> PatternList<'a> {
    pub fn new(patterns: &'a [Regex]) -> Self {
        Self { patterns }
    }
}

impl FieldExtractor for PatternList<'_> {
    type Output = String;

    fn extract(&self, text: &str) -> Option<String> {
        self.patterns
            .iter()
            .find_map(|pattern| pattern.captures(text))
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    }
}

/// Extract an invoice number such as `INV-123` or `Invoice #123`.
pub fn extract_invoice_number(text: &str) -> Option<String> {
    PatternList::new(INVOICE_NUMBER.as_slice()).extract(text)
}

/// Extract a receipt or transaction number.
pub fn extract_receipt_number(text: &str) -> Option<String> {
    PatternList::new(RECEIPT_NUMBER.as_slice()).extract(text)
}

/// Extract a SKU, product code or item/part number.
pub fn extract_sku(text: &str) -> Option<String> {
    PatternList::new(SKU.as_slice()).extract(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invoice_number_hash() {
        assert_eq!(extract_invoice_number("Invoice #4521"), Some("4521".to_string()));
    }

    #[test]
    fn test_invoice_number_inv_prefix() {
        assert_eq!(extract_invoice_number("Ref INV-00917 due"), Some("00917".to_string()));
        assert_eq!(extract_invoice_number("inv: 42"), Some("42".to_string()));
    }

    #[test]
    fn test_invoice_number_labeled() {
        assert_eq!(
            extract_invoice_number("Invoice Number: AB77"),
            Some("AB77".to_string())
        );
    }

    #[test]
    fn test_invoice_number_priority() {
        // The INV pattern outranks the "Invoice #" pattern even when it appears later.
        let text = "Invoice #100\nINV-200";
        assert_eq!(extract_invoice_number(text), Some("200".to_string()));
    }

    #[test]
    fn test_invoice_number_absent() {
        assert_eq!(extract_invoice_number("Thank you for your business"), None);
        assert_eq!(extract_invoice_number(""), None);
    }

    #[test]
    fn test_receipt_number() {
        assert_eq!(extract_receipt_number("Receipt # A1234"), Some("A1234".to_string()));
        assert_eq!(extract_receipt_number("Transaction ID: TX99"), Some("TX99".to_string()));
        assert_eq!(extract_receipt_number("hello world"), None);
    }

    #[test]
    fn test_sku() {
        assert_eq!(extract_sku("SKU: WID-001"), Some("WID".to_string()));
        assert_eq!(extract_sku("Product Code: X77"), Some("X77".to_string()));
        assert_eq!(extract_sku("Part #: 5521"), Some("5521".to_string()));
        assert_eq!(extract_sku("Organic apples"), None);
    }
}
