//! Payment method detection for receipts.

use super::patterns::PAYMENT_METHODS;

/// Return the first known payment method mentioned anywhere in the text.
pub fn extract_payment_method(text: &str) -> Option<String> {
    let lower = text.to_lowercase();
    PAYMENT_METHODS
        .iter()
        .find(|method| lower.contains(*method))
        .map(|method| method.to_string())
}
