//! Result assembly: recognized text plus a timestamp in, structured record out.
//!
//! These are pure functions, so the same text and timestamp always produce
//! the same record.

use chrono::{DateTime, Utc};

use crate::models::document::{
    InvoiceData, ProductInfo, ReceiptData, DESCRIPTION_CHARS, HEURISTIC_CONFIDENCE,
};
use crate::rules::{
    extract_amount, extract_date, extract_invoice_number, extract_line_items,
    extract_payment_method, extract_product_name, extract_receipt_number, extract_sku,
    extract_vendor,
};

/// Build invoice fields from OCR text.
pub fn invoice_from_text(text: String, extracted_at: DateTime<Utc>) -> InvoiceData {
    InvoiceData {
        vendor_name: extract_vendor(&text),
        invoice_number: extract_invoice_number(&text),
        invoice_date: extract_date(&text),
        total_amount: extract_amount(&text),
        items: extract_line_items(&text),
        confidence: HEURISTIC_CONFIDENCE.to_string(),
        extracted_at,
        raw_text: text,
    }
}

/// Build receipt fields from OCR text.
pub fn receipt_from_text(text: String, extracted_at: DateTime<Utc>) -> ReceiptData {
    ReceiptData {
        vendor: extract_vendor(&text),
        receipt_number: extract_receipt_number(&text),
        transaction_date: extract_date(&text),
        amount: extract_amount(&text),
        items: extract_line_items(&text),
        payment_method: extract_payment_method(&text),
        extracted_at,
        raw_text: text,
    }
}

/// Build product catalog fields from OCR text.
pub fn product_from_text(text: String, extracted_at: DateTime<Utc>) -> ProductInfo {
    ProductInfo {
        product_name: extract_product_name(&text),
        sku: extract_sku(&text),
        price: extract_amount(&text),
        description: text.chars().take(DESCRIPTION_CHARS).collect(),
        extracted_at,
        raw_text: text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    use crate::models::document::LineItem;

    const INVOICE: &str = "Acme Supplies Ltd\n\
        123 Market Street\n\
        Invoice #4521\n\
        Date: 03/15/2024\n\
        2 Copy Paper $8.50\n\
        1 Stapler $12.00\n\
        Total: $29.00\n";

    const RECEIPT: &str = "CORNER CAFE\n\
        Receipt #R7781\n\
        2024-06-01\n\
        1 Latte 4.50\n\
        Total $4.50\n\
        Paid by Credit Card\n";

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 16, 9, 30, 0).unwrap()
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_invoice_fields() {
        let invoice = invoice_from_text(INVOICE.to_string(), at());

        assert_eq!(invoice.vendor_name.as_deref(), Some("Acme Supplies Ltd"));
        assert_eq!(invoice.invoice_number.as_deref(), Some("4521"));
        assert_eq!(
            invoice.invoice_date,
            NaiveDate::from_ymd_opt(2024, 3, 15).unwrap().and_hms_opt(0, 0, 0)
        );
        assert_eq!(invoice.total_amount, Some(dec("8.50")));
        assert_eq!(
            invoice.items,
            vec![
                LineItem {
                    quantity: 2,
                    description: "Copy Paper".to_string(),
                    price: dec("8.50"),
                },
                LineItem {
                    quantity: 1,
                    description: "Stapler".to_string(),
                    price: dec("12.00"),
                },
            ]
        );
        assert_eq!(invoice.confidence, "medium");
        assert_eq!(invoice.raw_text, INVOICE);
    }

    #[test]
    fn test_receipt_fields() {
        let receipt = receipt_from_text(RECEIPT.to_string(), at());

        assert_eq!(receipt.vendor.as_deref(), Some("CORNER CAFE"));
        assert_eq!(receipt.receipt_number.as_deref(), Some("R7781"));
        assert_eq!(
            receipt.transaction_date,
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap().and_hms_opt(0, 0, 0)
        );
        assert_eq!(receipt.amount, Some(dec("4.50")));
        assert_eq!(receipt.items.len(), 1);
        assert_eq!(receipt.payment_method.as_deref(), Some("credit card"));
    }

    #[test]
    fn test_product_fields() {
        let text = "Price $3.99\nOrganic Green Tea\nSKU: GT100\n".to_string();
        let product = product_from_text(text.clone(), at());

        assert_eq!(product.product_name.as_deref(), Some("Organic Green Tea"));
        assert_eq!(product.sku.as_deref(), Some("GT100"));
        assert_eq!(product.price, Some(dec("3.99")));
        assert_eq!(product.description, text);
    }

    #[test]
    fn test_product_description_truncated_by_chars() {
        let text = "é".repeat(250);
        let product = product_from_text(text, at());
        assert_eq!(product.description.chars().count(), DESCRIPTION_CHARS);
    }

    #[test]
    fn test_empty_text_yields_absent_fields() {
        let invoice = invoice_from_text(String::new(), at());

        assert_eq!(invoice.vendor_name, None);
        assert_eq!(invoice.invoice_number, None);
        assert_eq!(invoice.invoice_date, None);
        assert_eq!(invoice.total_amount, None);
        assert!(invoice.items.is_empty());
    }

    #[test]
    fn test_assembly_is_idempotent() {
        assert_eq!(
            invoice_from_text(INVOICE.to_string(), at()),
            invoice_from_text(INVOICE.to_string(), at())
        );
        assert_eq!(
            receipt_from_text(RECEIPT.to_string(), at()),
            receipt_from_text(RECEIPT.to_string(), at())
        );
    }

    #[test]
    fn test_invoice_json_shape() {
        let json = serde_json::to_value(invoice_from_text(INVOICE.to_string(), at())).unwrap();

        assert_eq!(json["invoice_date"], serde_json::json!("2024-03-15T00:00:00"));
        assert_eq!(json["total_amount"], serde_json::json!(8.5));
        assert_eq!(json["items"][1]["price"], serde_json::json!(12.0));
        assert_eq!(json["extracted_at"], serde_json::json!("2024-03-16T09:30:00Z"));
    }
}
