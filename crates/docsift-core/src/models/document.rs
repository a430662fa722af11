//! Structured results produced by the document handlers.
//!
//! Field names follow the JSON contract consumed by API clients, so every
//! struct serializes with snake_case keys and `null` for missing values.

use chrono::{DateTime, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Confidence reported for heuristic extractions. Not computed from engine signals.
pub const HEURISTIC_CONFIDENCE: &str = "medium";

/// Number of characters of OCR text used as a product description.
pub const DESCRIPTION_CHARS: usize = 200;

/// A single purchased line: `<quantity> <description> <price>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub quantity: u64,
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

/// Fields extracted from an invoice image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceData {
    pub raw_text: String,
    pub vendor_name: Option<String>,
    pub invoice_number: Option<String>,
    pub invoice_date: Option<NaiveDateTime>,
    #[serde(with = "rust_decimal::serde::float_option")]
    pub total_amount: Option<Decimal>,
    pub items: Vec<LineItem>,
    pub confidence: String,
    pub extracted_at: DateTime<Utc>,
}

/// Fields extracted from a receipt image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReceiptData {
    pub raw_text: String,
    pub vendor: Option<String>,
    pub receipt_number: Option<String>,
    pub transaction_date: Option<NaiveDateTime>,
    #[serde(with = "rust_decimal::serde::float_option")]
    pub amount: Option<Decimal>,
    pub items: Vec<LineItem>,
    pub payment_method: Option<String>,
    pub extracted_at: DateTime<Utc>,
}

/// Catalog fields extracted from a product photo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductInfo {
    pub raw_text: String,
    pub product_name: Option<String>,
    pub sku: Option<String>,
    #[serde(with = "rust_decimal::serde::float_option")]
    pub price: Option<Decimal>,
    pub description: String,
    pub extracted_at: DateTime<Utc>,
}

/// Raw OCR text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextData {
    pub text: String,
}

/// Text layer of a PDF document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PdfDocument {
    pub document_type: String,
    pub page_count: u32,
    pub total_text: String,
    pub extracted_at: DateTime<Utc>,
}

/// Outcome of a barcode scan.
///
/// `barcode_data` and `barcode_type` are always present in JSON; the other
/// keys only appear for the outcome they describe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarcodeScan {
    pub found: bool,
    pub barcode_data: Option<String>,
    pub barcode_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extracted_at: Option<DateTime<Utc>>,
}

impl BarcodeScan {
    /// A decoded symbol.
    pub fn found(data: String, symbology: String, at: DateTime<Utc>) -> Self {
        Self {
            found: true,
            barcode_data: Some(data),
            barcode_type: Some(symbology),
            message: None,
            error: None,
            extracted_at: Some(at),
        }
    }

    /// The image decoded but held no readable symbol.
    pub fn not_found() -> Self {
        Self {
            found: false,
            barcode_data: None,
            barcode_type: None,
            message: Some("No barcode detected".to_string()),
            error: None,
            extracted_at: None,
        }
    }

    /// The scan itself failed.
    pub fn failed(error: impl Into<String>, at: DateTime<Utc>) -> Self {
        Self {
            found: false,
            barcode_data: None,
            barcode_type: None,
            message: None,
            error: Some(error.into()),
            extracted_at: Some(at),
        }
    }
}
