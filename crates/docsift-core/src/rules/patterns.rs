//! Common regex patterns for document field extraction.
//!
//! Lists are ordered by priority: extractors try them front to back and the
//! first pattern that matches wins.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Invoice number patterns (INV-123, Invoice #123, Invoice Number: A12)
    pub static ref INVOICE_NUMBER: [Regex; 3] = [
        Regex::new(r"(?i)INV[:\s-]*(\d+)").unwrap(),
        Regex::new(r"(?i)Invoice\s*#?\s*(\d+)").unwrap(),
        Regex::new(r"(?i)Invoice\s*Number[:\s]*(\w+)").unwrap(),
    ];

    // Receipt number patterns
    pub static ref RECEIPT_NUMBER: [Regex; 3] = [
        Regex::new(r"(?i)Receipt\s*#?\s*(\w+)").unwrap(),
        Regex::new(r"(?i)REC[:\s-]*(\d+)").unwrap(),
        Regex::new(r"(?i)Transaction\s*ID[:\s]*(\w+)").unwrap(),
    ];

    // SKU / product code patterns
    pub static ref SKU: [Regex; 3] = [
        Regex::new(r"(?i)SKU[:\s]*(\w+)").unwrap(),
        Regex::new(r"(?i)(?:Product\s*)?Code[:\s]*(\w+)").unwrap(),
        Regex::new(r"(?i)(?:Item|Part)\s*#[:\s]*(\w+)").unwrap(),
    ];

    // Dates: 12/31/2024, 31-12-24, then ISO 2024-12-31 (also as the date part
    // of 2024-12-31T10:30:00)
    pub static ref DATE_NUMERIC: Regex = Regex::new(
        r"\b(\d{1,2})[/-](\d{1,2})[/-](\d{2,4})\b"
    ).unwrap();

    pub static ref DATE_ISO: Regex = Regex::new(
        r"\b(\d{4})-(\d{1,2})-(\d{1,2})(?:\b|T)"
    ).unwrap();

    // Amounts: $1,234.56, 1,234.56 USD, Total: 1234.56
    pub static ref AMOUNT: [Regex; 3] = [
        Regex::new(r"\$[\d,]+\.?\d{0,2}").unwrap(),
        Regex::new(r"(?i)[\d,]+\.?\d{0,2}\s*(?:USD|dollars)").unwrap(),
        Regex::new(r"(?i)(?:Total|Amount|Price)[:\s]*\$?([\d,]+\.?\d{0,2})").unwrap(),
    ];

    // Line item: <qty> <description> <price>
    pub static ref LINE_ITEM: Regex = Regex::new(
        r"(\d+)\s+(.+?)\s+\$?([\d.]+)"
    ).unwrap();
}

/// Payment methods recognized on receipts, in priority order.
pub const PAYMENT_METHODS: [&str; 6] = [
    "credit card",
    "cash",
    "debit",
    "check",
    "paypal",
    "apple pay",
];

/// Lines containing any of these are never taken as a product name.
pub const PRODUCT_NAME_SKIP_WORDS: [&str; 4] = ["price", "qty", "total", "amount"];
