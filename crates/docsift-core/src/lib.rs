//! Core library for document field extraction.
//!
//! This crate provides:
//! - Text recognition from images (pure-onnx-ocr primary, tesseract fallback)
//! - Text-layer extraction from PDFs
//! - Barcode decoding
//! - Heuristic field extraction for invoices, receipts and product labels

pub mod barcode;
pub mod documents;
pub mod error;
pub mod models;
pub mod ocr;
pub mod pdf;
pub mod rules;

pub use barcode::BarcodeReader;
pub use documents::{DocumentKind, DocumentProcessor};
pub use error::{DocsiftError, Result};
pub use models::config::DocsiftConfig;
pub use models::document::{
    BarcodeScan, InvoiceData, LineItem, PdfDocument, ProductInfo, ReceiptData, TextData,
};
pub use ocr::{OcrEngine, ProviderKind, TextExtractor, TextRecognizer};
pub use pdf::{PdfContent, PdfExtractor};
