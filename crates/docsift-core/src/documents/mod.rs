//! Document handlers: one composition of text extraction and heuristics per
//! document type.

mod assemble;

pub use assemble::{invoice_from_text, product_from_text, receipt_from_text};

use std::fmt;
use std::str::FromStr;

use chrono::Utc;
use serde::Serialize;
use tracing::info;

use crate::barcode::BarcodeReader;
use crate::error::{DocsiftError, Result};
use crate::models::config::DocsiftConfig;
use crate::models::document::{
    BarcodeScan, InvoiceData, PdfDocument, ProductInfo, ReceiptData, TextData,
};
use crate::ocr::{OcrEngine, TextExtractor};
use crate::pdf::{PdfExtractor, PdfProcessor};

/// Content type required for PDF uploads.
pub const PDF_CONTENT_TYPE: &str = "application/pdf";

/// The kinds of document the service understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Invoice,
    Receipt,
    Barcode,
    Product,
    Text,
    Pdf,
}

impl DocumentKind {
    pub const ALL: [DocumentKind; 6] = [
        DocumentKind::Invoice,
        DocumentKind::Receipt,
        DocumentKind::Barcode,
        DocumentKind::Product,
        DocumentKind::Text,
        DocumentKind::Pdf,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentKind::Invoice => "invoice",
            DocumentKind::Receipt => "receipt",
            DocumentKind::Barcode => "barcode",
            DocumentKind::Product => "product",
            DocumentKind::Text => "text",
            DocumentKind::Pdf => "pdf",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentKind {
    type Err = DocsiftError;

    fn from_str(s: &str) -> Result<Self> {
        DocumentKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| DocsiftError::Validation(format!("unknown document kind: {}", s)))
    }
}

/// Reject uploads to the PDF handler that are not declared as PDFs.
pub fn validate_pdf_content_type(content_type: Option<&str>) -> Result<()> {
    if content_type == Some(PDF_CONTENT_TYPE) {
        Ok(())
    } else {
        Err(DocsiftError::Validation("File must be a PDF".to_string()))
    }
}

/// Runs document handlers against uploaded bytes.
///
/// Holds no per-request state; one instance is shared by every request.
#[derive(Clone)]
pub struct DocumentProcessor {
    text_extractor: TextExtractor,
    barcode_reader: BarcodeReader,
    decrypt_empty_password: bool,
}

impl DocumentProcessor {
    pub fn new(text_extractor: TextExtractor) -> Self {
        Self {
            text_extractor,
            barcode_reader: BarcodeReader::new(),
            decrypt_empty_password: true,
        }
    }

    /// Select the OCR engine and PDF options described by the configuration.
    pub fn from_config(config: &DocsiftConfig) -> Self {
        let engine = OcrEngine::from_config(&config.ocr);
        let mut processor = Self::new(TextExtractor::new(engine));
        processor.decrypt_empty_password = config.pdf.decrypt_empty_password;
        processor
    }

    /// Whether the primary OCR engine was loaded.
    pub fn ocr_enabled(&self) -> bool {
        self.text_extractor.engine().primary_loaded()
    }

    /// Raw OCR text of an image.
    pub fn extract_text(&self, image_data: &[u8]) -> Result<TextData> {
        let text = self.text_extractor.extract_text(image_data)?;
        Ok(TextData { text })
    }

    /// Invoice fields of an image.
    pub fn extract_invoice_data(&self, image_data: &[u8]) -> Result<InvoiceData> {
        let text = self.text_extractor.extract_text(image_data)?;
        let invoice = invoice_from_text(text, Utc::now());
        info!(
            "Invoice extracted: number={:?}, {} items",
            invoice.invoice_number,
            invoice.items.len()
        );
        Ok(invoice)
    }

    /// Receipt fields of an image.
    pub fn extract_receipt_data(&self, image_data: &[u8]) -> Result<ReceiptData> {
        let text = self.text_extractor.extract_text(image_data)?;
        let receipt = receipt_from_text(text, Utc::now());
        info!(
            "Receipt extracted: number={:?}, {} items",
            receipt.receipt_number,
            receipt.items.len()
        );
        Ok(receipt)
    }

    /// Product catalog fields of an image.
    pub fn extract_product_info(&self, image_data: &[u8]) -> Result<ProductInfo> {
        let text = self.text_extractor.extract_text(image_data)?;
        let product = product_from_text(text, Utc::now());
        info!("Product extracted: sku={:?}", product.sku);
        Ok(product)
    }

    /// First barcode in an image. Never fails; errors are part of the scan.
    pub fn read_barcode(&self, image_data: &[u8]) -> BarcodeScan {
        self.barcode_reader.read(image_data)
    }

    /// Text layer of a PDF, without OCR.
    pub fn process_pdf_document(&self, pdf_data: &[u8]) -> Result<PdfDocument> {
        let mut extractor =
            PdfExtractor::new().with_empty_password_decryption(self.decrypt_empty_password);
        extractor.load(pdf_data)?;
        let content = extractor.extract_all()?;

        info!("PDF processed: {} pages", content.page_count);

        Ok(PdfDocument {
            document_type: "pdf".to_string(),
            page_count: content.page_count,
            total_text: content.text,
            extracted_at: Utc::now(),
        })
    }

    /// Run the handler for `kind` and return its result as JSON.
    pub fn process(&self, kind: DocumentKind, data: &[u8]) -> Result<serde_json::Value> {
        match kind {
            DocumentKind::Invoice => to_json(&self.extract_invoice_data(data)?),
            DocumentKind::Receipt => to_json(&self.extract_receipt_data(data)?),
            DocumentKind::Barcode => to_json(&self.read_barcode(data)),
            DocumentKind::Product => to_json(&self.extract_product_info(data)?),
            DocumentKind::Text => to_json(&self.extract_text(data)?),
            DocumentKind::Pdf => to_json(&self.process_pdf_document(data)?),
        }
    }
}

impl Default for DocumentProcessor {
    fn default() -> Self {
        Self::new(TextExtractor::default())
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<serde_json::Value> {
    Ok(serde_json::to_value(value)?)
}
