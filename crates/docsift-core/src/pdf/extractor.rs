//! PDF text extraction using lopdf and pdf-extract.

use std::panic::{catch_unwind, AssertUnwindSafe};

use lopdf::Document;
use tracing::{debug, warn};

use super::{PdfProcessor, Result};
use crate::error::PdfError;

/// Blank line placed between page texts.
const PAGE_SEPARATOR: &str = "\n\n";

/// PDF text-layer extractor.
pub struct PdfExtractor {
    document: Option<Document>,
    raw_data: Vec<u8>,
    decrypt_empty_password: bool,
}

/// Text content of a PDF.
#[derive(Debug, Clone, PartialEq)]
pub struct PdfContent {
    /// Number of pages in the document.
    pub page_count: u32,
    /// Non-empty page texts joined by a blank line.
    pub text: String,
}

impl PdfExtractor {
    /// Create a new PDF extractor.
    pub fn new() -> Self {
        Self {
            document: None,
            raw_data: Vec::new(),
            decrypt_empty_password: true,
        }
    }

    /// Set whether encrypted PDFs are retried with the empty password.
    pub fn with_empty_password_decryption(mut self, enabled: bool) -> Self {
        self.decrypt_empty_password = enabled;
        self
    }

    /// Decrypt with the empty password and return the decrypted bytes for pdf-extract.
    fn decrypt(&self, doc: &mut Document) -> Result<Vec<u8>> {
        if !self.decrypt_empty_password || doc.decrypt("").is_err() {
            return Err(PdfError::Encrypted);
        }
        debug!("Decrypted PDF with empty password");

        let mut decrypted_data = Vec::new();
        doc.save_to(&mut decrypted_data)
            .map_err(|e| PdfError::Parse(format!("failed to save decrypted PDF: {}", e)))?;
        Ok(decrypted_data)
    }

    /// Extract the page count and combined text of the loaded PDF.
    pub fn extract_all(&self) -> Result<PdfContent> {
        let page_texts = self.extract_page_texts()?;

        let text = page_texts
            .iter()
            .map(|page| page.trim())
            .filter(|page| !page.is_empty())
            .collect::<Vec<_>>()
            .join(PAGE_SEPARATOR);

        let page_count = self.page_count();
        debug!("PDF text: {} pages, {} chars", page_count, text.len());

        Ok(PdfContent { page_count, text })
    }
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfProcessor for PdfExtractor {
    fn load(&mut self, data: &[u8]) -> Result<()> {
        let mut doc = Document::load_mem(data).map_err(|e| PdfError::Parse(e.to_string()))?;

        self.raw_data = if doc.is_encrypted() {
            self.decrypt(&mut doc)?
        } else {
            data.to_vec()
        };

        debug!("Loaded PDF with {} pages", doc.get_pages().len());
        self.document = Some(doc);
        Ok(())
    }

    fn page_count(&self) -> u32 {
        self.document
            .as_ref()
            .map(|doc| doc.get_pages().len() as u32)
            .unwrap_or(0)
    }

    fn extract_page_texts(&self) -> Result<Vec<String>> {
        if self.document.is_none() {
            return Err(PdfError::Parse("no document loaded".to_string()));
        }
        if self.page_count() == 0 {
            return Ok(Vec::new());
        }

        // pdf-extract panics on some malformed content, e.g. unknown font resources
        let extracted = catch_unwind(AssertUnwindSafe(|| {
            pdf_extract::extract_text_from_mem_by_pages(&self.raw_data)
        }));

        match extracted {
            Ok(pages) => pages.map_err(|e| PdfError::TextExtraction(e.to_string())),
            Err(panic) => {
                let message = panic_message(panic.as_ref());
                warn!("PDF text extraction panicked: {}", message);
                Err(PdfError::TextExtraction(message))
            }
        }
    }
}

fn panic_message(panic: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "text extractor panicked".to_string()
    }
}
