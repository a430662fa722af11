//! Uploaded bytes to text.

use tracing::debug;

use crate::error::Result;

use super::OcrEngine;

/// Decodes image bytes and runs the selected OCR engine on them.
#[derive(Clone, Default)]
pub struct TextExtractor {
    engine: OcrEngine,
}

impl TextExtractor {
    pub fn new(engine: OcrEngine) -> Self {
        Self { engine }
    }

    /// The engine behind this extractor.
    pub fn engine(&self) -> &OcrEngine {
        &self.engine
    }

    /// Recognize the text of an encoded image (PNG, JPEG, ...).
    pub fn extract_text(&self, image_data: &[u8]) -> Result<String> {
        let image = image::load_from_memory(image_data)?;
        debug!("Decoded image: {}x{}", image.width(), image.height());

        Ok(self.engine.recognize(&image)?)
    }
}
