//! Text recognition from images.
//!
//! Recognition is delegated to external engines. Each engine is wrapped as a
//! [`TextRecognizer`]; [`OcrEngine`] picks the first available one at startup
//! and [`TextExtractor`] decodes uploaded bytes before handing them over.

mod engine;
mod extractor;
#[cfg(feature = "native")]
mod pure_engine;
mod tesseract;

pub use engine::{OcrEngine, OcrEngineBuilder};
pub use extractor::TextExtractor;
#[cfg(feature = "native")]
pub use pure_engine::PureOcrEngine;
pub use tesseract::TesseractProvider;

use image::DynamicImage;

use crate::error::OcrError;

/// Where a recognizer sits in the fallback order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    /// In-process model loaded at startup.
    Primary,
    /// External engine used when the primary one is missing.
    Fallback,
}

/// A text recognition engine.
pub trait TextRecognizer: Send + Sync {
    /// Short engine name for logs.
    fn name(&self) -> &str;

    /// Position in the fallback order.
    fn kind(&self) -> ProviderKind;

    /// Whether the engine can be used. Checked once, at selection time.
    fn is_available(&self) -> bool {
        true
    }

    /// Recognize all text in the image, one line per detected region.
    fn recognize(&self, image: &DynamicImage) -> Result<String, OcrError>;
}
