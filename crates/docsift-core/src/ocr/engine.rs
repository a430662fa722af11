//! Engine selection: the first available recognizer in priority order.

use std::sync::Arc;

use image::DynamicImage;
use tracing::{debug, info, warn};

use crate::error::OcrError;
use crate::models::config::OcrConfig;

use super::{ProviderKind, TesseractProvider, TextRecognizer};

/// The recognizer chosen at startup. Read-only afterwards.
#[derive(Clone, Default)]
pub struct OcrEngine {
    selected: Option<Arc<dyn TextRecognizer>>,
}

/// Builder for OcrEngine. Candidates are considered in insertion order.
#[derive(Default)]
pub struct OcrEngineBuilder {
    candidates: Vec<Arc<dyn TextRecognizer>>,
}

impl OcrEngineBuilder {
    /// Create a builder with no candidates.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a candidate recognizer after the ones already added.
    pub fn with_provider(mut self, provider: Arc<dyn TextRecognizer>) -> Self {
        self.candidates.push(provider);
        self
    }

    /// Select the first available candidate.
    pub fn build(self) -> OcrEngine {
        let selected = self.candidates.into_iter().find(|candidate| {
            let available = candidate.is_available();
            debug!("OCR candidate {}: available={}", candidate.name(), available);
            available
        });

        match &selected {
            Some(engine) => info!("Using OCR engine: {} ({:?})", engine.name(), engine.kind()),
            None => warn!("No OCR engine available"),
        }

        OcrEngine { selected }
    }
}

impl OcrEngine {
    /// Create a new builder.
    pub fn builder() -> OcrEngineBuilder {
        OcrEngineBuilder::new()
    }

    /// Build the engine described by the configuration.
    ///
    /// A primary model that fails to load is logged and skipped so the
    /// fallback can take over.
    pub fn from_config(config: &OcrConfig) -> Self {
        let mut builder = Self::builder();

        #[cfg(feature = "native")]
        {
            if config.enable_primary {
                match super::PureOcrEngine::from_dir(&config.model_dir, config.keep_unk) {
                    Ok(engine) => builder = builder.with_provider(Arc::new(engine)),
                    Err(e) => warn!(
                        "Primary OCR engine not loaded from {}: {}",
                        config.model_dir.display(),
                        e
                    ),
                }
            }
        }

        if config.enable_fallback {
            builder = builder.with_provider(Arc::new(TesseractProvider::new(
                &config.tesseract_binary,
                &config.language,
            )));
        }

        builder.build()
    }

    /// Whether the in-process primary engine is the one in use.
    pub fn primary_loaded(&self) -> bool {
        self.selected
            .as_ref()
            .is_some_and(|engine| engine.kind() == ProviderKind::Primary)
    }

    /// Name of the engine in use, if any.
    pub fn engine_name(&self) -> Option<&str> {
        self.selected.as_deref().map(|engine| engine.name())
    }

    /// Recognize text with the selected engine.
    pub fn recognize(&self, image: &DynamicImage) -> Result<String, OcrError> {
        let engine = self.selected.as_ref().ok_or(OcrError::Unavailable)?;
        engine.recognize(image)
    }
}
